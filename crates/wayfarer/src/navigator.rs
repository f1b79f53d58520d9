//! A minimal navigation controller over an immutable route table.
//!
//! Browser history integration (pushState, popstate) lives outside this
//! crate; callers feed observed path changes in through
//! [`Navigator::navigate`] and mount the returned views themselves.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::NavigationError;
use crate::table::{RouteMatch, RouteTable};

/// Resolves path changes against a registered route table.
///
/// The table is registered once and never replaced. The only mutable state
/// is the current path, so a navigator can be shared freely across threads
/// for `V: Send + Sync`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use wayfarer::{Navigator, Route, RouteGroup, RouteTable};
///
/// let table = RouteTable::builder()
/// 	.group(
/// 		RouteGroup::new("/", "layout")
/// 			.route(Route::named("home", "", "home-view"))
/// 			.route(Route::named("about", "/about", "about-view")),
/// 	)
/// 	.build()
/// 	.unwrap();
///
/// let navigator = Navigator::register(Arc::new(table));
/// let matched = navigator.navigate("/about").unwrap();
/// assert_eq!(matched.view, &"about-view");
/// assert_eq!(navigator.current_path(), "/about");
/// ```
#[derive(Debug)]
pub struct Navigator<V> {
	table: Arc<RouteTable<V>>,
	current: RwLock<String>,
}

impl<V> Navigator<V> {
	/// Registers a built route table. The initial path is `/`.
	pub fn register(table: Arc<RouteTable<V>>) -> Self {
		Self {
			table,
			current: RwLock::new("/".to_string()),
		}
	}

	/// Returns the registered table.
	pub fn table(&self) -> &RouteTable<V> {
		&self.table
	}

	/// Returns the current path.
	pub fn current_path(&self) -> String {
		self.current.read().clone()
	}

	/// Resolves `path` and records it as the current path.
	///
	/// An unmatched path leaves the current path unchanged: nothing was
	/// mounted, so the navigator still points at the last resolved view.
	pub fn navigate(&self, path: &str) -> Result<RouteMatch<'_, V>, NavigationError> {
		let Some(matched) = self.table.resolve(path) else {
			tracing::warn!(path = %path, "navigation target did not match any route");
			return Err(NavigationError::NotFound(path.to_string()));
		};

		*self.current.write() = path.to_string();
		tracing::debug!(
			path = %path,
			route = matched.name.unwrap_or("<unnamed>"),
			"navigated"
		);
		Ok(matched)
	}

	/// Resolves the current path to a view, falling back to the table's
	/// `not_found` view when no route matches.
	pub fn current_view(&self) -> Option<&V> {
		let path = self.current_path();
		match self.table.resolve(&path) {
			Some(matched) => Some(matched.view),
			None => self.table.not_found(),
		}
	}
}
