//! Route groups: a shared layout wrapped around ordered children.

use crate::route::Route;

/// An entry owned by a group or a table: a leaf route or a nested group.
#[derive(Debug, Clone)]
pub enum RouteEntry<V> {
	Route(Route<V>),
	Group(RouteGroup<V>),
}

/// A prefix path with a layout view applied to every descendant.
///
/// A group has no name and never resolves on its own; it contributes its
/// layout to the ancestor chain of each child. Groups nest, and layouts
/// accumulate outermost-first.
///
/// # Examples
///
/// ```
/// use wayfarer::{Route, RouteGroup};
///
/// let group = RouteGroup::new("/", "layout")
/// 	.route(Route::named("home", "", "home-view"))
/// 	.route(Route::named("about", "/about", "about-view"));
///
/// assert_eq!(group.prefix(), "/");
/// assert_eq!(group.children().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RouteGroup<V> {
	prefix: String,
	layout: V,
	children: Vec<RouteEntry<V>>,
}

impl<V> RouteGroup<V> {
	/// Creates an empty group with a prefix and a layout view.
	pub fn new(prefix: impl Into<String>, layout: V) -> Self {
		Self {
			prefix: prefix.into(),
			layout,
			children: Vec::new(),
		}
	}

	/// Appends a child route. Order is preserved; earlier children win
	/// when patterns overlap.
	pub fn route(mut self, route: Route<V>) -> Self {
		self.children.push(RouteEntry::Route(route));
		self
	}

	/// Appends a nested child group.
	///
	/// # Examples
	///
	/// ```
	/// use wayfarer::{Route, RouteGroup};
	///
	/// let admin = RouteGroup::new("admin", "admin-layout")
	/// 	.route(Route::named("admin-home", "", "admin-home-view"));
	///
	/// let group = RouteGroup::new("/", "layout").nest(admin);
	/// assert_eq!(group.children().len(), 1);
	/// ```
	pub fn nest(mut self, group: RouteGroup<V>) -> Self {
		self.children.push(RouteEntry::Group(group));
		self
	}

	/// Returns the declared (unjoined) prefix.
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Returns the layout view reference.
	pub fn layout(&self) -> &V {
		&self.layout
	}

	/// Returns the child entries in declaration order.
	pub fn children(&self) -> &[RouteEntry<V>] {
		&self.children
	}

	pub(crate) fn into_parts(self) -> (String, V, Vec<RouteEntry<V>>) {
		(self.prefix, self.layout, self.children)
	}
}
