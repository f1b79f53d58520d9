//! Leaf route definitions.

/// A binding from a URL path to a view reference.
///
/// The view type `V` is opaque to the routing layer: the table stores it and
/// hands references back on resolution, but never invokes it or manages its
/// lifetime.
///
/// Inside a [`RouteGroup`](crate::RouteGroup), the path is interpreted
/// relative to the group:
/// - `""` denotes the group's own prefix (the default child)
/// - a path starting with `/` is root-absolute and used as-is
/// - anything else nests under the group prefix
///
/// # Examples
///
/// ```
/// use wayfarer::Route;
///
/// let route = Route::named("about", "/about", "about-view");
/// assert_eq!(route.name(), Some("about"));
/// assert_eq!(route.path(), "/about");
/// assert_eq!(route.view(), &"about-view");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
	path: String,
	name: Option<String>,
	view: V,
}

impl<V> Route<V> {
	/// Creates an unnamed route.
	///
	/// Unnamed routes resolve normally but cannot be reverse-looked-up.
	pub fn new(path: impl Into<String>, view: V) -> Self {
		Self {
			path: path.into(),
			name: None,
			view,
		}
	}

	/// Creates a named route.
	///
	/// Names must be unique across the whole table; duplicates are rejected
	/// when the table is built.
	pub fn named(name: impl Into<String>, path: impl Into<String>, view: V) -> Self {
		Self {
			path: path.into(),
			name: Some(name.into()),
			view,
		}
	}

	/// Sets the name of the route.
	///
	/// # Examples
	///
	/// ```
	/// use wayfarer::Route;
	///
	/// let route = Route::new("/about", "about-view").with_name("about");
	/// assert_eq!(route.name(), Some("about"));
	/// ```
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Returns the route name.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns the declared (unjoined) path.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Returns the view reference.
	pub fn view(&self) -> &V {
		&self.view
	}

	pub(crate) fn into_parts(self) -> (String, Option<String>, V) {
		(self.path, self.name, self.view)
	}
}
