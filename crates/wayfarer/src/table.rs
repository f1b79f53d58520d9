//! Route table construction, validation, and resolution.
//!
//! A table is built once at application start and never mutated afterwards.
//! All configuration defects surface from [`RouteTableBuilder::build`] so a
//! bad table aborts initialization instead of misrouting at runtime.

use std::collections::HashMap;

use crate::error::{NavigationError, TableError};
use crate::params::PathParams;
use crate::pattern::PathPattern;
use crate::route::Route;
use crate::route_group::{RouteEntry, RouteGroup};

/// A leaf route compiled against its full joined path.
#[derive(Debug, Clone)]
struct CompiledRoute<V> {
	pattern: PathPattern,
	name: Option<String>,
	view: V,
	/// Indices into the layout store, outermost first.
	layouts: Vec<usize>,
}

/// An immutable, ordered table of compiled routes.
///
/// Resolution scans routes in declaration order; the first pattern match
/// wins. The table is `Send + Sync` for `V: Send + Sync` and may be read
/// concurrently without synchronization.
///
/// # Examples
///
/// ```
/// use wayfarer::{Route, RouteGroup, RouteTable};
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
/// let matched = table.resolve("/about").unwrap();
/// assert_eq!(matched.view, &"about-view");
/// assert_eq!(matched.layouts, vec![&"layout"]);
/// assert_eq!(matched.name, Some("about"));
/// assert!(table.resolve("/unknown").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
	routes: Vec<CompiledRoute<V>>,
	layouts: Vec<V>,
	named: HashMap<String, usize>,
	not_found: Option<V>,
}

/// The result of resolving a URL path against a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a, V> {
	/// The matched leaf view.
	pub view: &'a V,
	/// Ancestor layouts, outermost first.
	pub layouts: Vec<&'a V>,
	/// The route name, if the route was declared with one.
	pub name: Option<&'a str>,
	/// Parameters extracted from the path.
	pub params: PathParams,
}

impl<V> RouteTable<V> {
	/// Starts building a table.
	pub fn builder() -> RouteTableBuilder<V> {
		RouteTableBuilder::new()
	}

	/// Resolves a URL path to the first matching route.
	///
	/// Returns `None` when nothing matches; a fallback registered with
	/// [`RouteTableBuilder::not_found`] is deliberately not consulted here.
	pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_, V>> {
		for route in &self.routes {
			if let Some(params) = route.pattern.matches(path) {
				return Some(RouteMatch {
					view: &route.view,
					layouts: route.layouts.iter().map(|&i| &self.layouts[i]).collect(),
					name: route.name.as_deref(),
					params,
				});
			}
		}
		None
	}

	/// Generates a URL for a named route.
	///
	/// # Errors
	///
	/// Returns [`NavigationError::UnknownName`] for an unregistered name and
	/// [`NavigationError::MissingParam`] when `params` lacks a parameter the
	/// pattern requires.
	pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String, NavigationError> {
		let index = self
			.named
			.get(name)
			.ok_or_else(|| NavigationError::UnknownName(name.to_string()))?;
		let route = &self.routes[*index];

		let map: HashMap<String, String> = params
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();

		match route.pattern.reverse(&map) {
			Some(url) => Ok(url),
			None => {
				let param = route
					.pattern
					.param_names()
					.iter()
					.find(|n| !map.contains_key(n.as_str()))
					.cloned()
					.unwrap_or_default();
				Err(NavigationError::MissingParam {
					name: name.to_string(),
					param,
				})
			}
		}
	}

	/// Returns whether a route name is registered.
	pub fn has_route(&self, name: &str) -> bool {
		self.named.contains_key(name)
	}

	/// Returns the number of compiled leaf routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	/// Iterates over registered route names.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.named.keys().map(String::as_str)
	}

	/// Returns the fallback view, if one was registered.
	pub fn not_found(&self) -> Option<&V> {
		self.not_found.as_ref()
	}
}

/// Accumulates entries and validates them into an immutable [`RouteTable`].
///
/// `build` fails fast on configuration defects: duplicate route names,
/// malformed path patterns, and groups with no children.
#[derive(Debug, Clone)]
pub struct RouteTableBuilder<V> {
	entries: Vec<RouteEntry<V>>,
	not_found: Option<V>,
}

impl<V> RouteTableBuilder<V> {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
			not_found: None,
		}
	}

	/// Appends a top-level route.
	pub fn route(mut self, route: Route<V>) -> Self {
		self.entries.push(RouteEntry::Route(route));
		self
	}

	/// Appends a top-level group.
	pub fn group(mut self, group: RouteGroup<V>) -> Self {
		self.entries.push(RouteEntry::Group(group));
		self
	}

	/// Registers a fallback view for unmatched paths.
	///
	/// The fallback never participates in [`RouteTable::resolve`]; it is
	/// surfaced through [`RouteTable::not_found`] and the navigator.
	pub fn not_found(mut self, view: V) -> Self {
		self.not_found = Some(view);
		self
	}

	/// Compiles and validates the accumulated entries.
	///
	/// # Errors
	///
	/// Returns a [`TableError`] naming the offending entry on the first
	/// configuration defect encountered, in declaration order.
	pub fn build(self) -> Result<RouteTable<V>, TableError> {
		let mut table = RouteTable {
			routes: Vec::new(),
			layouts: Vec::new(),
			named: HashMap::new(),
			not_found: self.not_found,
		};
		let mut seen_paths: HashMap<String, usize> = HashMap::new();

		for entry in self.entries {
			compile_entry(&mut table, &mut seen_paths, entry, "", &[])?;
		}

		tracing::debug!(
			routes = table.routes.len(),
			named = table.named.len(),
			"route table built"
		);
		Ok(table)
	}
}

impl<V> Default for RouteTableBuilder<V> {
	fn default() -> Self {
		Self::new()
	}
}

fn compile_entry<V>(
	table: &mut RouteTable<V>,
	seen_paths: &mut HashMap<String, usize>,
	entry: RouteEntry<V>,
	prefix: &str,
	layouts: &[usize],
) -> Result<(), TableError> {
	match entry {
		RouteEntry::Route(route) => {
			let (path, name, view) = route.into_parts();
			let full = join_paths(prefix, &path);
			let pattern =
				PathPattern::new(&full).map_err(|source| TableError::InvalidPattern {
					path: full.clone(),
					source,
				})?;

			if let Some(name) = &name {
				if let Some(&existing) = table.named.get(name) {
					return Err(TableError::DuplicateName {
						name: name.clone(),
						first: table.routes[existing].pattern.pattern().to_string(),
						second: full,
					});
				}
			}

			// First match wins, so a repeated path leaves this route dead.
			if let Some(&first) = seen_paths.get(&full) {
				tracing::warn!(
					path = %full,
					shadowed_by = %table.routes[first].pattern,
					"route is unreachable: an earlier route matches the same path"
				);
			} else {
				seen_paths.insert(full.clone(), table.routes.len());
			}

			let index = table.routes.len();
			if let Some(name) = &name {
				table.named.insert(name.clone(), index);
			}
			table.routes.push(CompiledRoute {
				pattern,
				name,
				view,
				layouts: layouts.to_vec(),
			});
			Ok(())
		}
		RouteEntry::Group(group) => {
			if group.children().is_empty() {
				return Err(TableError::EmptyGroup(group.prefix().to_string()));
			}

			let (group_prefix, layout, children) = group.into_parts();
			let child_prefix = join_paths(prefix, &group_prefix);

			let layout_index = table.layouts.len();
			table.layouts.push(layout);

			let mut child_layouts = layouts.to_vec();
			child_layouts.push(layout_index);

			for child in children {
				compile_entry(table, seen_paths, child, &child_prefix, &child_layouts)?;
			}
			Ok(())
		}
	}
}

/// Joins a group prefix and a child path.
///
/// An empty child denotes the prefix itself (the default child); a leading
/// `/` makes the child root-absolute; anything else nests under the prefix.
fn join_paths(prefix: &str, child: &str) -> String {
	if child.is_empty() {
		if prefix.is_empty() {
			"/".to_string()
		} else {
			prefix.to_string()
		}
	} else if child.starts_with('/') {
		child.to_string()
	} else if prefix.ends_with('/') {
		format!("{}{}", prefix, child)
	} else {
		format!("{}/{}", prefix, child)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/", "", "/")]
	#[case("/", "about", "/about")]
	#[case("/", "/about", "/about")]
	#[case("", "about", "/about")]
	#[case("", "", "/")]
	#[case("/admin", "users", "/admin/users")]
	#[case("/admin", "", "/admin")]
	#[case("/admin", "/top", "/top")]
	fn test_join_paths(#[case] prefix: &str, #[case] child: &str, #[case] expected: &str) {
		assert_eq!(join_paths(prefix, child), expected);
	}

	#[rstest]
	fn test_build_flat_routes() {
		let table = RouteTable::builder()
			.route(Route::named("home", "/", "home-view"))
			.route(Route::named("about", "/about", "about-view"))
			.build()
			.unwrap();

		assert_eq!(table.route_count(), 2);
		assert!(table.has_route("home"));
		assert!(table.has_route("about"));
		assert!(!table.has_route("newEvent"));
	}

	#[rstest]
	fn test_resolve_without_group_has_no_layouts() {
		let table = RouteTable::builder()
			.route(Route::named("home", "/", "home-view"))
			.build()
			.unwrap();

		let matched = table.resolve("/").unwrap();
		assert!(matched.layouts.is_empty());
		assert_eq!(matched.view, &"home-view");
	}

	#[rstest]
	fn test_first_match_wins() {
		let table = RouteTable::builder()
			.route(Route::named("detail", "/events/{id}", "detail-view"))
			.route(Route::named("create", "/events/new", "create-view"))
			.build()
			.unwrap();

		// `/events/new` also matches `{id}`, and declaration order decides.
		let matched = table.resolve("/events/new").unwrap();
		assert_eq!(matched.name, Some("detail"));
	}

	#[rstest]
	fn test_duplicate_name_fails_build() {
		let err = RouteTable::builder()
			.route(Route::named("home", "/", "home-view"))
			.route(Route::named("home", "/start", "start-view"))
			.build()
			.unwrap_err();

		assert_eq!(
			err,
			TableError::DuplicateName {
				name: "home".to_string(),
				first: "/".to_string(),
				second: "/start".to_string(),
			}
		);
	}

	#[rstest]
	fn test_invalid_pattern_fails_build_naming_path() {
		let err = RouteTable::builder()
			.route(Route::new("/events/{id", "detail-view"))
			.build()
			.unwrap_err();

		assert!(matches!(
			err,
			TableError::InvalidPattern { ref path, .. } if path == "/events/{id"
		));
	}

	#[rstest]
	fn test_empty_group_fails_build() {
		let err = RouteTable::builder()
			.group(RouteGroup::new("/", "layout"))
			.build()
			.unwrap_err();

		assert_eq!(err, TableError::EmptyGroup("/".to_string()));
	}

	#[rstest]
	fn test_shadowed_route_still_builds() {
		let table = RouteTable::builder()
			.route(Route::named("home", "/", "home-view"))
			.route(Route::named("other", "/", "other-view"))
			.build()
			.unwrap();

		// Both compiled; resolution always lands on the first.
		assert_eq!(table.route_count(), 2);
		assert_eq!(table.resolve("/").unwrap().name, Some("home"));
	}

	#[rstest]
	fn test_nested_groups_accumulate_layouts() {
		let table = RouteTable::builder()
			.group(
				RouteGroup::new("/", "outer-layout").nest(
					RouteGroup::new("admin", "inner-layout")
						.route(Route::named("admin-home", "", "admin-view")),
				),
			)
			.build()
			.unwrap();

		let matched = table.resolve("/admin").unwrap();
		assert_eq!(matched.layouts, vec![&"outer-layout", &"inner-layout"]);
		assert_eq!(matched.view, &"admin-view");
	}

	#[rstest]
	fn test_reverse_named_route() {
		let table = RouteTable::builder()
			.route(Route::named("about", "/about", "about-view"))
			.route(Route::named("detail", "/events/{id}", "detail-view"))
			.build()
			.unwrap();

		assert_eq!(table.reverse("about", &[]).unwrap(), "/about");
		assert_eq!(
			table.reverse("detail", &[("id", "42")]).unwrap(),
			"/events/42"
		);
	}

	#[rstest]
	fn test_reverse_unknown_name() {
		let table = RouteTable::builder()
			.route(Route::named("home", "/", "home-view"))
			.build()
			.unwrap();

		assert_eq!(
			table.reverse("nowhere", &[]),
			Err(NavigationError::UnknownName("nowhere".to_string()))
		);
	}

	#[rstest]
	fn test_reverse_missing_param() {
		let table = RouteTable::builder()
			.route(Route::named("detail", "/events/{id}", "detail-view"))
			.build()
			.unwrap();

		assert_eq!(
			table.reverse("detail", &[]),
			Err(NavigationError::MissingParam {
				name: "detail".to_string(),
				param: "id".to_string(),
			})
		);
	}

	#[rstest]
	fn test_not_found_fallback_is_separate_from_resolve() {
		let table = RouteTable::builder()
			.route(Route::named("home", "/", "home-view"))
			.not_found("missing-view")
			.build()
			.unwrap();

		assert!(table.resolve("/unknown").is_none());
		assert_eq!(table.not_found(), Some(&"missing-view"));
	}

	#[rstest]
	fn test_param_extraction_through_table() {
		let table = RouteTable::builder()
			.route(Route::named("detail", "/events/{id}", "detail-view"))
			.build()
			.unwrap();

		let matched = table.resolve("/events/42").unwrap();
		assert_eq!(matched.params.parse::<i64>("id").unwrap(), 42);
	}
}
