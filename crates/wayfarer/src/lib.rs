//! # Wayfarer
//!
//! Declarative client-side route tables for single-page applications.
//!
//! A route table maps URL paths to opaque view references, optionally nested
//! under shared layout views. The table is built once at application start,
//! validated eagerly, and handed to a navigation controller that resolves
//! every subsequent URL change against it:
//!
//! - **Declarative construction**: routes and groups are plain values
//!   assembled with a builder.
//! - **Fail-fast validation**: duplicate route names, malformed path
//!   patterns, and empty groups abort [`RouteTableBuilder::build`] with an
//!   error naming the offending entry.
//! - **Ordered resolution**: first structural match wins; nested groups
//!   contribute their layouts outermost-first.
//! - **Reverse lookup**: named routes generate URLs from parameters.
//!
//! The view type is a caller-chosen generic: the table stores view
//! references and returns them on resolution, but never renders them or
//! manages their lifetime.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use wayfarer::{Navigator, Route, RouteGroup, RouteTable};
//!
//! let table = RouteTable::builder()
//! 	.group(
//! 		RouteGroup::new("/", "default-layout")
//! 			.route(Route::named("home", "", "home-view"))
//! 			.route(Route::named("about", "/about", "about-view"))
//! 			.route(Route::named("newEvent", "/newEvent", "new-event-view")),
//! 	)
//! 	.build()?;
//!
//! let matched = table.resolve("/newEvent").unwrap();
//! assert_eq!(matched.view, &"new-event-view");
//! assert_eq!(matched.layouts, vec![&"default-layout"]);
//!
//! let navigator = Navigator::register(Arc::new(table));
//! assert!(navigator.navigate("/about").is_ok());
//! assert!(navigator.navigate("/unknown").is_err());
//! # Ok::<(), wayfarer::TableError>(())
//! ```
//!
//! ## Path parameters
//!
//! ```
//! use wayfarer::{Route, RouteTable};
//!
//! let table = RouteTable::builder()
//! 	.route(Route::named("event-detail", "/events/{id}", "detail-view"))
//! 	.build()?;
//!
//! let matched = table.resolve("/events/42").unwrap();
//! assert_eq!(matched.params.parse::<i64>("id")?, 42);
//!
//! assert_eq!(table.reverse("event-detail", &[("id", "7")])?, "/events/7");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod navigator;
pub mod params;
pub mod pattern;
pub mod route;
pub mod route_group;
pub mod table;

pub use error::{NavigationError, ParamError, PatternError, TableError};
pub use navigator::Navigator;
pub use params::{FromParam, PathParams};
pub use pattern::PathPattern;
pub use route::Route;
pub use route_group::{RouteEntry, RouteGroup};
pub use table::{RouteMatch, RouteTable, RouteTableBuilder};
