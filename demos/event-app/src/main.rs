//! Route declaration for the event application.
//!
//! Three named routes nested under one shared layout, built once at startup
//! and registered with the navigator.

use std::sync::Arc;

use wayfarer::{Navigator, Route, RouteGroup, RouteTable, TableError};

mod views;

use views::View;

fn routes() -> Result<RouteTable<View>, TableError> {
	RouteTable::builder()
		.group(
			RouteGroup::new("/", View::DefaultLayout)
				.route(Route::named("home", "", View::Home))
				.route(Route::named("about", "/about", View::About))
				.route(Route::named("newEvent", "/newEvent", View::NewEvent)),
		)
		.build()
}

fn main() -> Result<(), TableError> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.init();

	// A bad table aborts startup here; there is no runtime recovery path.
	let table = Arc::new(routes()?);
	tracing::info!(routes = table.route_count(), "event app routes registered");
	let navigator = Navigator::register(table);

	for path in ["/", "/about", "/newEvent", "/unknown"] {
		match navigator.navigate(path) {
			Ok(matched) => {
				let layouts: Vec<&str> =
					matched.layouts.iter().map(|layout| layout.render()).collect();
				println!(
					"{path} -> {} {}",
					layouts.join(" > "),
					matched.view.render()
				);
			}
			Err(err) => println!("{path} -> {err}"),
		}
	}

	Ok(())
}
