//! Stub views for the event application.
//!
//! The routing layer never looks inside these; it only stores and returns
//! them. Rendering here is a placeholder for a real component tree.

/// Renderable views of the event application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
	DefaultLayout,
	Home,
	About,
	NewEvent,
}

impl View {
	/// Renders the view as a placeholder string.
	pub fn render(&self) -> &'static str {
		match self {
			View::DefaultLayout => "<layout>",
			View::Home => "Welcome home",
			View::About => "About us",
			View::NewEvent => "Create a new event",
		}
	}
}
