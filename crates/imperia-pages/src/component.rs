//! Component trait definition.

use crate::view::Page;

/// Trait for screens and reusable view units.
///
/// Components encapsulate state and rendering logic. Rendering is pure with
/// respect to the component's own fields; anything request-scoped (route
/// params, fetched data) is stored on the component at construction time,
/// never read from shared state.
pub trait Component {
	/// Renders the component to a [`Page`].
	fn render(&self) -> Page;

	/// Returns the component's name for logging and diagnostics.
	fn name() -> &'static str
	where
		Self: Sized;
}
