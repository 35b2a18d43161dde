//! The opaque renderable unit bound to a route.

use crate::pattern::PathParams;

/// A renderable page bound into the route table.
///
/// Views are external collaborators: the router hands over the extracted path
/// parameters and otherwise never inspects what a view does. Implementations
/// live in the embedding application (page components), not in this crate.
///
/// # Implementations
///
/// - Application page components (Home, Bikes, BikeDetails, ...)
/// - Test stubs and mocks (`MockView` with `cfg(test)`)
#[cfg_attr(test, mockall::automock)]
pub trait View: Send + Sync {
    /// Stable view name used in logs and diagnostics, e.g. `"BikeDetails"`.
    fn name(&self) -> &str;

    /// Produces the view's visible output for the given path parameters.
    ///
    /// Parameters are exactly those extracted at dispatch time; for routes
    /// without parameter segments the map is empty.
    fn render(&self, params: &PathParams) -> String;
}
