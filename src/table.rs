//! The route table: ordered bindings from path patterns to views.

use std::sync::Arc;

use serde::Serialize;

use crate::error::RouterError;
use crate::path;
use crate::pattern::{PathParams, PathPattern};
use crate::view::View;

/// A single (pattern, view, guarded) binding.
///
/// Immutable once registered; the full set is fixed at startup.
pub struct RouteBinding {
    pattern: PathPattern,
    view: Arc<dyn View>,
    guarded: bool,
}

impl RouteBinding {
    /// The binding's parsed pattern.
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// The bound view.
    pub fn view(&self) -> &Arc<dyn View> {
        &self.view
    }

    /// Whether this binding sits behind the access guard.
    pub fn is_guarded(&self) -> bool {
        self.guarded
    }
}

/// Summary of a registered binding for diagnostics and introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub pattern: String,
    pub view: String,
    pub guarded: bool,
}

/// Ordered set of route bindings with first-match-wins resolution.
///
/// Registration order is matching order. The table validates at registration
/// time that no two patterns are identical or structurally ambiguous, so for
/// any input path at most one binding can match.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use spoke_router::pattern::PathParams;
/// use spoke_router::table::RouteTable;
/// use spoke_router::view::View;
///
/// struct Page(&'static str);
///
/// impl View for Page {
///     fn name(&self) -> &str {
///         self.0
///     }
///     fn render(&self, _params: &PathParams) -> String {
///         format!("<{}/>", self.0)
///     }
/// }
///
/// let mut table = RouteTable::new();
/// table.register("/bikes/:id", Arc::new(Page("BikeDetails")), false).unwrap();
///
/// let (binding, params) = table.resolve("/bikes/42").unwrap();
/// assert_eq!(binding.view().name(), "BikeDetails");
/// assert_eq!(params.get("id"), Some("42"));
/// ```
#[derive(Default)]
pub struct RouteTable {
    bindings: Vec<RouteBinding>,
}

impl RouteTable {
    /// Creates an empty route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a binding at the end of the table.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPattern`] if the pattern is malformed,
    /// [`RouterError::DuplicatePattern`] if the exact pattern is already
    /// registered, and [`RouterError::ConflictingPattern`] if an existing
    /// pattern has the same structural shape (e.g. `/bikes/:id` vs
    /// `/bikes/:slug`). All three are fatal configuration errors meant to be
    /// surfaced at startup.
    pub fn register(
        &mut self,
        pattern: &str,
        view: Arc<dyn View>,
        guarded: bool,
    ) -> Result<(), RouterError> {
        let parsed = PathPattern::parse(pattern)?;

        for existing in &self.bindings {
            if existing.pattern.as_str() == parsed.as_str() {
                return Err(RouterError::DuplicatePattern {
                    pattern: parsed.as_str().to_string(),
                });
            }
            if existing.pattern.shape() == parsed.shape() {
                return Err(RouterError::ConflictingPattern {
                    pattern: parsed.as_str().to_string(),
                    existing: existing.pattern.as_str().to_string(),
                });
            }
        }

        tracing::debug!(
            pattern = %parsed.as_str(),
            view = view.name(),
            guarded,
            "route registered"
        );

        self.bindings.push(RouteBinding {
            pattern: parsed,
            view,
            guarded,
        });

        Ok(())
    }

    /// Matches a navigation path against the table.
    ///
    /// The path is normalized first (trailing and repeated slashes, empty
    /// path as `/`), then checked against bindings in registration order.
    /// Returns the first matching binding with its extracted parameters, or
    /// `None` when nothing matches.
    pub fn resolve(&self, raw_path: &str) -> Option<(&RouteBinding, PathParams)> {
        let normalized = path::normalize(raw_path);

        self.bindings
            .iter()
            .find_map(|binding| binding.pattern.matches(&normalized).map(|p| (binding, p)))
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when no bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Snapshot of all registered bindings, in matching order.
    pub fn route_info(&self) -> Vec<RouteInfo> {
        self.bindings
            .iter()
            .map(|b| RouteInfo {
                pattern: b.pattern.as_str().to_string(),
                view: b.view.name().to_string(),
                guarded: b.guarded,
            })
            .collect()
    }
}
