//! Navigation dispatch: one synchronous match-and-render decision.

use std::fmt;
use std::sync::Arc;

use crate::guard::{Access, AccessGuard};
use crate::pattern::PathParams;
use crate::session::Session;
use crate::table::RouteTable;
use crate::view::View;

/// Result of dispatching one navigation path.
pub enum Outcome {
    /// A binding matched and may render; parameters are those extracted from
    /// the path, unchanged by the guard.
    Render {
        view: Arc<dyn View>,
        params: PathParams,
    },
    /// A guarded binding matched but the session is not authenticated.
    /// The wrapped view is never rendered; in-flight parameters are dropped.
    Redirect { to: String },
    /// No binding matched. Not an error: the embedding shell renders its own
    /// fallback (e.g. a 404 view).
    NotFound,
}

impl Outcome {
    /// The matched view's name, when this outcome renders.
    pub fn view_name(&self) -> Option<&str> {
        match self {
            Outcome::Render { view, .. } => Some(view.name()),
            _ => None,
        }
    }

    /// The redirect target, when this outcome redirects.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Outcome::Redirect { to } => Some(to),
            _ => None,
        }
    }

    /// True when no binding matched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound)
    }
}

// Manual impl because `dyn View` is deliberately opaque; the name is the only
// thing worth printing.
impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Render { view, params } => f
                .debug_struct("Render")
                .field("view", &view.name())
                .field("params", params)
                .finish(),
            Outcome::Redirect { to } => f.debug_struct("Redirect").field("to", to).finish(),
            Outcome::NotFound => f.write_str("NotFound"),
        }
    }
}

/// Route table plus access guard: the single entry point for navigation
/// events.
///
/// Dispatch is synchronous and touches no shared mutable state; the only
/// external read is the session capability passed in per call. Navigation
/// events are therefore trivially processed in the order they occur, and
/// "cancelling" a navigation is simply dispatching the next one.
pub struct Router {
    table: RouteTable,
    guard: AccessGuard,
}

impl Router {
    /// Assembles a router from a populated table and a guard.
    pub fn new(table: RouteTable, guard: AccessGuard) -> Self {
        Self { table, guard }
    }

    /// Dispatches one navigation path.
    ///
    /// Matching order is registration order, first match wins. A guarded
    /// match consults `session` before rendering; unguarded matches render
    /// regardless of session state.
    pub fn dispatch(&self, path: &str, session: &dyn Session) -> Outcome {
        let Some((binding, params)) = self.table.resolve(path) else {
            tracing::debug!(%path, "no route matched");
            return Outcome::NotFound;
        };

        if binding.is_guarded() {
            if let Access::Redirect(to) = self.guard.check(session) {
                tracing::debug!(
                    %path,
                    pattern = binding.pattern().as_str(),
                    redirect = %to,
                    "guarded route, session not authenticated"
                );
                return Outcome::Redirect { to };
            }
        }

        tracing::debug!(
            %path,
            pattern = binding.pattern().as_str(),
            view = binding.view().name(),
            "dispatched"
        );

        Outcome::Render {
            view: Arc::clone(binding.view()),
            params,
        }
    }

    /// The underlying route table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The access guard applied to guarded bindings.
    pub fn guard(&self) -> &AccessGuard {
        &self.guard
    }
}
