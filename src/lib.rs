//! # Spoke Router
//!
//! Path-based view dispatch and access gating for the Spoke bikes
//! collection app.
//!
//! ## Architecture
//!
//! Two components, composed at startup and immutable afterwards:
//!
//! - **Route Table** ([`table`]) - an ordered set of (path pattern, view,
//!   guarded) bindings; matches a navigation path to exactly one view and
//!   extracts named parameters (`/bikes/:id`).
//! - **Access Guard** ([`guard`]) - wraps guarded bindings; reads the
//!   external [`session::Session`] capability and either admits the view or
//!   signals a redirect to the login entry point.
//!
//! [`dispatch::Router`] ties the two together: a navigation event becomes one
//! synchronous match-and-decide call producing a [`dispatch::Outcome`]
//! (render, redirect, or not-found). Page views and the session provider are
//! external collaborators behind the [`view::View`] and [`session::Session`]
//! traits; the router never inspects view internals and never mutates
//! session state.
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use spoke_router::pattern::PathParams;
//! use spoke_router::prelude::*;
//!
//! struct Page(&'static str);
//!
//! impl View for Page {
//!     fn name(&self) -> &str {
//!         self.0
//!     }
//!     fn render(&self, _params: &PathParams) -> String {
//!         format!("<{}/>", self.0)
//!     }
//! }
//!
//! struct Anonymous;
//!
//! impl Session for Anonymous {
//!     fn is_authenticated(&self) -> bool {
//!         false
//!     }
//! }
//!
//! let router = app_router(AppPages {
//!     home: Arc::new(Page("Home")),
//!     bikes: Arc::new(Page("Bikes")),
//!     bike_details: Arc::new(Page("BikeDetails")),
//!     login: Arc::new(Page("Login")),
//!     signup: Arc::new(Page("Signup")),
//!     add_bike: Arc::new(Page("AddBike")),
//!     edit_bike: Arc::new(Page("EditBike")),
//!     my_collection: Arc::new(Page("MyCollection")),
//! })
//! .expect("route table is valid");
//!
//! // Public route: renders regardless of session state.
//! let outcome = router.dispatch("/bikes/42", &Anonymous);
//! assert_eq!(outcome.view_name(), Some("BikeDetails"));
//!
//! // Guarded route: anonymous sessions land on the login view.
//! let outcome = router.dispatch("/my-collection", &Anonymous);
//! assert_eq!(outcome.redirect_target(), Some("/login"));
//! ```
//!
//! ## Error handling
//!
//! Only configuration can fail: malformed, duplicate, or structurally
//! conflicting patterns surface as [`error::RouterError`] at registration,
//! before any navigation is served. Dispatch itself is total.

pub mod dispatch;
pub mod error;
pub mod guard;
pub mod path;
pub mod pattern;
pub mod routes;
pub mod session;
pub mod table;
pub mod view;

pub use error::RouterError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::dispatch::{Outcome, Router};
    pub use crate::error::RouterError;
    pub use crate::guard::{Access, AccessGuard, DEFAULT_LOGIN_PATH};
    pub use crate::pattern::PathParams;
    pub use crate::routes::{AppPages, app_router};
    pub use crate::session::Session;
    pub use crate::table::{RouteBinding, RouteInfo, RouteTable};
    pub use crate::view::View;
}
