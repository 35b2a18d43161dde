//! Access guard for authentication-gated routes.
//!
//! Wraps a guarded binding's render decision: an authenticated session is
//! admitted transparently, an unauthenticated one is sent to the login entry
//! point. Unlike an API-style `401 Unauthorized`, landing on the login view
//! is the better experience for in-app navigation, so unauthenticated access
//! is a defined transition here, never a failure.

use crate::session::Session;

/// Default redirect target for unauthenticated access to guarded routes.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Outcome of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Session is authenticated; render the wrapped view, parameters pass
    /// through unchanged.
    Granted,
    /// Session is not authenticated; navigate to the contained login path
    /// instead. In-flight path parameters are discarded.
    Redirect(String),
}

/// Decides whether a guarded view may render.
///
/// Pure and synchronous: exactly two outcomes, no retries, and the session
/// state is only read, never mutated.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    login_path: String,
}

impl Default for AccessGuard {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_PATH)
    }
}

impl AccessGuard {
    /// Creates a guard redirecting unauthenticated access to `login_path`.
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
        }
    }

    /// The configured login redirect target.
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Checks the session and decides between render and redirect.
    pub fn check(&self, session: &dyn Session) -> Access {
        if session.is_authenticated() {
            Access::Granted
        } else {
            tracing::debug!(login_path = %self.login_path, "unauthenticated, redirecting");
            Access::Redirect(self.login_path.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MockSession;

    #[test]
    fn test_authenticated_session_is_granted() {
        let mut session = MockSession::new();
        session.expect_is_authenticated().return_const(true);

        let guard = AccessGuard::default();

        assert_eq!(guard.check(&session), Access::Granted);
    }

    #[test]
    fn test_unauthenticated_session_redirects_to_login() {
        let mut session = MockSession::new();
        session.expect_is_authenticated().return_const(false);

        let guard = AccessGuard::default();

        assert_eq!(
            guard.check(&session),
            Access::Redirect(DEFAULT_LOGIN_PATH.to_string())
        );
    }

    #[test]
    fn test_custom_login_path() {
        let mut session = MockSession::new();
        session.expect_is_authenticated().return_const(false);

        let guard = AccessGuard::new("/auth/sign-in");

        assert_eq!(
            guard.check(&session),
            Access::Redirect("/auth/sign-in".to_string())
        );
    }

    #[test]
    fn test_check_only_reads_session() {
        // The mock would panic on any call other than is_authenticated.
        let mut session = MockSession::new();
        session.expect_is_authenticated().times(2).return_const(true);

        let guard = AccessGuard::default();
        guard.check(&session);
        guard.check(&session);
    }
}
