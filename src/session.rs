//! The external session capability read by the access guard.

/// Read-only view of the current session's authentication state.
///
/// Owned and kept consistent by an external auth/session collaborator; the
/// router only ever reads it. Passing the capability explicitly into dispatch
/// (instead of reading ambient global state) keeps the guard testable in
/// isolation.
///
/// # Implementations
///
/// - The embedding application's session provider
/// - Test mocks (`MockSession` with `cfg(test)`) and stub sessions in
///   integration tests
#[cfg_attr(test, mockall::automock)]
pub trait Session: Send + Sync {
    /// Whether the current user is authenticated.
    fn is_authenticated(&self) -> bool;
}
