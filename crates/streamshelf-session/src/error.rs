use thiserror::Error;

/// Authentication failures. These are the only errors the session layer
/// surfaces; list mutations in the wrong state are silent no-ops, and a
/// malformed stored session is recovered locally as the anonymous state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Login with an empty email or password.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Signup with an empty name, email, or password.
    #[error("please fill all fields")]
    MissingFields,
}
