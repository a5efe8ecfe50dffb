//! Wire models shared between the Onboard client and the user directory
//! backend.
//!
//! Everything here is plain data: the reference option records the backend
//! returns, their display projection, the create-user request, and the
//! structured error body the backend answers with when it rejects a request.
//! Serde support sits behind the `serde` feature so consumers that only need
//! the shapes do not pull in a serializer.

/// Structured rejection bodies
pub mod error;
/// Reference option records and their display projection
pub mod options;
/// Versioned API routes
pub mod routes;
/// The create-user request
pub mod user;

