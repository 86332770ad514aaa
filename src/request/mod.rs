//! Request and response types.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RequestInit`] | Caller-supplied, mutable request configuration |
//! | [`Body`] | Request body (URL-encoded or multipart) |
//! | [`Response`] | Settled network response |

// ============================================================================
// Submodules
// ============================================================================

/// Request body data.
pub mod body;

/// Request configuration.
pub mod init;

/// Network responses.
pub mod response;

// ============================================================================
// Re-exports
// ============================================================================

pub use body::Body;
pub use init::RequestInit;
pub use response::Response;
