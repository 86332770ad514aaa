//! Host capability interfaces.
//!
//! The original design leaned on ambient browser globals; here each
//! ambient dependency is an injected capability so the submission logic
//! runs and tests without a real browser host:
//!
//! | Capability | Description |
//! |------------|-------------|
//! | [`FieldCollector`] | Enumerates form fields into [`FormData`](crate::FormData) |
//! | [`NetworkClient`] | Dispatches the built request |
//! | [`EventSource`] | Registers submit hooks |
//!
//! [`StandardCollector`] and [`EventBus`] are the in-crate bindings;
//! production hosts supply their own `NetworkClient` and, when they own
//! a real event loop, their own `EventSource`.

// ============================================================================
// Submodules
// ============================================================================

/// Field collection capability.
pub mod collector;

/// Submission event capability.
pub mod events;

/// Network dispatch capability.
pub mod network;

// ============================================================================
// Re-exports
// ============================================================================

pub use collector::{FieldCollector, StandardCollector};
pub use events::{EventBus, EventSource, SubmitEvent, SubmitHandler};
pub use network::NetworkClient;
