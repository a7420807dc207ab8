//! # Input Binding
//!
//! Message-passing glue between a UI field and the pure transforms in
//! [`crate::domain`]. The UI sends [`shared::MaskEvent`]s and carries out the
//! returned [`shared::MaskEffect`]s; model writes go through a debounced
//! writer so that only the last edit in a burst of typing is committed.

pub mod controller;
pub mod debounce;
pub mod session;

pub use controller::InputBinding;
pub use debounce::DebouncedModelWriter;
pub use session::MaskSession;

/// Failures at the async edges of the binding
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error("Debounced model writer has shut down")]
    WriterClosed,
    #[error("Debounce task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
