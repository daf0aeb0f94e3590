pub mod model;
pub mod service;
pub mod store;

pub use model::*;
pub use service::*;
pub use store::*;

/// Session error type
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid connect transition: {from} -> {to}")]
    InvalidTransition {
        from: model::ConnectStage,
        to: model::ConnectStage,
    },

    #[error("No session for wallet: {0}")]
    NotFound(String),
}
