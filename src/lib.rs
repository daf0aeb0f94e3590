// Core modules
pub mod config;
pub mod engine;
pub mod models;
pub mod providers;
pub mod service;
pub mod session;
pub mod utils;

// Re-exports
pub use config::AppConfig;
pub use engine::*;
pub use models::*;
pub use providers::*;
pub use service::*;
pub use session::*;
pub use utils::*;
