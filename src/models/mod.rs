pub mod portfolio;
pub mod quote;
pub mod token;

pub use portfolio::*;
pub use quote::*;
pub use token::*;
