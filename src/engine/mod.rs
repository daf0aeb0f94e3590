pub mod error;
pub mod quote;
pub mod valuation;

pub use error::*;
pub use quote::*;
pub use valuation::*;
