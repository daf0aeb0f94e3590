pub mod interface;
pub mod jupiter;
pub mod mock;

pub use interface::*;
pub use jupiter::*;
pub use mock::*;
