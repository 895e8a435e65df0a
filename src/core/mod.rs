pub mod calendar;
pub mod error;
pub mod money;

pub use error::{AppError, Result};
pub use money::Money;
