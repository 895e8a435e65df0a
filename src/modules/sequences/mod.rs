pub mod models;
pub mod services;

pub use models::{CounterState, SequenceCounter, SequenceTemplate};
pub use services::SequenceIssuer;
