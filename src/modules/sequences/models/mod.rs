pub mod counter;

pub use counter::{CounterState, SequenceCounter, SequenceTemplate};
