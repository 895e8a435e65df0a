pub mod proration;

pub use proration::ProrationEngine;
