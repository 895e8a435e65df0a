pub mod sequence_issuer;

pub use sequence_issuer::SequenceIssuer;
