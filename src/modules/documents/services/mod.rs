pub mod coordinator;

pub use coordinator::RecalculationCoordinator;
