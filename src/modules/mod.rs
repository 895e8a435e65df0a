pub mod documents;
pub mod payroll;
pub mod sequences;
pub mod taxes;
pub mod words;
