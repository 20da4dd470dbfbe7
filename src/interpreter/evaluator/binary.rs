/// Comparison and logical operators applied to evaluated constants.
pub mod comparison;
/// Evaluation order of the logical connectives.
pub mod logic;

pub mod core;
