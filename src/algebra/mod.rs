/// Exact rational numbers
pub mod rat;
