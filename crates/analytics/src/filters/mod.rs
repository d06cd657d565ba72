//! Filter implementations for the aggregate pipeline.

pub mod defined_spread;
pub mod minimum_count;

// Re-export for convenience
pub use defined_spread::DefinedSpreadFilter;
pub use minimum_count::MinimumCountFilter;
