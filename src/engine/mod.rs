pub mod history;
pub mod outcome;
pub mod reducer;


// Re-export the primary entry point so `crate::engine::*` paths stay short.
pub use outcome::compute_outcome;
