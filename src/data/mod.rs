// mod.rs - Alignment data module

pub mod alignment;
pub mod loaders;

// Re-export main types for convenience
pub use alignment::{Alignment, GAP};
pub use loaders::load_alignment;
