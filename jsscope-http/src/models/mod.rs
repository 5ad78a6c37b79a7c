pub mod analyze;
pub mod system;

// Re-export all models for easier imports
pub use analyze::*;
pub use system::*;
