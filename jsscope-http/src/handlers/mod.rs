pub mod analyze;
pub mod system;

// Re-export all handlers for easier imports
pub use analyze::*;
pub use system::*;
