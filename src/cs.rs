pub mod string;

// Re-export all modules
pub use string::*;
