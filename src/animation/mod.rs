pub mod interpolation;
pub mod spring;

// Re-export commonly used types and functions for convenience
pub use interpolation::Interpolation;
pub use spring::{Spring, SpringConfig};
