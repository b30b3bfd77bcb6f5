// Platform-specific code module

pub mod fs;

// Re-exports for cleaner imports
pub use fs::{first_token, read_attribute, Attribute};
