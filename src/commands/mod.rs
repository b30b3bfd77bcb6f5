// Command handlers module
pub mod config;
pub mod devices;
pub mod report;
pub mod version;

// Re-exports for cleaner imports
pub use devices::execute as devices;
pub use report::execute as report;
pub use version::execute as version;
