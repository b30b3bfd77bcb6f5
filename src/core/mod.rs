pub mod config;
pub mod device;
pub mod pass;
pub mod report;
pub mod thermometer;

// Re-exports for cleaner imports
pub use config::{Config, OutputFormat, SensorEntry};
pub use device::{DeviceDescriptor, DeviceKind};
pub use report::{render, MissingLabelPolicy, RenderOptions, ReportBuffers, StatsTable, TemperatureStats};
pub use thermometer::{NodeStatus, Reading, Thermometer};
