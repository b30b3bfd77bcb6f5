// UI and formatting module

pub mod output;

pub use output::format_report;
