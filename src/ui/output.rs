use std::collections::BTreeMap;

use crate::core::config::OutputFormat;
use crate::core::report::ReportBuffers;

/// Turn a finished pass into the text printed to stdout.
pub fn format_report(buffers: &ReportBuffers, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Plain => {
            let mut out = buffers.std.trim_end().to_string();
            if !buffers.detail.is_empty() {
                out.push('\n');
                out.push_str(buffers.detail.trim_end_matches('\n'));
            }
            Ok(out)
        }
        OutputFormat::Waybar => {
            let mut result = BTreeMap::new();
            result.insert("text", buffers.std.trim_end());
            result.insert("tooltip", buffers.detail.trim_end_matches('\n'));
            serde_json::to_string(&result)
        }
    }
}
