//! One refresh-then-render pass over every configured sensor.

use crate::core::config::Config;
use crate::core::report::{self, ReportBuffers};
use crate::core::thermometer::{NodeStatus, Thermometer};

/// Refresh each configured device in order and append its report.
pub fn run_pass(config: &Config) -> ReportBuffers {
    let mut buffers = ReportBuffers::new();

    for entry in &config.sensors {
        let mut thermometer = Thermometer::with_root(entry.device.clone(), &config.hwmon_root);
        thermometer.refresh();
        log::debug!(
            "{} ({}): {} readings",
            entry.category,
            entry.device.kind,
            thermometer.readings().len()
        );

        report::render(thermometer.readings(), &config.render_options(entry), &mut buffers);
    }

    buffers
}

/// Status of one configured device, for diagnostics.
#[derive(Debug, Clone)]
pub struct DeviceSurvey {
    pub category: String,
    pub thermometer: Thermometer,
    pub status: NodeStatus,
}

/// Identify and refresh every configured device without rendering.
pub fn survey_devices(config: &Config) -> Vec<DeviceSurvey> {
    config
        .sensors
        .iter()
        .map(|entry| {
            let mut thermometer = Thermometer::with_root(entry.device.clone(), &config.hwmon_root);
            let status = thermometer.refresh();
            DeviceSurvey {
                category: entry.category.clone(),
                thermometer,
                status,
            }
        })
        .collect()
}
