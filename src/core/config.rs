use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::device::{DeviceDescriptor, DeviceKind};
use crate::core::report::{MissingLabelPolicy, RenderOptions};
use crate::core::thermometer::HWMON_ROOT;
use crate::error::{Result, ThermbarError};

/// How a report pass is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Short line, then the detail block
    Plain,
    /// `{"text": ..., "tooltip": ...}` for waybar custom modules
    #[default]
    Waybar,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "plain" => Some(OutputFormat::Plain),
            "waybar" => Some(OutputFormat::Waybar),
            _ => None,
        }
    }
}

/// One monitored device together with how it is presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorEntry {
    pub device: DeviceDescriptor,
    pub color: String,
    pub category: String,
    /// Label whose maximum is shown in the short form
    pub target_label: String,
    #[serde(default = "default_true")]
    pub show_detail: bool,
}

impl SensorEntry {
    pub fn new(device: DeviceDescriptor, color: &str, category: &str, target_label: &str) -> Self {
        Self {
            device,
            color: color.to_string(),
            category: category.to_string(),
            target_label: target_label.to_string(),
            show_detail: true,
        }
    }

    fn defaults() -> Vec<Self> {
        DeviceDescriptor::builtin()
            .into_iter()
            .map(|device| {
                let (color, category, target) = match device.kind {
                    DeviceKind::CpuPackage => ("#f38ba8", "CPU", "CPU"),
                    DeviceKind::CoreComplex => ("#fab387", "CCD", "Tctl"),
                    DeviceKind::IntegratedGpu => ("#a6e3a1", "iGPU", "edge"),
                    DeviceKind::DiscreteGpu => ("#89b4fa", "GPU", "edge"),
                    DeviceKind::NvmeMotherboard => ("#f9e2af", "NVMe M.2", "Composite"),
                    DeviceKind::NvmeSlot => ("#cba6f7", "NVMe Gen-Z.2", "Composite"),
                };
                SensorEntry::new(device, color, category, target)
            })
            .collect()
    }
}

fn default_true() -> bool {
    true
}

fn default_hwmon_root() -> PathBuf {
    PathBuf::from(HWMON_ROOT)
}

fn default_pos_temp() -> i32 {
    1
}

fn default_sensors() -> Vec<SensorEntry> {
    SensorEntry::defaults()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_hwmon_root")]
    pub hwmon_root: PathBuf,
    /// Append a separator space after each short temperature
    #[serde(default = "default_true")]
    pub single_line: bool,
    /// Position of the temperature widget in the bar layout
    #[serde(default = "default_pos_temp")]
    pub pos_temp: i32,
    /// Position of the memory widget, if one is laid out
    #[serde(default)]
    pub pos_ram: Option<i32>,
    #[serde(default)]
    pub missing_label: MissingLabelPolicy,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_sensors")]
    pub sensors: Vec<SensorEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hwmon_root: default_hwmon_root(),
            single_line: true,
            pos_temp: default_pos_temp(),
            pos_ram: None,
            missing_label: MissingLabelPolicy::default(),
            format: OutputFormat::default(),
            sensors: default_sensors(),
        }
    }
}

impl Config {
    /// Load from the user config directory, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let data = fs::read_to_string(config_path)?;
        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_json::from_str(&data).map_err(|e| {
            ThermbarError::config(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(self)?;
        fs::write(config_path, data)?;

        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ThermbarError::invalid_path("Could not determine config directory"))?;

        Ok(config_dir.join("thermbar").join("config.json"))
    }

    /// Presentation parameters for one configured sensor
    pub fn render_options(&self, entry: &SensorEntry) -> RenderOptions {
        RenderOptions {
            color: entry.color.clone(),
            single_line: self.single_line,
            pos_temp: self.pos_temp,
            pos_ram: self.pos_ram,
            category: entry.category.clone(),
            target_label: entry.target_label.clone(),
            show_detail: entry.show_detail,
            missing_label: self.missing_label,
        }
    }
}
