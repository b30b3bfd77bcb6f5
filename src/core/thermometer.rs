//! Sensor reader for a single hwmon node.
//!
//! A [`Thermometer`] is bound to one [`DeviceDescriptor`] and turns the node's
//! `temp<N>_label` / `temp<N>_input` files into [`Reading`]s. Every failure
//! (missing hardware, renumbered node, malformed channel) degrades to an empty
//! or truncated reading list; nothing is reported to the caller.

use std::path::{Path, PathBuf};

use crate::core::device::DeviceDescriptor;
use crate::platform::fs::{first_token, read_attribute, Attribute};

/// Default root of the hwmon class tree
pub const HWMON_ROOT: &str = "/sys/class/hwmon";

/// One temperature channel as reported by the sensor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub label: String,
    /// Millidegrees Celsius
    pub temp_mc: i32,
}

impl Reading {
    pub fn new<S: Into<String>>(label: S, temp_mc: i32) -> Self {
        Self {
            label: label.into(),
            temp_mc,
        }
    }
}

/// Identity check result for a descriptor's hwmon node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeStatus {
    /// No `name` file under the node nor under its `device` subdirectory
    Missing,
    /// The node reports a different driver name
    Mismatch { found: String },
    /// The node matches; `dir` holds the channel files
    Present { dir: PathBuf },
}

impl NodeStatus {
    pub fn is_present(&self) -> bool {
        matches!(self, NodeStatus::Present { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Thermometer {
    device: DeviceDescriptor,
    root: PathBuf,
    readings: Vec<Reading>,
}

impl Thermometer {
    pub fn new(device: DeviceDescriptor) -> Self {
        Self::with_root(device, HWMON_ROOT)
    }

    pub fn with_root<P: Into<PathBuf>>(device: DeviceDescriptor, root: P) -> Self {
        Self {
            device,
            root: root.into(),
            readings: Vec::new(),
        }
    }

    pub fn device(&self) -> &DeviceDescriptor {
        &self.device
    }

    /// `<root>/hwmon<N>`
    pub fn node_path(&self) -> PathBuf {
        self.root.join(self.device.node_dir_name())
    }

    /// Readings collected by the last [`refresh`](Self::refresh)
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Locate the node's `name` file and compare it with the declared name.
    pub fn identify(&self) -> NodeStatus {
        let mut dir = self.node_path();

        let content = match read_attribute(&dir.join("name")).value() {
            Some(content) => content,
            None => {
                dir.push("device");
                match read_attribute(&dir.join("name")).value() {
                    Some(content) => content,
                    None => return NodeStatus::Missing,
                }
            }
        };

        match first_token(&content) {
            Some(name) if name == self.device.name => NodeStatus::Present { dir },
            found => NodeStatus::Mismatch {
                found: found.unwrap_or_default().to_string(),
            },
        }
    }

    /// Replace the reading list with the node's current channels.
    ///
    /// Returns the node status found while doing so; the tree is read once.
    pub fn refresh(&mut self) -> NodeStatus {
        self.readings.clear();

        let status = self.identify();
        match &status {
            NodeStatus::Present { dir } => {
                self.readings =
                    scan_channels(dir, self.device.channels, self.device.label_filter.as_deref());
            }
            NodeStatus::Missing => {
                log::debug!(
                    "{}: no name file under {}",
                    self.device.kind,
                    self.node_path().display()
                );
            }
            NodeStatus::Mismatch { found } => {
                log::debug!(
                    "{}: {} reports '{}', expected '{}'",
                    self.device.kind,
                    self.node_path().display(),
                    found,
                    self.device.name
                );
            }
        }

        status
    }
}

/// Walk `temp0..temp{channels-1}` until the contiguous block ends.
fn scan_channels(dir: &Path, channels: u32, filter: Option<&str>) -> Vec<Reading> {
    let filter = filter.map(str::to_lowercase);
    let mut readings = Vec::new();

    for ic in 0..channels {
        let label = match read_attribute(&dir.join(format!("temp{}_label", ic))) {
            Attribute::Absent => continue,
            Attribute::Unreadable => break,
            Attribute::Value(content) => match content.lines().next() {
                Some(line) if !line.is_empty() => line.to_string(),
                _ => break,
            },
        };

        let input = match read_attribute(&dir.join(format!("temp{}_input", ic))).value() {
            Some(content) => content,
            None => break,
        };
        let temp_mc = match first_token(&input).and_then(parse_leading_i32) {
            Some(value) => value,
            None => {
                log::trace!("temp{}_input in {} is not an integer", ic, dir.display());
                break;
            }
        };

        let keep = match &filter {
            Some(pattern) => label.to_lowercase().contains(pattern.as_str()),
            None => true,
        };
        if keep {
            readings.push(Reading { label, temp_mc });
        } else {
            log::trace!("temp{} '{}' dropped by label filter", ic, label);
        }
    }

    readings
}

/// Leading signed integer of a token, trailing text ignored (`"45000abc"` -> 45000).
fn parse_leading_i32(token: &str) -> Option<i32> {
    let digits_start = usize::from(token.starts_with(['+', '-']));
    let end = token[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(token.len(), |i| i + digits_start);
    token[..end].parse().ok()
}
