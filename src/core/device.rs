//! Static descriptions of the monitored hwmon devices.
//!
//! Each physical sensor class is bound to a fixed hwmon index. The declared
//! name guards against the kernel renumbering nodes between boots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical sensor class a descriptor stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    CpuPackage,
    CoreComplex,
    IntegratedGpu,
    DiscreteGpu,
    NvmeMotherboard,
    NvmeSlot,
}

impl DeviceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceKind::CpuPackage => "cpu_package",
            DeviceKind::CoreComplex => "core_complex",
            DeviceKind::IntegratedGpu => "integrated_gpu",
            DeviceKind::DiscreteGpu => "discrete_gpu",
            DeviceKind::NvmeMotherboard => "nvme_motherboard",
            DeviceKind::NvmeSlot => "nvme_slot",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared hwmon driver names of the reference machine
pub mod names {
    pub const ASUSEC: &str = "asusec";
    pub const K10TEMP: &str = "k10temp";
    pub const AMDGPU: &str = "amdgpu";
    pub const NVME: &str = "nvme";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    pub kind: DeviceKind,
    /// Expected first token of the node's `name` file
    pub name: String,
    pub hwmon_index: u32,
    /// Channels `temp0..temp{channels-1}` are scanned
    pub channels: u32,
    /// Case-insensitive substring a channel label must contain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_filter: Option<String>,
}

impl DeviceDescriptor {
    pub fn new<S: Into<String>>(kind: DeviceKind, name: S, hwmon_index: u32, channels: u32) -> Self {
        Self {
            kind,
            name: name.into(),
            hwmon_index,
            channels,
            label_filter: None,
        }
    }

    pub fn with_filter<S: Into<String>>(mut self, filter: S) -> Self {
        self.label_filter = Some(filter.into());
        self
    }

    /// Directory name of the node, e.g. `hwmon4`
    pub fn node_dir_name(&self) -> String {
        format!("hwmon{}", self.hwmon_index)
    }

    pub fn cpu_package() -> Self {
        Self::new(DeviceKind::CpuPackage, names::ASUSEC, 5, 10)
    }

    pub fn core_complex() -> Self {
        Self::new(DeviceKind::CoreComplex, names::K10TEMP, 4, 5)
    }

    pub fn integrated_gpu() -> Self {
        Self::new(DeviceKind::IntegratedGpu, names::AMDGPU, 1, 5)
    }

    pub fn discrete_gpu() -> Self {
        Self::new(DeviceKind::DiscreteGpu, names::AMDGPU, 0, 5)
    }

    pub fn nvme_motherboard() -> Self {
        Self::new(DeviceKind::NvmeMotherboard, names::NVME, 2, 5)
    }

    pub fn nvme_slot() -> Self {
        Self::new(DeviceKind::NvmeSlot, names::NVME, 3, 5)
    }

    /// The six built-in devices in display order
    pub fn builtin() -> Vec<Self> {
        vec![
            Self::cpu_package(),
            Self::core_complex(),
            Self::integrated_gpu(),
            Self::discrete_gpu(),
            Self::nvme_motherboard(),
            Self::nvme_slot(),
        ]
    }
}
