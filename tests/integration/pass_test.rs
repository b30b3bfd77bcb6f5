use std::fs;
use std::path::Path;
use tempfile::TempDir;
use thermbar::core::config::{Config, OutputFormat, SensorEntry};
use thermbar::core::pass::{survey_devices, run_pass};
use thermbar::core::{DeviceDescriptor, NodeStatus};
use thermbar::ui::output::format_report;

fn write(dir: &Path, file: &str, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(file), content).unwrap();
}

fn fake_tree(root: &Path) {
    let ccd = root.join("hwmon4");
    write(&ccd, "name", "k10temp\n");
    write(&ccd, "temp1_label", "Tctl\n");
    write(&ccd, "temp1_input", "45000\n");
    write(&ccd, "temp3_label", "Tccd1\n");
    write(&ccd, "temp3_input", "38000\n");

    // Renumbered: hwmon0 is now an nvme drive
    let gpu = root.join("hwmon0");
    write(&gpu, "name", "nvme\n");
    write(&gpu, "temp1_label", "Composite\n");
    write(&gpu, "temp1_input", "40000\n");
}

fn config(root: &Path) -> Config {
    Config {
        hwmon_root: root.to_path_buf(),
        sensors: vec![
            SensorEntry::new(DeviceDescriptor::core_complex(), "#fab387", "CCD", "Tctl"),
            SensorEntry::new(DeviceDescriptor::discrete_gpu(), "#89b4fa", "GPU", "edge"),
        ],
        ..Default::default()
    }
}

#[test]
fn test_pass_skips_absent_and_mismatched_devices() {
    let root = TempDir::new().unwrap();
    fake_tree(root.path());

    let buffers = run_pass(&config(root.path()));

    assert_eq!(buffers.std, "<span fgcolor='#fab387'> 45°C</span> ");
    assert_eq!(buffers.detail, " CCD:\n    Tccd1: 38ºC\n    Tctl: 45ºC\n");
}

#[test]
fn test_pass_on_empty_tree() {
    let root = TempDir::new().unwrap();
    let config = Config {
        hwmon_root: root.path().to_path_buf(),
        ..Default::default()
    };

    let buffers = run_pass(&config);
    assert!(buffers.std.is_empty());
    assert!(buffers.detail.is_empty());
}

#[test]
fn test_survey_reports_status_per_device() {
    let root = TempDir::new().unwrap();
    fake_tree(root.path());

    let surveys = survey_devices(&config(root.path()));
    assert_eq!(surveys.len(), 2);
    assert!(surveys[0].status.is_present());
    assert_eq!(surveys[0].thermometer.readings().len(), 2);
    assert_eq!(
        surveys[1].status,
        NodeStatus::Mismatch {
            found: "nvme".to_string()
        }
    );
    assert!(surveys[1].thermometer.readings().is_empty());
}

#[test]
fn test_waybar_output_of_pass() {
    let root = TempDir::new().unwrap();
    fake_tree(root.path());

    let buffers = run_pass(&config(root.path()));
    let out = format_report(&buffers, OutputFormat::Waybar).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["text"], "<span fgcolor='#fab387'> 45°C</span>");
    assert_eq!(value["tooltip"], " CCD:\n    Tccd1: 38ºC\n    Tctl: 45ºC");
}
