//! Per-label temperature statistics and their two textual views.
//!
//! [`render`] folds one device's readings into a [`StatsTable`] and appends a
//! short Pango-markup temperature to the `std` buffer and a multi-line
//! breakdown to the `detail` buffer. Buffers are owned by the caller and are
//! only ever appended to, so several devices can share them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::core::thermometer::Reading;

/// Running statistics for one label within a single report pass.
///
/// Values are millidegrees Celsius.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureStats {
    pub min: i32,
    pub max: i32,
    pub avg: i32,
    pub count: usize,
    pub first_name: String,
}

impl TemperatureStats {
    /// Empty entry ready to be folded into
    pub fn new() -> Self {
        Self {
            min: i32::MAX,
            max: i32::MIN,
            avg: 0,
            count: 0,
            first_name: String::new(),
        }
    }

    /// Zero-valued entry inserted when a missing target label is looked up
    pub fn placeholder() -> Self {
        Self {
            min: 0,
            max: 0,
            avg: 0,
            count: 0,
            first_name: String::new(),
        }
    }

    fn observe(&mut self, temp_mc: i32) {
        self.min = self.min.min(temp_mc);
        self.max = self.max.max(temp_mc);

        // Truncating running average, rounding error accumulates.
        let prev_total = i64::from(self.avg) * self.count as i64;
        self.count += 1;
        self.avg = ((prev_total + i64::from(temp_mc)) / self.count as i64) as i32;
    }
}

impl Default for TemperatureStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics keyed by label, iterated in ascending label order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsTable {
    entries: BTreeMap<String, TemperatureStats>,
    /// Highest value seen across all labels
    max_abs: Option<i32>,
}

impl StatsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, reading: &Reading) {
        let stats = self
            .entries
            .entry(reading.label.clone())
            .or_insert_with(|| TemperatureStats {
                first_name: reading.label.clone(),
                ..TemperatureStats::new()
            });
        stats.observe(reading.temp_mc);

        self.max_abs = Some(self.max_abs.map_or(reading.temp_mc, |m| m.max(reading.temp_mc)));
    }

    pub fn get(&self, label: &str) -> Option<&TemperatureStats> {
        self.entries.get(label)
    }

    /// Lookup that inserts a zero-valued placeholder for unknown labels
    pub fn get_or_placeholder(&mut self, label: &str) -> &TemperatureStats {
        self.entries
            .entry(label.to_string())
            .or_insert_with(TemperatureStats::placeholder)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn max_abs(&self) -> i32 {
        self.max_abs.unwrap_or(i32::MIN)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TemperatureStats)> {
        self.entries.iter()
    }
}

/// Fold readings, in order, into a fresh table.
pub fn fold(readings: &[Reading]) -> StatsTable {
    let mut table = StatsTable::new();
    for reading in readings {
        table.observe(reading);
    }
    table
}

/// What the short form does when the target label never appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingLabelPolicy {
    /// Insert a zero entry and render it (`  0°C`), it also shows in the detail block
    #[default]
    Placeholder,
    /// Leave the table untouched and emit no short form for the label
    Skip,
}

/// Presentation parameters for one device's report.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Markup color inserted verbatim into `fgcolor`
    pub color: String,
    pub single_line: bool,
    pub pos_temp: i32,
    /// `None` when no memory widget is laid out
    pub pos_ram: Option<i32>,
    pub category: String,
    pub target_label: String,
    pub show_detail: bool,
    pub missing_label: MissingLabelPolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: "#ffffff".to_string(),
            single_line: true,
            pos_temp: 1,
            pos_ram: None,
            category: String::new(),
            target_label: String::new(),
            show_detail: true,
            missing_label: MissingLabelPolicy::default(),
        }
    }
}

/// Caller-owned output buffers shared by consecutive device reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportBuffers {
    /// Inline status text
    pub std: String,
    /// Tooltip text
    pub detail: String,
}

impl ReportBuffers {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Whole degrees, truncated toward zero
fn degrees(temp_mc: i32) -> i32 {
    temp_mc / 1000
}

/// Fold `readings` and append both views to `buffers`.
pub fn render(readings: &[Reading], options: &RenderOptions, buffers: &mut ReportBuffers) {
    let mut table = fold(readings);
    render_table(&mut table, options, buffers);
}

/// Render an already folded table. May insert a placeholder entry.
pub fn render_table(table: &mut StatsTable, options: &RenderOptions, buffers: &mut ReportBuffers) {
    let position_ok = options.pos_ram.is_none() || Some(options.pos_temp) < options.pos_ram;
    let target_present = table.contains(&options.target_label);

    // `|` is not short-circuiting and binds inside the `&&`.
    if table.max_abs() >= 0 && (position_ok | target_present) {
        let max = match options.missing_label {
            MissingLabelPolicy::Placeholder => Some(table.get_or_placeholder(&options.target_label).max),
            MissingLabelPolicy::Skip => table.get(&options.target_label).map(|s| s.max),
        };
        if let Some(max) = max {
            let _ = write!(
                buffers.std,
                "<span fgcolor='{}'>{:>3}°C</span>{}",
                options.color,
                degrees(max),
                if options.single_line { " " } else { "" }
            );
        }
    }

    if options.show_detail && !table.is_empty() {
        let _ = writeln!(buffers.detail, " {}:", options.category);
        for (label, stats) in table.iter() {
            let _ = writeln!(buffers.detail, "{}", detail_line(label, stats));
        }
    }
}

/// One detail line, without the trailing newline.
pub fn detail_line(label: &str, stats: &TemperatureStats) -> String {
    if stats.count == 1 {
        format!("    {}: {}ºC", stats.first_name, degrees(stats.max))
    } else {
        format!(
            "    \u{394}{}ºC  \u{2207}{}ºC  \u{222B}{}ºC  ({} {})",
            degrees(stats.max),
            degrees(stats.min),
            degrees(stats.avg),
            stats.count,
            label
        )
    }
}
