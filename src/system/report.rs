use crate::format::{format_bytes, format_percent, format_rate, format_title, truncate_unicode};

use super::snapshot::{Snapshot, TopProcess};

/// Per-second rates derived from the cumulative counters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rates {
    pub disk_read_per_sec: f64,
    pub disk_write_per_sec: f64,
    pub net_recv_per_sec: f64,
    pub net_sent_per_sec: f64,
}

impl Rates {
    pub fn is_zero(&self) -> bool {
        *self == Rates::default()
    }
}

/// Human-readable rendering of every report field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStrings {
    pub cpu_percent: String,
    pub memory_percent: String,
    pub memory_available: String,
    pub memory_used: String,
    pub disk_read: String,
    pub disk_read_rate: String,
    pub disk_written: String,
    pub disk_written_rate: String,
    pub net_recv: String,
    pub net_recv_rate: String,
    pub net_sent: String,
    pub net_sent_rate: String,
    pub process_count: String,
    pub top_cpu: String,
    pub top_mem: String,
}

/// Output of one successful tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub snapshot: Snapshot,
    pub rates: Rates,
    pub strings: ReportStrings,
}

impl Report {
    pub fn new(snapshot: Snapshot, rates: Rates) -> Self {
        let counters = &snapshot.counters;
        let strings = ReportStrings {
            cpu_percent: format_percent(snapshot.cpu_percent),
            memory_percent: format_percent(snapshot.memory_percent),
            memory_available: format_bytes(snapshot.memory_available_bytes),
            memory_used: format_bytes(snapshot.memory_used_bytes),
            disk_read: format_bytes(counters.disk_bytes_read),
            disk_read_rate: format_rate(rates.disk_read_per_sec),
            disk_written: format_bytes(counters.disk_bytes_written),
            disk_written_rate: format_rate(rates.disk_write_per_sec),
            net_recv: format_bytes(counters.net_bytes_recv),
            net_recv_rate: format_rate(rates.net_recv_per_sec),
            net_sent: format_bytes(counters.net_bytes_sent),
            net_sent_rate: format_rate(rates.net_sent_per_sec),
            process_count: snapshot.process_count.to_string(),
            top_cpu: top_process_label(&snapshot.top_cpu_process),
            top_mem: top_process_label(&snapshot.top_mem_process),
        };
        Report {
            snapshot,
            rates,
            strings,
        }
    }

    pub fn title(&self, symbol: &str) -> String {
        format_title(symbol, self.snapshot.cpu_percent)
    }

    /// Menu contents grouped under their section headings, in display order.
    pub fn menu_sections(&self, max_name_width: usize) -> Vec<MenuSection> {
        let s = &self.strings;
        let top = |p: &TopProcess| {
            format!(
                "{} ({:.1}%)",
                truncate_unicode(&p.name, max_name_width),
                p.percent
            )
        };
        vec![
            MenuSection {
                heading: "System",
                lines: vec![
                    format!("CPU Usage: {}", s.cpu_percent),
                    format!("Mem Usage: {}", s.memory_percent),
                    format!("Mem Avail / Used: {} / {}", s.memory_available, s.memory_used),
                ],
            },
            MenuSection {
                heading: "Disk I/O",
                lines: vec![
                    format!("Read: {} ({})", s.disk_read, s.disk_read_rate),
                    format!("Written: {} ({})", s.disk_written, s.disk_written_rate),
                ],
            },
            MenuSection {
                heading: "Network",
                lines: vec![
                    format!("Received: {} ({})", s.net_recv, s.net_recv_rate),
                    format!("Sent: {} ({})", s.net_sent, s.net_sent_rate),
                ],
            },
            MenuSection {
                heading: "Processes",
                lines: vec![
                    format!("Processes: {}", s.process_count),
                    format!("Top CPU: {}", top(&self.snapshot.top_cpu_process)),
                    format!("Top Mem: {}", top(&self.snapshot.top_mem_process)),
                ],
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub heading: &'static str,
    pub lines: Vec<String>,
}

fn top_process_label(process: &TopProcess) -> String {
    format!("{} ({:.1}%)", process.name, process.percent)
}
