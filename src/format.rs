use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Binary size units, indexed by power of 1024.
pub const UNITS: [&str; 9] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

/// Index into [`UNITS`] for a byte quantity: `floor(log2(|n| + 1) / 10)`,
/// clamped to the last unit.
pub fn unit_index(n: f64) -> usize {
    if !n.is_finite() {
        return 0;
    }
    let idx = ((n.abs() + 1.0).log2() / 10.0).floor();
    (idx.max(0.0) as usize).min(UNITS.len() - 1)
}

/// Base-1024 rendering with one decimal place, e.g. `1.5 KiB`.
pub fn human_readable(n: f64) -> String {
    let idx = unit_index(n);
    let scaled = if n.is_finite() {
        n / 1024f64.powi(idx as i32)
    } else {
        0.0
    };
    format!("{scaled:.1} {}", UNITS[idx])
}

pub fn format_bytes(bytes: u64) -> String {
    human_readable(bytes as f64)
}

pub fn format_rate(bytes_per_sec: f64) -> String {
    format!("{}/s", human_readable(bytes_per_sec))
}

pub fn format_percent(percent: f32) -> String {
    format!("{percent:.1}%")
}

/// Menu-bar title: symbol followed by zero-padded CPU percent, e.g. `∵ 07.3%`.
pub fn format_title(symbol: &str, cpu_percent: f32) -> String {
    format!("{symbol} {cpu_percent:04.1}%")
}
