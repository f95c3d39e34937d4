//! Formatting utilities for file sizes and composition metadata.

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Round to two decimals; `Display` then drops trailing zeros.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format file size for display (e.g., "0 Bytes", "1.5 KB", "2 MB").
///
/// Uses 1024-based units and caps at GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{} {}", round2(value), SIZE_UNITS[unit])
}

/// Format a duration in seconds (e.g., "10s", "4.17s").
pub fn format_duration(seconds: f64) -> String {
    format!("{}s", round2(seconds))
}

/// Format a frame rate (e.g., "30fps", "29.97fps").
pub fn format_frame_rate(fps: f64) -> String {
    format!("{}fps", round2(fps))
}
