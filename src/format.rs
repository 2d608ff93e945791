//! Human-readable labels for entry sizes and modification timestamps.

use chrono::NaiveDateTime;

const SIZE_UNITS: [&str; 3] = ["Б", "КБ", "МБ"];

/// Formats a byte count with binary scaling and two decimal places.
///
/// The value is divided by 1024 until it drops below the next unit, so
/// `0` becomes `0.00Б`, `1536` becomes `1.50КБ` and anything at a gigabyte
/// or above stays in `ГБ`.
pub fn readable_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in SIZE_UNITS {
        if value < 1024.0 {
            return format!("{value:.2}{unit}");
        }
        value /= 1024.0;
    }
    format!("{value:.2}ГБ")
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(time: NaiveDateTime) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}
