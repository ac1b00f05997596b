//! Display formatting helpers.

use lumina_client_core::UploadProgress;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// `0 B`, `1.5 KB`, `2.0 MB` (base 1024, one decimal).
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Progress bar width by file count, capped at 100.
pub fn upload_percent(progress: &UploadProgress) -> u32 {
    if progress.total == 0 {
        return 0;
    }
    ((progress.current * 100 / progress.total) as u32).min(100)
}

/// First 60 characters of a description for the dashboard table.
pub fn description_preview(description: Option<&str>) -> String {
    description.unwrap_or_default().chars().take(60).collect()
}
