//! Time formatting for display

/// Format seconds as "MM:SS"; minutes keep growing past two digits
pub fn format_mm_ss(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}
