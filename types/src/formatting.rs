//! Centralized display formatting utilities.
//!
//! All user-facing time formatting goes through this module so the
//! countdown readout and the stats views stay consistent.

/// Format the per-phase countdown shown inside the breathing visual.
///
/// The countdown displays whole seconds, rounded up so a phase reads its
/// full duration on entry and "1" on its final second.
///
/// # Examples
/// ```
/// use breathe_types::formatting::format_countdown;
/// assert_eq!(format_countdown(4.0), "4");
/// assert_eq!(format_countdown(3.2), "4");
/// assert_eq!(format_countdown(0.1), "1");
/// assert_eq!(format_countdown(0.0), "0");
/// ```
pub fn format_countdown(secs: f64) -> String {
    format!("{}", secs.max(0.0).ceil() as u32)
}

/// Format an accumulated practice duration for stats display.
///
/// - Under a minute: `XXs`
/// - Under an hour: `XXm`
/// - Otherwise: `Xh Ym`
///
/// # Examples
/// ```
/// use breathe_types::formatting::format_session_time;
/// assert_eq!(format_session_time(45), "45s");
/// assert_eq!(format_session_time(720), "12m");
/// assert_eq!(format_session_time(3900), "1h 5m");
/// ```
pub fn format_session_time(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

/// Format a duration as `M:SS`.
///
/// # Examples
/// ```
/// use breathe_types::formatting::format_duration;
/// assert_eq!(format_duration(125), "2:05");
/// assert_eq!(format_duration(59), "0:59");
/// assert_eq!(format_duration(0), "0:00");
/// ```
pub fn format_duration(secs: i64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
