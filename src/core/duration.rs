//! Elapsed-time formatting shared by every timed report node.

use chrono::{DateTime, Utc};

/// Formats `end - start` as seconds with exactly three decimals, e.g. `"1.250"`.
///
/// No unit suffix is appended. A negative span keeps its sign (`"-0.250"`).
///
/// 将 `end - start` 格式化为保留三位小数的秒数，例如 `"1.250"`。
pub fn format_elapsed(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let delta = end.signed_duration_since(start);
    let secs = delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9;
    format!("{:.3}", secs)
}
