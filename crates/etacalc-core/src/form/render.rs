use super::EtaReport;

/// Text progress bar, e.g. `[##########----------]`. Fill is clamped to 0..=100.
pub fn progress_bar(percent: i64, width: usize) -> String {
    let clamped = percent.clamp(0, 100) as usize;
    let filled = (clamped * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// The two status bar fields: percent downloaded and ETA (`--` when none).
pub fn status_lines(report: &EtaReport) -> [String; 2] {
    let eta = if report.eta.is_empty() {
        "--"
    } else {
        report.eta.as_str()
    };
    [
        format!("Percent Downloaded: {}%", report.percent),
        format!("ETA: {eta}"),
    ]
}
