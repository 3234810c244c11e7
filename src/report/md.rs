use crate::types::report::ScoreReport;

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# AQ Report\n\n");
    output.push_str(&format!(
        "Total AQ score: {} / {}\n\n",
        report.total, report.max
    ));
    output.push_str(&format!("AQ: {:.2}%\n\n", report.percentage));
    output.push_str(&format!(
        "**{}:** {}\n",
        report.band.label(),
        report.band.feedback()
    ));
    output
}
