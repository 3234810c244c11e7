use crate::types::report::ScoreReport;

pub fn to_text(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Your Total AQ Score: {} / {}\n",
        report.total, report.max
    ));
    output.push_str(&format!("Your AQ: {:.2}%\n", report.percentage));
    output.push_str(&format!(
        "{}: {}\n",
        report.band.label(),
        report.band.feedback()
    ));
    output
}
