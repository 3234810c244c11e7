use crate::error::Result;
use crate::scoring;
use crate::theme::Theme;
use crate::types::answers::AnswerSet;
use crate::types::question::QuestionBank;
use crate::types::report::ScoreReport;
use colored::Colorize;
use std::io::{BufRead, Write};

pub const INCOMPLETE_WARNING: &str = "Please answer all questions before submitting.";

const TITLE: &str = "TQ Adaptability Quotient (AQ) Questionnaire";

const AQ_DEFINITION: &str = "Adaptability Quotient (AQ) refers to an individual's capacity \
to adjust to new conditions, learn new skills, and thrive in changing environments. It \
encompasses traits like flexibility, resilience, curiosity, and a willingness to embrace \
uncertainty.";

const REVIEW_HINT: &str =
    "Type 'submit' to score, a question number to change an answer, or 'quit' to exit.";

#[derive(Debug)]
pub enum SessionOutcome {
    Submitted(ScoreReport),
    Quit,
}

/// One interactive pass over the questionnaire. Owns the session's AnswerSet;
/// the scoring engine stays pure and is only consulted on submission.
pub struct Session<'a> {
    bank: &'a QuestionBank,
    theme: Theme,
    answers: AnswerSet,
}

impl<'a> Session<'a> {
    pub fn new(bank: &'a QuestionBank, theme: Theme) -> Self {
        Self {
            bank,
            theme,
            answers: AnswerSet::new(),
        }
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<SessionOutcome> {
        writeln!(output, "{}", TITLE.color(self.theme.heading).bold())?;
        writeln!(output)?;
        writeln!(output, "{}", AQ_DEFINITION.on_color(self.theme.panel).black())?;

        for index in 0..self.bank.len() {
            if !self.ask_question(index, input, output)? {
                return Ok(SessionOutcome::Quit);
            }
        }

        // Review loop: answers can be overwritten until submission succeeds.
        loop {
            writeln!(output)?;
            writeln!(output, "{}", REVIEW_HINT.color(self.theme.accent))?;
            let Some(line) = read_line(input)? else {
                return Ok(SessionOutcome::Quit);
            };
            let line = line.trim().to_ascii_lowercase();
            match line.as_str() {
                "submit" => match scoring::build_report(&self.answers, self.bank) {
                    Some(report) => {
                        self.render_result(&report, output)?;
                        return Ok(SessionOutcome::Submitted(report));
                    }
                    None => {
                        writeln!(output, "{INCOMPLETE_WARNING}")?;
                        let numbers = scoring::unanswered(&self.answers, self.bank)
                            .iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join(", ");
                        writeln!(output, "Unanswered: {numbers}")?;
                    }
                },
                "quit" => return Ok(SessionOutcome::Quit),
                other => match other.parse::<usize>() {
                    Ok(number) if (1..=self.bank.len()).contains(&number) => {
                        if !self.ask_question(number - 1, input, output)? {
                            return Ok(SessionOutcome::Quit);
                        }
                    }
                    _ => writeln!(output, "Unrecognized input: {other}")?,
                },
            }
        }
    }

    // Returns false on end of input.
    fn ask_question<R: BufRead, W: Write>(
        &mut self,
        index: usize,
        input: &mut R,
        output: &mut W,
    ) -> Result<bool> {
        let question = match self.bank.get(index) {
            Some(question) => question,
            None => return Ok(true),
        };

        writeln!(output)?;
        writeln!(
            output,
            "{}",
            format!("{}. {}", index + 1, question.prompt).color(self.theme.heading)
        )?;
        for (key, option) in &question.options {
            writeln!(output, "  {}. {}", key, option.text)?;
        }

        loop {
            write!(output, "> ")?;
            output.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(false);
            };
            let line = line.trim().to_ascii_lowercase();
            if line.is_empty() {
                // Skipped; the review loop can come back to it.
                return Ok(true);
            }
            let mut chars = line.chars();
            if let (Some(key), None) = (chars.next(), chars.next()) {
                if question.has_key(key) {
                    self.answers.select(index, key);
                    return Ok(true);
                }
            }
            writeln!(
                output,
                "Choose one of the listed keys, or press Enter to skip."
            )?;
        }
    }

    fn render_result<W: Write>(&self, report: &ScoreReport, output: &mut W) -> Result<()> {
        writeln!(output)?;
        writeln!(
            output,
            "{}",
            format!("Your Total AQ Score: {} / {}", report.total, report.max)
                .color(self.theme.heading)
                .bold()
        )?;
        writeln!(
            output,
            "{}",
            format!("Your AQ: {:.2}%", report.percentage)
                .color(self.theme.heading)
                .bold()
        )?;
        writeln!(
            output,
            "{}",
            format!("{}: {}", report.band.label(), report.band.feedback())
                .on_color(self.theme.panel)
                .black()
        )?;
        Ok(())
    }
}

fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
