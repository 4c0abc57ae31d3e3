//! Terminal renderer: one styled line per case plus a summary.

use colored::Colorize;

use crate::models::{RunReport, Verdict};
use crate::output::OutputRenderer;

/// Terminal output renderer with colored text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, report: &RunReport) -> String {
        if report.cases.is_empty() {
            return format!("{}", "  No cases run.\n".dimmed());
        }

        let mut output = String::new();
        let width = report
            .cases
            .iter()
            .map(|c| c.numeral.len())
            .max()
            .unwrap_or(0);

        for case in &report.cases {
            // Pad before coloring so escape codes don't count toward the width.
            let token = format!("{:<3}", case.verdict.as_token());
            let (icon, verdict) = match case.verdict {
                Verdict::Palindrome => (
                    "✔".green().bold().to_string(),
                    token.green().bold().to_string(),
                ),
                Verdict::NotPalindrome => (
                    "✖".yellow().bold().to_string(),
                    token.yellow().bold().to_string(),
                ),
            };

            output.push_str(&format!(
                " {} {} {:<width$}  {}  {}\n",
                icon,
                format!("case {:>2}", case.index.0).bold(),
                case.numeral,
                verdict,
                case.output.display().to_string().dimmed(),
            ));
        }

        let summary = report.summary();
        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        output.push_str(&format!(
            " {} {}: {} {}, {} {}\n",
            summary.total.to_string().bold(),
            if summary.total == 1 { "case" } else { "cases" },
            summary.palindromes.to_string().green().bold(),
            if summary.palindromes == 1 { "palindrome" } else { "palindromes" },
            summary.non_palindromes.to_string().yellow().bold(),
            "not",
        ));

        output
    }
}
