//! Text renderings of a computed report.

use crate::layout::chart_title;
use autosales_stats::{GroupedSeries, Report, Statistic};

/// Text summary of a report's tables.
#[derive(Debug, Clone)]
pub struct ReportSummary<'a> {
    report: &'a Report,
}

impl<'a> ReportSummary<'a> {
    /// Summarize a report.
    pub const fn new(report: &'a Report) -> Self {
        Self { report }
    }

    /// Heading line.
    pub fn heading(&self) -> String {
        match self.report.year() {
            Some(year) => format!("{}: {}", self.report.kind(), year),
            None => self.report.kind().to_string(),
        }
    }

    fn sections(&self) -> impl Iterator<Item = (String, &'a GroupedSeries)> + '_ {
        let year = self.report.year();
        self.report.series().into_iter().map(move |series| {
            let title = series
                .name
                .parse::<Statistic>()
                .map_or_else(|_| series.name.clone(), |stat| chart_title(stat, year));
            (title, series)
        })
    }

    /// Render as a fixed-width ASCII table.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", self.heading()));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        for (title, series) in self.sections() {
            output.push_str(&format!("\n{}:\n", title));
            output.push_str(&"-".repeat(60));
            output.push('\n');
            output.push_str(&format!(
                "{:<30} {:>28}\n",
                series.key_column, series.value_column
            ));
            output.push_str(&"-".repeat(60));
            output.push('\n');

            if series.is_empty() {
                output.push_str("  (no data)\n");
                continue;
            }
            for (label, value) in series.iter() {
                output.push_str(&format!("{:<30} {:>28.2}\n", label, value));
            }
        }

        output
    }

    /// Render as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n", self.heading()));

        for (title, series) in self.sections() {
            output.push_str(&format!("\n## {}\n\n", title));
            if series.is_empty() {
                output.push_str("_No data._\n");
                continue;
            }
            output.push_str(&format!(
                "| {} | {} |\n|---|---:|\n",
                series.key_column, series.value_column
            ));
            for (label, value) in series.iter() {
                output.push_str(&format!("| {} | {:.2} |\n", label, value));
            }
        }

        output
    }
}
