use super::BenchmarkSession;
use crate::Utility;
use colored::Colorize;

/// Final checkpoint of one algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub name: String,
    pub iteration: usize,
    pub exploitability: Utility,
}

/// Final results of every run in a session, in insertion order.
///
/// Runs without checkpoints have nothing to report and are left out.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    label: String,
    rows: Vec<Row>,
}

impl Summary {
    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
    /// Row with the lowest final exploitability.
    pub fn best(&self) -> Option<&Row> {
        self.rows
            .iter()
            .min_by(|a, b| a.exploitability.total_cmp(&b.exploitability))
    }
}

impl From<&BenchmarkSession> for Summary {
    fn from(session: &BenchmarkSession) -> Self {
        Self {
            label: session.label().to_string(),
            rows: session
                .runs()
                .filter_map(|run| match run.last() {
                    Some(last) => Some(Row {
                        name: run.name().to_string(),
                        iteration: last.iteration(),
                        exploitability: last.exploitability(),
                    }),
                    None => {
                        log::warn!("{:<32}{:<32}", "no checkpoints recorded", run.name());
                        None
                    }
                })
                .collect(),
        }
    }
}

impl Summary {
    const NAME_WIDTH: usize = 34;
}

#[rustfmt::skip]
impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let best = self.best().map(|row| row.name.as_str());
        let width = self.rows.iter().map(|row| row.name.chars().count()).fold(Self::NAME_WIDTH, usize::max);
        let bar = "─".repeat(width + 2);
        writeln!(f, "SUMMARY - {}", self.label)?;
        writeln!(f, "┌{}┬──────────────────┬──────────────────────┐", bar)?;
        writeln!(f, "│ {:<width$} │ Final Iterations │ Final Exploitability │", "Algorithm", width = width)?;
        writeln!(f, "├{}┼──────────────────┼──────────────────────┤", bar)?;
        for row in &self.rows {
            let name = format!("{:<width$}", row.name, width = width);
            let name = if Some(row.name.as_str()) == best { name.green() } else { name.normal() };
            writeln!(f, "│ {} │ {:>16} │ {:>20.6} │", name, row.iteration, row.exploitability)?;
        }
        write!(f, "└{}┴──────────────────┴──────────────────────┘", bar)
    }
}
