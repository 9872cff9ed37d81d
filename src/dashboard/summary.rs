//! Summary panel text.

use serde::Serialize;

pub const NO_DATA_MESSAGE: &str = "No data matches the selected filters.";
pub const RESPONDENTS_LABEL: &str = "Number of Respondents: ";
pub const AVERAGE_LABEL: &str = "Average Overall Satisfaction: ";
const NOT_AVAILABLE: &str = "N/A";

/// One line of the panel; `label` is rendered emphasized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub respondents: usize,
    pub mean_overall: Option<f64>,
    /// Highest overall rating in the unfiltered table.
    pub max_score: Option<f64>,
    pub lines: Vec<SummaryLine>,
}

impl Summary {
    #[must_use]
    pub fn no_data() -> Self {
        Self {
            respondents: 0,
            mean_overall: None,
            max_score: None,
            lines: vec![SummaryLine { label: None, value: NO_DATA_MESSAGE.to_string() }],
        }
    }

    #[must_use]
    pub fn stats(respondents: usize, mean_overall: Option<f64>, max_score: Option<f64>) -> Self {
        let mean = mean_overall.map_or_else(|| NOT_AVAILABLE.to_string(), |m| format!("{m:.2}"));
        // A zero maximum gives no usable scale.
        let max = max_score
            .filter(|m| m.abs() > 0.0)
            .map_or_else(|| NOT_AVAILABLE.to_string(), |m| m.to_string());

        Self {
            respondents,
            mean_overall,
            max_score,
            lines: vec![
                SummaryLine { label: Some(RESPONDENTS_LABEL.to_string()), value: respondents.to_string() },
                SummaryLine { label: Some(AVERAGE_LABEL.to_string()), value: format!("{mean} (out of {max})") },
            ],
        }
    }

    #[must_use]
    pub fn is_no_data(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].label.is_none()
    }

    /// Plain-text rendering, one line per panel row.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{}{}", line.label.as_deref().unwrap_or(""), line.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
