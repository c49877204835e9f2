use console::Style as Paint;
use log::debug;
use serde::Serialize;

use crate::error::Result;
use crate::types::{EncodingResultSet, OutputMode};

const RULE_WIDTH: usize = 50;
const LABEL_WIDTH: usize = 12;
const RECOMMEND_LABEL: &str = "✅ Recommended Password:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }

    fn paint(&self, text: &str, paint: Paint) -> String {
        if self.color {
            paint.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn render(
    mode: OutputMode,
    results: &EncodingResultSet,
    recommendation: &str,
    symbol: &str,
    style: Style,
) -> String {
    debug!("rendering mode {} (color: {})", mode, style.color);
    match mode {
        OutputMode::All => render_table(results, recommendation, symbol, style),
        OutputMode::Recommend => render_recommendation(recommendation),
        OutputMode::Single(kind) => format!("{} : {}", kind.label(), results.get(kind)),
    }
}

pub fn render_recommendation(recommendation: &str) -> String {
    format!("{} {}", RECOMMEND_LABEL, recommendation)
}

pub fn render_table(
    results: &EncodingResultSet,
    recommendation: &str,
    symbol: &str,
    style: Style,
) -> String {
    let rule = style.paint(&"-".repeat(RULE_WIDTH), Paint::new().cyan());
    let mut lines = vec![rule.clone()];
    lines.push(style.paint(
        &format!("{:<width$} | Result", "Encoding Type", width = LABEL_WIDTH),
        Paint::new().bold(),
    ));
    lines.push(rule.clone());

    for (kind, value) in results.iter() {
        let shown = match value.strip_suffix(symbol) {
            Some(core) if !symbol.is_empty() => {
                format!("{}{}", core, style.paint(symbol, Paint::new().yellow()))
            }
            _ => value.to_string(),
        };
        lines.push(format!("{:<width$} | {}", kind.label(), shown, width = LABEL_WIDTH));
    }

    lines.push(rule.clone());
    lines.push(format!(
        "{} {}",
        style.paint(RECOMMEND_LABEL, Paint::new().green()),
        style.paint(recommendation, Paint::new().bold())
    ));
    lines.push(rule);
    lines.join("\n")
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub mode: &'static str,
    pub input_length: usize,
    pub symbol: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<&'a EncodingResultSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a str>,
    pub recommended: &'a str,
}

pub fn render_json(
    mode: OutputMode,
    input: &str,
    results: &EncodingResultSet,
    recommendation: &str,
    symbol: &str,
) -> Result<String> {
    let report = JsonReport {
        mode: mode.name(),
        input_length: input.chars().count(),
        symbol,
        results: matches!(mode, OutputMode::All).then_some(results),
        value: match mode {
            OutputMode::Single(kind) => Some(results.get(kind)),
            _ => None,
        },
        recommended: recommendation,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
