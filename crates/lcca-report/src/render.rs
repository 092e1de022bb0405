//! Table renderers for comparison results.

use lcca_core::{ComparisonResult, CostEstimate};
use std::fmt::Write as _;
use std::str::FromStr;
use thiserror::Error;

use crate::format::money;

/// Column headers for the fixed two-row comparison table.
pub const HEADERS: [&str; 5] = [
    "System",
    "CapEx ($)",
    "Year1 O&M ($/yr)",
    "NPV O&M ($)",
    "NPV Total ($)",
];

/// Supported output representations for a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Structured JSON (the default).
    Json,
    /// Markdown table.
    Markdown,
    /// HTML table with inline styling.
    Html,
    /// CSV with a summary trailer.
    Csv,
}

impl ReportFormat {
    /// The accepted format names, in the order they are advertised.
    pub const ACCEPTED: [&'static str; 4] = ["json", "markdown", "html", "csv"];

    /// Canonical lowercase name of the format.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Csv => "csv",
        }
    }
}

/// A format name outside the accepted set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown format '{requested}'. Use json|markdown|html|csv")]
pub struct UnknownFormat {
    /// The rejected format name.
    pub requested: String,
}

impl FromStr for ReportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            "csv" => Ok(Self::Csv),
            _ => Err(UnknownFormat {
                requested: s.to_string(),
            }),
        }
    }
}

/// One rendered table row per system, money columns preformatted.
fn rows(result: &ComparisonResult) -> [[String; 5]; 2] {
    let row = |e: &CostEstimate| {
        [
            e.system.to_string(),
            money(e.capex),
            money(e.annual_om_year1),
            money(e.npv_om),
            money(e.npv_total),
        ]
    };
    [row(&result.vacuum), row(&result.pressure)]
}

/// Render a Markdown table with a bold preferred/delta trailer.
#[must_use]
pub fn to_markdown(result: &ComparisonResult) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "| {} |", HEADERS.join(" | "));
    let _ = writeln!(md, "| {} |", vec!["---"; HEADERS.len()].join(" | "));
    for row in rows(result) {
        let _ = writeln!(md, "| {} |", row.join(" | "));
    }
    let _ = writeln!(
        md,
        "\n**Preferred:** {} &nbsp;&nbsp; **NPV \u{394}:** ${}",
        result.preferred,
        money(result.npv_delta)
    );
    md
}

/// Render a standalone HTML document with an inline-styled table.
#[must_use]
pub fn to_html(result: &ComparisonResult) -> String {
    const STYLE: &str = "<style>\n\
        table {border-collapse: collapse; font-family: Arial, sans-serif; font-size: 14px;}\n\
        th, td {border: 1px solid #ccc; padding: 8px 10px;}\n\
        th {background: #f3f3f3; text-align: left;}\n\
        </style>";

    let ths: String = HEADERS
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h)))
        .collect();
    let trs: String = rows(result)
        .iter()
        .map(|row| {
            let tds: String = row
                .iter()
                .map(|cell| format!("<td>{}</td>", escape_html(cell)))
                .collect();
            format!("<tr>{tds}</tr>")
        })
        .collect();
    let note = format!(
        "<p><strong>Preferred:</strong> {} &nbsp;&nbsp; <strong>NPV \u{394}:</strong> ${}</p>",
        escape_html(&result.preferred.to_string()),
        money(result.npv_delta)
    );

    format!(
        "<!doctype html><html><head><meta charset='utf-8'>{STYLE}</head>\
         <body><table><thead><tr>{ths}</tr></thead><tbody>{trs}</tbody></table>{note}</body></html>"
    )
}

/// Render CSV: header, two data rows, then a blank line and the
/// `Preferred` / `NPV Delta (USD)` trailer.
#[must_use]
pub fn to_csv(result: &ComparisonResult) -> String {
    let mut csv = String::new();
    let _ = writeln!(csv, "{}", HEADERS.map(csv_field).join(","));
    for row in rows(result) {
        let _ = writeln!(csv, "{}", row.map(|c| csv_field(&c)).join(","));
    }
    let _ = writeln!(csv);
    let _ = writeln!(csv, "Preferred,{}", result.preferred);
    let _ = writeln!(csv, "NPV Delta (USD),{}", csv_field(&money(result.npv_delta)));
    csv
}

/// Quote a CSV field when it contains a comma or a quote.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Minimal HTML entity escaping for table cells.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
