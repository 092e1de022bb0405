//! Compare command - run a lifecycle cost comparison locally.

use anyhow::{Context, Result};
use clap::Args;
use std::borrow::Cow;
use std::path::PathBuf;
use tabled::Tabled;

use lcca_config::load_cost_book;
use lcca_core::{Cluster, ComparisonResult, CostEstimate};
use lcca_model::CostModel;
use lcca_report::{money, to_csv, to_html, to_markdown, ReportFormat, HEADERS};

use crate::output::{self, CommandResult, OutputFormat};

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Cost book file
    #[arg(short, long, default_value = "config/cost_book.yaml")]
    pub book: PathBuf,

    /// Number of lots in the cluster
    #[arg(short = 'n', long)]
    pub lots: u32,

    /// Estimated main line length in linear feet
    #[arg(long)]
    pub main_lf: f64,

    /// Estimated lateral length in linear feet
    #[arg(long)]
    pub laterals_lf: f64,

    /// Financial horizon in years (defaults to the cost book, then 30)
    #[arg(long)]
    pub years: Option<u32>,

    /// Annual discount rate (defaults to the cost book, then 0.06)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Energy cost in $/kWh (defaults to the cost book, then 0.14)
    #[arg(long)]
    pub energy_rate: Option<f64>,

    /// Render as json, markdown, html, or csv instead of a table
    #[arg(short, long)]
    pub fmt: Option<String>,

    /// Write the rendering to a file instead of stdout
    #[arg(short, long, requires = "fmt")]
    pub output: Option<PathBuf>,
}

/// One table row per system. Column headers come from the shared report
/// header set so the CLI table cannot drift from the rendered reports.
struct SystemRow {
    system: String,
    capex: String,
    annual_om_year1: String,
    npv_om: String,
    npv_total: String,
}

impl Tabled for SystemRow {
    const LENGTH: usize = HEADERS.len();

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.system.as_str()),
            Cow::Borrowed(self.capex.as_str()),
            Cow::Borrowed(self.annual_om_year1.as_str()),
            Cow::Borrowed(self.npv_om.as_str()),
            Cow::Borrowed(self.npv_total.as_str()),
        ]
    }

    fn headers() -> Vec<Cow<'static, str>> {
        HEADERS.iter().copied().map(Cow::Borrowed).collect()
    }
}

impl From<&CostEstimate> for SystemRow {
    fn from(estimate: &CostEstimate) -> Self {
        Self {
            system: estimate.system.to_string(),
            capex: money(estimate.capex),
            annual_om_year1: money(estimate.annual_om_year1),
            npv_om: money(estimate.npv_om),
            npv_total: money(estimate.npv_total),
        }
    }
}

/// Execute the compare command.
pub async fn execute(args: CompareArgs, json: bool) -> Result<()> {
    let book = load_cost_book(&args.book)
        .await
        .with_context(|| format!("failed to load cost book from {}", args.book.display()))?;
    let model = CostModel::new(book);

    let mut cluster = Cluster::new(args.lots, args.main_lf, args.laterals_lf);
    if let Some(years) = args.years {
        cluster = cluster.with_analysis_years(years);
    }
    if let Some(rate) = args.rate {
        cluster = cluster.with_discount_rate(rate);
    }
    if let Some(rate) = args.energy_rate {
        cluster = cluster.with_energy_rate(rate);
    }

    let result = model.compare(&cluster)?;

    if let Some(ref fmt) = args.fmt {
        let fmt: ReportFormat = fmt.parse()?;
        let rendered = render(&result, fmt)?;
        match args.output {
            Some(path) => {
                tokio::fs::write(&path, rendered)
                    .await
                    .with_context(|| format!("failed to write {}", path.display()))?;
                output::success(&format!("Wrote {} report to {}", fmt.name(), path.display()));
            }
            None => println!("{rendered}"),
        }
        return Ok(());
    }

    if json {
        return CommandResult::success(&result).print(OutputFormat::Json);
    }

    print_table(&result);
    Ok(())
}

/// Render a comparison in one of the report formats.
fn render(result: &ComparisonResult, fmt: ReportFormat) -> Result<String> {
    Ok(match fmt {
        ReportFormat::Json => serde_json::to_string_pretty(result)?,
        ReportFormat::Markdown => to_markdown(result),
        ReportFormat::Html => to_html(result),
        ReportFormat::Csv => to_csv(result),
    })
}

/// Print the human-readable comparison table and summary.
fn print_table(result: &ComparisonResult) {
    output::section("Lifecycle Cost Comparison");
    output::table(&[
        SystemRow::from(&result.vacuum),
        SystemRow::from(&result.pressure),
    ]);
    output::key_value("Preferred", &result.preferred.to_string());
    output::key_value("NPV delta", &format!("${}", money(result.npv_delta)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcca_config::CostBook;

    const BOOK: &str = r"
vacuum:
  main_per_lf_shallow: 50
  lateral_per_lf: 30
  station_per_400_lots_ls: 150000
  valve_pit_each: 2000
  annual_om_per_conn: 120
  energy_kwh_per_conn_day: 0.5
pressure:
  main_per_lf_shallow: 40
  lateral_per_lf: 25
  grinder_pump_package_each: 4500
  booster_ls: 120000
  annual_om_per_conn: 180
  energy_kwh_per_conn_day: 1.2
  pump_replace_years: 10
  pump_replace_cost_each: 2500
";

    fn sample_result() -> ComparisonResult {
        let model = CostModel::new(CostBook::from_yaml_str(BOOK).unwrap());
        model.compare(&Cluster::new(100, 5000.0, 2000.0)).unwrap()
    }

    #[test]
    fn test_system_row_formats_money() {
        let result = sample_result();
        let row = SystemRow::from(&result.vacuum);
        assert_eq!(row.system, "Vacuum");
        assert_eq!(row.capex, "560,000.00");
    }

    #[test]
    fn test_table_headers_match_report_headers() {
        let headers = SystemRow::headers();
        assert_eq!(headers.len(), HEADERS.len());
        for (header, expected) in headers.iter().zip(HEADERS) {
            assert_eq!(header.as_ref(), expected);
        }
    }

    #[test]
    fn test_render_json_is_structured() {
        let rendered = render(&sample_result(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["vacuum"]["system"], "Vacuum");
    }

    #[test]
    fn test_render_csv_has_trailer() {
        let rendered = render(&sample_result(), ReportFormat::Csv).unwrap();
        assert!(rendered.contains("Preferred,"));
    }
}
