//! Costs command - fetch the cost book from a running service.

use anyhow::{Context, Result};
use clap::Args;
use std::time::Duration;

use crate::output::{self, OutputFormat};

/// Arguments for the costs command.
#[derive(Args, Debug)]
pub struct CostsArgs {
    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}

/// Execute the costs command.
pub async fn execute(args: CostsArgs, url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);
    let endpoint = format!("{}/vendors/costs", url.trim_end_matches('/'));

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()
        .context("failed to build HTTP client")?;

    let spinner = (format == OutputFormat::Text).then(|| output::spinner("Fetching cost book..."));

    let response = client.get(&endpoint).send().await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let response = response.with_context(|| format!("request to {endpoint} failed"))?;
    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("service returned {status} for {endpoint}");
    }

    let document: serde_json::Value = response
        .json()
        .await
        .context("service returned a non-JSON cost book")?;

    if format == OutputFormat::Text {
        output::section("Cost Book");
    }
    output::json(&document)
}
