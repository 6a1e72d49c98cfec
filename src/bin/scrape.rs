// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Runs one extraction against the configured page and prints the result.

use jobrs::config::settings::Settings;
use jobrs::domain::services::job_source::JobSource;
use jobrs::engines::chromium_engine::ChromiumFetcher;
use jobrs::engines::table_extractor::TableExtractor;
use jobrs::utils::telemetry;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_telemetry();

    let settings = Settings::new()?;
    let fetcher = Arc::new(ChromiumFetcher::new(
        settings.scraper.remote_debugging_url.clone(),
    ));
    let extractor = TableExtractor::new(fetcher, settings.scraper);

    let jobs = extractor.extract().await;
    if jobs.is_empty() {
        println!("No jobs found or an error occurred.");
        return Ok(());
    }

    for job in &jobs {
        println!("{}", serde_json::to_string(job)?);
    }

    Ok(())
}
