// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

use crate::config::settings::MetricsSettings;

pub const REFRESH_TOTAL: &str = "jobrs_refresh_total";
pub const ROWS_SKIPPED_TOTAL: &str = "jobrs_rows_skipped_total";
pub const SNAPSHOT_LISTINGS: &str = "jobrs_snapshot_listings";
pub const EXTRACT_DURATION_SECONDS: &str = "jobrs_extract_duration_seconds";

pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.listen_addr, e);
            return;
        }
    };

    // A busy port only disables the exporter
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!(
            "Failed to install Prometheus recorder, is {} already in use? {}",
            addr, e
        );
        return;
    }

    info!("Metrics exporter listening on {}", addr);
}
