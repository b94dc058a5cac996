//! Tag Sweep command-line front end
//!
//! Reads its settings from the environment, sweeps every tag/index phrase
//! and prints each delivered video as one JSON line on stdout. Logs go to
//! stderr. Ctrl-C stops the sweep before the next request.
//!
//! ```text
//! YT_API_KEY=...              required
//! TAGSWEEP_TAGS=dsc,img       comma separated
//! TAGSWEEP_START_INDEX=1
//! TAGSWEEP_END_INDEX=10
//! TAGSWEEP_MAX_RESULTS_PER_QUERY=-1   negative = unbounded
//! TAGSWEEP_REQUEST_DELAY_MS=2000
//! TAGSWEEP_SEED=42            optional
//! RUST_LOG=info
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use tagsweep_core::{ClientConfig, SweepConfig, Video, sweep};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = SweepConfig::from_env();
    config.validate().context("invalid sweep configuration")?;
    let client = ClientConfig::from_env().context("cannot authenticate")?;

    info!(
        tags = ?config.tags,
        start_index = config.start_index,
        end_index = config.end_index,
        max_results_per_query = ?config.max_results_per_query,
        "getting youtube vids"
    );

    let cancel = CancellationToken::new();
    tokio::spawn(cancel_on_ctrl_c(cancel.clone()));

    let mut stdout = std::io::stdout().lock();
    let summary = sweep(&config, client, cancel, |vids| {
        if let Err(e) = write_batch(&mut stdout, &vids) {
            warn!(error = %e, "failed to write batch");
        }
    })
    .await?;

    info!(
        processed = summary.items_processed,
        failed = summary.items_failed,
        delivered = summary.videos_delivered,
        cancelled = summary.cancelled,
        "done"
    );

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn cancel_on_ctrl_c(cancel: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_ok() {
        warn!("interrupted, stopping after the current request");
        cancel.cancel();
    }
}

/// Write one JSON object per video, one per line
fn write_batch<W: Write>(out: &mut W, vids: &[Video]) -> Result<()> {
    for vid in vids {
        serde_json::to_writer(&mut *out, vid)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            uploaded_at: "2024-05-06T07:08:09Z".parse().unwrap(),
            view_count: 12,
            duration_seconds: 33.0,
        }
    }

    #[test]
    fn test_write_batch_json_lines() {
        let mut out = Vec::new();
        write_batch(&mut out, &[video("a"), video("b")]).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["id"], "a");
        assert_eq!(first["view_count"], 12);
        assert_eq!(first["duration_seconds"], 33.0);
        assert_eq!(first["uploaded_at"], "2024-05-06T07:08:09Z");
    }

    #[test]
    fn test_write_empty_batch() {
        let mut out = Vec::new();
        write_batch(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
