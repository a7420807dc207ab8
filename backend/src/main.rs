//! Line-driven harness for the currency mask.
//!
//! Reads one JSON-encoded `MaskEvent` per line from stdin and writes the
//! resulting effects, and every committed model value, as JSON lines on
//! stdout. An optional first argument names a JSON options file.
//!
//! ```text
//! {"type":"model_available","value":"123456"}
//! {"type":"key_up","key_code":55,"display":"1,234.567"}
//! {"type":"display_edited","text":"12,345.67"}
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use currency_mask::{MaskOptionsExt, MaskSession};
use serde_json::json;
use shared::{MaskEvent, MaskOptions};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let options = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => MaskOptions::from_file(&path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => MaskOptions::default(),
    };
    info!("Starting currency mask with {:?}", options);

    let (mut session, mut commits) = MaskSession::start(options);

    let printer = tokio::spawn(async move {
        while let Some(model) = commits.recv().await {
            println!("{}", json!({ "type": "model_write", "value": model }));
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event: MaskEvent = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(e) => {
                warn!("Skipping malformed event {:?}: {}", line, e);
                continue;
            }
        };

        for effect in session.dispatch(event)? {
            println!("{}", serde_json::to_string(&effect)?);
        }
    }

    info!("Input closed, flushing pending model write");
    session.close().await?;
    printer.await?;

    Ok(())
}
