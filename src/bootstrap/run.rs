//! Headless shell
//!
//! Stands in for the panel UI: it starts the engine, then logs every
//! history snapshot as it arrives until Ctrl-C. Typing an entry index on
//! stdin copies that entry back to the system clipboard, like clicking it in
//! the panel.

use std::sync::Arc;

use anyhow::Context;
use nc_core::{EntryKind, HistorySnapshot};
use nc_platform::ports::ClipboardRuntimePort;
use nc_platform::ArboardClipboard;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use super::{
    config::resolve_config,
    tracing::init_tracing_subscriber,
    wiring::{wire_engine, ClipboardEngine},
};
use crate::Cli;

const PREVIEW_CHARS: usize = 40;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.apply_overrides(resolve_config(cli.config.as_deref())?);
    init_tracing_subscriber(config.log_to_file)?;
    info!(?config, "starting notchclip");

    let engine = wire_engine(&config, Arc::new(ArboardClipboard::new()?));

    if cli.once {
        engine.runtime.poll_now().await;
        let history = engine.get_history.execute();
        println!(
            "{}",
            serde_json::to_string_pretty(&history).context("Failed to serialize history")?
        );
        return Ok(());
    }

    let mut subscription = engine.subscribe();
    engine.runtime.start().await?;

    let mut commands = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            snapshot = subscription.changed() => match snapshot {
                Some(snapshot) => log_snapshot(&snapshot),
                None => break,
            },
            line = commands.next_line(), if stdin_open => match line {
                Ok(Some(line)) => copy_back(&engine, &line).await,
                Ok(None) => stdin_open = false,
                Err(err) => {
                    warn!(error = %err, "stdin closed, copy-back disabled");
                    stdin_open = false;
                }
            },
            signal = tokio::signal::ctrl_c() => {
                if let Err(err) = signal {
                    warn!(error = %err, "failed to listen for ctrl-c");
                }
                break;
            }
        }
    }

    engine.runtime.stop().await?;
    info!("notchclip stopped");
    Ok(())
}

async fn copy_back(engine: &ClipboardEngine, line: &str) {
    let Some(index) = parse_copy_index(line) else {
        if !line.trim().is_empty() {
            warn!(input = %line.trim(), "expected a history index");
        }
        return;
    };

    match engine.copy_entry.execute(index).await {
        Ok(kind) => info!(index, ?kind, "copied history entry to clipboard"),
        Err(err) => warn!(index, error = %err, "failed to copy history entry"),
    }
}

fn parse_copy_index(line: &str) -> Option<usize> {
    line.trim().parse().ok()
}

fn log_snapshot(snapshot: &HistorySnapshot) {
    let Some(latest) = snapshot.first() else {
        return;
    };

    let preview = match latest.kind() {
        EntryKind::Text => preview(latest.payload()),
        EntryKind::Image => format!("<image, {} bytes encoded>", latest.payload().len()),
    };
    info!(entries = snapshot.len(), latest = %preview, "clipboard history changed");
}

fn preview(text: &str) -> String {
    let mut preview: String = text
        .chars()
        .take(PREVIEW_CHARS)
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if text.chars().count() > PREVIEW_CHARS {
        preview.push('…');
    }
    preview
}
