//! Dependency wiring
//!
//! Builds the engine from concrete adapters. The system clipboard is passed
//! in so the same wiring serves the real shell and tests.

use std::sync::Arc;

use nc_app::{ClipboardSampler, ContentNormalizer, CopyEntryToClipboard, GetClipboardHistory};
use nc_core::ports::{ImageCodecPort, SystemClipboardPort};
use nc_core::AppConfig;
use nc_infra::{Blake3Hasher, PngImageCodec, SystemClock};
use nc_platform::{HistorySubscription, PollingClipboardRuntime, WatchHistoryNotifier};

/// Everything the shell talks to.
pub struct ClipboardEngine {
    pub notifier: Arc<WatchHistoryNotifier>,
    pub runtime: Arc<PollingClipboardRuntime>,
    pub get_history: GetClipboardHistory,
    pub copy_entry: CopyEntryToClipboard,
}

impl ClipboardEngine {
    pub fn subscribe(&self) -> HistorySubscription {
        self.notifier.subscribe()
    }
}

pub fn wire_engine(
    config: &AppConfig,
    clipboard: Arc<dyn SystemClipboardPort>,
) -> ClipboardEngine {
    let codec: Arc<dyn ImageCodecPort> = Arc::new(PngImageCodec);
    let notifier = Arc::new(WatchHistoryNotifier::new());

    let sampler = ClipboardSampler::new(
        clipboard.clone(),
        ContentNormalizer::new(Arc::new(Blake3Hasher), codec.clone()),
        notifier.clone(),
        Arc::new(SystemClock),
        config.max_entries,
    );
    let runtime = Arc::new(PollingClipboardRuntime::new(sampler, config.poll_interval()));

    ClipboardEngine {
        get_history: GetClipboardHistory::new(notifier.clone()),
        copy_entry: CopyEntryToClipboard::new(notifier.clone(), clipboard, codec),
        notifier,
        runtime,
    }
}
