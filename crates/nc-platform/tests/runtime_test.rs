use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use nc_app::{ClipboardSampler, ContentNormalizer};
use nc_core::ports::{ClipboardAccessError, HistoryNotifierPort, SystemClipboardPort};
use nc_core::RawImage;
use nc_infra::{Blake3Hasher, PngImageCodec, SystemClock};
use nc_platform::ports::ClipboardRuntimePort;
use nc_platform::{PollingClipboardRuntime, WatchHistoryNotifier};

#[derive(Default)]
struct TextClipboard {
    text: Mutex<Option<String>>,
}

impl TextClipboard {
    fn copy(&self, text: &str) {
        *self.text.lock().unwrap() = Some(text.to_string());
    }
}

#[async_trait]
impl SystemClipboardPort for TextClipboard {
    async fn read_text(&self) -> Result<Option<String>, ClipboardAccessError> {
        Ok(self.text.lock().unwrap().clone())
    }

    async fn read_image(&self) -> Result<Option<RawImage>, ClipboardAccessError> {
        Ok(None)
    }

    async fn write_text(&self, text: String) -> Result<(), ClipboardAccessError> {
        self.copy(&text);
        Ok(())
    }

    async fn write_image(&self, _image: RawImage) -> Result<(), ClipboardAccessError> {
        Ok(())
    }
}

fn runtime(
    clipboard: Arc<TextClipboard>,
    notifier: Arc<WatchHistoryNotifier>,
) -> PollingClipboardRuntime {
    let sampler = ClipboardSampler::new(
        clipboard,
        ContentNormalizer::new(Arc::new(Blake3Hasher), Arc::new(PngImageCodec)),
        notifier,
        Arc::new(SystemClock),
        50,
    );
    PollingClipboardRuntime::new(sampler, Duration::from_millis(500))
}

fn texts(notifier: &WatchHistoryNotifier) -> Vec<String> {
    notifier
        .current()
        .iter()
        .map(|e| e.payload().to_string())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_runtime_pushes_snapshots_as_clipboard_changes() {
    let clipboard = Arc::new(TextClipboard::default());
    let notifier = Arc::new(WatchHistoryNotifier::new());
    let mut sub = notifier.subscribe();
    let runtime = runtime(clipboard.clone(), notifier.clone());

    clipboard.copy("a");
    runtime.start().await.unwrap();
    let first = sub.changed().await.unwrap();
    assert_eq!(first.len(), 1);

    clipboard.copy("b");
    let second = sub.changed().await.unwrap();
    assert_eq!(second[0].payload(), "b");
    assert_eq!(texts(&notifier), vec!["b", "a"]);

    runtime.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_unchanged_clipboard_is_quiet_across_ticks() {
    let clipboard = Arc::new(TextClipboard::default());
    let notifier = Arc::new(WatchHistoryNotifier::new());
    let runtime = runtime(clipboard.clone(), notifier.clone());

    clipboard.copy("steady");
    runtime.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    let baseline = notifier.current();
    let mut sub = notifier.subscribe();

    tokio::time::sleep(Duration::from_secs(5)).await;

    assert_eq!(notifier.current(), baseline);
    assert_eq!(texts(&notifier), vec!["steady"]);
    assert!(
        tokio::time::timeout(Duration::from_secs(2), sub.changed())
            .await
            .is_err(),
        "no notification expected for an unchanged clipboard"
    );

    runtime.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_stop_halts_sampling() {
    let clipboard = Arc::new(TextClipboard::default());
    let notifier = Arc::new(WatchHistoryNotifier::new());
    let runtime = runtime(clipboard.clone(), notifier.clone());

    clipboard.copy("before");
    runtime.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    runtime.stop().await.unwrap();
    assert!(!runtime.is_running());

    clipboard.copy("after");
    tokio::time::sleep(Duration::from_secs(3)).await;

    assert_eq!(texts(&notifier), vec!["before"]);
}

#[tokio::test(start_paused = true)]
async fn test_start_and_stop_are_idempotent() {
    let clipboard = Arc::new(TextClipboard::default());
    let notifier = Arc::new(WatchHistoryNotifier::new());
    let runtime = runtime(clipboard, notifier);

    runtime.stop().await.unwrap();
    runtime.start().await.unwrap();
    runtime.start().await.unwrap();
    assert!(runtime.is_running());

    runtime.stop().await.unwrap();
    runtime.stop().await.unwrap();
    assert!(!runtime.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_restart_resumes_with_existing_history() {
    let clipboard = Arc::new(TextClipboard::default());
    let notifier = Arc::new(WatchHistoryNotifier::new());
    let runtime = runtime(clipboard.clone(), notifier.clone());

    clipboard.copy("one");
    runtime.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    runtime.stop().await.unwrap();

    clipboard.copy("two");
    runtime.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    runtime.stop().await.unwrap();

    assert_eq!(texts(&notifier), vec!["two", "one"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_start_and_stop_leave_no_loop_behind() {
    let clipboard = Arc::new(TextClipboard::default());
    let notifier = Arc::new(WatchHistoryNotifier::new());
    let runtime = Arc::new(runtime(clipboard.clone(), notifier.clone()));

    let mut tasks = Vec::new();
    for _ in 0..100 {
        let rt = runtime.clone();
        tasks.push(tokio::spawn(async move { rt.start().await }));
        let rt = runtime.clone();
        tasks.push(tokio::spawn(async move { rt.stop().await }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }
    runtime.stop().await.unwrap();
    assert!(!runtime.is_running());

    tokio::time::sleep(Duration::from_millis(50)).await;
    clipboard.copy("after stop");
    tokio::time::sleep(Duration::from_millis(1200)).await;

    assert!(texts(&notifier).is_empty());
}

#[test]
fn test_zero_period_is_clamped() {
    let sampler = ClipboardSampler::new(
        Arc::new(TextClipboard::default()),
        ContentNormalizer::new(Arc::new(Blake3Hasher), Arc::new(PngImageCodec)),
        Arc::new(WatchHistoryNotifier::new()),
        Arc::new(SystemClock),
        50,
    );
    let runtime = PollingClipboardRuntime::new(sampler, Duration::ZERO);

    assert!(runtime.period() > Duration::ZERO);
}
