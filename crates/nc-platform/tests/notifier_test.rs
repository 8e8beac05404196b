use nc_core::ports::HistoryNotifierPort;
use nc_core::{ClipboardEntry, ClipboardHistory, HistorySnapshot};
use nc_platform::WatchHistoryNotifier;

fn snapshot_of(texts: &[&str]) -> HistorySnapshot {
    let mut history = ClipboardHistory::default();
    for text in texts.iter().rev() {
        history.upsert_front(ClipboardEntry::text(*text, 0));
    }
    history.snapshot()
}

fn texts(snapshot: &HistorySnapshot) -> Vec<String> {
    snapshot.iter().map(|e| e.payload().to_string()).collect()
}

#[tokio::test]
async fn test_every_subscriber_receives_publish() {
    let notifier = WatchHistoryNotifier::new();
    let mut first = notifier.subscribe();
    let mut second = notifier.subscribe();

    notifier.publish(snapshot_of(&["a"]));

    assert_eq!(texts(&first.changed().await.unwrap()), vec!["a"]);
    assert_eq!(texts(&second.changed().await.unwrap()), vec!["a"]);
}

#[tokio::test]
async fn test_burst_is_coalesced_to_latest() {
    let notifier = WatchHistoryNotifier::new();
    let mut sub = notifier.subscribe();

    notifier.publish(snapshot_of(&["a"]));
    notifier.publish(snapshot_of(&["b", "a"]));

    assert_eq!(texts(&sub.changed().await.unwrap()), vec!["b", "a"]);
}

#[tokio::test]
async fn test_subscriber_sees_snapshots_in_order() {
    let notifier = WatchHistoryNotifier::new();
    let mut sub = notifier.subscribe();

    notifier.publish(snapshot_of(&["a"]));
    let first = sub.changed().await.unwrap();
    notifier.publish(snapshot_of(&["b", "a"]));
    let second = sub.changed().await.unwrap();

    assert_eq!(texts(&first), vec!["a"]);
    assert_eq!(texts(&second), vec!["b", "a"]);
}

#[tokio::test]
async fn test_dropping_a_subscription_does_not_affect_others() {
    let notifier = WatchHistoryNotifier::new();
    let leaving = notifier.subscribe();
    let mut staying = notifier.subscribe();
    assert_eq!(notifier.subscriber_count(), 2);

    drop(leaving);
    notifier.publish(snapshot_of(&["a"]));

    assert_eq!(notifier.subscriber_count(), 1);
    assert_eq!(texts(&staying.changed().await.unwrap()), vec!["a"]);
}

#[tokio::test]
async fn test_late_subscriber_pulls_current_state() {
    let notifier = WatchHistoryNotifier::new();
    assert!(notifier.current().is_empty());

    notifier.publish(snapshot_of(&["x", "y"]));
    let late = notifier.subscribe();

    assert_eq!(texts(&late.latest()), vec!["x", "y"]);
    assert_eq!(texts(&notifier.current()), vec!["x", "y"]);
}

#[tokio::test]
async fn test_publish_without_subscribers_updates_current() {
    let notifier = WatchHistoryNotifier::new();

    notifier.publish(snapshot_of(&["only"]));

    assert_eq!(texts(&notifier.current()), vec!["only"]);
}

#[tokio::test]
async fn test_subscription_ends_when_notifier_dropped() {
    let notifier = WatchHistoryNotifier::new();
    let mut sub = notifier.subscribe();

    drop(notifier);

    assert!(sub.changed().await.is_none());
}
