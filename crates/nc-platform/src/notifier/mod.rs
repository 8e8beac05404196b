mod watch_notifier;

pub use watch_notifier::{HistorySubscription, WatchHistoryNotifier};
