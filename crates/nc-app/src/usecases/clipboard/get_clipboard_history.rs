use std::sync::Arc;

use nc_core::ports::HistoryNotifierPort;
use nc_core::ClipboardItemView;

/// Pull access to the current history, most recent first.
///
/// Used by the shell when a surface first becomes visible; live updates
/// after that come from the notifier subscription.
pub struct GetClipboardHistory {
    notifier: Arc<dyn HistoryNotifierPort>,
}

impl GetClipboardHistory {
    pub fn new(notifier: Arc<dyn HistoryNotifierPort>) -> Self {
        Self { notifier }
    }

    pub fn execute(&self) -> Vec<ClipboardItemView> {
        self.notifier.current().to_views()
    }
}
