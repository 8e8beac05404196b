mod runtime;

pub use runtime::PollingClipboardRuntime;
