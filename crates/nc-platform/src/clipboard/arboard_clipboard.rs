//! System clipboard adapter backed by `arboard`.
//!
//! All clipboard access runs on one dedicated thread that owns a single
//! long-lived handle. On X11 the handle is what serves our selection to other
//! applications, so it must outlive the write that filled it. A slow or hung
//! platform clipboard blocks that thread only, never the async runtime.

use std::borrow::Cow;
use std::thread;

use anyhow::Context;
use async_trait::async_trait;
use nc_core::ports::{ClipboardAccessError, SystemClipboardPort};
use nc_core::RawImage;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

type Job<H> = Box<dyn FnOnce(&mut HandleSlot<H>) + Send>;

/// Lazily opened clipboard handle, kept for the lifetime of the worker.
///
/// A failed open is reported to the caller and retried on the next job.
struct HandleSlot<H> {
    open: fn() -> Result<H, String>,
    handle: Option<H>,
}

impl<H> HandleSlot<H> {
    fn get(&mut self) -> Result<&mut H, ClipboardAccessError> {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => (self.open)().map_err(ClipboardAccessError::Unavailable)?,
        };
        Ok(self.handle.insert(handle))
    }
}

/// Queue to a thread that owns a clipboard handle of type `H`.
///
/// The thread exits once every sender is dropped.
struct ClipboardWorker<H> {
    jobs: mpsc::UnboundedSender<Job<H>>,
}

impl<H: 'static> ClipboardWorker<H> {
    fn spawn(name: &str, open: fn() -> Result<H, String>) -> std::io::Result<Self> {
        let (jobs, mut queue) = mpsc::unbounded_channel::<Job<H>>();

        thread::Builder::new().name(name.to_string()).spawn(move || {
            let mut slot = HandleSlot { open, handle: None };
            while let Some(job) = queue.blocking_recv() {
                job(&mut slot);
            }
            debug!("clipboard worker stopped");
        })?;

        Ok(Self { jobs })
    }

    async fn run<T, F>(
        &self,
        on_error: fn(String) -> ClipboardAccessError,
        op: F,
    ) -> Result<T, ClipboardAccessError>
    where
        T: Send + 'static,
        F: FnOnce(&mut H) -> Result<T, arboard::Error> + Send + 'static,
    {
        let (reply, result) = oneshot::channel();
        let job: Job<H> = Box::new(move |slot: &mut HandleSlot<H>| {
            let outcome = slot
                .get()
                .and_then(|handle| op(handle).map_err(|e| on_error(e.to_string())));
            // The caller may have been cancelled; nobody left to tell.
            let _ = reply.send(outcome);
        });

        self.jobs.send(job).map_err(|_| worker_gone())?;
        result.await.map_err(|_| worker_gone())?
    }
}

fn worker_gone() -> ClipboardAccessError {
    ClipboardAccessError::Unavailable("clipboard worker thread stopped".to_string())
}

pub struct ArboardClipboard {
    worker: ClipboardWorker<arboard::Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> anyhow::Result<Self> {
        let worker = ClipboardWorker::spawn("nc-clipboard", || {
            arboard::Clipboard::new().map_err(|e| e.to_string())
        })
        .context("Failed to spawn clipboard worker thread")?;

        Ok(Self { worker })
    }
}

/// "Nothing of this kind on the clipboard" is not an error.
fn absent_as_none<T>(result: Result<T, arboard::Error>) -> Result<Option<T>, arboard::Error> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(e) => Err(e),
    }
}

#[async_trait]
impl SystemClipboardPort for ArboardClipboard {
    async fn read_text(&self) -> Result<Option<String>, ClipboardAccessError> {
        self.worker
            .run(ClipboardAccessError::Read, |cb| absent_as_none(cb.get_text()))
            .await
    }

    async fn read_image(&self) -> Result<Option<RawImage>, ClipboardAccessError> {
        self.worker
            .run(ClipboardAccessError::Read, |cb| {
                absent_as_none(cb.get_image()).map(|image| {
                    image.map(|img| RawImage::new(img.width, img.height, img.bytes.into_owned()))
                })
            })
            .await
    }

    async fn write_text(&self, text: String) -> Result<(), ClipboardAccessError> {
        self.worker
            .run(ClipboardAccessError::Write, move |cb| cb.set_text(text))
            .await
    }

    async fn write_image(&self, image: RawImage) -> Result<(), ClipboardAccessError> {
        self.worker
            .run(ClipboardAccessError::Write, move |cb| {
                cb.set_image(arboard::ImageData {
                    width: image.width,
                    height: image.height,
                    bytes: Cow::Owned(image.rgba),
                })
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stand-in handle that records what was written through it.
    #[derive(Default)]
    struct FakeHandle {
        written: Vec<String>,
    }

    #[tokio::test]
    async fn test_handle_is_opened_once_and_outlives_writes() {
        static OPENED: AtomicUsize = AtomicUsize::new(0);
        let worker = ClipboardWorker::spawn("test-clipboard", || {
            OPENED.fetch_add(1, Ordering::SeqCst);
            Ok(FakeHandle::default())
        })
        .unwrap();

        for text in ["first", "second"] {
            worker
                .run(ClipboardAccessError::Write, move |h: &mut FakeHandle| {
                    h.written.push(text.to_string());
                    Ok(())
                })
                .await
                .unwrap();
        }

        let written = worker
            .run(ClipboardAccessError::Read, |h: &mut FakeHandle| Ok(h.written.clone()))
            .await
            .unwrap();
        assert_eq!(written, vec!["first", "second"]);
        assert_eq!(OPENED.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_open_is_unavailable_and_retried() {
        static ATTEMPTS: AtomicUsize = AtomicUsize::new(0);
        let worker = ClipboardWorker::spawn("test-clipboard", || {
            if ATTEMPTS.fetch_add(1, Ordering::SeqCst) == 0 {
                Err("no display".to_string())
            } else {
                Ok(FakeHandle::default())
            }
        })
        .unwrap();

        let first = worker
            .run(ClipboardAccessError::Read, |_: &mut FakeHandle| Ok(()))
            .await;
        assert!(matches!(
            first,
            Err(ClipboardAccessError::Unavailable(msg)) if msg == "no display"
        ));

        let second = worker
            .run(ClipboardAccessError::Read, |_: &mut FakeHandle| Ok(()))
            .await;
        assert!(second.is_ok());
        assert_eq!(ATTEMPTS.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_operation_error_maps_through_kind() {
        let worker =
            ClipboardWorker::spawn("test-clipboard", || Ok(FakeHandle::default())).unwrap();

        let result: Result<(), _> = worker
            .run(ClipboardAccessError::Write, |_: &mut FakeHandle| {
                Err(arboard::Error::ClipboardOccupied)
            })
            .await;

        assert!(matches!(result, Err(ClipboardAccessError::Write(_))));
    }
}
