//! Background execution of a single filter.
//!
//! A UI thread hands a filter to [`spawn_filter`] and keeps running; the
//! result comes back over a channel. The engine itself stays synchronous.
//! Dropping a [`FilterJob`] abandons its result; the worker's send then
//! fails silently and nothing else is affected. A panicking filter is caught
//! on the worker and surfaces as [`FilterError::WorkerDisconnected`].

use std::borrow::Cow;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crossbeam::channel::{self, Receiver, TryRecvError};

use crate::buffer::{FilterError, PixelBuffer};
use crate::filters::{apply_filter, FilterKind};

/// Handle to one filter running on the rayon pool.
#[derive(Debug)]
pub struct FilterJob {
    kind: FilterKind,
    receiver: Receiver<Arc<PixelBuffer>>,
}

/// Run `kind` on `input` in the background.
///
/// The result is shared as an `Arc`. When a filter leaves the image
/// unchanged (flat image under linear contrast) the result is the input
/// `Arc` itself.
pub fn spawn_filter(kind: FilterKind, input: Arc<PixelBuffer>) -> FilterJob {
    spawn_job(kind, move || match apply_filter(kind, &input) {
        Cow::Borrowed(_) => Arc::clone(&input),
        Cow::Owned(output) => Arc::new(output),
    })
}

/// Run `job` on the rayon pool and deliver its result to the returned handle.
///
/// A panic inside `job` must not reach rayon, whose default handler aborts
/// the process. It is caught here and the sender dropped, so the receiver
/// observes a disconnect.
fn spawn_job<F>(kind: FilterKind, job: F) -> FilterJob
where
    F: FnOnce() -> Arc<PixelBuffer> + Send + 'static,
{
    let (sender, receiver) = channel::bounded(1);

    rayon::spawn(move || match panic::catch_unwind(AssertUnwindSafe(job)) {
        Ok(result) => {
            if sender.send(result).is_err() {
                log::debug!("{kind} result discarded, job was dropped");
            }
        }
        Err(_) => log::error!("{kind} worker panicked, no result delivered"),
    });

    FilterJob { kind, receiver }
}

impl FilterJob {
    /// The filter this job runs.
    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Block until the filter finishes.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::WorkerDisconnected` if the worker panicked.
    pub fn wait(self) -> Result<Arc<PixelBuffer>, FilterError> {
        self.receiver
            .recv()
            .map_err(|_| FilterError::WorkerDisconnected)
    }

    /// Return the result if it is ready, `Ok(None)` otherwise.
    pub fn try_result(&self) -> Result<Option<Arc<PixelBuffer>>, FilterError> {
        match self.receiver.try_recv() {
            Ok(result) => Ok(Some(result)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(FilterError::WorkerDisconnected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{equalize_histogram, median_filter};

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let pixels: Vec<u8> = (0..width * height)
            .flat_map(|i| {
                let v = (i * 255 / (width * height)) as u8;
                [v, v / 2, 255 - v, 255]
            })
            .collect();
        PixelBuffer::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_background_matches_synchronous() {
        let _ = env_logger::builder().is_test(true).try_init();
        let input = Arc::new(gradient(32, 24));

        let median = spawn_filter(FilterKind::Median, Arc::clone(&input));
        let equalized = spawn_filter(FilterKind::HistogramEqualization, Arc::clone(&input));

        assert_eq!(median.kind(), FilterKind::Median);
        assert_eq!(*median.wait().unwrap(), median_filter(&input));
        assert_eq!(*equalized.wait().unwrap(), equalize_histogram(&input));
    }

    #[test]
    fn test_flat_contrast_returns_same_arc() {
        let input = Arc::new(PixelBuffer::filled(8, 8, [30, 60, 90, 120]).unwrap());
        let job = spawn_filter(FilterKind::LinearContrast, Arc::clone(&input));

        let result = job.wait().unwrap();
        assert!(Arc::ptr_eq(&result, &input));
    }

    #[test]
    fn test_try_result_eventually_ready() {
        let input = Arc::new(gradient(4, 4));
        let job = spawn_filter(FilterKind::LinearContrast, input);

        let result = loop {
            if let Some(result) = job.try_result().unwrap() {
                break result;
            }
            std::thread::yield_now();
        };
        assert!(result.is_grayscale());
    }

    #[test]
    fn test_dropped_job_is_harmless() {
        let input = Arc::new(gradient(16, 16));
        drop(spawn_filter(FilterKind::Median, Arc::clone(&input)));

        // The pool keeps working after an abandoned job
        let job = spawn_filter(FilterKind::Median, input);
        assert!(job.wait().is_ok());
    }

    #[test]
    fn test_panicking_job_reports_disconnect() {
        let job = spawn_job(FilterKind::Median, || panic!("filter blew up"));
        assert_eq!(job.wait(), Err(FilterError::WorkerDisconnected));

        // The process and the pool survive the panic
        let input = Arc::new(gradient(8, 8));
        let job = spawn_filter(FilterKind::Median, Arc::clone(&input));
        assert_eq!(*job.wait().unwrap(), median_filter(&input));
    }

    #[test]
    fn test_try_result_sees_disconnect_after_panic() {
        let job = spawn_job(FilterKind::LinearContrast, || panic!("filter blew up"));

        let outcome = loop {
            match job.try_result() {
                Ok(None) => std::thread::yield_now(),
                other => break other,
            }
        };
        assert_eq!(outcome, Err(FilterError::WorkerDisconnected));
    }
}
