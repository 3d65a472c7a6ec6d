use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::task::JoinHandle;

use crate::dtos::sale::{SaleReceipt, SaleRequest};
use crate::error::AppError;
use crate::pos::executor::SaleExecutor;
use crate::pos::notifier::ViewNotifier;

const QUEUE_CAPACITY: usize = 64;

struct QueuedSale {
    request: SaleRequest,
    cancelled: Arc<AtomicBool>,
    respond_to: oneshot::Sender<Result<SaleReceipt, AppError>>,
}

/// Handle returned by `SaleQueue::submit`. Awaiting it yields the outcome of
/// exactly this request; outcomes arrive in submission order.
pub struct SaleHandle {
    outcome: oneshot::Receiver<Result<SaleReceipt, AppError>>,
    cancelled: Arc<AtomicBool>,
}

impl SaleHandle {
    pub async fn await_outcome(self) -> Result<SaleReceipt, AppError> {
        self.outcome.await.map_err(|_| AppError::QueueClosed)?
    }

    /// Withdraw a request the worker has not picked up yet. An in-flight
    /// transaction always runs to commit or abort regardless.
    pub fn cancel(self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

/// Per-terminal serializer: one worker task applies sales one at a time, in
/// submission order, so no two sales from this process ever interleave at
/// the storage layer. Submission itself never waits on execution.
#[derive(Clone)]
pub struct SaleQueue {
    sender: mpsc::Sender<QueuedSale>,
    closed: Arc<AtomicBool>,
    shutdown: Arc<Mutex<Option<oneshot::Sender<()>>>>,
    worker: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl SaleQueue {
    pub fn new(executor: SaleExecutor, notifier: ViewNotifier) -> Self {
        let (sender, receiver) = mpsc::channel(QUEUE_CAPACITY);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let worker = tokio::spawn(run_worker(receiver, shutdown_rx, executor, notifier));

        Self {
            sender,
            closed: Arc::new(AtomicBool::new(false)),
            shutdown: Arc::new(Mutex::new(Some(shutdown_tx))),
            worker: Arc::new(Mutex::new(Some(worker))),
        }
    }

    /// Enqueue a validated sale and return immediately with a handle.
    pub async fn submit(&self, request: SaleRequest) -> Result<SaleHandle, AppError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(AppError::QueueClosed);
        }

        let cancelled = Arc::new(AtomicBool::new(false));
        let (respond_to, outcome) = oneshot::channel();
        let job = QueuedSale {
            request,
            cancelled: cancelled.clone(),
            respond_to,
        };

        self.sender
            .send(job)
            .await
            .map_err(|_| AppError::QueueClosed)?;

        Ok(SaleHandle { outcome, cancelled })
    }

    /// Drain-and-stop: work already queued still runs to completion, new
    /// submissions get `QueueClosed`, and the worker task is joined before
    /// this returns.
    pub async fn shutdown(&self) {
        self.closed.store(true, Ordering::SeqCst);

        if let Some(signal) = self.shutdown.lock().await.take() {
            let _ = signal.send(());
        }

        let handle = self.worker.lock().await.take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }
}

async fn run_worker(
    mut receiver: mpsc::Receiver<QueuedSale>,
    mut shutdown: oneshot::Receiver<()>,
    executor: SaleExecutor,
    notifier: ViewNotifier,
) {
    let mut draining = false;

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown, if !draining => {
                // Stop accepting while finishing what is already buffered.
                receiver.close();
                draining = true;
            }
            job = receiver.recv() => {
                let Some(job) = job else { break };
                process(job, &executor, &notifier).await;
            }
        }
    }

    tracing::debug!("Sale queue worker drained and stopped");
}

async fn process(job: QueuedSale, executor: &SaleExecutor, notifier: &ViewNotifier) {
    if job.cancelled.load(Ordering::SeqCst) {
        // Withdrawn before pickup: nothing ran, nothing to report.
        return;
    }

    let outcome = executor.execute(job.request).await;

    if outcome.is_ok() {
        // Views refresh before the outcome is released, so a submitter that
        // awaits its receipt reads listings already consistent with it.
        notifier.notify_after_commit().await;
    }

    // The submitter may have dropped its handle; delivery is best-effort.
    let _ = job.respond_to.send(outcome);
}
