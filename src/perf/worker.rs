//! Background worker for viewport aggregation
//!
//! Keeps the render thread free while large series are reduced. Requests are
//! stamped with a generation; only the newest one is worth computing or
//! applying, so anything older is dropped on both ends of the channel.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError, channel};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::config::ChartConfig;
use crate::data::FieldSet;
use crate::error::{EngineError, Result};
use crate::render::{RenderSeries, build_series};
use crate::viewport::Viewport;

/// One redraw's worth of work
#[derive(Debug, Clone)]
pub struct AggregationRequest {
    pub generation: u64,
    pub fields: Arc<FieldSet>,
    pub selected: Vec<String>,
    pub viewport: Viewport,
    pub config: ChartConfig,
}

/// Requests that can be sent to the background worker
enum WorkerRequest {
    Aggregate(AggregationRequest),
    Shutdown,
}

/// Results returned from the background worker
#[derive(Debug)]
pub enum WorkerResult {
    /// Aggregation complete
    Ready {
        generation: u64,
        series: Vec<RenderSeries>,
    },
    /// The request was rejected
    Error { generation: u64, error: EngineError },
}

impl WorkerResult {
    pub fn generation(&self) -> u64 {
        match self {
            WorkerResult::Ready { generation, .. } | WorkerResult::Error { generation, .. } => {
                *generation
            }
        }
    }
}

/// Background worker that aggregates off the render thread
pub struct AggregationWorker {
    tx: Sender<WorkerRequest>,
    rx: Receiver<WorkerResult>,
    /// Generation of the most recently issued request
    latest: Arc<AtomicU64>,
    /// Generation of the most recently delivered result
    delivered: u64,
    handle: Option<JoinHandle<()>>,
}

impl AggregationWorker {
    /// Spawn a new background worker thread
    pub fn spawn() -> Self {
        let (req_tx, req_rx) = channel::<WorkerRequest>();
        let (res_tx, res_rx) = channel::<WorkerResult>();
        let latest = Arc::new(AtomicU64::new(0));

        let worker_latest = Arc::clone(&latest);
        let handle = thread::spawn(move || {
            Self::worker_loop(req_rx, res_tx, worker_latest);
        });

        Self {
            tx: req_tx,
            rx: res_rx,
            latest,
            delivered: 0,
            handle: Some(handle),
        }
    }

    fn worker_loop(rx: Receiver<WorkerRequest>, tx: Sender<WorkerResult>, latest: Arc<AtomicU64>) {
        while let Ok(request) = rx.recv() {
            let mut pending = match request {
                WorkerRequest::Aggregate(req) => req,
                WorkerRequest::Shutdown => break,
            };

            // Collapse the backlog onto its newest request
            loop {
                match rx.try_recv() {
                    Ok(WorkerRequest::Aggregate(newer)) => pending = newer,
                    Ok(WorkerRequest::Shutdown) => return,
                    Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
                }
            }

            if pending.generation < latest.load(Ordering::Acquire) {
                tracing::trace!(generation = pending.generation, "skipping superseded request");
                continue;
            }

            let result = Self::compute(pending);
            if tx.send(result).is_err() {
                break;
            }
        }
    }

    fn compute(req: AggregationRequest) -> WorkerResult {
        profiling::scope!("worker_aggregate");

        match build_series(&req.fields, &req.selected, &req.viewport, &req.config) {
            Ok(series) => WorkerResult::Ready {
                generation: req.generation,
                series,
            },
            Err(error) => WorkerResult::Error {
                generation: req.generation,
                error,
            },
        }
    }

    /// Queue an aggregation; returns the generation that identifies it
    pub fn request(
        &self,
        fields: Arc<FieldSet>,
        selected: Vec<String>,
        viewport: Viewport,
        config: ChartConfig,
    ) -> Result<u64> {
        let generation = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        let req = AggregationRequest {
            generation,
            fields,
            selected,
            viewport,
            config,
        };
        self.tx
            .send(WorkerRequest::Aggregate(req))
            .map_err(|_| EngineError::WorkerDisconnected)?;
        Ok(generation)
    }

    /// Generation of the most recently issued request (0 before any)
    pub fn latest_generation(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }

    /// Poll for the latest completed work (non-blocking)
    pub fn poll(&mut self) -> Option<WorkerResult> {
        loop {
            match self.rx.try_recv() {
                Ok(result) => {
                    if let Some(result) = self.accept(result) {
                        return Some(result);
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return None,
            }
        }
    }

    /// Block until the latest request completes or `timeout` passes
    pub fn wait_latest(&mut self, timeout: Duration) -> Option<WorkerResult> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(result) => {
                    if let Some(result) = self.accept(result) {
                        return Some(result);
                    }
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return None;
                }
            }
        }
    }

    /// Keep a result only if no newer request has been issued since
    fn accept(&mut self, result: WorkerResult) -> Option<WorkerResult> {
        let generation = result.generation();
        let latest = self.latest_generation();
        if generation < latest {
            tracing::debug!(generation, latest, "discarding stale aggregation result");
            return None;
        }
        self.delivered = generation;
        Some(result)
    }

    /// Whether the latest request is still outstanding
    pub fn is_busy(&self) -> bool {
        self.delivered < self.latest_generation()
    }
}

impl Drop for AggregationWorker {
    fn drop(&mut self) {
        let _ = self.tx.send(WorkerRequest::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Default for AggregationWorker {
    fn default() -> Self {
        Self::spawn()
    }
}
