use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread::JoinHandle;

use tracing::{debug, trace, warn};

use crate::error::{EaselError, EaselResult};

use super::engine::{BorderEngine, CalculationResult};
use super::{BorderEngineConfig, CalculatorSettings};

pub type RequestId = u64;

/// One calculation request, self-contained so it can cross a thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputeRequest {
    pub id: RequestId,
    pub settings: CalculatorSettings,
    pub last_valid_min_border: f64,
}

/// A finished calculation tagged with the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeOutcome {
    pub id: RequestId,
    pub result: CalculationResult,
}

/// Where calculations run.
///
/// `submit` hands over a request and returns immediately; `try_take` yields
/// finished outcomes without blocking. A newer submission supersedes an
/// unstarted older one, so backends never owe more than the latest answer.
pub trait ComputeBackend: Send {
    fn submit(&mut self, request: ComputeRequest) -> EaselResult<()>;
    fn try_take(&mut self) -> Option<ComputeOutcome>;
}

/// Synchronous backend: computes the pending request on the next poll.
///
/// Used directly on platforms without threads and as the fallback when the
/// worker backend fails.
#[derive(Debug)]
pub struct InlineBackend {
    engine: BorderEngine,
    pending: Option<ComputeRequest>,
}

impl InlineBackend {
    #[must_use]
    pub fn new(config: BorderEngineConfig) -> Self {
        Self {
            engine: BorderEngine::new(config),
            pending: None,
        }
    }
}

impl ComputeBackend for InlineBackend {
    fn submit(&mut self, request: ComputeRequest) -> EaselResult<()> {
        self.pending = Some(request);
        Ok(())
    }

    fn try_take(&mut self) -> Option<ComputeOutcome> {
        let request = self.pending.take()?;
        let result = self
            .engine
            .compute(&request.settings, request.last_valid_min_border);
        Some(ComputeOutcome {
            id: request.id,
            result,
        })
    }
}

/// Worker-thread backend: requests go over a channel to a dedicated thread
/// owning its own engine, outcomes come back over a second channel.
#[derive(Debug)]
pub struct ThreadBackend {
    requests: Option<Sender<ComputeRequest>>,
    outcomes: Receiver<ComputeOutcome>,
    worker: Option<JoinHandle<()>>,
}

impl ThreadBackend {
    pub fn spawn(config: BorderEngineConfig) -> EaselResult<Self> {
        let (request_tx, request_rx) = channel::<ComputeRequest>();
        let (outcome_tx, outcome_rx) = channel::<ComputeOutcome>();
        let worker = std::thread::Builder::new()
            .name("easel-compute".into())
            .spawn(move || worker_loop(BorderEngine::new(config), &request_rx, &outcome_tx))
            .map_err(|e| EaselError::ComputeBackend(format!("failed to spawn worker: {e}")))?;
        Ok(Self {
            requests: Some(request_tx),
            outcomes: outcome_rx,
            worker: Some(worker),
        })
    }
}

impl ComputeBackend for ThreadBackend {
    fn submit(&mut self, request: ComputeRequest) -> EaselResult<()> {
        let sender = self
            .requests
            .as_ref()
            .ok_or_else(|| EaselError::ComputeBackend("worker already shut down".into()))?;
        sender
            .send(request)
            .map_err(|_| EaselError::ComputeBackend("worker channel closed".into()))
    }

    fn try_take(&mut self) -> Option<ComputeOutcome> {
        let mut latest = None;
        loop {
            match self.outcomes.try_recv() {
                Ok(outcome) => latest = Some(outcome),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return latest,
            }
        }
    }
}

impl Drop for ThreadBackend {
    fn drop(&mut self) {
        self.requests.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Drains queued requests down to the newest before each compute, so a burst
/// of edits costs one calculation instead of one per keystroke.
fn worker_loop(
    mut engine: BorderEngine,
    requests: &Receiver<ComputeRequest>,
    outcomes: &Sender<ComputeOutcome>,
) {
    while let Ok(received) = requests.recv() {
        let mut request = received;
        while let Ok(newer) = requests.try_recv() {
            request = newer;
        }
        let result = engine.compute(&request.settings, request.last_valid_min_border);
        if outcomes
            .send(ComputeOutcome {
                id: request.id,
                result,
            })
            .is_err()
        {
            break;
        }
    }
    trace!("compute worker stopped");
}

/// Picks the worker backend when the platform can spawn threads, otherwise
/// the inline one.
#[must_use]
pub fn select_backend(config: BorderEngineConfig) -> Box<dyn ComputeBackend> {
    match ThreadBackend::spawn(config) {
        Ok(backend) => {
            debug!("using threaded compute backend");
            Box::new(backend)
        }
        Err(err) => {
            warn!(error = %err, "thread spawn failed; using inline compute backend");
            Box::new(InlineBackend::new(config))
        }
    }
}

/// Routes requests to a backend and keeps only the answer to the newest one.
///
/// Outcomes for superseded requests are discarded on arrival, so the caller
/// can submit on every keystroke and still never observe a stale result. A
/// backend failure downgrades to the inline backend instead of losing the
/// request.
pub struct ComputeDispatcher {
    backend: Box<dyn ComputeBackend>,
    config: BorderEngineConfig,
    next_id: RequestId,
    last_issued: RequestId,
}

impl ComputeDispatcher {
    #[must_use]
    pub fn new(backend: Box<dyn ComputeBackend>, config: BorderEngineConfig) -> Self {
        Self {
            backend,
            config,
            next_id: 1,
            last_issued: 0,
        }
    }

    #[must_use]
    pub fn with_default_backend(config: BorderEngineConfig) -> Self {
        Self::new(select_backend(config), config)
    }

    pub fn submit(
        &mut self,
        settings: &CalculatorSettings,
        last_valid_min_border: f64,
    ) -> RequestId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.last_issued = id;
        let request = ComputeRequest {
            id,
            settings: *settings,
            last_valid_min_border,
        };
        if let Err(err) = self.backend.submit(request) {
            warn!(error = %err, "compute backend rejected request; downgrading to inline");
            let mut inline = InlineBackend::new(self.config);
            // InlineBackend::submit never fails.
            let _ = inline.submit(request);
            self.backend = Box::new(inline);
        }
        id
    }

    /// Returns the outcome of the newest submitted request, if ready.
    pub fn poll(&mut self) -> Option<ComputeOutcome> {
        while let Some(outcome) = self.backend.try_take() {
            if outcome.id == self.last_issued {
                return Some(outcome);
            }
            trace!(request = outcome.id, "discarding stale compute outcome");
        }
        None
    }
}
