//! Paced replay of a recorded sort.
//!
//! The [`Scheduler`] applies one step at a time to the shared row, hands the
//! renderer a frame, then waits on the [`Pacer`]. A pause that gets
//! interrupted is logged and the replay simply carries on. Once a run is
//! cancelled, the remaining steps are applied without pauses or frames so
//! the row still ends up sorted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Notify;
use tracing::{info, trace, warn};

use crate::error::{Error, InterruptCause};
use crate::render::{Frame, RenderSink};
use crate::sequence::SharedSequence;
use crate::sorting::{Algorithm, Script};

pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(100);

/// Cloneable cooperative cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<CancelInner>,
}

#[derive(Debug, Default)]
struct CancelInner {
    cancelled: AtomicBool,
    notify: Notify,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::Release);
        self.inner.notify.notify_waiters();
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Resolves once [`cancel`](Self::cancel) has been called.
    pub async fn cancelled(&self) {
        loop {
            let notified = self.inner.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

/// The fixed delay between steps, and a way to cut one short.
#[derive(Debug)]
pub struct Pacer {
    delay: Duration,
    nudge: Notify,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            nudge: Notify::new(),
        }
    }

    pub async fn pause(&self, cancel: &CancelToken) -> Result<(), Error> {
        tokio::select! {
            _ = tokio::time::sleep(self.delay) => Ok(()),
            _ = self.nudge.notified() => Err(Error::PauseInterrupted {
                cause: InterruptCause::Nudged,
            }),
            _ = cancel.cancelled() => Err(Error::PauseInterrupted {
                cause: InterruptCause::Cancelled,
            }),
        }
    }

    /// Wakes a pause that is currently waiting. Has no effect on later pauses.
    pub fn interrupt(&self) {
        self.nudge.notify_waiters();
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_DELAY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub total_steps: usize,
    /// Steps that were drawn and paced.
    pub rendered: usize,
    /// Steps applied without a pause after cancellation.
    pub fast_forwarded: usize,
    pub interrupted_pauses: usize,
    pub cancelled: bool,
}

impl RunReport {
    fn new(algorithm: Algorithm, total_steps: usize) -> Self {
        Self {
            algorithm,
            total_steps,
            rendered: 0,
            fast_forwarded: 0,
            interrupted_pauses: 0,
            cancelled: false,
        }
    }
}

pub struct Scheduler {
    pacer: Pacer,
    sink: Arc<dyn RenderSink>,
}

impl Scheduler {
    pub fn new(pacer: Pacer, sink: Arc<dyn RenderSink>) -> Self {
        Self { pacer, sink }
    }

    pub fn pacer(&self) -> &Pacer {
        &self.pacer
    }

    /// Replays `script` onto `sequence`, one paced step at a time.
    pub async fn play(
        &self,
        sequence: &SharedSequence,
        script: Script,
        cancel: &CancelToken,
    ) -> RunReport {
        let algorithm = script.algorithm;
        let total_steps = script.steps.len();
        let mut report = RunReport::new(algorithm, total_steps);
        info!(%algorithm, steps = total_steps, "run started");

        for (index, step) in script.steps.into_iter().enumerate() {
            if cancel.is_cancelled() {
                sequence.apply(&step);
                report.fast_forwarded += 1;
                continue;
            }

            let elements = sequence.apply_and_snapshot(&step);
            trace!(step = index, mutations = ?step.mutations, "step applied");
            self.sink.on_step(&Frame {
                algorithm,
                step: index,
                total_steps,
                mutations: step.mutations,
                elements,
            });
            report.rendered += 1;

            if let Err(e) = self.pacer.pause(cancel).await {
                warn!(%algorithm, step = index, "{}, resuming", e);
                report.interrupted_pauses += 1;
            }
        }

        if cancel.is_cancelled() {
            report.cancelled = true;
            if report.fast_forwarded > 0 {
                self.sink.on_step(&Frame {
                    algorithm,
                    step: total_steps - 1,
                    total_steps,
                    mutations: Vec::new(),
                    elements: sequence.snapshot(),
                });
            }
            info!(%algorithm, fast_forwarded = report.fast_forwarded, "run cancelled");
        } else {
            info!(%algorithm, steps = report.rendered, "run finished");
        }
        report
    }
}
