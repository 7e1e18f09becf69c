use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::config::{Config, RunPolicy};
use crate::element::Element;
use crate::render::RenderSink;
use crate::scheduler::{CancelToken, Pacer, RunReport, Scheduler};
use crate::sequence::SharedSequence;
use crate::sorting::{record, Algorithm};

/// Handles on the most recent run, shared with `wait` and `cancel`.
#[derive(Clone)]
struct ActiveRun {
    algorithm: Algorithm,
    cancel: CancelToken,
    done: watch::Receiver<Option<RunReport>>,
}

impl ActiveRun {
    fn is_running(&self) -> bool {
        self.done.borrow().is_none()
    }

    async fn finished(mut self) -> Option<RunReport> {
        match self.done.wait_for(Option::is_some).await {
            Ok(report) => report.clone(),
            Err(_) => {
                error!(algorithm = %self.algorithm, "run task ended without a report");
                None
            }
        }
    }
}

/// Maps menu selections to runs over one shared row.
///
/// At most one run task exists at a time: a new one is only spawned after
/// the previous task has been joined, so two runs never write the row
/// together. `wait` and `cancel` never take the task lock, so a waiting
/// caller cannot hold off a cancellation.
pub struct Controller {
    sequence: SharedSequence,
    scheduler: Arc<Scheduler>,
    policy: RunPolicy,
    skip_noop_steps: bool,
    // Never held across an await.
    current: StdMutex<Option<ActiveRun>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl Controller {
    pub fn new(elements: Vec<Element>, config: &Config, sink: Arc<dyn RenderSink>) -> Self {
        Self {
            sequence: SharedSequence::new(elements),
            scheduler: Arc::new(Scheduler::new(Pacer::new(config.step_delay), sink)),
            policy: config.run_policy,
            skip_noop_steps: config.skip_noop_steps,
            current: StdMutex::new(None),
            task: Mutex::new(None),
        }
    }

    pub fn sequence(&self) -> &SharedSequence {
        &self.sequence
    }

    pub fn snapshot(&self) -> Vec<Element> {
        self.sequence.snapshot()
    }

    /// Starts the algorithm called `name`. Unknown names are ignored.
    ///
    /// Returns whether a run was started.
    pub async fn run(&self, name: &str) -> bool {
        match name.parse::<Algorithm>() {
            Ok(algorithm) => self.start(algorithm).await,
            Err(e) => {
                debug!("ignoring selection: {}", e);
                false
            }
        }
    }

    pub async fn start(&self, algorithm: Algorithm) -> bool {
        // Fire before queueing on the task lock.
        if self.policy == RunPolicy::CancelPrevious {
            if let Some(run) = self.running() {
                info!(requested = %algorithm, running = %run.algorithm, "cancelling active run");
                run.cancel.cancel();
            }
        }

        let mut task = self.task.lock().await;

        if let Some(run) = self.running() {
            match self.policy {
                RunPolicy::IgnoreWhileBusy => {
                    info!(requested = %algorithm, running = %run.algorithm, "run in progress, ignoring selection");
                    return false;
                }
                RunPolicy::CancelPrevious => run.cancel.cancel(),
            }
        }
        if let Some(previous) = task.take() {
            if let Err(e) = previous.await {
                error!("run task failed: {}", e);
            }
        }

        let script = record(algorithm, &self.sequence.snapshot(), self.skip_noop_steps);
        let cancel = CancelToken::new();
        let (report_tx, done) = watch::channel(None);
        *task = Some({
            let scheduler = Arc::clone(&self.scheduler);
            let sequence = self.sequence.clone();
            let cancel = cancel.clone();
            tokio::spawn(async move {
                let report = scheduler.play(&sequence, script, &cancel).await;
                report_tx.send_replace(Some(report));
            })
        });
        *self.current_guard() = Some(ActiveRun {
            algorithm,
            cancel,
            done,
        });
        true
    }

    /// Waits for the latest run, if any, to finish.
    pub async fn wait(&self) -> Option<RunReport> {
        let run = self.current_guard().clone()?;
        run.finished().await
    }

    /// Cancels the active run and waits for it to settle.
    ///
    /// Returns `None` when nothing is running.
    pub async fn cancel(&self) -> Option<RunReport> {
        let run = self.running()?;
        run.cancel.cancel();
        run.finished().await
    }

    /// Cuts the current pause short; the run keeps going.
    pub fn interrupt_pause(&self) {
        self.scheduler.pacer().interrupt();
    }

    fn running(&self) -> Option<ActiveRun> {
        self.current_guard().clone().filter(ActiveRun::is_running)
    }

    fn current_guard(&self) -> std::sync::MutexGuard<'_, Option<ActiveRun>> {
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}
