use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc::{self, error::SendError, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::events::{CoreEvent, CycleOutcome, RefreshTrigger};
use crate::feed::{AgentFeedClient, FeedError, FeedTransport, FetchResult};
use crate::models::Agent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerCommand {
    /// Invalidate the cache and fetch now
    Refresh,
    Shutdown,
}

#[derive(Clone)]
pub struct SchedulerHandle {
    command_tx: UnboundedSender<SchedulerCommand>,
}

impl SchedulerHandle {
    pub fn send(&self, command: SchedulerCommand) -> Result<(), SendError<SchedulerCommand>> {
        self.command_tx.send(command)
    }

    pub fn refresh(&self) -> Result<(), SendError<SchedulerCommand>> {
        self.send(SchedulerCommand::Refresh)
    }

    pub fn shutdown(&self) -> Result<(), SendError<SchedulerCommand>> {
        self.send(SchedulerCommand::Shutdown)
    }
}

struct InFlight {
    generation: u64,
    trigger: RefreshTrigger,
    task: JoinHandle<FetchResult>,
}

/// Drives refresh cycles: a startup fetch, one per interval, and manual triggers.
///
/// At most one fetch is outstanding. Timer ticks that land while a fetch is running are
/// skipped. A manual trigger aborts a running startup or timer fetch and starts its own
/// right away; further manual triggers while that fetch runs are folded into it.
pub struct RefreshScheduler<T> {
    client: AgentFeedClient<T>,
    interval: Duration,
    command_rx: UnboundedReceiver<SchedulerCommand>,
    event_tx: UnboundedSender<CoreEvent>,
    generation: u64,
}

impl<T: FeedTransport> RefreshScheduler<T> {
    pub fn new(
        client: AgentFeedClient<T>,
        interval: Duration,
        event_tx: UnboundedSender<CoreEvent>,
    ) -> (Self, SchedulerHandle) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            client,
            interval,
            command_rx,
            event_tx,
            generation: 0,
        };
        (scheduler, SchedulerHandle { command_tx })
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    pub async fn run(mut self) {
        info!(interval_secs = self.interval.as_secs(), "refresh scheduler started");

        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut in_flight = Some(self.start(RefreshTrigger::Startup));

        loop {
            tokio::select! {
                joined = join_in_flight(&mut in_flight), if in_flight.is_some() => {
                    let Some(finished) = in_flight.take() else { continue };
                    let result = joined.unwrap_or_else(|e| {
                        Err(FeedError::Connection(format!("fetch task failed: {e}")))
                    });

                    let result = self.client.complete(result, Instant::now().into_std());
                    if !self.emit_outcome(finished.generation, finished.trigger, result, false) {
                        break;
                    }
                }

                _ = ticker.tick() => {
                    if in_flight.is_some() {
                        debug!("fetch still in flight, skipping timer tick");
                        continue;
                    }

                    match self.client.cached(Instant::now().into_std()) {
                        Some(agents) => {
                            self.generation += 1;
                            if !self.emit_outcome(self.generation, RefreshTrigger::Timer, Ok(agents), true) {
                                break;
                            }
                        }
                        None => in_flight = Some(self.start(RefreshTrigger::Timer)),
                    }
                }

                command = self.command_rx.recv() => match command {
                    Some(SchedulerCommand::Refresh) => {
                        self.client.invalidate();
                        match in_flight.take() {
                            Some(running) if running.trigger == RefreshTrigger::Manual => {
                                debug!(generation = running.generation, "manual fetch already running");
                                in_flight = Some(running);
                            }
                            Some(stale) => {
                                debug!(generation = stale.generation, "aborting fetch superseded by manual refresh");
                                stale.task.abort();
                                in_flight = Some(self.start(RefreshTrigger::Manual));
                            }
                            None => in_flight = Some(self.start(RefreshTrigger::Manual)),
                        }
                    }
                    Some(SchedulerCommand::Shutdown) | None => break,
                },
            }
        }

        if let Some(stale) = in_flight.take() {
            stale.task.abort();
        }
        info!("refresh scheduler stopped");
    }

    fn start(&mut self, trigger: RefreshTrigger) -> InFlight {
        self.generation += 1;
        let generation = self.generation;
        debug!(generation, ?trigger, "starting fetch");

        let _ = self.event_tx.send(CoreEvent::RefreshStarted { generation, trigger });
        InFlight {
            generation,
            trigger,
            task: tokio::spawn(self.client.request()),
        }
    }

    /// Returns false once nobody is listening
    fn emit_outcome(
        &self,
        generation: u64,
        trigger: RefreshTrigger,
        result: FetchResult,
        from_cache: bool,
    ) -> bool {
        let (agents, error) = match result {
            Ok(agents) => (agents, None),
            Err(e) => {
                let stale = self
                    .client
                    .last_good()
                    .unwrap_or_else(|| Arc::<[Agent]>::from(Vec::new()));
                (stale, Some(e))
            }
        };

        let outcome = CycleOutcome {
            generation,
            trigger,
            agents,
            error,
            from_cache,
            completed_at: Utc::now(),
        };

        if self.event_tx.send(CoreEvent::RefreshCompleted(outcome)).is_err() {
            warn!("event receiver dropped, stopping scheduler");
            return false;
        }
        true
    }
}

async fn join_in_flight(
    in_flight: &mut Option<InFlight>,
) -> Result<FetchResult, tokio::task::JoinError> {
    match in_flight {
        Some(fetch) => (&mut fetch.task).await,
        None => std::future::pending().await,
    }
}
