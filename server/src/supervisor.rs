use std::future::Future;

use anyhow::{Error, Result};
use tokio::task::{JoinError, JoinSet};
use tokio_util::sync::CancellationToken;

type TaskOutcome = std::result::Result<(&'static str, Result<()>), JoinError>;

/// Runs long-lived service tasks and shuts all of them down when one fails
/// or ctrl-c is received.
pub struct Supervisor {
    shutdown: CancellationToken,
    tasks: JoinSet<(&'static str, Result<()>)>,
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new()
    }
}

impl Supervisor {
    pub fn new() -> Self {
        Self {
            shutdown: CancellationToken::new(),
            tasks: JoinSet::new(),
        }
    }

    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub fn spawn<F, Fut>(&mut self, name: &'static str, factory: F)
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let shutdown = self.shutdown.child_token();
        self.tasks.spawn(async move { (name, factory(shutdown).await) });
    }

    /// Waits for every task; returns the first error reported.
    pub async fn run(mut self) -> Result<()> {
        let mut first_err: Option<Error> = None;

        while !self.tasks.is_empty() {
            tokio::select! {
                Some(outcome) = self.tasks.join_next() => {
                    if let Some(err) = self.record(outcome) {
                        first_err.get_or_insert(err);
                    }
                }
                _ = tokio::signal::ctrl_c(), if !self.shutdown.is_cancelled() => {
                    tracing::info!("ctrl-c received, shutting down");
                    self.shutdown.cancel();
                }
            }
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn record(&self, outcome: TaskOutcome) -> Option<Error> {
        let err = match outcome {
            Ok((name, Ok(()))) => {
                tracing::info!(task = name, "task exited gracefully");
                return None;
            }
            Ok((name, Err(err))) => {
                tracing::error!(task = name, error = %err, "task exited with error");
                err
            }
            Err(join_err) => {
                tracing::error!(error = ?join_err, "task panicked");
                join_err.into()
            }
        };

        if !self.shutdown.is_cancelled() {
            tracing::warn!("supervisor shutting down");
            self.shutdown.cancel();
        }
        Some(err)
    }
}
