// Background fetch worker.
// A tokio task owns the orchestrator; requests and outcomes travel over channels.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::error::{ActivityError, FailureKind, Result};

use super::{ActivitySource, Orchestrator, Resolution};

/// A request to resolve one username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: u64,
    pub username: String,
    pub force_refresh: bool,
}

/// Outcome of a fetch, tagged with the ticket of its request.
#[derive(Debug, Clone)]
pub enum FetchEvent {
    Loaded {
        ticket: u64,
        username: String,
        resolution: Box<Resolution>,
    },
    Failed {
        ticket: u64,
        kind: FailureKind,
        message: String,
    },
}

impl FetchEvent {
    pub fn ticket(&self) -> u64 {
        match self {
            FetchEvent::Loaded { ticket, .. } | FetchEvent::Failed { ticket, .. } => *ticket,
        }
    }
}

/// Sending side held by the UI.
#[derive(Debug)]
pub struct FetchHandle {
    requests: UnboundedSender<FetchRequest>,
    last_ticket: u64,
}

impl FetchHandle {
    /// Queue a fetch and return its ticket.
    pub fn request(&mut self, username: &str, force_refresh: bool) -> Result<u64> {
        self.last_ticket += 1;
        let request = FetchRequest {
            ticket: self.last_ticket,
            username: username.to_string(),
            force_refresh,
        };
        self.requests
            .send(request)
            .map_err(|_| ActivityError::Other("fetch worker has stopped".to_string()))?;
        Ok(self.last_ticket)
    }

    /// Ticket of the most recent request.
    #[cfg(test)]
    pub fn last_ticket(&self) -> u64 {
        self.last_ticket
    }
}

/// Spawn the worker task on the current tokio runtime.
pub fn spawn_worker<S>(orchestrator: Orchestrator<S>) -> (FetchHandle, UnboundedReceiver<FetchEvent>)
where
    S: ActivitySource + Send + Sync + 'static,
{
    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    tokio::spawn(run_worker(orchestrator, request_rx, event_tx));

    let handle = FetchHandle {
        requests: request_tx,
        last_ticket: 0,
    };
    (handle, event_rx)
}

async fn run_worker<S>(
    mut orchestrator: Orchestrator<S>,
    mut requests: UnboundedReceiver<FetchRequest>,
    events: UnboundedSender<FetchEvent>,
) where
    S: ActivitySource + Send + Sync,
{
    while let Some(mut request) = requests.recv().await {
        // Only the newest queued request matters to the UI
        while let Ok(newer) = requests.try_recv() {
            tracing::debug!(ticket = request.ticket, "request superseded before start");
            request = newer;
        }

        let event = match orchestrator
            .resolve(&request.username, request.force_refresh)
            .await
        {
            Ok(resolution) => FetchEvent::Loaded {
                ticket: request.ticket,
                username: request.username,
                resolution: Box::new(resolution),
            },
            Err(e) => {
                tracing::error!(username = %request.username, error = %e, "fetch failed");
                FetchEvent::Failed {
                    ticket: request.ticket,
                    kind: e.kind(),
                    message: e.to_string(),
                }
            }
        };

        if events.send(event).is_err() {
            break;
        }
    }
    tracing::debug!("fetch worker stopped");
}
