use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::client::ApiClient;
use crate::error::FetchError;
use crate::models::{Endpoint, RawResponse};

// Cycle numbers are unique across every view in the process, so a result
// can never be mistaken for one issued by a different view instance.
static NEXT_CYCLE: AtomicU64 = AtomicU64::new(1);

/// Identifies one fetch cycle. A view only accepts a result carrying the
/// ticket it most recently issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    cycle: u64,
    endpoint: Endpoint,
}

impl FetchTicket {
    pub(crate) fn issue(endpoint: Endpoint) -> Self {
        Self {
            cycle: NEXT_CYCLE.fetch_add(1, Ordering::Relaxed),
            endpoint,
        }
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[derive(Debug)]
pub struct FetchOutcome {
    pub ticket: FetchTicket,
    pub result: Result<RawResponse, FetchError>,
}

/// Run the ticket's request in the background and report back over `tx`.
/// The task is never aborted; superseded results are dropped by the view.
pub fn spawn_fetch(
    client: Arc<ApiClient>,
    ticket: FetchTicket,
    tx: UnboundedSender<FetchOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = client.fetch_collection(ticket.endpoint()).await;
        if tx.send(FetchOutcome { ticket, result }).is_err() {
            tracing::debug!("receiver gone before fetch completed");
        }
    })
}
