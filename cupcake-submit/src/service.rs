//! One submission, one request/response exchange.
//!
//! `submit` encodes a snapshot of the caller's order, performs a single
//! round-trip through the [`Transport`], decodes the echoed order, and
//! resolves the cake-type name for confirmation display. The caller's live
//! order is never touched; the decoded value is structurally separate.

use crate::transport::{Transport, TransportError};
use chrono::{DateTime, Utc};
use cupcake_catalog::CatalogError;
use cupcake_order::{wire, DecodeError, Order};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};
use uuid::Uuid;

/// Submission lifecycle for one attempt.
///
/// A fresh `submit` call always restarts at `Sending`, independent of any
/// prior attempt's terminal state. There is no retrying state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Sending,
    Confirmed,
    Failed,
}

/// Server-echoed order details shown to the user after a successful
/// submission.
#[derive(Debug, Clone)]
pub struct Confirmation {
    pub quantity: u32,
    pub cake_type: String,
    pub total_cost: f64,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// Connectivity loss, unreachable server, or a non-2xx answer.
    #[error("Order could not be submitted: {0}")]
    Transport(#[from] TransportError),

    /// Data came back but does not match the order schema.
    #[error("Invalid server response: {0}")]
    InvalidResponse(#[from] DecodeError),

    /// Data decoded but names a cake type outside the catalog.
    #[error("Invalid server response: {0}")]
    BadCatalogIndex(#[from] CatalogError),
}

pub struct SubmissionService {
    transport: Arc<dyn Transport>,
    phase_tx: watch::Sender<SubmissionPhase>,
}

impl SubmissionService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let (phase_tx, _) = watch::channel(SubmissionPhase::Idle);
        Self {
            transport,
            phase_tx,
        }
    }

    /// Current phase of the most recent submission attempt.
    pub fn phase(&self) -> SubmissionPhase {
        *self.phase_tx.borrow()
    }

    /// Observe phase transitions. Receivers see the latest phase, not a
    /// backlog.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionPhase> {
        self.phase_tx.subscribe()
    }

    /// Submit one order: encode, send, receive, decode, confirm.
    ///
    /// Every outcome is terminal for this attempt; the caller decides
    /// whether to invoke `submit` again. Concurrent calls are neither
    /// prevented nor deduplicated.
    pub async fn submit(&self, order: &Order) -> Result<Confirmation, SubmissionError> {
        let attempt_id = Uuid::new_v4();
        info!(%attempt_id, quantity = order.quantity, "submitting order");
        self.phase_tx.send_replace(SubmissionPhase::Sending);

        let result = self.exchange(order).await;
        match &result {
            Ok(confirmation) => {
                info!(
                    %attempt_id,
                    cake_type = %confirmation.cake_type,
                    total = confirmation.total_cost,
                    "order confirmed"
                );
                self.phase_tx.send_replace(SubmissionPhase::Confirmed);
            }
            Err(e) => {
                error!(%attempt_id, error = %e, "order submission failed");
                self.phase_tx.send_replace(SubmissionPhase::Failed);
            }
        }

        result
    }

    async fn exchange(&self, order: &Order) -> Result<Confirmation, SubmissionError> {
        // Encoding an in-memory order cannot fail; wire::encode owns that
        // contract.
        let body = wire::encode(order);

        let bytes = self.transport.exchange(body).await?;
        let echoed = wire::decode(&bytes)?;
        let cake_type = cupcake_catalog::cake_type_name(echoed.cake_type_index)?;

        Ok(Confirmation {
            quantity: echoed.quantity,
            cake_type: cake_type.to_string(),
            total_cost: echoed.total_cost(),
            received_at: Utc::now(),
        })
    }
}
