use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

/// Events emitted by the scheduling engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    DraftCreated {
        draft_id: Uuid,
        order_id: Uuid,
        confidence_score: f64,
    },
    DraftApproved {
        draft_id: Uuid,
        order_id: Uuid,
        distributor_id: Uuid,
        modified: bool,
    },
    DraftRejected {
        draft_id: Uuid,
        order_id: Uuid,
    },
    OrderScheduled {
        order_id: Uuid,
        distributor_id: Uuid,
    },
    TripCreated {
        trip_id: Uuid,
        order_id: Uuid,
        distributor_id: Uuid,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    /// Creates a new EventSender
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Create a connected sender/receiver pair.
pub fn channel(buffer: usize) -> (EventSender, mpsc::Receiver<Event>) {
    let (tx, rx) = mpsc::channel(buffer);
    (EventSender::new(tx), rx)
}

/// Consumes engine events until every sender is dropped.
///
/// Downstream integrations (notifications, sync to the dashboard) hang off
/// this loop; for now each event is logged.
pub async fn process_events(mut rx: mpsc::Receiver<Event>) {
    while let Some(event) = rx.recv().await {
        match &event {
            Event::DraftCreated {
                draft_id,
                order_id,
                confidence_score,
            } => {
                info!(
                    draft_id = %draft_id,
                    order_id = %order_id,
                    confidence = confidence_score,
                    "Scheduling draft created"
                );
            }
            Event::DraftApproved {
                draft_id,
                order_id,
                distributor_id,
                modified,
            } => {
                info!(
                    draft_id = %draft_id,
                    order_id = %order_id,
                    distributor_id = %distributor_id,
                    modified = modified,
                    "Scheduling draft approved"
                );
            }
            Event::DraftRejected { draft_id, order_id } => {
                info!(draft_id = %draft_id, order_id = %order_id, "Scheduling draft rejected");
            }
            Event::OrderScheduled {
                order_id,
                distributor_id,
            } => {
                info!(order_id = %order_id, distributor_id = %distributor_id, "Order scheduled");
            }
            Event::TripCreated {
                trip_id,
                order_id,
                distributor_id,
            } => {
                info!(
                    trip_id = %trip_id,
                    order_id = %order_id,
                    distributor_id = %distributor_id,
                    "Delivery trip created"
                );
            }
        }
    }
    warn!("Event channel closed; event processor exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_round_trip_through_the_channel() {
        let (sender, mut rx) = channel(8);
        let order_id = Uuid::new_v4();
        sender
            .send(Event::OrderScheduled {
                order_id,
                distributor_id: Uuid::new_v4(),
            })
            .await
            .expect("send should succeed");

        match rx.recv().await {
            Some(Event::OrderScheduled { order_id: got, .. }) => assert_eq!(got, order_id),
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
