use crate::common::types::DeliveryState;

/// Events from the collaborator service back to the UI.
#[derive(Debug, Clone)]
pub enum ServiceEvent {
    DeliveryStateChanged {
        conversation_id: String,
        message_id: String,
        state: DeliveryState,
    },
}
