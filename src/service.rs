//! Default no-op collaborator behind the UI's command channel.
//!
//! Everything the interface exposes but the demo does not implement locally
//! lands here: the service logs each command and discards it. The one
//! exception is [`ServiceCommand::MessageSent`], which is answered with a
//! delayed delivery echo so the event channel back to the UI is exercised.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::common::types::DeliveryState;
use crate::common::{ServiceCommand, ServiceEvent};

pub struct StubService {
    event_sender: mpsc::Sender<ServiceEvent>,
    command_receiver: mpsc::Receiver<ServiceCommand>,
}

impl StubService {
    pub fn new(
        event_sender: mpsc::Sender<ServiceEvent>,
        command_receiver: mpsc::Receiver<ServiceCommand>,
    ) -> Self {
        Self {
            event_sender,
            command_receiver,
        }
    }

    pub async fn run(mut self) {
        while let Some(command) = self.command_receiver.recv().await {
            match command {
                ServiceCommand::MessageSent {
                    conversation_id,
                    message_id,
                } => {
                    let events = self.event_sender.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(Duration::from_millis(600)).await;
                        let event = ServiceEvent::DeliveryStateChanged {
                            conversation_id,
                            message_id,
                            state: DeliveryState::Delivered,
                        };
                        if events.send(event).await.is_err() {
                            log::debug!("UI dropped the event channel");
                        }
                    });
                }
                ServiceCommand::CreateGroup { member_ids, name } => {
                    log::info!(
                        "create group `{name}` with {} members: {member_ids:?}",
                        member_ids.len()
                    );
                }
                ServiceCommand::StartBot { bot_id } => log::info!("start bot {bot_id}"),
                ServiceCommand::StoryReply { user_id, text } => {
                    log::info!("reply to {user_id}'s story: {text}");
                }
                ServiceCommand::Call {
                    conversation_id,
                    video,
                } => {
                    let kind = if video { "video" } else { "voice" };
                    log::info!("{kind} call to {conversation_id}");
                }
                other => log::info!("unhandled UI action: {other:?}"),
            }
        }
        log::info!("Command channel closed; stub service stopping");
    }
}
