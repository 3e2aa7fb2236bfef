use eframe::egui;
use egui::RichText;
use tokio::sync::mpsc;

use crate::common::{ServiceCommand, ServiceEvent};
use crate::store::ChatStore;

use super::components::chat_area::ChatAreaActions;
use super::components::new_chat_dialog::DialogActions;
use super::components::profile_panel::ProfileActions;
use super::components::sidebar::SidebarActions;
use super::components::story_viewer::StoryActions;
use super::components::{chat_area, new_chat_dialog, profile_panel, sidebar, story_viewer};
use super::state::{DialogMode, NewChatDialog, StoryStep, UiState};

/// Below this width the layout collapses to a single column and the
/// profile panel is unavailable.
const NARROW_BREAKPOINT: f32 = 700.0;

pub struct ChatApp {
    store: ChatStore,
    ui: UiState,
    story_duration: f32,
    command_sender: mpsc::Sender<ServiceCommand>,
    event_receiver: mpsc::Receiver<ServiceEvent>,
}

impl ChatApp {
    pub fn new(
        store: ChatStore,
        story_duration: f32,
        command_sender: mpsc::Sender<ServiceCommand>,
        event_receiver: mpsc::Receiver<ServiceEvent>,
    ) -> Self {
        Self {
            store,
            ui: UiState::new(),
            story_duration,
            command_sender,
            event_receiver,
        }
    }

    fn handle_service_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                ServiceEvent::DeliveryStateChanged {
                    conversation_id,
                    message_id,
                    state,
                } => self
                    .store
                    .set_delivery_state(&conversation_id, &message_id, state),
            }
        }
    }

    fn send_command(&mut self, command: ServiceCommand) {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to service: {err}");
        }
    }

    /// Appends an own message to the active thread. Silently ignored when
    /// nothing is selected.
    fn send_chat_message(&mut self, content: String) {
        let Some(conversation_id) = self.ui.selected.clone() else {
            return;
        };
        let reply_to = self.ui.compose.reply_to.take();
        let message_id = self.store.send_message(&conversation_id, content, reply_to);
        self.send_command(ServiceCommand::MessageSent {
            conversation_id,
            message_id,
        });
    }

    fn apply_sidebar(&mut self, actions: SidebarActions) {
        if let Some(conversation_id) = actions.select {
            self.ui.select_conversation(&conversation_id);
        }
        if let Some(user_id) = actions.open_story {
            self.ui.open_story(&user_id, &self.store);
        }
        if actions.add_story {
            self.send_command(ServiceCommand::AddStory);
        }
        if actions.new_chat {
            self.ui.new_chat = Some(NewChatDialog::default());
        }
        if actions.new_group {
            self.ui.new_chat = Some(NewChatDialog {
                mode: DialogMode::GroupCompose,
                ..Default::default()
            });
        }
        if actions.create_channel {
            self.send_command(ServiceCommand::CreateChannel);
        }
        if let Some(bot_id) = actions.start_bot {
            self.send_command(ServiceCommand::StartBot { bot_id });
        }
        if let Some(conversation_id) = actions.toggle_subscribe {
            self.store.toggle_subscription(&conversation_id);
        }
        if let Some(saved_id) = actions.delete_saved {
            self.store.remove_saved(&saved_id);
        }
        if actions.open_settings {
            self.send_command(ServiceCommand::OpenSettings);
        }
    }

    fn apply_chat(&mut self, actions: ChatAreaActions, narrow: bool) {
        let selected = self.ui.selected.clone();
        if actions.back {
            self.ui.back();
        }
        if actions.open_profile {
            self.ui.open_profile(narrow);
        }
        if let Some(content) = actions.send {
            self.send_chat_message(content);
        }
        if let Some(conversation_id) = selected {
            if let Some(video) = actions.call {
                self.send_command(ServiceCommand::Call {
                    conversation_id: conversation_id.clone(),
                    video,
                });
            }
            if actions.mute_toggle {
                self.send_command(ServiceCommand::ToggleMute {
                    conversation_id: conversation_id.clone(),
                });
            }
            if actions.delete_chat {
                self.send_command(ServiceCommand::DeleteChat { conversation_id });
            }
        }
        if actions.pick_attachment {
            self.send_command(ServiceCommand::PickAttachment);
        }
        if actions.open_emoji {
            self.send_command(ServiceCommand::OpenEmojiPicker);
        }
        if actions.record_voice {
            self.send_command(ServiceCommand::RecordVoice);
        }
    }

    fn apply_profile(&mut self, actions: ProfileActions) {
        let selected = self.ui.selected.clone();
        if actions.close {
            self.ui.show_profile = false;
        }
        let Some(conversation_id) = selected else {
            return;
        };
        if actions.mute_toggle {
            self.send_command(ServiceCommand::ToggleMute {
                conversation_id: conversation_id.clone(),
            });
        }
        if actions.add_contact {
            self.send_command(ServiceCommand::AddContact {
                conversation_id: conversation_id.clone(),
            });
        }
        if actions.block {
            self.send_command(ServiceCommand::BlockUser {
                conversation_id: conversation_id.clone(),
            });
        }
        if actions.delete_chat {
            self.send_command(ServiceCommand::DeleteChat { conversation_id });
        }
    }

    fn apply_dialog(&mut self, actions: DialogActions) {
        if let Some(contact_id) = actions.select_contact {
            if self.store.conversation(&contact_id).is_none() {
                log::info!("Starting a fresh chat with contact {contact_id}");
            }
            self.ui.select_conversation(&contact_id);
        }
        if let Some((member_ids, name)) = actions.create_group {
            self.send_command(ServiceCommand::CreateGroup { member_ids, name });
        }
        if actions.close {
            self.ui.new_chat = None;
        }
    }

    fn apply_story(&mut self, actions: StoryActions) {
        let user_id = self
            .ui
            .story_viewer
            .as_ref()
            .map(|viewer| viewer.user_id.clone());
        if let (Some(text), Some(user_id)) = (actions.reply, user_id.clone()) {
            self.send_command(ServiceCommand::StoryReply { user_id, text });
        }
        if actions.like {
            if let Some(user_id) = user_id {
                self.send_command(ServiceCommand::StoryLike { user_id });
            }
        }
        if actions.previous {
            if let Some(viewer) = self.ui.story_viewer.as_mut() {
                viewer.previous(&self.store);
            }
        }
        if actions.next {
            if let Some(viewer) = self.ui.story_viewer.as_mut() {
                if viewer.next(&self.store) == StoryStep::Closed {
                    self.ui.story_viewer = None;
                }
            }
        }
        if actions.close {
            self.ui.story_viewer = None;
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_service_events();

        let narrow = ctx.screen_rect().width() < NARROW_BREAKPOINT;

        // Advance story playback on the frame clock.
        if let Some(viewer) = self.ui.story_viewer.as_mut() {
            let dt = ctx.input(|i| i.stable_dt).min(0.1);
            if viewer.tick(dt, self.story_duration, &self.store) == StoryStep::Closed {
                self.ui.story_viewer = None;
            }
        }
        if let Some(user_id) = self.ui.story_viewer.as_ref().map(|v| v.user_id.clone()) {
            self.store.mark_story_viewed(&user_id);
        }

        let selected_id = self.ui.selected.clone();
        let mut sidebar_actions: Option<SidebarActions> = None;
        let mut chat_actions: Option<ChatAreaActions> = None;
        let mut profile_actions: Option<ProfileActions> = None;

        if narrow {
            egui::CentralPanel::default().show(ctx, |ui| {
                if selected_id.is_none() {
                    sidebar_actions = Some(sidebar::render(ui, &self.store, &mut self.ui));
                    return;
                }
                match selected_id
                    .as_deref()
                    .and_then(|id| self.store.conversation(id))
                {
                    Some(conversation) => {
                        let messages = self.store.messages_for(&conversation.id);
                        chat_actions = Some(chat_area::render(
                            ui,
                            conversation,
                            messages,
                            &mut self.ui.compose,
                            true,
                        ));
                    }
                    None => {
                        let mut actions = ChatAreaActions::default();
                        if ui.button("←").clicked() {
                            actions.back = true;
                        }
                        welcome(ui);
                        chat_actions = Some(actions);
                    }
                }
            });
        } else {
            egui::SidePanel::left("chat_sidebar")
                .resizable(true)
                .default_width(320.0)
                .show(ctx, |ui| {
                    sidebar_actions = Some(sidebar::render(ui, &self.store, &mut self.ui));
                });

            if self.ui.show_profile {
                if let Some(conversation) = selected_id
                    .as_deref()
                    .and_then(|id| self.store.conversation(id))
                {
                    egui::SidePanel::right("profile_panel")
                        .resizable(true)
                        .default_width(290.0)
                        .show(ctx, |ui| {
                            profile_actions = Some(profile_panel::render(
                                ui,
                                conversation,
                                self.store.messages_for(&conversation.id),
                            ));
                        });
                }
            }

            egui::CentralPanel::default().show(ctx, |ui| {
                match selected_id
                    .as_deref()
                    .and_then(|id| self.store.conversation(id))
                {
                    Some(conversation) => {
                        let messages = self.store.messages_for(&conversation.id);
                        chat_actions = Some(chat_area::render(
                            ui,
                            conversation,
                            messages,
                            &mut self.ui.compose,
                            false,
                        ));
                    }
                    None => welcome(ui),
                }
            });
        }

        let mut dialog_actions: Option<DialogActions> = None;
        if let Some(dialog) = self.ui.new_chat.as_mut() {
            dialog_actions = Some(new_chat_dialog::render(ctx, dialog, &self.store.contacts));
        }
        let mut story_actions: Option<StoryActions> = None;
        if let Some(viewer) = self.ui.story_viewer.as_mut() {
            story_actions = Some(story_viewer::render(ctx, viewer, &self.store));
        }

        if let Some(actions) = sidebar_actions {
            self.apply_sidebar(actions);
        }
        if let Some(actions) = chat_actions {
            self.apply_chat(actions, narrow);
        }
        if let Some(actions) = profile_actions {
            self.apply_profile(actions);
        }
        if let Some(actions) = dialog_actions {
            self.apply_dialog(actions);
        }
        if let Some(actions) = story_actions {
            self.apply_story(actions);
        }

        ctx.request_repaint();
    }
}

fn welcome(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("💬").size(48.0).weak());
            ui.add_space(8.0);
            ui.label(RichText::new("Welcome to TeleChat").heading());
            ui.label(RichText::new("Select a chat to start messaging").small().weak());
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::DeliveryState;
    use crate::store::seed;

    fn app() -> (
        ChatApp,
        mpsc::Receiver<ServiceCommand>,
        mpsc::Sender<ServiceEvent>,
    ) {
        let (command_sender, command_receiver) = mpsc::channel(8);
        let (event_sender, event_receiver) = mpsc::channel(8);
        (
            ChatApp::new(seed(), 5.0, command_sender, event_receiver),
            command_receiver,
            event_sender,
        )
    }

    fn total_messages(app: &ChatApp) -> usize {
        app.store.messages.values().map(Vec::len).sum()
    }

    #[test]
    fn sending_without_a_selection_changes_nothing() {
        let (mut app, mut commands, _events) = app();
        let before = total_messages(&app);
        app.send_chat_message("hello".to_string());
        assert_eq!(total_messages(&app), before);
        assert!(commands.try_recv().is_err());
    }

    #[test]
    fn sending_with_a_selection_appends_and_notifies_the_service() {
        let (mut app, mut commands, _events) = app();
        app.ui.select_conversation("1");
        let before = app.store.messages_for("1").len();

        app.send_chat_message("see you there".to_string());
        assert_eq!(app.store.messages_for("1").len(), before + 1);

        match commands.try_recv() {
            Ok(ServiceCommand::MessageSent {
                conversation_id, ..
            }) => assert_eq!(conversation_id, "1"),
            other => panic!("expected MessageSent, got {other:?}"),
        }
    }

    #[test]
    fn delivery_events_promote_the_sent_message() {
        let (mut app, _commands, events) = app();
        app.ui.select_conversation("1");
        app.send_chat_message("ping".to_string());
        let message_id = app.store.messages_for("1").last().unwrap().id.clone();

        events
            .try_send(ServiceEvent::DeliveryStateChanged {
                conversation_id: "1".to_string(),
                message_id: message_id.clone(),
                state: DeliveryState::Delivered,
            })
            .unwrap();
        app.handle_service_events();

        let message = app
            .store
            .messages_for("1")
            .iter()
            .find(|m| m.id == message_id)
            .unwrap();
        assert_eq!(message.delivery_state, Some(DeliveryState::Delivered));
    }

    #[test]
    fn group_creation_from_the_dialog_emits_one_command() {
        let (mut app, mut commands, _events) = app();
        app.ui.new_chat = Some(NewChatDialog {
            mode: DialogMode::GroupCompose,
            members: vec!["1".to_string(), "3".to_string()],
            group_name: "Weekend Crew".to_string(),
            ..Default::default()
        });

        let group = app.ui.new_chat.as_mut().unwrap().take_group().unwrap();
        app.apply_dialog(DialogActions {
            close: true,
            select_contact: None,
            create_group: Some(group),
        });

        assert!(app.ui.new_chat.is_none());
        match commands.try_recv() {
            Ok(ServiceCommand::CreateGroup { member_ids, name }) => {
                assert_eq!(member_ids, ["1", "3"]);
                assert_eq!(name, "Weekend Crew");
            }
            other => panic!("expected CreateGroup, got {other:?}"),
        }
        assert!(commands.try_recv().is_err());
    }

    #[test]
    fn story_next_past_the_end_closes_the_viewer() {
        let (mut app, _commands, _events) = app();
        // Carol is the last roster user with content and has one story.
        let store = app.store.clone();
        app.ui.open_story("4", &store);
        app.apply_story(StoryActions {
            next: true,
            ..Default::default()
        });
        assert!(app.ui.story_viewer.is_none());
    }
}
