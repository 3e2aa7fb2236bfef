//! The active thread: header, grouped bubbles, composer.

use egui::{Align, Layout, RichText, ScrollArea, Sense, Ui};

use crate::common::types::{Conversation, ConversationKind, Message};
use crate::ui::grouping;
use crate::ui::state::ComposeState;
use crate::ui::{format, theme};

use super::{avatar, input_bar, message_bubble};

#[derive(Default)]
pub struct ChatAreaActions {
    pub back: bool,
    pub open_profile: bool,
    pub send: Option<String>,
    /// `Some(true)` for a video call.
    pub call: Option<bool>,
    pub mute_toggle: bool,
    pub delete_chat: bool,
    pub pick_attachment: bool,
    pub open_emoji: bool,
    pub record_voice: bool,
}

pub fn render(
    ui: &mut Ui,
    conversation: &Conversation,
    messages: &[Message],
    compose: &mut ComposeState,
    narrow: bool,
) -> ChatAreaActions {
    let mut actions = ChatAreaActions::default();

    egui::TopBottomPanel::top("chat_header").show_inside(ui, |ui| {
        header(ui, conversation, narrow, &mut actions);
    });

    egui::TopBottomPanel::bottom("chat_input").show_inside(ui, |ui| {
        ui.add_space(4.0);
        let input = input_bar::render(ui, compose);
        actions.send = input.send;
        actions.pick_attachment = input.pick_attachment;
        actions.open_emoji = input.open_emoji;
        actions.record_voice = input.record_voice;
        ui.add_space(4.0);
    });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        if messages.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No messages yet. Say hello!").weak());
            });
            return;
        }
        let annotations = grouping::annotate(messages);
        let show_avatar_column = !conversation.is_direct();
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.add_space(6.0);
                for (message, annotation) in messages.iter().zip(annotations) {
                    let column = show_avatar_column && !message.is_own;
                    if let Some(reply) = message_bubble::render(ui, message, annotation, column) {
                        compose.reply_to = Some(reply);
                    }
                }
            });
    });

    actions
}

fn header(ui: &mut Ui, conversation: &Conversation, narrow: bool, actions: &mut ChatAreaActions) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if narrow && ui.button("←").clicked() {
            actions.back = true;
        }

        if avatar::avatar(ui, &conversation.name, 32.0).clicked() {
            actions.open_profile = true;
        }
        let title = ui
            .vertical(|ui| {
                ui.label(RichText::new(&conversation.name).strong());
                ui.label(RichText::new(subtitle(conversation)).small().weak());
            })
            .response
            .interact(Sense::click());
        if title.clicked() {
            actions.open_profile = true;
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.menu_button("⋮", |ui| {
                if ui.button("View profile").clicked() {
                    actions.open_profile = true;
                    ui.close();
                }
                let mute_label = if conversation.is_muted {
                    "Unmute notifications"
                } else {
                    "Mute notifications"
                };
                if ui.button(mute_label).clicked() {
                    actions.mute_toggle = true;
                    ui.close();
                }
                ui.separator();
                if ui
                    .button(RichText::new("Delete chat").color(theme::AVATAR_COLOURS[0]))
                    .clicked()
                {
                    actions.delete_chat = true;
                    ui.close();
                }
            });
            if ui.button("🎥").clicked() {
                actions.call = Some(true);
            }
            if ui.button("📞").clicked() {
                actions.call = Some(false);
            }
        });
    });
    ui.add_space(4.0);
}

fn subtitle(conversation: &Conversation) -> String {
    match &conversation.kind {
        ConversationKind::Direct {
            is_online,
            last_seen,
            ..
        } => {
            if *is_online {
                "online".to_string()
            } else {
                last_seen.clone().unwrap_or_else(|| "offline".to_string())
            }
        }
        ConversationKind::Group { member_count } => format!("{member_count} members"),
        ConversationKind::Channel {
            subscriber_count, ..
        } => format!("{} subscribers", format::compact_count(*subscriber_count)),
        ConversationKind::Bot { username, .. } => format!("@{username}"),
    }
}
