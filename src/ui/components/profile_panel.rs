//! Right-hand info panel for the active conversation.

use egui::{Align, Button, Layout, RichText, ScrollArea, Ui};

use crate::common::types::{Attachment, Conversation, ConversationKind, GalleryItem, Message};
use crate::ui::{format, theme};

use super::avatar;

#[derive(Default)]
pub struct ProfileActions {
    pub close: bool,
    pub mute_toggle: bool,
    pub add_contact: bool,
    pub block: bool,
    pub delete_chat: bool,
}

pub fn render(ui: &mut Ui, conversation: &Conversation, messages: &[Message]) -> ProfileActions {
    let mut actions = ProfileActions::default();

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new(panel_title(conversation)).strong());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("✕").clicked() {
                actions.close = true;
            }
        });
    });
    ui.separator();

    ScrollArea::vertical()
        .id_salt("profile_panel")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                match conversation.kind {
                    ConversationKind::Direct { is_online, .. } => {
                        avatar::avatar_with_status(ui, &conversation.name, 72.0, is_online);
                    }
                    _ => {
                        avatar::avatar(ui, &conversation.name, 72.0);
                    }
                }
                ui.add_space(6.0);
                ui.label(RichText::new(&conversation.name).heading());
                ui.label(RichText::new(presence_line(conversation)).small().weak());
                ui.add_space(10.0);
            });
            ui.separator();

            info_section(ui, conversation);

            let media = shared_media_counts(messages);
            if media.iter().any(|(_, count)| *count > 0) {
                ui.add_space(8.0);
                ui.label(RichText::new("Shared Media").strong());
                ui.horizontal(|ui| {
                    for (label, count) in media {
                        if count > 0 {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(count.to_string()).strong());
                                ui.label(RichText::new(label).small().weak());
                            });
                            ui.add_space(10.0);
                        }
                    }
                });
                ui.add_space(8.0);
                ui.separator();
            }

            ui.add_space(8.0);
            let full_width = ui.available_width();
            let mute_label = if conversation.is_muted {
                "Unmute notifications"
            } else {
                "Mute notifications"
            };
            if ui.add_sized([full_width, 26.0], Button::new(mute_label)).clicked() {
                actions.mute_toggle = true;
            }
            if conversation.is_direct()
                && ui
                    .add_sized([full_width, 26.0], Button::new("Add to contacts"))
                    .clicked()
            {
                actions.add_contact = true;
            }
            let leave_label = if conversation.is_group() {
                "Leave group"
            } else {
                "Block user"
            };
            let danger = theme::AVATAR_COLOURS[0];
            if ui
                .add_sized(
                    [full_width, 26.0],
                    Button::new(RichText::new(leave_label).color(danger)),
                )
                .clicked()
            {
                actions.block = true;
            }
            if ui
                .add_sized(
                    [full_width, 26.0],
                    Button::new(RichText::new("Delete chat").color(danger)),
                )
                .clicked()
            {
                actions.delete_chat = true;
            }
        });

    actions
}

fn panel_title(conversation: &Conversation) -> &'static str {
    match conversation.kind {
        ConversationKind::Direct { .. } => "User Info",
        ConversationKind::Group { .. } => "Group Info",
        ConversationKind::Channel { .. } => "Channel Info",
        ConversationKind::Bot { .. } => "Bot Info",
    }
}

fn presence_line(conversation: &Conversation) -> String {
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
        ConversationKind::Bot { users_count, .. } => match users_count {
            Some(count) => format!("{} users", format::compact_count(*count)),
            None => "bot".to_string(),
        },
    }
}

fn info_section(ui: &mut Ui, conversation: &Conversation) {
    match &conversation.kind {
        ConversationKind::Direct {
            bio,
            username,
            phone,
            ..
        } => {
            for (label, value) in [("Bio", bio), ("Username", username), ("Phone", phone)] {
                if let Some(value) = value {
                    ui.add_space(6.0);
                    ui.label(RichText::new(label).small().weak());
                    if label == "Username" {
                        ui.label(RichText::new(format!("@{value}")).color(theme::ACCENT));
                    } else {
                        ui.label(value);
                    }
                }
            }
            ui.add_space(8.0);
            ui.separator();
        }
        ConversationKind::Channel { description, .. } => {
            ui.add_space(6.0);
            ui.label(RichText::new("Description").small().weak());
            ui.label(description);
            ui.add_space(8.0);
            ui.separator();
        }
        ConversationKind::Bot {
            description,
            category,
            rating,
            ..
        } => {
            ui.add_space(6.0);
            ui.label(RichText::new("Description").small().weak());
            ui.label(description);
            ui.add_space(6.0);
            ui.label(RichText::new("Category").small().weak());
            ui.label(category);
            if let Some(rating) = rating {
                ui.add_space(6.0);
                ui.label(RichText::new(format!("★ {rating:.1}")).weak());
            }
            ui.add_space(8.0);
            ui.separator();
        }
        ConversationKind::Group { .. } => {}
    }
}

/// Counts attachments in the visible thread, gallery entries included.
fn shared_media_counts(messages: &[Message]) -> [(&'static str, usize); 4] {
    let mut photos = 0;
    let mut videos = 0;
    let mut links = 0;
    let mut audio = 0;
    for message in messages {
        match &message.attachment {
            Some(Attachment::Image { .. }) => photos += 1,
            Some(Attachment::Video { .. }) => videos += 1,
            Some(Attachment::Audio { .. }) => audio += 1,
            Some(Attachment::Link { .. }) => links += 1,
            Some(Attachment::Gallery { items }) => {
                for item in items {
                    match item {
                        GalleryItem::Image { .. } => photos += 1,
                        GalleryItem::Video { .. } => videos += 1,
                    }
                }
            }
            None => {}
        }
    }
    [
        ("Photos", photos),
        ("Videos", videos),
        ("Links", links),
        ("Audio", audio),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn shared_media_counts_include_gallery_entries() {
        let store = seed();
        let counts = shared_media_counts(store.messages_for("2"));
        let get = |label: &str| counts.iter().find(|(l, _)| *l == label).unwrap().1;
        // One link, plus a gallery with two images and one video.
        assert_eq!(get("Links"), 1);
        assert_eq!(get("Photos"), 2);
        assert_eq!(get("Videos"), 1);
        assert_eq!(get("Audio"), 0);
    }
}
