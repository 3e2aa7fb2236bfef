//! New-chat / new-group modal.

use egui::{
    vec2, Align2, Button, Color32, CornerRadius, Frame, Label, Margin, Response, RichText,
    ScrollArea, Sense, TextEdit, Ui, UiBuilder, Vec2,
};

use crate::common::types::Contact;
use crate::ui::state::{DialogMode, NewChatDialog};
use crate::ui::theme;

use super::avatar;

#[derive(Default)]
pub struct DialogActions {
    pub close: bool,
    pub select_contact: Option<String>,
    pub create_group: Option<(Vec<String>, String)>,
}

pub fn render(
    ctx: &egui::Context,
    dialog: &mut NewChatDialog,
    contacts: &[Contact],
) -> DialogActions {
    let mut actions = DialogActions::default();
    let mut open = true;

    let title = match dialog.mode {
        DialogMode::DirectSelect => "New Message",
        DialogMode::GroupCompose => "New Group",
    };
    egui::Window::new(title)
        .id(egui::Id::new("new_chat_dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .fixed_size(vec2(340.0, 430.0))
        .show(ctx, |ui| {
            ui.add(
                TextEdit::singleline(&mut dialog.search)
                    .hint_text("Search contacts...")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);

            match dialog.mode {
                DialogMode::DirectSelect => {
                    if ui.button("👥 New Group").clicked() {
                        dialog.mode = DialogMode::GroupCompose;
                    }
                }
                DialogMode::GroupCompose => {
                    ui.add(
                        TextEdit::singleline(&mut dialog.group_name)
                            .hint_text("Group name")
                            .desired_width(f32::INFINITY),
                    );
                    if !dialog.members.is_empty() {
                        ui.add_space(4.0);
                        let mut remove: Option<String> = None;
                        ui.horizontal_wrapped(|ui| {
                            for member_id in &dialog.members {
                                let Some(contact) =
                                    contacts.iter().find(|c| c.id == *member_id)
                                else {
                                    continue;
                                };
                                Frame::new()
                                    .fill(theme::PANEL_SELECTED)
                                    .corner_radius(CornerRadius::same(10))
                                    .inner_margin(Margin::symmetric(6, 2))
                                    .show(ui, |ui| {
                                        ui.label(RichText::new(first_name(&contact.name)).small());
                                        if ui.small_button("✕").clicked() {
                                            remove = Some(member_id.clone());
                                        }
                                    });
                            }
                        });
                        if let Some(member_id) = remove {
                            dialog.toggle_member(&member_id);
                        }
                    }
                }
            }
            ui.separator();

            let query = dialog.search.to_lowercase();
            let mut clicked: Option<String> = None;
            ScrollArea::vertical()
                .id_salt("contact_list")
                .max_height(250.0)
                .show(ui, |ui| {
                    for contact in contacts
                        .iter()
                        .filter(|c| query.is_empty() || c.name.to_lowercase().contains(&query))
                    {
                        let is_member = dialog.members.contains(&contact.id);
                        if contact_row(ui, contact, dialog.mode, is_member).clicked() {
                            clicked = Some(contact.id.clone());
                        }
                    }
                });
            if let Some(contact_id) = clicked {
                match dialog.mode {
                    DialogMode::DirectSelect => {
                        actions.select_contact = Some(contact_id);
                        actions.close = true;
                    }
                    DialogMode::GroupCompose => dialog.toggle_member(&contact_id),
                }
            }

            if dialog.mode == DialogMode::GroupCompose {
                ui.separator();
                let label = format!("Create Group ({} members)", dialog.members.len());
                if ui
                    .add_sized(
                        [ui.available_width(), 26.0],
                        Button::new(label),
                    )
                    .clicked()
                {
                    // The guard also gates the action: take_group refuses
                    // small or unnamed groups.
                    if let Some(group) = dialog.take_group() {
                        actions.create_group = Some(group);
                        actions.close = true;
                    }
                }
            }
        });

    if !open {
        actions.close = true;
    }
    actions
}

fn contact_row(ui: &mut Ui, contact: &Contact, mode: DialogMode, is_member: bool) -> Response {
    let fill = if is_member && mode == DialogMode::GroupCompose {
        theme::PANEL_SELECTED
    } else {
        Color32::TRANSPARENT
    };
    ui.scope_builder(
        UiBuilder::new()
            .id_salt(contact.id.as_str())
            .sense(Sense::click()),
        |ui| {
            Frame::new()
                .fill(fill)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(Margin::symmetric(6, 4))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        avatar::avatar_with_status(ui, &contact.name, 34.0, contact.is_online);
                        ui.vertical(|ui| {
                            ui.add(Label::new(RichText::new(&contact.name).strong()).truncate());
                            let presence = if contact.is_online {
                                "online".to_string()
                            } else {
                                contact
                                    .last_seen
                                    .clone()
                                    .unwrap_or_else(|| "offline".to_string())
                            };
                            ui.label(RichText::new(presence).small().weak());
                        });
                        if mode == DialogMode::GroupCompose && is_member {
                            ui.label(RichText::new("✔").color(theme::ACCENT));
                        }
                    });
                });
        },
    )
    .response
}

fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}
