use egui::{Align, Color32, CornerRadius, Frame, Key, Layout, Margin, RichText, TextEdit, Ui};

use crate::ui::state::ComposeState;
use crate::ui::theme;

#[derive(Default)]
pub struct InputActions {
    pub send: Option<String>,
    pub pick_attachment: bool,
    pub open_emoji: bool,
    pub record_voice: bool,
}

/// Composer row with an optional reply preview above it.
pub fn render(ui: &mut Ui, compose: &mut ComposeState) -> InputActions {
    let mut actions = InputActions::default();

    if let Some(reply_to) = &compose.reply_to {
        let mut cancel = false;
        Frame::new()
            .fill(Color32::from_white_alpha(8))
            .corner_radius(CornerRadius::same(6))
            .inner_margin(Margin::symmetric(8, 5))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(&reply_to.sender_name)
                                .small()
                                .color(theme::ACCENT),
                        );
                        ui.label(RichText::new(&reply_to.snippet).small().weak());
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("✕").clicked() {
                            cancel = true;
                        }
                    });
                });
            });
        if cancel {
            compose.reply_to = None;
        }
    }

    let mut send = false;
    ui.horizontal(|ui| {
        if ui.button("📎").clicked() {
            actions.pick_attachment = true;
        }
        if ui.button("😊").clicked() {
            actions.open_emoji = true;
        }

        let has_text = !compose.input.trim().is_empty();
        let response = ui.add(
            TextEdit::singleline(&mut compose.input)
                .hint_text("Message")
                .desired_width(ui.available_width() - 58.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            send = true;
        }

        // Mic swaps to Send as soon as there is something to send.
        if has_text {
            if ui.button("Send").clicked() {
                send = true;
            }
        } else if ui.button("🎤").clicked() {
            actions.record_voice = true;
        }
    });

    if send && !compose.input.trim().is_empty() {
        let message = compose.input.trim().to_string();
        compose.input.clear();
        actions.send = Some(message);
    }

    actions
}
