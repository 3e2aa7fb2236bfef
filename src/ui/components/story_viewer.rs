//! Full-screen story overlay with auto-advance playback.

use egui::{
    pos2, vec2, Align, Align2, Button, Color32, CornerRadius, FontId, Id, Key, Layout, Order,
    Pos2, ProgressBar, Rect, RichText, Sense, TextEdit, UiBuilder,
};

use crate::store::ChatStore;
use crate::ui::state::StoryViewer;
use crate::ui::theme;

use super::avatar;

#[derive(Default)]
pub struct StoryActions {
    pub close: bool,
    pub next: bool,
    pub previous: bool,
    pub reply: Option<String>,
    pub like: bool,
}

pub fn render(ctx: &egui::Context, viewer: &mut StoryViewer, store: &ChatStore) -> StoryActions {
    let mut actions = StoryActions::default();

    let stories = store.stories_for(&viewer.user_id);
    let Some(current) = stories.get(viewer.index) else {
        actions.close = true;
        return actions;
    };
    let user_name = store
        .story_roster
        .iter()
        .find(|u| u.id == viewer.user_id)
        .map(|u| u.name.clone())
        .unwrap_or_default();

    let mut reply_focused = false;

    egui::Area::new(Id::new("story_viewer"))
        .order(Order::Foreground)
        .fixed_pos(Pos2::ZERO)
        .show(ctx, |ui| {
            let screen = ctx.screen_rect();
            ui.painter()
                .rect_filled(screen, CornerRadius::ZERO, Color32::from_black_alpha(245));

            let panel = Rect::from_center_size(
                screen.center(),
                vec2(400.0_f32.min(screen.width()), (screen.height() - 32.0).min(720.0)),
            );
            let base = current
                .color
                .map(|[r, g, b]| Color32::from_rgb(r, g, b))
                .unwrap_or(theme::ACCENT);
            ui.painter()
                .rect_filled(panel, CornerRadius::same(12), base);
            // Cheap vertical gradient: darken the lower half.
            let lower = Rect::from_min_max(pos2(panel.left(), panel.center().y), panel.max);
            ui.painter()
                .rect_filled(lower, CornerRadius::same(12), Color32::from_black_alpha(60));

            ui.scope_builder(
                UiBuilder::new().max_rect(panel.shrink(12.0)),
                |ui| {
                    // Segment row: filled for past stories, live for the
                    // current one, empty for the rest.
                    ui.horizontal(|ui| {
                        let count = stories.len().max(1);
                        let gap = 4.0;
                        let width =
                            (ui.available_width() - gap * (count as f32 - 1.0)) / count as f32;
                        ui.spacing_mut().item_spacing.x = gap;
                        for i in 0..count {
                            let fraction = if i < viewer.index {
                                1.0
                            } else if i == viewer.index {
                                viewer.progress
                            } else {
                                0.0
                            };
                            ui.add(
                                ProgressBar::new(fraction)
                                    .desired_width(width)
                                    .desired_height(3.0)
                                    .fill(Color32::WHITE),
                            );
                        }
                    });
                    ui.add_space(6.0);

                    ui.horizontal(|ui| {
                        avatar::avatar(ui, &user_name, 30.0);
                        ui.label(RichText::new(&user_name).strong().color(Color32::WHITE));
                        ui.label(
                            RichText::new(&current.timestamp)
                                .small()
                                .color(Color32::from_white_alpha(170)),
                        );
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui.button("✕").clicked() {
                                actions.close = true;
                            }
                        });
                    });

                    let footer_height = 40.0;
                    let content_height = (ui.available_height() - footer_height).max(0.0);
                    ui.allocate_ui(vec2(ui.available_width(), content_height), |ui| {
                        ui.centered_and_justified(|ui| {
                            if let Some(image_url) = &current.image_url {
                                // Opaque URL; stand-in only.
                                ui.label(
                                    RichText::new(format!("🖼 {image_url}"))
                                        .color(Color32::from_white_alpha(200)),
                                );
                            } else if let Some(content) = &current.content {
                                ui.label(
                                    RichText::new(content).size(22.0).color(Color32::WHITE),
                                );
                            }
                        });
                    });

                    ui.horizontal(|ui| {
                        let response = ui.add(
                            TextEdit::singleline(&mut viewer.reply_input)
                                .hint_text("Reply to story...")
                                .desired_width(ui.available_width() - 80.0),
                        );
                        reply_focused = response.has_focus();
                        if ui.button("♥").clicked() {
                            actions.like = true;
                        }
                        let can_send = !viewer.reply_input.trim().is_empty();
                        let submitted = response.lost_focus()
                            && ui.input(|i| i.key_pressed(Key::Enter))
                            && can_send;
                        if ui.add_enabled(can_send, Button::new("➤")).clicked() || submitted {
                            actions.reply = Some(viewer.reply_input.trim().to_string());
                            viewer.reply_input.clear();
                        }
                    });
                },
            );

            // Invisible tap zones on the panel's flanks, clear of the
            // header and footer rows.
            let zone_top = panel.top() + 80.0;
            let zone_bottom = panel.bottom() - 80.0;
            let left_zone = Rect::from_min_max(
                pos2(panel.left(), zone_top),
                pos2(panel.left() + panel.width() / 3.0, zone_bottom),
            );
            let right_zone = Rect::from_min_max(
                pos2(panel.right() - panel.width() / 3.0, zone_top),
                pos2(panel.right(), zone_bottom),
            );
            if ui
                .interact(left_zone, Id::new("story_prev_zone"), Sense::click())
                .clicked()
            {
                actions.previous = true;
            }
            if ui
                .interact(right_zone, Id::new("story_next_zone"), Sense::click())
                .clicked()
            {
                actions.next = true;
            }

            // Chevrons for pointer users.
            let chevron_font = FontId::proportional(26.0);
            ui.painter().text(
                pos2(panel.left() - 22.0, panel.center().y),
                Align2::CENTER_CENTER,
                "‹",
                chevron_font.clone(),
                Color32::from_white_alpha(170),
            );
            ui.painter().text(
                pos2(panel.right() + 22.0, panel.center().y),
                Align2::CENTER_CENTER,
                "›",
                chevron_font,
                Color32::from_white_alpha(170),
            );
        });

    ctx.input(|i| {
        if i.key_pressed(Key::Escape) {
            actions.close = true;
        }
        if i.key_pressed(Key::ArrowRight) {
            actions.next = true;
        }
        if i.key_pressed(Key::ArrowLeft) {
            actions.previous = true;
        }
    });

    // Holding the pointer (or typing a reply) pauses without resetting.
    viewer.paused = ctx.input(|i| i.pointer.primary_down()) || reply_focused;

    actions
}
