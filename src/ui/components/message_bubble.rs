//! One message row: alignment, run-aware corner shapes, attachments.

use egui::{
    pos2, vec2, Align, Align2, Color32, CornerRadius, FontId, Frame, Layout, Margin, RichText,
    Sense, Stroke, Ui, Vec2,
};

use crate::common::types::{Attachment, DeliveryState, GalleryItem, Message, ReplyRef};
use crate::ui::grouping::RunAnnotation;
use crate::ui::{format, theme};

use super::avatar;

const MAX_BUBBLE_WIDTH: f32 = 420.0;
const AVATAR_COLUMN: f32 = 30.0;

/// Renders a message row. Returns a reply reference when the user picks
/// "Reply" from the bubble's context menu.
pub fn render(
    ui: &mut Ui,
    message: &Message,
    annotation: RunAnnotation,
    show_avatar_column: bool,
) -> Option<ReplyRef> {
    let mut reply = None;
    if message.is_own {
        ui.with_layout(Layout::right_to_left(Align::TOP), |ui| {
            ui.add_space(10.0);
            reply = bubble(ui, message, annotation);
        });
    } else {
        ui.horizontal_top(|ui| {
            ui.add_space(10.0);
            if show_avatar_column {
                // Column is reserved for every run member; the avatar itself
                // only shows on the closing bubble.
                if annotation.is_last_in_run {
                    avatar::avatar(
                        ui,
                        message.sender_name.as_deref().unwrap_or("User"),
                        AVATAR_COLUMN,
                    );
                } else {
                    ui.add_space(AVATAR_COLUMN);
                }
            }
            reply = bubble(ui, message, annotation);
        });
    }
    ui.add_space(if annotation.is_last_in_run { 8.0 } else { 2.0 });
    reply
}

fn bubble(ui: &mut Ui, message: &Message, annotation: RunAnnotation) -> Option<ReplyRef> {
    let mut reply = None;
    ui.vertical(|ui| {
        ui.set_max_width(MAX_BUBBLE_WIDTH);
        if annotation.is_first_in_run && !message.is_own {
            if let Some(sender) = &message.sender_name {
                ui.label(RichText::new(sender).small().color(theme::ACCENT));
            }
        }

        let fill = if message.is_own {
            theme::BUBBLE_OWN
        } else {
            theme::BUBBLE_OTHER
        };
        let frame = Frame::new()
            .fill(fill)
            .corner_radius(corner_radius(message.is_own, annotation))
            .inner_margin(Margin::symmetric(10, 7));
        let response = frame
            .show(ui, |ui| {
                ui.set_max_width(MAX_BUBBLE_WIDTH - 24.0);
                if let Some(reply_to) = &message.reply_to {
                    reply_block(ui, reply_to, message.is_own);
                }
                if let Some(attachment) = &message.attachment {
                    attachment_block(ui, attachment);
                }
                if !message.content.is_empty() {
                    ui.label(&message.content);
                }
                meta_row(ui, message);
            })
            .response
            .interact(Sense::click());

        response.context_menu(|ui| {
            if ui.button("Reply").clicked() {
                reply = Some(ReplyRef {
                    sender_name: message
                        .sender_name
                        .clone()
                        .unwrap_or_else(|| "You".to_string()),
                    snippet: message.preview(),
                });
                ui.close();
            }
        });
    });
    reply
}

/// Corners stay round except where a bubble meets its neighbour in a run:
/// the trailing edge flattens, pointing at the sender's side.
fn corner_radius(is_own: bool, annotation: RunAnnotation) -> CornerRadius {
    const TIGHT: u8 = 4;
    let mut corners = CornerRadius::same(14);
    if is_own {
        if !annotation.is_first_in_run {
            corners.ne = TIGHT;
        }
        if annotation.is_last_in_run {
            corners.se = TIGHT;
        }
    } else {
        if !annotation.is_first_in_run {
            corners.nw = TIGHT;
        }
        if annotation.is_last_in_run {
            corners.sw = TIGHT;
        }
    }
    corners
}

fn reply_block(ui: &mut Ui, reply_to: &ReplyRef, in_own_bubble: bool) {
    let accent = if in_own_bubble {
        Color32::from_white_alpha(160)
    } else {
        theme::ACCENT
    };
    Frame::new()
        .fill(Color32::from_white_alpha(10))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin {
            left: 8,
            right: 6,
            top: 4,
            bottom: 4,
        })
        .show(ui, |ui| {
            ui.label(RichText::new(&reply_to.sender_name).small().color(accent));
            ui.label(RichText::new(&reply_to.snippet).small().weak());
        });
}

fn meta_row(ui: &mut Ui, message: &Message) {
    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        if message.is_own {
            if let Some(state) = message.delivery_state {
                let (tick, colour) = match state {
                    DeliveryState::Sent => ("✓", Color32::from_white_alpha(150)),
                    DeliveryState::Delivered => ("✓✓", Color32::from_white_alpha(150)),
                    DeliveryState::Read => ("✓✓", Color32::from_rgb(125, 211, 252)),
                };
                ui.label(RichText::new(tick).small().color(colour));
            }
        }
        ui.label(RichText::new(&message.sent_at).small().weak());
    });
}

fn attachment_block(ui: &mut Ui, attachment: &Attachment) {
    match attachment {
        Attachment::Image { url, caption } => {
            media_placeholder(ui, "🖼", url, vec2(240.0, 140.0));
            if let Some(caption) = caption {
                ui.label(RichText::new(caption).italics().weak());
            }
        }
        Attachment::Video {
            url,
            duration_secs,
            view_count,
        } => {
            media_placeholder(ui, "▶", url, vec2(240.0, 140.0));
            ui.horizontal(|ui| {
                ui.label(RichText::new(format::duration(*duration_secs)).small().weak());
                if let Some(views) = view_count {
                    ui.label(
                        RichText::new(format!("{} views", format::compact_count(*views)))
                            .small()
                            .weak(),
                    );
                }
            });
        }
        Attachment::Audio {
            duration_secs,
            file_size_bytes,
            ..
        } => {
            ui.horizontal(|ui| {
                ui.label(RichText::new("▶").size(18.0));
                scrub_bar(ui, 120.0);
                ui.label(RichText::new(format::duration(*duration_secs)).small().weak());
            });
            if let Some(bytes) = file_size_bytes {
                ui.label(RichText::new(format::file_size(*bytes)).small().weak());
            }
        }
        Attachment::Link {
            url,
            title,
            description,
        } => {
            ui.label(RichText::new(title).strong().color(theme::ACCENT));
            if let Some(description) = description {
                ui.label(RichText::new(description).small().weak());
            }
            ui.label(RichText::new(url).small().underline().weak());
        }
        Attachment::Gallery { items } => gallery_grid(ui, items),
    }
}

/// Media URLs are opaque display strings; a framed stand-in is drawn
/// instead of fetching anything.
fn media_placeholder(ui: &mut Ui, glyph: &str, url: &str, size: Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter();
    painter.rect_filled(rect, CornerRadius::same(6), Color32::from_gray(28));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        glyph,
        FontId::proportional(26.0),
        Color32::from_gray(140),
    );
    painter.text(
        rect.left_bottom() + vec2(6.0, -5.0),
        Align2::LEFT_BOTTOM,
        file_name(url),
        FontId::proportional(9.0),
        Color32::from_gray(110),
    );
}

fn gallery_grid(ui: &mut Ui, items: &[GalleryItem]) {
    ui.horizontal_wrapped(|ui| {
        for item in items {
            match item {
                GalleryItem::Image { url } => {
                    media_placeholder(ui, "🖼", url, vec2(110.0, 80.0));
                }
                GalleryItem::Video { url, duration_secs } => {
                    ui.vertical(|ui| {
                        media_placeholder(ui, "▶", url, vec2(110.0, 80.0));
                        ui.label(RichText::new(format::duration(*duration_secs)).small().weak());
                    });
                }
            }
        }
    });
}

fn scrub_bar(ui: &mut Ui, width: f32) {
    let (rect, _) = ui.allocate_exact_size(vec2(width, 14.0), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter();
    let y = rect.center().y;
    painter.line_segment(
        [pos2(rect.left(), y), pos2(rect.right(), y)],
        Stroke::new(2.0, Color32::from_gray(120)),
    );
    painter.circle_filled(pos2(rect.left() + width * 0.3, y), 4.0, Color32::WHITE);
}

fn file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
