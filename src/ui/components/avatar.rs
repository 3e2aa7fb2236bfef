use egui::{vec2, Align2, Color32, FontId, Response, Sense, Stroke, Ui};

use crate::ui::theme;

/// Paints a circular initials avatar and returns its (clickable) response.
pub fn avatar(ui: &mut Ui, name: &str, size: f32) -> Response {
    draw(ui, name, size, None)
}

/// Avatar with an online/offline dot in the corner.
pub fn avatar_with_status(ui: &mut Ui, name: &str, size: f32, is_online: bool) -> Response {
    draw(ui, name, size, Some(is_online))
}

fn draw(ui: &mut Ui, name: &str, size: f32, status: Option<bool>) -> Response {
    let (rect, response) = ui.allocate_exact_size(vec2(size, size), Sense::click());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.circle_filled(rect.center(), size / 2.0, colour_for(name));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            initials(name),
            FontId::proportional(size * 0.38),
            Color32::WHITE,
        );
        if let Some(online) = status {
            let dot = rect.right_bottom() - vec2(size * 0.16, size * 0.16);
            let colour = if online { theme::ONLINE } else { theme::OFFLINE };
            painter.circle(
                dot,
                size * 0.12,
                colour,
                Stroke::new(1.5, ui.visuals().panel_fill),
            );
        }
    }
    response
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

fn colour_for(name: &str) -> Color32 {
    let hash = name
        .bytes()
        .fold(0u32, |acc, byte| acc.wrapping_mul(31).wrapping_add(byte as u32));
    theme::AVATAR_COLOURS[hash as usize % theme::AVATAR_COLOURS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_the_first_two_words() {
        assert_eq!(initials("Alice Johnson"), "AJ");
        assert_eq!(initials("Tech News Daily"), "TN");
        assert_eq!(initials("bob"), "B");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn colour_is_stable_per_name() {
        assert_eq!(colour_for("Alice Johnson"), colour_for("Alice Johnson"));
    }
}
