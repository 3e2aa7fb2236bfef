//! Shared palette for the chat surfaces.

use egui::Color32;

pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
pub const BUBBLE_OWN: Color32 = Color32::from_rgb(46, 94, 170);
pub const BUBBLE_OTHER: Color32 = Color32::from_rgb(45, 48, 56);
pub const PANEL_SELECTED: Color32 = Color32::from_rgb(52, 58, 72);
pub const ONLINE: Color32 = Color32::from_rgb(74, 222, 128);
pub const OFFLINE: Color32 = Color32::GRAY;
pub const UNREAD_MUTED: Color32 = Color32::from_rgb(90, 94, 103);
pub const VERIFIED: Color32 = Color32::from_rgb(96, 165, 250);

/// Avatar backdrop palette; picked by hashing the display name so a given
/// person keeps their colour across panels.
pub const AVATAR_COLOURS: [Color32; 8] = [
    Color32::from_rgb(239, 68, 68),
    Color32::from_rgb(249, 115, 22),
    Color32::from_rgb(234, 179, 8),
    Color32::from_rgb(34, 197, 94),
    Color32::from_rgb(20, 184, 166),
    Color32::from_rgb(59, 130, 246),
    Color32::from_rgb(139, 92, 246),
    Color32::from_rgb(236, 72, 153),
];
