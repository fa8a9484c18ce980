/// User interface module
///
/// Pure view code: every function here turns owned state into widgets and
/// never mutates anything. All user-provided strings (titles, captions,
/// category names) pass through text widgets, so they are rendered as text
/// content and never interpreted as markup.

pub mod filters;
pub mod gallery;
pub mod hero;
pub mod lightbox;

use iced::Color;

/// Brand accent, used for active controls and lightbox titles
pub const ACCENT: Color = Color {
    r: 0xFF as f32 / 255.0,
    g: 0x6B as f32 / 255.0,
    b: 0x35 as f32 / 255.0,
    a: 1.0,
};

/// Secondary text
pub const MUTED: Color = Color {
    r: 0xCC as f32 / 255.0,
    g: 0xCC as f32 / 255.0,
    b: 0xCC as f32 / 255.0,
    a: 1.0,
};

/// Tile and panel surfaces
pub const SURFACE: Color = Color {
    r: 0x1E as f32 / 255.0,
    g: 0x1E as f32 / 255.0,
    b: 0x1E as f32 / 255.0,
    a: 1.0,
};
