//! UI theme constants and per-theme palettes

use egui::{Color32, CornerRadius, Stroke, Vec2};
use chat_types::config::Theme;

pub const BG_PRIMARY: Color32 = Color32::from_rgb(24, 24, 27);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(39, 39, 42);
pub const BG_SURFACE: Color32 = Color32::from_rgb(52, 52, 56);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(228, 228, 231);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(161, 161, 170);
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(14);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

/// Colors that change with the selected theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub accent: Color32,
    pub user_bubble: Color32,
    pub bot_bubble: Color32,
    pub backdrop: Color32,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::PurplePink => Palette {
            accent: Color32::from_rgb(236, 72, 153),
            user_bubble: Color32::from_rgb(79, 70, 229),
            bot_bubble: Color32::from_rgb(15, 118, 110),
            backdrop: Color32::from_rgb(46, 16, 64),
        },
        Theme::BlueTeal => Palette {
            accent: Color32::from_rgb(20, 184, 166),
            user_bubble: Color32::from_rgb(37, 99, 235),
            bot_bubble: Color32::from_rgb(13, 148, 136),
            backdrop: Color32::from_rgb(12, 30, 60),
        },
        Theme::Sunset => Palette {
            accent: Color32::from_rgb(249, 115, 22),
            user_bubble: Color32::from_rgb(190, 24, 93),
            bot_bubble: Color32::from_rgb(180, 83, 9),
            backdrop: Color32::from_rgb(60, 20, 20),
        },
        Theme::GreenMint => Palette {
            accent: Color32::from_rgb(52, 211, 153),
            user_bubble: Color32::from_rgb(21, 128, 61),
            bot_bubble: Color32::from_rgb(4, 120, 87),
            backdrop: Color32::from_rgb(10, 40, 30),
        },
    }
}

/// Apply the dark theme, tinted by `theme`, to an egui context
pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    let colors = palette(theme);
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = colors.backdrop;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_PRIMARY;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = colors.accent;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = colors.accent.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, colors.accent);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
    log::debug!("Theme applied: {}", theme.label());
}
