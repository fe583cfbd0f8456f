//! Settings panel: theme, reply endpoint and request timeout.

use egui::{self, RichText, Vec2};
use chat_types::config::{ChatConfig, Theme};
use crate::theme::*;

/// What the caller should do after rendering the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Nothing changed
    None,
    /// A different theme was picked (applied and saved immediately)
    ThemeChanged,
    /// The user clicked the explicit Save button
    SaveClicked,
}

/// Save feedback passed in from the app layer
#[derive(Clone)]
pub struct SaveFeedback {
    pub message: String,
    pub success: bool,
}

/// Render the settings panel. Returns an action for the caller to handle.
pub fn settings_panel(
    ui: &mut egui::Ui,
    config: &mut ChatConfig,
    theme: &mut Theme,
    save_feedback: Option<&SaveFeedback>,
) -> SettingsAction {
    let mut theme_changed = false;
    let mut save_clicked = false;
    let accent = palette(*theme).accent;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            // ── Appearance ───────────────────────────────────
            ui.label(RichText::new("Theme").color(accent).strong());
            egui::ComboBox::from_id_salt("bg_theme")
                .selected_text(theme.label())
                .show_ui(ui, |ui| {
                    for t in Theme::all() {
                        if ui.selectable_value(theme, *t, t.label()).changed() {
                            theme_changed = true;
                        }
                    }
                });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            // ── Reply service ────────────────────────────────
            ui.label(RichText::new("Reply Service").color(accent).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Endpoint").color(TEXT_SECONDARY).small());
            ui.add(
                egui::TextEdit::singleline(&mut config.reply_endpoint)
                    .hint_text("http://127.0.0.1:8000/chat"),
            );

            ui.add_space(4.0);

            ui.label(RichText::new("Timeout (ms)").color(TEXT_SECONDARY).small());
            ui.add(egui::Slider::new(&mut config.request_timeout_ms, 1_000..=300_000));

            // ── Save Button ──────────────────────────────────
            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn = ui.add(
                    egui::Button::new(
                        RichText::new("Save Settings")
                            .color(TEXT_PRIMARY)
                            .strong(),
                    )
                    .fill(accent)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(120.0, 28.0)),
                );
                if btn.clicked() {
                    save_clicked = true;
                }

                if let Some(fb) = save_feedback {
                    let color = if fb.success { SUCCESS } else { ERROR };
                    ui.label(RichText::new(&fb.message).color(color).small());
                }
            });
        });

    if save_clicked {
        SettingsAction::SaveClicked
    } else if theme_changed {
        SettingsAction::ThemeChanged
    } else {
        SettingsAction::None
    }
}
