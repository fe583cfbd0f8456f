//! Sidebar: session list with create / switch / delete.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use crate::state::UiState;
use crate::theme::*;

/// What the caller should do after rendering the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    None,
    Switch(String),
    Create(String),
    Delete(String),
}

/// Render the session list. `names` is in display order.
pub fn sidebar_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    names: &[String],
    active: &str,
) -> SidebarAction {
    let mut action = SidebarAction::None;
    let colors = palette(state.theme);

    egui::Frame::default()
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new("Sessions").color(TEXT_PRIMARY).strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let btn = egui::Button::new(RichText::new("+New").color(TEXT_PRIMARY))
                        .fill(SUCCESS.linear_multiply(0.7))
                        .corner_radius(PANEL_ROUNDING);
                    if ui.add(btn).clicked() {
                        state.show_new_session = !state.show_new_session;
                        state.new_session_name.clear();
                    }
                });
            });

            if state.show_new_session {
                ui.add_space(4.0);
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.new_session_name)
                        .hint_text("Enter session name:"),
                );
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.horizontal(|ui| {
                    if ui.button("Create").clicked() || enter {
                        action = SidebarAction::Create(state.new_session_name.clone());
                    }
                    if ui.button("Cancel").clicked() {
                        state.show_new_session = false;
                        state.new_session_name.clear();
                    }
                });
            }

            ui.separator();

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for name in names {
                        let is_active = name == active;
                        let fill = if is_active { colors.accent } else { BG_SURFACE };

                        egui::Frame::default()
                            .fill(fill)
                            .corner_radius(PANEL_ROUNDING)
                            .inner_margin(Vec2::new(8.0, 4.0))
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    let label = ui.add(
                                        egui::Label::new(RichText::new(name).color(TEXT_PRIMARY))
                                            .sense(egui::Sense::click()),
                                    );
                                    if label.clicked() && !is_active {
                                        action = SidebarAction::Switch(name.clone());
                                    }
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                        if ui.small_button("⋮").clicked() {
                                            state.toggle_menu(name);
                                        }
                                    });
                                });

                                if state.open_menu.as_deref() == Some(name.as_str()) {
                                    let delete = egui::Button::new(
                                        RichText::new("Delete").color(TEXT_PRIMARY).small(),
                                    )
                                    .fill(ERROR.linear_multiply(0.8));
                                    if ui.add(delete).clicked() {
                                        action = SidebarAction::Delete(name.clone());
                                    }
                                }
                            });
                        ui.add_space(4.0);
                    }
                });
        });

    action
}
