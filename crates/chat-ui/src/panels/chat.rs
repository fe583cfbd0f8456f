//! Chat panel: displays the active session's log and the input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use chat_types::message::{Message, Sender};
use crate::state::{typing_dots, UiState};
use crate::theme::*;

/// What the caller should do after rendering the chat panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    None,
    /// Input box text changed; store it as the session's draft
    DraftChanged(String),
    /// User submitted the input box
    Send(String),
    /// "Clear Chat" clicked
    Clear,
}

/// Render the chat panel for one session.
///
/// `draft` is a scratch copy of the session's draft. `can_send` is false
/// while the session awaits a reply.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &UiState,
    log: &[Message],
    draft: &mut String,
    can_send: bool,
) -> ChatAction {
    let mut action = ChatAction::None;
    let colors = palette(state.theme);
    let time = ui.input(|i| i.time);

    egui::Frame::default()
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.heading(
                            RichText::new("Welcome to GenAI Chat")
                                .color(TEXT_PRIMARY)
                                .strong(),
                        );
                        ui.label(
                            RichText::new("Start chatting or select a session from the left.")
                                .color(TEXT_SECONDARY)
                                .small(),
                        );
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let clear = egui::Button::new(RichText::new("Clear Chat").color(TEXT_PRIMARY))
                            .fill(ERROR.linear_multiply(0.8))
                            .corner_radius(PANEL_ROUNDING);
                        if ui.add(clear).clicked() {
                            action = ChatAction::Clear;
                        }
                        let status_color = if state.is_busy() { WARNING } else { SUCCESS };
                        ui.label(RichText::new(&state.status_text).color(status_color).small());
                    });
                });

                ui.separator();

                // Messages area
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for msg in log {
                            render_message(ui, msg, &colors, time);
                            ui.add_space(6.0);
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(draft)
                        .hint_text("Type your message...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));
                    let response = ui.add(input);
                    if response.changed() {
                        action = ChatAction::DraftChanged(draft.clone());
                    }

                    let send_enabled = can_send && !draft.trim().is_empty();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY).strong())
                            .fill(if send_enabled { colors.accent } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if send_enabled && (enter || send_btn.clicked()) {
                        action = ChatAction::Send(draft.clone());
                        response.request_focus();
                    }
                });
            });
        });

    action
}

fn render_message(ui: &mut egui::Ui, msg: &Message, colors: &Palette, time: f64) {
    let (layout, fill) = match msg.sender {
        Sender::User => (Layout::right_to_left(Align::TOP), colors.user_bubble),
        Sender::Bot => (Layout::left_to_right(Align::TOP), colors.bot_bubble),
    };
    let max_width = ui.available_width() * 0.7;

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(fill)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(Vec2::new(12.0, 8.0))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                if msg.is_pending() {
                    ui.label(RichText::new(typing_dots(time)).color(TEXT_PRIMARY).strong());
                    return;
                }
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(&msg.text).color(TEXT_PRIMARY));
                    if msg.sender == Sender::Bot
                        && ui
                            .small_button("📋")
                            .on_hover_text("Copy Reply")
                            .clicked()
                    {
                        ui.ctx().copy_text(msg.text.clone());
                    }
                });
            });
    });
}
