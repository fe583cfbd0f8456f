//! Main egui application: composes all panels around the conversation controller.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use chat_core::controller::{self, ConversationController};
use chat_core::event_bus::EventBus;
use chat_core::ports::{DurableStorePort, ReplyPort};
use chat_core::preferences;
use chat_platform::reply::HttpReplyService;
use chat_platform::storage::auto_detect_store;
use chat_ui::panels::chat::{self, ChatAction};
use chat_ui::panels::settings::{self, SaveFeedback, SettingsAction};
use chat_ui::panels::sidebar::{self, SidebarAction};
use chat_ui::state::{SettingsEditor, UiState};
use chat_ui::theme;

/// Typing indicator frame interval
const TYPING_TICK: Duration = Duration::from_millis(500);

/// The main application state
pub struct ChatApp {
    ui_state: UiState,
    settings: SettingsEditor,
    event_bus: EventBus,
    controller: Rc<RefCell<ConversationController>>,
    reply: Rc<dyn ReplyPort>,
    store: Rc<dyn DurableStorePort>,
    save_feedback: Option<SaveFeedback>,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let store = auto_detect_store();
        let config = preferences::load_config(store.as_ref());
        let theme = preferences::load_theme(store.as_ref(), &config.theme_key);
        let event_bus = EventBus::new();

        let controller = ConversationController::new(store.clone(), &config, event_bus.clone());
        let reply: Rc<dyn ReplyPort> = Rc::new(HttpReplyService::new(&config));
        log::info!(
            "Loaded {} session(s) from {}, replies via {}",
            controller.sessions().len(),
            store.backend_name(),
            config.reply_endpoint
        );

        Self {
            ui_state: UiState::new(theme),
            settings: SettingsEditor::new(config),
            event_bus,
            controller: Rc::new(RefCell::new(controller)),
            reply,
            store,
            save_feedback: None,
            first_frame: true,
        }
    }

    fn save_theme(&self) {
        if let Err(e) = preferences::save_theme(self.store.as_ref(), &self.settings.applied().theme_key, self.ui_state.theme) {
            log::error!("Failed to save theme: {}", e);
        }
    }

    /// Apply the edited settings, then persist them. Invalid settings leave
    /// the running config untouched.
    fn save_settings(&mut self) {
        let applied = match self.settings.commit() {
            Ok(config) => config.clone(),
            Err(e) => {
                log::warn!("Settings rejected: {}", e);
                self.save_feedback = Some(SaveFeedback {
                    message: e.to_string(),
                    success: false,
                });
                return;
            }
        };
        self.reply = Rc::new(HttpReplyService::new(&applied));

        self.save_feedback = Some(match preferences::save_config(self.store.as_ref(), &applied) {
            Ok(()) => {
                log::info!("Config saved to {}", self.store.backend_name());
                SaveFeedback {
                    message: "Saved".to_string(),
                    success: true,
                }
            }
            Err(e) => {
                log::error!("Failed to save config: {}", e);
                SaveFeedback {
                    message: format!("Applied, but not saved: {}", e),
                    success: false,
                }
            }
        });
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx, self.ui_state.theme);
            self.first_frame = false;
        }

        // Drain events from the controller
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Session Chat")
                        .strong()
                        .color(theme::palette(self.ui_state.theme).accent)
                        .size(16.0),
                );
                ui.separator();
                ui.label(
                    RichText::new(format!("Endpoint: {}", self.settings.applied().reply_endpoint))
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_settings, "Settings")
                        .clicked()
                    {
                        self.ui_state.show_settings = !self.ui_state.show_settings;
                        self.settings.reset();
                        self.save_feedback = None;
                    }
                });
            });
        });

        // ── Session list ─────────────────────────────────────
        let (names, active) = {
            let ctl = self.controller.borrow();
            (ctl.session_names(), ctl.active_session().to_string())
        };
        SidePanel::left("sessions_panel")
            .min_width(200.0)
            .max_width(280.0)
            .show(ctx, |ui| {
                match sidebar::sidebar_panel(ui, &mut self.ui_state, &names, &active) {
                    SidebarAction::Switch(name) => {
                        self.controller.borrow_mut().switch_session(&name);
                    }
                    SidebarAction::Create(name) => {
                        self.controller.borrow_mut().create_session(&name);
                    }
                    SidebarAction::Delete(name) => {
                        self.controller.borrow_mut().delete_session(&name);
                    }
                    SidebarAction::None => {}
                }
            });

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    let action = settings::settings_panel(
                        ui,
                        &mut self.settings.draft,
                        &mut self.ui_state.theme,
                        self.save_feedback.as_ref(),
                    );
                    match action {
                        SettingsAction::ThemeChanged => {
                            theme::apply_theme(ctx, self.ui_state.theme);
                            self.save_theme();
                        }
                        SettingsAction::SaveClicked => {
                            theme::apply_theme(ctx, self.ui_state.theme);
                            self.save_theme();
                            self.save_settings();
                        }
                        SettingsAction::None => {}
                    }
                });
        }

        // ── Conversation ─────────────────────────────────────
        let (messages, mut draft, can_send) = {
            let ctl = self.controller.borrow();
            (
                ctl.active_log().to_vec(),
                ctl.active_draft().to_string(),
                !ctl.has_pending_reply(ctl.active_session()),
            )
        };
        if !can_send {
            ctx.request_repaint_after(TYPING_TICK);
        }

        CentralPanel::default().show(ctx, |ui| {
            match chat::chat_panel(ui, &self.ui_state, &messages, &mut draft, can_send) {
                ChatAction::DraftChanged(text) => {
                    self.controller.borrow_mut().set_draft(&text);
                }
                ChatAction::Send(text) => self.dispatch_send(text, ctx),
                ChatAction::Clear => self.controller.borrow_mut().clear_session(),
                ChatAction::None => {}
            }
        });
    }
}

impl ChatApp {
    /// Run one send cycle against the active session (async)
    fn dispatch_send(&self, text: String, ctx: &egui::Context) {
        let controller = self.controller.clone();
        let reply = self.reply.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            controller::send(&controller, reply.as_ref(), &text).await;
            ctx.request_repaint();
        });
    }
}
