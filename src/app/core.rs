//! Core DemoApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::time::Instant;
use tracing::{info, warn};

use crate::app::DemoEvent;
use crate::config::{load_settings, save_settings, DialogSettings};
use crate::error::DialogError;
use crate::provider::DialogProvider;
use crate::runtime::ActionRunner;
use crate::ui;

pub struct DemoApp {
    // Dialog registry for this window
    pub dialogs: DialogProvider,

    // Runs deferred confirm actions
    pub runner: ActionRunner,

    // Channel for confirm actions to report back to the app
    pub event_tx: Sender<DemoEvent>,
    pub event_rx: Receiver<DemoEvent>,

    // Persisted preferences
    pub settings: DialogSettings,

    // Status toast messages with creation time (auto-expire)
    pub status_messages: Vec<(String, Instant)>,
}

impl DemoApp {
    /// Get the current theme based on the settings ("dark" or "light")
    pub(super) fn get_theme(&self) -> ui::DialogTheme {
        ui::DialogTheme::from_name(&self.settings.theme)
    }

    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, DialogError> {
        let settings = load_settings().unwrap_or_default();
        info!(theme = %settings.theme, "starting dialog gallery");

        let (event_tx, event_rx) = unbounded::<DemoEvent>();

        let runner = ActionRunner::new()?.with_repaint(cc.egui_ctx.clone());

        let dialogs = DialogProvider::new(&settings);
        dialogs.install(&cc.egui_ctx);

        let app = Self {
            dialogs,
            runner,
            event_tx,
            event_rx,
            settings,
            status_messages: Vec::new(),
        };
        ui::apply_app_style(&cc.egui_ctx, &app.get_theme());
        Ok(app)
    }

    /// Switch between the dark and light theme and persist the choice.
    pub(super) fn toggle_theme(&mut self, ctx: &eframe::egui::Context) {
        self.settings.theme = match self.settings.theme.as_str() {
            "light" => "dark".to_string(),
            _ => "light".to_string(),
        };
        let theme = self.get_theme();
        ui::apply_app_style(ctx, &theme);
        self.dialogs.set_theme(theme);
        self.save();
    }

    pub(super) fn save(&self) {
        if let Err(e) = save_settings(&self.settings) {
            warn!("Failed to save settings: {}", e);
        }
    }

    /// Purge status messages older than the given duration.
    pub(super) fn purge_old_status_messages(&mut self, max_age_secs: u64) {
        self.status_messages
            .retain(|(_, created)| created.elapsed().as_secs() < max_age_secs);
    }
}

impl Drop for DemoApp {
    fn drop(&mut self) {
        // Persist settings on exit
        self.save();
    }
}
