//! Menu bar and central panel rendering

use eframe::egui;

use crate::app::DemoApp;

impl DemoApp {
    /// Render the menu bar at the top of the window
    pub(in crate::app) fn render_menu_bar(&mut self, ctx: &egui::Context) {
        let theme = self.get_theme();
        let mut toggle_theme = false;

        egui::TopBottomPanel::top("menu_bar")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface)
                    .inner_margin(egui::Margin::symmetric(8, 4))
                    .stroke(egui::Stroke::new(1.0, theme.border)),
            )
            .show(ctx, |ui| {
                egui::menu::bar(ui, |ui| {
                    ui.menu_button("View", |ui| {
                        let label = if self.settings.theme == "light" {
                            "Dark theme"
                        } else {
                            "Light theme"
                        };
                        if ui.button(label).clicked() {
                            toggle_theme = true;
                            ui.close_menu();
                        }
                    });
                    ui.menu_button("Dialogs", |ui| {
                        if ui.button("Close current").clicked() {
                            self.dialogs.api().close();
                            ui.close_menu();
                        }
                    });
                });
            });

        if toggle_theme {
            self.toggle_theme(ctx);
        }
    }

    /// Render the gallery in the central panel
    pub(in crate::app) fn render_central_panel(&mut self, ctx: &egui::Context) {
        let runner = self.runner.clone();
        let events = self.event_tx.clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    super::gallery::render_gallery(ui, &runner, &events);
                });
        });
    }
}
