//! Main update loop and global shortcuts

use eframe::egui;

use super::DemoApp;

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Results from confirm actions
        self.process_events();

        // Global keyboard shortcuts
        ctx.input(|i| {
            // Ctrl+M: Minimize window
            if i.modifiers.ctrl && i.key_pressed(egui::Key::M) {
                ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
            }
        });
        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::T)) {
            self.toggle_theme(ctx);
        }

        // Purge old status messages (toasts) older than 4 seconds
        self.purge_old_status_messages(4);

        // Render UI sections
        self.render_menu_bar(ctx);
        self.render_central_panel(ctx);

        // Dialogs last so the modal layers above everything else
        self.render_dialogs(ctx);
    }
}
