//! Dialog gallery - nested sections that open dialogs through the accessor.
//!
//! None of these functions receive the dialog API as a parameter; each looks
//! it up from the `Ui`'s context, the way deeply nested widgets would.

use crossbeam_channel::Sender;
use eframe::egui::{self, RichText};
use std::time::Duration;

use crate::app::DemoEvent;
use crate::error::ActionError;
use crate::options::{
    ButtonStyle, CancelButton, ConfirmButton, ConfirmControls, DialogContent, DialogMessage,
    DialogSize, Icon,
};
use crate::provider::use_dialog_api;
use crate::runtime::ActionRunner;

/// Render every gallery section.
pub fn render_gallery(ui: &mut egui::Ui, runner: &ActionRunner, events: &Sender<DemoEvent>) {
    ui.heading("Dialog gallery");
    ui.label("Every button below opens a dialog from a nested widget.");
    ui.add_space(12.0);

    ui.group(|ui| notification_section(ui));
    ui.add_space(8.0);
    ui.group(|ui| confirm_section(ui, runner, events));
    ui.add_space(8.0);
    ui.group(|ui| custom_section(ui));
}

fn notification_section(ui: &mut egui::Ui) {
    ui.label(RichText::new("Notifications").strong());
    ui.horizontal_wrapped(|ui| {
        if ui.button("Info").clicked() {
            use_dialog_api(ui.ctx()).info(
                DialogContent::new("Your profile is visible to team members.").title("Heads up"),
            );
        }
        if ui.button("Success").clicked() {
            use_dialog_api(ui.ctx())
                .success(DialogContent::new("All changes were saved.").title("Saved"));
        }
        if ui.button("Error").clicked() {
            use_dialog_api(ui.ctx()).error(
                DialogContent::new("The server rejected the upload.").title("Upload failed"),
            );
        }
        if ui.button("Warning").clicked() {
            use_dialog_api(ui.ctx()).warning(
                DialogContent::new("Your session expires in five minutes.")
                    .title("Session expiring")
                    .size(DialogSize::Md),
            );
        }
        if ui.button("Replace while open").clicked() {
            let api = use_dialog_api(ui.ctx());
            api.info(DialogContent::new("Done").title("Saved"));
            api.error(DialogContent::new("Oops").title("Failed"));
        }
    });
}

fn confirm_section(ui: &mut egui::Ui, runner: &ActionRunner, events: &Sender<DemoEvent>) {
    ui.label(RichText::new("Confirmations").strong());
    for draft in ["Quarterly report", "Meeting notes"] {
        draft_row(ui, draft, runner, events);
    }
}

/// One row per draft; each action is a different completion style.
fn draft_row(ui: &mut egui::Ui, draft: &str, runner: &ActionRunner, events: &Sender<DemoEvent>) {
    ui.horizontal(|ui| {
        ui.label(draft);

        if ui.small_button("Delete").clicked() {
            let events = events.clone();
            let name = draft.to_string();
            let danger = ButtonStyle {
                fill: Some(egui::Color32::from_rgb(220, 38, 38)),
                text: None,
            };
            use_dialog_api(ui.ctx()).confirm(
                DialogContent::new(format!("\"{}\" will be removed permanently.", draft))
                    .title("Delete draft?"),
                ConfirmControls::new(
                    ConfirmButton::new("Delete")
                        .style(danger)
                        .on_activate(move || {
                            let _ = events.send(DemoEvent::Completed(format!("Deleted {}", name)));
                        }),
                )
                .with_cancel(CancelButton::default()),
            );
        }

        if ui.small_button("Publish").clicked() {
            let runner = runner.clone();
            let events = events.clone();
            let name = draft.to_string();
            use_dialog_api(ui.ctx()).confirm(
                DialogContent::new("Publishing takes a couple of seconds.").title("Publish draft?"),
                ConfirmControls::new(ConfirmButton::new("Publish").on_activate(move || {
                    let events = events.clone();
                    let name = name.clone();
                    runner.spawn(async move {
                        tokio::time::sleep(Duration::from_secs(2)).await;
                        let _ = events.send(DemoEvent::Completed(format!("Published {}", name)));
                        Ok::<(), ActionError>(())
                    })
                }))
                .with_cancel(CancelButton::default()),
            );
        }

        if ui.small_button("Sync").clicked() {
            let runner = runner.clone();
            let events = events.clone();
            use_dialog_api(ui.ctx()).confirm(
                DialogContent::new("The sync server is offline, so this always fails.")
                    .title("Sync draft?"),
                ConfirmControls::new(
                    ConfirmButton::new("Sync")
                        .on_activate(move || {
                            runner.spawn(async {
                                tokio::time::sleep(Duration::from_secs(1)).await;
                                Err::<(), _>("sync server unreachable")
                            })
                        })
                        .on_error(move |err| {
                            let _ = events.send(DemoEvent::Failed(format!("Sync: {}", err)));
                        }),
                )
                .with_cancel(CancelButton::default()),
            );
        }

        if ui.small_button("Archive").clicked() {
            let api = use_dialog_api(ui.ctx());
            let follow_up = api.clone();
            let name = draft.to_string();
            api.confirm(
                DialogContent::new("Archived drafts can be restored later.").title("Archive draft?"),
                ConfirmControls::new(ConfirmButton::new("Archive").on_activate(move || {
                    follow_up.success(
                        DialogContent::new(format!("\"{}\" was archived.", name)).title("Archived"),
                    );
                })),
            );
        }
    });
}

fn custom_section(ui: &mut egui::Ui) {
    ui.label(RichText::new("Custom content").strong());
    if ui.button("Keyboard shortcuts").clicked() {
        use_dialog_api(ui.ctx()).custom(
            DialogContent::new(DialogMessage::widget(|ui| {
                egui::Grid::new("shortcut_grid").striped(true).show(ui, |ui| {
                    ui.monospace("Ctrl+T");
                    ui.label("Toggle theme");
                    ui.end_row();
                    ui.monospace("Ctrl+M");
                    ui.label("Minimize window");
                    ui.end_row();
                    ui.monospace("Esc");
                    ui.label("Dismiss dialog");
                    ui.end_row();
                });
            }))
            .title("Shortcuts")
            .icon(Icon::from_static("⌨"))
            .size(DialogSize::Lg),
        );
    }
}
