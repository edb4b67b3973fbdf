//! Integration tests for dialog-host
//!
//! These tests exercise full workflows across the provider, registry,
//! confirmation protocol and surface, using a headless egui context.

#[cfg(test)]
mod integration_tests {
    use crate::action::Deferred;
    use crate::confirm::Activation;
    use crate::config::DialogSettings;
    use crate::error::{ActionError, DialogError};
    use crate::options::{
        CancelButton, ConfirmButton, ConfirmControls, DialogContent, DialogKind, DialogOptions,
        DialogVariant,
    };
    use crate::provider::{use_dialog_api, DialogApi, DialogProvider};
    use crate::runtime::ActionRunner;
    use eframe::egui;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    fn setup() -> (egui::Context, DialogProvider, DialogApi) {
        let ctx = egui::Context::default();
        let provider = DialogProvider::new(&DialogSettings::default());
        provider.install(&ctx);
        let api = use_dialog_api(&ctx);
        (ctx, provider, api)
    }

    fn frame(ctx: &egui::Context, provider: &DialogProvider) -> Result<(), DialogError> {
        let mut result = Ok(());
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            result = provider.show(ctx);
        });
        result
    }

    fn delete_prompt() -> DialogContent {
        DialogContent::new("This cannot be undone.").title("Delete?")
    }

    /// Scenario D: a second helper call replaces the first dialog outright
    #[test]
    fn test_second_dialog_replaces_first() {
        let (ctx, provider, api) = setup();

        api.info(DialogContent::new("Done").title("Saved"));
        frame(&ctx, &provider).unwrap();
        api.error(DialogContent::new("Oops").title("Failed"));
        frame(&ctx, &provider).unwrap();

        let snapshot = api.snapshot();
        assert!(snapshot.is_visible);
        assert_eq!(snapshot.variant(), Some(DialogVariant::Error));
        let options = snapshot.options.unwrap();
        assert_eq!(options.title(), Some("Failed"));
        assert_eq!(options.content.message.as_text(), Some("Oops"));
    }

    /// Variant helpers overwrite whatever kind the options carried
    #[test]
    fn test_helpers_fix_variant() {
        let (_ctx, _provider, api) = setup();
        let error_options = || DialogOptions::new(DialogKind::Error, "body");

        api.info(error_options());
        assert_eq!(api.current_variant(), Some(DialogVariant::Info));
        api.success(error_options());
        assert_eq!(api.current_variant(), Some(DialogVariant::Success));
        api.warning(error_options());
        assert_eq!(api.current_variant(), Some(DialogVariant::Warning));
        api.custom(error_options());
        assert_eq!(api.current_variant(), Some(DialogVariant::Custom));
        api.confirm(error_options(), ConfirmControls::default());
        assert_eq!(api.current_variant(), Some(DialogVariant::Confirm));
        api.error(DialogOptions::new(DialogKind::Info, "body"));
        assert_eq!(api.current_variant(), Some(DialogVariant::Error));
    }

    /// Scenario A: an immediate action closes without ever processing
    #[test]
    fn test_immediate_confirm_closes() {
        let (ctx, provider, api) = setup();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        api.confirm(
            delete_prompt(),
            ConfirmControls::new(ConfirmButton::new("Delete").on_activate(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })),
        );
        frame(&ctx, &provider).unwrap();

        assert_eq!(api.activate_confirm().unwrap(), Activation::Closed);
        assert!(!api.is_visible());
        assert!(!api.is_processing());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        frame(&ctx, &provider).unwrap();
        assert!(!api.is_processing());
    }

    /// Scenario C: no action wired fails before any state changes
    #[test]
    fn test_missing_action_fails_without_state_change() {
        let (ctx, provider, api) = setup();
        api.confirm(delete_prompt(), ConfirmControls::new(ConfirmButton::new("Delete")));
        frame(&ctx, &provider).unwrap();
        let before = api.snapshot();

        let result = api.activate_confirm();
        assert!(matches!(result, Err(DialogError::MissingConfirmAction)));

        let after = api.snapshot();
        assert!(after.is_visible);
        assert!(!after.is_processing);
        assert_eq!(after.generation, before.generation);
    }

    /// Deferred success: processing while pending, then closed
    #[test]
    fn test_deferred_confirm_success() {
        let (ctx, provider, api) = setup();
        let (deferred, sender) = Deferred::channel();
        let slot = Arc::new(Mutex::new(Some(deferred)));

        api.confirm(
            delete_prompt(),
            ConfirmControls::new(ConfirmButton::new("Delete").on_activate(move || {
                slot.lock().unwrap().take().expect("activated once")
            }))
            .with_cancel(CancelButton::default()),
        );

        assert_eq!(api.activate_confirm().unwrap(), Activation::Processing);
        assert!(api.is_processing());
        assert!(api.is_visible());

        // A second click while in flight is ignored
        assert_eq!(api.activate_confirm().unwrap(), Activation::Ignored);

        frame(&ctx, &provider).unwrap();
        assert!(api.is_processing());

        sender.resolve();
        frame(&ctx, &provider).unwrap();
        assert!(!api.is_processing());
        assert!(!api.is_visible());
    }

    /// Deferred failure: flag resets, dialog stays open, failure is reported
    #[test]
    fn test_deferred_confirm_failure() {
        let (ctx, provider, api) = setup();
        let (deferred, sender) = Deferred::channel();
        let slot = Arc::new(Mutex::new(Some(deferred)));
        let reported: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = reported.clone();

        api.confirm(
            delete_prompt(),
            ConfirmControls::new(
                ConfirmButton::new("Delete")
                    .on_activate(move || slot.lock().unwrap().take().expect("activated once"))
                    .on_error(move |err| sink.lock().unwrap().push(err.to_string())),
            ),
        );

        assert_eq!(api.activate_confirm().unwrap(), Activation::Processing);
        sender.reject("permission denied");
        frame(&ctx, &provider).unwrap();

        let snapshot = api.snapshot();
        assert!(!snapshot.is_processing);
        assert!(snapshot.is_visible);
        assert!(snapshot.confirm_enabled());
        assert_eq!(snapshot.failure, Some(ActionError::new("permission denied")));
        assert_eq!(*reported.lock().unwrap(), vec!["permission denied".to_string()]);
    }

    /// Cancel is disabled while processing, whatever its own flag says
    #[test]
    fn test_cancel_disabled_while_processing() {
        let (_ctx, _provider, api) = setup();
        let (deferred, _sender) = Deferred::channel();
        let slot = Arc::new(Mutex::new(Some(deferred)));

        api.confirm(
            delete_prompt(),
            ConfirmControls::new(
                ConfirmButton::new("Delete")
                    .on_activate(move || slot.lock().unwrap().take().expect("activated once")),
            )
            .with_cancel(CancelButton::new("Keep").disabled(false)),
        );
        assert_eq!(api.snapshot().cancel_enabled(), Some(true));

        api.activate_confirm().unwrap();
        assert_eq!(api.snapshot().cancel_enabled(), Some(false));
        assert_eq!(api.activate_cancel(), Activation::Ignored);
        assert_eq!(api.dismiss(), Activation::Ignored);
        assert!(api.is_visible());
    }

    #[test]
    fn test_cancel_handler_replaces_close() {
        let (_ctx, _provider, api) = setup();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        api.confirm(
            delete_prompt(),
            ConfirmControls::new(ConfirmButton::new("Delete").on_activate(|| ())).with_cancel(
                CancelButton::new("Keep").on_activate(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
            ),
        );

        assert_eq!(api.activate_cancel(), Activation::Delegated);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(api.is_visible());
    }

    #[test]
    fn test_default_cancel_closes() {
        let (_ctx, _provider, api) = setup();
        api.confirm(
            delete_prompt(),
            ConfirmControls::new(ConfirmButton::new("Delete").on_activate(|| ()))
                .with_cancel(CancelButton::default()),
        );
        assert_eq!(api.activate_cancel(), Activation::Closed);
        assert!(!api.is_visible());
    }

    /// A result for a dialog that has since been replaced must not close the new one
    #[test]
    fn test_stale_completion_is_ignored() {
        let (ctx, provider, api) = setup();
        let (deferred, sender) = Deferred::channel();
        let slot = Arc::new(Mutex::new(Some(deferred)));

        api.confirm(
            delete_prompt(),
            ConfirmControls::new(
                ConfirmButton::new("Delete")
                    .on_activate(move || slot.lock().unwrap().take().expect("activated once")),
            ),
        );
        api.activate_confirm().unwrap();
        assert!(api.is_processing());

        api.warning(DialogContent::new("Unrelated").title("Heads up"));
        assert!(!api.is_processing());

        sender.resolve();
        frame(&ctx, &provider).unwrap();
        assert!(api.is_visible());
        assert_eq!(api.current_variant(), Some(DialogVariant::Warning));
    }

    /// An action that opens a follow-up dialog keeps the follow-up on screen
    #[test]
    fn test_action_opening_follow_up() {
        let (ctx, provider, api) = setup();
        let follow_up = api.clone();

        api.confirm(
            delete_prompt(),
            ConfirmControls::new(ConfirmButton::new("Delete").on_activate(move || {
                follow_up.success(DialogContent::new("Gone").title("Deleted"));
            })),
        );

        assert_eq!(api.activate_confirm().unwrap(), Activation::Superseded);
        frame(&ctx, &provider).unwrap();
        assert!(api.is_visible());
        assert_eq!(api.current_variant(), Some(DialogVariant::Success));
    }

    /// Closing keeps the options so the exit fade can still draw them
    #[test]
    fn test_close_preserves_options_across_frames() {
        let (ctx, provider, api) = setup();
        api.success(DialogContent::new("Done").title("Saved"));
        frame(&ctx, &provider).unwrap();

        api.close();
        api.close();
        frame(&ctx, &provider).unwrap();

        let snapshot = api.snapshot();
        assert!(!snapshot.is_visible);
        assert_eq!(snapshot.options.and_then(|o| o.content.title), Some("Saved".to_string()));
    }

    /// Scenario B: a runtime-backed action shows processing, then closes
    #[test]
    fn test_runner_backed_confirm() {
        let (ctx, provider, api) = setup();
        let runner = ActionRunner::new().unwrap().with_repaint(ctx.clone());

        api.confirm(
            delete_prompt(),
            ConfirmControls::new(ConfirmButton::new("Delete").on_activate(move || {
                runner.spawn(async {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Ok::<(), ActionError>(())
                })
            })),
        );

        assert_eq!(api.activate_confirm().unwrap(), Activation::Processing);
        assert!(api.is_processing());

        let deadline = Instant::now() + Duration::from_secs(5);
        while api.is_processing() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
            frame(&ctx, &provider).unwrap();
        }
        assert!(!api.is_processing());
        assert!(!api.is_visible());
    }

    /// Closures stored in dialog options are freed with the provider, even
    /// when they hold a runner bound to the context and a handle to the registry
    #[test]
    fn test_dropping_provider_frees_captured_state() {
        let (ctx, provider, api) = setup();
        let runner = ActionRunner::new().unwrap().with_repaint(ctx.clone());
        let marker = Arc::new(());
        let held = marker.clone();
        let follow_up = api.clone();

        api.confirm(
            delete_prompt(),
            ConfirmControls::new(ConfirmButton::new("Delete").on_activate(move || {
                let _ = Arc::strong_count(&held);
                follow_up.info("Deleted");
                runner.spawn(async { Ok::<(), ActionError>(()) })
            })),
        );
        frame(&ctx, &provider).unwrap();
        assert_eq!(Arc::strong_count(&marker), 2);

        drop(api);
        drop(provider);
        assert_eq!(Arc::strong_count(&marker), 1);
        assert!(matches!(
            DialogApi::try_from_ctx(&ctx),
            Err(DialogError::NoProvider)
        ));
    }

    /// Descendants reach the same registry through the accessor
    #[test]
    fn test_accessor_inside_frame() {
        let (ctx, provider, api) = setup();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.horizontal(|ui| {
                    use_dialog_api(ui.ctx()).warning("nested");
                });
            });
            provider.show(ctx).unwrap();
        });
        assert_eq!(api.current_variant(), Some(DialogVariant::Warning));
        assert!(api.is_visible());
    }
}
