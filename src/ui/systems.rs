// src/ui/systems.rs
use bevy::prelude::*;

use crate::catalog::{
    events::{CatalogModified, CatalogOperationFeedback, ImageImported, StoreFailureNotice},
    CatalogStore,
};
use crate::settings::{io::save_settings_to_file, AppSettings};
use crate::ui::{elements::editor::state::EditorWindowState, thumbnails::ThumbnailCache, UiFeedbackState};

/// Shows the newest message of the frame, unless the frame carried an
/// error: then the first error stays on screen.
pub fn handle_ui_feedback(
    mut feedback_events: EventReader<CatalogOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut latest = None;
    let mut first_error = None;
    for event in feedback_events.read() {
        if event.is_error && first_error.is_none() {
            first_error = Some(event.message.clone());
        }
        latest = Some((event.message.clone(), event.is_error));
    }
    let shown = first_error.map(|msg| (msg, true)).or(latest);
    if let Some((msg, is_error)) = shown {
        ui_feedback_state.last_message = msg;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}

/// Load and save failures block on a native dialog, then the app carries on.
pub fn show_store_failure_dialogs(mut notices: EventReader<StoreFailureNotice>) {
    for notice in notices.read() {
        error!("{}: {}", notice.title, notice.message);
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(&notice.title)
            .set_description(&notice.message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

pub fn apply_imported_images(
    mut imported: EventReader<ImageImported>,
    mut state: ResMut<EditorWindowState>,
) {
    for ev in imported.read() {
        debug!("Form image set to '{}'.", ev.relative_path);
        state.apply_imported_image(&ev.relative_path);
    }
}

pub fn refresh_thumbnails_on_change(
    mut modified: EventReader<CatalogModified>,
    mut imported: EventReader<ImageImported>,
    mut thumbnails: ResMut<ThumbnailCache>,
) {
    let changed = modified.read().count() + imported.read().count();
    if changed > 0 {
        thumbnails.forget_missing();
    }
}

pub fn restore_last_scope(
    settings: Res<AppSettings>,
    store: Res<CatalogStore>,
    mut state: ResMut<EditorWindowState>,
) {
    let Some(scope) = settings.last_scope.clone() else {
        return;
    };
    if store.document().contains_scope(&scope) {
        info!("Restoring last selection {:?}.", scope);
        state.select_scope(scope);
    }
}

/// Persists the selection whenever it changes.
pub fn remember_last_scope(
    state: Res<EditorWindowState>,
    mut settings: ResMut<AppSettings>,
) {
    if !state.is_changed() || settings.last_scope == state.selection {
        return;
    }
    settings.last_scope = state.selection.clone();
    if let Err(e) = save_settings_to_file(&*settings) {
        warn!("Could not save app settings: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback_app() -> App {
        let mut app = App::new();
        app.init_resource::<UiFeedbackState>()
            .add_event::<CatalogOperationFeedback>()
            .add_systems(Update, handle_ui_feedback);
        app
    }

    fn send(app: &mut App, message: &str, is_error: bool) {
        app.world_mut().send_event(CatalogOperationFeedback {
            message: message.to_string(),
            is_error,
        });
    }

    #[test]
    fn first_error_of_a_frame_stays_visible() {
        let mut app = feedback_app();
        send(&mut app, "Loaded 2 categories and 0 portfolio items.", false);
        send(&mut app, "Save failed: disk full", true);
        send(&mut app, "Other failure", true);
        send(&mut app, "Item deleted.", false);
        app.update();

        let state = app.world().resource::<UiFeedbackState>();
        assert_eq!(state.last_message, "Save failed: disk full");
        assert!(state.is_error);

        // Every event was consumed; a quiet frame leaves the error in place.
        app.update();
        let state = app.world().resource::<UiFeedbackState>();
        assert_eq!(state.last_message, "Save failed: disk full");
    }

    #[test]
    fn newest_message_wins_without_errors() {
        let mut app = feedback_app();
        send(&mut app, "Image selection cancelled.", false);
        send(&mut app, "'Candle' added.", false);
        app.update();

        let state = app.world().resource::<UiFeedbackState>();
        assert_eq!(state.last_message, "'Candle' added.");
        assert!(!state.is_error);
    }
}
