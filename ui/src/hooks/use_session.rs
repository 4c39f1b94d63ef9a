use api::session::User;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::Screen;

/// Loads the signed-in user when the calling screen mounts.
///
/// When no valid session is stored the app navigates to the login screen and
/// the returned signal stays `None`, so callers render nothing but a
/// placeholder.
pub fn use_session_user() -> Signal<Option<User>> {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let active_screen = use_context::<Signal<Screen>>();

    use_effect(move || sync_session_user(&app_state, app_state_mut, active_screen));

    app_state_mut.user
}

/// Re-reads the stored user into `AppStateMut::user`, redirecting to login
/// when the session is gone.
pub fn sync_session_user(
    app_state: &AppState,
    mut app_state_mut: AppStateMut,
    mut active_screen: Signal<Screen>,
) {
    match app_state.session.current_user() {
        Some(user) => app_state_mut.user.set(Some(user)),
        None => {
            dioxus_logger::tracing::info!(
                "no session, redirecting to {}",
                Screen::Login.path()
            );
            app_state_mut.user.set(None);
            active_screen.set(Screen::Login);
        }
    }
}
