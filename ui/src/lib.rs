// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use api::notification::ToastQueue;
use api::prefs::user_prefs::UserPrefs;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use components::toast::ToastStack;
use screens::dashboard::DashboardScreen;
use screens::deposit::DepositScreen;
use screens::history::HistoryScreen;
use screens::login::LoginScreen;

/// Enum to represent the different screens in our application.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Screen {
    Login,
    Dashboard,
    #[default]
    Deposit,
    History,
}

impl Screen {
    pub fn path(&self) -> &'static str {
        match self {
            Screen::Login => "/login",
            Screen::Dashboard => "/dashboard",
            Screen::Deposit => "/dashboard/deposit",
            Screen::History => "/dashboard/history",
        }
    }

    /// Trailing slashes are ignored. Unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        [
            Screen::Login,
            Screen::Dashboard,
            Screen::Deposit,
            Screen::History,
        ]
        .into_iter()
        .find(|screen| screen.path() == path)
    }

    /// Helper to get the display name for each screen.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Login => "Sign In",
            Screen::Dashboard => "Dashboard",
            Screen::Deposit => "Deposit",
            Screen::History => "History",
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    .app-main-container header.app-header {
        padding: 0.5rem 0;
        margin-bottom: 1rem;
        border-bottom: 1px solid var(--pico-muted-border-color);
    }

    .app-main-container .content {
        max-width: 48rem;
        margin: 0 auto;
    }

    dialog article {
        max-width: 32rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let app_state = use_hook(|| {
        let prefs = UserPrefs::from_env();
        dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
        let store = compat::session_store(&prefs);
        AppState::new(prefs, store)
    });

    rsx! {
        LoadedApp { app_state }
    }
}

/// Provides the shared state and renders the active screen.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let user_signal = use_signal(|| None);
    let toasts_signal = use_signal(ToastQueue::default);

    use_context_provider(|| AppStateMut {
        user: user_signal,
        toasts: toasts_signal,
    });

    let active_screen = use_signal(|| {
        compat::current_path()
            .and_then(|path| Screen::from_path(&path))
            .unwrap_or_default()
    });
    use_context_provider(|| active_screen);

    let signed_in = user_signal.read().is_some();

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    class: "app-header",
                    nav {
                        ul {
                            li {
                                strong { "Funding" }
                            }
                        }
                        if signed_in {
                            ul {
                                li { small { "{active_screen().name()}" } }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Login => rsx! {
                            LoginScreen {}
                        },
                        Screen::Dashboard => rsx! {
                            DashboardScreen {}
                        },
                        Screen::Deposit => rsx! {
                            DepositScreen {}
                        },
                        Screen::History => rsx! {
                            HistoryScreen {}
                        },
                    }
                }
            }
            ToastStack {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_paths() {
        assert_eq!(Screen::Login.path(), "/login");
        assert_eq!(Screen::Dashboard.path(), "/dashboard");
        assert_eq!(Screen::Deposit.path(), "/dashboard/deposit");
        assert_eq!(Screen::History.path(), "/dashboard/history");
    }

    #[test]
    fn screen_from_path() {
        assert_eq!(Screen::from_path("/login"), Some(Screen::Login));
        assert_eq!(Screen::from_path("/dashboard/"), Some(Screen::Dashboard));
        assert_eq!(Screen::from_path("/dashboard/history"), Some(Screen::History));
        assert_eq!(Screen::from_path("/nowhere"), None);
        assert_eq!(Screen::default(), Screen::Deposit);
    }
}
