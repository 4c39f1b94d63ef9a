use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::action_link::ActionLink;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::TitledCard;
use crate::hooks::use_session::use_session_user;
use crate::Screen;

#[component]
pub fn DashboardScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();
    let user = use_session_user();

    let Some(current_user) = user() else {
        return rsx! {
            Card { p { "Loading..." } progress {} }
        };
    };
    let balance = current_user
        .display_balance(app_state.prefs.currency())
        .to_grouped_string_with_symbol();

    rsx! {
        div {
            header {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem;",
                div {
                    h2 { style: "margin: 0;", "Dashboard" }
                    small { "{current_user.email}" }
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| {
                        if let Err(e) = app_state.session.sign_out() {
                            dioxus_logger::tracing::error!("sign out failed: {:#}", e);
                        }
                        app_state_mut.user.set(None);
                        active_screen.set(Screen::Login);
                    },
                    "Sign Out"
                }
            }
            TitledCard {
                title: "Current Balance".to_string(),
                p { style: "font-size: 1.75rem; margin: 0;", strong { "{balance}" } }
            }
            Grid {
                Card {
                    h4 { "Add Funds" }
                    p { "Deposit by card, bank transfer or cryptocurrency." }
                    ActionLink { to: Screen::Deposit, "Deposit Funds →" }
                }
                Card {
                    h4 { "Deposits" }
                    p { "Review the deposits you have requested." }
                    ActionLink { to: Screen::History, "View History →" }
                }
            }
        }
    }
}
