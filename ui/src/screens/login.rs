use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::TitledCard;
use crate::hooks::use_toaster::use_toaster;
use crate::Screen;

/// Mock sign-in. Only the email is asked for.
#[component]
pub fn LoginScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();
    let mut toaster = use_toaster();
    let mut email = use_signal(String::new);

    rsx! {
        TitledCard {
            title: "Sign In".to_string(),
            subtitle: "Enter your email to continue".to_string(),
            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    match app_state.session.sign_in(&email.peek()) {
                        Ok(user) => {
                            app_state_mut.user.set(Some(user));
                            active_screen.set(Screen::Dashboard);
                        }
                        Err(e) => {
                            dioxus_logger::tracing::warn!("sign in failed: {:#}", e);
                            toaster.show(api::notification::Notification::error(
                                "Sign In Failed",
                                "Please enter your email address",
                            ));
                        }
                    }
                },
                label {
                    "Email"
                    input {
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                Button { submit: true, disabled: email.read().trim().is_empty(), "Sign In" }
            }
        }
    }
}
