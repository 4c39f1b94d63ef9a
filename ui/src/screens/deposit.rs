//=============================================================================
// File: src/screens/deposit.rs
//=============================================================================
use std::time::Duration;

use api::copy_marker::CopyMarker;
use api::crypto_asset::CryptoAsset;
use api::deposit::min_deposit_label;
use api::deposit::DepositWorkflow;
use api::deposit::PaymentMethod;
use api::notification::Notification;
use api::recorder::DepositRecorder;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::compat;
use crate::components::action_link::ActionLink;
use crate::components::crypto_address::CryptoAddressPanel;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::TitledCard;
use crate::components::success_dialog::SuccessDialog;
use crate::hooks::use_session::sync_session_user;
use crate::hooks::use_session::use_session_user;
use crate::hooks::use_toaster::use_toaster;
use crate::Screen;

#[component]
pub fn DepositScreen() -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();
    let mut toaster = use_toaster();
    let user = use_session_user();

    let currency = app_state.prefs.currency();
    let copy_feedback = app_state.prefs.copy_feedback();
    let mut workflow = use_signal(|| DepositWorkflow::new(currency));
    let mut copy_marker = use_signal(CopyMarker::default);

    let Some(current_user) = user() else {
        return rsx! {
            Card {
                p { "Loading..." }
                progress {}
            }
        };
    };

    let minimum = min_deposit_label(currency);
    let balance = current_user
        .display_balance(currency)
        .to_grouped_string_with_symbol();

    let on_submit = {
        let app_state = app_state.clone();
        move |evt: FormEvent| {
            evt.prevent_default();

            let Some(email) = user.peek().as_ref().map(|u| u.email.clone()) else {
                return;
            };
            let request = match workflow.write().begin() {
                Ok(request) => request,
                Err(e) => {
                    if let Some(notification) = e.notification() {
                        toaster.show(notification);
                    }
                    return;
                }
            };

            let app_state = app_state.clone();
            spawn(async move {
                // let the "Processing..." state render before recording
                compat::sleep(Duration::ZERO).await;

                let outcome = app_state.recorder.process_deposit(
                    &email,
                    request.amount,
                    request.method_label(),
                );
                let result = workflow.write().finish(&request, outcome);
                match result {
                    Ok(_) => {
                        toaster.show(Notification::deposit_submitted());
                        sync_session_user(&app_state, app_state_mut, active_screen);
                    }
                    Err(e) => {
                        if let Some(notification) = e.notification() {
                            toaster.show(notification);
                        }
                    }
                }
            });
        }
    };

    let on_copy = move |asset: CryptoAsset| {
        spawn(async move {
            if compat::clipboard_set(asset.address().to_string()).await {
                let ticket = copy_marker.write().mark(asset);
                toaster.show(Notification::address_copied(asset));
                compat::sleep(copy_feedback).await;
                copy_marker.write().clear(ticket);
            } else {
                toaster.show(Notification::copy_failed());
            }
        });
    };

    let state = workflow.read();
    let selected_method = state.form.method;
    let selected_asset = state.form.crypto_asset;
    let shown_asset = state.form.selected_asset();
    let amount = state.form.amount.clone();
    let is_loading = state.is_loading();
    let can_submit = state.can_submit();
    let dialog_open = state.is_dialog_open();
    let receipt = state.receipt().cloned();
    drop(state);

    rsx! {
        div {
            header {
                style: "display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem;",
                ActionLink { to: Screen::Dashboard, "← Back to Dashboard" }
                h2 { style: "margin: 0;", "Deposit Funds" }
            }

            TitledCard {
                title: "Current Balance".to_string(),
                p { style: "font-size: 1.75rem; margin: 0;", strong { "{balance}" } }
            }

            TitledCard {
                title: "Make a Deposit".to_string(),
                subtitle: "Choose how you want to fund your account".to_string(),

                form {
                    onsubmit: on_submit,

                    label {
                        "Amount ({currency.code()})"
                        input {
                            r#type: "number",
                            min: "10",
                            step: "0.01",
                            placeholder: "Enter amount (minimum {minimum})",
                            value: "{amount}",
                            disabled: is_loading,
                            oninput: move |evt| workflow.write().form.amount = evt.value(),
                        }
                        small { "Minimum deposit: {minimum}" }
                    }

                    label {
                        "Payment Method"
                        select {
                            disabled: is_loading,
                            onchange: move |evt| {
                                workflow.write().form.method = evt.value().parse::<PaymentMethod>().ok();
                            },
                            option {
                                value: "",
                                disabled: true,
                                selected: selected_method.is_none(),
                                "Select payment method"
                            }
                            for method in PaymentMethod::all() {
                                option {
                                    value: method.code(),
                                    selected: selected_method == Some(method),
                                    "{method.label()}"
                                }
                            }
                        }
                    }

                    if selected_method == Some(PaymentMethod::Cryptocurrency) {
                        label {
                            "Select Cryptocurrency"
                            select {
                                disabled: is_loading,
                                onchange: move |evt| {
                                    workflow.write().form.crypto_asset = evt.value().parse::<CryptoAsset>().ok();
                                },
                                option {
                                    value: "",
                                    disabled: true,
                                    selected: selected_asset.is_none(),
                                    "Choose cryptocurrency"
                                }
                                for asset in CryptoAsset::all() {
                                    option {
                                        value: asset.code(),
                                        selected: selected_asset == Some(asset),
                                        "{asset.name()}"
                                    }
                                }
                            }
                        }
                    }

                    if let Some(asset) = shown_asset {
                        CryptoAddressPanel {
                            asset,
                            copied: copy_marker.read().is_copied(asset),
                            minimum: minimum.clone(),
                            on_copy,
                        }
                    }

                    Button {
                        submit: true,
                        disabled: !can_submit,
                        style: "width: 100%; margin-top: 1rem;".to_string(),
                        if is_loading { "Processing..." } else { "Submit Deposit Request" }
                    }
                }
            }

            SuccessDialog {
                open: dialog_open,
                receipt,
                on_close: move |_| workflow.write().dismiss(),
                on_dashboard: move |_| {
                    workflow.write().dismiss();
                    active_screen.set(Screen::Dashboard);
                },
                on_history: move |_| {
                    workflow.write().dismiss();
                    active_screen.set(Screen::History);
                },
            }
        }
    }
}
