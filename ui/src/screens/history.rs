//=============================================================================
// File: src/screens/history.rs
//=============================================================================
use api::recorder::deposit_total;
use api::recorder::DepositRecord;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::action_link::ActionLink;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Card;
use crate::hooks::use_session::use_session_user;
use crate::Screen;

#[component]
fn HistoryRow(record: DepositRecord) -> Element {
    let date = record.created_at.format("%Y-%m-%d");

    rsx! {
        tr {
            td {
                title: "{record.created_at.to_rfc3339()}",
                "{date}"
            }
            td { code { "{record.id}" } }
            td { "{record.method}" }
            td { "{record.status.label()}" }
            td { style: "text-align: right;", "{record.amount.to_grouped_string_with_symbol()}" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn HistoryScreen() -> Element {
    let app_state = use_context::<AppState>();
    let user = use_session_user();

    let Some(current_user) = user() else {
        return rsx! {
            Card { p { "Loading..." } progress {} }
        };
    };

    let records = app_state.recorder.history(&current_user.email);

    rsx! {
        div {
            header {
                style: "display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem;",
                ActionLink { to: Screen::Dashboard, "← Back to Dashboard" }
                h2 { style: "margin: 0;", "Deposit History" }
            }
            match records {
                Err(e) => rsx! {
                    Card {
                        h3 { "Error" }
                        p { "Failed to load history: {e}" }
                    }
                },
                Ok(records) if records.is_empty() => rsx! {
                    EmptyState {
                        title: "No deposits yet".to_string(),
                        description: "Deposits you submit will show up here.".to_string(),
                        primary_action: rsx! {
                            ActionLink { to: Screen::Deposit, "Make a Deposit" }
                        },
                    }
                },
                Ok(records) => {
                    let total = deposit_total(&records)
                        .map(|t| t.to_grouped_string_with_symbol())
                        .unwrap_or_else(|| "—".to_string());
                    rsx! {
                        Card {
                            table {
                                thead { tr {
                                    th { "Date" }
                                    th { "Transaction" }
                                    th { "Method" }
                                    th { "Status" }
                                    th { style: "text-align: right;", "Amount" }
                                }}
                                tbody {
                                    for record in records {
                                        HistoryRow { key: "{record.id}", record }
                                    }
                                }
                                tfoot { tr {
                                    th { colspan: "4", "Total" }
                                    th { style: "text-align: right;", "{total}" }
                                }}
                            }
                        }
                    }
                }
            }
        }
    }
}
