use api::deposit::DepositReceipt;
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Modal;

/// Confirmation shown after a deposit has been recorded.
#[component]
pub fn SuccessDialog(
    open: bool,
    receipt: Option<DepositReceipt>,
    on_close: EventHandler<()>,
    on_dashboard: EventHandler<()>,
    on_history: EventHandler<()>,
) -> Element {
    let Some(receipt) = receipt else {
        return rsx! {};
    };

    rsx! {
        Modal {
            open,
            title: "Deposit Submitted Successfully!".to_string(),
            on_close: move |_| on_close.call(()),
            p { "Your deposit request has been submitted and is being processed." }
            div {
                style: "padding: 1rem; border: 1px solid var(--pico-ins-color); border-radius: var(--pico-border-radius); margin-bottom: 1rem;",
                p { strong { "Transaction ID: " } code { "{receipt.transaction_id}" } }
                p { strong { "Amount: " } "{receipt.display_amount()}" }
                p { style: "margin-bottom: 0;", strong { "Method: " } "{receipt.method_label}" }
            }
            footer {
                style: "display: flex; gap: 0.5rem;",
                Button {
                    style: "flex: 1;".to_string(),
                    on_click: move |_| on_dashboard.call(()),
                    "Back to Dashboard"
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    style: "flex: 1;".to_string(),
                    on_click: move |_| on_history.call(()),
                    "View History"
                }
            }
        }
    }
}
