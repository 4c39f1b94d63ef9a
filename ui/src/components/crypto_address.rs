//=============================================================================
// File: src/components/crypto_address.rs
//=============================================================================
use api::crypto_asset::CryptoAsset;
use dioxus::prelude::*;

use crate::components::pico::Badge;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Grid;
use crate::components::qr_code::QrCode;

/// Receiving address and deposit instructions for one crypto asset.
#[component]
pub fn CryptoAddressPanel(
    asset: CryptoAsset,
    /// Whether this asset's address was copied moments ago.
    copied: bool,
    /// Formatted minimum deposit, e.g. "€10".
    minimum: String,
    on_copy: EventHandler<CryptoAsset>,
) -> Element {
    let info = asset.info();
    let instructions = asset.deposit_instructions(&minimum);
    let steps = asset.how_to_steps();

    rsx! {
        section {
            style: "padding: 1rem; border: 1px solid var(--pico-muted-border-color); border-radius: var(--pico-border-radius);",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 1rem; margin-bottom: 1rem;",
                h4 { style: "margin: 0;", "{info.name} Deposit Address" }
                Badge { "{info.network}" }
            }

            label { "Wallet Address" }
            div {
                role: "group",
                input {
                    r#type: "text",
                    readonly: true,
                    value: "{info.address}",
                    style: "font-family: var(--pico-font-family-monospace); font-size: 0.85rem;",
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: !copied,
                    on_click: move |_| on_copy.call(asset),
                    if copied { "✓ Copied" } else { "Copy" }
                }
            }

            Grid {
                div {
                    small { style: "color: var(--pico-muted-color);", "Network:" }
                    p { strong { "{info.network}" } }
                }
                div {
                    small { style: "color: var(--pico-muted-color);", "Confirmations:" }
                    p { strong { "{info.confirmations}" } }
                }
            }

            QrCode {
                data: info.address.to_string(),
                caption: format!("Scan to send {}", info.name),
            }

            aside {
                style: "margin-top: 1rem; padding: 0.75rem; border: 1px solid var(--pico-mark-background-color); border-radius: var(--pico-border-radius);",
                p { style: "margin-bottom: 0.25rem;", strong { "⚠ Important Instructions:" } }
                ul {
                    style: "font-size: 0.85rem; margin-bottom: 0;",
                    for line in instructions {
                        li { "{line}" }
                    }
                }
            }

            h5 { style: "margin-top: 1rem;", "How to deposit:" }
            ol {
                style: "font-size: 0.9rem;",
                for step in steps {
                    li { "{step}" }
                }
            }
        }
    }
}
