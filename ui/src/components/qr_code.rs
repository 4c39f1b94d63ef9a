//=============================================================================
// File: src/components/qr_code.rs
//=============================================================================
use dioxus::prelude::*;
use qrcode::render::svg;
use qrcode::EcLevel;
use qrcode::QrCode;

#[derive(Props, Clone, PartialEq)]
pub struct QrCodeProps {
    pub data: String,
    #[props(optional)]
    pub caption: Option<String>,
}

/// Renders `data` as an SVG QR code.
///
/// The data is encoded verbatim. Base58 wallet addresses are case
/// sensitive, so it must not be upper-cased for the alphanumeric mode.
#[allow(non_snake_case)]
pub fn QrCode(props: QrCodeProps) -> Element {
    match QrCode::with_error_correction_level(props.data.as_bytes(), EcLevel::M) {
        Ok(code) => {
            let image = code
                .render::<svg::Color>()
                .min_dimensions(160, 160)
                .build();

            rsx! {
                figure {
                    style: "margin: 0; display: flex; flex-direction: column; align-items: center;",
                    div {
                        title: "{props.data}",
                        dangerous_inner_html: "{image}"
                    }
                    if let Some(caption_text) = &props.caption {
                        figcaption {
                            style: "text-align: center; font-size: 14px; margin-top: 8px;",
                            "{caption_text}"
                        }
                    }
                }
            }
        }
        Err(e) => rsx! {
            p {
                style: "color: var(--pico-del-color); font-size: 14px;",
                "Error generating QR code: {e}"
            }
        },
    }
}
