//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

/// A card with a heading and optional muted subtitle.
#[component]
pub fn TitledCard(title: String, subtitle: Option<String>, children: Element) -> Element {
    rsx! {
        article {
            header {
                h3 { style: "margin-bottom: 0;", "{title}" }
                if let Some(subtitle) = subtitle {
                    small { style: "color: var(--pico-muted-color);", "{subtitle}" }
                }
            }
            {children}
        }
    }
}

/// An outlined, pill-shaped label.
#[component]
pub fn Badge(children: Element) -> Element {
    rsx! {
        span {
            style: "border: 1px solid var(--pico-primary); color: var(--pico-primary); border-radius: 1rem; padding: 0.1rem 0.6rem; font-size: 0.8rem; white-space: nowrap;",
            {children}
        }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

impl ButtonType {
    fn to_class(self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
            ButtonType::Contrast => "contrast",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// Renders a submit button for use inside a `<form>`.
    #[props(default = false)]
    submit: bool,
    #[props(default)]
    style: Option<String>,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (props.outline, props.button_type.to_class()) {
        (true, "") => "outline".to_string(),
        (true, class) => format!("{} outline", class),
        (false, class) => class.to_string(),
    };
    rsx! {
        button {
            class: "{class_str}",
            r#type: if props.submit { "submit" } else { "button" },
            style: props.style.clone().unwrap_or_default(),
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

//=============================================================================
// Dialogs
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    open: bool,
    title: String,
    on_close: EventHandler<()>,
    children: Element,
}

/// A titled dialog that closes on the ✕ link or the Escape key.
pub fn Modal(props: ModalProps) -> Element {
    rsx! {
        if props.open {
            dialog {
                open: true,
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        props.on_close.call(());
                    }
                },
                article {
                    header {
                        a {
                            href: "#",
                            "aria-label": "Close",
                            class: "close",
                            onclick: move |evt| {
                                evt.prevent_default();
                                props.on_close.call(());
                            }
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                    }
                    {props.children}
                }
            }
        }
    }
}
