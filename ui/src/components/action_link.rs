use dioxus::prelude::*;

use crate::Screen;

#[derive(Props, Clone, PartialEq)]
pub struct ActionLinkProps {
    /// Screen to switch to on click.
    pub to: Screen,

    /// Runs before navigating.
    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,

    pub children: Element,
}

/// An `<a>` that switches the active screen instead of loading a page.
#[component]
pub fn ActionLink(props: ActionLinkProps) -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();
    let href = props.to.path();

    rsx! {
        a {
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
                active_screen.set(props.to.clone());
            },
            {props.children}
        }
    }
}
