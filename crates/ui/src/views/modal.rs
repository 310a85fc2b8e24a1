use dioxus::prelude::*;

use crate::vm::{ClickTarget, DashboardIntent, HIDDEN_CLASS, ModalVm};

/// Media preview overlay. Clicking the dimmed backdrop closes it.
#[component]
pub fn ContentModal(
    #[props(!optional)] modal: Option<ModalVm>,
    on_intent: Callback<DashboardIntent>,
) -> Element {
    let visibility = if modal.is_some() { "" } else { HIDDEN_CLASS };

    rsx! {
        div {
            id: "content-modal",
            class: "modal-overlay {visibility}",
            onclick: move |_| on_intent.call(DashboardIntent::OverlayClick(ClickTarget::Backdrop)),
            div {
                class: "modal-content",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_intent.call(DashboardIntent::OverlayClick(ClickTarget::Content));
                },
                button {
                    class: "modal-close",
                    r#type: "button",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_intent.call(DashboardIntent::CloseModal);
                    },
                    "Close"
                }
                div { id: "modal-body",
                    if let Some(modal) = modal {
                        h2 { class: "modal-title", "{modal.title}" }
                        div { class: "media-placeholder",
                            p { "{modal.placeholder}" }
                            p { "{modal.note}" }
                        }
                    }
                }
            }
        }
    }
}
