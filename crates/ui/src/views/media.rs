use dioxus::prelude::*;

use maestro_core::model::{MediaItem, MediaKind};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::DashboardIntent;

fn badge(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Video => "Video",
        MediaKind::Document => "PDF",
    }
}

#[component]
pub fn MediaLibrary(on_intent: Callback<DashboardIntent>) -> Element {
    let ctx = use_context::<AppContext>();
    let media = ctx.media();

    let resource = use_resource(move || {
        let media = media.clone();
        async move {
            media
                .list_items()
                .await
                .map_err(|_| ViewError::MediaUnavailable)
        }
    });

    rsx! {
        section { class: "card media-card",
            h2 { "Learning Library" }
            match view_state_from_resource(resource, ViewError::MediaUnavailable) {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(items) => rsx! {
                    ul { class: "media-list",
                        for item in items {
                            MediaButton { item, on_intent }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn MediaButton(item: MediaItem, on_intent: Callback<DashboardIntent>) -> Element {
    let kind = item.kind;
    let label = badge(kind);
    let tag = kind.tag();
    let title = item.title.clone();

    rsx! {
        li { class: "media-item media-{tag}",
            button {
                class: "btn media-open",
                r#type: "button",
                onclick: move |_| {
                    on_intent.call(DashboardIntent::OpenModal {
                        kind,
                        title: title.clone(),
                    });
                },
                span { class: "media-badge", "{label}" }
                span { class: "media-title", "{item.title}" }
            }
        }
    }
}
