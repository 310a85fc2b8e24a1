use dioxus::prelude::*;
use tracing::debug;

use crate::context::AppContext;
use crate::views::{AdminPanel, ContentModal, MediaLibrary, ProgressPanel};
use crate::vm::{DashboardIntent, DashboardOutcome, Region};

/// Root view: header with the admin switch, both regions, and the media modal.
#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_signal(|| ctx.dashboard_vm());

    let on_intent = use_callback(move |intent: DashboardIntent| {
        if let DashboardOutcome::Rejected(err) = vm.write().apply(intent) {
            debug!(%err, "daily input rejected");
        }
    });

    let state = vm.read();
    let admin_mode = state.admin_mode();
    let user_class = state.region_class(Region::User);
    let admin_class = state.region_class(Region::Admin);
    let target_label = state.target_label().to_string();
    let slider_max = state.slider_max();
    let daily_input = state.daily_input().to_string();
    let notice = state.notice().map(str::to_owned);
    let trend = state.charts().trend().cloned();
    let goal = state.charts().goal().cloned();
    let modal = state.modal_view();
    drop(state);

    rsx! {
        div { class: "dashboard",
            header { class: "topbar",
                div { class: "brand",
                    h1 { "MAESTRO" }
                    span { class: "brand-sub", "7th Business Unit" }
                }
                label { class: "admin-toggle",
                    input {
                        id: "admin-toggle",
                        r#type: "checkbox",
                        checked: admin_mode,
                        onchange: move |evt: FormEvent| {
                            on_intent.call(DashboardIntent::ToggleAdmin(evt.checked()));
                        },
                    }
                    span { "Admin View" }
                }
            }

            section { id: "user-dashboard", class: "dashboard-region {user_class}",
                ProgressPanel {
                    target_label,
                    slider_max,
                    daily_input,
                    notice,
                    trend,
                    goal,
                    on_intent,
                }
                MediaLibrary { on_intent }
            }

            section { id: "admin-dashboard", class: "dashboard-region {admin_class}",
                AdminPanel {}
            }

            ContentModal { modal, on_intent }
        }
    }
}
