use dioxus::prelude::*;

use crate::charts::{DoughnutChart, LineChart};
use crate::views::{GoalChart, TrendChart};
use crate::vm::DashboardIntent;

#[component]
pub fn ProgressPanel(
    target_label: String,
    slider_max: u32,
    daily_input: String,
    #[props(!optional)] notice: Option<String>,
    #[props(!optional)] trend: Option<LineChart>,
    #[props(!optional)] goal: Option<DoughnutChart>,
    on_intent: Callback<DashboardIntent>,
) -> Element {
    rsx! {
        div { class: "panel-grid",
            section { class: "card target-card",
                h2 { "Monthly Target" }
                div { class: "slider-row",
                    input {
                        id: "target-ap-slider",
                        r#type: "range",
                        min: "0",
                        max: "{slider_max}",
                        step: "10",
                        value: "{target_label}",
                        oninput: move |evt: FormEvent| {
                            on_intent.call(DashboardIntent::SliderInput(evt.value()));
                        },
                    }
                    span { class: "target-readout",
                        span { id: "target-ap-value", "{target_label}" }
                        " AP"
                    }
                }
            }

            section { class: "card daily-card",
                h2 { "Today's AP" }
                div { class: "daily-row",
                    input {
                        id: "today-ap-input",
                        r#type: "text",
                        placeholder: "Enter today's AP",
                        value: "{daily_input}",
                        oninput: move |evt: FormEvent| {
                            on_intent.call(DashboardIntent::DailyInputChanged(evt.value()));
                        },
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(DashboardIntent::SubmitDaily),
                        "Update"
                    }
                }
                if let Some(notice) = notice {
                    div { class: "notice",
                        span { "{notice}" }
                        button {
                            class: "notice-dismiss",
                            r#type: "button",
                            onclick: move |_| on_intent.call(DashboardIntent::DismissNotice),
                            "Dismiss"
                        }
                    }
                }
            }
        }

        div { class: "chart-grid",
            if let Some(chart) = trend {
                TrendChart { chart }
            }
            if let Some(chart) = goal {
                GoalChart { chart }
            }
        }
    }
}
