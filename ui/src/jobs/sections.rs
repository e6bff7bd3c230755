use crate::components::JobStatusIcon;
use crate::core::format::{format_duration_between, format_timestamp};
use crate::core::job::Job;
use dioxus::prelude::*;

/// Metadata card summarising what was analyzed and when.
#[component]
pub fn JobInfoCard(job: ReadOnlySignal<Job>) -> Element {
    let job = job.read();
    let finished = job
        .finished_analysis_time
        .as_deref()
        .map(format_timestamp)
        .unwrap_or_else(|| "\u{2014}".to_string());
    let elapsed = job.finished_analysis_time.as_deref().and_then(|end| {
        format_duration_between(&job.received_request_time, end)
    });
    let playbook = job.playbook.as_deref().unwrap_or("None");

    rsx! {
        section { class: "job-info-card",
            dl { class: "job-info-card__grid",
                div { class: "job-info-card__item",
                    dt { "Name" }
                    dd { class: "job-info-card__name", "{job.observable_name}" }
                }
                div { class: "job-info-card__item",
                    dt { "Classification" }
                    dd { "{job.observable_classification}" }
                }
                div { class: "job-info-card__item",
                    dt { "TLP" }
                    dd {
                        span { class: "job-info-card__tlp", "{job.tlp}" }
                    }
                }
                div { class: "job-info-card__item",
                    dt { "User" }
                    dd { "{job.user}" }
                }
                div { class: "job-info-card__item",
                    dt { "Playbook" }
                    dd { "{playbook}" }
                }
                div { class: "job-info-card__item",
                    dt { "Status" }
                    dd {
                        JobStatusIcon { status: job.status }
                        span { class: "job-info-card__status-label", {job.status.label()} }
                    }
                }
                div { class: "job-info-card__item",
                    dt { "Received" }
                    dd { {format_timestamp(&job.received_request_time)} }
                }
                div { class: "job-info-card__item",
                    dt { "Finished" }
                    dd { "{finished}" }
                }
                if let Some(elapsed) = elapsed {
                    div { class: "job-info-card__item",
                        dt { "Elapsed" }
                        dd { "{elapsed}" }
                    }
                }
            }
        }
    }
}

/// Banner shown while the job is still moving through its pipeline.
#[component]
pub fn JobIsRunningAlert() -> Element {
    rsx! {
        div { class: "alert alert--running", role: "status",
            span { class: "alert__spinner", aria_hidden: "true" }
            span {
                "This job is still running. Reports appear below as each plugin finishes."
            }
        }
    }
}

/// Toolbar above the report area. `refetch` asks the owner to pull a fresh
/// copy of the job.
#[component]
pub fn JobActionsBar(refetch: EventHandler<()>) -> Element {
    rsx! {
        div { class: "job-actions",
            button {
                class: "button button--ghost",
                onclick: move |_| refetch.call(()),
                "Refresh"
            }
            span { class: "job-actions__hint",
                "Refreshing re-reads the job without touching your tab selection."
            }
        }
    }
}
