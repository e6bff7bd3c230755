use dioxus::prelude::*;
use tracing::debug;

use crate::core::job::Job;
use crate::core::route::ReportSection;
use crate::core::samples::job_at_step;
use crate::core::timing::sleep_ms;
use crate::jobs::JobOverview;

/// How often the demo feed advances a still-running job.
const POLL_INTERVAL_MS: u64 = 1_500;

/// `/jobs/{id}` with no section yet. Renders the same workspace with an
/// empty sub-section so the route correction picks the first tab.
#[component]
pub fn JobLanding(id: ReadOnlySignal<u64>) -> Element {
    rsx! {
        JobResult {
            id,
            section: ReportSection::Visualizer,
            sub_section: String::new(),
        }
    }
}

/// Hosts one job's results page and feeds it with data.
///
/// The job comes from the built-in sample scripts: a step counter stands in
/// for the backend poll, advancing every [`POLL_INTERVAL_MS`] until the job
/// reaches a final status. Route changes to a different id restart the walk.
#[component]
pub fn JobResult(id: ReadOnlySignal<u64>, section: ReportSection, sub_section: String) -> Element {
    let mut step = use_signal(|| 0usize);

    let _poller = use_resource(move || async move {
        let job_id = id();
        if *step.peek() != 0 {
            step.set(0);
        }
        loop {
            sleep_ms(POLL_INTERVAL_MS).await;
            let next = *step.peek() + 1;
            match job_at_step(job_id, next) {
                Some(job) => {
                    step.set(next);
                    if job.status.is_final() {
                        break;
                    }
                }
                None => break,
            }
        }
    });

    let job: Memo<Option<Job>> = use_memo(move || job_at_step(id(), step()));
    let job_id = id();

    match job() {
        Some(job_now) => {
            let is_running_job = !job_now.status.is_final();
            rsx! {
                section { class: "page page-job",
                    JobOverview {
                        key: "{job_id}",
                        job: job_now,
                        is_running_job,
                        section,
                        sub_section,
                        refetch: move |_| {
                            let current = *step.peek();
                            let still_running = job_at_step(*id.peek(), current)
                                .map(|job| !job.status.is_final())
                                .unwrap_or(false);
                            if still_running {
                                debug!(job_id = *id.peek(), step = current + 1, "refetch advanced the demo feed");
                                step.set(current + 1);
                            }
                        },
                    }
                }
            }
        }
        None => rsx! {
            section { class: "page page-job",
                div { class: "alert alert--missing",
                    p { "No job with id #{job_id} exists here." }
                    p { "Pick one of the sample jobs from the home page." }
                }
                Link { class: "button button--primary", to: "/", "Back to home" }
            }
        },
    }
}
