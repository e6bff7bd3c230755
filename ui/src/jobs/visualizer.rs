use crate::components::ReportStatusIcon;
use crate::core::job::Job;
use dioxus::prelude::*;

/// Rendered pane for one visualizer report, looked up by name.
///
/// A name with no matching report can happen transiently right after the
/// visualizer set changes; the pane degrades to a placeholder rather than
/// panicking.
#[component]
pub fn VisualizerPanel(job: ReadOnlySignal<Job>, name: String) -> Element {
    let job = job.read();
    let Some(report) = job.visualizer_reports.iter().find(|r| r.name == name) else {
        return rsx! {
            div { class: "visualizer-pane visualizer-pane--missing",
                p { "No visualizer report named \"{name}\" on this job." }
            }
        };
    };

    let payload = match serde_json::to_string_pretty(&report.report) {
        Ok(text) => text,
        Err(err) => format!("Couldn't render payload: {err}"),
    };

    rsx! {
        div { class: "visualizer-pane",
            header { class: "visualizer-pane__header",
                h2 { "{report.name}" }
                if !report.status.is_success() {
                    ReportStatusIcon { status: report.status }
                }
            }
            if !report.errors.is_empty() {
                ul { class: "visualizer-pane__errors",
                    for (idx, err) in report.errors.iter().enumerate() {
                        li { key: "{idx}", "{err}" }
                    }
                }
            }
            pre { class: "visualizer-pane__payload",
                code { "{payload}" }
            }
        }
    }
}
