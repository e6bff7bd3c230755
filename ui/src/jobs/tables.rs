use crate::components::ReportStatusIcon;
use crate::core::format::format_process_time;
use crate::core::job::{Job, PluginKind};
use dioxus::prelude::*;

/// Raw report table for one plugin category.
///
/// Every requested plugin eventually shows up as a row; until its report
/// arrives the table explains what is still outstanding.
#[component]
pub fn ReportTable(job: ReadOnlySignal<Job>, kind: PluginKind) -> Element {
    let job = job.read();
    let requested = job.requested(kind);
    let reports = job.reports(kind);
    let reported = job.reported_count(kind);

    rsx! {
        section { class: "report-table-card",
            header { class: "report-table-card__header",
                h2 { "{kind.title()} reports" }
                span { class: "report-table-card__meta",
                    "{reported}/{requested.len()} reported"
                }
            }
            if reports.is_empty() {
                if requested.is_empty() {
                    p { class: "report-table-card__empty",
                        "No {kind.title().to_lowercase()} were requested for this job."
                    }
                } else {
                    p { class: "report-table-card__empty",
                        "Waiting for: "
                        {requested.join(", ")}
                    }
                }
            } else {
                table { class: "report-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Status" }
                            th { "Time" }
                            th { "Errors" }
                        }
                    }
                    tbody {
                        for report in reports.iter() {
                            tr { key: "{report.name}",
                                td { class: "report-table__name", "{report.name}" }
                                td {
                                    ReportStatusIcon { status: report.status }
                                    span { class: "report-table__status-label",
                                        {report.status.label()}
                                    }
                                }
                                td {
                                    {report.process_time.map(format_process_time).unwrap_or_else(|| "\u{2014}".to_string())}
                                }
                                td { class: "report-table__errors",
                                    if report.errors.is_empty() {
                                        "\u{2014}"
                                    } else {
                                        ul {
                                            for (idx, err) in report.errors.iter().enumerate() {
                                                li { key: "{idx}", "{err}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
