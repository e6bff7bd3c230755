use dioxus::prelude::*;
use tracing::debug;

use crate::components::{JobStatusIcon, ReportStatusIcon};
use crate::core::job::{Job, PluginKind};
use crate::core::route::{resolve_route, NavCommand, NavOrigin, ReportSection, RouteSnapshot};
use crate::core::tabs::{derive_ui_tabs, TabId};

use super::sections::{JobActionsBar, JobInfoCard, JobIsRunningAlert};
use super::tables::ReportTable;
use super::visualizer::VisualizerPanel;

/// Tags the origin of the next route write before handing the path to the
/// router. Machine-issued corrections go through the resolver instead and
/// leave the origin untouched.
fn user_nav(mut nav_origin: Signal<NavOrigin>, navigator: Navigator, command: NavCommand) {
    nav_origin.set(NavOrigin::User);
    navigator.push(command.to_path());
}

/// Results view for a single analysis job.
///
/// The route is the single source of truth for what the report area shows.
/// This component derives the selectable visualizer tabs from the job via
/// [`derive_ui_tabs`], lets [`resolve_route`] correct the URL whenever the
/// derived set leaves it pointing at nothing, and renders whichever pane the
/// (possibly corrected) route names.
///
/// Callers should key this component by job id so the per-view navigation
/// origin guard resets when the user moves to another job.
#[component]
pub fn JobOverview(
    job: ReadOnlySignal<Job>,
    is_running_job: bool,
    section: ReadOnlySignal<ReportSection>,
    sub_section: ReadOnlySignal<String>,
    refetch: EventHandler<()>,
) -> Element {
    let navigator = use_navigator();
    let nav_origin = use_signal(|| NavOrigin::System);
    let ui_tabs = use_memo(move || derive_ui_tabs(&job.read()));

    // Reconciles the URL against the derived tab set, once per job update.
    // The set is read after the job, so this never sees a stale derivation.
    // Route fields and the origin guard are sampled with peek: a correction
    // issued here re-runs nothing until the next update arrives.
    use_effect(move || {
        let job_id = job.read().id;
        let tabs = ui_tabs.read();
        let snapshot = RouteSnapshot {
            section: *section.peek(),
            sub_section: sub_section.peek().clone(),
            origin: *nav_origin.peek(),
        };
        if let Some(command) = resolve_route(job_id, &tabs, &snapshot) {
            let target = command.to_path();
            debug!(job_id = command.job_id, target = %target, "correcting report route");
            navigator.replace(target);
        }
    });

    let tabs = ui_tabs.read();
    let job_now = job.read();
    let job_id = job_now.id;
    let job_status = job_now.status;
    let current_section = *section.read();
    let current_sub = sub_section.read();
    let is_ui_mode = current_section == ReportSection::Visualizer;

    // First-paint gate: nothing is selectable until the tab set exists.
    if tabs.is_empty() {
        return rsx! {
            section { class: "job-overview job-overview--loading",
                div { class: "loader",
                    div { class: "loader__spinner", aria_hidden: "true" }
                    p { "Waiting for reports\u{2026}" }
                }
            }
        };
    }

    let body = if is_ui_mode {
        match tabs.iter().find(|tab| tab.id.as_str() == current_sub.as_str()) {
            Some(tab) => match &tab.id {
                TabId::Loading => rsx! {
                    div { class: "visualizer-pane visualizer-pane--pending",
                        div { class: "loader",
                            div { class: "loader__spinner", aria_hidden: "true" }
                            p { "Visualizers are still running\u{2026}" }
                        }
                    }
                },
                TabId::NoVisualizer => rsx! {
                    div { class: "visualizer-pane visualizer-pane--none",
                        p { "No visualizers are configured for this job." }
                        p { "Switch to raw data to inspect the per-plugin reports." }
                    }
                },
                TabId::Report(name) => {
                    let name = name.clone();
                    rsx! {
                        VisualizerPanel { job, name }
                    }
                }
            },
            // Stale selection; the strip stays usable while the pane is blank.
            None => rsx! {},
        }
    } else {
        match PluginKind::from_tab_id(current_sub.as_str()) {
            Some(kind) => rsx! {
                ReportTable { job, kind }
            },
            None => rsx! {},
        }
    };

    rsx! {
        section { class: "job-overview",
            header { class: "job-overview__header",
                button {
                    class: "button button--ghost job-overview__back",
                    aria_label: "Back",
                    onclick: move |_| {
                        navigator.go_back();
                    },
                    "\u{2190}"
                }
                h1 { class: "job-overview__title", "Job #{job_id}" }
                JobStatusIcon { status: job_status }
            }

            JobActionsBar { refetch: move |_| refetch.call(()) }
            JobInfoCard { job }
            if is_running_job {
                JobIsRunningAlert {}
            }

            div {
                class: "job-overview__mode",
                role: "group",
                aria_label: "Report mode",
                button {
                    class: if !is_ui_mode { "button job-overview__mode-button job-overview__mode-button--active" } else { "button job-overview__mode-button" },
                    onclick: move |_| {
                        if !is_ui_mode {
                            return;
                        }
                        user_nav(nav_origin, navigator, NavCommand {
                            job_id,
                            section: ReportSection::Raw,
                            sub_section: PluginKind::Analyzer.tab_id().to_string(),
                        });
                    },
                    "Raw data"
                }
                button {
                    class: if is_ui_mode { "button job-overview__mode-button job-overview__mode-button--active" } else { "button job-overview__mode-button" },
                    onclick: move |_| {
                        if is_ui_mode {
                            return;
                        }
                        let Some(first) = ui_tabs.peek().first().map(|tab| tab.id.as_str().to_string()) else {
                            return;
                        };
                        user_nav(nav_origin, navigator, NavCommand {
                            job_id,
                            section: ReportSection::Visualizer,
                            sub_section: first,
                        });
                    },
                    "Visualizers"
                }
            }

            div { class: "tab-strip",
                if is_ui_mode {
                    for tab in tabs.iter().filter(|tab| tab.label.is_some()) {
                        {
                            let key_id = tab.id.as_str().to_string();
                            let nav_id = key_id.clone();
                            let label = tab.label.clone().unwrap_or_default();
                            let status = tab.status;
                            let active = *current_sub == key_id;
                            rsx! {
                                button {
                                    key: "{key_id}",
                                    class: if active { "tab-strip__tab tab-strip__tab--active" } else { "tab-strip__tab" },
                                    onclick: move |_| {
                                        if active {
                                            return;
                                        }
                                        user_nav(nav_origin, navigator, NavCommand {
                                            job_id,
                                            section: ReportSection::Visualizer,
                                            sub_section: nav_id.clone(),
                                        });
                                    },
                                    span { class: "tab-strip__label", "{label}" }
                                    if let Some(status) = status {
                                        ReportStatusIcon { status }
                                    }
                                }
                            }
                        }
                    }
                } else {
                    for kind in PluginKind::ALL {
                        {
                            let tab_id = kind.tab_id();
                            let title = kind.title();
                            let reported = job_now.reported_count(kind);
                            let total = job_now.requested(kind).len();
                            let active = *current_sub == tab_id;
                            rsx! {
                                button {
                                    key: "{tab_id}",
                                    class: if active { "tab-strip__tab tab-strip__tab--active" } else { "tab-strip__tab" },
                                    onclick: move |_| {
                                        if active {
                                            return;
                                        }
                                        user_nav(nav_origin, navigator, NavCommand {
                                            job_id,
                                            section: ReportSection::Raw,
                                            sub_section: tab_id.to_string(),
                                        });
                                    },
                                    span { class: "tab-strip__label", "{title}" }
                                    span { class: "tab-strip__badge", "{reported}/{total}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "job-overview__body", {body} }
        }
    }
}
