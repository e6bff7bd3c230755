//! Derivation of the per-visualizer tab set.
//!
//! The "UI" side of the report area shows one tab per rendered visualizer.
//! While the pipeline is still producing those reports the set collapses to a
//! single sentinel tab, and a job with no visualizers configured gets a
//! different sentinel pointing the reader at the raw tables. The router
//! treats tab ids as URL sub-sections, so the sentinels carry fixed non-empty
//! ids: an empty sub-section is what the resolver reads as "nothing selected
//! yet", and an empty sentinel id would make every corrective redirect come
//! straight back here.

use crate::core::job::{Job, ReportStatus};

/// URL id of the sentinel tab shown while visualizers are still running.
pub const LOADING_TAB_ID: &str = "loading";

/// URL id of the sentinel tab shown when a job has no visualizers configured.
///
/// A visualizer that is literally named like either sentinel would be
/// shadowed by the sentinel handling; the reporting API does not produce
/// such names.
pub const NO_VISUALIZER_TAB_ID: &str = "no-visualizer";

/// Identity of a tab in the UI set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabId {
    /// A real visualizer report, addressed by its report name.
    Report(String),
    Loading,
    NoVisualizer,
}

impl TabId {
    /// The string form used as the URL sub-section.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Report(name) => name,
            Self::Loading => LOADING_TAB_ID,
            Self::NoVisualizer => NO_VISUALIZER_TAB_ID,
        }
    }
}

/// One selectable entry of the UI tab set.
///
/// Sentinel tabs have no label and render no entry in the tab strip; their
/// body still renders when selected.
#[derive(Debug, Clone, PartialEq)]
pub struct UiTab {
    pub id: TabId,
    pub label: Option<String>,
    /// Status indicator next to the label, present only when the backing
    /// report did not succeed.
    pub status: Option<ReportStatus>,
}

impl UiTab {
    fn loading() -> Self {
        Self {
            id: TabId::Loading,
            label: None,
            status: None,
        }
    }

    fn no_visualizer() -> Self {
        Self {
            id: TabId::NoVisualizer,
            label: None,
            status: None,
        }
    }
}

/// Derive the UI tab set for a job. Pure; recomputed whenever the job
/// changes. Exactly one of three shapes applies:
///
/// 1. final job with visualizers configured: one tab per visualizer report,
///    in report order;
/// 2. non-final job with visualizers configured: the `loading` sentinel;
/// 3. no visualizers configured: the `no-visualizer` sentinel.
///
/// Shape 1 with zero reports yields an empty set; the overview treats an
/// empty set as "still waiting" and keeps its loading gate up.
pub fn derive_ui_tabs(job: &Job) -> Vec<UiTab> {
    if job.visualizers_to_execute.is_empty() {
        return vec![UiTab::no_visualizer()];
    }

    if !job.status.is_final() {
        return vec![UiTab::loading()];
    }

    job.visualizer_reports
        .iter()
        .map(|report| {
            let status = if report.status.is_success() {
                None
            } else {
                Some(report.status)
            };
            UiTab {
                id: TabId::Report(report.name.clone()),
                label: Some(report.name.clone()),
                status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::job::JobStatus;
    use serde_json::json;

    fn job(status: JobStatus, requested: &[&str], reports: serde_json::Value) -> Job {
        serde_json::from_value(json!({
            "id": 7,
            "status": status,
            "observable_name": "example.org",
            "observable_classification": "domain",
            "tlp": "CLEAR",
            "user": "ana",
            "received_request_time": "2026-03-17T09:30:05Z",
            "visualizers_to_execute": requested,
            "visualizer_reports": reports,
        }))
        .unwrap()
    }

    #[test]
    fn final_job_maps_reports_to_tabs_in_order() {
        let job = job(
            JobStatus::Success,
            &["v1", "v2"],
            json!([
                {"name": "v1", "status": "success"},
                {"name": "v2", "status": "failed"}
            ]),
        );

        let tabs = derive_ui_tabs(&job);
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].id, TabId::Report("v1".into()));
        assert_eq!(tabs[0].label.as_deref(), Some("v1"));
        assert_eq!(tabs[0].status, None);
        assert_eq!(tabs[1].id, TabId::Report("v2".into()));
        assert_eq!(tabs[1].status, Some(ReportStatus::Failed));
    }

    #[test]
    fn running_job_collapses_to_loading_sentinel() {
        let job = job(
            JobStatus::VisualizersRunning,
            &["v1"],
            json!([{"name": "v1", "status": "running"}]),
        );

        let tabs = derive_ui_tabs(&job);
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].id, TabId::Loading);
        assert_eq!(tabs[0].label, None);
    }

    #[test]
    fn job_without_visualizers_gets_the_no_visualizer_sentinel() {
        for status in [JobStatus::Pending, JobStatus::Success, JobStatus::Killed] {
            let job = job(status, &[], json!([]));
            let tabs = derive_ui_tabs(&job);
            assert_eq!(tabs.len(), 1);
            assert_eq!(tabs[0].id, TabId::NoVisualizer);
        }
    }

    #[test]
    fn final_job_with_requested_but_unreported_visualizers_is_empty() {
        let job = job(JobStatus::Killed, &["v1"], json!([]));
        assert!(derive_ui_tabs(&job).is_empty());
    }

    #[test]
    fn derivation_is_pure() {
        let job = job(
            JobStatus::Success,
            &["v1"],
            json!([{"name": "v1", "status": "success"}]),
        );
        assert_eq!(derive_ui_tabs(&job), derive_ui_tabs(&job));
    }

    #[test]
    fn sentinel_ids_are_non_empty_and_distinct() {
        assert!(!LOADING_TAB_ID.is_empty());
        assert!(!NO_VISUALIZER_TAB_ID.is_empty());
        assert_ne!(LOADING_TAB_ID, NO_VISUALIZER_TAB_ID);
        assert_eq!(TabId::Loading.as_str(), LOADING_TAB_ID);
        assert_eq!(TabId::NoVisualizer.as_str(), NO_VISUALIZER_TAB_ID);
    }
}
