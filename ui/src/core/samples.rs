//! Scripted sample jobs backing the demo feed.
//!
//! Each job is a short deterministic script indexed by a step counter: the
//! polling view advances the step while the job is non-final, which is how
//! reports "arrive" here without a network layer. Steps past the end of a
//! script clamp to its last frame, and the same (id, step) pair always yields
//! the same job, so these double as fixtures for the navigation tests.

use serde_json::json;

use crate::core::job::{Job, JobStatus, PluginReport, ReportStatus};

/// Ids of the jobs the home view links to.
pub const SAMPLE_JOB_IDS: [u64; 3] = [101, 102, 103];

/// The job with the given id as it looks after `step` polls.
/// None when no sample job has that id.
pub fn job_at_step(id: u64, step: usize) -> Option<Job> {
    match id {
        101 => Some(website_job(step)),
        102 => Some(hash_job(step)),
        103 => Some(killed_job(step)),
        _ => None,
    }
}

/// Domain observable with two visualizers; one visualizer fails to render.
fn website_job(step: usize) -> Job {
    let step = step.min(5);

    let status = match step {
        0 => JobStatus::Pending,
        1 | 2 => JobStatus::AnalyzersRunning,
        3 => JobStatus::ConnectorsRunning,
        4 => JobStatus::VisualizersRunning,
        _ => JobStatus::Success,
    };

    let analyzer_reports = match step {
        0 => vec![],
        1 => vec![
            report("Classic_DNS", ReportStatus::Success, Some(0.38)),
            report("Shodan", ReportStatus::Running, None),
            report("VirusTotal", ReportStatus::Running, None),
        ],
        _ => vec![
            report("Classic_DNS", ReportStatus::Success, Some(0.38)),
            failed_report("Shodan", &["request timed out after 30s"]),
            report("VirusTotal", ReportStatus::Success, Some(2.11)),
        ],
    };

    let connector_reports = if step >= 3 {
        vec![report("OpenCTI", ReportStatus::Success, Some(0.77))]
    } else {
        vec![]
    };

    let visualizer_reports = match step {
        0..=3 => vec![],
        4 => vec![
            report("Domain overview", ReportStatus::Running, None),
            report("DNS resolutions", ReportStatus::Running, None),
        ],
        _ => vec![
            PluginReport {
                report: json!({
                    "title": "Domain overview",
                    "fields": [
                        {"name": "registrar", "value": "Greyfield Registrars LLC"},
                        {"name": "first seen", "value": "2019-06-02"},
                        {"name": "malicious votes", "value": 0}
                    ]
                }),
                ..report("Domain overview", ReportStatus::Success, Some(0.09))
            },
            PluginReport {
                errors: vec!["renderer raised: missing column 'resolver'".into()],
                ..report("DNS resolutions", ReportStatus::Failed, Some(0.04))
            },
        ],
    };

    Job {
        id: 101,
        status,
        observable_name: "blog.greyfield.net".into(),
        observable_classification: "domain".into(),
        tlp: "CLEAR".into(),
        user: "ana".into(),
        received_request_time: "2026-03-17T09:30:05Z".into(),
        finished_analysis_time: (step >= 5).then(|| "2026-03-17T09:31:42Z".to_string()),
        playbook: Some("Popular websites".into()),
        analyzers_to_execute: vec!["Classic_DNS".into(), "Shodan".into(), "VirusTotal".into()],
        connectors_to_execute: vec!["OpenCTI".into()],
        pivots_to_execute: vec![],
        visualizers_to_execute: vec!["Domain overview".into(), "DNS resolutions".into()],
        analyzer_reports,
        connector_reports,
        pivot_reports: vec![],
        visualizer_reports,
    }
}

/// Hash observable with no visualizers configured; raw tables only.
fn hash_job(step: usize) -> Job {
    let step = step.min(2);

    let status = match step {
        0 => JobStatus::Pending,
        1 => JobStatus::AnalyzersRunning,
        _ => JobStatus::Success,
    };

    let analyzer_reports = match step {
        0 => vec![],
        1 => vec![
            report("HashLookup", ReportStatus::Success, Some(0.21)),
            report("YaraScan", ReportStatus::Running, None),
        ],
        _ => vec![
            report("HashLookup", ReportStatus::Success, Some(0.21)),
            report("YaraScan", ReportStatus::Success, Some(4.52)),
        ],
    };

    Job {
        id: 102,
        status,
        observable_name: "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08".into(),
        observable_classification: "hash".into(),
        tlp: "AMBER".into(),
        user: "teo".into(),
        received_request_time: "2026-03-17T10:02:11Z".into(),
        finished_analysis_time: (step >= 2).then(|| "2026-03-17T10:02:58Z".to_string()),
        playbook: None,
        analyzers_to_execute: vec!["HashLookup".into(), "YaraScan".into()],
        connectors_to_execute: vec![],
        pivots_to_execute: vec![],
        visualizers_to_execute: vec![],
        analyzer_reports,
        connector_reports: vec![],
        pivot_reports: vec![],
        visualizer_reports: vec![],
    }
}

/// Address scan killed before its visualizer could report. Ends with
/// requested-but-unreported visualizers, the one shape that leaves the
/// derived tab set empty.
fn killed_job(step: usize) -> Job {
    let step = step.min(2);

    let status = match step {
        0 => JobStatus::Pending,
        1 => JobStatus::AnalyzersRunning,
        _ => JobStatus::Killed,
    };

    let analyzer_reports = match step {
        0 => vec![],
        1 => vec![report("AbuseIPDB", ReportStatus::Running, None)],
        _ => vec![report("AbuseIPDB", ReportStatus::Killed, None)],
    };

    Job {
        id: 103,
        status,
        observable_name: "203.0.113.7".into(),
        observable_classification: "ip".into(),
        tlp: "RED".into(),
        user: "ana".into(),
        received_request_time: "2026-03-17T11:18:40Z".into(),
        finished_analysis_time: (step >= 2).then(|| "2026-03-17T11:19:03Z".to_string()),
        playbook: Some("Address triage".into()),
        analyzers_to_execute: vec!["AbuseIPDB".into()],
        connectors_to_execute: vec![],
        pivots_to_execute: vec![],
        visualizers_to_execute: vec!["IP insights".into()],
        analyzer_reports,
        connector_reports: vec![],
        pivot_reports: vec![],
        visualizer_reports: vec![],
    }
}

fn report(name: &str, status: ReportStatus, process_time: Option<f64>) -> PluginReport {
    PluginReport {
        name: name.into(),
        status,
        errors: vec![],
        process_time,
        report: serde_json::Value::Null,
    }
}

fn failed_report(name: &str, errors: &[&str]) -> PluginReport {
    PluginReport {
        errors: errors.iter().map(|err| err.to_string()).collect(),
        ..report(name, ReportStatus::Failed, Some(30.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::job::PluginKind;

    #[test]
    fn every_sample_script_reaches_a_final_status() {
        for id in SAMPLE_JOB_IDS {
            let job = job_at_step(id, 50).unwrap();
            assert!(job.status.is_final(), "job {id} never finished");
        }
    }

    #[test]
    fn steps_clamp_to_the_last_frame() {
        assert_eq!(job_at_step(101, 5), job_at_step(101, 500));
    }

    #[test]
    fn scripts_are_deterministic() {
        assert_eq!(job_at_step(102, 1), job_at_step(102, 1));
    }

    #[test]
    fn unknown_ids_have_no_job() {
        assert_eq!(job_at_step(999, 0), None);
    }

    #[test]
    fn website_job_ends_with_both_visualizer_reports() {
        let job = job_at_step(101, 5).unwrap();
        let names: Vec<_> = job
            .visualizer_reports
            .iter()
            .map(|report| report.name.as_str())
            .collect();
        assert_eq!(names, ["Domain overview", "DNS resolutions"]);
        assert_eq!(job.reported_count(PluginKind::Visualizer), 2);
    }

    #[test]
    fn killed_job_leaves_visualizers_unreported() {
        let job = job_at_step(103, 2).unwrap();
        assert!(job.status.is_final());
        assert!(!job.visualizers_to_execute.is_empty());
        assert!(job.visualizer_reports.is_empty());
    }
}
