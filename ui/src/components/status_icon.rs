use crate::core::job::{JobStatus, ReportStatus};
use dioxus::prelude::*;

// Glyphs are decorative; the label carries the meaning for screen readers.
fn glyph_for(modifier: &str) -> &'static str {
    match modifier {
        "pending" => "\u{25CC}",
        "running" => "\u{25D4}",
        "success" => "\u{2713}",
        "failed" => "\u{2715}",
        "killed" => "\u{2298}",
        _ => "\u{25CC}",
    }
}

fn badge(modifier: &str, label: &str) -> Element {
    rsx! {
        span {
            class: "status-icon status-icon--{modifier}",
            title: "{label}",
            span { aria_hidden: "true", {glyph_for(modifier)} }
            span { class: "visually-hidden", "{label}" }
        }
    }
}

/// Compact status badge for a whole job.
#[component]
pub fn JobStatusIcon(status: JobStatus) -> Element {
    badge(status.css_class(), status.label())
}

/// Compact status badge for a single plugin report.
#[component]
pub fn ReportStatusIcon(status: ReportStatus) -> Element {
    badge(status.css_class(), status.label())
}
