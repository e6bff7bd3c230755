#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (especially the job
  overview and its report panes) remain present in the unified shared theme:
  ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup in `ui/`.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components (tab strips, report tables, status badges, etc).
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Loading states
    ".loader {",
    ".loader__spinner",
    // Status badges
    ".status-icon",
    ".status-icon--pending",
    ".status-icon--running",
    ".status-icon--success",
    ".status-icon--failed",
    ".status-icon--killed",
    // Job overview scaffold
    ".job-overview",
    ".job-overview__header",
    ".job-overview__mode",
    ".job-overview__mode-button--active",
    ".job-overview__body",
    // Metadata card & alerts
    ".job-info-card",
    ".job-info-card__grid",
    ".job-info-card__tlp",
    ".job-actions",
    ".alert--running",
    // Tab strip
    ".tab-strip",
    ".tab-strip__tab",
    ".tab-strip__tab--active",
    ".tab-strip__badge",
    // Raw report tables
    ".report-table-card",
    ".report-table",
    ".report-table__errors",
    // Visualizer panes
    ".visualizer-pane",
    ".visualizer-pane__payload",
    ".visualizer-pane__errors",
    // Home page samples
    ".page-home__samples",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn tab_strip_block_consistency() {
    // The strip and its badge styling must move together; the raw tabs always
    // render count badges.
    let has_tab = THEME_CSS.contains(".tab-strip__tab {");
    let has_badge = THEME_CSS.contains(".tab-strip__badge {");
    assert!(
        has_tab && has_badge,
        "Tab strip sub‑selectors missing (tab: {has_tab}, badge: {has_badge})"
    );
}
