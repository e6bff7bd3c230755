use dioxus::prelude::*;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    // Render trace for diagnosing i18n refresh issues.
    tracing::debug!(lang_marker = %lang, "Home render");
}

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    #[cfg(debug_assertions)]
    {
        log_home_render(&_lang_current);
    }

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro-1")} }
            p { {crate::t!("home-intro-2")} }

            h2 { {crate::t!("home-samples-heading")} }
            ul { class: "page-home__samples",
                li {
                    Link { class: "page-home__sample", to: "/jobs/101",
                        span { class: "page-home__sample-id", "#101" }
                        {crate::t!("home-sample-website")}
                    }
                }
                li {
                    Link { class: "page-home__sample", to: "/jobs/102",
                        span { class: "page-home__sample-id", "#102" }
                        {crate::t!("home-sample-hash")}
                    }
                }
                li {
                    Link { class: "page-home__sample", to: "/jobs/103",
                        span { class: "page-home__sample-id", "#103" }
                        {crate::t!("home-sample-killed")}
                    }
                }
            }
        }
    }
}
