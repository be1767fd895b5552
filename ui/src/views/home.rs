use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }

            ul { class: "page-home__features",
                li { {crate::t!("home-feature-player")} }
                li { {crate::t!("home-feature-dashboard")} }
                li { {crate::t!("home-feature-share")} }
            }
            p { class: "page-home__cta",
                {crate::t!("home-cta")}
            }
        }
    }
}
