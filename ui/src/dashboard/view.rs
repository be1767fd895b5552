use dioxus::prelude::*;

use crate::renderers::RenderedSlide;
use crate::slides::{Slide, Wrap};
use crate::t;

use super::grid::{grid_slides, ExpandedSlide};

/// Every non-structural slide at once, each expandable to a full-size
/// overlay. Independent of the player's position.
#[component]
pub fn WrapDashboard(wrap: Wrap, on_exit: EventHandler<()>) -> Element {
    let mut expanded = use_signal(ExpandedSlide::none);

    let cells: Vec<(String, Slide)> = grid_slides(&wrap)
        .into_iter()
        .map(|slide| (slide.id.clone(), slide.clone()))
        .collect();
    let count = cells.len();
    let overlay = expanded.read().resolve(&wrap).cloned();

    rsx! {
        section {
            class: "wrap-dashboard",
            tabindex: 0,
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt| {
                let key = evt.key().to_string();
                if expanded.with_mut(|state| state.close_on_key(&key)) {
                    evt.prevent_default();
                }
            },

            header { class: "wrap-dashboard__header",
                button {
                    r#type: "button",
                    class: "wrap-dashboard__back",
                    onclick: move |_| on_exit.call(()),
                    {t!("dashboard-back")}
                }
                h2 { class: "wrap-dashboard__title", {t!("dashboard-title")} }
                span { class: "wrap-dashboard__count", {t!("dashboard-count", count = count)} }
            }

            div { class: "wrap-dashboard__grid",
                for (id, slide) in cells {
                    button {
                        key: "{id}",
                        r#type: "button",
                        class: "wrap-dashboard__cell",
                        onclick: {
                            let id = id.clone();
                            move |_| expanded.with_mut(|state| state.expand(id.clone()))
                        },
                        div { class: "wrap-dashboard__preview",
                            RenderedSlide { slide }
                        }
                    }
                }
            }

            if let Some(slide) = overlay {
                div {
                    class: "wrap-dashboard__backdrop",
                    onclick: move |_| expanded.with_mut(|state| state.close()),
                    div {
                        class: "wrap-dashboard__expanded",
                        role: "dialog",
                        aria_modal: "true",
                        onclick: move |evt| evt.stop_propagation(),
                        button {
                            r#type: "button",
                            class: "wrap-dashboard__close",
                            onclick: move |_| expanded.with_mut(|state| state.close()),
                            {t!("dashboard-close")}
                        }
                        RenderedSlide { slide }
                    }
                }
            }
        }
    }
}
