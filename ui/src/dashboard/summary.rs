use dioxus::prelude::*;

use crate::slides::{SlideKind, Wrap};
use crate::t;

/// One entry in the embedded overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    /// Zero-based position in the full sequence; this is what a jump targets.
    pub position: usize,
    pub title: String,
    pub subtitle: Option<String>,
    pub tag: String,
    pub is_current: bool,
}

/// Cards for every slide except overview slides themselves.
pub fn summary_cards(wrap: &Wrap, current: usize) -> Vec<SummaryCard> {
    wrap.iter()
        .enumerate()
        .filter(|(_, slide)| slide.kind() != Some(SlideKind::Dashboard))
        .map(|(position, slide)| SummaryCard {
            position,
            title: slide.title.clone(),
            subtitle: slide.subtitle.clone(),
            tag: slide.tag().to_string(),
            is_current: position == current,
        })
        .collect()
}

/// The overview slide as shown inside the player. Picking a card asks the
/// player to jump; the component holds no navigation state of its own.
#[component]
pub fn DashboardSlide(
    wrap: Wrap,
    current: usize,
    on_jump: EventHandler<usize>,
    on_open_dashboard: EventHandler<()>,
) -> Element {
    let cards: Vec<(usize, usize, &'static str, SummaryCard)> = summary_cards(&wrap, current)
        .into_iter()
        .map(|card| {
            let class = if card.is_current {
                "overview-card overview-card--current"
            } else {
                "overview-card"
            };
            (card.position, card.position + 1, class, card)
        })
        .collect();
    let title = wrap
        .get(current)
        .filter(|slide| slide.kind() == Some(SlideKind::Dashboard))
        .map(|slide| slide.title.clone())
        .unwrap_or_else(|| t!("overview-heading"));

    rsx! {
        article { class: "slide slide--overview",
            header { class: "slide__header",
                h2 { class: "slide__title", "{title}" }
            }
            ol { class: "overview-cards",
                for (position, number, class, SummaryCard { title, subtitle, tag, is_current, .. }) in cards {
                    li { key: "{position}",
                        button {
                            r#type: "button",
                            class: "{class}",
                            aria_current: is_current,
                            onclick: move |_| on_jump.call(position),
                            span { class: "overview-card__position", "{number}" }
                            span { class: "overview-card__title", "{title}" }
                            if let Some(subtitle) = subtitle {
                                span { class: "overview-card__subtitle", "{subtitle}" }
                            }
                            span { class: "overview-card__tag", "{tag}" }
                        }
                    }
                }
            }
            button {
                r#type: "button",
                class: "overview__open-full",
                onclick: move |_| on_open_dashboard.call(()),
                {t!("overview-open-full")}
            }
        }
    }
}
