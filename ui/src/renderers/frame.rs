use dioxus::prelude::*;

use crate::slides::{Slide, SlidePayload};

use super::{format_value, heading, render_placeholder};

pub(super) fn render_intro(slide: &Slide) -> Element {
    let SlidePayload::Intro(intro) = &slide.payload else {
        return render_placeholder(slide);
    };
    let year = intro.year;
    let user = intro.user.clone();

    rsx! {
        article { class: "slide slide--intro",
            span { class: "slide__eyebrow", "{year}" }
            {heading(slide)}
            if !user.is_empty() {
                p { class: "slide__caption", "{user}" }
            }
        }
    }
}

pub(super) fn render_section_divider(slide: &Slide) -> Element {
    let SlidePayload::SectionDivider(section) = &slide.payload else {
        return render_placeholder(slide);
    };
    let domain = section.domain.map(|d| d.label()).unwrap_or_default();

    rsx! {
        article { class: "slide slide--section",
            if !domain.is_empty() {
                span { class: "slide__eyebrow", "{domain}" }
            }
            {heading(slide)}
            if let Some(blurb) = section.blurb.clone() {
                p { class: "slide__caption", "{blurb}" }
            }
        }
    }
}

/// Static stand-in for the dashboard slide outside the player, where there
/// is no index to jump.
pub(super) fn render_overview(slide: &Slide) -> Element {
    rsx! {
        article { class: "slide slide--overview",
            {heading(slide)}
        }
    }
}

pub(super) fn render_recap(slide: &Slide) -> Element {
    let SlidePayload::Recap(recap) = &slide.payload else {
        return render_placeholder(slide);
    };

    let rows: Vec<(String, String)> = recap
        .highlights
        .iter()
        .map(|highlight| {
            let value = highlight.text.clone().unwrap_or_else(|| {
                format_value(highlight.value, highlight.unit, highlight.currency.as_deref())
            });
            (highlight.label.clone(), value)
        })
        .collect();

    rsx! {
        article { class: "slide slide--recap",
            {heading(slide)}
            ul { class: "slide-recap__list",
                for (i, (label, value)) in rows.into_iter().enumerate() {
                    li { key: "{i}-{label}", class: "slide-recap__item",
                        span { class: "slide-recap__label", "{label}" }
                        strong { class: "slide-recap__value", "{value}" }
                    }
                }
            }
        }
    }
}
