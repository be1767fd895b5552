//! Built-in slide renderers.
//!
//! Each renderer is a plain function from a slide to markup. They read only
//! the slide, so the same function serves the player, the grid preview and
//! the expanded overlay.

mod frame;
mod heatmap;
mod lists;
mod numbers;

use dioxus::prelude::*;

use crate::core::format::{format_count, format_currency, format_percent, PLACEHOLDER as DASH};
use crate::slides::payload::Unit;
use crate::slides::{Slide, SlideKind, SlideRegistry, SlideView};

/// Renders nothing. Used for tags this build does not know.
pub const EMPTY: SlideView = SlideView::new("empty", render_empty);

/// Keeps the slide's place in the sequence when its payload is unusable.
pub const PLACEHOLDER: SlideView = SlideView::new("placeholder", render_placeholder);

pub(crate) fn install(registry: &mut SlideRegistry) {
    use SlideKind::*;

    registry
        .register(&[Intro], SlideView::new("intro", frame::render_intro))
        .register(
            &[SectionDivider],
            SlideView::new("section-divider", frame::render_section_divider),
        )
        .register(&[Dashboard], SlideView::new("overview", frame::render_overview))
        .register(&[Recap], SlideView::new("recap", frame::render_recap))
        .register(
            &[BigNumber, TotalRevenue, OrderCount, FollowerGrowth, AdSpend],
            SlideView::new("big-number", numbers::render_big_number),
        )
        .register(
            &[RefundRate, EngagementRate, ConversionRate],
            SlideView::new("rate-gauge", numbers::render_rate_gauge),
        )
        .register(
            &[TopList, TopProducts, TopPosts, TopCampaigns],
            SlideView::new("ranked-list", lists::render_ranked_list),
        )
        .register(
            &[Heatmap, CategoryHeatmap],
            SlideView::new("heatmap", heatmap::render_heatmap),
        )
        .register(
            &[BusiestMonth],
            SlideView::new("busiest-month", lists::render_busiest_month),
        )
        .register(
            &[ChannelBySpend, ChannelByLeads],
            SlideView::new("channel-comparison", lists::render_channel_comparison),
        );
}

/// Renders one slide through the shared registry. A renderer that fails
/// shows the placeholder card in place of the slide.
#[component]
pub fn RenderedSlide(slide: Slide) -> Element {
    let view = SlideRegistry::shared().view_for(&slide);
    rsx! {
        GuardedSlide { slide, view }
    }
}

#[component]
fn GuardedSlide(slide: Slide, view: SlideView) -> Element {
    let fallback = slide.clone();
    rsx! {
        ErrorBoundary {
            handle_error: move |_: ErrorContext| {
                tracing::warn!(id = %fallback.id, tag = fallback.tag(), "slide renderer failed");
                PLACEHOLDER.render(&fallback)
            },
            SlideBody { slide, view }
        }
    }
}

#[component]
fn SlideBody(slide: Slide, view: SlideView) -> Element {
    view.render(&slide)
}

fn render_empty(_slide: &Slide) -> Element {
    rsx! {}
}

fn render_placeholder(slide: &Slide) -> Element {
    rsx! {
        article { class: "slide slide--placeholder",
            {heading(slide)}
            strong { class: "slide__value", "{DASH}" }
            p { class: "slide__caption", {crate::t!("slide-unavailable")} }
        }
    }
}

/// Title plus optional subtitle, shared by every renderer.
fn heading(slide: &Slide) -> Element {
    let title = slide.title.clone();
    rsx! {
        header { class: "slide__header",
            h2 { class: "slide__title", "{title}" }
            if let Some(subtitle) = slide.subtitle.clone() {
                p { class: "slide__subtitle", "{subtitle}" }
            }
        }
    }
}

pub(crate) fn format_value(value: Option<f64>, unit: Unit, currency: Option<&str>) -> String {
    match unit {
        Unit::Count => format_count(value),
        Unit::Currency => format_currency(value, currency),
        Unit::Percent => format_percent(value),
    }
}
