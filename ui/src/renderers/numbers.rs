use dioxus::prelude::*;

use crate::core::format::{change_ratio, format_change, format_percent};
use crate::slides::payload::{RatePayload, StatPayload};
use crate::slides::{Slide, SlidePayload};
use crate::t;

use super::{format_value, heading, render_placeholder};

fn stat(payload: &SlidePayload) -> Option<&StatPayload> {
    match payload {
        SlidePayload::BigNumber(stat)
        | SlidePayload::TotalRevenue(stat)
        | SlidePayload::OrderCount(stat)
        | SlidePayload::FollowerGrowth(stat)
        | SlidePayload::AdSpend(stat) => Some(stat),
        _ => None,
    }
}

fn rate(payload: &SlidePayload) -> Option<&RatePayload> {
    match payload {
        SlidePayload::RefundRate(rate)
        | SlidePayload::EngagementRate(rate)
        | SlidePayload::ConversionRate(rate) => Some(rate),
        _ => None,
    }
}

pub(super) fn render_big_number(slide: &Slide) -> Element {
    let Some(stat) = stat(&slide.payload) else {
        return render_placeholder(slide);
    };

    let value = format_value(stat.value, stat.unit, stat.currency.as_deref());
    let change = change_ratio(stat.value, stat.previous);
    let trend = match change {
        Some(ratio) if ratio > 0.0 => "up",
        Some(ratio) if ratio < 0.0 => "down",
        _ => "flat",
    };
    let change_label = format_change(change);

    rsx! {
        article { class: "slide slide--big-number",
            {heading(slide)}
            strong { class: "slide__value", "{value}" }
            if change.is_some() {
                span { class: "slide__trend slide__trend--{trend}", "{change_label}" }
            }
            if let Some(caption) = stat.caption.clone() {
                p { class: "slide__caption", "{caption}" }
            }
        }
    }
}

pub(super) fn render_rate_gauge(slide: &Slide) -> Element {
    let Some(rate) = rate(&slide.payload) else {
        return render_placeholder(slide);
    };

    let value = format_percent(rate.rate);
    let sweep = rate
        .rate
        .filter(|r| r.is_finite())
        .map(|r| r.clamp(0.0, 1.0) * 360.0)
        .unwrap_or(0.0);
    let gauge_style = format!(
        "background: conic-gradient(var(--color-accent) {sweep:.1}deg, var(--color-track) 0deg);"
    );
    let benchmark = rate.benchmark.map(|b| format_percent(Some(b)));

    rsx! {
        article { class: "slide slide--rate",
            {heading(slide)}
            div { class: "slide-gauge", style: "{gauge_style}",
                strong { class: "slide-gauge__value", "{value}" }
            }
            if let Some(benchmark) = benchmark {
                span { class: "slide__caption", {t!("slide-benchmark", benchmark = benchmark)} }
            }
            if let Some(caption) = rate.caption.clone() {
                p { class: "slide__caption", "{caption}" }
            }
        }
    }
}
