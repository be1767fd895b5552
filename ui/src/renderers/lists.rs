use dioxus::prelude::*;
use time::Month;

use crate::core::format::{format_count, format_currency};
use crate::slides::payload::{ChannelMetric, ChannelPayload, RankingPayload};
use crate::slides::{Slide, SlidePayload};
use crate::t;

use super::{format_value, heading, render_placeholder};

fn ranking(payload: &SlidePayload) -> Option<&RankingPayload> {
    match payload {
        SlidePayload::TopList(ranking)
        | SlidePayload::TopProducts(ranking)
        | SlidePayload::TopPosts(ranking)
        | SlidePayload::TopCampaigns(ranking) => Some(ranking),
        _ => None,
    }
}

fn channels(payload: &SlidePayload) -> Option<&ChannelPayload> {
    match payload {
        SlidePayload::ChannelBySpend(channels) | SlidePayload::ChannelByLeads(channels) => {
            Some(channels)
        }
        _ => None,
    }
}

/// Share of `max` as a CSS width, `0%` when the bar has no usable value.
fn bar_width(value: Option<f64>, max: f64) -> String {
    let pct = match value {
        Some(v) if v.is_finite() && max > 0.0 => (v / max * 100.0).clamp(0.0, 100.0),
        _ => 0.0,
    };
    format!("width: {pct:.1}%;")
}

pub(super) fn render_ranked_list(slide: &Slide) -> Element {
    let Some(ranking) = ranking(&slide.payload) else {
        return render_placeholder(slide);
    };

    let rows: Vec<(usize, String, String, Option<String>)> = ranking
        .items
        .iter()
        .enumerate()
        .map(|(rank, item)| {
            (
                rank + 1,
                item.label.clone(),
                format_value(item.value, ranking.unit, ranking.currency.as_deref()),
                item.detail.clone(),
            )
        })
        .collect();

    rsx! {
        article { class: "slide slide--ranked",
            {heading(slide)}
            ol { class: "slide-ranked__list",
                for (rank, label, value, detail) in rows {
                    li { key: "{rank}", class: "slide-ranked__item",
                        span { class: "slide-ranked__rank", "{rank}" }
                        span { class: "slide-ranked__label", "{label}" }
                        strong { class: "slide-ranked__value", "{value}" }
                        if let Some(detail) = detail {
                            span { class: "slide-ranked__detail", "{detail}" }
                        }
                    }
                }
            }
        }
    }
}

pub(super) fn render_channel_comparison(slide: &Slide) -> Element {
    let Some(payload) = channels(&slide.payload) else {
        return render_placeholder(slide);
    };

    let metric = payload.metric;
    let max = payload
        .channels
        .iter()
        .filter_map(|channel| channel.metric(metric))
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    let rows: Vec<(String, String, String)> = payload
        .channels
        .iter()
        .map(|channel| {
            let value = channel.metric(metric);
            let label = match metric {
                ChannelMetric::Spend => format_currency(value, payload.currency.as_deref()),
                ChannelMetric::Leads => format_count(value),
            };
            (channel.name.clone(), label, bar_width(value, max))
        })
        .collect();

    let metric_class = match metric {
        ChannelMetric::Spend => "spend",
        ChannelMetric::Leads => "leads",
    };

    rsx! {
        article { class: "slide slide--channels slide--channels-{metric_class}",
            {heading(slide)}
            ul { class: "slide-bars",
                for (i, (name, label, width)) in rows.into_iter().enumerate() {
                    li { key: "{i}-{name}", class: "slide-bars__row",
                        span { class: "slide-bars__label", "{name}" }
                        span { class: "slide-bars__track",
                            span { class: "slide-bars__fill", style: "{width}" }
                        }
                        strong { class: "slide-bars__value", "{label}" }
                    }
                }
            }
        }
    }
}

fn month_name(month: u8) -> Option<Month> {
    Month::try_from(month).ok()
}

pub(super) fn render_busiest_month(slide: &Slide) -> Element {
    let SlidePayload::BusiestMonth(busiest) = &slide.payload else {
        return render_placeholder(slide);
    };

    let headline = month_name(busiest.month)
        .map(|m| m.to_string())
        .unwrap_or_else(|| crate::core::format::PLACEHOLDER.to_string());
    let views = format_count(Some(busiest.views as f64));
    let max = busiest.series.iter().map(|m| m.views).max().unwrap_or(0) as f64;

    let bars: Vec<(u8, String, String, &'static str)> = busiest
        .series
        .iter()
        .filter_map(|entry| {
            let month = month_name(entry.month)?;
            let short: String = month.to_string().chars().take(3).collect();
            let height = if max > 0.0 {
                entry.views as f64 / max * 100.0
            } else {
                0.0
            };
            Some((
                entry.month,
                short,
                format!("height: {height:.1}%;"),
                if entry.month == busiest.month {
                    "slide-columns__col slide-columns__col--peak"
                } else {
                    "slide-columns__col"
                },
            ))
        })
        .collect();

    rsx! {
        article { class: "slide slide--busiest",
            {heading(slide)}
            strong { class: "slide__value", "{headline}" }
            span { class: "slide__caption", {t!("slide-views", views = views)} }
            div { class: "slide-columns",
                for (i, (month, short, height, column_class)) in bars.into_iter().enumerate() {
                    div { key: "{i}-{month}", class: "{column_class}",
                        span { class: "slide-columns__bar", style: "{height}" }
                        span { class: "slide-columns__label", "{short}" }
                    }
                }
            }
        }
    }
}
