use dioxus::prelude::*;

use crate::core::format::{format_change, format_percent};
use crate::slides::payload::HeatmapPayload;
use crate::slides::{Slide, SlidePayload};

use super::{heading, render_placeholder};

fn tiles(payload: &SlidePayload) -> Option<&HeatmapPayload> {
    match payload {
        SlidePayload::Heatmap(heatmap) | SlidePayload::CategoryHeatmap(heatmap) => Some(heatmap),
        _ => None,
    }
}

struct TileView {
    label: String,
    share: String,
    change: Option<String>,
    trend: &'static str,
    style: String,
}

pub(super) fn render_heatmap(slide: &Slide) -> Element {
    let Some(heatmap) = tiles(&slide.payload) else {
        return render_placeholder(slide);
    };

    let tiles: Vec<TileView> = heatmap
        .tiles
        .iter()
        .map(|tile| TileView {
            label: tile.label.clone(),
            share: format_percent(Some(tile.share)),
            change: tile.change.map(|c| format_change(Some(c))),
            trend: tile.trend.css_modifier(),
            style: format!(
                "left: {:.2}%; top: {:.2}%; width: {:.2}%; height: {:.2}%;",
                tile.x * 100.0,
                tile.y * 100.0,
                tile.width * 100.0,
                tile.height * 100.0
            ),
        })
        .collect();

    rsx! {
        article { class: "slide slide--heatmap",
            {heading(slide)}
            div { class: "slide-heatmap",
                for (i, TileView { label, share, change, trend, style }) in tiles.into_iter().enumerate() {
                    div {
                        key: "{i}-{label}",
                        class: "slide-heatmap__tile slide-heatmap__tile--{trend}",
                        style: "{style}",
                        span { class: "slide-heatmap__label", "{label}" }
                        strong { class: "slide-heatmap__share", "{share}" }
                        if let Some(change) = change {
                            span { class: "slide-heatmap__change", "{change}" }
                        }
                    }
                }
            }
        }
    }
}
