//! Category heatmap layout.
//!
//! Tiles are ordered by revenue (largest first, ties by label) and packed
//! into the unit square by recursive binary splits along the longer side,
//! so each tile's area equals its revenue share.

use crate::slides::payload::{HeatmapTile, Trend};

use super::CategoryRecord;

/// Changes inside ±0.5 % read as flat.
const FLAT_BAND: f64 = 0.005;

#[derive(Debug, Clone, Copy)]
struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

pub fn build_heatmap_layout(records: &[CategoryRecord]) -> Vec<HeatmapTile> {
    let mut entries: Vec<&CategoryRecord> = records
        .iter()
        .filter(|record| record.revenue.is_finite() && record.revenue > 0.0)
        .collect();
    entries.sort_by(|a, b| {
        b.revenue
            .total_cmp(&a.revenue)
            .then_with(|| a.category.cmp(&b.category))
    });

    let total: f64 = entries.iter().map(|record| record.revenue).sum();
    if entries.is_empty() || total <= 0.0 {
        return Vec::new();
    }

    let mut tiles: Vec<HeatmapTile> = entries
        .into_iter()
        .map(|record| {
            let change = record
                .previous_revenue
                .filter(|prev| prev.is_finite() && *prev > 0.0)
                .map(|prev| (record.revenue - prev) / prev);
            HeatmapTile {
                label: record.category.clone(),
                share: record.revenue / total,
                trend: trend_of(change),
                change,
                ..HeatmapTile::default()
            }
        })
        .collect();

    place(
        &mut tiles,
        Rect {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        },
    );
    tiles
}

fn trend_of(change: Option<f64>) -> Trend {
    match change {
        Some(c) if c > FLAT_BAND => Trend::Up,
        Some(c) if c < -FLAT_BAND => Trend::Down,
        _ => Trend::Flat,
    }
}

fn place(tiles: &mut [HeatmapTile], rect: Rect) {
    match tiles.len() {
        0 => {}
        1 => {
            let tile = &mut tiles[0];
            tile.x = rect.x;
            tile.y = rect.y;
            tile.width = rect.width;
            tile.height = rect.height;
        }
        len => {
            let total: f64 = tiles.iter().map(|t| t.share).sum();
            let half = total / 2.0;

            // Cut where the running share comes closest to half.
            let mut cut = 1;
            let mut best = f64::INFINITY;
            let mut running = 0.0;
            for i in 1..len {
                running += tiles[i - 1].share;
                let distance = (half - running).abs();
                if distance < best {
                    best = distance;
                    cut = i;
                }
            }

            let first: f64 = tiles[..cut].iter().map(|t| t.share).sum();
            let ratio = if total > 0.0 { first / total } else { 0.5 };

            let (a, b) = if rect.width >= rect.height {
                let w = rect.width * ratio;
                (
                    Rect { width: w, ..rect },
                    Rect {
                        x: rect.x + w,
                        width: rect.width - w,
                        ..rect
                    },
                )
            } else {
                let h = rect.height * ratio;
                (
                    Rect { height: h, ..rect },
                    Rect {
                        y: rect.y + h,
                        height: rect.height - h,
                        ..rect
                    },
                )
            };

            let (head, tail) = tiles.split_at_mut(cut);
            place(head, a);
            place(tail, b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, revenue: f64, previous: Option<f64>) -> CategoryRecord {
        CategoryRecord {
            category: category.into(),
            revenue,
            previous_revenue: previous,
        }
    }

    fn sample() -> Vec<CategoryRecord> {
        vec![
            record("Shoes", 300.0, Some(200.0)),
            record("Bags", 500.0, Some(520.0)),
            record("Hats", 100.0, None),
            record("Socks", 100.0, Some(100.2)),
        ]
    }

    #[test]
    fn orders_by_revenue_then_label() {
        let tiles = build_heatmap_layout(&sample());
        let labels: Vec<_> = tiles.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Bags", "Shoes", "Hats", "Socks"]);
    }

    #[test]
    fn tile_area_matches_share_and_fills_the_square() {
        let tiles = build_heatmap_layout(&sample());
        let share_sum: f64 = tiles.iter().map(|t| t.share).sum();
        let area_sum: f64 = tiles.iter().map(|t| t.width * t.height).sum();
        assert!((share_sum - 1.0).abs() < 1e-9);
        assert!((area_sum - 1.0).abs() < 1e-9);

        for tile in &tiles {
            assert!((tile.width * tile.height - tile.share).abs() < 1e-9);
            assert!(tile.x >= 0.0 && tile.y >= 0.0);
            assert!(tile.x + tile.width <= 1.0 + 1e-9);
            assert!(tile.y + tile.height <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn tiles_do_not_overlap() {
        let tiles = build_heatmap_layout(&sample());
        for (i, a) in tiles.iter().enumerate() {
            for b in tiles.iter().skip(i + 1) {
                let overlap_w = (a.x + a.width).min(b.x + b.width) - a.x.max(b.x);
                let overlap_h = (a.y + a.height).min(b.y + b.height) - a.y.max(b.y);
                assert!(overlap_w <= 1e-9 || overlap_h <= 1e-9, "{} overlaps {}", a.label, b.label);
            }
        }
    }

    #[test]
    fn trend_follows_previous_revenue() {
        let tiles = build_heatmap_layout(&sample());
        let trend = |label: &str| tiles.iter().find(|t| t.label == label).map(|t| t.trend);
        assert_eq!(trend("Shoes"), Some(Trend::Up));
        assert_eq!(trend("Bags"), Some(Trend::Down));
        assert_eq!(trend("Socks"), Some(Trend::Flat));
        assert_eq!(trend("Hats"), Some(Trend::Flat));
    }

    #[test]
    fn ignores_unusable_records() {
        let tiles = build_heatmap_layout(&[
            record("Zero", 0.0, None),
            record("Negative", -4.0, None),
            record("Broken", f64::NAN, None),
        ]);
        assert!(tiles.is_empty());
        assert!(build_heatmap_layout(&[]).is_empty());
    }
}
