//! End-to-end navigation scenarios over one small wrap: the player state
//! machine, the full-dashboard filter and the overview slide's jump.

use dioxus::prelude::*;

use ui::builder::{build_wrap, MetricsBundle};
use ui::dashboard::{grid_slides, summary_cards, DashboardSlide, ExpandedSlide};
use ui::player::{Navigation, PlayerConfig, PlayerEngine, WrapPlayer};
use ui::{SlideKind, SlideRegistry, Wrap, WrapError};

const FIVE_SLIDES: &str = r#"[
    { "id": "intro", "type": "intro", "title": "Hello 2024", "payload": { "user": "Ana", "year": 2024 } },
    { "id": "orders", "type": "bigNumber", "title": "Orders", "payload": { "value": 1284, "previous": 1100 } },
    { "id": "top", "type": "topList", "title": "Best sellers",
      "payload": { "items": [ { "label": "Mug", "value": 320 }, { "label": "Tote", "value": 210 } ] } },
    { "id": "map", "type": "heatmap", "title": "Categories", "payload": { "tiles": [] } },
    { "id": "recap", "type": "recap", "title": "Recap", "payload": { "highlights": [] } }
]"#;

fn five() -> Wrap {
    Wrap::from_json(FIVE_SLIDES).unwrap()
}

fn render(app: fn(Wrap) -> Element, wrap: Wrap) -> String {
    let mut dom = VirtualDom::new_with_props(app, wrap);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn player_walks_forward_and_stops_at_the_end() {
    let mut player = PlayerEngine::for_wrap(&five(), PlayerConfig::default());
    for _ in 0..3 {
        player.next();
    }
    assert_eq!(player.index(), 3);

    player.next();
    assert_eq!(player.index(), 4);
    assert_eq!(player.next(), Navigation::Unchanged);
    assert_eq!(player.index(), 4);
}

#[test]
fn jump_clamps_into_range() {
    let mut player = PlayerEngine::for_wrap(&five(), PlayerConfig::default());
    player.jump_to(-1);
    assert_eq!(player.index(), 0);
    player.jump_to(5);
    assert_eq!(player.index(), 4);
}

#[test]
fn auto_advance_resets_after_a_manual_step() {
    let mut player = PlayerEngine::for_wrap(&five(), PlayerConfig::default());
    let pending = player.schedule().unwrap();
    player.next();
    assert_eq!(player.dwell_elapsed(pending.generation), Navigation::Stale);
    assert_eq!(player.index(), 1);
}

#[test]
fn full_dashboard_shows_only_content_slides() {
    let wrap = five();
    let tags: Vec<&str> = grid_slides(&wrap).iter().map(|s| s.tag()).collect();
    assert_eq!(tags, ["bigNumber", "topList", "heatmap"]);
}

#[test]
fn expanding_does_not_touch_the_player() {
    let wrap = five();
    let mut player = PlayerEngine::for_wrap(&wrap, PlayerConfig::default());
    player.jump_to(2);

    let mut expanded = ExpandedSlide::none();
    expanded.expand("map");
    assert_eq!(expanded.resolve(&wrap).map(|s| s.title.as_str()), Some("Categories"));
    assert_eq!(player.index(), 2);
}

#[test]
fn overview_card_selection_jumps_the_player() {
    let wrap = Wrap::from_json(
        r#"[
            { "id": "intro", "type": "intro", "title": "Hi", "payload": {} },
            { "id": "orders", "type": "bigNumber", "title": "Orders", "payload": {} },
            { "id": "overview", "type": "dashboard", "title": "Overview", "payload": {} },
            { "id": "top", "type": "topList", "title": "Top", "payload": {} },
            { "id": "recap", "type": "recap", "title": "Recap", "payload": {} }
        ]"#,
    )
    .unwrap();
    let mut player = PlayerEngine::for_wrap(&wrap, PlayerConfig::default());

    let cards = summary_cards(&wrap, player.index());
    let chosen = cards.iter().find(|card| card.title == "Top").unwrap();
    assert_eq!(chosen.position, 3);

    player.jump_to(chosen.position as i64);
    assert_eq!(player.index(), 3);
}

#[test]
fn empty_wrap_is_rejected_everywhere() {
    assert!(matches!(Wrap::from_json("[]"), Err(WrapError::EmptyWrap)));
    assert!(matches!(
        PlayerEngine::new(0, PlayerConfig::default()),
        Err(WrapError::EmptyWrap)
    ));
}

#[test]
fn sample_bundle_round_trips_through_every_surface() {
    let wrap = build_wrap(&MetricsBundle::sample().unwrap()).unwrap();
    assert_eq!(wrap.get(0).and_then(|s| s.kind()), Some(SlideKind::Intro));
    assert_eq!(wrap.slides().last().and_then(|s| s.kind()), Some(SlideKind::Recap));

    let registry = SlideRegistry::shared();
    assert!(registry.missing_kinds().is_empty());
    assert!(wrap.iter().all(|slide| registry.view_for(slide).name != "placeholder"));

    let structural = wrap.iter().filter(|s| s.is_structural()).count();
    assert_eq!(grid_slides(&wrap).len(), wrap.len() - structural);
}

#[test]
fn player_renders_one_indicator_per_slide() {
    fn app(wrap: Wrap) -> Element {
        rsx! {
            WrapPlayer { wrap, on_open_dashboard: |_| {} }
        }
    }

    let html = render(app, five());
    assert_eq!(html.matches("wrap-player__indicator ").count(), 5);
    assert_eq!(html.matches("wrap-player__indicator--active").count(), 1);
    assert_eq!(html.matches("wrap-player__indicator--pending").count(), 4);
    assert!(html.contains("Hello 2024"));
    assert!(!html.contains("wrap-player__save"));
}

#[test]
fn overview_slide_marks_the_current_card() {
    fn app(wrap: Wrap) -> Element {
        rsx! {
            DashboardSlide {
                wrap,
                current: 2,
                on_jump: |_| {},
                on_open_dashboard: |_| {},
            }
        }
    }

    let html = render(app, five());
    assert_eq!(html.matches("overview-card--current").count(), 1);
    assert!(html.contains("Best sellers"));
}
