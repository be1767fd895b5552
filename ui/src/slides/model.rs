//! The slide record and the closed set of slide kinds.
//!
//! Kinds and payload variants are declared together in one table so a kind
//! can never be paired with the wrong payload shape. Decoding from JSON is
//! total: unknown tags and undecodable payloads are kept as dedicated
//! variants instead of failing the whole wrap.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::payload::{
    BusiestMonthPayload, ChannelPayload, DashboardPayload, HeatmapPayload, IntroPayload,
    RankingPayload, RatePayload, RecapPayload, SectionPayload, StatPayload,
};

macro_rules! slide_kinds {
    ($( $variant:ident => $tag:literal ($payload:ty) ),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum SlideKind {
            $( $variant ),+
        }

        impl SlideKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [SlideKind] = &[ $( SlideKind::$variant ),+ ];

            pub fn tag(self) -> &'static str {
                match self {
                    $( SlideKind::$variant => $tag ),+
                }
            }

            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $( $tag => Some(SlideKind::$variant), )+
                    _ => None,
                }
            }
        }

        #[derive(Debug, Clone, PartialEq)]
        pub enum SlidePayload {
            $( $variant($payload), )+
            /// A tag this build does not know. Rendered as nothing.
            Unknown { tag: String, raw: Value },
            /// A known tag whose payload failed to decode. `raw` is kept so
            /// saving the wrap writes the payload back unchanged.
            Malformed { kind: SlideKind, reason: String, raw: Value },
        }

        impl SlidePayload {
            pub fn kind(&self) -> Option<SlideKind> {
                match self {
                    $( SlidePayload::$variant(_) => Some(SlideKind::$variant), )+
                    SlidePayload::Unknown { .. } => None,
                    SlidePayload::Malformed { kind, .. } => Some(*kind),
                }
            }

            pub fn tag(&self) -> &str {
                match self {
                    SlidePayload::Unknown { tag, .. } => tag.as_str(),
                    other => other.kind().map(SlideKind::tag).unwrap_or_default(),
                }
            }

            fn decode(tag: &str, raw: Value) -> Self {
                let raw = if raw.is_null() { Value::Object(Default::default()) } else { raw };
                match tag {
                    $(
                        $tag => match <$payload>::deserialize(&raw) {
                            Ok(payload) => SlidePayload::$variant(payload),
                            Err(err) => SlidePayload::Malformed {
                                kind: SlideKind::$variant,
                                reason: err.to_string(),
                                raw,
                            },
                        },
                    )+
                    _ => SlidePayload::Unknown { tag: tag.to_string(), raw },
                }
            }

            fn encode(&self) -> Value {
                match self {
                    $( SlidePayload::$variant(payload) => {
                        serde_json::to_value(payload).unwrap_or(Value::Null)
                    } )+
                    SlidePayload::Unknown { raw, .. } | SlidePayload::Malformed { raw, .. } => {
                        raw.clone()
                    }
                }
            }
        }
    };
}

slide_kinds! {
    Intro => "intro" (IntroPayload),
    SectionDivider => "sectionDivider" (SectionPayload),
    Dashboard => "dashboard" (DashboardPayload),
    Recap => "recap" (RecapPayload),
    BigNumber => "bigNumber" (StatPayload),
    TotalRevenue => "totalRevenue" (StatPayload),
    OrderCount => "orderCount" (StatPayload),
    FollowerGrowth => "followerGrowth" (StatPayload),
    AdSpend => "adSpend" (StatPayload),
    RefundRate => "refundRate" (RatePayload),
    EngagementRate => "engagementRate" (RatePayload),
    ConversionRate => "conversionRate" (RatePayload),
    TopList => "topList" (RankingPayload),
    TopProducts => "topProducts" (RankingPayload),
    TopPosts => "topPosts" (RankingPayload),
    TopCampaigns => "topCampaigns" (RankingPayload),
    Heatmap => "heatmap" (HeatmapPayload),
    CategoryHeatmap => "categoryHeatmap" (HeatmapPayload),
    BusiestMonth => "busiestMonth" (BusiestMonthPayload),
    ChannelBySpend => "channelBySpend" (ChannelPayload),
    ChannelByLeads => "channelByLeads" (ChannelPayload),
}

impl SlideKind {
    /// Intro, section dividers, the dashboard slide and the recap frame the
    /// narrative rather than carry a metric; the full dashboard skips them.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            SlideKind::Intro | SlideKind::SectionDivider | SlideKind::Dashboard | SlideKind::Recap
        )
    }
}

/// One card of the wrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSlide", into = "RawSlide")]
pub struct Slide {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub payload: SlidePayload,
}

impl Slide {
    pub fn new(id: impl Into<String>, title: impl Into<String>, payload: SlidePayload) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            payload,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// `None` for tags this build does not recognise.
    pub fn kind(&self) -> Option<SlideKind> {
        self.payload.kind()
    }

    pub fn tag(&self) -> &str {
        self.payload.tag()
    }

    pub fn is_structural(&self) -> bool {
        self.kind().is_some_and(SlideKind::is_structural)
    }
}

/// Wire shape: `{ id, type, title, subtitle?, payload }`.
#[derive(Serialize, Deserialize)]
struct RawSlide {
    id: String,
    #[serde(rename = "type")]
    tag: String,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(default)]
    payload: Value,
}

impl From<RawSlide> for Slide {
    fn from(raw: RawSlide) -> Self {
        Self {
            payload: SlidePayload::decode(&raw.tag, raw.payload),
            id: raw.id,
            title: raw.title,
            subtitle: raw.subtitle,
        }
    }
}

impl From<Slide> for RawSlide {
    fn from(slide: Slide) -> Self {
        Self {
            tag: slide.tag().to_string(),
            payload: slide.payload.encode(),
            id: slide.id,
            title: slide.title,
            subtitle: slide.subtitle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tags_resolve_back_to_their_kind() {
        for kind in SlideKind::ALL {
            assert_eq!(SlideKind::from_tag(kind.tag()), Some(*kind));
        }
        assert_eq!(SlideKind::from_tag("confetti"), None);
    }

    #[test]
    fn structural_kinds_are_exactly_the_frame() {
        let structural: Vec<_> = SlideKind::ALL
            .iter()
            .copied()
            .filter(|kind| kind.is_structural())
            .collect();
        assert_eq!(
            structural,
            vec![
                SlideKind::Intro,
                SlideKind::SectionDivider,
                SlideKind::Dashboard,
                SlideKind::Recap
            ]
        );
    }

    #[test]
    fn decodes_typed_payload() {
        let slide: Slide = serde_json::from_value(json!({
            "id": "rev",
            "type": "totalRevenue",
            "title": "Revenue",
            "payload": { "value": 1200.0, "unit": "currency", "currency": "EUR" }
        }))
        .unwrap();

        assert_eq!(slide.kind(), Some(SlideKind::TotalRevenue));
        match slide.payload {
            SlidePayload::TotalRevenue(stat) => {
                assert_eq!(stat.value, Some(1200.0));
                assert_eq!(stat.currency.as_deref(), Some("EUR"));
                assert_eq!(stat.previous, None);
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn unknown_tag_is_preserved_not_rejected() {
        let slide: Slide = serde_json::from_value(json!({
            "id": "x",
            "type": "holographicGlobe",
            "title": "Future slide",
            "payload": { "spin": true }
        }))
        .unwrap();

        assert_eq!(slide.kind(), None);
        assert_eq!(slide.tag(), "holographicGlobe");
        assert!(!slide.is_structural());

        let round = serde_json::to_value(&slide).unwrap();
        assert_eq!(round["type"], "holographicGlobe");
        assert_eq!(round["payload"]["spin"], true);
    }

    #[test]
    fn wrong_payload_shape_becomes_malformed() {
        let slide: Slide = serde_json::from_value(json!({
            "id": "top",
            "type": "topProducts",
            "title": "Top products",
            "payload": { "items": "not a list" }
        }))
        .unwrap();

        assert_eq!(slide.kind(), Some(SlideKind::TopProducts));
        assert!(matches!(slide.payload, SlidePayload::Malformed { .. }));
    }

    #[test]
    fn malformed_payload_survives_save_and_reload() {
        let original = json!({
            "id": "top",
            "type": "topProducts",
            "title": "Top products",
            "payload": { "items": "not a list" }
        });
        let slide: Slide = serde_json::from_value(original.clone()).unwrap();

        let saved = serde_json::to_value(&slide).unwrap();
        assert_eq!(saved["payload"], original["payload"]);

        let reloaded: Slide = serde_json::from_value(saved).unwrap();
        assert!(matches!(
            reloaded.payload,
            SlidePayload::Malformed { kind: SlideKind::TopProducts, .. }
        ));
        assert_eq!(reloaded, slide);
    }

    #[test]
    fn missing_payload_uses_defaults() {
        let slide: Slide = serde_json::from_value(json!({
            "id": "dash",
            "type": "dashboard",
            "title": "Overview"
        }))
        .unwrap();
        assert_eq!(slide.payload, SlidePayload::Dashboard(DashboardPayload {}));
        assert!(slide.is_structural());
    }
}
