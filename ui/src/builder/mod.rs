//! Turns a metrics bundle into the ordered slide sequence of one wrap.
//!
//! Order is fixed: intro, the store, social and advertising sections, the
//! dashboard slide, then the recap. A metric group missing from the bundle
//! drops its slide, and a section with no slides drops its divider too.
//! The output depends only on the bundle.

mod bundle;
mod heatmap;

pub use bundle::{CategoryRecord, MetricsBundle};
pub use heatmap::build_heatmap_layout;

use time::Month;
use tracing::debug;

use crate::error::WrapError;
use crate::slides::payload::{
    BusiestMonthPayload, ChannelMetric, ChannelPayload, DashboardPayload, Domain, HeatmapPayload,
    Highlight, IntroPayload, MonthlyActivity, RecapPayload, SectionPayload, StatPayload, Unit,
};
use crate::slides::{Slide, SlidePayload, Wrap};

/// Build and validate the wrap for `bundle`.
pub fn build_wrap(bundle: &MetricsBundle) -> Result<Wrap, WrapError> {
    Wrap::new(build_slides(bundle))
}

pub fn build_slides(bundle: &MetricsBundle) -> Vec<Slide> {
    let mut slides = vec![Slide::new(
        "intro",
        format!("{}, here's your {}", bundle.user, bundle.year),
        SlidePayload::Intro(IntroPayload {
            user: bundle.user.clone(),
            year: bundle.year,
        }),
    )
    .with_subtitle("A look back at the numbers behind your year")];

    push_section(&mut slides, Domain::Ecommerce, ecommerce_slides(bundle));
    push_section(&mut slides, Domain::Social, social_slides(bundle));
    push_section(&mut slides, Domain::Advertising, advertising_slides(bundle));

    slides.push(
        Slide::new(
            "dashboard",
            "Your year at a glance",
            SlidePayload::Dashboard(DashboardPayload {}),
        )
        .with_subtitle("Pick any card to jump straight to it"),
    );
    slides.push(
        Slide::new(
            "recap",
            "That's a wrap",
            SlidePayload::Recap(RecapPayload {
                highlights: recap_highlights(bundle),
            }),
        )
        .with_subtitle(format!("See you in {}", bundle.year + 1)),
    );

    debug!(
        user = %bundle.user,
        year = bundle.year,
        slides = slides.len(),
        "built wrap slide sequence"
    );
    slides
}

fn push_section(slides: &mut Vec<Slide>, domain: Domain, section: Vec<Slide>) {
    if section.is_empty() {
        return;
    }

    let (id, title, blurb) = match domain {
        Domain::Ecommerce => (
            "section-ecommerce",
            "Your store",
            "Sales, orders and the products that carried the year",
        ),
        Domain::Social => (
            "section-social",
            "Your audience",
            "How your community grew and what it loved",
        ),
        Domain::Advertising => (
            "section-advertising",
            "Your campaigns",
            "Where the budget went and what it brought back",
        ),
    };

    slides.push(Slide::new(
        id,
        title,
        SlidePayload::SectionDivider(SectionPayload {
            domain: Some(domain),
            blurb: Some(blurb.to_string()),
        }),
    ));
    slides.extend(section);
}

fn ecommerce_slides(bundle: &MetricsBundle) -> Vec<Slide> {
    let mut slides = Vec::new();

    if let Some(revenue) = &bundle.revenue {
        slides.push(
            Slide::new(
                "ecommerce-revenue",
                "Total revenue",
                SlidePayload::TotalRevenue(revenue.clone()),
            )
            .with_subtitle("Everything your store brought in"),
        );
    }
    if let Some(orders) = &bundle.orders {
        slides.push(
            Slide::new(
                "ecommerce-orders",
                "Orders placed",
                SlidePayload::OrderCount(orders.clone()),
            )
            .with_subtitle("Every checkout, counted"),
        );
    }
    if let Some(refunds) = &bundle.refund_rate {
        slides.push(
            Slide::new(
                "ecommerce-refund-rate",
                "Refund rate",
                SlidePayload::RefundRate(refunds.clone()),
            )
            .with_subtitle("Share of orders that came back"),
        );
    }
    if let Some(conversion) = &bundle.conversion_rate {
        slides.push(
            Slide::new(
                "ecommerce-conversion-rate",
                "Conversion rate",
                SlidePayload::ConversionRate(conversion.clone()),
            )
            .with_subtitle("Visitors who turned into buyers"),
        );
    }
    if let Some(products) = &bundle.top_products {
        slides.push(Slide::new(
            "ecommerce-top-products",
            "Your best sellers",
            SlidePayload::TopProducts(products.clone()),
        ));
    }
    if let Some(categories) = &bundle.category_sales {
        let tiles = build_heatmap_layout(categories);
        if !tiles.is_empty() {
            slides.push(
                Slide::new(
                    "ecommerce-category-heatmap",
                    "Where the revenue came from",
                    SlidePayload::CategoryHeatmap(HeatmapPayload { tiles }),
                )
                .with_subtitle("Each tile is sized by its share of sales"),
            );
        }
    }

    slides
}

fn social_slides(bundle: &MetricsBundle) -> Vec<Slide> {
    let mut slides = Vec::new();

    if let Some(followers) = &bundle.followers {
        slides.push(
            Slide::new(
                "social-followers",
                "Follower growth",
                SlidePayload::FollowerGrowth(followers.clone()),
            )
            .with_subtitle("The people who chose to keep up with you"),
        );
    }
    if let Some(engagement) = &bundle.engagement_rate {
        slides.push(Slide::new(
            "social-engagement-rate",
            "Engagement rate",
            SlidePayload::EngagementRate(engagement.clone()),
        ));
    }
    if let Some(posts) = &bundle.top_posts {
        slides.push(Slide::new(
            "social-top-posts",
            "Posts that landed",
            SlidePayload::TopPosts(posts.clone()),
        ));
    }
    if let Some(busiest) = bundle.profile_activity.as_deref().and_then(busiest_month_payload) {
        let subtitle = Month::try_from(busiest.month)
            .map(|month| format!("Profile views peaked in {month}"))
            .unwrap_or_default();
        slides.push(
            Slide::new(
                "social-busiest-month",
                "Your busiest month",
                SlidePayload::BusiestMonth(busiest),
            )
            .with_subtitle(subtitle),
        );
    }

    slides
}

fn advertising_slides(bundle: &MetricsBundle) -> Vec<Slide> {
    let mut slides = Vec::new();

    if let Some(spend) = &bundle.ad_spend {
        slides.push(Slide::new(
            "ads-spend",
            "Ad spend",
            SlidePayload::AdSpend(spend.clone()),
        ));
    }
    if let Some(channels) = &bundle.channels {
        let payload = |metric| ChannelPayload {
            metric,
            currency: bundle.currency.clone(),
            channels: channels.clone(),
        };
        slides.push(
            Slide::new(
                "ads-channels-spend",
                "Spend by channel",
                SlidePayload::ChannelBySpend(payload(ChannelMetric::Spend)),
            )
            .with_subtitle("Where the budget went"),
        );
        slides.push(
            Slide::new(
                "ads-channels-leads",
                "Leads by channel",
                SlidePayload::ChannelByLeads(payload(ChannelMetric::Leads)),
            )
            .with_subtitle("Where new customers came from"),
        );
    }
    if let Some(campaigns) = &bundle.top_campaigns {
        slides.push(Slide::new(
            "ads-top-campaigns",
            "Top campaigns",
            SlidePayload::TopCampaigns(campaigns.clone()),
        ));
    }

    slides
}

/// The month with the most views. Ties go to the earlier month; entries
/// outside 1..=12 are ignored. `None` when nothing usable remains.
pub fn busiest_month(series: &[MonthlyActivity]) -> Option<MonthlyActivity> {
    series
        .iter()
        .copied()
        .filter(|entry| (1..=12).contains(&entry.month))
        .fold(None, |best, entry| match best {
            Some(current)
                if current.views > entry.views
                    || (current.views == entry.views && current.month <= entry.month) =>
            {
                Some(current)
            }
            _ => Some(entry),
        })
}

fn busiest_month_payload(series: &[MonthlyActivity]) -> Option<BusiestMonthPayload> {
    let peak = busiest_month(series)?;
    let mut months: Vec<MonthlyActivity> = series
        .iter()
        .copied()
        .filter(|entry| (1..=12).contains(&entry.month))
        .collect();
    months.sort_by_key(|entry| entry.month);

    Some(BusiestMonthPayload {
        month: peak.month,
        views: peak.views,
        series: months,
    })
}

fn recap_highlights(bundle: &MetricsBundle) -> Vec<Highlight> {
    let stat = |label: &str, group: &StatPayload| Highlight {
        label: label.to_string(),
        value: group.value,
        unit: group.unit,
        currency: group.currency.clone().or_else(|| bundle.currency.clone()),
        text: None,
    };

    let mut highlights = Vec::new();
    if let Some(revenue) = &bundle.revenue {
        highlights.push(stat("Revenue", revenue));
    }
    if let Some(orders) = &bundle.orders {
        highlights.push(stat("Orders", orders));
    }
    if let Some(followers) = &bundle.followers {
        highlights.push(stat("Followers", followers));
    }
    if let Some(spend) = &bundle.ad_spend {
        highlights.push(stat("Ad spend", spend));
    }
    if let Some(peak) = bundle.profile_activity.as_deref().and_then(busiest_month) {
        if let Ok(month) = Month::try_from(peak.month) {
            highlights.push(Highlight {
                label: "Busiest month".to_string(),
                value: Some(peak.views as f64),
                unit: Unit::Count,
                currency: None,
                text: Some(month.to_string()),
            });
        }
    }
    highlights
}
