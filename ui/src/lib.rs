//! Shared UI crate for Yearwrap: the slide model, registry, builder, player
//! and dashboards, plus the views both launchers route to.

pub mod builder;
pub mod core;
pub mod dashboard;
pub mod error;
pub mod i18n;
pub mod player;
pub mod renderers;
pub mod share;
pub mod slides;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

pub use error::WrapError;
pub use slides::{Slide, SlideKind, SlidePayload, SlideRegistry, Wrap};
