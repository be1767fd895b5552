//! Single shared mapping from slide kind to its renderer.
//!
//! The lookup is total: unknown tags resolve to [`renderers::EMPTY`] and
//! payloads that failed to decode resolve to [`renderers::PLACEHOLDER`].
//! Several kinds may share one renderer (`register` takes a list of kinds).

use std::collections::HashMap;
use std::fmt;

use dioxus::prelude::*;
use once_cell::sync::Lazy;

use crate::renderers;

use super::{Slide, SlideKind, SlidePayload};

/// Pure render function: reads only the slide, never navigation state.
pub type SlideRenderer = fn(&Slide) -> Element;

/// A named renderer. The name identifies the visual treatment so aliases can
/// be inspected without comparing function pointers.
#[derive(Clone, Copy)]
pub struct SlideView {
    pub name: &'static str,
    render: SlideRenderer,
}

impl SlideView {
    pub const fn new(name: &'static str, render: SlideRenderer) -> Self {
        Self { name, render }
    }

    pub fn render(&self, slide: &Slide) -> Element {
        (self.render)(slide)
    }
}

impl PartialEq for SlideView {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for SlideView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SlideView").field(&self.name).finish()
    }
}

static SHARED: Lazy<SlideRegistry> = Lazy::new(SlideRegistry::with_defaults);

#[derive(Debug, Default)]
pub struct SlideRegistry {
    views: HashMap<SlideKind, SlideView>,
}

impl SlideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in renderer installed.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        renderers::install(&mut registry);
        registry
    }

    /// Process-wide registry used by the player and both dashboards.
    pub fn shared() -> &'static SlideRegistry {
        &SHARED
    }

    /// Register `view` under every kind in `kinds`. Later registrations win.
    pub fn register(&mut self, kinds: &[SlideKind], view: SlideView) -> &mut Self {
        for kind in kinds {
            self.views.insert(*kind, view);
        }
        self
    }

    pub fn lookup(&self, tag: &str) -> SlideView {
        SlideKind::from_tag(tag)
            .and_then(|kind| self.views.get(&kind).copied())
            .unwrap_or(renderers::EMPTY)
    }

    pub fn view_for(&self, slide: &Slide) -> SlideView {
        match &slide.payload {
            SlidePayload::Malformed { .. } => renderers::PLACEHOLDER,
            SlidePayload::Unknown { .. } => renderers::EMPTY,
            payload => payload
                .kind()
                .and_then(|kind| self.views.get(&kind).copied())
                .unwrap_or(renderers::EMPTY),
        }
    }

    pub fn render(&self, slide: &Slide) -> Element {
        self.view_for(slide).render(slide)
    }

    /// Kinds with no renderer; empty for [`SlideRegistry::with_defaults`].
    pub fn missing_kinds(&self) -> Vec<SlideKind> {
        SlideKind::ALL
            .iter()
            .copied()
            .filter(|kind| !self.views.contains_key(kind))
            .collect()
    }
}
