//! The ordered, immutable slide sequence shared by every view.

use std::collections::HashSet;
use std::rc::Rc;

use crate::error::WrapError;

use super::Slide;

/// A complete wrap: at least one slide, unique ids, fixed order.
///
/// Cloning is cheap; the player, both dashboards and the export path all
/// read the same allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Wrap {
    slides: Rc<[Slide]>,
}

impl Wrap {
    pub fn new(slides: Vec<Slide>) -> Result<Self, WrapError> {
        if slides.is_empty() {
            return Err(WrapError::EmptyWrap);
        }

        let mut seen = HashSet::with_capacity(slides.len());
        for slide in &slides {
            if !seen.insert(slide.id.as_str()) {
                return Err(WrapError::DuplicateSlideId(slide.id.clone()));
            }
        }

        Ok(Self {
            slides: slides.into(),
        })
    }

    /// Parse a pre-built slide array (`[{ id, type, title, ... }]`).
    pub fn from_json(json: &str) -> Result<Self, WrapError> {
        let slides: Vec<Slide> = serde_json::from_str(json)?;
        Self::new(slides)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    pub fn find(&self, id: &str) -> Option<&Slide> {
        self.slides.iter().find(|slide| slide.id == id)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|slide| slide.id == id)
    }
}
