use crate::slides::{Slide, Wrap};

/// Slides shown in the full grid: everything except structural kinds, in
/// sequence order.
pub fn grid_slides(wrap: &Wrap) -> Vec<&Slide> {
    wrap.iter().filter(|slide| !slide.is_structural()).collect()
}

/// The slide currently shown in the expand overlay, if any.
///
/// Held by id rather than position because the grid is a filtered view of
/// the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSlide(Option<String>);

impl ExpandedSlide {
    pub fn none() -> Self {
        Self(None)
    }

    /// Replaces whatever was expanded; only one slide is open at a time.
    pub fn expand(&mut self, id: impl Into<String>) {
        self.0 = Some(id.into());
    }

    pub fn close(&mut self) {
        self.0 = None;
    }

    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }

    /// Escape dismisses the overlay. Returns whether the key was consumed.
    pub fn close_on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close();
            return true;
        }
        false
    }

    pub fn id(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn resolve<'a>(&self, wrap: &'a Wrap) -> Option<&'a Slide> {
        self.id().and_then(|id| wrap.find(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::SlidePayload;

    fn wrap() -> Wrap {
        Wrap::from_json(
            r#"[
                { "id": "intro", "type": "intro", "title": "Hi", "payload": {} },
                { "id": "sec", "type": "sectionDivider", "title": "Shop", "payload": {} },
                { "id": "rev", "type": "bigNumber", "title": "Revenue", "payload": { "value": 10 } },
                { "id": "top", "type": "topList", "title": "Top", "payload": { "items": [] } },
                { "id": "dash", "type": "dashboard", "title": "Overview", "payload": {} },
                { "id": "mystery", "type": "hologram", "title": "?", "payload": {} },
                { "id": "recap", "type": "recap", "title": "Recap", "payload": {} }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn structural_slides_are_excluded_in_order() {
        let wrap = wrap();
        let ids: Vec<&str> = grid_slides(&wrap).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["rev", "top", "mystery"]);
    }

    #[test]
    fn unknown_kinds_still_occupy_a_cell() {
        let wrap = wrap();
        let cells = grid_slides(&wrap);
        assert!(matches!(cells[2].payload, SlidePayload::Unknown { .. }));
    }

    #[test]
    fn expanding_replaces_previous_selection() {
        let wrap = wrap();
        let mut expanded = ExpandedSlide::none();
        assert!(expanded.resolve(&wrap).is_none());

        expanded.expand("rev");
        expanded.expand("top");
        assert_eq!(expanded.resolve(&wrap).map(|s| s.title.as_str()), Some("Top"));

        expanded.close();
        assert!(!expanded.is_open());
    }

    #[test]
    fn only_escape_dismisses_an_open_overlay() {
        let mut expanded = ExpandedSlide::none();
        assert!(!expanded.close_on_key("Escape"));

        expanded.expand("rev");
        assert!(!expanded.close_on_key("Enter"));
        assert!(expanded.is_open());
        assert!(expanded.close_on_key("Escape"));
        assert!(!expanded.is_open());
    }

    #[test]
    fn stale_id_resolves_to_nothing() {
        let mut expanded = ExpandedSlide::none();
        expanded.expand("gone");
        assert!(expanded.is_open());
        assert!(expanded.resolve(&wrap()).is_none());
    }
}
