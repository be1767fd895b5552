//! Per-slide progress indicator states.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    Complete,
    /// The current slide; its fill animates over the dwell duration.
    Active,
    Pending,
}

impl IndicatorState {
    pub fn css_modifier(self) -> &'static str {
        match self {
            IndicatorState::Complete => "complete",
            IndicatorState::Active => "active",
            IndicatorState::Pending => "pending",
        }
    }
}

/// One state per slide: everything before `index` is complete.
pub fn indicator_states(len: usize, index: usize) -> Vec<IndicatorState> {
    (0..len)
        .map(|i| match i.cmp(&index) {
            std::cmp::Ordering::Less => IndicatorState::Complete,
            std::cmp::Ordering::Equal => IndicatorState::Active,
            std::cmp::Ordering::Greater => IndicatorState::Pending,
        })
        .collect()
}
