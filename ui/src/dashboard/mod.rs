//! The two "everything at once" surfaces: the full grid with its expand
//! overlay, and the compact overview card shown inside the player.

pub mod grid;
pub mod summary;
pub mod view;

pub use grid::{grid_slides, ExpandedSlide};
pub use summary::{summary_cards, DashboardSlide, SummaryCard};
pub use view::WrapDashboard;
