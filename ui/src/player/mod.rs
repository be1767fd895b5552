pub mod engine;
pub mod progress;
pub mod view;

pub use engine::{Navigation, PlayerConfig, PlayerEngine, ScheduledAdvance};
pub use progress::IndicatorState;
pub use view::{use_player, PlayerEvent, PlayerHandle, WrapPlayer};
