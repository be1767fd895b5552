//! Slide data model, the renderer registry and the immutable wrap sequence.

mod model;
pub mod payload;
mod registry;
mod wrap;

pub use model::{Slide, SlideKind, SlidePayload};
pub use registry::{SlideRegistry, SlideRenderer, SlideView};
pub use wrap::Wrap;
