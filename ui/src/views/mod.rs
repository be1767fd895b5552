mod home;
mod wrap;

pub use home::Home;
pub use wrap::WrapView;
