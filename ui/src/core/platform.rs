//! Runtime glue shared by the web and desktop builds.

use std::future::Future;

use dioxus::prelude::{spawn, Task};

/// Spawn a future on the Dioxus runtime of the current component scope.
///
/// The returned handle can cancel the task; tasks also stop when the owning
/// scope unmounts.
pub fn spawn_future<F>(future: F) -> Task
where
    F: Future<Output = ()> + 'static,
{
    spawn(future)
}
