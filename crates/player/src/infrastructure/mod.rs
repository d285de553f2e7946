pub mod config;
pub mod platform;
pub mod submission;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

use std::future::Future;

/// Spawn a task on the Dioxus runtime of the current component.
///
/// The task is dropped with the component that spawned it.
pub fn spawn_task<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}
