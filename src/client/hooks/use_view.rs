use dioxus::prelude::*;

use crate::app::{
    view::{spawn_view, ViewHandle, ViewModel},
    AppContext,
};

/// Starts a view model once per component and mirrors its snapshots into a signal.
///
/// The view stops when the component is dropped, since the handle is its last sender.
pub fn use_view<M, F>(init: F) -> (ViewHandle<M>, Signal<M::Snapshot>)
where
    M: ViewModel,
    F: FnOnce(&AppContext) -> M,
{
    let ctx = use_context::<AppContext>();
    let handle = use_hook(|| spawn_view(init(&ctx), ctx.clone()));
    let mut snapshot = use_signal(|| handle.snapshot());

    let watched = handle.clone();
    use_future(move || {
        let mut receiver = watched.subscribe();
        async move {
            while receiver.changed().await.is_ok() {
                let next = receiver.borrow_and_update().clone();
                snapshot.set(next);
            }
        }
    });

    (handle, snapshot)
}
