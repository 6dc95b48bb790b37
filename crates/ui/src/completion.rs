use std::sync::Arc;

use course_core::model::{CompletionSet, CompletionState};
use dioxus::prelude::*;
use futures_util::StreamExt;
use services::CompletionService;
use tracing::{debug, error};

/// Shared completion store for the component tree.
///
/// Starts `Uninitialized`; the provider loads the persisted set once after
/// the first render and flips to `Ready`.
///
/// Writes go through a queue owned by the provider's scope, so they outlive
/// the component that toggled and land in the order they were issued.
#[derive(Clone)]
pub struct CompletionHandle {
    state: Signal<CompletionState>,
    service: Arc<CompletionService>,
    writes: Coroutine<PendingWrite>,
}

struct PendingWrite {
    lesson_id: String,
    set: CompletionSet,
}

impl PartialEq for CompletionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && Arc::ptr_eq(&self.service, &other.service)
    }
}

impl CompletionHandle {
    #[must_use]
    pub fn state(&self) -> CompletionState {
        self.state.read().clone()
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state.read().is_ready()
    }

    #[must_use]
    pub fn is_complete(&self, lesson_id: &str) -> bool {
        self.state.read().is_complete(lesson_id)
    }

    /// Flip `lesson_id` in memory, then persist in the background.
    ///
    /// Ignored while the stored set has not been loaded yet, so a stale empty
    /// set can never overwrite saved progress.
    pub fn toggle(&self, lesson_id: &str) {
        let next = match &*self.state.peek() {
            CompletionState::Ready(set) => set.toggled(lesson_id),
            CompletionState::Uninitialized => {
                debug!(lesson_id, "toggle before completion loaded; ignored");
                return;
            }
        };

        let mut state = self.state;
        state.set(CompletionState::Ready(next.clone()));

        self.writes.send(PendingWrite {
            lesson_id: lesson_id.to_string(),
            set: next,
        });
    }
}

/// Install the completion store in context and start the deferred load.
pub fn use_completion_provider(service: Arc<CompletionService>) -> CompletionHandle {
    let state = use_signal(|| CompletionState::Uninitialized);

    let writer = Arc::clone(&service);
    let writes = use_coroutine(move |mut rx: UnboundedReceiver<PendingWrite>| {
        let service = Arc::clone(&writer);
        async move {
            while let Some(PendingWrite { lesson_id, set }) = rx.next().await {
                if let Err(err) = service.persist(&set).await {
                    error!(lesson_id, error = %err, "error saving completion status");
                }
            }
        }
    });

    let handle = use_context_provider(|| CompletionHandle {
        state,
        service,
        writes,
    });

    let loader = handle.clone();
    use_future(move || {
        let service = Arc::clone(&loader.service);
        let mut state = loader.state;
        async move {
            let (set, outcome) = service.load_with_outcome().await;
            debug!(?outcome, "completion loaded");
            state.set(CompletionState::Ready(set));
        }
    });

    handle
}

#[must_use]
pub fn use_completion() -> CompletionHandle {
    use_context::<CompletionHandle>()
}
