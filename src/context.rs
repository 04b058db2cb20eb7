//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after every task write so independent views (summary cards)
    /// re-fetch - read
    pub revision: ReadSignal<u32>,
    /// Bumped after every task write - write
    set_revision: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(revision: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            revision: revision.0,
            set_revision: revision.1,
        }
    }

    /// Signal that tasks changed on the server
    pub fn reload(&self) {
        self.set_revision.update(|v| *v += 1);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
