//! Leptos Toast Notifications
//!
//! Small success/error/info toasts for Leptos apps.
//! `ToastQueue` holds the data, `Toaster` is the reactive handle put in
//! context, `ToastHost` renders the stack.

use leptos::prelude::*;

/// Auto-dismiss delay for success/info toasts
const SHORT_DELAY_MS: u32 = 3_000;
/// Errors stay up longer
const LONG_DELAY_MS: u32 = 5_000;

/// Toast flavour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Info => "ℹ",
        }
    }

    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }

    fn delay_ms(self) -> u32 {
        match self {
            ToastKind::Error => LONG_DELAY_MS,
            _ => SHORT_DELAY_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered toast list, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Reactive toast handle
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message);
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.update(|q| q.dismiss(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        let queue = self.queue;
        gloo_timers::callback::Timeout::new(kind.delay_ms(), move || {
            queue.update(|q| q.dismiss(id));
        })
        .forget();
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a toaster and provide it to the component tree
pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

/// Get the toaster from context
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Fixed-position toast stack. Click a toast to dismiss it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-host">
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| toaster.dismiss(id)>
                            <span class="toast-icon">{toast.kind.icon()}</span>
                            <span class="toast-message">{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
