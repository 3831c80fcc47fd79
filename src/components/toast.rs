//! Transient status toast, auto-dismissed after a few seconds.

use leptos::prelude::*;

/// Visual kind of a toast message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A toast message with its kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }
}

/// Renders `message` when set and clears it after three seconds. Pages own
/// the signal so they can both set and pre-empt messages.
#[component]
pub fn Toast(message: RwSignal<Option<ToastMessage>>) -> impl IntoView {
    Effect::new(move || {
        if message.get().is_some() {
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(3_000).await;
                message.set(None);
            });
        }
    });

    move || {
        message.get().map(|m| {
            let class = match m.kind {
                ToastKind::Success => "toast toast--success",
                ToastKind::Error => "toast toast--error",
            };
            view! { <div class=class role="status">{m.text}</div> }
        })
    }
}
