use std::fmt::Display;

use leptos::logging::error;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    Neutral,
    Ok,
    Err,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn neutral(text: String) -> Self {
        Status {
            kind: StatusKind::Neutral,
            text,
        }
    }

    pub fn ok(text: String) -> Self {
        Status {
            kind: StatusKind::Ok,
            text,
        }
    }

    pub fn err(text: String) -> Self {
        Status {
            kind: StatusKind::Err,
            text,
        }
    }
}

pub trait StatusContext {
    fn clear(&self);
    fn info(&self, msg: &str);
    fn success(&self, msg: &str);
    /// Shows `msg` to the user and sends the cause to the console.
    fn error(&self, msg: &str, e: impl Display);
}

impl StatusContext for RwSignal<Status> {
    fn clear(&self) {
        self.set(Status::default());
    }

    fn info(&self, msg: &str) {
        self.set(Status::neutral(msg.to_string()));
    }

    fn success(&self, msg: &str) {
        self.set(Status::ok(msg.to_string()));
    }

    fn error(&self, msg: &str, e: impl Display) {
        error!("{}: {}", msg, e);
        self.set(Status::err(msg.to_string()));
    }
}

#[component]
pub fn StatusLine(status: RwSignal<Status>) -> impl IntoView {
    view! {
        <p
            id="status"
            class="status min-h-6 p-1 rounded-md"
            class:ok=move || status.read().kind == StatusKind::Ok
            class:err=move || status.read().kind == StatusKind::Err
            role="status"
            aria-live="polite"
        >
            {move || status.read().text.clone()}
        </p>
    }
}
