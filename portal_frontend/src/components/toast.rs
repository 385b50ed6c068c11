use std::time::Duration;

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertLevel};

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    level: AlertLevel,
    message: String,
}

/// Queue of transient notifications, shared through the context.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    fn new() -> Self {
        Toaster {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(AlertLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(AlertLevel::Error, message.into());
    }

    fn push(&self, level: AlertLevel, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, level, message }));

        let toaster = *self;
        set_timeout(move || toaster.dismiss(id), TOAST_LIFETIME);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts
            .try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

pub fn provide_toaster() {
    provide_context(Toaster::new());
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn Toasts() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col w-80">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <Alert level=toast.level message=toast.message class="shadow-lg">
                            <button
                                type="button"
                                class="float-right ms-2 font-bold"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "×"
                            </button>
                        </Alert>
                    }
                }
            />
        </div>
    }
}
