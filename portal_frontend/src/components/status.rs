use leptos::prelude::*;
use portal_client::FetchState;

use crate::components::alert::{Alert, AlertLevel};
use crate::components::button::{Button, SECONDARY_BUTTON};
use crate::hooks::Fetch;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div role="status" class="my-8 space-y-2.5 animate-pulse max-w-lg">
            <div class="h-2.5 bg-gray-200 rounded-full dark:bg-gray-700 w-48"></div>
            <div class="h-2 bg-gray-200 rounded-full dark:bg-gray-700 max-w-[360px]"></div>
            <div class="h-2 bg-gray-200 rounded-full dark:bg-gray-700 max-w-[300px]"></div>
            <span class="sr-only">"Carregando..."</span>
        </div>
    }
}

#[component]
pub fn LoadError(#[prop(into)] message: String, #[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    view! {
        <Alert level=AlertLevel::Error message=message class="my-4">
            <div class="mt-2">
                <Button color_scheme=SECONDARY_BUTTON on_click=move || on_retry.run(())>
                    "Tentar novamente"
                </Button>
            </div>
        </Alert>
    }
}

/// Loading and error chrome for a data hook. Renders nothing once data is
/// loaded; stale data stays visible below while a reload is in flight.
#[component]
pub fn FetchStatus<T>(fetch: Fetch<T>) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    move || {
        fetch.with(|state| match state {
            FetchState::Idle | FetchState::Loading { previous: None } => view! { <Loading/> }.into_any(),
            FetchState::Loading { previous: Some(_) } => view! {
                <p class="my-2 text-sm text-gray-500 dark:text-gray-400">"Atualizando..."</p>
            }
            .into_any(),
            FetchState::Failed { message, .. } => view! {
                <LoadError message=message.clone() on_retry=move |_: ()| fetch.refetch()/>
            }
            .into_any(),
            FetchState::Loaded(_) => ().into_any(),
        })
    }
}

/// Placeholder for a loaded but empty list.
#[component]
pub fn Empty(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <p class="my-8 text-center text-gray-500 dark:text-gray-400">{message}</p>
    }
}
