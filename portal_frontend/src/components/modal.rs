use leptos::prelude::*;

/// Centered dialog over a dimmed backdrop; clicking the backdrop or the close
/// button runs `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-40 flex items-center justify-center bg-gray-900/50 p-4"
            on:click=move |_| on_close.run(())
        >
            <div
                class="relative w-full max-w-2xl max-h-full overflow-y-auto bg-white rounded-lg shadow dark:bg-gray-700"
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex items-center justify-between p-4 md:p-5 border-b rounded-t dark:border-gray-600">
                    <h3 class="text-xl font-semibold text-gray-900 dark:text-white">{title}</h3>
                    <button
                        type="button"
                        class="text-gray-400 bg-transparent hover:bg-gray-200 hover:text-gray-900 rounded-lg text-sm w-8 h-8 inline-flex justify-center items-center dark:hover:bg-gray-600 dark:hover:text-white"
                        on:click=move |_| on_close.run(())
                    >
                        <svg class="w-3 h-3" aria-hidden="true" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 14 14">
                            <path stroke="currentColor" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="m1 1 6 6m0 0 6 6M7 7l6-6M7 7l-6 6"/>
                        </svg>
                        <span class="sr-only">"Fechar"</span>
                    </button>
                </div>
                <div class="p-4 md:p-5 space-y-4 text-gray-700 dark:text-gray-300">
                    {children()}
                </div>
            </div>
        </div>
    }
}
