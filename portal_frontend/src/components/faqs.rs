use leptos::prelude::*;
use leptos_meta::Title;
use portal_api_types::{EntityId, FaqQuery};
use portal_client::views::faqs::{categories, display_order};
use portal_client::views::news::{same_category, ALL_CATEGORIES_VALUE};

use crate::components::status::{Empty, FetchStatus};
use crate::hooks::use_faqs;

#[component]
pub fn FaqPage() -> impl IntoView {
    // Fetch every category once; the selector filters locally so its options
    // don't shrink to the current selection.
    let faqs = use_faqs(Signal::derive(FaqQuery::default));
    let (category, set_category) = signal(None::<String>);
    let expanded = RwSignal::new(None::<EntityId>);

    let ordered = Memo::new(move |_| faqs.data().map(display_order).unwrap_or_default());
    let category_options = Memo::new(move |_| ordered.with(|faqs| categories(faqs)));

    view! {
        <Title text="Perguntas frequentes"/>

        <div class="flex flex-wrap items-center justify-between gap-4 my-6">
            <h1 class="text-3xl font-bold text-gray-900 dark:text-white">"Perguntas frequentes"</h1>
            <select
                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_category.set((value != ALL_CATEGORIES_VALUE).then_some(value));
                }
            >
                <option value=ALL_CATEGORIES_VALUE>"Todas"</option>
                {move || {
                    category_options
                        .get()
                        .into_iter()
                        .map(|category| view! { <option value=category.clone()>{category.clone()}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>
        </div>

        <FetchStatus fetch=faqs/>

        {move || {
            let selected = category.get();
            let visible = ordered
                .get()
                .into_iter()
                .filter(|faq| match &selected {
                    None => true,
                    Some(selected) => faq
                        .category
                        .as_deref()
                        .is_some_and(|category| same_category(category, selected)),
                })
                .collect::<Vec<_>>();

            if faqs.data().is_some() && visible.is_empty() {
                return view! { <Empty message="Nenhuma pergunta cadastrada."/> }.into_any();
            }

            let items = visible
                .into_iter()
                .map(|faq| {
                    let id = faq.id.clone();
                    let is_open = {
                        let id = id.clone();
                        move || expanded.with(|expanded| expanded.as_ref() == Some(&id))
                    };
                    let is_open_answer = is_open.clone();
                    view! {
                        <div class="border-b border-gray-200 dark:border-gray-700">
                            <button
                                type="button"
                                class="flex items-center justify-between w-full py-5 font-medium text-left text-gray-700 dark:text-gray-300"
                                aria-expanded=move || is_open().to_string()
                                on:click=move |_| {
                                    let id = id.clone();
                                    expanded.update(|expanded| {
                                        *expanded = if expanded.as_ref() == Some(&id) { None } else { Some(id) };
                                    });
                                }
                            >
                                <span>{faq.question.clone()}</span>
                            </button>
                            <div class=move || if is_open_answer() { "pb-5" } else { "hidden" }>
                                <p class="whitespace-pre-line text-gray-500 dark:text-gray-400">{faq.answer.clone()}</p>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>();

            view! { <div>{items}</div> }.into_any()
        }}
    }
}
