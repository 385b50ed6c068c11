use leptos::prelude::*;
use leptos_meta::Title;
use portal_api_types::AgendaItem;
use portal_client::views::agenda::{group_by_date, AgendaGroup};
use portal_client::views::format::{day_label, time_of_day, AsLocalDate, DateStyle};
use portal_client::views::today;

use crate::components::badge::{Badge, BadgeLevel};
use crate::components::modal::Modal;
use crate::components::status::{Empty, FetchStatus};
use crate::hooks::use_agenda;

#[component]
pub fn AgendaPage() -> impl IntoView {
    let agenda = use_agenda();
    let today = today();
    let (show_past, set_show_past) = signal(false);
    let selected = RwSignal::new(None::<AgendaItem>);

    let groups = Memo::new(move |_| {
        agenda
            .data()
            .map(|items| group_by_date(items, today))
            .unwrap_or_default()
    });

    view! {
        <Title text="Agenda"/>

        <div class="flex flex-wrap items-center justify-between gap-4 my-6">
            <h1 class="text-3xl font-bold text-gray-900 dark:text-white">"Agenda"</h1>
            <label class="inline-flex items-center cursor-pointer text-sm text-gray-900 dark:text-gray-300">
                <input
                    type="checkbox"
                    class="w-4 h-4 me-2 text-blue-600 bg-gray-100 border-gray-300 rounded dark:bg-gray-700 dark:border-gray-600"
                    prop:checked=show_past
                    on:change=move |ev| set_show_past.set(event_target_checked(&ev))
                />
                "Mostrar eventos passados"
            </label>
        </div>

        <FetchStatus fetch=agenda/>

        {move || {
            let visible = groups
                .get()
                .into_iter()
                .filter(|group| show_past.get() || !group.past)
                .collect::<Vec<_>>();

            if agenda.data().is_some() && visible.is_empty() {
                return view! { <Empty message="Nenhum evento programado."/> }.into_any();
            }

            visible
                .into_iter()
                .map(|group| view! {
                    <AgendaDay group=group today=today on_open=move |item: AgendaItem| selected.set(Some(item))/>
                })
                .collect::<Vec<_>>()
                .into_any()
        }}

        {move || {
            selected.get().map(|item| {
                let date = item
                    .calendar_date()
                    .map(|date| date.as_local_date(DateStyle::Long).to_string());
                let time = item.time.as_deref().and_then(time_of_day);
                view! {
                    <Modal title=item.title.clone() on_close=move |_: ()| selected.set(None)>
                        <dl class="grid grid-cols-[auto_1fr] gap-x-4 gap-y-2">
                            <dt class="font-semibold">"Data"</dt>
                            <dd>{date.unwrap_or_else(|| item.date.clone())}</dd>
                            {time.map(|time| view! {
                                <dt class="font-semibold">"Horário"</dt>
                                <dd>{time}</dd>
                            })}
                            {item.location.clone().map(|location| view! {
                                <dt class="font-semibold">"Local"</dt>
                                <dd>{location}</dd>
                            })}
                            {item.kind.clone().map(|kind| view! {
                                <dt class="font-semibold">"Tipo"</dt>
                                <dd>{kind}</dd>
                            })}
                        </dl>
                        {item.description.clone().map(|description| view! {
                            <p class="leading-relaxed whitespace-pre-line">{description}</p>
                        })}
                    </Modal>
                }
            })
        }}
    }
}

#[component]
fn AgendaDay(
    group: AgendaGroup,
    today: chrono::NaiveDate,
    #[prop(into)] on_open: Callback<AgendaItem>,
) -> impl IntoView {
    let heading_class = if group.past {
        "text-lg font-semibold text-gray-400 dark:text-gray-500"
    } else {
        "text-lg font-semibold text-gray-900 dark:text-white"
    };

    let items = group
        .items
        .into_iter()
        .map(|item| {
            let open = item.clone();
            view! {
                <li
                    class="flex cursor-pointer items-start gap-4 p-4 hover:bg-gray-50 dark:hover:bg-gray-700"
                    on:click=move |_| on_open.run(open.clone())
                >
                    <span class="w-14 shrink-0 font-mono text-sm text-gray-500 dark:text-gray-400">
                        {item.time.as_deref().and_then(time_of_day).unwrap_or_else(|| "--:--".to_owned())}
                    </span>
                    <div class="flex-1">
                        <p class="font-medium text-gray-900 dark:text-white">{item.title.clone()}</p>
                        {item.location.clone().map(|location| view! {
                            <p class="text-sm text-gray-500 dark:text-gray-400">{location}</p>
                        })}
                    </div>
                    {item.kind.clone().map(|kind| view! { <Badge level=BadgeLevel::Info>{kind}</Badge> })}
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="mb-6">
            <h2 class=heading_class>
                {day_label(group.date, today)}
                {group.past.then(|| view! { <Badge level=BadgeLevel::Neutral>"Encerrado"</Badge> })}
            </h2>
            <ul class="mt-2 divide-y divide-gray-200 bg-white border border-gray-200 rounded-lg shadow dark:bg-gray-800 dark:border-gray-700 dark:divide-gray-700">
                {items}
            </ul>
        </section>
    }
}
