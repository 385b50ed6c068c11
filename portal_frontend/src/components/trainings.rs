use leptos::prelude::*;
use leptos_meta::Title;
use portal_api_types::{Training, TrainingQuery, TrainingStatus};
use portal_client::views::format::{duration, status_label, timestamp};
use portal_client::views::news::same_category;
use portal_client::views::today;
use portal_client::views::trainings::{can_subscribe, kinds, schedule};
use portal_client::HttpClient;
use tracing::warn;

use crate::components::badge::{Badge, BadgeLevel};
use crate::components::button::{Button, SUCCESS_BUTTON};
use crate::components::modal::Modal;
use crate::components::status::{Empty, FetchStatus};
use crate::components::toast::use_toaster;
use crate::hooks::use_trainings;

const SELECT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white";

#[component]
pub fn TrainingsPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let toaster = use_toaster();
    let today = today();

    let (status, set_status) = signal(None::<TrainingStatus>);
    let (kind, set_kind) = signal(None::<String>);
    let selected = RwSignal::new(None::<Training>);

    let trainings = use_trainings(Signal::derive(move || TrainingQuery {
        status: status.get(),
        active: Some(true),
        ..Default::default()
    }));

    let subscribe = Action::new_local(move |training: &Training| {
        let client = client.clone();
        let training = training.clone();
        async move {
            match client.trainings().subscribe(&training.id).await {
                Ok(message) => {
                    toaster.success(message.unwrap_or_else(|| {
                        format!("Inscrição em \"{}\" confirmada.", training.title)
                    }));
                    trainings.refetch();
                }
                Err(e) => {
                    warn!(id = %training.id, "Subscription failed: {e}");
                    toaster.error(e.user_message());
                }
            }
        }
    });

    let kind_options = Memo::new(move |_| {
        trainings
            .with(|state| state.data().map(|trainings| kinds(trainings)))
            .unwrap_or_default()
    });
    let sessions = Memo::new(move |_| {
        let kind = kind.get();
        let filtered = trainings
            .data()
            .unwrap_or_default()
            .into_iter()
            .filter(|training| match &kind {
                None => true,
                Some(kind) => training
                    .kind
                    .as_deref()
                    .is_some_and(|training_kind| same_category(training_kind, kind)),
            });
        schedule(filtered, today)
    });

    let card = move |training: Training| {
        let open = training.clone();
        let subscribable = can_subscribe(&training, today);
        view! {
            <div
                class="cursor-pointer p-6 bg-white border border-gray-200 rounded-lg shadow hover:bg-gray-50 dark:bg-gray-800 dark:border-gray-700 dark:hover:bg-gray-700"
                on:click=move |_| selected.set(Some(open.clone()))
            >
                <div class="flex flex-wrap items-center gap-2 mb-2">
                    <StatusBadge status=training.status/>
                    {training.kind.clone().map(|kind| view! { <Badge level=BadgeLevel::Info>{kind}</Badge> })}
                </div>
                <h3 class="mb-2 text-xl font-bold text-gray-900 dark:text-white">{training.title.clone()}</h3>
                <p class="text-sm text-gray-700 dark:text-gray-400">{timestamp(&training.scheduled_at)}</p>
                {training.duration_minutes.map(|minutes| view! {
                    <p class="text-sm text-gray-700 dark:text-gray-400">{duration(minutes)}</p>
                })}
                {training.open_seats().map(|seats| view! {
                    <p class="text-sm text-gray-700 dark:text-gray-400">{seats_label(seats)}</p>
                })}
                {subscribable.then(|| {
                    let training = training.clone();
                    view! {
                        <div class="mt-4" on:click=|ev| ev.stop_propagation()>
                            <Button
                                color_scheme=SUCCESS_BUTTON
                                disabled=subscribe.pending()
                                on_click=move || {
                                    subscribe.dispatch(training.clone());
                                }
                            >
                                "Inscrever-se"
                            </Button>
                        </div>
                    }
                })}
            </div>
        }
    };

    view! {
        <Title text="Treinamentos"/>

        <div class="flex flex-wrap items-center justify-between gap-4 my-6">
            <h1 class="text-3xl font-bold text-gray-900 dark:text-white">"Treinamentos"</h1>
            <div class="flex gap-2">
                <select
                    class=SELECT_CLASS
                    on:change=move |ev| set_status.set(event_target_value(&ev).parse().ok())
                >
                    <option value="">"Todos os status"</option>
                    {TrainingStatus::ALL.iter().map(|status| view! {
                        <option value=status.as_str()>{status_label(*status)}</option>
                    }).collect::<Vec<_>>()}
                </select>
                <select
                    class=SELECT_CLASS
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_kind.set((!value.is_empty()).then_some(value));
                    }
                >
                    <option value="">"Todos os tipos"</option>
                    {move || kind_options.get().into_iter().map(|kind| view! {
                        <option value=kind.clone()>{kind.clone()}</option>
                    }).collect::<Vec<_>>()}
                </select>
            </div>
        </div>

        <FetchStatus fetch=trainings/>

        {move || {
            let sessions = sessions.get();
            if trainings.data().is_some() && sessions.upcoming.is_empty() && sessions.past.is_empty() {
                return view! { <Empty message="Nenhum treinamento encontrado."/> }.into_any();
            }

            let upcoming = sessions.upcoming.into_iter().map(card).collect::<Vec<_>>();
            let past = sessions.past.into_iter().map(card).collect::<Vec<_>>();
            view! {
                <h2 class="mb-4 text-xl font-semibold text-gray-900 dark:text-white">"Próximos"</h2>
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">{upcoming}</div>
                {(!past.is_empty()).then(|| view! {
                    <h2 class="mt-8 mb-4 text-xl font-semibold text-gray-500 dark:text-gray-400">"Realizados"</h2>
                    <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3 opacity-75">{past}</div>
                })}
            }
            .into_any()
        }}

        {move || {
            selected.get().map(|training| {
                let participants = training
                    .participants
                    .iter()
                    .map(|participant| view! { <li>{participant.display_name()}</li> })
                    .collect::<Vec<_>>();
                view! {
                    <Modal title=training.title.clone() on_close=move |_: ()| selected.set(None)>
                        <div><StatusBadge status=training.status/></div>
                        <dl class="grid grid-cols-[auto_1fr] gap-x-4 gap-y-2">
                            <dt class="font-semibold">"Data"</dt>
                            <dd>{timestamp(&training.scheduled_at)}</dd>
                            {training.duration_minutes.map(|minutes| view! {
                                <dt class="font-semibold">"Duração"</dt>
                                <dd>{duration(minutes)}</dd>
                            })}
                            {training.location.clone().map(|location| view! {
                                <dt class="font-semibold">"Local"</dt>
                                <dd>{location}</dd>
                            })}
                            {training.instructor_name.clone().map(|instructor| view! {
                                <dt class="font-semibold">"Instrutor"</dt>
                                <dd>{instructor}</dd>
                            })}
                            {training.open_seats().map(|seats| view! {
                                <dt class="font-semibold">"Vagas"</dt>
                                <dd>{seats_label(seats)}</dd>
                            })}
                        </dl>
                        {training.description.clone().map(|description| view! {
                            <p class="leading-relaxed whitespace-pre-line">{description}</p>
                        })}
                        {(!participants.is_empty()).then(|| view! {
                            <h4 class="font-semibold">"Participantes"</h4>
                            <ul class="list-disc list-inside">{participants}</ul>
                        })}
                    </Modal>
                }
            })
        }}
    }
}

#[component]
fn StatusBadge(status: TrainingStatus) -> impl IntoView {
    let level = match status {
        TrainingStatus::Scheduled => BadgeLevel::Info,
        TrainingStatus::InProgress => BadgeLevel::Warning,
        TrainingStatus::Completed => BadgeLevel::Success,
        TrainingStatus::Cancelled => BadgeLevel::Error,
    };

    view! { <Badge level=level>{status_label(status)}</Badge> }
}

fn seats_label(seats: u32) -> String {
    match seats {
        0 => "Sem vagas".to_owned(),
        1 => "1 vaga restante".to_owned(),
        seats => format!("{seats} vagas restantes"),
    }
}
