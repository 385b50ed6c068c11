use leptos::prelude::*;
use leptos_meta::Title;
use portal_api_types::Squad;
use portal_client::views::squads::{badge_color, commander_label, roster};

use crate::components::badge::ColorBadge;
use crate::components::modal::Modal;
use crate::components::status::{Empty, FetchStatus};
use crate::hooks::use_squads;

#[component]
pub fn SquadsPage() -> impl IntoView {
    let squads = use_squads();
    let selected = RwSignal::new(None::<Squad>);

    let active = Memo::new(move |_| squads.data().map(roster).unwrap_or_default());

    view! {
        <Title text="Squads"/>

        <h1 class="my-6 text-3xl font-bold text-gray-900 dark:text-white">"Squads"</h1>

        <FetchStatus fetch=squads/>

        {move || {
            let active = active.get();
            if squads.data().is_some() && active.is_empty() {
                return view! { <Empty message="Nenhum squad ativo."/> }.into_any();
            }

            let cards = active
                .into_iter()
                .map(|squad| {
                    let open = squad.clone();
                    let color = badge_color(&squad).to_owned();
                    view! {
                        <div
                            class="cursor-pointer p-6 bg-white border-t-4 border-gray-200 rounded-lg shadow hover:bg-gray-50 dark:bg-gray-800 dark:border-gray-700 dark:hover:bg-gray-700"
                            style=format!("border-top-color: {color}")
                            on:click=move |_| selected.set(Some(open.clone()))
                        >
                            <div class="flex items-center gap-3 mb-3">
                                {squad.logo_url.clone().map(|src| view! {
                                    <img class="w-10 h-10 rounded-full" src=src alt=""/>
                                })}
                                <h2 class="text-xl font-bold text-gray-900 dark:text-white">{squad.name.clone()}</h2>
                            </div>
                            {commander_label(&squad).map(|commander| view! {
                                <p class="text-sm text-gray-700 dark:text-gray-300">
                                    <span class="font-semibold">"Comando: "</span>{commander}
                                </p>
                            })}
                            <p class="mt-2">
                                <ColorBadge color=color.clone()>{members_label(squad.members.len())}</ColorBadge>
                            </p>
                        </div>
                    }
                })
                .collect::<Vec<_>>();

            view! {
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">{cards}</div>
            }
            .into_any()
        }}

        {move || {
            selected.get().map(|squad| {
                let members = squad
                    .members
                    .iter()
                    .map(|member| view! { <li>{member.display_name()}</li> })
                    .collect::<Vec<_>>();
                view! {
                    <Modal title=squad.name.clone() on_close=move |_: ()| selected.set(None)>
                        {squad.description.clone().map(|description| view! {
                            <p class="leading-relaxed whitespace-pre-line">{description}</p>
                        })}
                        {commander_label(&squad).map(|commander| view! {
                            <p><span class="font-semibold">"Comando do squad: "</span>{commander}</p>
                        })}
                        {(!squad.general_command.is_empty()).then(|| view! {
                            <p>
                                <span class="font-semibold">"Comando geral: "</span>
                                {squad.general_command.join(", ")}
                            </p>
                        })}
                        <h4 class="font-semibold">{members_label(squad.members.len())}</h4>
                        <ul class="list-disc list-inside">{members}</ul>
                    </Modal>
                }
            })
        }}
    }
}

fn members_label(count: usize) -> String {
    match count {
        1 => "1 membro".to_owned(),
        count => format!("{count} membros"),
    }
}
