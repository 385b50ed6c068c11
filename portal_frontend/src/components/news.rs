use leptos::prelude::*;
use leptos_meta::Title;
use portal_api_types::{NewsArticle, NewsQuery};
use portal_client::views::format::timestamp;
use portal_client::views::news::{categories, news_feed, CategoryFilter};
use portal_client::FetchState;

use crate::components::badge::{Badge, BadgeLevel};
use crate::components::modal::Modal;
use crate::components::status::{Empty, FetchStatus};
use crate::hooks::use_news;

#[component]
pub fn NewsPage() -> impl IntoView {
    let news = use_news(Signal::derive(NewsQuery::published));
    let (filter, set_filter) = signal(CategoryFilter::All);
    let selected = RwSignal::new(None::<NewsArticle>);

    let category_options = Memo::new(move |_| {
        news.with(|state| {
            state
                .data()
                .map(|articles| categories(articles))
                .unwrap_or_else(|| vec![CategoryFilter::All])
        })
    });
    let feed = Memo::new(move |_| {
        let filter = filter.get();
        news.with(|state| {
            state
                .data()
                .map(|articles| news_feed(articles, &filter))
                .unwrap_or_default()
        })
    });

    view! {
        <Title text="Notícias"/>

        <div class="flex flex-wrap items-center justify-between gap-4 my-6">
            <h1 class="text-3xl font-bold text-gray-900 dark:text-white">"Notícias"</h1>
            <select
                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                on:change=move |ev| set_filter.set(CategoryFilter::from_value(&event_target_value(&ev)))
                prop:value=move || filter.get().value().to_owned()
            >
                {move || {
                    category_options
                        .get()
                        .into_iter()
                        .map(|category| {
                            view! {
                                <option value=category.value().to_owned()>
                                    {category.label().to_owned()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </div>

        <FetchStatus fetch=news/>

        {move || {
            let loaded = news.with(|state| matches!(state, FetchState::Loaded(_)));
            let feed = feed.get();
            if loaded && feed.is_empty() {
                return view! { <Empty message="Nenhuma notícia encontrada."/> }.into_any();
            }

            let featured = feed.featured.map(|article| {
                let open = article.clone();
                view! {
                    <article
                        class="mb-8 cursor-pointer overflow-hidden bg-white border border-gray-200 rounded-lg shadow md:flex dark:border-gray-700 dark:bg-gray-800"
                        on:click=move |_| selected.set(Some(open.clone()))
                    >
                        {article.image_url.clone().map(|src| view! {
                            <img class="object-cover w-full h-64 md:h-auto md:w-1/2" src=src alt=""/>
                        })}
                        <div class="p-6">
                            <Badge level=BadgeLevel::Warning>"Destaque"</Badge>
                            <NewsMeta article=article.clone()/>
                            <h2 class="mt-2 mb-3 text-2xl font-bold text-gray-900 dark:text-white">{article.title.clone()}</h2>
                            <p class="text-gray-700 dark:text-gray-400">{summary(&article)}</p>
                        </div>
                    </article>
                }
            });

            let grid = feed
                .grid
                .into_iter()
                .map(|article| view! { <NewsCard article=article on_open=move |article: NewsArticle| selected.set(Some(article))/> })
                .collect::<Vec<_>>();

            view! {
                {featured}
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">{grid}</div>
            }
            .into_any()
        }}

        {move || {
            selected.get().map(|article| {
                view! {
                    <Modal title=article.title.clone() on_close=move |_: ()| selected.set(None)>
                        <NewsMeta article=article.clone()/>
                        {article.image_url.clone().map(|src| view! {
                            <img class="w-full rounded-lg" src=src alt=""/>
                        })}
                        {paragraphs(&article.content)}
                        <div>
                            {article.tags.iter().map(|tag| view! {
                                <Badge level=BadgeLevel::Neutral>{format!("#{tag}")}</Badge>
                            }).collect::<Vec<_>>()}
                        </div>
                    </Modal>
                }
            })
        }}
    }
}

#[component]
fn NewsCard(article: NewsArticle, #[prop(into)] on_open: Callback<NewsArticle>) -> impl IntoView {
    let open = article.clone();

    view! {
        <article
            class="cursor-pointer bg-white border border-gray-200 rounded-lg shadow hover:bg-gray-100 dark:bg-gray-800 dark:border-gray-700 dark:hover:bg-gray-700"
            on:click=move |_| on_open.run(open.clone())
        >
            {article.image_url.clone().map(|src| view! {
                <img class="object-cover w-full h-48 rounded-t-lg" src=src alt=""/>
            })}
            <div class="p-5">
                <NewsMeta article=article.clone()/>
                <h3 class="mt-2 mb-2 text-xl font-bold tracking-tight text-gray-900 dark:text-white">{article.title.clone()}</h3>
                <p class="font-normal text-gray-700 dark:text-gray-400">{summary(&article)}</p>
            </div>
        </article>
    }
}

/// Category, author and publication date line.
#[component]
fn NewsMeta(article: NewsArticle) -> impl IntoView {
    let byline = [
        article.author_name.clone(),
        article.published_at.as_deref().map(timestamp),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    view! {
        <div class="flex flex-wrap items-center gap-2 text-sm text-gray-500 dark:text-gray-400">
            {article.category.clone().map(|category| view! {
                <Badge level=BadgeLevel::Info>{category}</Badge>
            })}
            <span>{byline}</span>
        </div>
    }
}

fn summary(article: &NewsArticle) -> String {
    const MAX_CHARS: usize = 180;

    match article.summary.as_deref().filter(|summary| !summary.trim().is_empty()) {
        Some(summary) => summary.to_owned(),
        None if article.content.chars().count() > MAX_CHARS => {
            let cut = article.content.chars().take(MAX_CHARS).collect::<String>();
            format!("{}…", cut.trim_end())
        }
        None => article.content.clone(),
    }
}

fn paragraphs(text: &str) -> Vec<impl IntoView> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| view! { <p class="leading-relaxed">{paragraph.to_owned()}</p> })
        .collect()
}
