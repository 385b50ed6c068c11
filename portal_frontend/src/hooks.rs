//! Data hooks: one request per mount or source change, stored as a
//! [`FetchState`] signal.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use portal_api_types::{
    AgendaItem, Faq, FaqQuery, NewsArticle, NewsQuery, Squad, Training, TrainingQuery,
};
use portal_client::{FetchState, HttpClient, RequestSequence};
use tracing::{debug, warn};

/// Reactive handle to the state of one data hook.
pub struct Fetch<T: 'static> {
    state: RwSignal<FetchState<T>>,
    version: RwSignal<u64>,
}

impl<T> Clone for Fetch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Fetch<T> {}

impl<T> Fetch<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn state(&self) -> FetchState<T> {
        self.state.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&FetchState<T>) -> R) -> R {
        self.state.with(f)
    }

    /// Latest data, including the data kept while reloading or after a failure.
    pub fn data(&self) -> Option<T> {
        self.state.with(|state| state.data().cloned())
    }

    /// Issues the request again with the current source value.
    pub fn refetch(&self) {
        self.version.update(|version| *version += 1);
    }
}

/// Calls `fetcher` with the value of `source` on mount and whenever a signal
/// read by `source` changes. Only the response to the most recent request is
/// stored.
pub fn use_fetch<S, T, F, Fut>(source: impl Fn() -> S + 'static, fetcher: F) -> Fetch<T>
where
    S: 'static,
    T: Send + Sync + 'static,
    F: Fn(HttpClient, S) -> Fut + 'static,
    Fut: Future<Output = portal_client::Result<T>> + 'static,
{
    let client = expect_context::<HttpClient>();
    let state = RwSignal::new(FetchState::Idle);
    let version = RwSignal::new(0u64);
    let sequence = StoredValue::new(RequestSequence::default());

    Effect::new(move |_| {
        version.track();
        let params = source();

        let ticket = sequence.with_value(RequestSequence::next);
        state.update(FetchState::begin);
        let request = fetcher(client.clone(), params);

        spawn_local(async move {
            let result = request.await.map_err(|e| {
                warn!("Request failed: {e}");
                e.user_message()
            });

            if sequence
                .try_with_value(|sequence| sequence.is_current(ticket))
                .unwrap_or(false)
            {
                state.try_update(|state| state.resolve(result));
            } else {
                debug!(?ticket, "Discarding stale response");
            }
        });
    });

    Fetch { state, version }
}

pub fn use_agenda() -> Fetch<Vec<AgendaItem>> {
    use_fetch(
        || (),
        |client, ()| async move { client.agenda().list().await },
    )
}

pub fn use_news(query: Signal<NewsQuery>) -> Fetch<Vec<NewsArticle>> {
    use_fetch(
        move || query.get(),
        |client, query| async move { client.news().list(&query).await },
    )
}

pub fn use_squads() -> Fetch<Vec<Squad>> {
    use_fetch(
        || (),
        |client, ()| async move { client.squads().list().await },
    )
}

pub fn use_faqs(query: Signal<FaqQuery>) -> Fetch<Vec<Faq>> {
    use_fetch(
        move || query.get(),
        |client, query| async move { client.faqs().list(&query).await },
    )
}

pub fn use_trainings(query: Signal<TrainingQuery>) -> Fetch<Vec<Training>> {
    use_fetch(
        move || query.get(),
        |client, query| async move { client.trainings().list(&query).await },
    )
}
