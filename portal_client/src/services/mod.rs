//! Typed pass-through wrappers around the content endpoints.
//!
//! Services never retry, cache or swallow errors. They do check the envelope:
//! `success: false` always surfaces as `ApiError::Rejected`.

mod agenda;
mod faqs;
mod news;
mod squads;
mod trainings;

use std::marker::PhantomData;

use portal_api_types::EntityId;
use reqwest::Url;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

pub use self::agenda::AgendaService;
pub use self::faqs::FaqService;
pub use self::news::NewsService;
pub use self::squads::SquadService;
pub use self::trainings::TrainingService;
use crate::error::{ApiError, Result};
use crate::http::{HttpClient, RequestBody, RequestOptions};

/// CRUD endpoints rooted at `path`, returning `T` and accepting `I` bodies.
pub struct Resource<'a, T, I> {
    client: &'a HttpClient,
    path: &'static str,
    _types: PhantomData<fn() -> (T, I)>,
}

impl<'a, T, I> Resource<'a, T, I>
where
    T: DeserializeOwned,
    I: Serialize,
{
    fn new(client: &'a HttpClient, path: &'static str) -> Self {
        Resource {
            client,
            path,
            _types: PhantomData,
        }
    }

    /// `path/<id>`, with the id percent-encoded as a single segment.
    fn item_path(&self, id: &EntityId) -> Result<String> {
        let mut url =
            Url::parse("http://localhost/").map_err(|e| ApiError::Request(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::Request("URL cannot be a base".to_owned()))?
            .clear()
            .extend(self.path.trim_start_matches('/').split('/'))
            .push(id.as_str());
        Ok(url.path().to_owned())
    }

    async fn list_with(&self, query: Vec<(&'static str, String)>) -> Result<Vec<T>> {
        self.client
            .get(self.path, RequestOptions::default().with_query(query))
            .await?
            .into_data_or_default()
    }

    pub async fn get(&self, id: &EntityId) -> Result<T> {
        let path = self.item_path(id)?;
        self.client
            .get(&path, RequestOptions::default())
            .await?
            .into_data(&path)
    }

    pub async fn create(&self, input: &I) -> Result<T> {
        self.client
            .post(
                self.path,
                Some(RequestBody::json(input)?),
                RequestOptions::authenticated(),
            )
            .await?
            .into_data(self.path)
    }

    pub async fn update(&self, id: &EntityId, input: &I) -> Result<T> {
        let path = self.item_path(id)?;
        self.client
            .put(
                &path,
                Some(RequestBody::json(input)?),
                RequestOptions::authenticated(),
            )
            .await?
            .into_data(&path)
    }

    /// Returns the backend's confirmation message, if any.
    pub async fn delete(&self, id: &EntityId) -> Result<Option<String>> {
        self.client
            .delete::<IgnoredAny>(&self.item_path(id)?, RequestOptions::authenticated())
            .await?
            .into_message()
    }
}

impl HttpClient {
    pub fn agenda(&self) -> AgendaService<'_> {
        Resource::new(self, agenda::PATH)
    }

    pub fn news(&self) -> NewsService<'_> {
        Resource::new(self, news::PATH)
    }

    pub fn squads(&self) -> SquadService<'_> {
        Resource::new(self, squads::PATH)
    }

    pub fn faqs(&self) -> FaqService<'_> {
        Resource::new(self, faqs::PATH)
    }

    pub fn trainings(&self) -> TrainingService<'_> {
        Resource::new(self, trainings::PATH)
    }
}
