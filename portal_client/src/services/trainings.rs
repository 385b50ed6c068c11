use portal_api_types::{EntityId, Training, TrainingInput, TrainingQuery};
use serde::de::IgnoredAny;

use super::Resource;
use crate::error::Result;
use crate::http::RequestOptions;

pub(super) const PATH: &str = "/api/treinamentos";

pub type TrainingService<'a> = Resource<'a, Training, TrainingInput>;

impl TrainingService<'_> {
    pub async fn list(&self, query: &TrainingQuery) -> Result<Vec<Training>> {
        self.list_with(query.to_query_pairs()).await
    }

    /// Signs the current user up for a training. Returns the backend's
    /// confirmation message.
    pub async fn subscribe(&self, id: &EntityId) -> Result<Option<String>> {
        let path = format!("{}/subscribe", self.item_path(id)?);
        self.client
            .post::<IgnoredAny>(&path, None, RequestOptions::authenticated())
            .await?
            .into_message()
    }
}
