use portal_api_types::{AgendaItem, AgendaItemInput};

use super::Resource;
use crate::error::Result;
use crate::http::RequestOptions;

pub(super) const PATH: &str = "/api/agenda";
const ALL_PATH: &str = "/api/agenda/all";

pub type AgendaService<'a> = Resource<'a, AgendaItem, AgendaItemInput>;

impl AgendaService<'_> {
    /// Active agenda items.
    pub async fn list(&self) -> Result<Vec<AgendaItem>> {
        self.list_with(Vec::new()).await
    }

    /// Every item including inactive ones, for administrators.
    pub async fn list_all(&self) -> Result<Vec<AgendaItem>> {
        self.client
            .get(ALL_PATH, RequestOptions::authenticated())
            .await?
            .into_data_or_default()
    }
}
