use portal_api_types::{Squad, SquadInput};

use super::Resource;
use crate::error::Result;

pub(super) const PATH: &str = "/api/squads";

pub type SquadService<'a> = Resource<'a, Squad, SquadInput>;

impl SquadService<'_> {
    pub async fn list(&self) -> Result<Vec<Squad>> {
        self.list_with(Vec::new()).await
    }
}
