use portal_api_types::{Faq, FaqInput, FaqQuery};

use super::Resource;
use crate::error::Result;

pub(super) const PATH: &str = "/api/faqs";

pub type FaqService<'a> = Resource<'a, Faq, FaqInput>;

impl FaqService<'_> {
    pub async fn list(&self, query: &FaqQuery) -> Result<Vec<Faq>> {
        self.list_with(query.to_query_pairs()).await
    }
}
