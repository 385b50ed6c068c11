use portal_api_types::{NewsArticle, NewsArticleInput, NewsQuery};

use super::Resource;
use crate::error::Result;

pub(super) const PATH: &str = "/api/noticias";

pub type NewsService<'a> = Resource<'a, NewsArticle, NewsArticleInput>;

impl NewsService<'_> {
    pub async fn list(&self, query: &NewsQuery) -> Result<Vec<NewsArticle>> {
        self.list_with(query.to_query_pairs()).await
    }
}
