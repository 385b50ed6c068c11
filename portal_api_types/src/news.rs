use serde::{Deserialize, Serialize};

use crate::{nullable, EntityId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: EntityId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "conteudo", default, deserialize_with = "nullable")]
    pub content: String,
    #[serde(rename = "resumo")]
    pub summary: Option<String>,
    #[serde(rename = "imagem_url")]
    pub image_url: Option<String>,
    #[serde(rename = "autor_nome")]
    pub author_name: Option<String>,
    #[serde(rename = "publicado", default, deserialize_with = "nullable")]
    pub published: bool,
    #[serde(rename = "destaque", default, deserialize_with = "nullable")]
    pub featured: bool,
    #[serde(rename = "data_publicacao")]
    pub published_at: Option<String>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticleInput {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "conteudo")]
    pub content: String,
    #[serde(rename = "resumo", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(rename = "imagem_url", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "publicado")]
    pub published: bool,
    #[serde(rename = "destaque")]
    pub featured: bool,
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub tags: Vec<String>,
}

/// Filters understood by `GET /api/noticias`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NewsQuery {
    pub category: Option<String>,
    pub published: Option<bool>,
    pub limit: Option<u32>,
}

impl NewsQuery {
    pub fn published() -> Self {
        NewsQuery {
            published: Some(true),
            ..Default::default()
        }
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("categoria", category.clone()));
        }
        if let Some(published) = self.published {
            pairs.push(("publicado", published.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}
