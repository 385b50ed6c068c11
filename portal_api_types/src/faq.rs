use serde::{Deserialize, Serialize};

use crate::{default_true, nullable, nullable_true, EntityId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: EntityId,
    #[serde(rename = "pergunta")]
    pub question: String,
    #[serde(rename = "resposta")]
    pub answer: String,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    #[serde(rename = "ordem_exibicao", default, deserialize_with = "nullable")]
    pub display_order: i32,
    #[serde(rename = "visualizacoes", default, deserialize_with = "nullable")]
    pub views: u64,
    #[serde(rename = "ativo", default = "default_true", deserialize_with = "nullable_true")]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqInput {
    #[serde(rename = "pergunta")]
    pub question: String,
    #[serde(rename = "resposta")]
    pub answer: String,
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "ordem_exibicao")]
    pub display_order: i32,
    #[serde(rename = "ativo")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FaqQuery {
    pub category: Option<String>,
}

impl FaqQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        self.category
            .iter()
            .map(|category| ("categoria", category.clone()))
            .collect()
    }
}
