use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{default_true, nullable_true, parse_date_prefix, EntityId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaItem {
    pub id: EntityId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    /// Calendar date, optionally followed by a time-of-day suffix.
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: Option<String>,
    #[serde(rename = "local")]
    pub location: Option<String>,
    #[serde(rename = "tipo")]
    pub kind: Option<String>,
    #[serde(rename = "ativo", default = "default_true", deserialize_with = "nullable_true")]
    pub active: bool,
    #[serde(rename = "ordem")]
    pub order: Option<i32>,
}

impl AgendaItem {
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_date_prefix(&self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaItemInput {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "hora", skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "local", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "ativo")]
    pub active: bool,
    #[serde(rename = "ordem", skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}
