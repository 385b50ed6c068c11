use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{default_true, nullable, nullable_true, parse_date_prefix, EntityId, UserRef};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Training {
    pub id: EntityId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "data_treinamento")]
    pub scheduled_at: String,
    #[serde(rename = "local")]
    pub location: Option<String>,
    #[serde(rename = "instrutor_nome")]
    pub instructor_name: Option<String>,
    #[serde(rename = "tipo")]
    pub kind: Option<String>,
    #[serde(rename = "duracao_minutos")]
    pub duration_minutes: Option<u32>,
    #[serde(rename = "max_participantes")]
    pub max_participants: Option<u32>,
    #[serde(rename = "participantes", default, deserialize_with = "nullable")]
    pub participants: Vec<UserRef>,
    pub status: TrainingStatus,
    #[serde(rename = "ativo", default = "default_true", deserialize_with = "nullable_true")]
    pub active: bool,
}

impl Training {
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_date_prefix(&self.scheduled_at)
    }

    /// Remaining seats, `None` when the training has no participant cap.
    pub fn open_seats(&self) -> Option<u32> {
        self.max_participants
            .map(|max| max.saturating_sub(self.participants.len() as u32))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TrainingStatus {
    #[serde(rename = "agendado")]
    Scheduled,
    #[serde(rename = "em_andamento")]
    InProgress,
    #[serde(rename = "concluido")]
    Completed,
    #[serde(rename = "cancelado")]
    Cancelled,
}

impl TrainingStatus {
    pub const ALL: [TrainingStatus; 4] = [
        TrainingStatus::Scheduled,
        TrainingStatus::InProgress,
        TrainingStatus::Completed,
        TrainingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingStatus::Scheduled => "agendado",
            TrainingStatus::InProgress => "em_andamento",
            TrainingStatus::Completed => "concluido",
            TrainingStatus::Cancelled => "cancelado",
        }
    }

    /// Whether participants can still sign up.
    pub fn accepts_subscriptions(&self) -> bool {
        matches!(self, TrainingStatus::Scheduled)
    }
}

impl Display for TrainingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrainingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown training status: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingInput {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "data_treinamento")]
    pub scheduled_at: String,
    #[serde(rename = "local", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "instrutor_nome", skip_serializing_if = "Option::is_none")]
    pub instructor_name: Option<String>,
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "duracao_minutos", skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(rename = "max_participantes", skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    pub status: TrainingStatus,
    #[serde(rename = "ativo")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TrainingQuery {
    pub kind: Option<String>,
    pub status: Option<TrainingStatus>,
    pub active: Option<bool>,
}

impl TrainingQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(kind) = &self.kind {
            pairs.push(("tipo", kind.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_owned()));
        }
        if let Some(active) = self.active {
            pairs.push(("ativo", active.to_string()));
        }
        pairs
    }
}
