use serde::{Deserialize, Serialize};

use crate::{default_true, nullable, nullable_true, EntityId, UserRef};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Squad {
    pub id: EntityId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "comando_squad")]
    pub squad_command: Option<String>,
    #[serde(rename = "comando_geral", default, deserialize_with = "nullable")]
    pub general_command: Vec<String>,
    /// CSS color used for the squad badge, e.g. `#1d4ed8`.
    #[serde(rename = "cor")]
    pub color: Option<String>,
    pub logo_url: Option<String>,
    #[serde(rename = "ativo", default = "default_true", deserialize_with = "nullable_true")]
    pub active: bool,
    #[serde(rename = "membros", default, deserialize_with = "nullable")]
    pub members: Vec<UserRef>,
    #[serde(rename = "comandante")]
    pub commander: Option<UserRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquadInput {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "comando_squad", skip_serializing_if = "Option::is_none")]
    pub squad_command: Option<String>,
    #[serde(rename = "comando_geral")]
    pub general_command: Vec<String>,
    #[serde(rename = "cor", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(rename = "ativo")]
    pub active: bool,
    #[serde(rename = "comandante_id", skip_serializing_if = "Option::is_none")]
    pub commander_id: Option<EntityId>,
}
