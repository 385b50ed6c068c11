mod agenda;
mod faq;
mod news;
mod squad;
mod training;

use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

pub use crate::agenda::{AgendaItem, AgendaItemInput};
pub use crate::faq::{Faq, FaqInput, FaqQuery};
pub use crate::news::{NewsArticle, NewsArticleInput, NewsQuery};
pub use crate::squad::{Squad, SquadInput};
pub use crate::training::{Training, TrainingInput, TrainingQuery, TrainingStatus};

/// Response wrapper used by every endpoint of the content API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Envelope {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Backend record identifier, accepted as either a JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        EntityId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        EntityId(id.to_string())
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId(id.to_owned())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(id) => EntityId(id.to_string()),
            RawId::Text(id) => EntityId(id),
        })
    }
}

/// Reference to a user record, e.g. a squad commander or a training
/// participant. The backend sends either the populated user or just its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "UserRefRepr")]
pub struct UserRef {
    pub id: EntityId,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "nome_guerra")]
    pub call_sign: Option<String>,
}

impl UserRef {
    /// Name shown in listings, preferring the call sign.
    pub fn display_name(&self) -> String {
        self.call_sign
            .as_ref()
            .or(self.name.as_ref())
            .cloned()
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UserRefRepr {
    Id(EntityId),
    Full {
        #[serde(alias = "_id")]
        id: EntityId,
        #[serde(alias = "nome")]
        name: Option<String>,
        email: Option<String>,
        nome_guerra: Option<String>,
    },
}

impl From<UserRefRepr> for UserRef {
    fn from(repr: UserRefRepr) -> Self {
        match repr {
            UserRefRepr::Id(id) => UserRef {
                id,
                name: None,
                email: None,
                call_sign: None,
            },
            UserRefRepr::Full {
                id,
                name,
                email,
                nome_guerra,
            } => UserRef {
                id,
                name,
                email,
                call_sign: nome_guerra,
            },
        }
    }
}

/// Parses the calendar date at the start of a backend date field, ignoring
/// any time-of-day suffix (`2024-03-01`, `2024-03-01T18:00:00.000Z`).
pub fn parse_date_prefix(value: &str) -> Option<NaiveDate> {
    let prefix = value.trim().get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

fn default_true() -> bool {
    true
}

/// Treats an explicit `null` like a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Like [`nullable`] for flags that default to `true`.
fn nullable_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_accepts_numbers_and_strings() {
        let ids: Vec<EntityId> = serde_json::from_str(r#"[7, "a1b2"]"#).unwrap();
        assert_eq!(ids, vec![EntityId::from(7), EntityId::from("a1b2")]);
    }

    #[test]
    fn user_ref_accepts_bare_id() {
        let users: Vec<UserRef> = serde_json::from_str(
            r#"[3, {"id": 4, "name": "Ana Souza", "email": "ana@example.org", "nome_guerra": "Falcão"}]"#,
        )
        .unwrap();
        assert_eq!(users[0].id, EntityId::from(3));
        assert_eq!(users[0].display_name(), "#3");
        assert_eq!(users[1].display_name(), "Falcão");
        assert_eq!(users[1].email.as_deref(), Some("ana@example.org"));
    }

    #[test]
    fn envelope_without_data() {
        let envelope: Envelope<Vec<AgendaItem>> =
            serde_json::from_str(r#"{"success": false, "message": "Token inválido"}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("Token inválido"));
    }

    #[test]
    fn null_columns_fall_back_to_defaults() {
        let envelope: Envelope<Vec<Faq>> = serde_json::from_str(
            r#"{"success": true, "data": [
                {"id": 1, "pergunta": "Como entro?", "resposta": "Fale com o comando.",
                 "ordem_exibicao": 2, "visualizacoes": 10, "ativo": false},
                {"id": 2, "pergunta": "Onde treinamos?", "resposta": "Na base.",
                 "categoria": null, "ordem_exibicao": null, "visualizacoes": null, "ativo": null}
            ]}"#,
        )
        .unwrap();
        let faqs = envelope.data.unwrap();
        assert_eq!(faqs.len(), 2);
        assert!(!faqs[0].active);
        assert_eq!(faqs[1].display_order, 0);
        assert_eq!(faqs[1].views, 0);
        assert!(faqs[1].active);

        let article: NewsArticle = serde_json::from_str(
            r#"{"id": "n1", "titulo": "Formatura", "conteudo": null,
                "publicado": null, "destaque": null, "tags": null}"#,
        )
        .unwrap();
        assert_eq!(article.content, "");
        assert!(!article.published);
        assert!(!article.featured);
        assert!(article.tags.is_empty());

        let item: AgendaItem = serde_json::from_str(
            r#"{"id": 3, "titulo": "Reunião", "data": "2024-03-01", "ativo": null}"#,
        )
        .unwrap();
        assert!(item.active);
    }

    #[test]
    fn date_prefix_ignores_time() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1);
        assert_eq!(parse_date_prefix("2024-03-01"), expected);
        assert_eq!(parse_date_prefix("2024-03-01T23:30:00.000Z"), expected);
        assert_eq!(parse_date_prefix("01/03/2024"), None);
        assert_eq!(parse_date_prefix(""), None);
    }
}
