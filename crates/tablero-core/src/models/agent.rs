use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::{CALL_TICKET_TYPE, DEFAULT_TICKET_TYPE};
use crate::models::status::{AgentStatus, STATUS_ORDER};

/// Identity of an agent across refresh cycles: the email when present, else the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AgentKey(String);

impl AgentKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AgentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgentKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// An open ticket assigned to an agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub id: String,
    #[serde(rename = "type")]
    pub ticket_type: Option<String>,
    pub subject: String,
}

impl Ticket {
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let id = match obj.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        Some(Self {
            id,
            ticket_type: non_empty_str(obj, "type"),
            subject: obj
                .get("subject")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
        })
    }

    /// Upper-cased type for display, falling back to a generic label
    pub fn type_label(&self) -> String {
        self.ticket_type
            .as_deref()
            .unwrap_or(DEFAULT_TICKET_TYPE)
            .to_uppercase()
    }

    /// Whether this ticket belongs to the phone queue
    pub fn is_call(&self) -> bool {
        self.ticket_type.as_deref() == Some(CALL_TICKET_TYPE)
    }
}

/// A contact-center agent as reported by one fetch of the status feed.
/// Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agent {
    pub name: String,
    /// Empty when the feed omits it
    pub email: String,
    /// Normalized status. Unknown or missing values become `Away`.
    pub status: AgentStatus,
    /// The raw status string when the feed sent one we do not recognize
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unrecognized_status: Option<String>,
    pub last_active_at: Option<String>,
    pub available_since: Option<String>,
    pub open_tickets_count: u32,
    pub open_tickets: Vec<Ticket>,
    #[serde(skip)]
    status_known: bool,
}

impl Agent {
    /// Build an agent from one feed record.
    ///
    /// Returns `None` unless the record is an object with a non-empty `name`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let name = obj.get("name")?.as_str()?.trim();
        if name.is_empty() {
            return None;
        }

        let raw_status = obj.get("status").and_then(|v| v.as_str());
        let parsed_status = raw_status.and_then(AgentStatus::parse);
        let unrecognized_status = match (raw_status, parsed_status) {
            (Some(raw), None) if !raw.trim().is_empty() => Some(raw.to_string()),
            _ => None,
        };

        let open_tickets_count = obj
            .get("open_tickets_count")
            .and_then(|v| v.as_u64())
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
            .unwrap_or(0);

        let open_tickets = obj
            .get("open_tickets")
            .and_then(|v| v.as_array())
            .map(|tickets| tickets.iter().filter_map(Ticket::from_value).collect())
            .unwrap_or_default();

        Some(Self {
            name: name.to_string(),
            email: obj
                .get("email")
                .and_then(|v| v.as_str())
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            status: parsed_status.unwrap_or(AgentStatus::Away),
            unrecognized_status,
            last_active_at: non_empty_str(obj, "last_active_at"),
            available_since: non_empty_str(obj, "available_since"),
            open_tickets_count,
            open_tickets,
            status_known: parsed_status.is_some(),
        })
    }

    /// Identity used for selection and de-duplication
    pub fn key(&self) -> AgentKey {
        if self.email.is_empty() {
            AgentKey::new(self.name.as_str())
        } else {
            AgentKey::new(self.email.as_str())
        }
    }

    /// Sort position. Missing or unrecognized statuses go after `away`.
    pub fn sort_rank(&self) -> usize {
        if self.status_known {
            self.status.rank()
        } else {
            STATUS_ORDER.len()
        }
    }

    /// Case-insensitive substring match against name or email.
    /// `needle` must already be lower-cased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
    }
}

fn non_empty_str(obj: &Map<String, Value>, field: &str) -> Option<String> {
    obj.get(field)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
