//! Response body interpretation: shape detection, record validation, ordering.

use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

use crate::constants::PREFERRED_LIST_FIELDS;
use crate::feed::error::{excerpt, FeedError};
use crate::models::Agent;

/// Agents recovered from one response body
#[derive(Debug, Clone, Default)]
pub struct ParsedFeed {
    /// Valid agents in canonical status order
    pub agents: Vec<Agent>,
    /// Records dropped for missing names or duplicate identities
    pub dropped: usize,
}

/// Parse a feed body into agents sorted by status.
///
/// Accepted shapes, checked in order: a bare array of records, an object with a
/// well-known list field, a single record object with a `name`, and finally an
/// object with some other field holding an array of named records.
pub fn parse_feed(body: &str) -> Result<ParsedFeed, FeedError> {
    let value: Value = serde_json::from_str(body).map_err(|e| FeedError::InvalidJson {
        message: e.to_string(),
        excerpt: excerpt(body),
    })?;

    let records = locate_records(&value).map_err(|found| FeedError::UnrecognizedShape {
        found,
        excerpt: excerpt(body),
    })?;

    let mut seen = HashSet::new();
    let mut agents = Vec::with_capacity(records.len());
    let mut dropped = 0;

    for record in records {
        let Some(agent) = Agent::from_value(record) else {
            dropped += 1;
            continue;
        };
        if !seen.insert(agent.key()) {
            debug!(key = %agent.key(), "dropping agent with duplicate identity");
            dropped += 1;
            continue;
        }
        agents.push(agent);
    }

    sort_by_status(&mut agents);
    Ok(ParsedFeed { agents, dropped })
}

/// Stable sort into [`crate::models::STATUS_ORDER`]; unknown statuses last.
pub fn sort_by_status(agents: &mut [Agent]) {
    agents.sort_by_key(Agent::sort_rank);
}

/// Find the list of agent records, or name the JSON type that did not fit.
fn locate_records(value: &Value) -> Result<Vec<&Value>, &'static str> {
    match value {
        Value::Array(items) => Ok(items.iter().collect()),
        Value::Object(map) => {
            for field in PREFERRED_LIST_FIELDS {
                if let Some(Value::Array(items)) = map.get(field) {
                    return Ok(items.iter().collect());
                }
            }

            if has_name(value) {
                return Ok(vec![value]);
            }

            let nested = map.values().find_map(|v| match v {
                Value::Array(items) if !items.is_empty() && items.iter().all(has_name) => {
                    Some(items)
                }
                _ => None,
            });
            match nested {
                Some(items) => Ok(items.iter().collect()),
                None => Err("object without agent list"),
            }
        }
        Value::String(_) => Err("string"),
        Value::Number(_) => Err("number"),
        Value::Bool(_) => Err("boolean"),
        Value::Null => Err("null"),
    }
}

/// An object carrying a non-empty string `name`
fn has_name(value: &Value) -> bool {
    value
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.trim().is_empty())
}
