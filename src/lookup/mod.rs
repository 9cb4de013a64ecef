//! Lookup service — resolves a track query against a record store.
//!
//! Three disjoint outcomes: the record, [`LookupError::MissingParameter`],
//! or [`LookupError::NotFound`]. No retries; the store is in memory.

use url::form_urlencoded;

use crate::error::LookupError;
use crate::models::cargo::CargoRecord;
use crate::store::CargoStore;

/// Query parameters accepted by `/api/track`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackQuery {
    /// Requested cargo code. `None` if absent.
    pub code: Option<String>,
    /// Requested response format (`integration` selects the message shape).
    pub format: Option<String>,
}

impl TrackQuery {
    /// Parse a raw, percent-encoded query string (without the leading `?`).
    ///
    /// The first occurrence of each parameter wins; unknown keys are ignored.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut query = TrackQuery::default();
        let Some(raw) = raw else {
            return query;
        };

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "code" if query.code.is_none() => query.code = Some(value.into_owned()),
                "format" if query.format.is_none() => query.format = Some(value.into_owned()),
                _ => {}
            }
        }
        query
    }

    /// The code, treating an empty value as absent.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|code| !code.is_empty())
    }
}

/// Resolve the query's code to a record.
pub fn lookup<'s, S>(store: &'s S, query: &TrackQuery) -> Result<&'s CargoRecord, LookupError>
where
    S: CargoStore + ?Sized,
{
    let code = query.code().ok_or(LookupError::MissingParameter)?;
    store.get(code).ok_or_else(|| LookupError::NotFound {
        code: code.to_string(),
    })
}
