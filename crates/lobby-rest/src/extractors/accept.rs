//! Content negotiation over the `Accept` header.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::ACCEPT, request::Parts},
};
use lobby_core::{LobbyError, LobbyResult};
use std::convert::Infallible;

/// A body representation the API can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Json,
    Xml,
}

impl Representation {
    /// Content-Type sent with a body in this representation.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml; charset=utf-8",
        }
    }

    /// Maps a media range to the representation it admits.
    ///
    /// `text/*` admits only XML; `+json` and `+xml` structured-syntax
    /// suffixes map to their base syntax.
    fn for_media_range(range: &str) -> Option<Self> {
        let (kind, subtype) = range.split_once('/')?;
        let syntax = subtype.rsplit_once('+').map_or(subtype, |(_, suffix)| suffix);

        match (kind, subtype, syntax) {
            ("*", "*", _) | ("application", "*", _) => Some(Self::Json),
            ("text", "*", _) => Some(Self::Xml),
            ("application" | "text", _, "json") => Some(Self::Json),
            ("application" | "text", _, "xml") => Some(Self::Xml),
            _ => None,
        }
    }
}

/// One entry of an `Accept` header.
#[derive(Debug, Clone, PartialEq)]
struct MediaRange {
    range: String,
    quality: f32,
}

fn parse_media_range(entry: &str) -> Option<MediaRange> {
    let mut parts = entry.split(';');
    let range = parts.next()?.trim().to_ascii_lowercase();
    if range.is_empty() {
        return None;
    }

    let mut quality = 1.0;
    for param in parts {
        if let Some((name, value)) = param.split_once('=') {
            if name.trim().eq_ignore_ascii_case("q") {
                quality = value.trim().parse().ok()?;
            }
        }
    }

    Some(MediaRange { range, quality })
}

/// Picks the representation for an `Accept` header value.
///
/// No header, or one with no usable entries, means JSON. Entries are tried
/// by descending quality, ties in header order; `q=0` entries are never
/// chosen. Fails with `NotAcceptable` if no entry names a supported type.
pub fn negotiate(accept: Option<&str>) -> LobbyResult<Representation> {
    let Some(accept) = accept else {
        return Ok(Representation::Json);
    };

    let mut ranges: Vec<MediaRange> = accept.split(',').filter_map(parse_media_range).collect();
    if ranges.is_empty() {
        return Ok(Representation::Json);
    }
    ranges.sort_by(|a, b| b.quality.total_cmp(&a.quality));

    ranges
        .iter()
        .filter(|r| r.quality > 0.0)
        .find_map(|r| Representation::for_media_range(&r.range))
        .ok_or_else(|| {
            LobbyError::not_acceptable(format!("No supported representation for '{}'", accept))
        })
}

/// The client's `Accept` header, negotiated only when a body is produced.
#[derive(Debug, Clone, Default)]
pub struct AcceptPreference(pub Option<String>);

impl AcceptPreference {
    /// Resolves the preference into a representation.
    pub fn negotiate(&self) -> LobbyResult<Representation> {
        negotiate(self.0.as_deref())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AcceptPreference
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let values: Vec<&str> = parts
            .headers
            .get_all(ACCEPT)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();

        if values.is_empty() {
            Ok(Self(None))
        } else {
            Ok(Self(Some(values.join(","))))
        }
    }
}
