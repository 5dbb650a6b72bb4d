//! Record data model
//!
//! A record is a flat, schema-less blog document. No field is validated for
//! presence or format beyond JSON decoding; missing text fields default to
//! empty strings so partial payloads decode cleanly.

use std::fmt;

use chrono::{DateTime, Local};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::StoreError;

/// Store-assigned record identifier
///
/// Wraps a BSON ObjectId and travels as its 24-character hex string on every
/// wire: JSON bodies, URL paths, and the store's `_id` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(ObjectId);

impl RecordId {
    /// Mint a fresh identifier
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// Parse a hex identifier string
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        ObjectId::parse_str(raw)
            .map(Self)
            .map_err(|_| StoreError::InvalidId(raw.to_string()))
    }

    /// The 24-character hex form
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ObjectId::parse_str(&raw)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

/// A single blog record
///
/// Wire field names follow the original site payloads; `id` is absent until
/// the store assigns one, `pubdate` until the create handler stamps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub contents: String,

    #[serde(default, rename = "permanentlink")]
    pub permanent_link: String,

    #[serde(default, rename = "imglink")]
    pub image_link: String,

    #[serde(default, rename = "extlink")]
    pub external_link: String,

    /// Set to server-local now at insert time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubdate: Option<DateTime<Local>>,

    #[serde(default)]
    pub keywords: String,

    #[serde(default)]
    pub tags: String,
}
