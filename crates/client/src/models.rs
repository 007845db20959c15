//! Data models for the account service API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response from an account endpoint.
///
/// Non-2xx statuses are represented here rather than as errors; `data` is
/// only decoded for successful responses.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// True when the service answered 200.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Personal bests for one mode, keyed by mode setting (e.g. "15", "60", "custom").
pub type PersonalBestTable = BTreeMap<String, Vec<PersonalBest>>;

/// A single personal best entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalBest {
    pub wpm: f64,
    pub acc: f64,
    pub raw: f64,
    pub timestamp: u64,
}

/// Personal bests grouped by test mode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalBests {
    pub time: PersonalBestTable,
    pub words: PersonalBestTable,
    pub zen: PersonalBestTable,
    pub quote: PersonalBestTable,
    pub custom: PersonalBestTable,
}

impl PersonalBests {
    /// The shape the service reports after a reset.
    pub fn cleared() -> Self {
        let single = |key: &str| BTreeMap::from([(key.to_string(), Vec::new())]);
        Self {
            time: BTreeMap::new(),
            words: BTreeMap::new(),
            zen: single("zen"),
            quote: single("custom"),
            custom: single("custom"),
        }
    }

    /// Total number of stored entries across all modes.
    pub fn entry_count(&self) -> usize {
        [&self.time, &self.words, &self.zen, &self.quote, &self.custom]
            .iter()
            .flat_map(|table| table.values())
            .map(Vec::len)
            .sum()
    }
}

/// A user-defined result tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub personal_bests: PersonalBests,
}

/// Local snapshot of the signed-in user's profile and stats.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSnapshot {
    pub name: String,
    pub email: String,
    pub discord_id: Option<String>,
    pub personal_bests: PersonalBests,
    pub tags: Vec<Tag>,
}

impl UserSnapshot {
    /// Find a tag by id.
    pub fn tag_mut(&mut self, tag_id: &str) -> Option<&mut Tag> {
        self.tags.iter_mut().find(|t| t.id == tag_id)
    }
}

/// Result of clearing a tag's personal best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagPbResult {
    /// 1 when the tag was found and cleared.
    pub result_code: i32,
}

/// Identity provider linked to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthProviderId {
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "google.com")]
    Google,
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl AuthProviderId {
    /// Wire name of the provider.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Google => "google.com",
            Self::Unknown => "unknown",
        }
    }
}

/// The authenticated identity as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub providers: Vec<AuthProviderId>,
}

impl AuthUser {
    /// The first linked provider, which the account was created with.
    pub fn primary_provider(&self) -> Option<AuthProviderId> {
        self.providers.first().copied()
    }

    /// Whether email/password sign-in is linked.
    pub fn has_password(&self) -> bool {
        self.providers.contains(&AuthProviderId::Password)
    }
}
