use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Stored when the location is left blank.
pub const DEFAULT_LOCATION: &str = "General";
/// Stored when the sensation or timing is left blank.
pub const UNSPECIFIED: &str = "Unspecified";

/// Classical grouping of a clinical observation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum SymptomCategory {
    Mental,
    #[default]
    Physical,
    General,
    Modality,
    Sensation,
}

impl SymptomCategory {
    /// Every category, in the order the entry form offers them.
    pub const ALL: [SymptomCategory; 5] = [
        SymptomCategory::Mental,
        SymptomCategory::Physical,
        SymptomCategory::General,
        SymptomCategory::Modality,
        SymptomCategory::Sensation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomCategory::Mental => "Mental",
            SymptomCategory::Physical => "Physical",
            SymptomCategory::General => "General",
            SymptomCategory::Modality => "Modality",
            SymptomCategory::Sensation => "Sensation",
        }
    }
}

impl fmt::Display for SymptomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymptomCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SymptomCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidCategory(s.to_string()))
    }
}

impl TryFrom<String> for SymptomCategory {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The entry form's staging area: raw, untrimmed user input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomDraft {
    #[serde(default)]
    pub category: SymptomCategory,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub sensation: String,
    #[serde(default)]
    pub timing: String,
}

impl SymptomDraft {
    /// A draft can be recorded once it names a location or a sensation.
    pub fn is_recordable(&self) -> bool {
        !self.location.trim().is_empty() || !self.sensation.trim().is_empty()
    }

    /// Empty the free-text fields, keeping the selected category.
    pub fn clear_text(&mut self) {
        self.location.clear();
        self.sensation.clear();
        self.timing.clear();
    }
}

/// One structured clinical observation in the case totality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: Uuid,
    pub category: SymptomCategory,
    pub location: String,
    pub sensation: String,
    pub timing: String,
    pub recorded_at: jiff::Timestamp,
}

impl Symptom {
    /// Build a record from a draft, trimming every field and filling blanks
    /// with their sentinels.
    ///
    /// Fails with [`CoreError::IncompleteSymptom`] when both the location and
    /// the sensation are blank.
    pub fn from_draft(draft: &SymptomDraft) -> Result<Self, CoreError> {
        if !draft.is_recordable() {
            return Err(CoreError::IncompleteSymptom);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            category: draft.category,
            location: or_sentinel(&draft.location, DEFAULT_LOCATION),
            sensation: or_sentinel(&draft.sensation, UNSPECIFIED),
            timing: or_sentinel(&draft.timing, UNSPECIFIED),
            recorded_at: jiff::Timestamp::now(),
        })
    }
}

fn or_sentinel(value: &str, sentinel: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        sentinel.to_string()
    } else {
        trimmed.to_string()
    }
}
