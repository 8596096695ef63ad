use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::symptom::{Symptom, SymptomDraft};

/// The ordered set of symptoms recorded for the current case.
///
/// Only grows by [`CaseTotality::add`] and shrinks by
/// [`CaseTotality::remove`]. Insertion order is preserved and duplicates are
/// allowed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseTotality {
    symptoms: Vec<Symptom>,
}

impl CaseTotality {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a draft at the end of the totality.
    ///
    /// Returns the stored record, or `None` (leaving the totality untouched)
    /// when the draft has neither a location nor a sensation.
    pub fn add(&mut self, draft: &SymptomDraft) -> Option<&Symptom> {
        let symptom = Symptom::from_draft(draft).ok()?;
        self.symptoms.push(symptom);
        self.symptoms.last()
    }

    /// Remove the record with the given id. Returns whether one was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        match self.symptoms.iter().position(|s| s.id == id) {
            Some(index) => {
                self.symptoms.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symptom> {
        self.symptoms.iter()
    }

    pub fn as_slice(&self) -> &[Symptom] {
        &self.symptoms
    }
}

impl<'a> IntoIterator for &'a CaseTotality {
    type Item = &'a Symptom;
    type IntoIter = std::slice::Iter<'a, Symptom>;

    fn into_iter(self) -> Self::IntoIter {
        self.symptoms.iter()
    }
}
