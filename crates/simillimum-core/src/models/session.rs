//! The single owned state container behind the case-recording page.
//!
//! A [`Session`] holds the case totality, the entry form's staging area, the
//! one-slot analysis result and the in-flight flag. Every mutation goes
//! through a transition method so the rendered state is always one of
//! [`RenderState`]'s variants.

use serde::Serialize;
use uuid::Uuid;

use super::analysis::AnalysisResult;
use super::symptom::{Symptom, SymptomDraft};
use super::totality::CaseTotality;
use super::transaction::RepertorizationTransaction;

pub const EMPTY_TOTALITY_MESSAGE: &str = "Please add at least one complete symptom.";
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Repertorization failed. Ensure symptoms are described precisely.";

/// What the analysis panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderState {
    Idle,
    Analyzing,
    Result,
    Error,
}

/// A user-facing message attached to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// Analysis was triggered with nothing recorded. Shown inline next to
    /// the trigger; does not change the render state.
    EmptyTotality,
    /// The last analysis attempt failed for any reason.
    AnalysisFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::EmptyTotality => EMPTY_TOTALITY_MESSAGE,
            Notice::AnalysisFailed => ANALYSIS_FAILED_MESSAGE,
        }
    }
}

/// Why `begin_analysis` refused to start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisRejected {
    EmptyTotality,
    InFlight,
}

#[derive(Debug, Default)]
pub struct Session {
    totality: CaseTotality,
    draft: SymptomDraft,
    is_analyzing: bool,
    result: Option<AnalysisResult>,
    last_transaction: Option<RepertorizationTransaction>,
    notice: Option<Notice>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn totality(&self) -> &CaseTotality {
        &self.totality
    }

    pub fn draft(&self) -> &SymptomDraft {
        &self.draft
    }

    pub fn is_analyzing(&self) -> bool {
        self.is_analyzing
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn last_transaction(&self) -> Option<&RepertorizationTransaction> {
        self.last_transaction.as_ref()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// The analyze trigger is offered only with something recorded and no
    /// request in flight.
    pub fn can_analyze(&self) -> bool {
        !self.totality.is_empty() && !self.is_analyzing
    }

    pub fn render_state(&self) -> RenderState {
        if self.is_analyzing {
            RenderState::Analyzing
        } else if self.notice == Some(Notice::AnalysisFailed) {
            RenderState::Error
        } else if self.result.is_some() {
            RenderState::Result
        } else {
            RenderState::Idle
        }
    }

    /// Submit the entry form.
    ///
    /// On success the staging area's text is cleared (the category stays
    /// selected) and a stale empty-totality hint is dropped. A rejected draft
    /// is kept in the staging area as typed. The render state never changes.
    pub fn add_symptom(&mut self, draft: SymptomDraft) -> Option<Symptom> {
        let added = self.totality.add(&draft).cloned();
        self.draft = draft;
        if added.is_some() {
            self.draft.clear_text();
            if self.notice == Some(Notice::EmptyTotality) {
                self.notice = None;
            }
        }
        added
    }

    pub fn remove_symptom(&mut self, id: Uuid) -> bool {
        self.totality.remove(id)
    }

    /// Trigger analysis.
    ///
    /// Returns a snapshot of the totality to build the prompt from. With an
    /// empty totality the inline hint is set and nothing else changes; while a
    /// request is already in flight the trigger is refused outright.
    pub fn begin_analysis(&mut self) -> Result<Vec<Symptom>, AnalysisRejected> {
        if self.is_analyzing {
            return Err(AnalysisRejected::InFlight);
        }
        if self.totality.is_empty() {
            self.notice = Some(Notice::EmptyTotality);
            return Err(AnalysisRejected::EmptyTotality);
        }

        self.notice = None;
        self.is_analyzing = true;
        Ok(self.totality.as_slice().to_vec())
    }

    /// The in-flight request succeeded; the result slot is replaced wholesale.
    pub fn complete_analysis(
        &mut self,
        result: AnalysisResult,
        transaction: RepertorizationTransaction,
    ) {
        self.is_analyzing = false;
        self.notice = None;
        self.result = Some(result);
        self.last_transaction = Some(transaction);
    }

    /// The in-flight request failed; any earlier result is left in place.
    pub fn fail_analysis(&mut self) {
        self.is_analyzing = false;
        self.notice = Some(Notice::AnalysisFailed);
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            state: self.render_state(),
            can_analyze: self.can_analyze(),
            error: self.notice.map(|n| n.message()),
            symptoms: self.totality.as_slice(),
            result: self.result.as_ref(),
            transaction: self.last_transaction.as_ref(),
        }
    }
}

/// Read-only view of a session for the JSON API.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub state: RenderState,
    pub can_analyze: bool,
    pub error: Option<&'static str>,
    pub symptoms: &'a [Symptom],
    pub result: Option<&'a AnalysisResult>,
    pub transaction: Option<&'a RepertorizationTransaction>,
}
