use crate::error::{PlanError, Result};

/// External plan engine used to turn serialized plan text back into an
/// executable plan representation.
///
/// Serialized forms of logically identical plans are not guaranteed to be
/// byte-identical, so callers that need plan equivalence deserialize both
/// sides and ask the engine for its own fast structural comparison instead
/// of comparing raw text.
///
/// The session is always an explicit input: implementations must not
/// discover one from process-global state. Callers that need a session use
/// [`PlanEngine::require_session`], which fails with
/// [`PlanError::MissingContext`] when none is active.
pub trait PlanEngine {
    /// Handle to an active engine session.
    type Session;
    /// Deserialized, executable plan representation.
    type Plan;

    /// Returns the currently active session, if any.
    fn active_session(&self) -> Option<&Self::Session>;

    /// Parses serialized plan text into a plan, using the given session.
    ///
    /// Malformed or incompatible text fails with
    /// [`PlanError::Deserialization`].
    fn deserialize(&self, raw: &str, session: &Self::Session) -> Result<Self::Plan>;

    /// Fast structural equivalence check between two deserialized plans.
    fn fast_equals(&self, a: &Self::Plan, b: &Self::Plan) -> bool;

    /// Returns the active session or fails with [`PlanError::MissingContext`].
    fn require_session(&self) -> Result<&Self::Session> {
        self.active_session().ok_or(PlanError::MissingContext)
    }
}
