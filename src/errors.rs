use std::fmt;

/// Main error type for the battle engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Error related to invalid action selection during a session
    Action(ActionError),
    /// Error related to roster queries
    Roster(RosterError),
}

/// Errors related to action selection.
///
/// These are always recoverable: the session rejects the action without
/// mutating any state and the shell re-prompts. Misses and failed captures
/// are ordinary outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Move index is outside the attacker's move list
    InvalidMoveIndex(usize),
    /// The session already reached a terminal state
    SessionOver,
}

/// Errors related to roster queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Every roster member is incapacitated; the player must rest
    NoEligibleCombatant,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Action(err) => write!(f, "Action error: {}", err),
            EngineError::Roster(err) => write!(f, "Roster error: {}", err),
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::InvalidMoveIndex(index) => write!(f, "Invalid move index: {}", index),
            ActionError::SessionOver => write!(f, "Session already reached a terminal state"),
        }
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::NoEligibleCombatant => {
                write!(f, "No eligible combatant: the whole roster is incapacitated")
            }
        }
    }
}

impl std::error::Error for EngineError {}
impl std::error::Error for ActionError {}
impl std::error::Error for RosterError {}

impl From<ActionError> for EngineError {
    fn from(err: ActionError) -> Self {
        EngineError::Action(err)
    }
}

impl From<RosterError> for EngineError {
    fn from(err: RosterError) -> Self {
        EngineError::Roster(err)
    }
}

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// Type alias for Results using ActionError
pub type ActionResult<T> = Result<T, ActionError>;
