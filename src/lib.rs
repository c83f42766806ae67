//! Creature Adventure Battle Engine
//!
//! A turn-based creature-battle engine: two combatants exchange
//! probabilistic attacks and special actions (capture, flee) until one of
//! the terminal outcomes is reached. The engine is deliberately small and
//! deterministic — randomness is injected, events are collected rather than
//! printed — so the interactive shell in `main.rs` stays a thin consumer.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod combatant;
pub mod errors;
pub mod moves;
pub mod prefab;
pub mod roster;

// --- PUBLIC API RE-EXPORTS ---
// The most important types, importable directly from the crate root.

// Core battle session and its boundary types.
pub use battle::session::{Action, BattleSession, SessionOutcome};
pub use battle::state::{BattleEvent, BattleRng, EventBus, SessionState};

// Core runtime types for an encounter.
pub use combatant::Combatant;
pub use moves::Move;
pub use roster::Roster;

// Crate-specific error and result types.
pub use errors::{ActionError, ActionResult, EngineError, EngineResult, RosterError};
