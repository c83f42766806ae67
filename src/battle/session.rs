use crate::battle::calculators::{calculate_catch_chance, roll_capture_success};
use crate::battle::state::{BattleEvent, BattleRng, EventBus, SessionState};
use crate::combatant::Combatant;
use crate::errors::{ActionError, ActionResult};
use serde::{Deserialize, Serialize};

/// What the shell asks the engine to do for one round.
///
/// An exhaustive tagged type: unrecognized actions are unrepresentable, so
/// input validation is purely a shell concern.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // The index refers to the move's position in the player combatant's move list.
    Fight { move_index: usize },
    Capture,
    Flee,
}

/// The result a finished session hands back to the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// The wild combatant fainted; nothing joins the roster.
    DefenderDefeated,
    /// Capture succeeded; the payload is the exact instance that was in play.
    DefenderCaptured(Combatant),
    /// The player ran; no roster change.
    Fled,
    /// The player's combatant fainted. The surrounding game loop decides
    /// whether the whole roster is down.
    PlayerLost,
}

/// One encounter between the player's active combatant and a wild one.
///
/// The session borrows the player side (it lives in the roster and must keep
/// any damage it takes) and owns the wild side for the encounter's duration.
/// Each `submit_action` call resolves a full round, including the wild
/// defender's counter-attack, before returning. Terminal states are final:
/// further actions are rejected without mutation.
#[derive(Debug)]
pub struct BattleSession<'a> {
    player: &'a mut Combatant,
    wild: Combatant,
    state: SessionState,
}

impl<'a> BattleSession<'a> {
    pub fn new(player: &'a mut Combatant, wild: Combatant, events: &mut EventBus) -> Self {
        events.push(BattleEvent::WildAppeared {
            name: wild.name.clone(),
        });
        BattleSession {
            player,
            wild,
            state: SessionState::Active,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn player(&self) -> &Combatant {
        self.player
    }

    pub fn wild(&self) -> &Combatant {
        &self.wild
    }

    /// Resolve one round of the encounter.
    ///
    /// Returns the state after the round. Rejected actions (`Err`) consume
    /// no turn and mutate nothing; the shell re-prompts and the defender
    /// gets no counter-attack.
    pub fn submit_action(
        &mut self,
        action: Action,
        rng: &mut BattleRng,
        events: &mut EventBus,
    ) -> ActionResult<SessionState> {
        if self.is_over() {
            return Err(ActionError::SessionOver);
        }

        match action {
            Action::Fight { move_index } => {
                if move_index >= self.player.moves().len() {
                    return Err(ActionError::InvalidMoveIndex(move_index));
                }
                self.player
                    .perform_attack(&mut self.wild, move_index, rng, events);
                if self.wild.is_incapacitated() {
                    // Round ends immediately; no counter-attack.
                    self.state = SessionState::DefenderDefeated;
                } else {
                    self.defender_counter_attack(rng, events);
                }
            }
            Action::Capture => {
                let chance =
                    calculate_catch_chance(self.wild.max_health(), self.wild.current_health());
                events.push(BattleEvent::CaptureAttempted {
                    target: self.wild.name.clone(),
                    chance,
                });
                if roll_capture_success(chance, rng) {
                    events.push(BattleEvent::CaptureSucceeded {
                        target: self.wild.name.clone(),
                    });
                    self.state = SessionState::DefenderCaptured;
                } else {
                    events.push(BattleEvent::BrokeFree {
                        target: self.wild.name.clone(),
                    });
                    if !self.wild.is_incapacitated() {
                        self.defender_counter_attack(rng, events);
                    }
                }
            }
            Action::Flee => {
                events.push(BattleEvent::FledBattle);
                self.state = SessionState::Fled;
            }
        }

        Ok(self.state)
    }

    /// Consume the session once it is terminal. `None` while still active.
    pub fn into_outcome(self) -> Option<SessionOutcome> {
        match self.state {
            SessionState::Active => None,
            SessionState::DefenderDefeated => Some(SessionOutcome::DefenderDefeated),
            SessionState::DefenderCaptured => Some(SessionOutcome::DefenderCaptured(self.wild)),
            SessionState::Fled => Some(SessionOutcome::Fled),
            SessionState::PlayerLost => Some(SessionOutcome::PlayerLost),
        }
    }

    // Fixed wild policy: always the first move.
    fn defender_counter_attack(&mut self, rng: &mut BattleRng, events: &mut EventBus) {
        self.wild.perform_attack(self.player, 0, rng, events);
        if self.player.is_incapacitated() {
            self.state = SessionState::PlayerLost;
        }
    }
}
