//! The match orchestrator.

use im::Vector;
use smallvec::SmallVec;

use super::phase::Phase;
use super::snapshot::DuelSnapshot;
use super::state::{FighterSetup, MatchState};
use crate::combat::{
    consume_potion, create_fighter, resolve_attack, AttackOutcome, AttackResult, Fighter, PotionEffect, PotionKind,
    Species,
};
use crate::core::{DuelAction, DuelConfig, DuelError, DuelEvent, EventRecord, GameRng, Result, Side, SideMap};
use crate::rules::{self, MatchResult, RulesEngine};

/// What a combat action produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Attack(AttackOutcome),
    Potion(PotionEffect),
}

/// Result of one combat turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Side that acted.
    pub side: Side,
    pub outcome: ActionOutcome,
    /// Set when this turn decided the round.
    pub round_winner: Option<Side>,
    /// Set when this turn decided the match.
    pub match_winner: Option<Side>,
}

/// A best-of-N duel between two sides.
///
/// Drives the phase sequence (setup, combat rounds, potion selection between
/// rounds, victory) and keeps an event history for the presentation layer.
/// Combat actions are applied through [`RulesEngine`].
///
/// ## Example
///
/// ```
/// use fantasy_duel::combat::{PotionKind, Species};
/// use fantasy_duel::core::{DuelAction, DuelConfig};
/// use fantasy_duel::duel::{Duel, Phase};
/// use fantasy_duel::rules::RulesEngine;
///
/// let mut duel = Duel::new(DuelConfig::default(), 42).unwrap();
/// duel.start_match().unwrap();
/// duel.register_fighter("Grok", Species::Goblin, PotionKind::Attack).unwrap();
/// duel.register_fighter("Ada", Species::Human, PotionKind::Health).unwrap();
/// duel.start_round().unwrap();
///
/// while duel.state().phase == Phase::Combat {
///     duel.apply_action(DuelAction::Attack).unwrap();
/// }
/// assert_eq!(duel.state().phase, Phase::BetweenRounds);
/// ```
#[derive(Clone, Debug)]
pub struct Duel {
    config: DuelConfig,
    rng: GameRng,
    state: MatchState,
    setups: SideMap<Option<FighterSetup>>,
    fighters: Option<SideMap<Fighter>>,
    history: Vector<EventRecord>,
}

impl Duel {
    /// Create a duel with a seeded RNG.
    pub fn new(config: DuelConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create a duel with the given RNG.
    pub fn with_rng(config: DuelConfig, rng: GameRng) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            state: MatchState::default(),
            setups: SideMap::with_value(None),
            fighters: None,
            history: Vector::new(),
        })
    }

    /// Rebuild a duel from a snapshot, resuming the same random stream.
    ///
    /// Fails if the snapshot's phase and fighters disagree: fighters exist
    /// from `Ready` onwards and not before.
    pub fn restore(snapshot: DuelSnapshot) -> Result<Self> {
        snapshot.config.validate()?;
        let needs_fighters = !matches!(snapshot.state.phase, Phase::NewGame | Phase::Setup);
        if needs_fighters != snapshot.fighters.is_some() {
            return Err(DuelError::Snapshot(format!(
                "phase {:?} does not match fighters present = {}",
                snapshot.state.phase,
                snapshot.fighters.is_some()
            )));
        }
        Ok(Self {
            config: snapshot.config,
            rng: GameRng::from_state(&snapshot.rng),
            state: snapshot.state,
            setups: snapshot.setups,
            fighters: snapshot.fighters,
            history: snapshot.history,
        })
    }

    /// Capture the complete duel state.
    #[must_use]
    pub fn snapshot(&self) -> DuelSnapshot {
        DuelSnapshot {
            config: self.config.clone(),
            state: self.state.clone(),
            setups: self.setups.clone(),
            fighters: self.fighters.clone(),
            rng: self.rng.state(),
            history: self.history.clone(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// The fighter on `side`, once both fighters have been built.
    #[must_use]
    pub fn fighter(&self, side: Side) -> Option<&Fighter> {
        self.fighters.as_ref().map(|f| &f[side])
    }

    /// A side's setup choices.
    #[must_use]
    pub fn setup(&self, side: Side) -> Option<&FighterSetup> {
        self.setups[side].as_ref()
    }

    /// Everything that has happened in the current match.
    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    /// The match result once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        self.state.winner.map(MatchResult::Winner)
    }

    // === Phase transitions ===

    /// Begin a new match: reset all bookkeeping and roll first-round initiative.
    ///
    /// The side with initiative also sets up first.
    pub fn start_match(&mut self) -> Result<Side> {
        if self.state.phase.is_active() {
            return Err(self.wrong_phase(Phase::NewGame));
        }

        let initiative = rules::roll_initiative(&self.config, &mut self.rng);
        self.state = self.state.for_new_match(initiative);
        self.setups = SideMap::with_value(None);
        self.fighters = None;
        self.history = Vector::new();

        tracing::info!(%initiative, "match started");
        self.record(DuelEvent::MatchStarted { initiative });
        Ok(initiative)
    }

    /// Register the fighter of the side that is up.
    ///
    /// A blank name falls back to "Left player" / "Right player". Once both
    /// sides are registered the fighters are built and the duel is `Ready`.
    /// Returns the side that was registered.
    pub fn register_fighter(&mut self, name: &str, species: Species, potion: PotionKind) -> Result<Side> {
        self.expect_phase(Phase::Setup)?;

        let side = self.state.acting;
        let name = match name.trim() {
            "" => side.default_name().to_string(),
            trimmed => trimmed.to_string(),
        };
        self.setups[side] = Some(FighterSetup {
            name,
            species,
            potion: Some(potion),
        });

        self.advance_selection();
        Ok(side)
    }

    /// Pick the potion the side that is up will carry into the next round.
    ///
    /// The side that moved second in the finished round picks first. Once
    /// both have picked the fighters are rebuilt and the duel is `Ready`.
    pub fn select_potion(&mut self, potion: PotionKind) -> Result<Side> {
        self.expect_phase(Phase::BetweenRounds)?;

        let side = self.state.acting;
        if let Some(setup) = self.setups[side].as_mut() {
            setup.potion = Some(potion);
        }

        self.advance_selection();
        Ok(side)
    }

    /// Start the next combat round and return the side with initiative.
    ///
    /// The fighters were already built when the duel became `Ready`; this
    /// only applies the initiative rule and opens combat.
    pub fn start_round(&mut self) -> Result<Side> {
        self.expect_phase(Phase::Ready)?;

        self.state.round_number += 1;
        let round = self.state.round_number;
        if round > 1 {
            self.state.initiative =
                rules::initiative_for_round(round, self.state.initiative, &self.config, &mut self.rng);
        }
        self.state.acting = self.state.initiative;
        self.state.phase = Phase::Combat;

        let initiative = self.state.initiative;
        tracing::info!(round, %initiative, "round started");
        self.record(DuelEvent::RoundStarted { round, initiative });
        Ok(initiative)
    }

    // === Internals ===

    fn record(&mut self, event: DuelEvent) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(EventRecord::new(event, self.state.round_number, sequence));
    }

    fn wrong_phase(&self, expected: Phase) -> DuelError {
        DuelError::WrongPhase {
            expected,
            actual: self.state.phase,
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<()> {
        if self.state.phase == expected {
            Ok(())
        } else {
            Err(self.wrong_phase(expected))
        }
    }

    /// After a setup or potion choice: build fighters when both sides are
    /// done, otherwise hand over to the other side.
    fn advance_selection(&mut self) {
        let complete = self
            .setups
            .iter()
            .all(|(_, setup)| setup.as_ref().is_some_and(|s| s.potion.is_some()));

        if complete {
            self.build_fighters();
            self.state.phase = Phase::Ready;
        } else {
            self.state.pass_turn();
        }
    }

    fn build_fighters(&mut self) {
        let mut built = Vec::with_capacity(2);
        for side in Side::all() {
            let Some(setup) = self.setups[side].clone() else {
                return;
            };
            let potion = setup.potion.unwrap_or_default();
            let id = self.state.alloc_fighter_id();
            let fighter = create_fighter(id, setup.name.clone(), setup.species, potion, &self.config, &mut self.rng);
            self.record(DuelEvent::FighterReady {
                side,
                name: setup.name,
                species: setup.species,
                potion,
            });
            built.push(fighter);
        }

        let mut built = built.into_iter();
        if let (Some(left), Some(right)) = (built.next(), built.next()) {
            self.fighters = Some(SideMap::from_pair(left, right));
        }
    }

    /// Award the round to `winner`, and the match if it has enough rounds.
    fn finish_round(&mut self, winner: Side) -> Option<Side> {
        let round = self.state.round_number;
        self.state.rounds_won[winner] += 1;
        tracing::info!(%winner, round, "round won");
        self.record(DuelEvent::RoundWon { side: winner, round });

        if let Some(champion) = rules::match_winner(&self.state.rounds_won, self.config.rounds_to_win) {
            self.state.phase = Phase::MatchOver;
            self.state.winner = Some(champion);
            tracing::info!(winner = %champion, rounds = round, "match won");
            self.record(DuelEvent::MatchWon { side: champion });
            return Some(champion);
        }

        self.state.phase = Phase::BetweenRounds;
        self.state.acting = self.state.initiative.opponent();
        for (_, setup) in self.setups.iter_mut() {
            if let Some(setup) = setup.as_mut() {
                setup.potion = None;
            }
        }
        None
    }
}

impl RulesEngine for Duel {
    type Action = DuelAction;
    type Outcome = TurnOutcome;
    type Error = DuelError;

    fn legal_actions(&self) -> SmallVec<[DuelAction; 2]> {
        let mut actions = SmallVec::new();
        if self.state.phase != Phase::Combat {
            return actions;
        }
        let Some(fighter) = self.fighter(self.state.acting) else {
            return actions;
        };

        actions.push(DuelAction::Attack);
        if fighter.held_potion().is_some() {
            actions.push(DuelAction::DrinkPotion);
        }
        actions
    }

    fn apply_action(&mut self, action: DuelAction) -> Result<TurnOutcome> {
        if self.state.phase == Phase::MatchOver {
            return Err(DuelError::IllegalAction {
                action,
                reason: "the match is over",
            });
        }
        self.expect_phase(Phase::Combat)?;

        let side = self.state.acting;
        let Some(fighters) = self.fighters.as_mut() else {
            return Err(DuelError::IllegalAction {
                action,
                reason: "no fighters on the field",
            });
        };
        let (actor, opponent) = fighters.split_mut(side);

        let (outcome, event) = match action {
            DuelAction::Attack => {
                let attack = resolve_attack(actor, opponent, &self.config, &mut self.rng);
                let event = match attack.result {
                    AttackResult::Hit { damage } => DuelEvent::AttackHit {
                        side,
                        damage,
                        remaining: opponent.hit_points(),
                    },
                    AttackResult::Absorbed => DuelEvent::AttackAbsorbed { side },
                    AttackResult::Missed | AttackResult::SelfTarget => DuelEvent::AttackMissed {
                        side,
                        roll: attack.roll.unwrap_or_default(),
                    },
                };
                (ActionOutcome::Attack(attack), event)
            }
            DuelAction::DrinkPotion => {
                if !actor.held_potion().is_some() {
                    return Err(DuelError::IllegalAction {
                        action,
                        reason: "no potion held",
                    });
                }
                let effect = consume_potion(actor, &self.config);
                (ActionOutcome::Potion(effect), DuelEvent::PotionConsumed { side, effect })
            }
        };

        let round_winner = rules::round_winner(&fighters[Side::Left], &fighters[Side::Right]);
        self.record(event);

        let match_winner = match round_winner {
            Some(winner) => self.finish_round(winner),
            None => {
                self.state.pass_turn();
                None
            }
        };

        Ok(TurnOutcome {
            side,
            outcome,
            round_winner,
            match_winner,
        })
    }

    fn is_terminal(&self) -> Option<MatchResult> {
        self.result()
    }
}
