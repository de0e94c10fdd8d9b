//! High-level runtime orchestrator.
//!
//! The runtime owns the session state and the collaborators, and drives the
//! simulation one turn at a time through [`GameEngine`].

use std::path::PathBuf;

use game_core::{
    ActionError, EntityId, GameConfig, GameEngine, GameError, GameState, GameStatus, HeroIntent,
    MapOracle, Order, resolve_hostile,
};

use crate::api::{CollaboratorKind, CommandSource, Outcome, Renderer, Result, RuntimeError};
use crate::oracle::RoomMap;
use crate::providers::HeroProvider;
use crate::scenario::{Scenario, ScenarioError};

/// When the renderer receives a fresh snapshot.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RenderCadence {
    /// After every actor that acted.
    #[default]
    PerActor,
    /// Once per turn, after the last actor.
    PerTurn,
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Seed for zombie placement in the default room.
    pub seed: u64,
    /// Number of zombies in the default room.
    pub hostiles: usize,
    pub render_cadence: RenderCadence,
    /// RON scenario replacing the default room.
    pub scenario_path: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            seed: 2,
            hostiles: 10,
            render_cadence: RenderCadence::default(),
            scenario_path: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_SEED` - Zombie placement seed (default: 2)
    /// - `DUNGEON_HOSTILES` - Zombie count (default: 10)
    /// - `DUNGEON_AGGRO_RADIUS` - Chase distance, exclusive (default: 8)
    /// - `DUNGEON_RENDER_CADENCE` - `per_actor` or `per_turn` (default: per_actor)
    /// - `DUNGEON_SCENARIO` - Path to a RON scenario (default: built-in room)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("DUNGEON_SEED") {
            config.seed = seed;
        }
        if let Some(hostiles) = read_env::<usize>("DUNGEON_HOSTILES") {
            config.hostiles = hostiles;
        }
        if let Some(radius) = read_env::<u32>("DUNGEON_AGGRO_RADIUS") {
            config.game_config = GameConfig::with_aggro_radius(radius);
        }
        if let Some(cadence) = read_env::<RenderCadence>("DUNGEON_RENDER_CADENCE") {
            config.render_cadence = cadence;
        }
        config.scenario_path = read_env::<PathBuf>("DUNGEON_SCENARIO");

        config
    }

    /// The configured scenario file, or the default room.
    pub fn scenario(&self) -> std::result::Result<Scenario, ScenarioError> {
        match &self.scenario_path {
            Some(path) => Scenario::load(path),
            None => Scenario::default_room(self.seed, self.hostiles),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    std::env::var(key).ok()?.parse().ok()
}

/// Turn driver for one dungeon session.
pub struct Runtime {
    config: RuntimeConfig,
    state: GameState,
    map: Box<dyn MapOracle>,
    input: Box<dyn CommandSource>,
    renderer: Box<dyn Renderer>,
    hero: HeroProvider,
    status: GameStatus,
    turn: u64,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Turns started so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Draws the initial frame and plays turns until the session terminates.
    ///
    /// Returns the process exit code.
    pub fn run(&mut self) -> Result<i32> {
        tracing::info!(
            actors = self.state.entities.actor_count(),
            items = self.state.entities.item_count(),
            cadence = %self.config.render_cadence,
            "session started"
        );
        self.render()?;

        loop {
            let status = self.play_turn()?;
            if let Some(code) = status.exit_code() {
                tracing::info!(code, turns = self.turn, "session ended");
                return Ok(code);
            }
        }
    }

    /// Plays exactly one turn: hero first, then every other living actor in
    /// creation order, then cleanup.
    ///
    /// Quitting and losing both end with the outcome screen and a single
    /// acknowledgment, after which the status is `Terminated(0)`.
    pub fn play_turn(&mut self) -> Result<GameStatus> {
        if !self.status.is_running() {
            return Ok(self.status);
        }

        self.turn += 1;
        let span = tracing::info_span!("turn", turn = self.turn);
        let _entered = span.enter();

        let turn_order = GameEngine::new(&mut self.state).turn_order();
        for actor in turn_order {
            if !GameEngine::new(&mut self.state).is_alive(actor) {
                tracing::trace!(%actor, "skipping actor killed earlier this turn");
                continue;
            }

            let order = if actor.is_hero() {
                match self.hero.next_intent(
                    self.input.as_mut(),
                    self.renderer.as_mut(),
                    &self.state.entities,
                )? {
                    HeroIntent::Quit => {
                        tracing::info!("hero quit");
                        return self.finish(Outcome::Quit);
                    }
                    HeroIntent::Act(order) => order,
                    HeroIntent::ChooseItem => Order::None,
                }
            } else {
                resolve_hostile(&self.state.entities, actor, &self.config.game_config)
                    .map_err(|e| RuntimeError::invariant(&e))?
            };

            self.execute(actor, order)?;

            if self.config.render_cadence == RenderCadence::PerActor {
                self.render()?;
            }
        }

        if self.config.render_cadence == RenderCadence::PerTurn {
            self.render()?;
        }

        let report = GameEngine::new(&mut self.state)
            .cleanup()
            .map_err(|e| RuntimeError::invariant(&e))?;
        for id in &report.removed {
            tracing::debug!(actor = %id, "removed dead actor");
        }

        if report.hero_dead {
            self.status.lose()?;
            tracing::info!(status = %self.status, "hero died");
            return self.finish(Outcome::Lost);
        }

        Ok(self.status)
    }

    fn execute(&mut self, actor: EntityId, order: Order) -> Result<()> {
        let result = GameEngine::new(&mut self.state).execute(self.map.as_ref(), actor, order);

        match result {
            Ok(outcome) => {
                tracing::debug!(%actor, ?order, ?outcome, "executed");
            }
            Err(error) => match error.action_error() {
                Some(ActionError::Blocked { destination }) => {
                    tracing::trace!(%actor, %destination, "blocked");
                }
                _ if error.severity().is_recoverable() => {
                    tracing::debug!(%actor, ?order, code = error.error_code(), %error, "action had no effect");
                }
                _ => {
                    tracing::error!(
                        %actor,
                        ?order,
                        code = error.error_code(),
                        severity = error.severity().as_str(),
                        %error,
                        "action failed"
                    );
                    return Err(RuntimeError::invariant(&error));
                }
            },
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let snapshot = self
            .state
            .snapshot()
            .map_err(|e| RuntimeError::invariant(&e))?;
        self.renderer
            .render(&snapshot)
            .map_err(RuntimeError::Render)
    }

    fn finish(&mut self, outcome: Outcome) -> Result<GameStatus> {
        self.renderer
            .show_outcome(outcome)
            .map_err(RuntimeError::Render)?;
        self.input.acknowledge().map_err(RuntimeError::Input)?;
        self.status.terminate(0)?;
        tracing::info!(%outcome, status = %self.status, "session over");
        Ok(self.status)
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    scenario: Option<Scenario>,
    map: Option<Box<dyn MapOracle>>,
    input: Option<Box<dyn CommandSource>>,
    renderer: Option<Box<dyn Renderer>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            scenario: None,
            map: None,
            input: None,
            renderer: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from this scenario instead of the configured one.
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Provide initial game state directly. Takes precedence over any scenario.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Override the static map. Defaults to the scenario's room.
    pub fn map(mut self, map: impl MapOracle + 'static) -> Self {
        self.map = Some(Box::new(map));
        self
    }

    pub fn command_source(mut self, input: impl CommandSource + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    pub fn renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn build(self) -> Result<Runtime> {
        let input = self.input.ok_or(RuntimeError::CollaboratorNotSet {
            kind: CollaboratorKind::CommandSource,
        })?;
        let renderer = self.renderer.ok_or(RuntimeError::CollaboratorNotSet {
            kind: CollaboratorKind::Renderer,
        })?;

        let (state, map) = match self.state {
            Some(state) => {
                let map = self
                    .map
                    .unwrap_or_else(|| Box::new(RoomMap::default_room()) as Box<dyn MapOracle>);
                (state, map)
            }
            None => {
                let scenario = match self.scenario {
                    Some(scenario) => scenario,
                    None => self.config.scenario()?,
                };
                let map: Box<dyn MapOracle> = match self.map {
                    Some(map) => map,
                    None => Box::new(scenario.room),
                };
                let state = scenario.build(map.as_ref())?;
                (state, map)
            }
        };

        Ok(Runtime {
            config: self.config,
            state,
            map,
            input,
            renderer,
            hero: HeroProvider,
            status: GameStatus::Running,
            turn: 0,
        })
    }
}
