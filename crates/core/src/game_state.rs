//! Game state module - owns one play session
//!
//! Ties together the snake, the fruit spawner, the scene machine and the
//! score board. Input arrives as [`Intent`]s, time as [`GameState::step`]
//! calls (one per paced frame) and timer notifications. Everything the host
//! should react to (sounds, persistence, timers) is queued as a
//! [`GameEvent`] and drained by the caller.

use crate::config;
use crate::error::GameError;
use crate::fruit::{Bounds, FruitSpawner};
use crate::scene::SceneMachine;
use crate::score::ScoreBoard;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Result of one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    pub moved: bool,
    pub ate_fruit: bool,
    pub collision: Option<Collision>,
}

/// Notifications for the host, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Moved,
    AteFruit { score: u32 },
    Collided(Collision),
    /// No free cell was left for the next fruit; the game ends.
    BoardFilled,
    SceneChanged { from: Scene, to: Scene },
    /// Session ended; the host should persist this value.
    PersistHighscore(u32),
    StartTimer(TimerId),
    StopTimer(TimerId),
    /// The play button (or play key) was activated.
    Clicked,
}

#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    snake: Snake,
    fruit: Position,
    spawner: FruitSpawner,
    scene: SceneMachine,
    score: ScoreBoard,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session on the start screen.
    pub fn new(config: GameConfig, seed: u32, highscore: u32) -> Result<Self, GameError> {
        config::validate(&config)?;

        let snake = Snake::new(config.center(), config.cell_size);
        let mut spawner = FruitSpawner::new(seed, Bounds::from_config(&config));
        let fruit = spawner.spawn(|p| snake.occupies(p), None)?;

        Ok(Self {
            config,
            snake,
            fruit,
            spawner,
            scene: SceneMachine::new(),
            score: ScoreBoard::new(highscore),
            events: Vec::with_capacity(16),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruit(&self) -> Position {
        self.fruit
    }

    pub fn scene(&self) -> Scene {
        self.scene.scene()
    }

    pub fn paused(&self) -> bool {
        self.scene.scene().is_paused()
    }

    pub fn blink_visible(&self) -> bool {
        self.scene.blink_visible()
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn highscore(&self) -> u32 {
        self.score.highscore()
    }

    /// Frames per second for the host clock.
    pub fn tick_rate(&self) -> u32 {
        self.config.tick_rate()
    }

    /// Place the fruit directly; used by tests and scripted scenarios.
    pub fn set_fruit(&mut self, fruit: Position) {
        self.fruit = fruit;
    }

    /// Apply an intent if the current scene accepts it.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Turn(direction) => {
                if !self.scene().is_running() {
                    return false;
                }
                self.snake.set_direction(direction)
            }
            Intent::TogglePause => self.transition(SceneMachine::toggle_pause),
            Intent::Play => {
                if self.scene() != Scene::Start {
                    return false;
                }
                self.events.push(GameEvent::Clicked);
                self.transition(SceneMachine::play)
            }
            Intent::Replay => self.replay(),
            Intent::Timer(id) => self.on_timer(id),
            // Quitting is the host's business.
            Intent::Quit => false,
        }
    }

    /// Timer notification from the host.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        match id {
            TimerId::Blink => self.scene.toggle_blink(),
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// Does nothing unless playing and unpaused. A collision ends the game.
    pub fn step(&mut self) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        if !self.scene().is_running() {
            return outcome;
        }

        let Some(head) = self.snake.advance() else {
            return outcome;
        };
        outcome.moved = true;
        self.events.push(GameEvent::Moved);

        if head == self.fruit {
            outcome.ate_fruit = true;
            self.snake.grow();
            self.score.record_fruit();
            self.events.push(GameEvent::AteFruit {
                score: self.score.score(),
            });

            let snake = &self.snake;
            match self.spawner.spawn(|p| snake.occupies(p), Some(self.fruit)) {
                Ok(fruit) => self.fruit = fruit,
                Err(_) => {
                    self.events.push(GameEvent::BoardFilled);
                    self.end_game();
                    return outcome;
                }
            }
        }

        // Checked against the chain as it stands after this step's growth decision.
        outcome.collision = if self.snake.hits_itself() {
            Some(Collision::SelfBite)
        } else {
            self.snake
                .check_bounds(self.config.width, self.config.height)
        };

        if let Some(collision) = outcome.collision {
            self.events.push(GameEvent::Collided(collision));
            self.end_game();
        }

        outcome
    }

    /// Move queued events into `out`, preserving order.
    pub fn drain_events_into(&mut self, out: &mut Vec<GameEvent>) {
        out.append(&mut self.events);
    }

    /// Take all queued events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.segments.clear();
        out.segments.extend(self.snake.segments());
        out.fruit = self.fruit;
        out.score = self.score.score();
        out.highscore = self.score.highscore();
        out.scene = self.scene.scene();
        out.started = self.snake.has_started();
        out.blink_visible = self.scene.blink_visible();
        out.width = self.config.width;
        out.height = self.config.height;
        out.cell_size = self.config.cell_size;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn end_game(&mut self) {
        if !self.transition(SceneMachine::end) {
            return;
        }
        let highscore = self.score.end_session();
        self.events.push(GameEvent::PersistHighscore(highscore));
        self.events.push(GameEvent::StartTimer(TimerId::Blink));
    }

    fn replay(&mut self) -> bool {
        if !self.transition(SceneMachine::replay) {
            return false;
        }

        self.snake.reset(self.config.center());
        self.score.reset();

        // Avoid the previous fruit cell unless it is the only one left.
        let snake = &self.snake;
        let mut fruit = self.spawner.spawn(|p| snake.occupies(p), Some(self.fruit));
        if fruit.is_err() {
            fruit = self.spawner.spawn(|p| snake.occupies(p), None);
        }
        if let Ok(fruit) = fruit {
            self.fruit = fruit;
        }

        self.events.push(GameEvent::StopTimer(TimerId::Blink));
        true
    }

    /// Run a scene transition and record it when applied.
    fn transition(&mut self, f: fn(&mut SceneMachine) -> bool) -> bool {
        let from = self.scene.scene();
        if !f(&mut self.scene) {
            return false;
        }
        let to = self.scene.scene();
        self.events.push(GameEvent::SceneChanged { from, to });
        true
    }
}
