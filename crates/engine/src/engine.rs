//! Frame driver: input in, events out.
//!
//! [`GameState`] only queues [`GameEvent`]s. The engine owns the collaborators
//! and routes each event to audio, persistence or the blink timer.

use arrayvec::ArrayVec;
use tracing::{debug, info, warn};

use tui_snake_core::{GameError, GameEvent, GameSnapshot, GameState};
use tui_snake_input::{InputMapper, PeriodicTimer, RawEvent};

use crate::ports::{AudioSink, HighscoreStore};
use crate::types::{GameConfig, Intent, Scene, Sound, TimerId};

/// Timer firings delivered per frame; a long stall does not replay a backlog.
const MAX_TIMER_FIRES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Quit,
}

pub struct Engine<S, A> {
    state: GameState,
    mapper: InputMapper,
    blink: PeriodicTimer,
    store: S,
    audio: A,
    /// Reused event buffer.
    events: Vec<GameEvent>,
}

impl<S: HighscoreStore, A: AudioSink> Engine<S, A> {
    /// Load the stored high score and start on the start screen.
    ///
    /// An unreadable store is logged and treated as a high score of 0.
    pub fn new(config: GameConfig, seed: u32, mut store: S, audio: A) -> Result<Self, GameError> {
        let highscore = match store.load_highscore() {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "could not load highscore, starting from 0");
                0
            }
        };
        let state = GameState::new(config, seed, highscore)?;
        info!(
            width = config.width,
            height = config.height,
            cell_size = config.cell_size,
            seed,
            highscore,
            "game created"
        );

        Ok(Self {
            mapper: InputMapper::new(config.play_button()),
            blink: PeriodicTimer::new(TimerId::Blink, config.blink_interval_ms),
            state,
            store,
            audio,
            events: Vec::with_capacity(16),
        })
    }

    /// Run one frame: apply `input`, advance timers by `elapsed_ms`, step the
    /// simulation and dispatch whatever it reported.
    pub fn frame(
        &mut self,
        input: impl IntoIterator<Item = RawEvent>,
        elapsed_ms: u32,
    ) -> FrameStatus {
        self.mapper.begin_frame();

        for event in input {
            if self.handle(event) == FrameStatus::Quit {
                info!(score = self.state.score(), "quit requested");
                return FrameStatus::Quit;
            }
        }

        let fired = (self.blink.advance(elapsed_ms) as usize).min(MAX_TIMER_FIRES);
        let mut timer_events: ArrayVec<RawEvent, MAX_TIMER_FIRES> = ArrayVec::new();
        for _ in 0..fired {
            timer_events.push(self.blink.event());
        }
        for event in timer_events {
            self.handle(event);
        }

        self.state.step();
        self.dispatch();
        FrameStatus::Continue
    }

    fn handle(&mut self, event: RawEvent) -> FrameStatus {
        match self.mapper.map(event, self.state.scene()) {
            Some(Intent::Quit) => FrameStatus::Quit,
            Some(intent) => {
                if self.state.apply_intent(intent) {
                    debug!(intent = intent.as_str(), "intent applied");
                }
                FrameStatus::Continue
            }
            None => FrameStatus::Continue,
        }
    }

    fn dispatch(&mut self) {
        self.state.drain_events_into(&mut self.events);
        for event in self.events.drain(..) {
            match event {
                GameEvent::Moved => self.audio.play(Sound::Move),
                GameEvent::AteFruit { score } => {
                    debug!(score, "fruit eaten");
                    debug!(fruit = ?self.state.fruit(), "fruit spawned");
                    self.audio.play(Sound::Fruit);
                }
                GameEvent::Collided(collision) => {
                    info!(?collision, score = self.state.score(), "collision");
                    self.audio.play(Sound::Collision);
                }
                GameEvent::BoardFilled => info!("board filled"),
                GameEvent::SceneChanged { from, to } => {
                    info!(from = from.as_str(), to = to.as_str(), "scene changed")
                }
                GameEvent::PersistHighscore(value) => {
                    if let Err(e) = self.store.save_highscore(value) {
                        warn!(error = %e, value, "could not save highscore");
                    }
                }
                GameEvent::StartTimer(TimerId::Blink) => self.blink.arm(),
                GameEvent::StopTimer(TimerId::Blink) => self.blink.disarm(),
                GameEvent::Clicked => self.audio.play(Sound::Click),
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
        out.play_hovered = out.scene == Scene::Start && self.mapper.hovered();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    pub fn tick_rate(&self) -> u32 {
        self.state.tick_rate()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted setups such as placing fruit in tests.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn blink_armed(&self) -> bool {
        self.blink.is_armed()
    }
}
