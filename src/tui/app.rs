//! Application state and input handling.

use crate::audio::TonePlayer;
use crate::confetti::ConfettiOverlay;
use crate::config::ArcadeConfig;
use crate::games::grid_battle::GridBattle;
use crate::games::heart_hunt::HeartHunt;
use crate::games::memory_match::MemoryMatch;
use crate::games::reaction_tile::ReactionTile;
use crate::games::scripted_reveal::ScriptedReveal;
use crate::games::tap_target::TapTarget;
use crate::games::trivia::Trivia;
use crate::games::truth_or_dare::{PromptKind, TruthOrDare};
use crate::games::GameKind;
use crate::rng::ArcadeRng;
use crate::session::{Effect, PlayerSlot};
use crate::tui::input;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;
use strum::IntoEnumIterator;
use tracing::info;

/// A running game session. Dropping a variant tears down every timer
/// and pending effect the session owned.
#[derive(Debug)]
pub enum Session {
    /// Grid battle in progress.
    GridBattle(GridBattle),
    /// Memory match in progress.
    MemoryMatch(MemoryMatch),
    /// Tap target in progress.
    TapTarget(TapTarget),
    /// Reaction tile in progress.
    ReactionTile(ReactionTile),
    /// Trivia in progress.
    Trivia(Trivia),
    /// Love calculator in progress.
    ScriptedReveal(ScriptedReveal),
    /// Heart hunt in progress.
    HeartHunt(HeartHunt),
    /// Truth or dare in progress.
    TruthOrDare(TruthOrDare),
}

/// What the terminal is showing.
#[derive(Debug)]
pub enum Screen {
    /// The game menu.
    Menu,
    /// A game session.
    Game(Session),
}

/// Top-level application state.
#[derive(Debug)]
pub struct App {
    config: ArcadeConfig,
    rng: ArcadeRng,
    tones: TonePlayer,
    overlay: ConfettiOverlay,
    screen: Screen,
    cursor: usize,
    quit: bool,
}

impl App {
    /// Builds the app on the menu screen.
    pub fn new(config: ArcadeConfig, rng: ArcadeRng) -> Self {
        let tones = TonePlayer::new(*config.muted());
        Self {
            config,
            rng,
            tones,
            overlay: ConfettiOverlay::new(),
            screen: Screen::Menu,
            cursor: 0,
            quit: false,
        }
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Menu cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Player names and settings.
    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    /// The confetti overlay, for rendering.
    pub fn overlay(&self) -> &ConfettiOverlay {
        &self.overlay
    }

    /// Display name for a player slot.
    pub fn name_of(&self, slot: PlayerSlot) -> &str {
        match slot {
            PlayerSlot::A => self.config.player_a(),
            PlayerSlot::B => self.config.player_b(),
        }
    }

    /// Advances every live timer by the elapsed tick.
    pub fn advance(&mut self, dt: Duration) {
        match &mut self.screen {
            Screen::Menu => {}
            Screen::Game(session) => match session {
                Session::GridBattle(_) | Session::TruthOrDare(_) => {}
                Session::MemoryMatch(game) => game.advance(dt),
                Session::TapTarget(game) => game.advance(dt),
                Session::ReactionTile(game) => game.advance(dt),
                Session::Trivia(game) => game.advance(dt),
                Session::ScriptedReveal(game) => game.advance(dt),
                Session::HeartHunt(game) => game.advance(dt),
            },
        }
        self.apply_effects();
        self.overlay.advance(dt);
    }

    /// Routes a key event to the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match &mut self.screen {
            Screen::Menu => self.handle_menu_key(key.code),
            Screen::Game(_) => self.handle_game_key(key.code),
        }
        self.apply_effects();
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        let count = GameKind::iter().count();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = (self.cursor + count - 1) % count;
                self.tones.play(crate::audio::ToneCue::Hover);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1) % count;
                self.tones.play(crate::audio::ToneCue::Hover);
            }
            KeyCode::Enter => {
                if let Some(kind) = GameKind::iter().nth(self.cursor) {
                    self.open(kind);
                }
            }
            _ => {}
        }
    }

    fn open(&mut self, kind: GameKind) {
        info!(game = %kind, "opening game");
        let session = match kind {
            GameKind::GridBattle => Session::GridBattle(GridBattle::new()),
            GameKind::MemoryMatch => {
                let mut rng = self.rng.fork();
                Session::MemoryMatch(MemoryMatch::new(&mut rng))
            }
            GameKind::TapTarget => Session::TapTarget(TapTarget::new(self.rng.fork())),
            GameKind::ReactionTile => Session::ReactionTile(ReactionTile::new(self.rng.fork())),
            GameKind::TriviaRound => Session::Trivia(Trivia::new(self.rng.fork())),
            GameKind::ScriptedReveal => {
                Session::ScriptedReveal(ScriptedReveal::new(self.config.accepted_name().clone()))
            }
            GameKind::HeartHunt => Session::HeartHunt(HeartHunt::new(self.rng.fork())),
            GameKind::TruthOrDare => Session::TruthOrDare(TruthOrDare::new(self.rng.fork())),
        };
        self.screen = Screen::Game(session);
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        if code == KeyCode::Esc {
            // Dropping the session tears down its timers with it.
            info!("leaving game");
            self.screen = Screen::Menu;
            return;
        }
        let Screen::Game(session) = &mut self.screen else {
            return;
        };
        match session {
            Session::GridBattle(game) => match code {
                KeyCode::Char('r') => game.restart(),
                _ => {
                    if let Some(cell) = input::digit_index(code, 9) {
                        game.place(cell);
                    }
                }
            },
            Session::MemoryMatch(game) => match code {
                KeyCode::Char('r') => {
                    let mut rng = self.rng.fork();
                    game.restart(&mut rng);
                }
                _ => {
                    if let Some(card) = input::digit_index(code, 10) {
                        game.flip(card);
                    }
                }
            },
            Session::TapTarget(game) => match code {
                KeyCode::Char('r') => game.restart(),
                KeyCode::Enter | KeyCode::Char(' ') => game.start(),
                _ => {
                    if let Some(lane) = input::digit_index(code, 9) {
                        game.catch(lane);
                    }
                }
            },
            Session::ReactionTile(game) => match code {
                KeyCode::Char('r') => game.restart(),
                KeyCode::Enter | KeyCode::Char(' ') => game.start(),
                _ => {
                    if let Some(tile) = input::digit_index(code, 9) {
                        game.tap(tile);
                    }
                }
            },
            Session::Trivia(game) => match code {
                KeyCode::Char('r') => game.restart(),
                KeyCode::Enter | KeyCode::Char(' ') => game.start(),
                _ => {
                    if let Some(choice) = input::digit_index(code, 3) {
                        game.select(choice);
                    }
                }
            },
            Session::ScriptedReveal(game) => match code {
                KeyCode::Enter => game.submit(),
                KeyCode::Backspace => game.pop_char(),
                KeyCode::Char('r') if game.phase() != &crate::games::scripted_reveal::RevealPhase::Entry => {
                    game.restart();
                }
                KeyCode::Char(c) => game.push_char(c),
                _ => {}
            },
            Session::HeartHunt(game) => match code {
                KeyCode::Char('r') => game.restart(),
                KeyCode::Enter | KeyCode::Char(' ') => game.arm(),
                _ => {
                    if let Some(lane) = input::digit_index(code, 9) {
                        game.catch(lane);
                    }
                }
            },
            Session::TruthOrDare(game) => match code {
                KeyCode::Char('r') => game.restart(),
                KeyCode::Char('t') => game.choose(PromptKind::Truth),
                KeyCode::Char('d') => game.choose(PromptKind::Dare),
                KeyCode::Enter | KeyCode::Char('n') => game.next(),
                _ => {}
            },
        }
    }

    fn apply_effects(&mut self) {
        let effects: Vec<Effect> = match &mut self.screen {
            Screen::Menu => Vec::new(),
            Screen::Game(session) => match session {
                Session::GridBattle(game) => game.take_effects(),
                Session::MemoryMatch(game) => game.take_effects(),
                Session::TapTarget(game) => game.take_effects(),
                Session::ReactionTile(game) => game.take_effects(),
                Session::Trivia(game) => game.take_effects(),
                Session::ScriptedReveal(game) => game.take_effects(),
                Session::HeartHunt(game) => game.take_effects(),
                Session::TruthOrDare(_) => Vec::new(),
            },
        };
        for effect in effects {
            match effect {
                Effect::Tone(cue) => self.tones.play(cue),
                Effect::Confetti(spec) => self.overlay.spawn(spec, &mut self.rng),
            }
        }
    }
}
