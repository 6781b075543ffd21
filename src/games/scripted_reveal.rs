//! The love calculator.
//!
//! One name is typed in. Any name other than the accepted one
//! (case-insensitive) is rejected with a scolding and a cleared input.
//! The accepted name kicks off a fake computation: status messages
//! cycle every 800ms for 3.5 seconds, then the predetermined verdict
//! comes up with a heart shower.

use crate::audio::ToneCue;
use crate::confetti::BurstSpec;
use crate::session::{Countdown, Effect};
use std::time::Duration;
use tracing::{debug, info};

const CYCLE: Duration = Duration::from_millis(800);
const TOTAL: Duration = Duration::from_millis(3500);

/// Status lines cycled during the fake computation.
pub static LOADING_MESSAGES: [&str; 5] = [
    "Consulting the stars...",
    "Measuring heart rates...",
    "Cross-checking destiny records...",
    "Running compatibility tensors...",
    "Double-checking the math...",
];

/// The verdict. Same every time, as it should be.
#[derive(Debug, Clone, Copy)]
pub struct Verdict {
    /// The compatibility figure.
    pub percent: &'static str,
    /// The short ruling.
    pub ruling: &'static str,
    /// The long-form justification.
    pub message: &'static str,
}

/// The one possible result.
pub static VERDICT: Verdict = Verdict {
    percent: "1000%",
    ruling: "SOULMATES. OBVIOUSLY.",
    message: "The computation was over before it started. Some things are just math.",
};

/// Where the calculator stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealPhase {
    /// Typing a name.
    Entry,
    /// Fake computation in progress.
    Loading {
        /// Index into [`LOADING_MESSAGES`].
        message: usize,
    },
    /// Verdict on screen.
    Revealed,
}

/// One love calculator session.
#[derive(Debug, Clone)]
pub struct ScriptedReveal {
    accepted: String,
    input: String,
    rejected: bool,
    phase: RevealPhase,
    cycle: Countdown,
    total: Countdown,
    effects: Vec<Effect>,
}

impl ScriptedReveal {
    /// A fresh calculator accepting exactly one name.
    pub fn new(accepted: impl Into<String>) -> Self {
        Self {
            accepted: accepted.into(),
            input: String::new(),
            rejected: false,
            phase: RevealPhase::Entry,
            cycle: Countdown::new(CYCLE),
            total: Countdown::new(TOTAL),
            effects: Vec::new(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> &RevealPhase {
        &self.phase
    }

    /// The typed name so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// True right after a rejected submission, until the next keystroke.
    pub fn was_rejected(&self) -> bool {
        self.rejected
    }

    /// Appends a typed character to the name.
    pub fn push_char(&mut self, c: char) {
        if self.phase != RevealPhase::Entry || self.input.len() >= 24 {
            return;
        }
        self.rejected = false;
        self.input.push(c);
    }

    /// Removes the last typed character.
    pub fn pop_char(&mut self) {
        if self.phase == RevealPhase::Entry {
            self.rejected = false;
            self.input.pop();
        }
    }

    /// Submits the typed name.
    pub fn submit(&mut self) {
        if self.phase != RevealPhase::Entry {
            return;
        }
        let name = self.input.trim();
        if name.is_empty() {
            return;
        }
        if name.eq_ignore_ascii_case(&self.accepted) {
            info!("accepted name entered, computing");
            self.rejected = false;
            self.phase = RevealPhase::Loading { message: 0 };
            self.cycle = Countdown::new(CYCLE);
            self.total = Countdown::new(TOTAL);
            self.effects.push(Effect::Tone(ToneCue::Click));
        } else {
            debug!("name rejected");
            self.rejected = true;
            self.input.clear();
            self.effects.push(Effect::Tone(ToneCue::Pop));
        }
    }

    /// Feeds elapsed time into the fake computation.
    pub fn advance(&mut self, dt: Duration) {
        let RevealPhase::Loading { message } = &mut self.phase else {
            return;
        };
        self.total.advance(dt);
        self.cycle.advance(dt);
        if self.cycle.is_done() {
            *message = (*message + 1) % LOADING_MESSAGES.len();
            self.cycle = Countdown::new(CYCLE);
        }
        if self.total.is_done() {
            info!("verdict revealed");
            self.phase = RevealPhase::Revealed;
            self.effects.push(Effect::Tone(ToneCue::Win));
            self.effects
                .push(Effect::Confetti(BurstSpec::hearts(60, Duration::from_secs(3))));
        }
    }

    /// Back to an empty entry form.
    pub fn restart(&mut self) {
        let accepted = std::mem::take(&mut self.accepted);
        *self = Self::new(accepted);
    }

    /// Drains the queued side effects.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}
