//! Synthesized tone cues for game events.
//!
//! Each cue is a short one- or two-segment sine profile. Playback is
//! fire-and-forget: the caller never learns whether a tone actually
//! sounded. Without the `audio` feature (or without a working output
//! device) every call is a silent no-op.

use std::time::Duration;
use tracing::trace;

/// A named sound cue with a fixed frequency/envelope profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToneCue {
    /// Short blip on a selection or placement.
    Click,
    /// Bright tone on a score or a win.
    Win,
    /// Falling blip on a miss or a draw.
    Pop,
    /// Faint blip when the menu cursor moves.
    Hover,
    /// Ascending sweep when a game starts.
    Start,
    /// Descending sweep when a game ends.
    End,
}

/// One segment of a cue: a sine at `freq` Hz for `millis`, at `gain`.
///
/// Frequency sweeps are approximated by chaining two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSegment {
    /// Frequency in Hz.
    pub freq: f32,
    /// Duration in milliseconds.
    pub millis: u64,
    /// Linear amplitude, 0.0..=1.0.
    pub gain: f32,
}

impl ToneCue {
    /// The segment profile for this cue.
    pub fn segments(self) -> &'static [ToneSegment] {
        const fn seg(freq: f32, millis: u64, gain: f32) -> ToneSegment {
            ToneSegment { freq, millis, gain }
        }
        match self {
            ToneCue::Click => const { &[seg(600.0, 100, 0.10)] },
            ToneCue::Win => const { &[seg(800.0, 300, 0.15)] },
            ToneCue::Pop => const { &[seg(500.0, 75, 0.10), seg(100.0, 75, 0.05)] },
            ToneCue::Hover => const { &[seg(400.0, 80, 0.05)] },
            ToneCue::Start => const { &[seg(400.0, 100, 0.10), seg(600.0, 100, 0.08)] },
            ToneCue::End => const { &[seg(800.0, 150, 0.15), seg(400.0, 150, 0.08)] },
        }
    }

    /// Total duration of the cue.
    pub fn duration(self) -> Duration {
        Duration::from_millis(self.segments().iter().map(|s| s.millis).sum())
    }
}

/// Best-effort tone playback.
///
/// Holds the output device handle for the lifetime of the app. If the
/// device cannot be opened the player stays silent; no error ever
/// reaches a caller.
pub struct TonePlayer {
    muted: bool,
    #[cfg(feature = "audio")]
    output: Option<(rodio::OutputStream, rodio::OutputStreamHandle)>,
}

impl TonePlayer {
    /// Opens the default output device, if any.
    pub fn new(muted: bool) -> Self {
        Self {
            muted,
            #[cfg(feature = "audio")]
            output: rodio::OutputStream::try_default().ok(),
        }
    }

    /// Plays the cue immediately. Side effect only; failures are swallowed.
    pub fn play(&self, cue: ToneCue) {
        trace!(?cue, muted = self.muted, "tone cue");
        if self.muted {
            return;
        }
        self.emit(cue);
    }

    #[cfg(feature = "audio")]
    fn emit(&self, cue: ToneCue) {
        use rodio::source::{SineWave, Source};

        let Some((_, handle)) = &self.output else {
            return;
        };
        let Ok(sink) = rodio::Sink::try_new(handle) else {
            return;
        };
        for seg in cue.segments() {
            let source = SineWave::new(seg.freq)
                .take_duration(Duration::from_millis(seg.millis))
                .amplify(seg.gain);
            sink.append(source);
        }
        sink.detach();
    }

    #[cfg(not(feature = "audio"))]
    fn emit(&self, _cue: ToneCue) {}
}

impl std::fmt::Debug for TonePlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TonePlayer")
            .field("muted", &self.muted)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cue_has_a_profile() {
        for cue in [
            ToneCue::Click,
            ToneCue::Win,
            ToneCue::Pop,
            ToneCue::Hover,
            ToneCue::Start,
            ToneCue::End,
        ] {
            assert!(!cue.segments().is_empty());
            assert!(cue.duration() > Duration::ZERO);
        }
    }

    #[test]
    fn click_has_the_expected_profile() {
        let segs = ToneCue::Click.segments();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].freq, 600.0);
        assert_eq!(segs[0].millis, 100);
    }

    #[test]
    fn playing_without_a_device_is_silent() {
        // Must never panic or surface an error, muted or not.
        TonePlayer::new(true).play(ToneCue::Win);
        TonePlayer::new(false).play(ToneCue::End);
    }
}
