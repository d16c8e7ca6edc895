// ABOUTME: Sensory feedback cues played when the tour advances
// The terminal analog of platform haptics: a bell, or nothing at all

use std::io::{self, Write};

/// The kind of cue to play for an advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackCue {
    /// An intermediate step forward.
    Impact,
    /// The advance that completed the tour.
    Success,
}

/// Sink for advance cues.
///
/// `trigger` is a counter that increments once per advance, after the index
/// mutation has been applied, so implementations observe a distinct value
/// per cue even when consecutive cues are the same kind. Playing a cue is
/// fire-and-forget: no return value, failures are swallowed.
#[cfg_attr(test, mockall::automock)]
pub trait FeedbackDispatcher {
    fn play(&mut self, cue: FeedbackCue, trigger: u64);
}

/// Rings the terminal bell. A success cue rings twice.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl FeedbackDispatcher for TerminalBell {
    fn play(&mut self, cue: FeedbackCue, trigger: u64) {
        tracing::debug!(?cue, trigger, "playing advance cue");
        let bell: &[u8] = match cue {
            FeedbackCue::Impact => b"\x07",
            FeedbackCue::Success => b"\x07\x07",
        };
        let mut stdout = io::stdout();
        let _ = stdout.write_all(bell);
        let _ = stdout.flush();
    }
}

/// Discards all cues. Useful for tests and `--no-bell`.
#[derive(Debug, Default)]
pub struct NoFeedback;

impl FeedbackDispatcher for NoFeedback {
    fn play(&mut self, _cue: FeedbackCue, _trigger: u64) {}
}
