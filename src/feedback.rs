//! Feedback cues (audio/visual hooks)
//!
//! The simulation never plays sounds itself. It reports cues to a
//! [`FeedbackSink`] at the end of each tick; sinks must return immediately.

use std::sync::mpsc::{Receiver, Sender, channel};

use serde::{Deserialize, Serialize};

/// Cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    /// Character left the ground
    Jump,
    /// Character hit an obstacle
    Hit,
    /// Score reached a multiple of the milestone interval
    Milestone,
    /// Duck pickup collected
    PickupCollected,
}

/// Fire-and-forget receiver for gameplay cues
pub trait FeedbackSink {
    fn on_jump(&mut self);
    fn on_hit(&mut self);
    fn on_milestone(&mut self);
    fn on_pickup_collected(&mut self);

    /// Route a cue to the matching callback
    fn play(&mut self, cue: Cue) {
        match cue {
            Cue::Jump => self.on_jump(),
            Cue::Hit => self.on_hit(),
            Cue::Milestone => self.on_milestone(),
            Cue::PickupCollected => self.on_pickup_collected(),
        }
    }
}

/// Discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn on_jump(&mut self) {}
    fn on_hit(&mut self) {}
    fn on_milestone(&mut self) {}
    fn on_pickup_collected(&mut self) {}
}

/// Logs cues (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFeedback;

impl FeedbackSink for LogFeedback {
    fn on_jump(&mut self) {
        log::trace!("cue: jump");
    }
    fn on_hit(&mut self) {
        log::info!("cue: hit");
    }
    fn on_milestone(&mut self) {
        log::info!("cue: milestone");
    }
    fn on_pickup_collected(&mut self) {
        log::info!("cue: pickup collected");
    }
}

/// Records cues in order
impl FeedbackSink for Vec<Cue> {
    fn on_jump(&mut self) {
        self.push(Cue::Jump);
    }
    fn on_hit(&mut self) {
        self.push(Cue::Hit);
    }
    fn on_milestone(&mut self) {
        self.push(Cue::Milestone);
    }
    fn on_pickup_collected(&mut self) {
        self.push(Cue::PickupCollected);
    }
}

/// Forwards cues to another thread
///
/// The channel is unbounded so sending never blocks the tick. A backend that
/// may block (audio device, network) drains the receiver on its own thread.
#[derive(Debug, Clone)]
pub struct ChannelFeedback {
    tx: Sender<Cue>,
}

impl ChannelFeedback {
    pub fn new() -> (Self, Receiver<Cue>) {
        let (tx, rx) = channel();
        (Self { tx }, rx)
    }

    fn send(&self, cue: Cue) {
        // A dropped receiver just means nobody is listening anymore
        if self.tx.send(cue).is_err() {
            log::trace!("cue {:?} dropped, receiver gone", cue);
        }
    }
}

impl FeedbackSink for ChannelFeedback {
    fn on_jump(&mut self) {
        self.send(Cue::Jump);
    }
    fn on_hit(&mut self) {
        self.send(Cue::Hit);
    }
    fn on_milestone(&mut self) {
        self.send(Cue::Milestone);
    }
    fn on_pickup_collected(&mut self) {
        self.send(Cue::PickupCollected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_routes_to_callbacks() {
        let mut cues: Vec<Cue> = Vec::new();
        cues.play(Cue::Milestone);
        cues.play(Cue::Jump);
        assert_eq!(cues, vec![Cue::Milestone, Cue::Jump]);
    }

    #[test]
    fn test_channel_forwards_across_threads() {
        let (mut sink, rx) = ChannelFeedback::new();
        let handle = std::thread::spawn(move || rx.iter().collect::<Vec<_>>());
        sink.on_hit();
        sink.on_pickup_collected();
        drop(sink);
        let received = handle.join().unwrap();
        assert_eq!(received, vec![Cue::Hit, Cue::PickupCollected]);
    }

    #[test]
    fn test_channel_survives_dropped_receiver() {
        let (mut sink, rx) = ChannelFeedback::new();
        drop(rx);
        sink.on_jump();
    }
}
