use std::sync::mpsc::{self, Receiver, Sender};

use log::debug;

/// Handle given to the presentation layer's scroll callback.
///
/// Deltas are queued and only applied when the frame loop drains them, so the
/// callback never touches the viewport directly.
#[derive(Debug, Clone)]
pub struct ScrollSender {
    sender: Sender<f64>,
}

impl ScrollSender {
    pub fn send(&self, delta: f64) {
        if self.sender.send(delta).is_err() {
            debug!("scroll delta {delta} dropped, frame loop has shut down");
        }
    }
}

#[derive(Debug)]
pub struct ScrollQueue {
    sender: Sender<f64>,
    receiver: Receiver<f64>,
}

impl Default for ScrollQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollQueue {
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();

        Self { sender, receiver }
    }

    #[must_use]
    pub fn sender(&self) -> ScrollSender {
        ScrollSender {
            sender: self.sender.clone(),
        }
    }

    /// Takes every delta queued so far, oldest first, without blocking.
    pub fn drain(&self) -> impl Iterator<Item = f64> + '_ {
        self.receiver.try_iter()
    }
}
