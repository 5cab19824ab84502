use crossbeam::channel::Sender;

use crate::controllers::visualizer::events::VisualizerEvent;
use crate::controllers::visualizer::terminate::detect_terminate;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PumpStatus {
    Forwarded,
    /// The event ended the session; the channel has been closed.
    Terminated,
    /// Nothing is listening any more.
    Closed,
}

/// Feeds platform events into the visualizer loop until a terminal event.
pub struct EventPump {
    sender: Option<Sender<VisualizerEvent>>,
    debug: bool,
}

impl EventPump {
    pub fn new(sender: Sender<VisualizerEvent>, debug: bool) -> Self {
        Self {
            sender: Some(sender),
            debug,
        }
    }

    pub fn forward(&mut self, event: VisualizerEvent) -> PumpStatus {
        let Some(sender) = &self.sender else {
            return PumpStatus::Closed;
        };

        if self.debug {
            log::debug!("new event: {event:?}");
        }

        if detect_terminate(&event) {
            log::info!("terminal event {event:?}, stopping event pump");
            self.close();
            return PumpStatus::Terminated;
        }

        if sender.send(event).is_err() {
            self.close();
            return PumpStatus::Closed;
        }

        PumpStatus::Forwarded
    }

    /// Drops the sender so the loop sees the channel close.
    pub fn close(&mut self) {
        self.sender = None;
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.sender.is_none()
    }
}
