use actix::Recipient;

use crate::game::types::RoundEvent;

/// Receiver of the display updates emitted by the controller.
pub trait EventSink {
    fn emit(&mut self, event: RoundEvent);
}

/// Records events in order. Handy for hosts that render in batches.
impl EventSink for Vec<RoundEvent> {
    fn emit(&mut self, event: RoundEvent) {
        self.push(event);
    }
}

impl EventSink for Recipient<RoundEvent> {
    fn emit(&mut self, event: RoundEvent) {
        self.do_send(event);
    }
}
