//! Main scheduler loop
//!
//! Single-threaded cooperative loop with two phases per iteration:
//!
//! 1. Inbound: poll the link for a complete frame, hand it to the engine and
//!    transmit any reply the engine leaves in the frame buffer.
//! 2. Periodic: service every connection slot in ascending order, transmitting
//!    each frame the servicing produces before moving to the next slot.
//!
//! Neither phase blocks: the link polls a non-blocking transport and each
//! engine call is bounded by the engine itself. The periodic phase runs on
//! every iteration or behind a tick interval, per [`Cadence`].

use semislip_api::{FrameLink, ProtocolEngine, TickSource};

use crate::config::{ms_to_ticks, Cadence};
use crate::time::Interval;

/// What one pass of the loop did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iteration {
    /// Length of the inbound frame handled, 0 if none.
    pub inbound: usize,
    /// Frames transmitted.
    pub sent: usize,
    /// Whether the periodic phase ran.
    pub periodic: bool,
}

pub struct Scheduler<'c, L, E, C, const MTU: usize> {
    link: L,
    engine: E,
    clock: &'c C,
    gate: Option<Interval>,
    frame: [u8; MTU],
}

impl<'c, L, E, C, const MTU: usize> Scheduler<'c, L, E, C, MTU> {
    pub const fn new(link: L, engine: E, clock: &'c C, cadence: Cadence) -> Self {
        let gate = match cadence {
            Cadence::EveryIteration => None,
            Cadence::Gated { interval_ms } => Some(Interval::new(ms_to_ticks(interval_ms), 0)),
        };
        Self { link, engine, clock, gate, frame: [0; MTU] }
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<L, E, C, const MTU: usize> Scheduler<'_, L, E, C, MTU>
where
    L: FrameLink,
    E: ProtocolEngine,
    C: TickSource,
{
    /// Bring up link and engine and start the periodic interval at the
    /// current tick.
    pub fn init(&mut self) {
        self.link.init();
        self.engine.init();
        let now = self.clock.now();
        if let Some(gate) = self.gate.as_mut() {
            gate.reset(now);
        }
        log::info!(
            "scheduler: {} connection slots, periodic every {}",
            self.engine.connection_count(),
            match &self.gate {
                Some(gate) => gate.period(),
                None => 0,
            }
        );
    }

    /// Run one inbound phase and, if due, one periodic phase.
    pub fn run_once(&mut self) -> Iteration {
        let mut iteration = Iteration::default();

        let len = self.link.poll(&mut self.frame).min(MTU);
        if len > 0 {
            iteration.inbound = len;
            log::trace!("inbound frame, {} bytes", len);
            let out = self.engine.input(&mut self.frame, len);
            iteration.sent += self.drain(out);
        }

        if self.periodic_due() {
            iteration.periodic = true;
            for conn in 0..self.engine.connection_count() {
                let out = self.engine.periodic(conn, &mut self.frame);
                iteration.sent += self.drain(out);
            }
        }

        iteration
    }

    /// Loop forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.run_once();
        }
    }

    fn periodic_due(&mut self) -> bool {
        match self.gate.as_mut() {
            None => true,
            Some(gate) => {
                let now = self.clock.now();
                gate.expired(now)
            }
        }
    }

    /// Transmit a pending outbound frame of `len` bytes, if any.
    fn drain(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let len = len.min(MTU);
        log::trace!("outbound frame, {} bytes", len);
        self.link.send(&self.frame[..len]);
        1
    }
}
