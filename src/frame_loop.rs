use std::time::Duration;

use flume::{Receiver, Sender};

use crate::fps::FpsCounter;
use crate::state::{AppState, FrameUniforms, InputEvent, LoopPhase};

pub const TITLE_PREFIX: &str = "Shaders:: uniforms";

/// Queue between the windowing callbacks and the frame loop.
///
/// Events pushed while a frame is being drawn are applied at the start of the
/// next iteration, in the order they were pushed.
pub struct EventQueue {
    tx: Sender<InputEvent>,
    rx: Receiver<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        let (tx, rx) = flume::unbounded();

        Self { tx, rx }
    }

    pub fn push(&self, event: InputEvent) {
        // the receiver lives in self, sending cannot fail
        let _ = self.tx.send(event);
    }

    pub fn sender(&self) -> Sender<InputEvent> {
        self.tx.clone()
    }

    pub fn drain(&self) -> impl Iterator<Item = InputEvent> + '_ {
        self.rx.try_iter()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Whatever the loop draws into: a GL window or a recorder in tests.
pub trait FrameTarget {
    type Error: std::error::Error;

    fn set_title(&mut self, title: &str);
    fn set_wireframe(&mut self, wireframe: bool);
    fn clear(&mut self);
    fn draw(&mut self, uniforms: &FrameUniforms);
    fn present(&mut self) -> Result<(), Self::Error>;
}

pub struct FrameLoop {
    pub state: AppState,
    events: EventQueue,
    fps: FpsCounter,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            events: EventQueue::new(),
            fps: FpsCounter::new(),
        }
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    pub fn phase(&self) -> LoopPhase {
        self.state.phase
    }

    ///
    /// Runs one iteration at time `now`: frame rate sample, queued input,
    /// clear, movement and uniforms, draw, present.
    ///
    /// A close request, whether left over from the previous iteration or
    /// received with this iteration's input, terminates the loop before
    /// anything is drawn.
    ///
    pub fn iterate<T: FrameTarget>(
        &mut self,
        target: &mut T,
        now: Duration,
    ) -> Result<LoopPhase, T::Error> {
        if self.terminate_if_requested() {
            return Ok(LoopPhase::Terminated);
        }

        if let Some(stats) = self.fps.tick(now) {
            log::debug!("{stats}");
            target.set_title(&stats.title(TITLE_PREFIX));
        }

        for event in self.events.drain() {
            self.state.handle_event(event);
        }

        if self.terminate_if_requested() {
            return Ok(LoopPhase::Terminated);
        }

        target.set_wireframe(self.state.wireframe);
        target.clear();

        self.state.advance();
        target.draw(&self.state.uniforms());

        target.present()?;

        Ok(self.state.phase)
    }

    fn terminate_if_requested(&mut self) -> bool {
        match self.state.phase {
            LoopPhase::Running => false,
            LoopPhase::ClosingRequested | LoopPhase::Terminated => {
                self.state.phase = LoopPhase::Terminated;
                true
            }
        }
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
