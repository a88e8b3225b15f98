use rand::RngCore;

use crate::domain::{Grid, ParameterName, Parameters, Rule, SimError, Timeline};

/// Playback state of a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Paused,
    Playing,
}

/// Validated command delivered by the input layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    PlayPause,
    StepForward,
    StepBackward,
    Quit,
    Set(ParameterName, f64),
}

/// Everything the control loop can feed into the controller
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    Command(Command),
    /// Playback interval elapsed
    Tick,
    /// Input nobody bound to a command
    Unrecognized,
}

impl From<Command> for Event {
    fn from(command: Command) -> Self {
        Event::Command(command)
    }
}

/// Whether the control loop should keep going
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Snapshot handed to the renderer after every state change
#[derive(Debug)]
pub struct Frame<'a, C> {
    pub grid: &'a Grid<C>,
    pub generation: u64,
    pub parameters: Parameters,
    pub is_playing: bool,
    /// Generations currently held by the timeline
    pub history: usize,
    pub rule: &'static str,
}

/// Render collaborator. Owns every visual decision and never mutates the grid.
pub trait Renderer<C> {
    fn render(&mut self, frame: &Frame<'_, C>);
}

/// Controller drives a timeline from playback events.
/// This is the application layer that coordinates domain logic.
pub struct Controller<R: Rule, G> {
    timeline: Timeline<R, G>,
    playback: Playback,
    finished: bool,
}

impl<R: Rule, G: RngCore> Controller<R, G> {
    /// Start a paused session over `timeline`
    pub fn new(timeline: Timeline<R, G>) -> Self {
        Self {
            timeline,
            playback: Playback::default(),
            finished: false,
        }
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback == Playback::Playing
    }

    /// True once a quit command has been handled
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn timeline(&self) -> &Timeline<R, G> {
        &self.timeline
    }

    /// Apply one event and render the result if anything changed.
    /// Only engine failures are reported as errors.
    pub fn handle(
        &mut self,
        event: Event,
        renderer: &mut impl Renderer<R::Cell>,
    ) -> Result<Flow, SimError> {
        if self.finished {
            return Ok(Flow::Quit);
        }

        match event {
            Event::Command(Command::Quit) => {
                log::info!("Quit at generation {}", self.timeline.current_index());
                self.finished = true;
                return Ok(Flow::Quit);
            }
            Event::Command(Command::PlayPause) => {
                self.playback = match self.playback {
                    Playback::Paused => Playback::Playing,
                    Playback::Playing => Playback::Paused,
                };
                log::debug!("Playback {:?}", self.playback);
            }
            Event::Command(Command::StepForward) => {
                self.timeline.step_forward()?;
            }
            Event::Command(Command::StepBackward) => {
                self.timeline.step_backward();
            }
            Event::Command(Command::Set(name, value)) => {
                self.timeline.set_parameter(name, value);
            }
            Event::Tick | Event::Unrecognized if self.is_playing() => {
                self.timeline.step_forward()?;
            }
            Event::Tick | Event::Unrecognized => return Ok(Flow::Continue),
        }

        self.present(renderer);
        Ok(Flow::Continue)
    }

    /// Render the current state without changing it
    pub fn present(&self, renderer: &mut impl Renderer<R::Cell>) {
        let generation = self.timeline.current();
        renderer.render(&Frame {
            grid: generation.grid(),
            generation: generation.index(),
            parameters: *self.timeline.current_parameters(),
            is_playing: self.is_playing(),
            history: self.timeline.len(),
            rule: self.timeline.rule().name(),
        });
    }
}
