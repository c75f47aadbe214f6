//! A playback session: generator, inputs and controller together
//!
//! The session is the only place a trace is (re)generated. Any regeneration
//! replaces the controller's trace, which drops the running timer and rewinds
//! to the first step.

use super::clock::{Clock, SystemClock};
use super::PlaybackController;
use crate::trace::generator::{Inputs, TraceGenerator};
use crate::trace::StepTrace;

pub struct Session<G: TraceGenerator, C: Clock = SystemClock> {
    generator: G,
    inputs: Inputs,
    controller: PlaybackController<C>,
    last_error: Option<String>,
}

impl<G: TraceGenerator> Session<G, SystemClock> {
    pub fn new(generator: G, inputs: Inputs) -> Self {
        Self::with_clock(generator, inputs, SystemClock)
    }
}

impl<G: TraceGenerator, C: Clock> Session<G, C> {
    /// Generate the first trace and wrap it in a controller
    pub fn with_clock(generator: G, inputs: Inputs, clock: C) -> Self {
        let (trace, last_error) = generate(&generator, &inputs);
        Session {
            generator,
            inputs,
            controller: PlaybackController::with_clock(trace, clock),
            last_error,
        }
    }

    pub fn controller(&self) -> &PlaybackController<C> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PlaybackController<C> {
        &mut self.controller
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Message of the last failed generation, cleared by a successful one
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Run the generator again with the current inputs
    pub fn regenerate(&mut self) {
        let (trace, error) = generate(&self.generator, &self.inputs);
        self.last_error = error;
        self.controller.load(trace);
    }

    /// Replace the inputs and regenerate
    pub fn set_inputs(&mut self, inputs: Inputs) {
        self.inputs = inputs;
        self.regenerate();
    }
}

/// A failed generation becomes an empty trace plus the error text
fn generate<G: TraceGenerator>(generator: &G, inputs: &Inputs) -> (StepTrace, Option<String>) {
    match generator.generate(inputs) {
        Ok(trace) => (trace, None),
        Err(e) => {
            log::warn!("trace generation failed: {}", e);
            (StepTrace::empty(), Some(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::clock::ManualClock;
    use crate::trace::generator::GenerateError;
    use crate::trace::value::Value;
    use crate::trace::Step;

    fn counting(inputs: &Inputs) -> Result<StepTrace, GenerateError> {
        match inputs.get("n") {
            Some(Value::Int(n)) if *n >= 0 => Ok(StepTrace::new(vec![Step::default(); *n as usize])),
            Some(other) => Err(GenerateError::InvalidInput(format!("n = {}", other))),
            None => Ok(StepTrace::empty()),
        }
    }

    fn inputs(n: Value) -> Inputs {
        let mut inputs = Inputs::new();
        inputs.insert("n".to_string(), n);
        inputs
    }

    #[test]
    fn test_set_inputs_resets_playback() {
        let clock = ManualClock::new();
        let mut session = Session::with_clock(counting, inputs(Value::Int(5)), clock.clone());

        session.controller_mut().play();
        clock.advance_millis(2000);
        session.controller_mut().poll();
        assert_eq!(session.controller().current_step(), 2);

        session.set_inputs(inputs(Value::Int(3)));
        assert_eq!(session.controller().total_steps(), 3);
        assert_eq!(session.controller().current_step(), 0);
        assert!(!session.controller().is_playing());
        assert!(!session.controller().has_timer());
    }

    #[test]
    fn test_failure_becomes_empty_trace() {
        let mut session = Session::with_clock(counting, inputs(Value::Int(2)), ManualClock::new());
        assert!(session.last_error().is_none());

        session.set_inputs(inputs(Value::from("oops")));
        assert_eq!(session.controller().total_steps(), 0);
        assert_eq!(session.last_error(), Some("invalid input: n = oops"));

        session.controller_mut().play();
        assert!(!session.controller().is_playing());

        session.set_inputs(inputs(Value::Int(1)));
        assert!(session.last_error().is_none());
    }
}
