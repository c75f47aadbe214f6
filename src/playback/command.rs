//! Playback commands shared by every input source
//!
//! Key presses, scripted input and tests all funnel through
//! [`PlaybackCommand::apply`], so a given command produces the same transition
//! no matter where it came from.

use super::clock::Clock;
use super::{PlaybackController, Speed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    TogglePlay,
    Play,
    Pause,
    StepForward,
    StepBack,
    Reset,
    GoTo(usize),
    SetSpeed(Speed),
    Faster,
    Slower,
    First,
    Last,
}

impl PlaybackCommand {
    pub fn apply<C: Clock>(self, controller: &mut PlaybackController<C>) {
        match self {
            PlaybackCommand::TogglePlay => controller.toggle_play(),
            PlaybackCommand::Play => controller.play(),
            PlaybackCommand::Pause => controller.pause(),
            PlaybackCommand::StepForward => controller.step_forward(),
            PlaybackCommand::StepBack => controller.step_back(),
            PlaybackCommand::Reset => controller.reset(),
            PlaybackCommand::GoTo(step) => controller.go_to_step(step),
            PlaybackCommand::SetSpeed(speed) => controller.set_speed(speed),
            PlaybackCommand::Faster => controller.set_speed(controller.speed().faster()),
            PlaybackCommand::Slower => controller.set_speed(controller.speed().slower()),
            PlaybackCommand::First => controller.go_to_step(0),
            PlaybackCommand::Last => controller.go_to_step(usize::MAX),
        }
    }

    /// Status-bar message for this command after it has been applied
    pub fn describe<C: Clock>(self, controller: &PlaybackController<C>) -> String {
        match self {
            PlaybackCommand::TogglePlay | PlaybackCommand::Play | PlaybackCommand::Pause => {
                if controller.is_playing() {
                    "Playing...".to_string()
                } else {
                    "Paused".to_string()
                }
            }
            PlaybackCommand::StepForward => {
                if controller.is_at_end() {
                    "At last step".to_string()
                } else {
                    "Stepped forward".to_string()
                }
            }
            PlaybackCommand::StepBack => "Stepped backward".to_string(),
            PlaybackCommand::Reset => "Reset".to_string(),
            PlaybackCommand::GoTo(_) => format!("Jumped to step {}", controller.current_step() + 1),
            PlaybackCommand::SetSpeed(_) | PlaybackCommand::Faster | PlaybackCommand::Slower => {
                format!("Speed {}", controller.speed())
            }
            PlaybackCommand::First => "Jumped to start".to_string(),
            PlaybackCommand::Last => "Jumped to end".to_string(),
        }
    }
}
