mod command;

pub use command::CommandError;

use macroquad::prelude::*;

use crate::application::{Command, Event};
use crate::domain::{ParameterName, Parameters};

/// Smallest non-zero probability reachable with the doubling keys
pub const MIN_PROBABILITY: f64 = 1e-4;

/// Scale a probability by `factor`, staying inside [0, 1].
/// Doubling zero jumps to [`MIN_PROBABILITY`] so the key is never stuck.
pub fn scaled(value: f64, factor: f64) -> f64 {
    if value <= 0.0 {
        return if factor > 1.0 { MIN_PROBABILITY } else { 0.0 };
    }
    (value * factor).clamp(0.0, 1.0)
}

fn adjust(params: &Parameters, name: ParameterName, factor: f64) -> Command {
    Command::Set(name, scaled(params.get(name), factor))
}

/// Map a key press to a command, given the live parameters for the
/// relative edit keys. `None` means the key is not bound.
pub fn key_command(key: KeyCode, params: &Parameters) -> Option<Command> {
    let command = match key {
        KeyCode::P | KeyCode::Space => Command::PlayPause,
        KeyCode::F | KeyCode::Right => Command::StepForward,
        KeyCode::B | KeyCode::Left => Command::StepBackward,
        KeyCode::S | KeyCode::Q | KeyCode::Escape => Command::Quit,
        KeyCode::LeftBracket => adjust(params, ParameterName::Ignition, 0.5),
        KeyCode::RightBracket => adjust(params, ParameterName::Ignition, 2.0),
        KeyCode::Minus => adjust(params, ParameterName::Growth, 0.5),
        KeyCode::Equal => adjust(params, ParameterName::Growth, 2.0),
        _ => return None,
    };
    Some(command)
}

/// Keys that only ever accompany other keys and never count as input
fn is_modifier(key: KeyCode) -> bool {
    matches!(
        key,
        KeyCode::LeftShift
            | KeyCode::RightShift
            | KeyCode::LeftControl
            | KeyCode::RightControl
            | KeyCode::LeftAlt
            | KeyCode::RightAlt
            | KeyCode::LeftSuper
            | KeyCode::RightSuper
    )
}

/// Line editor for typed commands, opened with ':'
#[derive(Debug, Default)]
pub struct CommandPrompt {
    buffer: Option<String>,
    last_error: Option<String>,
}

impl CommandPrompt {
    pub fn is_open(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn open(&mut self) {
        self.buffer = Some(String::new());
        self.last_error = None;
    }

    pub fn cancel(&mut self) {
        self.buffer = None;
    }

    pub fn push(&mut self, ch: char) {
        if let Some(buffer) = self.buffer.as_mut().filter(|_| !ch.is_control()) {
            buffer.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.pop();
        }
    }

    /// Close the prompt and parse what was typed.
    /// A rejected line is kept as an error message for the status line.
    pub fn submit(&mut self) -> Option<Command> {
        let line = self.buffer.take()?;
        match line.parse::<Command>() {
            Ok(command) => Some(command),
            Err(err) => {
                log::warn!("Rejected command '{}': {}", line.trim(), err);
                self.last_error = Some(err.to_string());
                None
            }
        }
    }

    /// Text to overlay on screen: the open prompt, else the last rejection
    pub fn overlay(&self) -> Option<String> {
        match (&self.buffer, &self.last_error) {
            (Some(buffer), _) => Some(format!(":{buffer}_")),
            (None, Some(err)) => Some(format!("error: {err}")),
            (None, None) => None,
        }
    }
}

/// Collect this frame's input events
pub fn poll_events(prompt: &mut CommandPrompt, params: &Parameters) -> Vec<Event> {
    let mut events = Vec::new();

    if prompt.is_open() {
        if is_key_pressed(KeyCode::Escape) {
            prompt.cancel();
            clear_input_queue();
            return events;
        }
        if is_key_pressed(KeyCode::Backspace) {
            prompt.backspace();
        }
        while let Some(ch) = get_char_pressed() {
            prompt.push(ch);
        }
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
            events.extend(prompt.submit().map(Event::from));
        }
        return events;
    }

    while let Some(ch) = get_char_pressed() {
        if ch == ':' {
            prompt.open();
            clear_input_queue();
            return events;
        }
    }

    for key in get_keys_pressed() {
        if is_modifier(key) || key == KeyCode::Semicolon {
            continue;
        }
        let event = match key_command(key, params) {
            Some(command) => Event::Command(command),
            None => Event::Unrecognized,
        };
        events.push(event);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys() {
        let params = Parameters::default();
        assert_eq!(key_command(KeyCode::P, &params), Some(Command::PlayPause));
        assert_eq!(key_command(KeyCode::Space, &params), Some(Command::PlayPause));
        assert_eq!(key_command(KeyCode::F, &params), Some(Command::StepForward));
        assert_eq!(key_command(KeyCode::Left, &params), Some(Command::StepBackward));
        assert_eq!(key_command(KeyCode::S, &params), Some(Command::Quit));
        assert_eq!(key_command(KeyCode::Z, &params), None);
    }

    #[test]
    fn test_edit_keys_scale_live_values() {
        let params = Parameters::new(0.01, 0.5);
        assert_eq!(
            key_command(KeyCode::RightBracket, &params),
            Some(Command::Set(ParameterName::Ignition, 0.02))
        );
        assert_eq!(
            key_command(KeyCode::LeftBracket, &params),
            Some(Command::Set(ParameterName::Ignition, 0.005))
        );
        assert_eq!(
            key_command(KeyCode::Equal, &params),
            Some(Command::Set(ParameterName::Growth, 1.0))
        );
        assert_eq!(
            key_command(KeyCode::Minus, &params),
            Some(Command::Set(ParameterName::Growth, 0.25))
        );
    }

    #[test]
    fn test_scaled_stays_in_range() {
        assert_eq!(scaled(0.8, 2.0), 1.0);
        assert_eq!(scaled(0.0, 2.0), MIN_PROBABILITY);
        assert_eq!(scaled(0.0, 0.5), 0.0);
        assert_eq!(scaled(0.4, 0.5), 0.2);
    }

    #[test]
    fn test_modifiers_are_ignored() {
        assert!(is_modifier(KeyCode::LeftShift));
        assert!(!is_modifier(KeyCode::A));
    }

    #[test]
    fn test_prompt_submits_valid_command() {
        let mut prompt = CommandPrompt::default();
        assert!(!prompt.is_open());
        prompt.open();
        "set f 0.25".chars().for_each(|ch| prompt.push(ch));
        assert_eq!(prompt.overlay().as_deref(), Some(":set f 0.25_"));
        assert_eq!(prompt.submit(), Some(Command::Set(ParameterName::Ignition, 0.25)));
        assert!(!prompt.is_open());
        assert_eq!(prompt.overlay(), None);
    }

    #[test]
    fn test_prompt_reports_rejection() {
        let mut prompt = CommandPrompt::default();
        prompt.open();
        "set q 2".chars().for_each(|ch| prompt.push(ch));
        assert_eq!(prompt.submit(), None);
        assert!(prompt.overlay().is_some_and(|text| text.starts_with("error:")));

        prompt.open();
        assert_eq!(prompt.overlay().as_deref(), Some(":_"));
    }

    #[test]
    fn test_prompt_editing() {
        let mut prompt = CommandPrompt::default();
        prompt.push('x');
        assert_eq!(prompt.overlay(), None);

        prompt.open();
        "quitt".chars().for_each(|ch| prompt.push(ch));
        prompt.push('\r');
        prompt.backspace();
        assert_eq!(prompt.submit(), Some(Command::Quit));

        prompt.open();
        prompt.cancel();
        assert_eq!(prompt.submit(), None);
    }
}
