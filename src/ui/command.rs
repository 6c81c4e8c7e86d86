use crate::config::Mode;
use crate::coordinator::UiEvent;
use crate::shared::{CommandError, Direction};
use std::time::Duration;

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(UiEvent),
    Sleep(Duration),
}

/**
 * Parses a line typed by the user (or read from a script).
 *
 * Floors are given by their 1-based label and turned into 0-based indices.
 *
 * - `call <n>` or just `<n>`: numbered floor button (single mode)
 * - `up <n>`, `down <n>`:      hall buttons (hall mode)
 * - `add`:                     add a floor on top
 * - `show`:                    draw the building now
 * - `sleep <ms>`:              pause the input, for scripts
 * - `quit` / `exit`:           leave once all cars are idle
 */
pub fn parse_command(line: &str, mode: Mode) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let name = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();
    let argument = words.next();

    match name.as_str() {
        "call" => {
            require_mode(&name, mode, Mode::Single)?;
            let floor = parse_floor(&name, argument)?;
            Ok(Command::Event(UiEvent::Call(floor)))
        }
        "up" | "down" => {
            require_mode(&name, mode, Mode::Hall)?;
            let floor = parse_floor(&name, argument)?;
            let direction = if name == "up" {
                Direction::Up
            } else {
                Direction::Down
            };
            Ok(Command::Event(UiEvent::HallCall(floor, direction)))
        }
        "add" => Ok(Command::Event(UiEvent::AddFloor)),
        "show" => Ok(Command::Event(UiEvent::Show)),
        "quit" | "exit" => Ok(Command::Event(UiEvent::Quit)),
        "sleep" => {
            let text = argument.ok_or_else(|| CommandError::MissingArgument(name.clone()))?;
            let millis = text
                .parse::<u64>()
                .map_err(|_| CommandError::InvalidNumber(text.to_string()))?;
            Ok(Command::Sleep(Duration::from_millis(millis)))
        }
        _ if name.chars().all(|c| c.is_ascii_digit()) => {
            require_mode("call", mode, Mode::Single)?;
            let floor = parse_floor("call", Some(&name))?;
            Ok(Command::Event(UiEvent::Call(floor)))
        }
        _ => Err(CommandError::Unknown(name)),
    }
}

fn require_mode(command: &str, mode: Mode, needed: Mode) -> Result<(), CommandError> {
    if mode != needed {
        return Err(CommandError::WrongMode {
            command: command.to_string(),
            mode: mode.to_string(),
        });
    }
    Ok(())
}

fn parse_floor(command: &str, argument: Option<&str>) -> Result<u32, CommandError> {
    let text = argument.ok_or_else(|| CommandError::MissingArgument(command.to_string()))?;
    let label = text
        .parse::<u32>()
        .map_err(|_| CommandError::InvalidNumber(text.to_string()))?;
    label.checked_sub(1).ok_or(CommandError::FloorZero)
}
