use crate::config::Mode;
use crate::coordinator::UiEvent;
use crate::ui::command::{parse_command, Command};
use crossbeam_channel as cbc;
use log::{debug, error, warn};
use std::io::BufRead;
use std::thread::sleep;

/**
 * Reads commands line by line and forwards them to the coordinator.
 *
 * Stops after `quit` or at the end of the input; either way the coordinator
 * gets a `Quit`. Empty lines and lines starting with `#` are skipped, bad
 * lines are reported on stderr and skipped.
 */
pub fn read_commands<R: BufRead>(reader: R, mode: Mode, ui_event_tx: cbc::Sender<UiEvent>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_command(trimmed, mode) {
            Ok(Command::Sleep(duration)) => sleep(duration),
            Ok(Command::Event(event)) => {
                debug!("Input: {:?}", event);
                let quit = event == UiEvent::Quit;
                if ui_event_tx.send(event).is_err() {
                    warn!("Coordinator is gone, stopping input");
                    return;
                }
                if quit {
                    return;
                }
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    let _ = ui_event_tx.send(UiEvent::Quit);
}
