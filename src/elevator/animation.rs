use crate::shared::Timing;
use crossbeam_channel as cbc;
use log::{debug, error, info};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    CloseDoors,
    Translate { offset_px: u64 },
    OpenDoors,
}

/// Request to run one animation on one car.
///
/// `ticket` identifies the request; the matching `TransitionEnd` carries it back
/// so the sequencer can tell a current signal from a superseded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationCommand {
    pub car: usize,
    pub ticket: u64,
    pub animation: Animation,
}

/// Completion signal for an `AnimationCommand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionEnd {
    pub car: usize,
    pub ticket: u64,
    pub animation: Animation,
}

impl From<AnimationCommand> for TransitionEnd {
    fn from(command: AnimationCommand) -> TransitionEnd {
        TransitionEnd {
            car: command.car,
            ticket: command.ticket,
            animation: command.animation,
        }
    }
}

/**
 * # Animation Driver
 * Simulated render surface for the cars.
 *
 * Every command received is "played" for the duration the timing prescribes
 * (doors: `door_transition`, translation: `car_transition`) and a
 * `TransitionEnd` is sent when it finishes. Animations are never cancelled;
 * a command for a car that is already animating simply runs alongside.
 *
 * # Fields
 *
 * - `timing`:                  Durations of the door and translation animations.
 * - `command_rx`:              Receiver for animation commands from the coordinator.
 * - `transition_end_tx`:       Sender for completion signals back to the coordinator.
 * - `terminate_rx`:            Stops the driver.
 * - `playing`:                 Animations in progress with the instant they finish.
 */
pub struct AnimationDriver {
    timing: Timing,
    command_rx: cbc::Receiver<AnimationCommand>,
    transition_end_tx: cbc::Sender<TransitionEnd>,
    terminate_rx: cbc::Receiver<()>,
    playing: Vec<(Instant, AnimationCommand)>,
}

impl AnimationDriver {
    pub fn new(
        timing: Timing,
        command_rx: cbc::Receiver<AnimationCommand>,
        transition_end_tx: cbc::Sender<TransitionEnd>,
        terminate_rx: cbc::Receiver<()>,
    ) -> AnimationDriver {
        AnimationDriver {
            timing,
            command_rx,
            transition_end_tx,
            terminate_rx,
            playing: Vec::new(),
        }
    }

    pub fn duration_of(&self, animation: Animation) -> Duration {
        match animation {
            Animation::CloseDoors | Animation::OpenDoors => self.timing.door_transition,
            Animation::Translate { .. } => self.timing.car_transition,
        }
    }

    pub fn run(mut self) {
        loop {
            // Handle incoming events
            cbc::select! {
                recv(self.command_rx) -> msg => {
                    match msg {
                        Ok(command) => {
                            let finish = Instant::now() + self.duration_of(command.animation);
                            debug!("Car {} plays {:?} (ticket {})", command.car, command.animation, command.ticket);
                            self.playing.push((finish, command));
                        }
                        Err(_) => {
                            info!("Animation command channel closed, stopping driver");
                            return;
                        }
                    }
                }
                recv(self.terminate_rx) -> _ => {
                    info!("Animation driver terminated");
                    return;
                }
                default(self.next_wakeup()) => {}
            }

            if !self.finish_due() {
                return;
            }
        }
    }

    // Time until the earliest running animation ends
    fn next_wakeup(&self) -> Duration {
        let now = Instant::now();
        self.playing
            .iter()
            .map(|(finish, _)| finish.saturating_duration_since(now))
            .min()
            .unwrap_or(Duration::from_millis(100))
    }

    // Sends a transition end for every finished animation, in the order they finish.
    // Returns false if the coordinator has hung up.
    fn finish_due(&mut self) -> bool {
        let now = Instant::now();
        let (mut done, playing): (Vec<_>, Vec<_>) =
            self.playing.drain(..).partition(|(finish, _)| *finish <= now);
        self.playing = playing;
        done.sort_by_key(|(finish, _)| *finish);

        for (_, command) in done {
            if let Err(e) = self.transition_end_tx.send(command.into()) {
                error!("Failed to send transition end to coordinator: {}", e);
                return false;
            }
        }
        true
    }
}
