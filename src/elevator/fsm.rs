use crate::elevator::animation::{Animation, AnimationCommand, TransitionEnd};
use crate::shared::{CarState, DoorState, Phase, Timing};
use log::{debug, warn};

/**
 * Movement sequencer for one elevator car.
 *
 * Drives the car through `Idle -> DoorsClosing -> Traveling -> DoorsOpening -> Idle`.
 * Each step is started by returning an `AnimationCommand` and finished by the
 * matching `TransitionEnd` from the animation driver; the sequencer never
 * waits on a clock itself.
 *
 * The target floor is written to `state.floor` as soon as a move starts, so
 * dispatch already sees the car at its destination while it is still moving.
 *
 * A second leg (hall calls) is kept in `next_leg` and started when the first
 * leg's doors have finished opening.
 *
 * # Fields
 * - `state`:       Floor, door and phase as shown to the rest of the system.
 * - `next_leg`:    Floor to continue to once the current move completes.
 * - `ticket`:      Ticket of the animation currently awaited. Older tickets are stale.
 * - `timing`:      Used to turn floors into pixel offsets.
 */
pub struct CarSequencer {
    state: CarState,
    next_leg: Option<u32>,
    ticket: u64,
    timing: Timing,
}

impl CarSequencer {
    pub fn new(id: usize, timing: Timing) -> CarSequencer {
        CarSequencer {
            state: CarState::new(id),
            next_leg: None,
            ticket: 0,
            timing,
        }
    }

    pub fn state(&self) -> &CarState {
        &self.state
    }

    pub fn floor(&self) -> u32 {
        self.state.floor
    }

    pub fn next_leg(&self) -> Option<u32> {
        self.next_leg
    }

    /// Commands the car to `target`, optionally continuing to `then` afterwards.
    ///
    /// Returns the animation to start, or `None` when nothing has to be animated
    /// right now (car already at `target`, or doors already closing).
    pub fn move_to(&mut self, target: u32, then: Option<u32>) -> Option<AnimationCommand> {
        if target == self.state.floor {
            debug!("Car {} is already at floor {}", self.state.id, target);
            return match then {
                Some(second) if self.state.is_idle() => self.start_leg(second),
                Some(second) => {
                    self.next_leg = Some(second);
                    None
                }
                None => None,
            };
        }

        self.next_leg = then;
        self.start_leg(target)
    }

    /// Advances the state machine on a completion signal from the driver.
    pub fn on_transition_end(&mut self, end: &TransitionEnd) -> Option<AnimationCommand> {
        if end.ticket != self.ticket {
            debug!(
                "Car {} ignores stale {:?} (ticket {}, awaiting {})",
                self.state.id, end.animation, end.ticket, self.ticket
            );
            return None;
        }

        match (self.state.phase, end.animation) {
            (Phase::DoorsClosing, Animation::CloseDoors) => {
                self.state.phase = Phase::Traveling;
                debug!("Car {} doors closed, travelling to floor {}", self.state.id, self.state.floor);
                Some(self.translate())
            }
            (Phase::Traveling, Animation::Translate { .. }) => {
                self.state.phase = Phase::DoorsOpening;
                debug!("Car {} arrived at floor {}, opening doors", self.state.id, self.state.floor);
                Some(self.issue(Animation::OpenDoors))
            }
            (Phase::DoorsOpening, Animation::OpenDoors) => {
                self.state.phase = Phase::Idle;
                self.state.door = DoorState::Open;
                debug!("Car {} idle at floor {}", self.state.id, self.state.floor);

                match self.next_leg.take() {
                    Some(second) => self.start_leg(second),
                    None => None,
                }
            }
            (phase, animation) => {
                warn!(
                    "Car {} got {:?} while {:?}, ignoring",
                    self.state.id, animation, phase
                );
                None
            }
        }
    }

    fn start_leg(&mut self, target: u32) -> Option<AnimationCommand> {
        if target == self.state.floor {
            return None;
        }
        self.state.floor = target;

        match self.state.phase {
            Phase::Idle | Phase::DoorsOpening => {
                self.state.phase = Phase::DoorsClosing;
                self.state.door = DoorState::Closed;
                debug!("Car {} closing doors for floor {}", self.state.id, target);
                Some(self.issue(Animation::CloseDoors))
            }
            // The pending close completes and then translates to the new floor
            Phase::DoorsClosing => None,
            Phase::Traveling => {
                debug!("Car {} retargeted to floor {}", self.state.id, target);
                Some(self.translate())
            }
        }
    }

    fn translate(&mut self) -> AnimationCommand {
        let offset_px = self.timing.offset_of(self.state.floor);
        self.state.offset_px = offset_px;
        self.issue(Animation::Translate { offset_px })
    }

    fn issue(&mut self, animation: Animation) -> AnimationCommand {
        self.ticket += 1;
        AnimationCommand {
            car: self.state.id,
            ticket: self.ticket,
            animation,
        }
    }
}
