/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, error, info, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::Building;
use crate::elevator::dispatch::{dispatch, dispatch_hall_call, Dispatched};
use crate::elevator::{AnimationCommand, TransitionEnd};
use crate::shared::{BuildingSnapshot, Direction, DispatchError};

/***************************************/
/*               Enums                 */
/***************************************/

/// User actions coming from the UI shell. Floors are 0-based indices.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Call(u32),
    HallCall(u32, Direction),
    AddFloor,
    Show,
    Quit,
}

/// What the coordinator reports back to the UI shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    Snapshot(BuildingSnapshot),
    Rejected(DispatchError),
}

enum Event {
    Ui(UiEvent),
    UiClosed,
    AnimationDone(TransitionEnd),
    Terminate,
    Failure(&'static str),
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Single-threaded core of the simulator.
 *
 * Owns the building registry, runs dispatch for every UI action, feeds the
 * car sequencers with completion signals and forwards the animations they ask
 * for to the animation driver. A snapshot is published after every change.
 *
 * `Quit` lets running moves (including second legs) finish before the loop
 * ends. `terminate_rx` stops it at once.
 */
pub struct Coordinator {
    // Private fields
    building: Building,
    version: u64,
    quitting: bool,

    // UI channels
    ui_event_rx: cbc::Receiver<UiEvent>,
    update_tx: cbc::Sender<Update>,

    // Animation channels
    animation_tx: cbc::Sender<AnimationCommand>,
    transition_end_rx: cbc::Receiver<TransitionEnd>,

    coordinator_terminate_rx: cbc::Receiver<()>,
}

impl Coordinator {
    pub fn new(
        building: Building,

        ui_event_rx: cbc::Receiver<UiEvent>,
        update_tx: cbc::Sender<Update>,

        animation_tx: cbc::Sender<AnimationCommand>,
        transition_end_rx: cbc::Receiver<TransitionEnd>,

        coordinator_terminate_rx: cbc::Receiver<()>,
    ) -> Coordinator {
        Coordinator {
            building,
            version: 0,
            quitting: false,
            ui_event_rx,
            update_tx,
            animation_tx,
            transition_end_rx,
            coordinator_terminate_rx,
        }
    }

    pub fn run(mut self) {
        // Initial picture
        self.publish();

        // Main loop
        loop {
            let event = self.wait_for_event();
            if !self.handle_event(event) {
                break;
            }
        }
        info!("Coordinator stopped");
    }

    // Returns false when the loop should end
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Ui(UiEvent::Call(floor)) => {
                let result = dispatch(&mut self.building, floor);
                self.handle_dispatch(result)
            }

            Event::Ui(UiEvent::HallCall(floor, direction)) => {
                let result = dispatch_hall_call(&mut self.building, floor, direction);
                self.handle_dispatch(result)
            }

            Event::Ui(UiEvent::AddFloor) => {
                self.building.add_floor();
                self.publish()
            }

            Event::Ui(UiEvent::Show) => self.publish(),

            Event::Ui(UiEvent::Quit) => {
                info!("Quit requested, waiting for the cars to settle");
                self.quitting = true;
                !self.building.all_idle()
            }

            Event::UiClosed => {
                // No more input, behave as quit
                self.ui_event_rx = cbc::never();
                self.quitting = true;
                !self.building.all_idle()
            }

            Event::AnimationDone(end) => {
                let command = match self.building.car_mut(end.car) {
                    Some(car) => car.on_transition_end(&end),
                    None => {
                        warn!("Transition end for unknown car {}", end.car);
                        return true;
                    }
                };

                if let Some(command) = command {
                    if !self.start_animation(command) {
                        return false;
                    }
                }

                if !self.publish() {
                    return false;
                }
                !(self.quitting && self.building.all_idle())
            }

            Event::Terminate => {
                info!("Coordinator terminated");
                false
            }

            Event::Failure(channel) => {
                error!("Channel {} disconnected, stopping coordinator", channel);
                false
            }
        }
    }

    fn wait_for_event(&self) -> Event {
        cbc::select! {
            // Handling user actions
            recv(self.ui_event_rx) -> event => {
                match event {
                    Ok(event) => Event::Ui(event),
                    Err(_) => Event::UiClosed,
                }
            },

            // Handling finished animations
            recv(self.transition_end_rx) -> end => {
                match end {
                    Ok(end) => Event::AnimationDone(end),
                    Err(_) => Event::Failure("transition_end_rx"),
                }
            },

            recv(self.coordinator_terminate_rx) -> _ => {
                Event::Terminate
            },
        }
    }

    fn handle_dispatch(&mut self, result: Result<Dispatched, DispatchError>) -> bool {
        match result {
            Ok(Dispatched { command: Some(command), .. }) => {
                self.start_animation(command) && self.publish()
            }
            // Retargeted while the doors close: no new animation, but the floor moved
            Ok(Dispatched { command: None, changed: true, .. }) => self.publish(),
            Ok(Dispatched { car, command: None, changed: false }) => {
                debug!("Nothing to animate for car {}", car);
                true
            }
            Err(e) => {
                warn!("Dispatch rejected: {}", e);
                self.send_update(Update::Rejected(e))
            }
        }
    }

    fn start_animation(&self, command: AnimationCommand) -> bool {
        if let Err(e) = self.animation_tx.send(command) {
            error!("Failed to send animation command to driver: {}", e);
            return false;
        }
        true
    }

    fn publish(&mut self) -> bool {
        self.version += 1;
        let snapshot = self.building.snapshot(self.version);
        self.send_update(Update::Snapshot(snapshot))
    }

    fn send_update(&self, update: Update) -> bool {
        if let Err(e) = self.update_tx.send(update) {
            error!("Failed to send update to UI: {}", e);
            return false;
        }
        true
    }

    #[cfg(test)]
    pub fn test_get_building(&self) -> &Building {
        &self.building
    }
}
