/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::Building;
use crate::elevator::animation::AnimationCommand;
use crate::shared::{Direction, DispatchError};

/***************************************/
/*       Public data structures        */
/***************************************/

/// Outcome of a dispatch: the chosen car, the animation it has to start, if any,
/// and whether the car's visible state changed (it can without a new animation).
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatched {
    pub car: usize,
    pub command: Option<AnimationCommand>,
    pub changed: bool,
}

/***************************************/
/*             Public API              */
/***************************************/

/// Index of the car closest to `requested`. Equal distances go to the lowest index.
pub fn nearest_car(positions: &[u32], requested: u32) -> Option<usize> {
    positions
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, u32)>, (id, &floor)| {
            let distance = floor.abs_diff(requested);
            match best {
                Some((_, best_distance)) if best_distance <= distance => best,
                _ => Some((id, distance)),
            }
        })
        .map(|(id, _)| id)
}

/// Sends the nearest car to `requested`.
pub fn dispatch(building: &mut Building, requested: u32) -> Result<Dispatched, DispatchError> {
    dispatch_with_next_leg(building, requested, None)
}

/// Hall call: the nearest car comes to `floor`, then continues to the top floor
/// (Up) or to the ground floor (Down). The top floor is read when the call is made.
pub fn dispatch_hall_call(
    building: &mut Building,
    floor: u32,
    direction: Direction,
) -> Result<Dispatched, DispatchError> {
    let second = match direction {
        Direction::Up => building.top_floor().unwrap_or(0),
        Direction::Down => 0,
    };
    dispatch_with_next_leg(building, floor, Some(second))
}

fn dispatch_with_next_leg(
    building: &mut Building,
    requested: u32,
    then: Option<u32>,
) -> Result<Dispatched, DispatchError> {
    if requested >= building.floor_count() {
        return Err(DispatchError::UnknownFloor {
            requested,
            floor_count: building.floor_count(),
        });
    }

    let car = nearest_car(&building.car_positions(), requested).ok_or(DispatchError::NoCars)?;
    let sequencer = building.car_mut(car).ok_or(DispatchError::NoCars)?;
    let before = sequencer.state().clone();
    let command = sequencer.move_to(requested, then);
    let changed = *sequencer.state() != before;

    info!(
        "Dispatched car {} (at floor {}) to floor {}{}",
        car,
        before.floor,
        requested,
        then.map(|f| format!(", then floor {}", f)).unwrap_or_default()
    );

    Ok(Dispatched {
        car,
        command,
        changed,
    })
}
