/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;

/***************************************/
/*         Animation constants         */
/***************************************/
/// Height of one floor in pixels. A car at floor `n` is translated `n * FLOOR_HEIGHT` px.
pub const FLOOR_HEIGHT: u32 = 100;

/// Duration of the car translation, in milliseconds. Independent of the distance travelled.
pub const CAR_TRANSITION: u64 = 500;

/// Duration of a door open/close animation, in milliseconds.
pub const DOOR_TRANSITION: u64 = 200;

/***************************************/
/*       Public data structures        */
/***************************************/

/**
 * Animation timing used by the sequencers and the animation driver.
 *
 * `Timing::default()` is built from the compile-time constants above. Tests
 * construct a faster value so the full door/travel sequence runs in a few ms.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub floor_height: u32,
    pub car_transition: Duration,
    pub door_transition: Duration,
}

impl Default for Timing {
    fn default() -> Timing {
        Timing {
            floor_height: FLOOR_HEIGHT,
            car_transition: Duration::from_millis(CAR_TRANSITION),
            door_transition: Duration::from_millis(DOOR_TRANSITION),
        }
    }
}

impl Timing {
    // u64 so any u32 floor times any u32 height fits
    pub fn offset_of(&self, floor: u32) -> u64 {
        u64::from(floor) * u64::from(self.floor_height)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DoorState {
    Open,
    Closed,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "doorsClosing")]
    DoorsClosing,
    #[serde(rename = "traveling")]
    Traveling,
    #[serde(rename = "doorsOpening")]
    DoorsOpening,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Floor {
    pub index: u32,
}

impl Floor {
    // Floors are shown 1-based.
    pub fn label(&self) -> u32 {
        self.index + 1
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CarState {
    pub id: usize,
    pub floor: u32,
    pub door: DoorState,
    pub phase: Phase,
    #[serde(rename = "offsetPx")]
    pub offset_px: u64,
}

impl CarState {
    pub fn new(id: usize) -> CarState {
        CarState {
            id,
            floor: 0,
            door: DoorState::Open,
            phase: Phase::Idle,
            offset_px: 0,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Floor the car is drawn at. Follows the applied translation, not the target.
    pub fn shown_floor(&self, floor_height: u32) -> u32 {
        if floor_height == 0 {
            return self.floor;
        }
        u32::try_from(self.offset_px / u64::from(floor_height)).unwrap_or(u32::MAX)
    }
}

/// Everything the UI needs to draw the building.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BuildingSnapshot {
    pub version: u64,
    pub title: String,
    #[serde(rename = "floorCount")]
    pub floor_count: u32,
    #[serde(rename = "floorHeight")]
    pub floor_height: u32,
    pub cars: Vec<CarState>,
}
