use crate::elevator::CarSequencer;
use crate::shared::{BuildingSnapshot, Floor, Timing};
use log::info;

/**
 * Owned registry of the building: the floors and one sequencer per car.
 *
 * Floors are contiguous from 0 and only ever appended at the top. The car set
 * is fixed when the building is created.
 */
pub struct Building {
    title: String,
    floors: Vec<Floor>,
    cars: Vec<CarSequencer>,
    floor_height: u32,
}

impl Building {
    pub fn new(title: &str, n_floors: u32, n_cars: usize, timing: Timing) -> Building {
        Building {
            title: title.to_string(),
            floors: (0..n_floors).map(|index| Floor { index }).collect(),
            cars: (0..n_cars).map(|id| CarSequencer::new(id, timing)).collect(),
            floor_height: timing.floor_height,
        }
    }

    #[cfg(test)]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[cfg(test)]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn floor_count(&self) -> u32 {
        self.floors.len() as u32
    }

    pub fn top_floor(&self) -> Option<u32> {
        self.floors.last().map(|floor| floor.index)
    }

    /// Appends a floor on top of the building and returns it.
    pub fn add_floor(&mut self) -> Floor {
        let floor = Floor {
            index: self.floor_count(),
        };
        self.floors.push(floor);
        info!("Added floor {}", floor.label());
        floor
    }

    pub fn car_positions(&self) -> Vec<u32> {
        self.cars.iter().map(|car| car.floor()).collect()
    }

    #[cfg(test)]
    pub fn cars(&self) -> &[CarSequencer] {
        &self.cars
    }

    pub fn car_mut(&mut self, id: usize) -> Option<&mut CarSequencer> {
        self.cars.get_mut(id)
    }

    pub fn all_idle(&self) -> bool {
        self.cars
            .iter()
            .all(|car| car.state().is_idle() && car.next_leg().is_none())
    }

    pub fn snapshot(&self, version: u64) -> BuildingSnapshot {
        BuildingSnapshot {
            version,
            title: self.title.clone(),
            floor_count: self.floor_count(),
            floor_height: self.floor_height,
            cars: self.cars.iter().map(|car| car.state().clone()).collect(),
        }
    }
}
