use crate::config::Mode;
use crate::shared::{BuildingSnapshot, CarState, DoorState, Phase};
use std::fmt::Write;

/**
 * Draws the building as text, top floor first.
 *
 * ```text
 * Elevator
 *   Floor: 3  [3]      |     |
 *   Floor: 2  [2]      | [#] |
 *   Floor: 1  [1]      | [ ] |
 * ```
 *
 * Each car has a column and is drawn where its translation puts it, so a car
 * whose doors are still closing stays on the floor it is leaving. `[ ]` is a
 * car with open doors, `[#]` with closed doors. The control column shows the numbered
 * button (single mode) or the Up/Down buttons (hall mode).
 */
pub fn render_text(snapshot: &BuildingSnapshot, mode: Mode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", snapshot.title);

    for index in (0..snapshot.floor_count).rev() {
        let label = index + 1;
        let controls = match mode {
            Mode::Single => format!("[{}]", label),
            Mode::Hall => "[Up] [Down]".to_string(),
        };
        let _ = write!(out, "  {:<10} {:<12}|", format!("Floor: {}", label), controls);
        for car in &snapshot.cars {
            let shown = car.shown_floor(snapshot.floor_height);
            let cell = if shown == index { car_glyph(car) } else { "   " };
            let _ = write!(out, " {} |", cell);
        }
        out.push('\n');
    }

    for car in &snapshot.cars {
        let _ = writeln!(out, "  {}", describe_car(car));
    }
    out
}

pub fn render_json(snapshot: &BuildingSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string(snapshot)
}

fn car_glyph(car: &CarState) -> &'static str {
    match car.door {
        DoorState::Open => "[ ]",
        DoorState::Closed => "[#]",
    }
}

fn describe_car(car: &CarState) -> String {
    let phase = match car.phase {
        Phase::Idle => "idle",
        Phase::DoorsClosing => "closing doors",
        Phase::Traveling => "travelling",
        Phase::DoorsOpening => "opening doors",
    };
    let target = if car.is_idle() { "at" } else { "to" };
    format!("Car {}: {} floor {}, {}", car.id + 1, target, car.floor + 1, phase)
}
