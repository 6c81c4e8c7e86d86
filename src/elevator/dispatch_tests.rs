/*
 * Unit tests for the dispatch function
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_nearest_car_minimal_distance
 * - test_nearest_car_tie_goes_to_lowest_index
 * - test_nearest_car_empty
 * - test_dispatch_selects_first_car_from_ground_floor
 * - test_dispatch_to_current_floor_is_noop
 * - test_dispatch_sees_pessimistic_floor
 * - test_dispatch_retarget_while_closing_reports_change
 * - test_dispatch_unknown_floor
 * - test_dispatch_no_cars
 * - test_dispatch_hall_call_up_uses_current_top_floor
 * - test_dispatch_hall_call_down
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod dispatch_tests {
    use crate::building::Building;
    use crate::elevator::dispatch::{dispatch, dispatch_hall_call, nearest_car};
    use crate::elevator::{Animation, AnimationCommand, TransitionEnd};
    use crate::shared::{Direction, DispatchError, DoorState, Phase, Timing};

    fn setup_building(n_floors: u32, n_cars: usize) -> Building {
        Building::new("Elevator", n_floors, n_cars, Timing::default())
    }

    // Plays the animations of one car to the end
    fn complete(building: &mut Building, first: Option<AnimationCommand>) {
        let mut next = first;
        while let Some(command) = next {
            next = building
                .car_mut(command.car)
                .unwrap()
                .on_transition_end(&TransitionEnd::from(command));
        }
    }

    #[test]
    fn test_nearest_car_minimal_distance() {
        assert_eq!(nearest_car(&[0, 5, 9], 6), Some(1));
        assert_eq!(nearest_car(&[0, 5, 9], 8), Some(2));
        assert_eq!(nearest_car(&[0, 5, 9], 1), Some(0));
        assert_eq!(nearest_car(&[4], 0), Some(0));
    }

    #[test]
    fn test_nearest_car_tie_goes_to_lowest_index() {
        assert_eq!(nearest_car(&[0, 0], 3), Some(0));
        assert_eq!(nearest_car(&[1, 5], 3), Some(0));
        assert_eq!(nearest_car(&[7, 1, 5], 3), Some(1));
    }

    #[test]
    fn test_nearest_car_empty() {
        assert_eq!(nearest_car(&[], 3), None);
    }

    #[test]
    fn test_dispatch_selects_first_car_from_ground_floor() {
        // Arrange
        let mut building = setup_building(5, 2);

        // Act
        let dispatched = dispatch(&mut building, 3).unwrap();

        // Assert
        assert_eq!(dispatched.car, 0);
        let command = dispatched.command.unwrap();
        assert_eq!(command.animation, Animation::CloseDoors);

        complete(&mut building, Some(command));
        assert_eq!(building.car_positions(), vec![3, 0]);
        let car = building.cars()[0].state();
        assert_eq!(car.phase, Phase::Idle);
        assert_eq!(car.door, DoorState::Open);
    }

    #[test]
    fn test_dispatch_to_current_floor_is_noop() {
        // Arrange
        let mut building = setup_building(5, 1);
        let dispatched = dispatch(&mut building, 2).unwrap();
        complete(&mut building, dispatched.command);
        let before = building.snapshot(0);

        // Act
        let dispatched = dispatch(&mut building, 2).unwrap();

        // Assert
        assert_eq!(dispatched.car, 0);
        assert_eq!(dispatched.command, None);
        assert!(!dispatched.changed);
        assert_eq!(building.snapshot(0), before);
    }

    #[test]
    fn test_dispatch_sees_pessimistic_floor() {
        // Arrange: car 0 is on its way to 4, nothing completed yet
        let mut building = setup_building(5, 2);
        dispatch(&mut building, 4).unwrap();

        // Act
        let near_top = dispatch(&mut building, 3).unwrap();
        let ground = dispatch(&mut building, 0).unwrap();

        // Assert
        assert_eq!(near_top.car, 0);
        assert_eq!(ground.car, 1);
        assert_eq!(ground.command, None);
        assert!(!ground.changed);
    }

    #[test]
    fn test_dispatch_retarget_while_closing_reports_change() {
        // Arrange: car 0 is closing its doors for floor 3
        let mut building = setup_building(5, 1);
        let first = dispatch(&mut building, 3).unwrap();
        assert!(first.changed);

        // Act
        let retarget = dispatch(&mut building, 1).unwrap();

        // Assert: no new animation, but the target moved
        assert_eq!(retarget.command, None);
        assert!(retarget.changed);
        assert_eq!(building.car_positions(), vec![1]);
        assert_eq!(building.cars()[0].state().phase, Phase::DoorsClosing);

        complete(&mut building, first.command);
        assert_eq!(building.car_positions(), vec![1]);
        assert_eq!(building.cars()[0].state().offset_px, 100);
    }

    #[test]
    fn test_dispatch_unknown_floor() {
        // Arrange
        let mut building = setup_building(5, 2);

        // Act
        let result = dispatch(&mut building, 5);

        // Assert
        assert_eq!(
            result,
            Err(DispatchError::UnknownFloor {
                requested: 5,
                floor_count: 5
            })
        );
        assert_eq!(building.car_positions(), vec![0, 0]);
    }

    #[test]
    fn test_dispatch_no_cars() {
        // Arrange
        let mut building = setup_building(5, 0);

        // Act
        let result = dispatch(&mut building, 2);

        // Assert
        assert_eq!(result, Err(DispatchError::NoCars));
    }

    #[test]
    fn test_dispatch_hall_call_up_uses_current_top_floor() {
        // Arrange
        let mut building = setup_building(5, 1);
        building.add_floor();

        // Act
        let dispatched = dispatch_hall_call(&mut building, 2, Direction::Up).unwrap();

        // Assert
        assert_eq!(building.cars()[0].next_leg(), Some(5));
        complete(&mut building, dispatched.command);
        assert_eq!(building.car_positions(), vec![5]);
    }

    #[test]
    fn test_dispatch_hall_call_down() {
        // Arrange
        let mut building = setup_building(5, 2);
        let dispatched = dispatch(&mut building, 4).unwrap();
        complete(&mut building, dispatched.command);

        // Act: car 0 at 4 is nearest to 3, then goes down to the ground floor
        let dispatched = dispatch_hall_call(&mut building, 3, Direction::Down).unwrap();

        // Assert
        assert_eq!(dispatched.car, 0);
        complete(&mut building, dispatched.command);
        assert_eq!(building.car_positions(), vec![0, 0]);
        assert!(building.all_idle());
    }
}
