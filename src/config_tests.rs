/*
 * Unit tests for the configuration module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_config_full_file
 *  - test_config_partial_file_uses_defaults
 *  - test_config_empty_file
 *  - test_config_invalid_mode
 *  - test_config_missing_file
 *  - test_config_overrides
 *  - test_mode_from_str
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod config_tests {
    use crate::config::{load_config, parse_config, BuildingConfig, Config, Mode, Overrides};
    use crate::shared::ConfigError;
    use std::path::Path;

    #[test]
    fn test_config_full_file() {
        // Arrange
        let config_str = r#"
            [building]
            title = "Office"
            n_floors = 12
            n_cars = 4
            mode = "hall"
        "#;

        // Act
        let config = parse_config(config_str).unwrap();

        // Assert
        assert_eq!(config.building.title, "Office");
        assert_eq!(config.building.n_floors, 12);
        assert_eq!(config.building.n_cars, 4);
        assert_eq!(config.building.mode, Mode::Hall);
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        // Arrange
        let config_str = "[building]\nn_floors = 9\n";

        // Act
        let config = parse_config(config_str).unwrap();

        // Assert
        assert_eq!(config.building.n_floors, 9);
        assert_eq!(config.building.n_cars, 2);
        assert_eq!(config.building.title, "Elevator");
        assert_eq!(config.building.mode, Mode::Single);
    }

    #[test]
    fn test_config_empty_file() {
        // Act
        let config = parse_config("").unwrap();

        // Assert
        assert_eq!(config, Config::default());
        assert_eq!(config.building, BuildingConfig::default());
    }

    #[test]
    fn test_config_invalid_mode() {
        // Act
        let result = parse_config("[building]\nmode = \"express\"\n");

        // Assert
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_missing_file() {
        // Act
        let result = load_config(Path::new("this/file/does/not/exist.toml"));

        // Assert
        match result {
            Err(ConfigError::Io { path, .. }) => {
                assert_eq!(path, Path::new("this/file/does/not/exist.toml"));
            }
            other => panic!("Expected an Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_overrides() {
        // Arrange
        let mut config = Config::default();
        let overrides = Overrides {
            title: None,
            n_floors: Some(7),
            n_cars: None,
            mode: Some(Mode::Hall),
        };

        // Act
        config.apply(overrides);

        // Assert
        assert_eq!(config.building.n_floors, 7);
        assert_eq!(config.building.mode, Mode::Hall);
        assert_eq!(config.building.n_cars, 2);
        assert_eq!(config.building.title, "Elevator");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("single".parse::<Mode>(), Ok(Mode::Single));
        assert_eq!("HALL".parse::<Mode>(), Ok(Mode::Hall));
        assert!("lift".parse::<Mode>().is_err());
    }
}
