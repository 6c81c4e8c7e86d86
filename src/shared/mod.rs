#[macro_use]
pub mod macros;
pub mod error;
pub mod structs;

pub use error::CommandError;
pub use error::ConfigError;
pub use error::DispatchError;
pub use structs::BuildingSnapshot;
pub use structs::CarState;
pub use structs::Direction;
pub use structs::DoorState;
pub use structs::Floor;
pub use structs::Phase;
pub use structs::Timing;
