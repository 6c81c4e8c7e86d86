pub mod registry;

pub use registry::Building;
