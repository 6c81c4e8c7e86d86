pub mod coordinator;

pub use coordinator::Coordinator;
pub use coordinator::UiEvent;
pub use coordinator::Update;
