pub mod animation;
pub mod dispatch;
pub mod dispatch_tests;
pub mod fsm;

pub use animation::{Animation, AnimationCommand, AnimationDriver, TransitionEnd};
pub use fsm::CarSequencer;
