//! The click-driven presentation sequence.

pub mod machine;
pub mod state;

pub use machine::PresentationStateMachine;
pub use state::PresentationState;
