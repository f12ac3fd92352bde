pub mod interaction;
pub mod scroll;
pub mod shells;

pub use interaction::{InteractionAction, InteractionContext, InteractionState};
pub use scroll::SmoothScroll;
pub use shells::{electron_angles, shell_occupancy};
