mod editor_state;
pub mod context;
mod interaction;

pub use editor_state::EditorMode;
pub use context::EditorContext;
pub use interaction::{HoverTarget, Interaction};
