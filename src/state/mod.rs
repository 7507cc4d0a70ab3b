//! Application state module

mod forms;
mod reveal_state;
mod spinner;
mod status;

pub use forms::*;
pub use reveal_state::*;
pub use spinner::*;
pub use status::*;
