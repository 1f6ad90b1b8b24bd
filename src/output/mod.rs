//! Output formatting module.
//!
//! Classifies status codes into color bands and renders status and
//! open-port lines for the terminal.

mod category;
mod plain;

pub use category::{StatusCategory, BLUE, LIME, ORANGE, RED, RESET};
pub use plain::{print_error, print_port_events, print_warning, Presenter};
