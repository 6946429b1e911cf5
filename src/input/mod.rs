pub mod handler;

pub use handler::{Direction, InputHandler, KeyAction};
