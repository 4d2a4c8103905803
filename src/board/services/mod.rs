//! Application services orchestrating the board and its ports.

mod session;

pub use session::BoardSession;
