pub mod commands;
pub mod handler;

pub use commands::Command;
pub use commands::ParseError;
pub use handler::Console;
