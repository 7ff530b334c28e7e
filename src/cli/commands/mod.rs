pub mod check_word;
mod command_result;
mod context;
pub mod extract;
pub mod init;

pub use command_result::*;
pub use context::CommandContext;
