//! 指令列元件
//!
//! 以 list / move / hist / help / quit 指令操作音樂庫

mod command;
mod main;
mod session;

pub use command::{Command, CommandError, parse_command};
pub use main::CommandShell;
pub use session::{SessionError, ShellSession};
