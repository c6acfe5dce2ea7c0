//! 指令列解析

use crate::tools::ListFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List(ListFilter),
    Move(usize),
    History,
    Help,
    Quit,
    /// 空白行，直接略過
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("specify \"all\", \"active\", or \"archived\" (got \"{0}\")")]
    InvalidFilter(String),
    #[error("specify the number of the album to move")]
    MissingIndex,
    #[error("\"{0}\" is not a valid album number")]
    InvalidIndex(String),
    #[error("Invalid command. Type \"help\" for list of commands.")]
    Unknown(String),
}

/// 解析一行輸入；只看前兩個以空白分隔的字
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut parts = line.split_whitespace();
    let Some(keyword) = parts.next() else {
        return Ok(Command::Empty);
    };
    let argument = parts.next();

    match keyword {
        "list" | "l" => parse_filter(argument.unwrap_or("all")).map(Command::List),
        "move" | "m" => {
            let raw = argument.ok_or(CommandError::MissingIndex)?;
            raw.parse::<usize>()
                .map(Command::Move)
                .map_err(|_| CommandError::InvalidIndex(raw.to_string()))
        }
        "hist" | "h" => Ok(Command::History),
        "help" => Ok(Command::Help),
        "quit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_filter(raw: &str) -> Result<ListFilter, CommandError> {
    match raw {
        "all" => Ok(ListFilter::All),
        "active" => Ok(ListFilter::Active),
        "archived" => Ok(ListFilter::Archived),
        other => Err(CommandError::InvalidFilter(other.to_string())),
    }
}
