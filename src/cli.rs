use crate::controller::Event;
use crate::error::RecipeError;
use crate::upload::NewRecipe;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  search <query>      search recipes (alias: s)
  #<id> | open <id>   load a recipe
  page <n>            show page n of the last search
  servings <n>        scale the current recipe
  bookmark            bookmark / un-bookmark the current recipe
  bookmarks           list bookmarks
  clear-bookmarks     remove every bookmark
  upload <file.json>  upload your own recipe
  help                show this help
  quit                exit
Several commands can be chained with ';', e.g. \"#5ed6604591c37cdc054bc886; servings 8\"";

/// A parsed input line.
#[derive(Debug, Clone)]
pub enum Command {
    Event(Event),
    /// Upload the recipe described by this JSON file
    Upload(PathBuf),
    Help,
    Quit,
}

/// Errors that can occur while parsing an input line
#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Unknown command: '{0}'. Type 'help' for a list of commands")]
    Unknown(String),

    #[error("'{0}' requires {1}")]
    MissingArgument(&'static str, &'static str),

    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),
}

/// Split `input` on `;` and parse each non-blank part.
pub fn parse_commands(input: &str) -> Result<Vec<Command>, CommandError> {
    input
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_command)
        .collect()
}

/// Parse one command such as `search pizza` or `#abc123`.
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let input = input.trim();
    if input.starts_with('#') {
        return Ok(Command::Event(Event::RouteChanged(input.to_string())));
    }

    let (name, rest) = match input.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (input, ""),
    };

    let command = match name.to_lowercase().as_str() {
        "search" | "s" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("search", "a query"));
            }
            Command::Event(Event::Search(rest.to_string()))
        }
        "open" | "show" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("open", "a recipe id"));
            }
            Command::Event(Event::RouteChanged(rest.to_string()))
        }
        "page" => Command::Event(Event::GoToPage(parse_number("page", rest)?)),
        "servings" => Command::Event(Event::UpdateServings(parse_number("servings", rest)?)),
        "bookmark" => Command::Event(Event::ToggleBookmark),
        "bookmarks" => Command::Event(Event::ShowBookmarks),
        "clear-bookmarks" => Command::Event(Event::ClearBookmarks),
        "upload" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("upload", "a JSON file path"));
            }
            Command::Upload(PathBuf::from(rest))
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(CommandError::Unknown(input.to_string())),
    };
    Ok(command)
}

fn parse_number<T: std::str::FromStr>(name: &'static str, arg: &str) -> Result<T, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(name, "a number"));
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidNumber(arg.to_string()))
}

/// Read an upload form from a JSON file.
pub async fn read_new_recipe(path: &Path) -> Result<NewRecipe, RecipeError> {
    let raw = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&raw)
        .map_err(|e| RecipeError::ValidationError(format!("Invalid recipe file: {}", e)))
}
