//! 🧭 Browse mode — the search box, the dropdowns, and the page buttons, typed out one line at a time.
//!
//! ```text
//!   /rust            search for "rust" (a lone "/" clears the search)
//!   author Klabnik   filter by author (plain "author" clears it)
//!   sort title       sort by title or author
//!   page 3 | next | prev | first | last
//!   authors | reset | help | quit
//! ```

use anyhow::{Context, Result, bail};
use bkx::catalog::Action;
use bkx::common::SortKey;

pub(crate) const HELP: &str = "\
commands:
  /TEXT            search titles and authors (a lone / clears the search)
  author [NAME]    filter by exact author name (no name = all authors)
  sort author|title
  page N | next | prev | first | last
  authors          list every author
  reset            clear search, filter and sort
  help             this text
  quit             leave";

/// 🎛️ One parsed line of browse input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BrowseCommand {
    Act(Action),
    Authors,
    Help,
    Quit,
}

/// 🔍 Parse a line. Blank lines are `Ok(None)`, gibberish is an error the loop prints and shrugs off.
pub(crate) fn parse_command(line: &str) -> Result<Option<BrowseCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if let Some(text) = line.strip_prefix('/') {
        return Ok(Some(BrowseCommand::Act(Action::SetQuery(text.trim().to_string()))));
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_lowercase().as_str() {
        "author" => BrowseCommand::Act(Action::SetAuthor(
            (!rest.is_empty()).then(|| rest.to_string()),
        )),
        "sort" => BrowseCommand::Act(Action::SetSort(match rest.to_lowercase().as_str() {
            "author" | "by-author" => SortKey::ByAuthor,
            "title" | "by-title" => SortKey::ByTitle,
            other => bail!("💀 sort by '{other}'? We only know 'author' and 'title'."),
        })),
        "page" => BrowseCommand::Act(Action::GoToPage(
            rest.parse()
                .context(format!("💀 '{rest}' is not a page number"))?,
        )),
        "next" | "n" => BrowseCommand::Act(Action::NextPage),
        "prev" | "p" => BrowseCommand::Act(Action::PrevPage),
        "first" => BrowseCommand::Act(Action::FirstPage),
        "last" => BrowseCommand::Act(Action::LastPage),
        "reset" => BrowseCommand::Act(Action::Reset),
        "authors" => BrowseCommand::Authors,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "q" | "exit" => BrowseCommand::Quit,
        other => bail!("💀 '{other}' is not a command. Try 'help'."),
    };
    Ok(Some(command))
}
