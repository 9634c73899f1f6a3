use {
  anyhow::Context,
  app::App,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  help_view::HelpView,
  list_view::ListView,
  pending_search::PendingSearch,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  search_hit::SearchHit,
  search_response::SearchResponse,
  search_term::SearchTerm,
  serde::Deserialize,
  state::State,
  status_line::StatusLine,
  std::{
    backtrace::BacktraceStatus,
    io::{self, IsTerminal, Stdout},
    process,
    time::{Duration, Instant},
  },
  storage::Storage,
  stories_action::StoriesAction,
  stories_state::StoriesState,
  story::{Story, filter_stories},
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  utils::{format_comments, format_points, truncate},
};

mod app;
mod client;
mod command;
mod command_dispatch;
mod effect;
mod event;
mod help_view;
mod list_view;
mod pending_search;
mod search_hit;
mod search_response;
mod search_term;
mod state;
mod status_line;
mod storage;
mod stories_action;
mod stories_state;
mod story;
mod utils;

const DEFAULT_QUERY: &str = "React";
const SEARCH_KEY: &str = "search";

const TITLE: &str = "My Hacker Stories";

const LIST_STATUS: &str = "type to search • enter submit • ↑/↓ select • ctrl+d dismiss • ctrl+o open • F1 help • esc quit";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press F1 or esc to close help";

const ERROR_NOTICE: &str = "Something went wrong ...";
const LOADING_NOTICE: &str = "Loading ...";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Search:
  type       edit the query (saved as you type)
  backspace  delete the last character
  enter      search Hacker News for the query

  While you type, the current results narrow to the
  titles containing the query.

List:
  ↑ / ↓      move the selection
  pg↑ / pg↓  page up / down
  home / end jump to the first / last story
  ctrl+d     dismiss the selected story
  del        dismiss the selected story
  ctrl+o     open the selected story in your browser

Other:
  F1         toggle this help
  esc        close help, or quit from the list
  ctrl+c     quit
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let storage = Storage::open().context("could not open search storage")?;

  let search_term = SearchTerm::load(storage, SEARCH_KEY, DEFAULT_QUERY);

  let client = Client::default();

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, search_term);

  app.run(&mut terminal)?;

  restore_terminal(&mut terminal)
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
