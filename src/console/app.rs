use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::cache::ReferenceCache;
use crate::catalog::{Catalog, CategoryFilter};
use crate::model::OperatorStatus;
use crate::remote::RemoteClient;
use crate::session::Session;

use super::input::Input;
use super::picker::Picker;
use super::wizard::DeleteWizard;

mod actions;
mod event_loop;
mod fetch;
mod keys;

use fetch::FetchPool;

/// Delay between a successful execution and the roster refresh, letting
/// server-side state settle first.
const ROSTER_REFRESH_DELAY: Duration = Duration::from_millis(1500);
/// How long a successful deletion stays on screen before the wizard resets
/// to its first step.
const WIZARD_RESET_DELAY: Duration = Duration::from_millis(1800);

/// Access gate. Fail-closed: a failed status check renders Denied, and no
/// further calls are attempted.
pub(super) enum Gate {
    Checking,
    Denied(String),
    Granted(OperatorStatus),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Focus {
    Commands,
    Params,
}

pub(super) struct App {
    pub(super) client: Arc<RemoteClient>,
    pub(super) gate: Gate,

    pub(super) catalog: Catalog,
    pub(super) catalog_pending: bool,
    pub(super) catalog_error: Option<String>,
    pub(super) category: CategoryFilter,
    pub(super) cursor: usize,

    pub(super) focus: Focus,
    pub(super) param_cursor: usize,
    pub(super) editing: Option<Input>,

    pub(super) session: Session,
    pub(super) cache: ReferenceCache,
    pub(super) picker: Option<Picker>,
    pub(super) wizard: Option<DeleteWizard>,

    pub(super) fetch: FetchPool,
    pub(super) roster_refresh_at: Option<Instant>,
    pub(super) wizard_reset_at: Option<Instant>,

    pub(super) quit: bool,
}

impl App {
    fn new(client: RemoteClient) -> Self {
        let client = Arc::new(client);
        let fetch = FetchPool::new();
        // The gate check starts immediately; everything else waits on it.
        fetch.status(client.clone());
        Self {
            client,
            gate: Gate::Checking,
            catalog: Catalog::default(),
            catalog_pending: false,
            catalog_error: None,
            category: CategoryFilter::default(),
            cursor: 0,
            focus: Focus::Commands,
            param_cursor: 0,
            editing: None,
            session: Session::default(),
            cache: ReferenceCache::default(),
            picker: None,
            wizard: None,
            fetch,
            roster_refresh_at: None,
            wizard_reset_at: None,
            quit: false,
        }
    }
}

pub(super) fn run(client: RemoteClient) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("console requires an interactive terminal (TTY)");
    }

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::new(client);
    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen).ok();
    res
}
