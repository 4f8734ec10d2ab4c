use anyhow::{bail, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, stdin, Stdout},
    path::PathBuf,
    process::ExitCode,
    time::Duration,
};
use tracing::{error, info, warn};

use wordfall::{
    app,
    app_dirs::AppDirs,
    config::{ConfigStore, FileConfigStore},
    error::InitError,
    game::{Game, TICK_RATE_MS},
    logging,
    runtime::{CrosstermEventSource, FixedTicker, Runner},
};

/// type the words drifting across your terminal before they reach the far side
#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
pub struct Cli {
    /// config file to read instead of the default location
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// word list to use, one word per line
    #[clap(short = 'w', long)]
    words: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_dir = AppDirs::log_dir();
    let _guard = match logging::init(&log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("wordfall: logging disabled: {e}");
            None
        }
    };

    match start(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("wordfall: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn start(cli: Cli) -> Result<()> {
    if !stdin().is_tty() {
        bail!("stdin must be a tty");
    }

    let store = match &cli.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    let mut config = store.load()?;
    if let Some(words) = cli.words {
        config.vocabulary = Some(words);
    }
    let resources = config.resources()?;

    let mut terminal = match enter_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(InitError::Terminal(e).into());
        }
    };

    let mut game = Game::new(
        resources.screen,
        resources.vocabulary,
        resources.font,
        rand::thread_rng(),
    );
    let mut runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    let outcome = app::run(&mut terminal, &mut runner, &mut game);
    if let Err(e) = leave_terminal(&mut terminal) {
        warn!("failed to restore terminal: {e}");
    }

    let summary = outcome?;
    info!(wpm = summary.wpm, completed = summary.completed, "exiting");
    println!(
        "{} wpm ({} words in {:.1}s)",
        summary.wpm,
        summary.completed,
        summary.elapsed.as_secs_f64()
    );
    Ok(())
}

fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn leave_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
