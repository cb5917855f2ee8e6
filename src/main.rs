use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sos_game::config::AppConfig;
use sos_game::ui::App;

/// Two-player SOS on a 5x5 grid.
#[derive(Parser)]
#[command(name = "sos", about = "Play SOS in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "sos.toml")]
    config: PathBuf,

    /// Override the log level ("off", "error", "warn", "info", "debug", "trace")
    #[arg(long)]
    log_level: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let (config, source) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    sos_game::logging::init(&config.logging, cli.log_level.as_deref())
        .context("setting up logging")?;
    source.log();

    let mut app = App::new(&config).context("building app")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Keep the final result on screen for a moment before handing the
    // terminal back.
    if res.is_ok() && app.game_state().is_terminal() {
        std::thread::sleep(Duration::from_millis(config.game.exit_delay_ms));
    }

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    let _ = terminal.show_cursor();

    res.context("running game")
}
