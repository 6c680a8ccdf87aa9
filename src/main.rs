use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use autosuggest::app::App;
use autosuggest::autocomplete::AutocompleteState;
use autosuggest::config::{self, Config};
use autosuggest::logging;
use autosuggest::lookup::{FixtureSource, spawn_worker};
use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

/// How long to wait for input before advancing timers
const POLL_INTERVAL: Duration = Duration::from_millis(30);

#[derive(Parser, Debug)]
#[command(version, about = "Search box with debounced, asynchronous suggestions")]
struct Args {
    /// Text shown while the search box is empty
    #[arg(long)]
    placeholder: Option<String>,

    /// Quiet period after the last keystroke before a lookup starts
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Simulated latency of the fixture lookup
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Config file to use instead of ~/.config/autosuggest/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Args {
    fn apply(self, mut config: Config) -> Config {
        if let Some(placeholder) = self.placeholder {
            config.widget.placeholder = placeholder;
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.widget.debounce_ms = debounce_ms;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.fixture.delay_ms = delay_ms;
        }
        config
    }
}

/// Keeps mouse reporting on for the lifetime of the UI
struct MouseCapture;

impl MouseCapture {
    fn enable() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    let args = Args::parse();

    if let Some(path) = logging::init()? {
        eprintln!("Logging to {}", path.display());
    }

    let loaded = match &args.config {
        Some(path) => config::load_config_or_default(path),
        None => config::load_config(),
    };
    if let Some(warning) = &loaded.warning {
        eprintln!("Warning: {}", warning);
    }
    let config = args.apply(loaded.config);

    let source = FixtureSource::from_config(&config.fixture);
    let lookup = spawn_worker(Arc::new(source))?;
    let app = App::new(AutocompleteState::new(lookup, &config.widget));

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = MouseCapture::enable()
        .map_err(Into::into)
        .and_then(|capture| {
            let result = run(terminal, app);
            drop(capture);
            result
        });
    ratatui::restore();

    if let Some(selected) = result? {
        println!("{}", selected);
    }
    Ok(())
}

/// Run the event loop; returns the last selected value
fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<Option<String>> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|frame| app.render(frame))?;
            needs_redraw = false;
        }

        if event::poll(POLL_INTERVAL)? {
            needs_redraw |= app.handle_event(event::read()?, Instant::now());
        }
        needs_redraw |= app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(app.output().map(str::to_string))
}
