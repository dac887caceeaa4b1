use std::fs::{self, File};
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;

use suggestbox::App;
use suggestbox::config::{self, Config};
use suggestbox::lookup::{HttpSource, LookupRuntime};

/// Autocomplete search box with debounced remote lookups
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Initial query to search for
    query: Option<String>,

    /// Base URL of the search service
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Quiet period in milliseconds before a lookup is sent
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Path to a config file (defaults to ~/.config/suggestbox/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    init_logging();

    let config = resolve_config(&args);
    log::info!(
        "Searching {} with {}ms debounce",
        config.search.base_url,
        config.search.debounce_ms
    );

    let runtime = LookupRuntime::start()?;
    let source = Arc::new(HttpSource::new(&config.search.base_url));
    let mut app = App::new(runtime.handle(), source, &config);
    if let Some(query) = &args.query {
        app.set_initial_query(query);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableBracketedPaste)?;

    let result = run(terminal, &mut app);

    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();

    result?;

    if let Some(accepted) = &app.accepted {
        println!("{}", accepted.name);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.poll_outcomes();
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Load the config file, then let command-line flags override it
fn resolve_config(args: &Args) -> Config {
    let result = config::load_config(args.config.as_deref());
    if let Some(warning) = &result.warning {
        log::warn!("{}", warning);
    }

    let mut config = result.config;
    if let Some(base_url) = &args.base_url {
        config.search.base_url = base_url.clone();
    }
    if let Some(debounce_ms) = args.debounce_ms {
        config.search.debounce_ms = debounce_ms;
    }
    config
}

/// Send logs to a file in the cache dir; the terminal belongs to the UI
///
/// Filter comes from RUST_LOG, defaulting to `info`. Logging is skipped if
/// the file cannot be opened.
fn init_logging() {
    let Some(dir) = dirs::cache_dir().map(|d| d.join("suggestbox")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::options()
        .create(true)
        .append(true)
        .open(dir.join("suggestbox.log"))
    else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}
