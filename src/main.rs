use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event};
use tokio::sync::mpsc::unbounded_channel;

use elasticbook::app::App;
use elasticbook::config::{self, Config};
use elasticbook::focus::{HOME_LOCATION, SEARCH_LOCATION};
use elasticbook::suggest::spawn_worker;

const LOG_FILE: &str = "elasticbook.log";

#[derive(Parser, Debug)]
#[command(name = "elasticbook", version, about = "Elasticsearch for your bookmarks")]
struct Args {
    /// Open the search page with this term
    #[arg(short, long, value_name = "TERM")]
    search: Option<String>,

    /// Suggest endpoint URL
    #[arg(long, env = "ELASTICBOOK_SUGGEST_URL", value_name = "URL")]
    endpoint: Option<String>,

    /// Search results endpoint URL
    #[arg(long, env = "ELASTICBOOK_SEARCH_URL", value_name = "URL")]
    search_endpoint: Option<String>,

    /// Idle time before querying, in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Minimum characters before suggesting
    #[arg(long, value_name = "N")]
    min_length: Option<usize>,

    /// Do not highlight the first suggestion
    #[arg(long)]
    no_auto_focus: bool,

    /// Config file (default: ~/.config/elasticbook/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        let suggest = &mut config.suggest;
        if let Some(endpoint) = &self.endpoint {
            suggest.endpoint = endpoint.clone();
        }
        if let Some(delay_ms) = self.delay_ms {
            suggest.delay_ms = delay_ms;
        }
        if let Some(min_length) = self.min_length {
            suggest.min_length = min_length;
        }
        if self.no_auto_focus {
            suggest.auto_focus = false;
        }
        if let Some(endpoint) = &self.search_endpoint {
            config.search.endpoint = endpoint.clone();
        }
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };
    args.apply_to(&mut config);

    let location = if args.search.is_some() {
        SEARCH_LOCATION
    } else {
        HOME_LOCATION
    };
    let mut app = App::new(&config, location);
    if let Some(term) = &args.search {
        app.input.set_value(term);
    }

    if config.suggest.enabled || config.search.enabled {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(&config, request_rx, response_tx);
        app.suggest.set_channels(request_tx, response_rx);
    }
    if let Some(term) = &args.search {
        app.search(term);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = run(terminal, &mut app);
    ratatui::restore();
    result?;

    if let Some(term) = app.output() {
        println!("{}", term);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key_event(key);
        }

        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Log to a file under the cache dir; stderr belongs to the TUI
///
/// Active in debug builds and with `--verbose`.
fn init_logging(verbose: bool) {
    if !(cfg!(debug_assertions) || verbose) {
        return;
    }

    let Some(dir) = dirs::cache_dir().map(|d| d.join("elasticbook")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };

    let level = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
