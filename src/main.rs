use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use queryquill::config::Config;
use queryquill::file::loader::{load_document_file, load_document_from_stdin};
use queryquill::input::InputHandler;
use queryquill::logging::{self, LogTarget};
use queryquill::playground::state::{MessageLevel, PlaygroundState};
use queryquill::query::{EvaluationState, EXAMPLE_DOCUMENT, EXAMPLE_QUERY};
use queryquill::theme::get_builtin_theme;
use queryquill::ui::UI;
use queryquill::web::serve::EvaluateResponse;
use queryquill::web::{dist, serve, DistOptions, ServeOptions};

/// QueryQuill - An interactive playground for GJSON path queries
#[derive(Parser)]
#[command(name = "queryquill")]
#[command(version)]
#[command(about = "An interactive terminal and web playground for GJSON path queries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// JSON file to query, plain or .gz (omit to read from stdin if piped, or start with the example)
    file: Option<String>,

    /// Initial GJSON path
    #[arg(short, long)]
    query: Option<String>,

    /// Theme name (default: from config, else default-dark)
    #[arg(short, long)]
    theme: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the playground over HTTP
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Directory of static assets
        #[arg(long)]
        assets: Option<PathBuf>,
    },
    /// Write the playground page and assets for static hosting
    Dist {
        /// Output directory
        #[arg(long)]
        out: Option<PathBuf>,

        /// Directory of static assets
        #[arg(long)]
        assets: Option<PathBuf>,
    },
    /// Evaluate one path and print the value
    Eval {
        /// GJSON path
        query: String,

        /// JSON file (omit to read stdin)
        file: Option<String>,

        /// Print the full evaluation as JSON
        #[arg(long)]
        json: bool,
    },
}

/// What this invocation does.
#[derive(Debug, Clone, PartialEq)]
enum RunMode {
    Playground {
        file: Option<String>,
        query: Option<String>,
        theme: String,
    },
    Serve(ServeOptions),
    Dist(DistOptions),
    Eval {
        query: String,
        file: Option<String>,
        json: bool,
    },
}

/// Everything resolved at startup: CLI flags over environment over config file.
#[derive(Debug, Clone, PartialEq)]
struct LaunchConfig {
    mode: RunMode,
    config: Config,
    /// Why the config file was ignored, reported once logging is up.
    config_error: Option<String>,
}

impl LaunchConfig {
    fn resolve(cli: Cli, loaded: Result<Config>) -> Self {
        let (config, config_error) = match loaded {
            Ok(config) => (config, None),
            Err(err) => (Config::default(), Some(format!("{:#}", err))),
        };

        let mode = match cli.command {
            Some(Command::Serve { host, port, assets }) => RunMode::Serve(ServeOptions {
                host: host.unwrap_or_else(|| config.host.clone()),
                port: port.unwrap_or(config.port),
                assets_dir: assets.unwrap_or_else(|| PathBuf::from(&config.assets_dir)),
            }),
            Some(Command::Dist { out, assets }) => RunMode::Dist(DistOptions {
                out_dir: out.unwrap_or_else(|| PathBuf::from(&config.dist_dir)),
                assets_dir: assets.unwrap_or_else(|| PathBuf::from(&config.assets_dir)),
            }),
            Some(Command::Eval { query, file, json }) => RunMode::Eval { query, file, json },
            None => RunMode::Playground {
                file: cli.file,
                query: cli.query,
                theme: cli.theme.unwrap_or_else(|| config.theme.clone()),
            },
        };

        Self {
            mode,
            config,
            config_error,
        }
    }

    fn log_target(&self) -> LogTarget {
        match self.mode {
            RunMode::Playground { .. } => LogTarget::for_playground(self.config.log_file.as_deref()),
            _ => LogTarget::Stderr,
        }
    }
}

/// Set up a panic hook that restores the terminal before displaying panic information.
///
/// This ensures that panics are visible even when the terminal is in raw mode with alternate screen.
fn setup_panic_hook() {
    use std::panic;

    // Take the default panic hook so we can call it after restoration
    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Use stderr to avoid interfering with stdout pipes
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let launch = LaunchConfig::resolve(cli, Config::load());
    logging::init(&launch.config.log_level, &launch.log_target())?;
    if let Some(err) = &launch.config_error {
        tracing::warn!("ignoring config file: {}", err);
    }

    match launch.mode {
        RunMode::Playground { file, query, theme } => {
            setup_panic_hook();
            run_playground(file, query, theme, &launch.config, launch.config_error.as_deref())
        }
        RunMode::Serve(options) => {
            let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
            runtime.block_on(serve::run(options))
        }
        RunMode::Dist(options) => {
            dist::export(&options)?;
            println!("Static site written to {}", options.out_dir.display());
            Ok(())
        }
        RunMode::Eval { query, file, json } => {
            if !run_eval(&query, file.as_deref(), json)? {
                io::stdout().flush()?;
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

/// Reads the document from `file`, or stdin when it's piped.
fn read_document(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => load_document_file(path),
        None if !io::stdin().is_terminal() => load_document_from_stdin(),
        None => bail!("No document: pass a FILE or pipe JSON on stdin"),
    }
}

/// Prints the evaluation. Returns whether the path matched.
fn run_eval(query: &str, file: Option<&str>, json: bool) -> Result<bool> {
    let document = read_document(file)?;
    let state = EvaluationState::new(document, query.to_string());
    tracing::debug!(query, outcome = %state.outcome(), "eval");

    if json {
        let response = serde_json::to_string_pretty(&EvaluateResponse::from_state(&state))?;
        println!("{}", response);
        return Ok(state.found());
    }

    if !state.document_error().is_empty() {
        bail!("{}", state.document_error());
    }
    if state.found() {
        println!("{}", state.value());
    }
    Ok(state.found())
}

fn run_playground(
    file: Option<String>,
    query: Option<String>,
    theme_name: String,
    config: &Config,
    config_error: Option<&str>,
) -> Result<()> {
    // Read the document BEFORE terminal setup, stdin may carry it
    let (document, filename, stdin_was_piped) = if let Some(file_path) = file {
        let document = load_document_file(&file_path)?;
        (Some(document), Some(file_path), false)
    } else if !io::stdin().is_terminal() {
        (Some(load_document_from_stdin()?), None, true)
    } else {
        (None, None, false)
    };

    let theme = match get_builtin_theme(&theme_name) {
        Some(theme) => theme,
        None => {
            tracing::warn!("theme '{}' not found, using default-dark", theme_name);
            get_builtin_theme("default-dark").context("default-dark theme is missing")?
        }
    };

    let mut state = match document {
        Some(document) => {
            PlaygroundState::new(document, query.unwrap_or_default(), theme.name.clone())
        }
        None => PlaygroundState::new(
            EXAMPLE_DOCUMENT.to_string(),
            query.unwrap_or_else(|| EXAMPLE_QUERY.to_string()),
            theme.name.clone(),
        ),
    };
    if let Some(name) = filename {
        state.set_filename(name);
    }
    state.set_show_line_numbers(config.show_line_numbers);
    state.set_indent_size(config.indent_size);
    if let Some(err) = config_error {
        state.set_message(format!("Config ignored: {}", err), MessageLevel::Warning);
    }

    let mut input_handler = if stdin_was_piped {
        InputHandler::new_with_tty()
            .context("Failed to open /dev/tty for keyboard input when stdin was piped")?
    } else {
        InputHandler::new()
    };

    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut ui = UI::new(theme);
    tracing::info!("playground started with theme {}", ui.theme_name());

    let result = run_event_loop(&mut terminal, &mut ui, &mut input_handler, &mut state);

    // Termion restores the screen on drop; the cursor needs showing explicitly
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &mut UI,
    input_handler: &mut InputHandler,
    state: &mut PlaygroundState,
) -> Result<()> {
    loop {
        if let Some(theme_name) = state.take_pending_theme() {
            ui.set_theme(&theme_name);
        }

        ui.render(terminal, state)?;

        match input_handler.poll_event()? {
            Some(event) => {
                if input_handler.handle_event(event, state)? {
                    break;
                }
            }
            // Input closed
            None => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(args: &[&str], config: Config) -> LaunchConfig {
        LaunchConfig::resolve(Cli::try_parse_from(args).unwrap(), Ok(config))
    }

    #[test]
    fn test_unreadable_config_falls_back_and_is_kept_for_reporting() {
        let cli = Cli::try_parse_from(["queryquill", "dist"]).unwrap();
        let launch = LaunchConfig::resolve(cli, Err(anyhow::anyhow!("bad toml")));
        assert_eq!(launch.config, Config::default());
        assert_eq!(launch.config_error.as_deref(), Some("bad toml"));
    }

    #[test]
    fn test_playground_defaults_to_config_theme() {
        let config = Config {
            theme: "nord".to_string(),
            ..Config::default()
        };
        let launch = resolve(&["queryquill", "data.json", "-q", "a.b"], config);
        assert_eq!(
            launch.mode,
            RunMode::Playground {
                file: Some("data.json".to_string()),
                query: Some("a.b".to_string()),
                theme: "nord".to_string(),
            }
        );
        assert_eq!(launch.log_target(), LogTarget::Disabled);
    }

    #[test]
    fn test_cli_theme_overrides_config() {
        let launch = resolve(&["queryquill", "--theme", "dracula"], Config::default());
        match launch.mode {
            RunMode::Playground { theme, .. } => assert_eq!(theme, "dracula"),
            other => panic!("unexpected mode {:?}", other),
        }
    }

    #[test]
    fn test_serve_port_flag_overrides_config() {
        let config = Config {
            port: 9000,
            ..Config::default()
        };
        let launch = resolve(&["queryquill", "serve", "--port", "8123"], config);
        match launch.mode {
            RunMode::Serve(options) => {
                assert_eq!(options.port, 8123);
                assert_eq!(options.host, "0.0.0.0");
                assert_eq!(options.assets_dir, PathBuf::from("web"));
            }
            other => panic!("unexpected mode {:?}", other),
        }
    }

    #[test]
    fn test_dist_uses_config_dirs() {
        let config = Config {
            dist_dir: "public".to_string(),
            ..Config::default()
        };
        let launch = resolve(&["queryquill", "dist"], config);
        assert_eq!(
            launch.mode,
            RunMode::Dist(DistOptions {
                out_dir: PathBuf::from("public"),
                assets_dir: PathBuf::from("web"),
            })
        );
        assert_eq!(launch.log_target(), LogTarget::Stderr);
    }

    #[test]
    fn test_eval_arguments() {
        let launch = resolve(&["queryquill", "eval", "name.last", "doc.json", "--json"], Config::default());
        assert_eq!(
            launch.mode,
            RunMode::Eval {
                query: "name.last".to_string(),
                file: Some("doc.json".to_string()),
                json: true,
            }
        );
    }
}
