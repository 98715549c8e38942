use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use argh::FromArgs;
use fusuma::app::App;
use fusuma::core::{ClassHint, CompiledPattern, Config, Rect, State};
use fusuma::loader::load_config;
use fusuma::platform::{HeadlessWindowSystem, LoggingManipulator};
use fusuma::script::{parse_line, ScriptLine};
use fusuma_proto::{Command, Response};
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fusuma - tag classification and view selection for tiling window managers
#[derive(FromArgs)]
struct Cli {
    /// path to config.json (defaults to the user config directory)
    #[argh(option)]
    config: Option<PathBuf>,

    #[argh(subcommand)]
    command: Option<SubCommand>,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum SubCommand {
    Check(CheckCmd),
    Classify(ClassifyCmd),
    Replay(ReplayCmd),
    Version(VersionCmd),
}

/// Load the config and report how each rule compiled
#[derive(FromArgs)]
#[argh(subcommand, name = "check")]
struct CheckCmd {}

/// Show the tags and floating state a new window would get
#[derive(FromArgs)]
#[argh(subcommand, name = "classify")]
struct ClassifyCmd {
    /// window class
    #[argh(option)]
    class: Option<String>,
    /// window instance
    #[argh(option)]
    instance: Option<String>,
    /// window title
    #[argh(option, default = "String::new()")]
    title: String,
    /// screen the window appears on
    #[argh(option, default = "0")]
    screen: u32,
}

/// Run a command script against an in-memory session
#[derive(FromArgs)]
#[argh(subcommand, name = "replay")]
struct ReplayCmd {
    /// script file (reads stdin when omitted)
    #[argh(positional)]
    script: Option<PathBuf>,
}

/// Show version information
#[derive(FromArgs)]
#[argh(subcommand, name = "version")]
struct VersionCmd {}

fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    let Some(command) = cli.command else {
        // No subcommand - show help (simulate --help)
        let args: Vec<&str> = vec!["fusuma", "--help"];
        if let Err(e) = Cli::from_args(&args[..1], &args[1..]) {
            println!("{}", e.output);
        }
        return Ok(());
    };

    if let SubCommand::Version(_) = command {
        println!("fusuma {}", VERSION);
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fusuma=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match command {
        SubCommand::Check(_) => run_check(&config),
        SubCommand::Classify(cmd) => run_classify(config, cmd),
        SubCommand::Replay(cmd) => run_replay(config, cmd),
        SubCommand::Version(_) => unreachable!("handled above"),
    }
}

fn run_check(config: &Config) -> Result<()> {
    let tags: Vec<&str> = config.tags.iter().map(|t| t.name.as_str()).collect();
    println!("Tags: {}", tags.join(", "));
    println!("Screens: {}", config.screen_count);

    let mut invalid = 0;
    for (i, (rule, compiled)) in config
        .rules()
        .iter()
        .zip(config.rules_engine().compiled())
        .enumerate()
    {
        println!(
            "Rule {}: prop={} tags={} floating={}",
            i,
            describe(rule.prop.as_deref(), &compiled.prop),
            describe(rule.tags.as_deref(), &compiled.tags),
            rule.is_floating
        );
        invalid += [&compiled.prop, &compiled.tags]
            .iter()
            .filter(|p| matches!(p, CompiledPattern::Invalid { .. }))
            .count();
    }

    if invalid > 0 {
        bail!("{} pattern(s) failed to compile", invalid);
    }
    Ok(())
}

fn describe(pattern: Option<&str>, compiled: &CompiledPattern) -> String {
    match compiled {
        CompiledPattern::Compiled(_) => format!("{:?}", pattern.unwrap_or_default()),
        CompiledPattern::Missing => "-".to_string(),
        CompiledPattern::Invalid { pattern, error } => {
            format!("{:?} (invalid: {})", pattern, error)
        }
    }
}

fn run_classify(config: Config, cmd: ClassifyCmd) -> Result<()> {
    let ws = HeadlessWindowSystem::new();
    let hint = ClassHint {
        class: cmd.class,
        instance: cmd.instance,
    };
    println!("Key: {}", hint.composite_key(&cmd.title));
    ws.register(1, hint);

    let mut state = State::new(config);
    if !state.screens.contains_key(&cmd.screen) {
        bail!("Screen not found: {}", cmd.screen);
    }
    state.manage_window(&ws, 1, cmd.screen, cmd.title, Rect::default());

    let window = state
        .windows
        .get(&1)
        .context("window was not managed")?;
    let screen = state
        .screens
        .get(&window.screen)
        .context("window screen disappeared")?;
    println!("Tags: {}", screen.tags.names_of(&window.tags).join(", "));
    println!("Floating: {}", window.is_floating);
    Ok(())
}

fn run_replay(config: Config, cmd: ReplayCmd) -> Result<()> {
    let reader: Box<dyn BufRead> = match &cmd.script {
        Some(path) => Box::new(BufReader::new(
            std::fs::File::open(path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(std::io::stdin())),
    };

    let app = App::new(
        State::new(config),
        HeadlessWindowSystem::new(),
        LoggingManipulator,
    );

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(parsed) = parse_line(&line).with_context(|| format!("line {}", number + 1))?
        else {
            continue;
        };
        match parsed {
            ScriptLine::Manage {
                window_id,
                screen,
                hint,
                title,
            } => {
                app.window_system().register(window_id, hint);
                app.manage_window(window_id, screen, title, Rect::default())
                    .map_err(anyhow::Error::msg)?;
            }
            ScriptLine::Unmanage { window_id } => {
                app.unmanage_window(window_id).map_err(anyhow::Error::msg)?;
                app.window_system().forget(window_id);
            }
            ScriptLine::Command(command) => match app.handle_command(&command) {
                Response::Ok => {}
                Response::Error { message } => {
                    eprintln!("line {}: {}", number + 1, message);
                }
                response => println!("{}", serde_json::to_string(&response)?),
            },
        }
    }

    let response = app.handle_command(&Command::GetState);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
