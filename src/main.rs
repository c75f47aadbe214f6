// tracescrub: step through recorded algorithm traces in the terminal

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tracescrub::playback::session::Session;
use tracescrub::playback::Speed;
use tracescrub::syntax::{tokenize_with, Dialect, TokenCategory};
use tracescrub::trace::generator::{inputs_from_args, InputArg, JsonTraceGenerator};
use tracescrub::ui::{App, TerminalGuard};

/// Step forward and backward through a recorded algorithm trace
#[derive(Parser, Debug)]
#[command(name = "tracescrub")]
#[command(version, about)]
struct Cli {
    /// JSON trace file
    trace: PathBuf,

    /// Source file to show instead of the trace file's embedded code
    #[arg(long)]
    source: Option<PathBuf>,

    /// Playback speed multiplier
    #[arg(long, default_value_t = 1.0, value_parser = parse_speed)]
    speed: f64,

    /// Generator input as NAME=VALUE (VALUE is JSON or plain text), repeatable
    #[arg(long = "input", value_name = "NAME=VALUE")]
    inputs: Vec<InputArg>,

    /// Start playing immediately
    #[arg(long)]
    autoplay: bool,

    /// Print the highlighted source and step list instead of starting the TUI
    #[arg(long)]
    dump: bool,

    /// Write log records to this file; without it logging is silenced while
    /// the TUI is on screen
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn parse_speed(raw: &str) -> Result<f64, String> {
    let multiplier: f64 = raw.parse().map_err(|_| format!("'{}' is not a number", raw))?;
    Speed::try_from(multiplier).map(|_| multiplier)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file '{}'", path.display()))?;
        logger.target(env_logger::Target::Pipe(Box::new(file)));
    }
    logger.init();

    let generator = JsonTraceGenerator::new(&cli.trace);
    let document = generator
        .document()
        .with_context(|| format!("cannot open trace '{}'", cli.trace.display()))?;

    let source = match &cli.source {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("cannot read source '{}'", path.display()))?,
        None => document.code.clone().unwrap_or_default(),
    };

    let mut session = Session::new(generator, inputs_from_args(&cli.inputs));
    if let Some(error) = session.last_error() {
        log::warn!("continuing with an empty trace: {}", error);
    }
    session
        .controller_mut()
        .set_speed(Speed::try_from(cli.speed).map_err(anyhow::Error::msg)?);

    let dialect = Dialect::from_language(document.language.as_deref());

    if cli.dump {
        dump(&session, &source, dialect);
        return Ok(());
    }

    if cli.autoplay {
        session.controller_mut().play();
    }

    let mut app = App::new(session, source)
        .with_language(document.language.as_deref())
        .with_title(document.title);
    let mut guard =
        TerminalGuard::new(cli.log_file.is_none()).context("cannot initialise terminal")?;
    app.run(guard.terminal_mut())?;

    Ok(())
}

/// Plain-text listing: tagged source lines, then one line per step
fn dump(session: &Session<JsonTraceGenerator>, source: &str, dialect: Dialect) {
    for (idx, line) in source.lines().enumerate() {
        let tagged: Vec<String> = tokenize_with(line, dialect)
            .into_iter()
            .filter(|t| t.category != TokenCategory::Default || !t.text.trim().is_empty())
            .map(|t| format!("{:?}({:?})", t.category, t.text))
            .collect();
        println!("{:4} {}", idx + 1, tagged.join(" "));
    }

    let trace = session.controller().trace();
    println!();
    println!("{} steps", trace.len());
    for (idx, step) in trace.iter().enumerate() {
        let kinds: Vec<&str> = step.elements.iter().map(|e| e.kind()).collect();
        println!(
            "{:4} line {:<3} [{}] {}{}",
            idx,
            step.line_number,
            kinds.join(","),
            step.description.as_deref().unwrap_or(""),
            if step.is_complete { " (complete)" } else { "" }
        );
    }
}
