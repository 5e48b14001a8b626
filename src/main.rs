use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use ordtree::{
    shell::{Command, Session, HELP},
    TreeKind,
};
use tracing::{debug, level_filters::LevelFilter, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Build AVL and minimal-height binary search trees of integer keys
/// interactively, one command per line on stdin.
#[derive(Parser, Debug)]
#[command(name = "ordtree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    /// Write `<tree>.dot` into this directory after every change to a tree
    #[arg(long, env = "ORDTREE_DOT_DIR")]
    dot_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> io::Result<()> {
    let mut session = Session::<i64>::default();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{HELP}")?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        let cmd = match line.parse::<Command<i64>>() {
            Ok(Command::Quit) => return Ok(()),
            Ok(v) => v,
            Err(e) => {
                writeln!(stdout, "error: {e}")?;
                continue;
            }
        };

        match session.execute(cmd) {
            Ok(outcome) => {
                writeln!(stdout, "{}", outcome.message)?;

                if let Some(dir) = cli.dot_dir.as_ref() {
                    write_dots(&session, dir, &outcome.changed);
                }
            }
            Err(e) => writeln!(stdout, "error: {e}")?,
        }
    }
}

/// Write the DOT rendering of each of the `changed` trees into `dir`.
///
/// Failures are logged and otherwise ignored: the trees are unaffected.
fn write_dots(session: &Session<i64>, dir: &Path, changed: &[TreeKind]) {
    for &kind in changed {
        let path = dir.join(dot_file_name(kind));

        let dot = session.forest().view(kind).to_dot();
        match std::fs::write(&path, dot) {
            Ok(()) => debug!(path = %path.display(), "wrote tree diagram"),
            Err(e) => warn!(path = %path.display(), error = %e, "failed to write tree diagram"),
        }
    }
}

fn dot_file_name(kind: TreeKind) -> &'static str {
    match kind {
        TreeKind::Avl => "avl.dot",
        TreeKind::Balanced => "balanced.dot",
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG, when set, overrides the verbosity flag.
    let env_filter = EnvFilter::builder()
        .with_default_directive(filter.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .init();
}
