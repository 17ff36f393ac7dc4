use std::{
    env, fs,
    io::{self, BufRead, Write},
    process::ExitCode,
    sync::Once,
};

use magnus::{display_error, errors::errors::Error, lexer::tokens::Token, run};
use thiserror::Error as ThisError;

static TRACING_INIT: Once = Once::new();

/// Installs a subscriber only when `RUST_LOG` is set, e.g.
/// `RUST_LOG=magnus=trace` to see every token.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[derive(ThisError, Debug)]
enum CliError {
    #[error("could not read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
}

struct Options {
    file: Option<String>,
    context: bool,
}

fn parse_args() -> Options {
    let mut options = Options {
        file: None,
        context: false,
    };

    for arg in env::args().skip(1) {
        if arg == "--context" {
            options.context = true;
        } else {
            options.file = Some(arg);
        }
    }

    options
}

fn main() -> ExitCode {
    init_tracing();

    match start(parse_args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn start(options: Options) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let file_name = match options.file {
        Some(file) => file,
        None => {
            write!(stdout, "Enter your file name: ")?;
            stdout.flush()?;
            let mut line = String::new();
            stdin.lock().read_line(&mut line)?;
            line.trim().to_string()
        }
    };

    if file_name == "stdin" {
        return repl(&file_name, options.context);
    }

    let text = fs::read_to_string(&file_name).map_err(|source| CliError::Read {
        path: file_name.clone(),
        source,
    })?;

    let (tokens, error) = run(&file_name, &text);
    print_result(&mut stdout, &tokens, error.as_ref(), options.context)?;
    Ok(())
}

fn repl(file_name: &str, context: bool) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "magnus > ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        let text = line.trim_end_matches(['\n', '\r']);
        let (tokens, error) = run(file_name, text);
        print_result(&mut stdout, &tokens, error.as_ref(), context)?;
    }
}

fn print_result(
    out: &mut impl Write,
    tokens: &[Token],
    error: Option<&Error>,
    context: bool,
) -> io::Result<()> {
    if let Some(error) = error {
        writeln!(out, "{}", error)?;
        if context {
            writeln!(out, "{}", display_error(error))?;
        }
        return Ok(());
    }

    let dump = tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    writeln!(out, "{}", dump)
}
