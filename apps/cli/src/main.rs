use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use converter::Edit;

mod config;
mod output;
mod repl;
mod session;

use config::{OutputFormat, Settings};
use session::Session;

/// Exit status when strict mode rejects the input.
const EXIT_REJECTED: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "bitconv",
    about = "Convert numbers between decimal and binary and show their bit table"
)]
struct Cli {
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Reject input with foreign characters instead of stripping them.
    #[arg(long)]
    strict: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Edit the decimal field.
    Decimal {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Edit the binary field.
    Binary {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Read edits line by line, keeping state between them.
    Repl,
}

impl Command {
    fn into_edit(self) -> Option<Edit> {
        match self {
            Command::Decimal { text } => Some(Edit::Decimal(text)),
            Command::Binary { text } => Some(Edit::Binary(text)),
            Command::Repl => None,
        }
    }
}

/// Applies one edit and writes the result to `out`, or the rejection to `err`.
fn run_once(
    session: &mut Session,
    edit: &Edit,
    format: OutputFormat,
    mut out: impl Write,
    mut err: impl Write,
) -> Result<u8> {
    match session.submit(edit) {
        Ok(snapshot) => {
            out.write_all(output::render_snapshot(snapshot, format)?.as_bytes())?;
            Ok(0)
        }
        Err(rejection) => {
            err.write_all(output::render_error(&rejection, format)?.as_bytes())?;
            Ok(EXIT_REJECTED)
        }
    }
}

fn apply_flags(settings: &mut Settings, cli: &Cli) {
    if let Some(format) = cli.format {
        settings.output_format = format;
    }
    if cli.strict {
        settings.strict = true;
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut settings = config::load_settings()?;
    apply_flags(&mut settings, &cli);

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(io::stderr)
        .init();
    tracing::debug!(?settings, "loaded settings");

    let mut session = Session::new(settings.strict);
    let Some(edit) = cli.command.into_edit() else {
        repl::run(
            &mut session,
            settings.output_format,
            io::stdin().lock(),
            io::stdout().lock(),
        )?;
        return Ok(ExitCode::SUCCESS);
    };

    let status = run_once(
        &mut session,
        &edit,
        settings.output_format,
        io::stdout().lock(),
        io::stderr().lock(),
    )?;
    Ok(ExitCode::from(status))
}
