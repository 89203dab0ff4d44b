//! Interactive session: each line edits the decimal or the binary field.

use std::io::{BufRead, Write};

use anyhow::Context;
use converter::Edit;
use tracing::debug;

use crate::{config::OutputFormat, output, session::Session};

#[derive(Debug, PartialEq, Eq)]
pub enum ReplLine {
    Edit(Edit),
    Skip,
    Quit,
}

/// `b:` or `0b` edits the binary field, `d:` or no prefix the decimal one.
pub fn parse_line(line: &str) -> ReplLine {
    let line = line.trim();
    if line.is_empty() {
        return ReplLine::Skip;
    }
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
        return ReplLine::Quit;
    }

    if let Some(rest) = line.strip_prefix("b:").or_else(|| line.strip_prefix("0b")) {
        return ReplLine::Edit(Edit::Binary(rest.trim().to_string()));
    }
    let text = line.strip_prefix("d:").unwrap_or(line);
    ReplLine::Edit(Edit::Decimal(text.trim().to_string()))
}

pub fn run(
    session: &mut Session,
    format: OutputFormat,
    input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input line")?;

        let edit = match parse_line(&line) {
            ReplLine::Quit => break,
            ReplLine::Skip => continue,
            ReplLine::Edit(edit) => edit,
        };
        debug!(base = %edit.base(), "repl edit");

        let rendered = match session.submit(&edit) {
            Ok(snapshot) => output::render_snapshot(snapshot, format)?,
            Err(err) => output::render_error(&err, format)?,
        };
        write!(out, "{rendered}")?;
    }
    writeln!(out)?;
    debug!(decimal = %session.snapshot().decimal, "repl finished");
    Ok(())
}
