//! `etacalc form` – interactive line-oriented form.

use anyhow::{Context, Result};
use etacalc_core::config::EtacalcConfig;
use etacalc_core::form::{EtaForm, FormCommand, HELP};
use etacalc_core::Base;
use std::io::{self, BufRead, Write};

use super::render::{render_form, render_units};

/// Read commands from `input` until `quit` or EOF, printing the estimate after each change.
pub fn form_loop<R: BufRead, W: Write>(
    form: &mut EtaForm,
    input: R,
    mut output: W,
    bar_width: usize,
) -> Result<()> {
    writeln!(output, "Type `help` for commands.")?;
    write!(output, "{}", render_form(form, bar_width))?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line.context("read form input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match FormCommand::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "error: {err}")?;
                continue;
            }
        };
        tracing::debug!(?command, "form command");

        match &command {
            FormCommand::Quit => break,
            FormCommand::Help => writeln!(output, "{HELP}")?,
            FormCommand::Units => {
                write!(output, "{}", render_units(form.base(), form.measurements()))?
            }
            FormCommand::Show => write!(output, "{}", render_form(form, bar_width))?,
            _ => match form.apply(&command) {
                Ok(()) => write!(output, "{}", render_form(form, bar_width))?,
                Err(err) => writeln!(output, "error: {err}")?,
            },
        }
    }
    Ok(())
}

pub fn run_form(cfg: &EtacalcConfig, base: Option<Base>) -> Result<()> {
    let mut form = EtaForm::from_config(cfg);
    if let Some(base) = base {
        form.set_base(base);
    }
    let stdin = io::stdin();
    form_loop(&mut form, stdin.lock(), io::stdout(), cfg.progress_bar_width)
}
