//! Line commands for the interactive form.

use crate::error::FormError;
use crate::measurement::Base;
use crate::options::Field;

pub const HELP: &str = "\
commands:
  total <amount> [unit]        set total size, e.g. `total 1.5 GB`
  downloaded <amount> [unit]   set amount downloaded so far
  speed <amount> [unit]        set speed, e.g. `speed 512 kilobyte`
  unit <field> <unit>          change a field's unit, keeping its amount
  base <2|10>                  switch prefix base
  clear <field>                blank a field
  show                         print the current estimate
  units                        list units for the current base
  help                         this text
  quit                         leave";

/// One parsed line of form input.
#[derive(Debug, Clone, PartialEq)]
pub enum FormCommand {
    Set {
        field: Field,
        amount: f64,
        unit: Option<String>,
    },
    Unit {
        field: Field,
        unit: String,
    },
    Base(Base),
    Clear(Field),
    Show,
    Units,
    Help,
    Quit,
}

impl FormCommand {
    pub fn parse(line: &str) -> Result<Self, FormError> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(FormError::Empty)?.to_ascii_lowercase();
        // Units may contain spaces, e.g. "gigabyte (GB)".
        let rest = |words: std::str::SplitWhitespace<'_>| {
            let joined = words.collect::<Vec<_>>().join(" ");
            (!joined.is_empty()).then_some(joined)
        };

        match keyword.as_str() {
            "show" => Ok(FormCommand::Show),
            "units" => Ok(FormCommand::Units),
            "help" | "?" => Ok(FormCommand::Help),
            "quit" | "exit" | "q" => Ok(FormCommand::Quit),
            "base" => {
                let base = words.next().ok_or(FormError::MissingArgument("base"))?;
                Ok(FormCommand::Base(base.parse()?))
            }
            "clear" => {
                let field = words.next().ok_or(FormError::MissingArgument("field"))?;
                Ok(FormCommand::Clear(field.parse()?))
            }
            "unit" => {
                let field = words.next().ok_or(FormError::MissingArgument("field"))?;
                let field = field.parse()?;
                let unit = rest(words).ok_or(FormError::MissingArgument("unit"))?;
                Ok(FormCommand::Unit { field, unit })
            }
            other => {
                let field: Field = other
                    .parse()
                    .map_err(|_| FormError::UnknownCommand(other.to_string()))?;
                let amount = words.next().ok_or(FormError::MissingArgument("amount"))?;
                let amount = parse_amount(amount)?;
                Ok(FormCommand::Set {
                    field,
                    amount,
                    unit: rest(words),
                })
            }
        }
    }
}

/// Finite decimal amount; sign is left to validation.
pub fn parse_amount(s: &str) -> Result<f64, FormError> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FormError::InvalidAmount(s.to_string())),
    }
}
