//! Form state: three quantities with units plus the prefix base.
//!
//! Every change is applied synchronously and [`EtaForm::report`] recomputes
//! percent, ETA and validation from scratch. Nothing is cached.

mod command;
mod render;
mod validate;

pub use command::{FormCommand, HELP};
pub use render::{progress_bar, status_lines};
pub use validate::{validate, InputIssue};

use serde::Serialize;

use crate::config::EtacalcConfig;
use crate::error::UnitError;
use crate::eta::{compute_eta, percent_complete};
use crate::measurement::{generate_measurements, Base, Measurement};
use crate::options::{default_option, resolve_unit, Field, UnitOption};

/// An amount in a chosen unit. A blank amount counts as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub amount: Option<f64>,
    pub unit: UnitOption,
}

impl Quantity {
    /// Amount converted to bits (bits per second for speed).
    pub fn bits(&self) -> f64 {
        self.amount.unwrap_or(0.0) * self.unit.bits as f64
    }
}

/// Computed output of the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EtaReport {
    pub base: Base,
    pub total_bits: f64,
    pub downloaded_bits: f64,
    pub speed_bits_per_sec: f64,
    /// Rounded up, may exceed 100.
    pub percent: i64,
    /// Empty when there is no meaningful ETA.
    pub eta: String,
    pub issues: Vec<InputIssue>,
}

#[derive(Debug, Clone)]
pub struct EtaForm {
    base: Base,
    measurements: Vec<Measurement>,
    total: Quantity,
    downloaded: Quantity,
    speed: Quantity,
}

impl EtaForm {
    /// Empty form with every field on its default unit.
    pub fn new(base: Base) -> Self {
        let measurements = generate_measurements(base);
        let pick = |field: Field| Quantity {
            amount: None,
            unit: field_default(field, &measurements),
        };
        Self {
            base,
            total: pick(Field::Total),
            downloaded: pick(Field::Downloaded),
            speed: pick(Field::Speed),
            measurements,
        }
    }

    /// Empty form using the configured base and units.
    ///
    /// A configured unit that doesn't resolve is logged and the field keeps its default.
    pub fn from_config(cfg: &EtacalcConfig) -> Self {
        let mut form = Self::new(cfg.base);
        for field in Field::ALL {
            let unit = cfg.unit_for(field);
            if let Err(err) = form.set_unit(field, unit) {
                tracing::warn!(%field, %err, "ignoring configured unit");
            }
        }
        form
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn options(&self, field: Field) -> Vec<UnitOption> {
        field.options(&self.measurements)
    }

    pub fn quantity(&self, field: Field) -> &Quantity {
        match field {
            Field::Total => &self.total,
            Field::Downloaded => &self.downloaded,
            Field::Speed => &self.speed,
        }
    }

    fn quantity_mut(&mut self, field: Field) -> &mut Quantity {
        match field {
            Field::Total => &mut self.total,
            Field::Downloaded => &mut self.downloaded,
            Field::Speed => &mut self.speed,
        }
    }

    pub fn set_amount(&mut self, field: Field, amount: Option<f64>) {
        tracing::debug!(%field, ?amount, "set amount");
        self.quantity_mut(field).amount = amount;
    }

    /// Select a unit by display name, measurement name or abbreviation.
    /// On failure the previous unit stays selected.
    pub fn set_unit(&mut self, field: Field, query: &str) -> Result<(), UnitError> {
        let options = self.options(field);
        let unit = resolve_unit(&options, query)?.clone();
        tracing::debug!(%field, unit = %unit.display_name, bits = unit.bits, "set unit");
        self.quantity_mut(field).unit = unit;
        Ok(())
    }

    /// Switch prefix base and re-resolve each field's unit by display name,
    /// so the selection stays put while its bit count follows the new base.
    pub fn set_base(&mut self, base: Base) {
        if base == self.base {
            return;
        }
        self.base = base;
        self.measurements = generate_measurements(base);
        for field in Field::ALL {
            let options = field.options(&self.measurements);
            let current = self.quantity(field).unit.display_name.clone();
            let unit = match resolve_unit(&options, &current) {
                Ok(unit) => unit.clone(),
                Err(err) => {
                    tracing::warn!(%field, %err, "unit vanished after base change");
                    field_default(field, &self.measurements)
                }
            };
            self.quantity_mut(field).unit = unit;
        }
        tracing::debug!(%base, "base changed");
    }

    /// Apply one parsed form command. Display-only commands leave the form untouched.
    pub fn apply(&mut self, command: &FormCommand) -> Result<(), UnitError> {
        match command {
            FormCommand::Set { field, amount, unit } => {
                if let Some(unit) = unit {
                    self.set_unit(*field, unit)?;
                }
                self.set_amount(*field, Some(*amount));
            }
            FormCommand::Unit { field, unit } => self.set_unit(*field, unit)?,
            FormCommand::Base(base) => self.set_base(*base),
            FormCommand::Clear(field) => self.set_amount(*field, None),
            FormCommand::Show | FormCommand::Units | FormCommand::Help | FormCommand::Quit => {}
        }
        Ok(())
    }

    pub fn report(&self) -> EtaReport {
        let total_bits = self.total.bits();
        let downloaded_bits = self.downloaded.bits();
        let speed_bits_per_sec = self.speed.bits();
        EtaReport {
            base: self.base,
            total_bits,
            downloaded_bits,
            speed_bits_per_sec,
            percent: percent_complete(total_bits, downloaded_bits),
            eta: compute_eta(total_bits, downloaded_bits, speed_bits_per_sec),
            issues: validate(total_bits, downloaded_bits, speed_bits_per_sec),
        }
    }
}

fn field_default(field: Field, measurements: &[Measurement]) -> UnitOption {
    let options = field.options(measurements);
    // Tables always carry the default units, so the fallback is never empty.
    default_option(&options)
        .cloned()
        .unwrap_or_else(|| UnitOption {
            display_name: String::new(),
            name: String::new(),
            abbreviation: String::new(),
            bits: 1,
            is_default: true,
        })
}
