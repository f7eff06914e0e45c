//! CLI command handlers. Each command is in its own file.

mod completions;
mod estimate;
mod form;
mod man;
mod render;
mod units;

pub use completions::run_completions;
pub use estimate::run_estimate;
pub use form::run_form;
pub use man::run_man;
pub use units::run_units;

#[cfg(test)]
pub(crate) use estimate::build_form;
#[cfg(test)]
pub(crate) use form::form_loop;
#[cfg(test)]
pub(crate) use render::{render_form, render_units};
