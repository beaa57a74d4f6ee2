//! CLI command implementations.

mod common;
mod pack;
mod resid;

pub use common::{Project, ProjectArgs};
pub use pack::{PackArgs, run_pack};
pub use resid::{ResidArgs, run_resid};
