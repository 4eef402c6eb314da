//! CLI commands: launch, check, plan.
//!
//! Commands depend on the env/runner layer only; environment variables are
//! always read through dropdeck-core's config schema, never ad hoc.

pub mod check;
pub mod launch;
pub mod plan;
