//! The fixed provisioning sequences.
//!
//! Each submodule owns one run: a fixed input list, linear iteration with one
//! blocking creation call per item, a name→uid mapping accumulated from the
//! successes, and an unconditional mapping save at the end. Per-item
//! rejections are logged and skipped; transport failures abort the run.

pub mod data_elements;
pub mod org_units;
