//! Property synthesizer: given a class's declared methods — names,
//! access, signatures — recovers the logical get/set/add properties those
//! methods implement, without any explicitly declared property list to
//! consult.
//!
//! The pipeline (§2): [`facts::extract`] reduces each method to the
//! handful of facts the rest of the crate needs; [`repeat::resolve_repeats`]
//! picks a winner among near-duplicate overloads; [`builder::build`] runs
//! the five ordered sweeps that seed properties and absorb matching
//! methods into them via [`matcher::try_match`]; [`category::categorize`]
//! tags each matched method with its role. [`synth::synthesize`] is the
//! entry point most callers want.

pub mod builder;
pub mod category;
pub mod cli;
pub mod error;
pub mod facts;
pub mod io;
pub mod ir;
pub mod logging;
pub mod matcher;
pub mod output;
pub mod predicates;
pub mod property;
pub mod repeat;
pub mod synth;

pub use category::Category;
pub use error::SynthError;
pub use ir::ClassInfo;
pub use property::{ClassProperties, Property};
pub use synth::synthesize;
