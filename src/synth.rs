//! Top-level entry point: synthesize a [`ClassProperties`] from one
//! [`ClassInfo`]. This is the one function most callers need; everything
//! else in this crate is a building block it composes (§2 of the core
//! spec: extractor → repeat-resolver → property builder → category
//! tagger).

use crate::builder;
use crate::ir::ClassInfo;
use crate::property::ClassProperties;

/// Synthesize properties for one class. Pure and infallible: an
/// unclassifiable method is silently excluded from every property rather
/// than surfaced as an error (§7 — the only failure mode for this crate is
/// an allocation failure, which Rust reports by aborting, not by `Result`).
pub fn synthesize(class: &ClassInfo) -> ClassProperties<'_> {
    tracing::debug!(class = class.name.as_str(), methods = class.functions.len(), "synthesizing properties");

    let properties = builder::build(class);

    tracing::debug!(
        class = class.name.as_str(),
        properties = properties.properties.len(),
        methods = properties.method_count(),
        "synthesis complete"
    );

    properties
}
