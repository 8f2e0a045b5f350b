//! The repeat resolver (§4.4): finds methods that are minor variants of
//! each other — typically an overload set like `SetPoint(float*)` /
//! `SetPoint(double*)`, or a legacy/non-legacy pair — and picks one
//! winner per group so only the winner is eligible to seed or join a
//! property.
//!
//! Ported from `searchForRepeatedMethods`, which the original calls twice
//! per overlap (once while extracting each method, once while seeding
//! each property) for a behaviorally idempotent result. This crate runs
//! it once, as a dedicated pass between extraction and the sweep (see
//! SPEC_FULL.md §2.4): for each method in order, scan for the first other
//! method it forms a repeat pair with and resolve that pair immediately,
//! exactly mirroring the original's first-match-wins tie-break.

use crate::facts::MethodFacts;
use crate::ir::BaseType;

/// Per-method repeat resolution: `is_repeat[i]` is true if method `i` lost
/// its pairing and should be excluded from seeding/joining a property;
/// `winner[i]` names the method that should supply its category and
/// property assignment when reporting results.
pub struct RepeatResolution {
    pub is_repeat: Vec<bool>,
    pub winner: Vec<Option<usize>>,
}

fn same_shape(a: &MethodFacts, b: &MethodFacts) -> bool {
    a.name == b.name
        && a.value_type.indirection == b.value_type.indirection
        && a.access == b.access
        && a.is_hinted == b.is_hinted
        && a.is_multi_value == b.is_multi_value
        && a.is_indexed == b.is_indexed
        && a.is_enumerated == b.is_enumerated
        && a.is_boolean == b.is_boolean
}

/// True if `b` should be preferred over `a` when both otherwise match:
/// double over float, then higher array count at equal base type, then
/// non-legacy over legacy.
fn prefers(a: &MethodFacts, b: &MethodFacts) -> bool {
    (a.value_type.base == BaseType::Float && b.value_type.base == BaseType::Double)
        || (a.value_type.base == b.value_type.base && a.count < b.count)
        || (a.is_legacy && !b.is_legacy)
}

pub fn resolve_repeats(methods: &[MethodFacts]) -> RepeatResolution {
    let n = methods.len();
    let mut is_repeat = vec![false; n];
    let mut winner: Vec<Option<usize>> = vec![None; n];

    for j in 0..n {
        for i in 0..n {
            if i == j {
                continue;
            }
            if !same_shape(&methods[j], &methods[i]) {
                continue;
            }

            if prefers(&methods[j], &methods[i]) {
                is_repeat[j] = true;
                winner[j] = Some(i);
                break;
            }
            if prefers(&methods[i], &methods[j]) {
                is_repeat[i] = true;
                winner[i] = Some(j);
                break;
            }
        }
    }

    RepeatResolution { is_repeat, winner }
}
