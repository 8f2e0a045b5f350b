//! The property matcher (§4.2): decides whether one method's facts are
//! compatible with an already-seeded property, and whether the match used
//! a "long" (suffix-specific) form of the method's name.
//!
//! Ported from `methodMatchesProperty`. Three of the checks below —
//! RemoveAll vs. an Add-bearing property, and GetNumberOf/SetNumberOf vs.
//! an indexed Get/Set-bearing property — are *success-only*: when the
//! condition holds the method matches immediately, but when it doesn't the
//! original falls through to the generic type/count comparison rather
//! than rejecting the method outright. Do not turn these into early
//! `return None`s; a `RemoveAllPoints()` that doesn't pair with an Add
//! bitfield can still match a plain `Points` property the ordinary way.

use crate::facts::MethodFacts;
use crate::ir::{BaseType, Indirection};
use crate::predicates;
use crate::property::Property;

use crate::category::Category;

/// Try to match `meth` against `property`. On success, returns whether the
/// match relied on a suffix specialization (`long_match`) — callers use
/// this to pick `short_form = !long_match` when categorizing the method.
pub fn try_match(property: &Property, meth: &MethodFacts) -> Option<bool> {
    let mut name = predicates::strip_prefix(meth.name);
    let property_name = property.name;
    let n = property_name.len();
    let mut long_match = false;

    if predicates::is_get_number_of(meth.name) || predicates::is_set_number_of(meth.name) {
        let starts_number_of = property_name.as_bytes().len() > 8
            && &property_name.as_bytes()[..8] == b"NumberOf"
            && property_name.as_bytes()[8].is_ascii_uppercase();
        if starts_number_of {
            long_match = true;
        } else {
            // "GetNumberOf"/"SetNumberOf" are both 11 bytes.
            name = &meth.name[11..];
        }
    } else if predicates::is_get_min_value(meth.name) {
        if n >= 8 && property_name.ends_with("MinValue") {
            long_match = true;
        }
    } else if predicates::is_get_max_value(meth.name) {
        if n >= 8 && property_name.ends_with("MaxValue") {
            long_match = true;
        }
    } else if predicates::is_as_string(meth.name) {
        if n >= 8 && property_name.ends_with("AsString") {
            long_match = true;
        }
    }

    if name.len() < n || &name[..n] != property_name {
        return None;
    }
    let suffix = &name[n..];
    if !predicates::is_valid_suffix(meth.name, property_name, suffix) {
        return None;
    }

    let mut work = meth.value_type;
    // "const"/"static" never participate in the comparisons below.
    work.is_const = false;
    work.is_static = false;

    let method_bitfield = match meth.access {
        crate::ir::Access::Public => property.public_methods,
        crate::ir::Access::Protected => property.protected_methods,
        crate::ir::Access::Private => property.private_methods,
    };

    if predicates::is_remove_all(meth.name)
        && work.base == BaseType::Void
        && !work.is_indirect()
        && (method_bitfield & (Category::BasicAdd.bit() | Category::MultiAdd.bit())) != 0
    {
        return Some(long_match);
    }

    if predicates::is_get_number_of(meth.name)
        && matches!(work.base, BaseType::Int | BaseType::IdType)
        && !work.is_indirect()
        && (method_bitfield & (Category::IndexGet.bit() | Category::NthGet.bit())) != 0
    {
        return Some(long_match);
    }

    if predicates::is_set_number_of(meth.name)
        && matches!(work.base, BaseType::Int | BaseType::IdType)
        && !work.is_indirect()
        && (method_bitfield & (Category::IndexSet.bit() | Category::NthSet.bit())) != 0
    {
        return Some(long_match);
    }

    match work.indirection {
        Indirection::Ref => work.indirection = Indirection::None,
        Indirection::PointerRef => work.indirection = Indirection::Pointer,
        Indirection::ConstPointerRef => work.indirection = Indirection::ConstPointer,
        _ => {}
    }

    if meth.is_multi_value {
        match work.indirection {
            Indirection::Pointer => work.indirection = Indirection::PointerPointer,
            Indirection::None => work.indirection = Indirection::Pointer,
            _ => return None,
        }
    }

    let mut work_base = work.base;
    let mut work_indirection = work.indirection;

    let as_string_char_ptr = predicates::is_as_string(meth.name)
        && work.base == BaseType::Char
        && work.indirection == Indirection::Pointer;

    if meth.is_boolean || meth.is_enumerated || as_string_char_ptr {
        let property_indirect = property.value_type.indirection != Indirection::None;
        let eligible = matches!(
            property.value_type.base,
            BaseType::Int | BaseType::UnsignedInt | BaseType::UnsignedChar
        ) || (meth.is_boolean && property.value_type.base == BaseType::Bool);
        if !property_indirect && eligible {
            work_base = property.value_type.base;
            work_indirection = property.value_type.indirection;
        }
    }

    if work_base != property.value_type.base
        || work_indirection != property.value_type.indirection
        || meth.count != property.count
    {
        return None;
    }

    if work_base == BaseType::Object {
        let identity_ok = !meth.is_multi_value
            && work_indirection == Indirection::Pointer
            && meth.count == 0
            && meth.class_name.is_some()
            && property.class_name.is_some()
            && meth.class_name == property.class_name;
        if !identity_ok {
            return None;
        }
    }

    Some(long_match)
}
