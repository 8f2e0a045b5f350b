//! The property builder (§4.3): five ordered sweeps over a class's methods
//! that seed properties from Set, SetNumberOf, Get, GetNumberOf, and Add
//! methods in turn, each sweep skipping methods already claimed by an
//! earlier one. Ported from `categorizeProperties`.

use crate::category;
use crate::facts::{self, MethodFacts};
use crate::ir::{Access, ClassInfo};
use crate::matcher;
use crate::predicates;
use crate::property::{self, ClassProperties, Property};
use crate::repeat;

/// Run the full pipeline — extract, resolve repeats, sweep — over one
/// class. This is the crate's only entry point that walks a whole class;
/// `facts::extract`/`repeat::resolve_repeats`/`matcher::try_match` are the
/// per-method building blocks it composes.
pub fn build(class: &ClassInfo) -> ClassProperties<'_> {
    let n = class.functions.len();
    let facts: Vec<Option<MethodFacts>> = class.functions.iter().map(facts::extract).collect();

    let indices: Vec<usize> = (0..n).filter(|&i| facts[i].is_some()).collect();
    let subset: Vec<MethodFacts> = indices.iter().map(|&i| facts[i].unwrap()).collect();
    let repeats = repeat::resolve_repeats(&subset);

    // "matched" methods are removed from consideration for seeding/joining:
    // methods with no extractable facts, and methods that lost a repeat pair.
    let mut matched = vec![true; n];
    for (k, &i) in indices.iter().enumerate() {
        matched[i] = repeats.is_repeat[k];
    }

    let mut method_category = vec![0u32; n];
    let mut method_property: Vec<Option<usize>> = vec![None; n];
    let mut properties: Vec<Property> = Vec::new();

    // Sweep 1: Set methods, except SetValueToEnum() and SetNumberOf().
    for &i in &indices {
        if !matched[i] {
            let f = facts[i].as_ref().unwrap();
            if predicates::is_set(f.name)
                && !f.is_enumerated
                && !predicates::is_set_number_of(f.name)
            {
                seed_and_match(&facts, &mut matched, &mut method_category, &mut method_property, &mut properties, i);
            }
        }
    }

    // Sweep 2: SetNumberOf() methods that didn't pair with an indexed Set.
    for &i in &indices {
        if !matched[i] && predicates::is_set_number_of(facts[i].as_ref().unwrap().name) {
            seed_and_match(&facts, &mut matched, &mut method_category, &mut method_property, &mut properties, i);
        }
    }

    // Sweep 3: Get methods, except GetValueAsString() and GetNumberOf().
    for &i in &indices {
        if !matched[i] {
            let f = facts[i].as_ref().unwrap();
            if predicates::is_get(f.name)
                && !predicates::is_as_string(f.name)
                && !predicates::is_get_number_of(f.name)
            {
                seed_and_match(&facts, &mut matched, &mut method_category, &mut method_property, &mut properties, i);
            }
        }
    }

    // Sweep 4: GetNumberOf() methods that didn't pair with an indexed Get.
    for &i in &indices {
        if !matched[i] && predicates::is_get_number_of(facts[i].as_ref().unwrap().name) {
            seed_and_match(&facts, &mut matched, &mut method_category, &mut method_property, &mut properties, i);
        }
    }

    // Sweep 5: every remaining Add method.
    for &i in &indices {
        if !matched[i] && predicates::is_add(facts[i].as_ref().unwrap().name) {
            seed_and_match(&facts, &mut matched, &mut method_category, &mut method_property, &mut properties, i);
        }
    }

    // Repeats never joined a sweep; they report the same category and
    // property as whichever method won their pairing (§2.2 supplemented
    // teardown note: no separate free pass is needed, this just copies
    // two integers).
    for (k, &i) in indices.iter().enumerate() {
        if repeats.is_repeat[k] {
            if let Some(wk) = repeats.winner[k] {
                let w = indices[wk];
                method_category[i] = method_category[w];
                method_property[i] = method_property[w];
            }
        }
    }

    ClassProperties {
        class_name: &class.name,
        properties,
        method_category,
        method_property,
    }
}

/// Seed a property from method `i`'s facts, then run the fixed-point sweep
/// to absorb every other method that matches it. Ported from `addProperty`.
fn seed_and_match<'a>(
    facts: &[Option<MethodFacts<'a>>],
    matched: &mut [bool],
    method_category: &mut [u32],
    method_property: &mut [Option<usize>],
    properties: &mut Vec<Property<'a>>,
    i: usize,
) {
    let meth = facts[i].as_ref().unwrap();
    let category = category::categorize(meth, false)
        .expect("sweep predicate guarantees a category for the seed method");
    let property_name = predicates::strip_prefix(meth.name);
    let property_id = properties.len();

    matched[i] = true;
    method_category[i] = category.bit();
    method_property[i] = Some(property_id);

    let mut property = property::seed(meth, property_name, category.bit());
    find_all_matches(facts, matched, method_category, method_property, &mut property, property_id);
    properties.push(property);
}

/// Absorb every still-unmatched method that matches `property`, looping
/// until a full pass finds nothing new — a later match (e.g. an `Add`
/// joining the access bitfield) can make a `RemoveAll` valid that failed
/// on an earlier pass. Ported from `findAllMatches`.
fn find_all_matches<'a>(
    facts: &[Option<MethodFacts<'a>>],
    matched: &mut [bool],
    method_category: &mut [u32],
    method_property: &mut [Option<usize>],
    property: &mut Property<'a>,
    property_id: usize,
) {
    let mut iteration = 0u32;
    loop {
        iteration += 1;
        let mut changed = false;

        for (j, slot) in facts.iter().enumerate() {
            if matched[j] {
                continue;
            }
            let meth = match slot {
                Some(m) => m,
                None => continue,
            };

            let Some(long_match) = matcher::try_match(property, meth) else {
                continue;
            };

            matched[j] = true;
            changed = true;

            if meth.is_static {
                property.is_static = true;
            }

            let category = category::categorize(meth, !long_match)
                .expect("a method that matched a property always has a category");
            let bit = category.bit();
            method_category[j] = bit;
            method_property[j] = Some(property_id);

            match meth.access {
                Access::Public => property.public_methods |= bit,
                Access::Protected => property.protected_methods |= bit,
                Access::Private => property.private_methods |= bit,
            }
            if meth.is_legacy {
                property.legacy_methods |= bit;
            }

            if meth.is_enumerated {
                if let Some(tail) = enum_tail(meth.name, property.name) {
                    property.enum_constant_names.push(tail);
                }
            }
        }

        if !changed {
            tracing::trace!(property = property.name, iterations = iteration, "fixed-point sweep converged");
            break;
        }
    }
}

/// Extract the enum constant name from `SetValueToConstant()`, given the
/// property's already-stripped name. Mirrors the original's direct
/// indexing into `meth->Name[3+m]`/`[4+m]`/`[5+m]` (the `3` accounts for
/// the `Set` prefix the property name was already stripped of).
fn enum_tail<'a>(method_name: &'a str, property_name: &str) -> Option<&'a str> {
    let m = property_name.len();
    let bytes = method_name.as_bytes();
    if bytes.len() > 5 + m
        && bytes[3 + m] == b'T'
        && bytes[4 + m] == b'o'
        && (bytes[5 + m].is_ascii_uppercase() || bytes[5 + m].is_ascii_digit())
    {
        Some(&method_name[5 + m..])
    } else {
        None
    }
}
