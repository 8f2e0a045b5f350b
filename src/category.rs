//! The category bit vocabulary (§6) and the dispatch that assigns one to a
//! matched method (§4.4 "category tagger").

use crate::facts::MethodFacts;
use crate::predicates;

/// A method's role relative to the property it joined. Each variant is a
/// single bit so a `Property`'s `public_methods`/`protected_methods`/
/// `private_methods`/`legacy_methods` fields can OR several of them
/// together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Category {
    BasicGet = 1 << 0,
    BasicSet = 1 << 1,
    MultiGet = 1 << 2,
    MultiSet = 1 << 3,
    IndexGet = 1 << 4,
    IndexSet = 1 << 5,
    NthGet = 1 << 6,
    NthSet = 1 << 7,
    RhsGet = 1 << 8,
    IndexRhsGet = 1 << 9,
    NthRhsGet = 1 << 10,
    StringGet = 1 << 11,
    EnumSet = 1 << 12,
    BoolOn = 1 << 13,
    BoolOff = 1 << 14,
    MinGet = 1 << 15,
    MaxGet = 1 << 16,
    GetNum = 1 << 17,
    SetNum = 1 << 18,
    BasicAdd = 1 << 19,
    MultiAdd = 1 << 20,
    IndexAdd = 1 << 21,
    BasicRem = 1 << 22,
    IndexRem = 1 << 23,
    RemoveAll = 1 << 24,
}

impl Category {
    pub fn bit(self) -> u32 {
        self as u32
    }

    /// Stable textual tag (§6). Unknown bit patterns map to the empty
    /// string there; here that's modeled by `from_bit` returning `None`.
    pub fn as_tag(self) -> &'static str {
        match self {
            Category::BasicGet => "BASIC_GET",
            Category::BasicSet => "BASIC_SET",
            Category::MultiGet => "MULTI_GET",
            Category::MultiSet => "MULTI_SET",
            Category::IndexGet => "INDEX_GET",
            Category::IndexSet => "INDEX_SET",
            Category::NthGet => "NTH_GET",
            Category::NthSet => "NTH_SET",
            Category::RhsGet => "RHS_GET",
            Category::IndexRhsGet => "INDEX_RHS_GET",
            Category::NthRhsGet => "NTH_RHS_GET",
            Category::StringGet => "STRING_GET",
            Category::EnumSet => "ENUM_SET",
            Category::BoolOn => "BOOL_ON",
            Category::BoolOff => "BOOL_OFF",
            Category::MinGet => "MIN_GET",
            Category::MaxGet => "MAX_GET",
            Category::GetNum => "GET_NUM",
            Category::SetNum => "SET_NUM",
            Category::BasicAdd => "BASIC_ADD",
            Category::MultiAdd => "MULTI_ADD",
            Category::IndexAdd => "INDEX_ADD",
            Category::BasicRem => "BASIC_REM",
            Category::IndexRem => "INDEX_REM",
            Category::RemoveAll => "REMOVEALL",
        }
    }

    /// Recover a `Category` from a raw bit value, as stored in
    /// `method_category`. Returns `None` for `0` (no category) or any
    /// value that isn't one of the known bits; tag lookup for such values
    /// is the empty string per §6.
    pub fn from_bit(bit: u32) -> Option<Category> {
        use Category::*;
        const ALL: [Category; 25] = [
            BasicGet, BasicSet, MultiGet, MultiSet, IndexGet, IndexSet, NthGet, NthSet, RhsGet,
            IndexRhsGet, NthRhsGet, StringGet, EnumSet, BoolOn, BoolOff, MinGet, MaxGet, GetNum,
            SetNum, BasicAdd, MultiAdd, IndexAdd, BasicRem, IndexRem, RemoveAll,
        ];
        ALL.into_iter().find(|c| c.bit() == bit)
    }
}

/// Assign a category bit to a matched method.
///
/// `short_form` respects suffix specializations (`BOOL_ON`/`BOOL_OFF`,
/// `ENUM_SET`, `STRING_GET`, `MIN_GET`, `MAX_GET`, `GET_NUM`, `SET_NUM`);
/// when `false` ("full form") these collapse to the underlying
/// BASIC/MULTI/INDEX/NTH variant. `findAllMatches` passes `!long_match`;
/// the seed method of a property always uses full form (§4.4).
///
/// Dispatch order matters and is *not* the same as checking `meth`'s flags
/// in isolation: a name that satisfies `is_set` is classified as a setter
/// even if, for some other reason, its facts also carry `is_boolean` — the
/// name predicate for Set is tried before the boolean flag, exactly
/// mirroring the original `methodCategory` dispatch.
pub fn categorize(meth: &MethodFacts, short_form: bool) -> Option<Category> {
    let name = meth.name;

    if predicates::is_set(name) {
        return Some(if meth.is_enumerated {
            Category::EnumSet
        } else if meth.is_indexed {
            if predicates::is_set_nth(name) {
                Category::NthSet
            } else {
                Category::IndexSet
            }
        } else if meth.is_multi_value {
            Category::MultiSet
        } else if short_form && predicates::is_set_number_of(name) {
            Category::SetNum
        } else {
            Category::BasicSet
        });
    }

    if meth.is_boolean {
        return Some(if name.ends_with('n') {
            Category::BoolOn
        } else {
            Category::BoolOff
        });
    }

    if predicates::is_get(name) {
        return Some(if short_form && predicates::is_get_min_value(name) {
            Category::MinGet
        } else if short_form && predicates::is_get_max_value(name) {
            Category::MaxGet
        } else if short_form && predicates::is_as_string(name) {
            Category::StringGet
        } else if meth.is_indexed && meth.count > 0 && !meth.is_hinted {
            if predicates::is_get_nth(name) {
                Category::NthRhsGet
            } else {
                Category::IndexRhsGet
            }
        } else if meth.is_indexed {
            if predicates::is_get_nth(name) {
                Category::NthGet
            } else {
                Category::IndexGet
            }
        } else if meth.is_multi_value {
            Category::MultiGet
        } else if meth.count > 0 && !meth.is_hinted {
            Category::RhsGet
        } else if short_form && predicates::is_get_number_of(name) {
            Category::GetNum
        } else {
            Category::BasicGet
        });
    }

    if predicates::is_remove(name) {
        return Some(if predicates::is_remove_all(name) {
            Category::RemoveAll
        } else if meth.is_indexed {
            Category::IndexRem
        } else {
            Category::BasicRem
        });
    }

    if predicates::is_add(name) {
        return Some(if meth.is_indexed {
            Category::IndexAdd
        } else if meth.is_multi_value {
            Category::MultiAdd
        } else {
            Category::BasicAdd
        });
    }

    None
}
