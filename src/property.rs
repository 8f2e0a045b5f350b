//! Property records (§3): the output of the builder, one per logical
//! get/set/add property discovered on a class.

use crate::facts::MethodFacts;
use crate::ir::{BaseType, Indirection, TypeCode};

/// A logical property's normalized type: its base type plus whatever
/// indirection the seeding method implied (§4.3's `initializePropertyInfo`
/// port). Unlike `ir::TypeCode`, a property's indirection is never `Ref` —
/// references collapse to pointer or to nothing during seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyType {
    pub base: BaseType,
    pub indirection: Indirection,
}

/// One property synthesized from a cluster of matching methods.
#[derive(Debug, Clone)]
pub struct Property<'a> {
    pub name: &'a str,
    pub value_type: PropertyType,
    pub class_name: Option<&'a str>,
    pub count: u32,
    pub is_static: bool,
    pub comment: Option<&'a str>,
    pub enum_constant_names: Vec<&'a str>,
    pub public_methods: u32,
    pub protected_methods: u32,
    pub private_methods: u32,
    pub legacy_methods: u32,
}

impl<'a> Property<'a> {
    pub fn all_methods(&self) -> u32 {
        self.public_methods | self.protected_methods | self.private_methods
    }
}

/// Seed a new property from the method that discovered it (§4.3, port of
/// `initializePropertyInfo`). `property_name` is the method name with its
/// recognized prefix stripped; `method_bit` is the category bit the seeding
/// method itself earns (computed with `short_form = false`, i.e. full
/// form — the seed is never a suffix specialization like `BOOL_ON`).
pub fn seed<'a>(
    meth: &MethodFacts<'a>,
    property_name: &'a str,
    method_bit: u32,
) -> Property<'a> {
    // ValueOn()/Off() and SetValueToEnum() seed an int-typed property.
    let base = if meth.is_boolean || meth.is_enumerated {
        BaseType::Int
    } else {
        meth.value_type.base
    };

    let ind = meth.value_type.indirection;
    let indirection = if !meth.is_multi_value
        && matches!(ind, Indirection::Pointer | Indirection::PointerRef)
    {
        Indirection::Pointer
    } else if meth.is_multi_value && matches!(ind, Indirection::None | Indirection::Ref) {
        Indirection::Pointer
    } else if !meth.is_multi_value
        && matches!(ind, Indirection::ConstPointer | Indirection::ConstPointerRef)
    {
        Indirection::ConstPointer
    } else if ind == Indirection::PointerPointer || (ind == Indirection::Pointer && meth.is_multi_value)
    {
        Indirection::PointerPointer
    } else {
        Indirection::None
    };

    let mut property = Property {
        name: property_name,
        value_type: PropertyType { base, indirection },
        class_name: meth.class_name,
        count: meth.count,
        is_static: meth.is_static,
        comment: meth.comment,
        enum_constant_names: Vec::new(),
        public_methods: 0,
        protected_methods: 0,
        private_methods: 0,
        legacy_methods: 0,
    };

    match meth.access {
        crate::ir::Access::Public => property.public_methods = method_bit,
        crate::ir::Access::Protected => property.protected_methods = method_bit,
        crate::ir::Access::Private => property.private_methods = method_bit,
    }
    if meth.is_legacy {
        property.legacy_methods = method_bit;
    }

    property
}

/// All properties discovered on one class, alongside per-method bookkeeping
/// (§2.2 supplemented feature: method-count bookkeeping survives as
/// `method_count`/`methods().len()` rather than a separate counter field).
pub struct ClassProperties<'a> {
    pub class_name: &'a str,
    pub properties: Vec<Property<'a>>,
    /// Category bit assigned to each input method, `0` if none (mirrors
    /// `MethodTypes`). Index-aligned with the class's `functions`.
    pub method_category: Vec<u32>,
    /// Index into `properties` that each method joined, `None` if none
    /// (mirrors `MethodProperties`).
    pub method_property: Vec<Option<usize>>,
}

impl<'a> ClassProperties<'a> {
    pub fn method_count(&self) -> usize {
        self.method_category.len()
    }
}
