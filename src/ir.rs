//! The input contract this crate consumes: one parsed class, expressed as an
//! ordered list of methods with per-argument and return type information.
//!
//! In the toolkit this spec is modeled on, these structures are produced by
//! an upstream header parser and owned by that parser's string arena. This
//! crate treats the parser as an external collaborator (spec §1) and never
//! constructs a `ClassInfo` itself; the `io` module loads one from the JSON
//! projection a caller hands us, which plays the same role here that an
//! in-memory arena handoff would play for an in-process parser.

use serde::{Deserialize, Serialize};

/// Member access, mirroring `parse_access_t` (§6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Public,
    Protected,
    Private,
}

/// The base type a value reduces to, ignoring indirection and qualifiers.
/// Mirrors the toolkit's named base-type codes (§6): `VOID`, `INT`, `BOOL`,
/// `CHAR`, `UNSIGNED_INT`, `UNSIGNED_CHAR`, `FLOAT`, `DOUBLE`, `ID_TYPE`,
/// `VTK_OBJECT` (here: `Object`), `FUNCTION`. `Other` stands in for any base
/// type the synthesizer has no naming convention for (enums, structs, etc.)
/// and which can therefore never seed or join a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseType {
    Void,
    Int,
    Bool,
    Char,
    UnsignedInt,
    UnsignedChar,
    Float,
    Double,
    IdType,
    Object,
    Function,
    Other,
}

/// The indirection a type carries, mirroring `POINTER`, `REF`,
/// `POINTER_REF`, `CONST_POINTER`, `CONST_POINTER_REF`, `POINTER_POINTER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indirection {
    None,
    Pointer,
    Ref,
    PointerRef,
    ConstPointer,
    ConstPointerRef,
    PointerPointer,
}

/// A normalized type code: base type, indirection, and the two qualifiers
/// the matcher strips before comparing (§4.2 step 3). Where the original
/// toolkit packs all of this into one bitmasked `unsigned int` and exposes
/// `base_type`/`indirection`/`is_const`/`has_qualifier` as helper functions
/// over it, this crate keeps the fields apart from the start (§9 design
/// note: "type bitfield → sum types").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeCode {
    pub base: BaseType,
    #[serde(default)]
    pub indirection: Indirection,
    #[serde(default)]
    pub is_const: bool,
    #[serde(default)]
    pub is_static: bool,
}

impl Default for Indirection {
    fn default() -> Self {
        Indirection::None
    }
}

impl TypeCode {
    pub fn void() -> Self {
        TypeCode {
            base: BaseType::Void,
            indirection: Indirection::None,
            is_const: false,
            is_static: false,
        }
    }

    pub fn is_indirect(&self) -> bool {
        self.indirection != Indirection::None
    }

    /// Exact pointer, as opposed to const-pointer or pointer-to-pointer —
    /// this is the distinction the object-identity check in §4.2 step 6
    /// relies on.
    pub fn is_pointer(&self) -> bool {
        self.indirection == Indirection::Pointer
    }

    pub fn has_qualifier(&self) -> bool {
        self.is_const || self.is_static
    }
}

/// One argument, return value, or other typed slot in the method signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueInfo {
    #[serde(rename = "type")]
    pub type_code: TypeCode,
    /// Array count, if the value is a fixed-size array (0 = scalar or
    /// unknown). For return values this is only meaningful when `has_hint`
    /// is set (mirrors `FunctionInfo::HaveHint`/`HintSize`).
    #[serde(default)]
    pub count: u32,
    /// Class name, when `type_code.base == BaseType::Object`.
    #[serde(default)]
    pub class_name: Option<String>,
    /// Whether a size hint (`SizeHint` in the original) was attached —
    /// only meaningful on a return value.
    #[serde(default)]
    pub has_hint: bool,
}

impl ValueInfo {
    pub fn scalar(type_code: TypeCode) -> Self {
        ValueInfo {
            type_code,
            count: 0,
            class_name: None,
            has_hint: false,
        }
    }
}

/// One method on a class, mirroring `FunctionInfo` (§6) restricted to the
/// fields the synthesizer actually reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub access: Access,
    #[serde(default)]
    pub arguments: Vec<ValueInfo>,
    pub return_value: ValueInfo,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_legacy: bool,
    #[serde(default)]
    pub is_operator: bool,
    /// Set when the upstream parser could not determine the size of an
    /// array-typed argument or return value; such methods are unconditionally
    /// unclassifiable (§4.1).
    #[serde(default)]
    pub array_failure: bool,
}

impl FunctionInfo {
    pub fn new(name: impl Into<String>, access: Access, return_value: ValueInfo) -> Self {
        FunctionInfo {
            name: name.into(),
            comment: None,
            access,
            arguments: Vec::new(),
            return_value,
            is_static: false,
            is_legacy: false,
            is_operator: false,
            array_failure: false,
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<ValueInfo>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn legacy(mut self) -> Self {
        self.is_legacy = true;
        self
    }

    pub fn static_method(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// One class and its declared methods, mirroring `ClassInfo` (§6) restricted
/// to what the property synthesizer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    #[serde(default)]
    pub functions: Vec<FunctionInfo>,
}

impl ClassInfo {
    pub fn new(name: impl Into<String>, functions: Vec<FunctionInfo>) -> Self {
        ClassInfo {
            name: name.into(),
            functions,
        }
    }
}
