//! The extractor (§4.1): reduces a `FunctionInfo` to the handful of facts
//! the matcher and builder actually need, or rejects it outright.
//!
//! This is a direct port of `getMethodAttributes`. The shape tests below
//! ("indexed method", "multi-value method", "boolean/enumerated/RemoveAll
//! nullary method") run in the same order the original checks them, since
//! a method can satisfy more than one shape and the first match wins.

use crate::ir::{Access, BaseType, FunctionInfo, Indirection, TypeCode};

/// Facts about one method, borrowed from its `FunctionInfo`. Only ever
/// constructed by [`extract`]; a `None` result means the method's
/// signature was too irregular to carry a property (§4.1 edge cases).
#[derive(Debug, Clone, Copy)]
pub struct MethodFacts<'a> {
    pub name: &'a str,
    pub access: Access,
    pub is_static: bool,
    pub is_legacy: bool,
    pub value_type: TypeCode,
    pub count: u32,
    pub class_name: Option<&'a str>,
    pub comment: Option<&'a str>,
    pub is_hinted: bool,
    pub is_indexed: bool,
    pub is_multi_value: bool,
    pub is_boolean: bool,
    pub is_enumerated: bool,
}

fn is_void(t: &TypeCode) -> bool {
    t.base == BaseType::Void && !t.is_indirect()
}

/// Port of `getMethodAttributes`. Returns `None` for anything the original
/// would reject outright (unnamed, array-size failure, operator overload)
/// or for which none of the six recognized shapes apply.
pub fn extract(func: &FunctionInfo) -> Option<MethodFacts<'_>> {
    if func.array_failure || func.is_operator {
        return None;
    }

    let name = func.name.as_str();
    let args = &func.arguments;
    let ret = &func.return_value;

    // Indexed detection: first argument is a non-indirect int/idtype.
    let mut indexed = false;
    if let Some(first) = args.first() {
        let first_is_index = matches!(first.type_code.base, BaseType::Int | BaseType::IdType)
            && !first.type_code.is_indirect();
        if first_is_index {
            // "void SetValue(int i, type value)"
            if is_void(&ret.type_code) && args.len() == 2 {
                indexed = true;
                if !crate::predicates::is_set_number_of(name) {
                    // make sure this isn't a multi-value int method
                    let tmp = &first.type_code;
                    let all_same = args.iter().all(|a| &a.type_code == tmp);
                    indexed = !all_same;
                }
            }
            // "type GetValue(int i)"
            if !is_void(&ret.type_code) && args.len() == 1 {
                indexed = true;
            }
        }
    }
    let indexed_n = if indexed { 1 } else { 0 };

    // "type GetValue()" or "type GetValue(i)"
    if !is_void(&ret.type_code) && args.len() == indexed_n {
        if crate::predicates::is_get(name) {
            return Some(MethodFacts {
                name,
                access: func.access,
                is_static: func.is_static,
                is_legacy: func.is_legacy,
                value_type: ret.type_code,
                count: if ret.has_hint { ret.count } else { 0 },
                class_name: ret.class_name.as_deref(),
                comment: func.comment.as_deref(),
                is_hinted: ret.has_hint,
                is_indexed: indexed,
                is_multi_value: false,
                is_boolean: false,
                is_enumerated: false,
            });
        }
    }

    // "void SetValue(type)" / "void SetValue(int, type)" / "void GetValue(type*)"
    // / "void AddValue(Object*)" / "void RemoveValue(Object*)"
    if is_void(&ret.type_code) && args.len() == 1 + indexed_n {
        let slot = &args[indexed_n];

        if crate::predicates::is_set(name) {
            return Some(MethodFacts {
                name,
                access: func.access,
                is_static: func.is_static,
                is_legacy: func.is_legacy,
                value_type: slot.type_code,
                count: slot.count,
                class_name: slot.class_name.as_deref(),
                comment: func.comment.as_deref(),
                is_hinted: false,
                is_indexed: indexed,
                is_multi_value: false,
                is_boolean: false,
                is_enumerated: false,
            });
        }

        if crate::predicates::is_get(name)
            && slot.count > 0
            && slot.type_code.is_indirect()
            && !slot.type_code.is_const
        {
            return Some(MethodFacts {
                name,
                access: func.access,
                is_static: func.is_static,
                is_legacy: func.is_legacy,
                value_type: slot.type_code,
                count: slot.count,
                class_name: slot.class_name.as_deref(),
                comment: func.comment.as_deref(),
                is_hinted: false,
                is_indexed: indexed,
                is_multi_value: false,
                is_boolean: false,
                is_enumerated: false,
            });
        }

        if (crate::predicates::is_add(name) || crate::predicates::is_remove(name))
            && slot.type_code.base == BaseType::Object
            && slot.type_code.indirection == Indirection::Pointer
        {
            return Some(MethodFacts {
                name,
                access: func.access,
                is_static: func.is_static,
                is_legacy: func.is_legacy,
                value_type: slot.type_code,
                count: slot.count,
                class_name: slot.class_name.as_deref(),
                comment: func.comment.as_deref(),
                is_hinted: false,
                is_indexed: indexed,
                is_multi_value: false,
                is_boolean: false,
                is_enumerated: false,
            });
        }
    }

    // Multiple arguments of the same type, not indexed.
    if args.len() > 1 && !indexed {
        let tmp = &args[0].type_code;
        let all_same = args.iter().all(|a| &a.type_code == tmp);
        if all_same {
            let n = args.len() as u32;

            // "void SetValue(type x, type y, type z)"
            if crate::predicates::is_set(name)
                && !tmp.is_indirect()
                && is_void(&ret.type_code)
            {
                return Some(MethodFacts {
                    name,
                    access: func.access,
                    is_static: func.is_static,
                    is_legacy: func.is_legacy,
                    value_type: *tmp,
                    count: n,
                    class_name: None,
                    comment: func.comment.as_deref(),
                    is_hinted: false,
                    is_indexed: false,
                    is_multi_value: true,
                    is_boolean: false,
                    is_enumerated: false,
                });
            }

            // "void GetValue(type& x, type& y, type& z)"
            if crate::predicates::is_get(name)
                && tmp.indirection == Indirection::Ref
                && !tmp.is_const
                && is_void(&ret.type_code)
            {
                return Some(MethodFacts {
                    name,
                    access: func.access,
                    is_static: func.is_static,
                    is_legacy: func.is_legacy,
                    value_type: *tmp,
                    count: n,
                    class_name: None,
                    comment: func.comment.as_deref(),
                    is_hinted: false,
                    is_indexed: false,
                    is_multi_value: true,
                    is_boolean: false,
                    is_enumerated: false,
                });
            }

            // "void AddValue(type x, type y, type z)" / int or idtype return
            if crate::predicates::is_add(name)
                && !tmp.is_indirect()
                && matches!(ret.type_code.base, BaseType::Void | BaseType::Int | BaseType::IdType)
                && !ret.type_code.is_indirect()
            {
                return Some(MethodFacts {
                    name,
                    access: func.access,
                    is_static: func.is_static,
                    is_legacy: func.is_legacy,
                    value_type: *tmp,
                    count: n,
                    class_name: None,
                    comment: func.comment.as_deref(),
                    is_hinted: false,
                    is_indexed: false,
                    is_multi_value: true,
                    is_boolean: false,
                    is_enumerated: false,
                });
            }
        }
    }

    // void return, no arguments: On/Off, SetValueToEnum, RemoveAllValues
    if is_void(&ret.type_code) && args.is_empty() {
        if crate::predicates::is_boolean(name) {
            return Some(MethodFacts {
                name,
                access: func.access,
                is_static: func.is_static,
                is_legacy: func.is_legacy,
                value_type: TypeCode::void(),
                count: 0,
                class_name: None,
                comment: func.comment.as_deref(),
                is_hinted: false,
                is_indexed: indexed,
                is_multi_value: false,
                is_boolean: true,
                is_enumerated: false,
            });
        }
        if crate::predicates::is_enumerated(name) {
            return Some(MethodFacts {
                name,
                access: func.access,
                is_static: func.is_static,
                is_legacy: func.is_legacy,
                value_type: TypeCode::void(),
                count: 0,
                class_name: None,
                comment: func.comment.as_deref(),
                is_hinted: false,
                is_indexed: indexed,
                is_multi_value: false,
                is_boolean: false,
                is_enumerated: true,
            });
        }
        if crate::predicates::is_remove_all(name) {
            return Some(MethodFacts {
                name,
                access: func.access,
                is_static: func.is_static,
                is_legacy: func.is_legacy,
                value_type: TypeCode::void(),
                count: 0,
                class_name: None,
                comment: func.comment.as_deref(),
                is_hinted: false,
                is_indexed: indexed,
                is_multi_value: false,
                is_boolean: false,
                is_enumerated: false,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::ValueInfo;

    fn scalar(base: BaseType) -> ValueInfo {
        ValueInfo::scalar(TypeCode {
            base,
            indirection: Indirection::None,
            is_const: false,
            is_static: false,
        })
    }

    #[test]
    fn basic_getter_extracted() {
        let f = FunctionInfo::new("GetRadius", Access::Public, scalar(BaseType::Double));
        let facts = extract(&f).expect("getter should extract");
        assert_eq!(facts.value_type.base, BaseType::Double);
        assert_eq!(facts.count, 0);
        assert!(!facts.is_indexed);
    }

    #[test]
    fn basic_setter_extracted() {
        let f = FunctionInfo::new("SetRadius", Access::Public, scalar(BaseType::Void))
            .with_arguments(vec![scalar(BaseType::Double)]);
        let facts = extract(&f).expect("setter should extract");
        assert_eq!(facts.value_type.base, BaseType::Double);
    }

    #[test]
    fn operator_and_array_failure_rejected() {
        let mut f = FunctionInfo::new("operator=", Access::Public, scalar(BaseType::Void));
        f.is_operator = true;
        assert!(extract(&f).is_none());

        let mut f2 = FunctionInfo::new("GetValues", Access::Public, scalar(BaseType::Double));
        f2.array_failure = true;
        assert!(extract(&f2).is_none());
    }

    #[test]
    fn indexed_set_detected() {
        let f = FunctionInfo::new("SetValue", Access::Public, scalar(BaseType::Void))
            .with_arguments(vec![scalar(BaseType::Int), scalar(BaseType::Double)]);
        let facts = extract(&f).expect("indexed setter should extract");
        assert!(facts.is_indexed);
        assert_eq!(facts.value_type.base, BaseType::Double);
    }

    #[test]
    fn multi_value_setter_detected() {
        let f = FunctionInfo::new("SetColor", Access::Public, scalar(BaseType::Void))
            .with_arguments(vec![
                scalar(BaseType::Double),
                scalar(BaseType::Double),
                scalar(BaseType::Double),
            ]);
        let facts = extract(&f).expect("multi-value setter should extract");
        assert!(facts.is_multi_value);
        assert_eq!(facts.count, 3);
    }

    #[test]
    fn boolean_and_remove_all_nullary() {
        let on = FunctionInfo::new("DebugOn", Access::Public, scalar(BaseType::Void));
        let facts = extract(&on).expect("On method should extract");
        assert!(facts.is_boolean);

        let rem = FunctionInfo::new("RemoveAllItems", Access::Public, scalar(BaseType::Void));
        let facts = extract(&rem).expect("RemoveAll method should extract");
        assert!(!facts.is_boolean && !facts.is_enumerated);
    }
}
