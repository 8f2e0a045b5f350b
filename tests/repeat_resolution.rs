//! Pins the repeat-resolution tie-break ordering (§8 *Repeat dominance*):
//! double beats float, a larger fixed-size array beats a smaller one at
//! the same base type, and a non-legacy method beats a legacy one.

use pretty_assertions::assert_eq;
use propsynth::ir::{Access, BaseType, ClassInfo, FunctionInfo, Indirection, TypeCode, ValueInfo};
use propsynth::synthesize;

fn void() -> ValueInfo {
    ValueInfo::scalar(TypeCode {
        base: BaseType::Void,
        indirection: Indirection::None,
        is_const: false,
        is_static: false,
    })
}

fn array_arg(base: BaseType, count: u32) -> ValueInfo {
    ValueInfo {
        type_code: TypeCode {
            base,
            indirection: Indirection::Pointer,
            is_const: false,
            is_static: false,
        },
        count,
        class_name: None,
        has_hint: false,
    }
}

#[test]
fn double_overload_wins_over_float() {
    let class = ClassInfo::new(
        "Widget",
        vec![
            FunctionInfo::new("SetPoint", Access::Public, void())
                .with_arguments(vec![array_arg(BaseType::Float, 3)]),
            FunctionInfo::new("SetPoint", Access::Public, void())
                .with_arguments(vec![array_arg(BaseType::Double, 3)]),
        ],
    );

    let result = synthesize(&class);
    assert_eq!(result.properties.len(), 1);
    assert_eq!(result.properties[0].value_type.base, BaseType::Double);
    assert_eq!(result.method_property[0], result.method_property[1]);
}

#[test]
fn larger_array_wins_at_equal_base_type() {
    let class = ClassInfo::new(
        "Widget",
        vec![
            FunctionInfo::new("SetValues", Access::Public, void())
                .with_arguments(vec![array_arg(BaseType::Int, 3)]),
            FunctionInfo::new("SetValues", Access::Public, void())
                .with_arguments(vec![array_arg(BaseType::Int, 6)]),
        ],
    );

    let result = synthesize(&class);
    assert_eq!(result.properties.len(), 1);
    assert_eq!(result.properties[0].count, 6);
}

#[test]
fn non_legacy_wins_over_legacy() {
    let class = ClassInfo::new(
        "Widget",
        vec![
            FunctionInfo::new("SetMode", Access::Public, void())
                .with_arguments(vec![ValueInfo::scalar(TypeCode {
                    base: BaseType::Int,
                    indirection: Indirection::None,
                    is_const: false,
                    is_static: false,
                })])
                .legacy(),
            FunctionInfo::new("SetMode", Access::Public, void()).with_arguments(vec![
                ValueInfo::scalar(TypeCode {
                    base: BaseType::Int,
                    indirection: Indirection::None,
                    is_const: false,
                    is_static: false,
                }),
            ]),
        ],
    );

    let result = synthesize(&class);
    assert_eq!(result.properties.len(), 1);
    // The surviving (non-legacy) method is the one that actually seeded
    // the property, so neither member of the pair should carry the
    // legacy-methods bit.
    assert_eq!(result.properties[0].legacy_methods & result.properties[0].public_methods, 0);
}
