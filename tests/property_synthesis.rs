//! Integration coverage for the six concrete scenarios a property
//! synthesizer must get right, plus the output-contract invariants.

use propsynth::category::Category;
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

fn scalar(base: BaseType) -> ValueInfo {
    ValueInfo::scalar(TypeCode {
        base,
        indirection: Indirection::None,
        is_const: false,
        is_static: false,
    })
}

fn object_ptr(class_name: &str) -> ValueInfo {
    ValueInfo {
        type_code: TypeCode {
            base: BaseType::Object,
            indirection: Indirection::Pointer,
            is_const: false,
            is_static: false,
        },
        count: 0,
        class_name: Some(class_name.to_string()),
        has_hint: false,
    }
}

#[test]
fn scenario_1_basic_set_get_pair() {
    let class = ClassInfo::new(
        "Sphere",
        vec![
            FunctionInfo::new("SetRadius", Access::Public, void())
                .with_arguments(vec![scalar(BaseType::Double)]),
            FunctionInfo::new("GetRadius", Access::Public, scalar(BaseType::Double)),
        ],
    );

    let result = synthesize(&class);
    assert_eq!(result.properties.len(), 1);
    assert_eq!(result.method_count(), class.functions.len());
    let p = &result.properties[0];
    assert_eq!(p.name, "Radius");
    assert_eq!(p.value_type.base, BaseType::Double);
    assert_eq!(p.count, 0);
    assert_eq!(p.public_methods, Category::BasicSet.bit() | Category::BasicGet.bit());
}

#[test]
fn scenario_2_float_overload_becomes_repeat() {
    let class = ClassInfo::new(
        "Sphere",
        vec![
            FunctionInfo::new("SetRadius", Access::Public, void())
                .with_arguments(vec![scalar(BaseType::Double)]),
            FunctionInfo::new("GetRadius", Access::Public, scalar(BaseType::Double)),
            FunctionInfo::new("SetRadius", Access::Public, void())
                .with_arguments(vec![scalar(BaseType::Float)]),
        ],
    );

    let result = synthesize(&class);
    assert_eq!(result.properties.len(), 1, "the float overload must not seed a second property");
    let p = &result.properties[0];
    assert_eq!(p.value_type.base, BaseType::Double, "double wins over float");

    // The repeat (index 2) reports the same property as the winner (index 0).
    assert_eq!(result.method_property[2], result.method_property[0]);
    assert_eq!(result.method_category[2], result.method_category[0]);
}

#[test]
fn scenario_3_boolean_methods_join_int_property() {
    let class = ClassInfo::new(
        "Widget",
        vec![
            FunctionInfo::new("ColorOn", Access::Public, void()),
            FunctionInfo::new("ColorOff", Access::Public, void()),
            FunctionInfo::new("SetColor", Access::Public, void())
                .with_arguments(vec![scalar(BaseType::Int)]),
            FunctionInfo::new("GetColor", Access::Public, scalar(BaseType::Int)),
        ],
    );

    let result = synthesize(&class);
    assert_eq!(result.properties.len(), 1);
    let p = &result.properties[0];
    assert_eq!(p.name, "Color");
    assert_eq!(p.value_type.base, BaseType::Int);
    assert_eq!(
        p.public_methods,
        Category::BasicSet.bit() | Category::BasicGet.bit() | Category::BoolOn.bit() | Category::BoolOff.bit()
    );
}

#[test]
fn scenario_4_enumerated_methods_collect_constant_names() {
    let class = ClassInfo::new(
        "Widget",
        vec![
            FunctionInfo::new("SetModeToA", Access::Public, void()),
            FunctionInfo::new("SetModeToB", Access::Public, void()),
            FunctionInfo::new("SetMode", Access::Public, void())
                .with_arguments(vec![scalar(BaseType::Int)]),
            FunctionInfo::new("GetMode", Access::Public, scalar(BaseType::Int)),
            FunctionInfo::new(
                "GetModeAsString",
                Access::Public,
                ValueInfo {
                    type_code: TypeCode {
                        base: BaseType::Char,
                        indirection: Indirection::Pointer,
                        is_const: true,
                        is_static: false,
                    },
                    count: 0,
                    class_name: None,
                    has_hint: false,
                },
            ),
        ],
    );

    let result = synthesize(&class);
    assert_eq!(result.properties.len(), 1);
    let p = &result.properties[0];
    assert_eq!(p.name, "Mode");
    assert_eq!(p.enum_constant_names, vec!["A", "B"]);
    assert_eq!(
        p.public_methods,
        Category::BasicSet.bit()
            | Category::BasicGet.bit()
            | Category::EnumSet.bit()
            | Category::StringGet.bit()
    );
}

#[test]
fn scenario_5_indexed_property_with_number_of() {
    let class = ClassInfo::new(
        "PointSet",
        vec![
            FunctionInfo::new("SetPoint", Access::Public, void())
                .with_arguments(vec![scalar(BaseType::Int), scalar(BaseType::Double)]),
            FunctionInfo::new("GetPoint", Access::Public, scalar(BaseType::Double))
                .with_arguments(vec![scalar(BaseType::Int)]),
            FunctionInfo::new("SetNumberOfPoints", Access::Public, void())
                .with_arguments(vec![scalar(BaseType::Int)]),
            FunctionInfo::new("GetNumberOfPoints", Access::Public, scalar(BaseType::Int)),
        ],
    );

    let result = synthesize(&class);
    assert_eq!(result.properties.len(), 1);
    let p = &result.properties[0];
    assert_eq!(p.name, "Point");
    assert_eq!(p.value_type.base, BaseType::Double);
    assert_eq!(
        p.public_methods,
        Category::IndexSet.bit() | Category::IndexGet.bit() | Category::SetNum.bit() | Category::GetNum.bit()
    );
}

#[test]
fn scenario_6_add_remove_removeall_object_property() {
    let class = ClassInfo::new(
        "Assembly",
        vec![
            FunctionInfo::new("AddInput", Access::Public, void())
                .with_arguments(vec![object_ptr("vtkInput")]),
            FunctionInfo::new("RemoveInput", Access::Public, void())
                .with_arguments(vec![object_ptr("vtkInput")]),
            FunctionInfo::new("RemoveAllInputs", Access::Public, void()),
        ],
    );

    let result = synthesize(&class);
    assert_eq!(result.properties.len(), 1);
    let p = &result.properties[0];
    assert_eq!(p.name, "Input");
    assert_eq!(p.class_name, Some("vtkInput"));
    assert_eq!(
        p.public_methods,
        Category::BasicAdd.bit() | Category::BasicRem.bit() | Category::RemoveAll.bit()
    );
}

#[test]
fn seeding_methods_doc_comment_reaches_the_property() {
    let class = ClassInfo::new(
        "Sphere",
        vec![
            FunctionInfo::new("SetRadius", Access::Public, void())
                .with_arguments(vec![scalar(BaseType::Double)])
                .with_comment("Get/Set the sphere's radius."),
            FunctionInfo::new("GetRadius", Access::Public, scalar(BaseType::Double)),
        ],
    );

    let result = synthesize(&class);
    assert_eq!(result.properties.len(), 1);
    assert_eq!(result.properties[0].comment, Some("Get/Set the sphere's radius."));
}

#[test]
fn unclassifiable_method_is_dropped_not_errored() {
    // An operator overload never carries a property; it must simply be
    // excluded, never surfaced as an error (spec.md §7).
    let mut op = FunctionInfo::new("operator=", Access::Public, void())
        .with_arguments(vec![scalar(BaseType::Int)]);
    op.is_operator = true;

    let class = ClassInfo::new("Widget", vec![op]);
    let result = synthesize(&class);

    assert_eq!(result.properties.len(), 0);
    assert_eq!(result.method_category[0], 0);
    assert_eq!(result.method_property[0], None);
}
