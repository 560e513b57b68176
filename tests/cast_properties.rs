//! Cast Property Tests
//!
//! End-to-end behavior of the cast engine through the public API:
//! - Output follows schema declaration order
//! - Defaults, overrides and omission of optional fields
//! - Required and nested-schema fields are fatal when unresolved
//! - Paths, alternation, arrays and transforms
//! - Named shapes loaded from disk

use schemacast::cast::{self, CastError, CastOptions, Caster};
use schemacast::schema::{CastType, FieldSpec, KeySpec, Primitive, Schema, ShapeRegistry};
use schemacast::value::{Key, Record, Value};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn input(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn cast_ok(json: serde_json::Value, schema: &Schema) -> Record {
    cast::cast(&input(json), schema, &CastOptions::default()).unwrap()
}

fn double(value: Value) -> Value {
    match value {
        Value::Int(i) => Value::Int(i * 2),
        other => other,
    }
}

// =============================================================================
// Basic Casting
// =============================================================================

#[test]
fn test_integer_field() {
    let schema = Schema::new().field("id", FieldSpec::integer());
    assert_eq!(cast_ok(json!({"id": 1}), &schema), Record::from([("id", Value::Int(1))]));
}

#[test]
fn test_boolean_with_default() {
    let schema = Schema::new().field("archived", FieldSpec::boolean().default(false));

    assert_eq!(
        cast_ok(json!({"archived": "true"}), &schema),
        Record::from([("archived", Value::Bool(true))])
    );
    assert_eq!(
        cast_ok(json!({}), &schema),
        Record::from([("archived", Value::Bool(false))])
    );
}

#[test]
fn test_extra_input_keys_ignored() {
    let schema = Schema::new().field("id", FieldSpec::integer());
    let out = cast_ok(json!({"id": 1, "password": "hunter2"}), &schema);
    assert_eq!(out.keys().collect::<Vec<_>>(), vec!["id"]);
}

#[test]
fn test_output_follows_declaration_order() {
    let schema = Schema::new()
        .field("zeta", FieldSpec::integer())
        .field("alpha", FieldSpec::integer())
        .field("mid", FieldSpec::integer());

    let out = cast_ok(json!({"alpha": 1, "mid": 2, "zeta": 3}), &schema);
    assert_eq!(out.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_sequence_of_pairs_input() {
    let schema = Schema::new().field("id", FieldSpec::integer());
    let pairs = Value::Record(Record::from([
        ("id", Value::from("7")),
        ("id", Value::from("8")),
    ]));

    // First matching entry wins
    let out = cast::cast(&pairs, &schema, &CastOptions::default()).unwrap();
    assert_eq!(out.get("id"), Some(&Value::Int(7)));
}

#[test]
fn test_symbol_keys_match_string_fields() {
    let schema = Schema::new().field("id", FieldSpec::integer());
    let mut pairs = Record::new();
    pairs.push(Key::symbol("id"), Value::Int(3));

    let out = cast::cast(&Value::Record(pairs), &schema, &CastOptions::default()).unwrap();
    assert_eq!(out.get("id"), Some(&Value::Int(3)));
}

#[test]
fn test_non_container_input_rejected() {
    let schema = Schema::new().field("id", FieldSpec::integer());
    let err = cast::cast(&Value::Int(1), &schema, &CastOptions::default()).unwrap_err();
    assert_eq!(err.code(), "CAST_INVALID_VALUE");
}

// =============================================================================
// Defaults, Overrides and Omission
// =============================================================================

/// An empty input yields exactly the fields that declare a default.
#[test]
fn test_empty_input_yields_only_defaults() {
    let schema = Schema::new()
        .field("a", FieldSpec::integer())
        .field("b", FieldSpec::string().default("none"))
        .field("c", FieldSpec::array(Primitive::Integer))
        .field("d", FieldSpec::boolean().default(true))
        .field("e", FieldSpec::new(CastType::named("unregistered")));

    let out = cast_ok(json!({}), &schema);
    assert_eq!(
        out,
        Record::from([("b", Value::from("none")), ("d", Value::Bool(true))])
    );
}

#[test]
fn test_optional_invalid_field_omitted() {
    let schema = Schema::new()
        .field("id", FieldSpec::integer())
        .field("name", FieldSpec::string());

    let out = cast_ok(json!({"id": "abc", "name": "ada"}), &schema);
    assert_eq!(out, Record::from([("name", Value::from("ada"))]));
}

#[test]
fn test_override_wins_over_failed_cast() {
    let schema = Schema::new().field("id", FieldSpec::integer());
    let options = CastOptions::with_merge(Record::from([("id", Value::Int(2))]));

    let out = cast::cast(&input(json!({"id": "not-a-number"})), &schema, &options).unwrap();
    assert_eq!(out, Record::from([("id", Value::Int(2))]));
}

#[test]
fn test_override_beats_default() {
    let schema = Schema::new().field("id", FieldSpec::integer().default(9));
    let options = CastOptions::with_merge(Record::from([("id", Value::Int(2))]));

    let out = cast::cast(&input(json!({})), &schema, &options).unwrap();
    assert_eq!(out.get("id"), Some(&Value::Int(2)));
}

#[test]
fn test_override_is_not_cast() {
    // Override values are final, even when they would not pass the field's type
    let schema = Schema::new().field("id", FieldSpec::integer());
    let options = CastOptions::with_merge(Record::from([("id", Value::from("raw"))]));

    let out = cast::cast(&input(json!({})), &schema, &options).unwrap();
    assert_eq!(out.get("id"), Some(&Value::from("raw")));
}

#[test]
fn test_successful_cast_ignores_override() {
    let schema = Schema::new().field("id", FieldSpec::integer());
    let options = CastOptions::with_merge(Record::from([("id", Value::Int(2))]));

    let out = cast::cast(&input(json!({"id": 1})), &schema, &options).unwrap();
    assert_eq!(out.get("id"), Some(&Value::Int(1)));
}

#[test]
fn test_fallbacks_pass_through_transform() {
    let schema = Schema::new()
        .field("a", FieldSpec::integer().default(5).transform(double))
        .field("b", FieldSpec::integer().transform(double));
    let options = CastOptions::with_merge(Record::from([("b", Value::Int(10))]));

    let out = cast::cast(&input(json!({})), &schema, &options).unwrap();
    assert_eq!(out, Record::from([("a", Value::Int(10)), ("b", Value::Int(20))]));
}

// =============================================================================
// Fatal Failures
// =============================================================================

#[test]
fn test_required_field_missing_names_field() {
    let schema = Schema::new().field("id", FieldSpec::integer().required());

    let err = cast::cast(&input(json!({})), &schema, &CastOptions::default()).unwrap_err();
    assert_eq!(err.code(), "CAST_REQUIRED_FIELD_MISSING");
    assert_eq!(err.field(), Some("id"));

    let message = err.to_string();
    assert!(message.starts_with("failed to cast key `id`"));
    assert!(message.ends_with("and no default value provided."));
}

#[test]
fn test_required_with_default_succeeds() {
    let schema = Schema::new().field("id", FieldSpec::integer().required().default(0));
    assert_eq!(cast_ok(json!({}), &schema).get("id"), Some(&Value::Int(0)));
}

/// Nested-schema fields are mandatory even when not marked required,
/// while primitive fields are optional by default.
#[test]
fn test_nested_schema_field_is_always_mandatory() {
    let address = Schema::new().field("city", FieldSpec::string());
    let schema = Schema::new()
        .field("nickname", FieldSpec::string())
        .field("address", FieldSpec::nested(address));

    let err = cast::cast(&input(json!({})), &schema, &CastOptions::default()).unwrap_err();
    assert_eq!(err.code(), "CAST_REQUIRED_FIELD_MISSING");
    assert_eq!(err.field(), Some("address"));
    assert_eq!(err.root_cause().code(), "CAST_KEY_NOT_FOUND");
}

#[test]
fn test_failure_aborts_whole_call() {
    let schema = Schema::new()
        .field("ok", FieldSpec::integer())
        .field("bad", FieldSpec::integer().required());

    let result = cast::cast(&input(json!({"ok": 1})), &schema, &CastOptions::default());
    assert!(result.is_err());
}

#[test]
fn test_nested_failure_wrapped_with_field_name() {
    let inner = Schema::new().field("zip", FieldSpec::integer().required());
    let schema = Schema::new().field("address", FieldSpec::nested(inner));

    let err = cast::cast(
        &input(json!({"address": {"zip": "none"}})),
        &schema,
        &CastOptions::default(),
    )
    .unwrap_err();

    assert_eq!(err.field(), Some("address"));
    let nested = err.cause().unwrap();
    assert_eq!(nested.code(), "CAST_NESTED_FAILURE");
    assert_eq!(nested.field(), Some("address"));
    assert_eq!(nested.cause().and_then(CastError::field), Some("zip"));
}

#[test]
fn test_unknown_named_type() {
    let schema = Schema::new().field("x", FieldSpec::new(CastType::named("blob")).required());
    let err = cast::cast(&input(json!({"x": 1})), &schema, &CastOptions::default()).unwrap_err();
    assert_eq!(err.root_cause(), &CastError::UnknownCastType("blob".into()));
}

// =============================================================================
// Paths, Alternation, Arrays
// =============================================================================

#[test]
fn test_path_with_transform() {
    let schema = Schema::new().field(
        "id",
        FieldSpec::integer()
            .from(KeySpec::path(["a", "b", "c"]))
            .transform(double),
    );
    assert_eq!(
        cast_ok(json!({"a": {"b": {"c": 100}}}), &schema),
        Record::from([("id", Value::Int(200))])
    );
}

#[test]
fn test_path_through_leaf_fails() {
    let schema = Schema::new().field("id", FieldSpec::integer().from(KeySpec::path(["a", "b"])));
    assert!(cast_ok(json!({"a": 5}), &schema).is_empty());
}

#[test]
fn test_alternation_first_success_wins() {
    let schema = Schema::new().field(
        "id",
        FieldSpec::integer().from(KeySpec::any([
            KeySpec::from("user_id"),
            KeySpec::path(["user", "id"]),
            KeySpec::from("id"),
        ])),
    );

    // `user_id` resolves but fails to cast, so the path candidate is used
    let out = cast_ok(json!({"user_id": "x", "user": {"id": 4}, "id": 5}), &schema);
    assert_eq!(out.get("id"), Some(&Value::Int(4)));
}

/// Exhausted alternatives report one generic error, not each candidate's.
#[test]
fn test_alternation_error_is_generic() {
    let schema = Schema::new().field(
        "id",
        FieldSpec::integer()
            .from(KeySpec::any([KeySpec::from("a"), KeySpec::from("b")]))
            .required(),
    );

    let err = cast::cast(&input(json!({"a": "x"})), &schema, &CastOptions::default()).unwrap_err();
    assert_eq!(err.root_cause(), &CastError::KeyNotFound("a | b".into()));
}

/// Faults inside a caller-supplied transform reach the caller.
#[test]
#[should_panic(expected = "transform rejected value")]
fn test_transform_panic_propagates() {
    let schema = Schema::new().field(
        "id",
        FieldSpec::integer().transform(|_| panic!("transform rejected value")),
    );
    let _ = cast::cast(&input(json!({"id": 1})), &schema, &CastOptions::default());
}

#[test]
fn test_array_order_preserved() {
    let schema = Schema::new().field("a", FieldSpec::array(Primitive::Integer));
    assert_eq!(
        cast_ok(json!({"a": [1, 2, 3, 4]}), &schema),
        Record::from([(
            "a",
            Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)])
        )])
    );
}

#[test]
fn test_array_transform_applies_per_element() {
    let schema = Schema::new().field("a", FieldSpec::array(Primitive::Integer).transform(double));
    assert_eq!(
        cast_ok(json!({"a": ["1", 2]}), &schema).get("a"),
        Some(&Value::Array(vec![Value::Int(2), Value::Int(4)]))
    );
}

#[test]
fn test_array_element_failure_aborts() {
    let schema = Schema::new().field("a", FieldSpec::array(Primitive::Integer).required());

    let err = cast::cast(&input(json!({"a": [1, "x", 3]})), &schema, &CastOptions::default())
        .unwrap_err();
    assert_eq!(err.cause().map(CastError::code), Some("CAST_ARRAY_ELEMENT_FAILURE"));
}

#[test]
fn test_array_of_nested_schemas() {
    let item = Schema::new()
        .field("sku", FieldSpec::string().required())
        .field("qty", FieldSpec::integer().default(1));
    let schema = Schema::new().field("items", FieldSpec::array(item));

    let out = cast_ok(json!({"items": [{"sku": "a"}, {"sku": "b", "qty": "3"}]}), &schema);
    let items = out.get("items").and_then(Value::as_array).unwrap();
    assert_eq!(items[0], Value::Record(Record::from([("sku", Value::from("a")), ("qty", Value::Int(1))])));
    assert_eq!(items[1], Value::Record(Record::from([("sku", Value::from("b")), ("qty", Value::Int(3))])));
}

#[test]
fn test_cast_value_bare() {
    let ty = CastType::array(Primitive::Float);
    assert_eq!(
        cast::cast_value(&input(json!([1, "2.5"])), &ty),
        Ok(Value::Array(vec![Value::Float(1.0), Value::Float(2.5)]))
    );
}

// =============================================================================
// Named Shapes
// =============================================================================

#[test]
fn test_named_shapes_from_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("address.json"),
        json!({"fields": [
            {"name": "city", "type": "string", "required": true},
            {"name": "zip", "type": "integer"}
        ]})
        .to_string(),
    )
    .unwrap();

    let mut shapes = ShapeRegistry::new();
    assert_eq!(shapes.load_dir(tmp.path()).unwrap(), 1);

    let schema = Schema::new()
        .field("home", FieldSpec::new(CastType::named("address")))
        .field("work", FieldSpec::new(CastType::named("address")));

    let out = Caster::new(&shapes)
        .cast(
            &input(json!({"home": {"city": "Oslo", "zip": "150"}, "work": {}})),
            &schema,
            &CastOptions::default(),
        )
        .unwrap();

    // `work` fails inside the shape and, being optional, is omitted
    assert_eq!(
        out,
        Record::from([(
            "home",
            Value::Record(Record::from([("city", Value::from("Oslo")), ("zip", Value::Int(150))]))
        )])
    );
}

#[test]
fn test_shape_failure_is_wrapped() {
    let mut shapes = ShapeRegistry::new();
    shapes
        .register("point", Schema::new().field("x", FieldSpec::integer().required()))
        .unwrap();
    let schema = Schema::new().field("p", FieldSpec::new(CastType::named("point")).required());

    let err = Caster::new(&shapes)
        .cast(&input(json!({"p": {}})), &schema, &CastOptions::default())
        .unwrap_err();
    assert_eq!(err.cause().map(CastError::code), Some("CAST_SHAPE_FAILURE"));
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_cast_is_deterministic() {
    let schema = Schema::new()
        .field("id", FieldSpec::integer().required())
        .field("tags", FieldSpec::array(Primitive::String).default(Value::Array(vec![])));
    let doc = input(json!({"id": "12", "tags": ["a", 1, true]}));

    let first = cast::cast(&doc, &schema, &CastOptions::default()).unwrap();
    for _ in 0..100 {
        assert_eq!(cast::cast(&doc, &schema, &CastOptions::default()).unwrap(), first);
    }
}
