use objson::{decode_str, value, Map, Value};

#[test]
fn test_value_macro_null() {
    assert_eq!(value!(null), Value::Null);
}

#[test]
fn test_value_macro_booleans() {
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    assert_eq!(value!(42), Value::Number(42.0));
    assert_eq!(value!(3.5), Value::Number(3.5));
    assert_eq!(value!(-123), Value::Number(-123.0));
}

#[test]
fn test_value_macro_strings() {
    assert_eq!(value!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(value!(""), Value::String(String::new()));
}

#[test]
fn test_value_macro_arrays() {
    assert_eq!(value!([]), Value::Array(vec![]));

    assert_eq!(
        value!([1, "hello", true, null, (-2)]),
        Value::Array(vec![
            Value::Number(1.0),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
            Value::Number(-2.0),
        ])
    );
}

#[test]
fn test_value_macro_objects() {
    assert_eq!(value!({}), Value::Object(Map::new()));

    let simple = value!({
        "name": "Alice",
        "age": 30
    });

    let Value::Object(ref obj) = simple else {
        panic!("expected object");
    };
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get("name"), Some(&Value::String("Alice".to_string())));
    assert_eq!(obj.get("age"), Some(&Value::Number(30.0)));
}

#[test]
fn test_value_macro_nested() {
    let nested = value!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    let user = nested.get("user").and_then(Value::as_object).unwrap();
    assert_eq!(user.get("id"), Some(&Value::Number(123.0)));
    assert_eq!(user.get("active"), Some(&Value::Bool(true)));

    let tags = nested.get("tags").and_then(Value::as_array).unwrap();
    assert_eq!(tags, &[Value::from("admin"), Value::from("developer")]);

    assert_eq!(nested.get("count").and_then(Value::as_i64), Some(42));
}

#[test]
fn test_value_macro_matches_decoded_document() {
    let decoded = decode_str(
        r#"{"id": 7, "ratio": -0.25, "items": [{"ok": true}, null], "empty": {}}"#,
    )
    .unwrap();

    assert_eq!(
        Value::Object(decoded),
        value!({
            "id": 7,
            "ratio": (-0.25),
            "items": [{"ok": true}, null],
            "empty": {}
        })
    );
}

#[test]
fn test_value_accessors() {
    let null_val = value!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_array());
    assert!(!null_val.is_object());

    let bool_val = value!(true);
    assert_eq!(bool_val.as_bool(), Some(true));

    let str_val = value!("hello");
    assert_eq!(str_val.as_str(), Some("hello"));

    let array_val = value!([1, 2, 3]);
    assert_eq!(array_val.as_array().map(Vec::len), Some(3));

    let obj_val = value!({"key": "value"});
    assert_eq!(obj_val.as_object().map(Map::len), Some(1));
    assert_eq!(obj_val.get("missing"), None);
}
