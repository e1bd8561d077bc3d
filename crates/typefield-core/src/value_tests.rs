use crate::Value;

#[test]
fn conversions() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(42), Value::Int(42));
    assert_eq!(Value::from("x"), Value::String("x".into()));
    assert_eq!(
        Value::from(vec![1, 2]),
        Value::Array(vec![Value::Int(1), Value::Int(2)])
    );
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some(3)), Value::Int(3));
}

#[test]
fn accessors() {
    assert!(Value::Null.is_null());
    assert_eq!(Value::Bool(false).as_bool(), Some(false));
    assert_eq!(Value::Int(7).as_int(), Some(7));
    assert_eq!(Value::Int(7).as_str(), None);
    assert_eq!(Value::from("abc").as_str(), Some("abc"));
    assert_eq!(Value::from(vec![1]).as_array(), Some(&[Value::Int(1)][..]));
}

#[test]
fn serialize_to_json() {
    let value = Value::Array(vec![
        Value::Null,
        Value::Bool(true),
        Value::Int(-3),
        Value::String("hi".into()),
        Value::Tuple(vec![Value::Int(0), Value::from("zero")]),
        Value::tagged("red", 1),
    ]);
    let json = serde_json::to_string(&value).unwrap();
    insta::assert_snapshot!(json, @r#"[null,true,-3,"hi",[0,"zero"],{"$tag":"red","$data":1}]"#);
}

#[test]
fn serialize_tag_without_data() {
    let value = Value::Tagged {
        tag: "none".into(),
        data: None,
    };
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"$tag":"none"}"#);
}
