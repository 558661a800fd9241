use nullable_codecs::JsonCodec;
use nullable_core::{Codec, Nullable, serde::Serialize};

#[derive(Serialize)]
struct Point {
    x: i32,
    y: Nullable<i32>,
}

#[test]
fn null_token() {
    let codec = JsonCodec::new();
    assert_eq!(codec.null(), b"null");
    assert!(codec.is_null(&b"null".to_vec()));
    assert!(!codec.is_null(&b" null".to_vec()));
    assert!(!codec.is_null(&b"\"null\"".to_vec()));
}

#[test]
fn encode_decode() -> Result<(), serde_json::Error> {
    let codec = JsonCodec::new();
    let data = codec.encode(&[1, 2, 3])?;
    assert_eq!(data, b"[1,2,3]");

    let back: Vec<i32> = codec.decode(&data)?;
    assert_eq!(back, vec![1, 2, 3]);
    Ok(())
}

#[test]
fn decode_into_keeps_target_on_error() -> Result<(), serde_json::Error> {
    let codec = JsonCodec::new();
    let mut target = 10u16;

    codec.decode_into(&b"11".to_vec(), &mut target)?;
    assert_eq!(target, 11);

    assert!(codec.decode_into(&b"-1".to_vec(), &mut target).is_err());
    assert_eq!(target, 11);
    Ok(())
}

#[test]
fn pretty_output() -> Result<(), serde_json::Error> {
    let point = Point {
        x: 1,
        y: Nullable::null(),
    };

    let compact = JsonCodec::new().encode(&point)?;
    assert_eq!(compact, br#"{"x":1,"y":null}"#);

    let pretty = JsonCodec::pretty().encode(&point)?;
    assert_eq!(
        String::from_utf8_lossy(&pretty),
        "{\n  \"x\": 1,\n  \"y\": null\n}"
    );
    Ok(())
}

#[test]
fn unsized_values() -> Result<(), serde_json::Error> {
    let codec = JsonCodec::new();
    assert_eq!(codec.encode("abc")?, br#""abc""#);
    assert_eq!(codec.encode(&[true][..])?, b"[true]");
    Ok(())
}
