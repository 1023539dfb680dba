#![cfg(feature = "serde")]
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    flags: Vec<bool>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Wrapper {
    ratio: f64,
    user: User,
}

#[test]
fn de_typed_struct() -> Result<(), Box<dyn std::error::Error>> {
    let s = "ratio:2.5E-1\nuser:{\n  flags: [\n    true\n    false\n  ]\n  id: 1\n  name: \"Ada\"\n}\n";
    let opts = jamilek::Options::default();
    let w: Wrapper = jamilek::from_str(s, &opts)?;
    assert_eq!(
        w,
        Wrapper {
            ratio: 0.25,
            user: User {
                id: 1,
                name: "Ada".into(),
                flags: vec![true, false]
            }
        }
    );
    Ok(())
}

#[test]
fn de_reports_parse_errors_first() {
    let opts = jamilek::Options::default();
    let err = jamilek::from_str::<Wrapper>("user:1\nratio:1.5\n", &opts).unwrap_err();
    assert_eq!(err.kind(), jamilek::ErrorKind::Ordering);
}

#[test]
fn de_type_mismatch() {
    let opts = jamilek::Options::default();
    let err = jamilek::from_str::<Wrapper>("ratio:1.5\nuser:\"nobody\"\n", &opts).unwrap_err();
    assert_eq!(err.kind(), jamilek::ErrorKind::Data);
}

#[test]
fn de_from_parsed_node() -> Result<(), Box<dyn std::error::Error>> {
    let node = jamilek::parse_str("xs:[\n  -3\n  4\n]\n")?;
    let xs = node.get("xs").cloned().unwrap();
    let v: Vec<i32> = jamilek::de::from_node(xs)?;
    assert_eq!(v, vec![-3, 4]);
    Ok(())
}
