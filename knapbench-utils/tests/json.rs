use knapbench_utils::{dejsonify, jsonify};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Sample {
    zeta: u64,
    alpha: Vec<u64>,
}

#[test]
fn test_jsonify_sorts_keys() {
    let sample = Sample {
        zeta: 1,
        alpha: vec![2, 3],
    };
    assert_eq!(jsonify(&sample), r#"{"alpha":[2,3],"zeta":1}"#);
}

#[test]
fn test_jsonify_sorts_nested_keys() {
    let value = json!({"b": [{"y": 1, "x": 2}], "a": {"d": 0, "c": null}});
    assert_eq!(
        jsonify(&value),
        r#"{"a":{"c":null,"d":0},"b":[{"x":2,"y":1}]}"#
    );
}

#[test]
fn test_dejsonify() {
    let sample: Sample = dejsonify(r#"{"zeta":5,"alpha":[]}"#).unwrap();
    assert_eq!(
        sample,
        Sample {
            zeta: 5,
            alpha: vec![]
        }
    );
    assert!(dejsonify::<Sample>("{}").is_err());
}
