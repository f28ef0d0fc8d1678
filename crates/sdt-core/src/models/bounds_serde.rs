//! Serde helpers for boundary lists that contain infinities.
//!
//! JSON has no infinities, so non-finite bounds are written as the strings
//! `"-inf"`, `"inf"` and `"nan"`. Reading accepts those strings as well as
//! plain numbers, which keeps TOML's native `inf`/`-inf` working.

use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Bound {
    Number(f64),
    Text(String),
}

fn label(bound: f64) -> &'static str {
    if bound.is_nan() {
        "nan"
    } else if bound > 0.0 {
        "inf"
    } else {
        "-inf"
    }
}

fn parse(text: &str) -> Option<f64> {
    match text {
        "inf" | "+inf" => Some(f64::INFINITY),
        "-inf" => Some(f64::NEG_INFINITY),
        "nan" => Some(f64::NAN),
        _ => None,
    }
}

pub fn serialize<S: Serializer>(bounds: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(bounds.len()))?;
    for bound in bounds {
        if bound.is_finite() {
            seq.serialize_element(bound)?;
        } else {
            seq.serialize_element(label(*bound))?;
        }
    }
    seq.end()
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
    Vec::<Bound>::deserialize(deserializer)?
        .into_iter()
        .map(|bound| match bound {
            Bound::Number(v) => Ok(v),
            Bound::Text(t) => {
                parse(&t).ok_or_else(|| D::Error::custom(format!("invalid boundary {t:?}")))
            }
        })
        .collect()
}
