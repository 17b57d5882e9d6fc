//! Tolerant field decoders for slide records.
//!
//! Slide data comes from hand-edited JSON and older editor builds, so a wrong-typed value is
//! treated as absent instead of failing the whole manifest.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::foundation::core::Point;

pub(crate) fn number<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    Ok(finite(&v))
}

pub(crate) fn point<'de, D>(d: D) -> Result<Option<Point>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    Ok(point_from_value(&v))
}

pub(crate) fn text<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    Ok(v.as_str().map(str::to_owned))
}

pub(crate) fn flag<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    Ok(v.as_bool().unwrap_or(false))
}

pub(crate) fn point_from_value(v: &Value) -> Option<Point> {
    let obj = v.as_object()?;
    let x = obj.get("x").and_then(finite)?;
    let y = obj.get("y").and_then(finite)?;
    Some(Point::new(x, y))
}

fn finite(v: &Value) -> Option<f64> {
    v.as_f64().filter(|f| f.is_finite())
}
