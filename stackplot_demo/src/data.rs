// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Record loading for `stackplot_demo`.

use anyhow::{Context, Result, bail};
use serde_json::Value as Json;
use stackplot_transforms::{Record, Value};

/// Parses a JSON array of objects into records.
///
/// `category_field` names the category id; every other field is a series, in object order.
/// Category ids that are numbers or booleans are stringified; boolean cells read as `1` or `0`.
pub(crate) fn records_from_json(text: &str, category_field: &str) -> Result<Vec<Record>> {
    let json: Json = serde_json::from_str(text).context("input is not valid JSON")?;
    let Json::Array(rows) = json else {
        bail!("input must be a JSON array of objects");
    };

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let Json::Object(fields) = row else {
                bail!("row {i} is not an object");
            };
            let category = match fields.get(category_field) {
                Some(Json::String(s)) => s.clone(),
                Some(Json::Null) | None => {
                    bail!("row {i} has no `{category_field}` field")
                }
                Some(other) => other.to_string(),
            };
            let entries = fields
                .iter()
                .filter(|(name, _)| name.as_str() != category_field)
                .map(|(name, v)| (name.clone(), cell(v)));
            Ok(Record::from_entries(category, entries))
        })
        .collect()
}

fn cell(v: &Json) -> Value {
    match v {
        Json::Number(n) => n.as_f64().into(),
        Json::String(s) => Value::Text(s.clone()),
        Json::Null => Value::Missing,
        Json::Bool(b) => Value::Number(f64::from(u8::from(*b))),
        other => Value::Text(other.to_string()),
    }
}

/// A small quarterly dataset used when no input file is given.
pub(crate) fn sample_records() -> Vec<Record> {
    let rows: [(&str, [f64; 3]); 6] = [
        ("Jan", [12.0, 5.0, 3.0]),
        ("Feb", [9.0, 7.0, 4.0]),
        ("Mar", [14.0, 6.0, 2.0]),
        ("Apr", [11.0, 9.0, 6.0]),
        ("May", [7.0, 4.0, 8.0]),
        ("Jun", [10.0, 8.0, 5.0]),
    ];
    rows.iter()
        .map(|(month, [online, retail, wholesale])| {
            Record::new(*month)
                .with_value("online", *online)
                .with_value("retail", *retail)
                .with_value("wholesale", *wholesale)
        })
        .collect()
}
