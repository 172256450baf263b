use std::convert::Infallible;
use std::fmt;
use std::num::IntErrorKind;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::Value;

use crate::model::Item;

/// Best-effort JSON body extractor.
///
/// Never rejects. Only the first JSON value of the body is looked at; when it
/// is an object, each known field is taken if its JSON type fits and stays at
/// its zero value otherwise. Anything else yields `Item::default()`.
#[derive(Debug, Clone, Default)]
pub struct LenientJson(pub Item);

#[axum::async_trait]
impl<S> FromRequest<S> for LenientJson
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.unwrap_or_default();
        Ok(LenientJson(decode_item(&body)))
    }
}

pub fn decode_item(body: &[u8]) -> Item {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Fields>();
    let Some(Ok(Fields(fields))) = values.next() else {
        return Item::default();
    };

    // keys match case-insensitively and apply in body order, so the last
    // well-typed occurrence of a field wins
    let mut item = Item::default();
    for (key, value) in fields {
        if key.eq_ignore_ascii_case("id") {
            if let Some(id) = value.as_i64() {
                item.id = id;
            }
        } else if key.eq_ignore_ascii_case("name") {
            if let Value::String(name) = value {
                item.name = name;
            }
        } else if key.eq_ignore_ascii_case("value") {
            if let Value::String(v) = value {
                item.value = v;
            }
        }
    }
    item
}

/// A JSON object's entries in the order they appear, duplicates kept.
struct Fields(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for Fields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = Fields;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Fields, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, Value>()? {
                    entries.push(entry);
                }
                Ok(Fields(entries))
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

/// Parses a path id. Unparsable input becomes 0, out-of-range input saturates.
pub fn parse_id(raw: &str) -> i64 {
    match raw.parse::<i64>() {
        Ok(id) => id,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}
