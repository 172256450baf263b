use serde::Serialize;

fn is_zero(id: &i64) -> bool {
    *id == 0
}

/// Zero-valued fields are left out of the JSON, so `Item::default()`
/// serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Item {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl Item {
    pub fn new(name: &str, value: &str) -> Self {
        Item {
            id: 0,
            name: name.to_owned(),
            value: value.to_owned(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_item_serializes_empty() {
        let json = serde_json::to_string(&Item::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn omits_only_zero_fields() {
        let item = Item::new("", "v").with_id(3);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":3,"value":"v"}"#);
    }
}
