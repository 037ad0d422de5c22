use serde_json::Value;

/// Tolerant navigator over loosely structured third-party JSON. Every
/// lookup on an absent node yields another absent node, and leaf reads on
/// absent nodes yield `None`, so a chain of `get`/`index` calls survives
/// any amount of remote schema drift without panicking.
#[derive(Clone, Copy, Debug)]
pub struct JsonNode<'a> {
    value: Option<&'a Value>,
}

impl<'a> JsonNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value: Some(value) }
    }

    pub fn get(self, key: &str) -> Self {
        Self {
            value: self.value.and_then(|v| v.get(key)),
        }
    }

    pub fn index(self, idx: usize) -> Self {
        Self {
            value: self.value.and_then(|v| v.get(idx)),
        }
    }

    pub fn text(self) -> Option<&'a str> {
        self.value.and_then(Value::as_str)
    }

    /// Array elements in order. Absent and non-array nodes iterate nothing.
    pub fn values(self) -> impl Iterator<Item = JsonNode<'a>> {
        self.value
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(JsonNode::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_paths_read_as_none() {
        let doc = json!({"a": {"b": [{"c": "leaf"}]}});
        let root = JsonNode::new(&doc);

        assert_eq!(root.get("a").get("b").index(0).get("c").text(), Some("leaf"));
        assert_eq!(root.get("a").get("missing").index(7).get("c").text(), None);
        assert_eq!(root.get("nope").get("deeper").text(), None);
        assert_eq!(root.get("nope").values().count(), 0);
    }

    #[test]
    fn wrong_shapes_read_as_none() {
        let doc = json!({"a": "not an object", "n": null});
        let root = JsonNode::new(&doc);

        assert_eq!(root.get("a").get("b").text(), None);
        assert_eq!(root.get("a").index(0).text(), None);
        assert_eq!(root.get("n").text(), None);
        assert_eq!(root.get("n").get("deeper").text(), None);
    }

    #[test]
    fn values_iterates_in_order() {
        let doc = json!(["x", "y", "z"]);
        let items: Vec<_> = JsonNode::new(&doc)
            .values()
            .filter_map(JsonNode::text)
            .collect();

        assert_eq!(items, vec!["x", "y", "z"]);
    }
}
