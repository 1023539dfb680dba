/// A decoded document value.
///
/// Numbers keep their canonical source text; the `as_*` accessors convert on
/// demand and never touch the stored literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Entries in strictly increasing key order.
    Object(Vec<(String, Node)>),
    Array(Vec<Node>),
    String(String),
    Integer(String),
    Float(String),
    Bool(bool),
}

impl Node {
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Node::Object(_) | Node::Array(_))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Object(_) => "object",
            Node::Array(_) => "array",
            Node::String(_) => "string",
            Node::Integer(_) => "integer",
            Node::Float(_) => "float",
            Node::Bool(_) => "bool",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[(String, Node)]> {
        match self {
            Node::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Canonical text of an `Integer` or `Float`.
    pub fn number_text(&self) -> Option<&str> {
        match self {
            Node::Integer(t) | Node::Float(t) => Some(t),
            _ => None,
        }
    }

    /// Look up a key in an object. Keys are sorted, so this is a binary search.
    pub fn get(&self, key: &str) -> Option<&Node> {
        let entries = self.as_object()?;
        entries
            .binary_search_by(|(k, _)| k.as_str().cmp(key))
            .ok()
            .map(|idx| &entries[idx].1)
    }

    /// `None` when not an integer or out of range.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Node::Integer(t) => t.parse().ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Node::Integer(t) => t.parse().ok(),
            _ => None,
        }
    }

    /// Nearest `f64` for either numeric variant; `None` if it overflows.
    pub fn as_f64(&self) -> Option<f64> {
        let text = self.number_text()?;
        text.parse::<f64>().ok().filter(|f| f.is_finite())
    }
}

#[cfg(feature = "json")]
impl From<Node> for serde_json::Value {
    fn from(node: Node) -> Self {
        use serde_json::{Map, Number, Value};
        match node {
            Node::Object(entries) => {
                let mut map = Map::with_capacity(entries.len());
                for (k, v) in entries {
                    map.insert(k, v.into());
                }
                Value::Object(map)
            }
            Node::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Node::String(s) => Value::String(s),
            Node::Bool(b) => Value::Bool(b),
            Node::Integer(t) => {
                if let Ok(i) = t.parse::<i64>() {
                    Value::Number(i.into())
                } else if let Ok(u) = t.parse::<u64>() {
                    Value::Number(u.into())
                } else {
                    Value::String(t)
                }
            }
            Node::Float(t) => match t.parse::<f64>().ok().and_then(Number::from_f64) {
                Some(n) => Value::Number(n),
                None => Value::String(t),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::Object(vec![
            ("a".into(), Node::Integer("1".into())),
            ("b".into(), Node::Float("1.5E3".into())),
            ("c".into(), Node::Array(vec![Node::Bool(true)])),
            ("d".into(), Node::String("x".into())),
        ])
    }

    #[test]
    fn lookup_by_key() {
        let n = sample();
        assert_eq!(n.get("a").and_then(Node::as_i64), Some(1));
        assert_eq!(n.get("b").and_then(Node::as_f64), Some(1500.0));
        assert_eq!(n.get("d").and_then(Node::as_str), Some("x"));
        assert!(n.get("zz").is_none());
        assert!(Node::Bool(true).get("a").is_none());
    }

    #[test]
    fn numeric_conversion_keeps_text() {
        let big = Node::Integer("18446744073709551616".into());
        assert_eq!(big.as_u64(), None);
        assert_eq!(big.number_text(), Some("18446744073709551616"));
        assert_eq!(Node::Integer("-5".into()).as_u64(), None);
        assert_eq!(Node::Integer("-5".into()).as_i64(), Some(-5));
        assert_eq!(Node::Float("1.5E999".into()).as_f64(), None);
    }

    #[test]
    fn kinds() {
        assert!(Node::Integer("1".into()).is_scalar());
        assert!(!Node::Array(vec![]).is_scalar());
        assert_eq!(sample().kind_name(), "object");
    }

    #[cfg(feature = "json")]
    #[test]
    fn to_json_preserves_order_and_text() {
        let mut n = sample();
        if let Node::Object(entries) = &mut n {
            entries.push(("e".into(), Node::Integer("99999999999999999999".into())));
        }
        let v: serde_json::Value = n.into();
        let keys: Vec<_> = v.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["a", "b", "c", "d", "e"]);
        assert_eq!(v["a"], 1);
        assert_eq!(v["b"], 1500.0);
        assert_eq!(v["e"], "99999999999999999999");
    }
}
