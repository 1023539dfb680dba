//! serde::Deserializer implementation backed by an owned Node tree

use serde::de::{self, DeserializeOwned, IntoDeserializer, MapAccess, SeqAccess};

use crate::node::Node;
use crate::{Result, options::Options};

#[derive(Debug)]
pub struct DeError {
    msg: String,
}

impl core::fmt::Display for DeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl de::Error for DeError {
    fn custom<T: core::fmt::Display>(t: T) -> Self {
        DeError {
            msg: format!("{}", t),
        }
    }
}

impl core::error::Error for DeError {}

pub struct Deserializer {
    node: Node,
}

impl Deserializer {
    pub fn from_node(node: Node) -> Self {
        Self { node }
    }
}

struct SeqDeserializer {
    items: std::vec::IntoIter<Node>,
}

impl<'de> SeqAccess<'de> for SeqDeserializer {
    type Error = DeError;

    fn next_element_seed<T>(&mut self, seed: T) -> core::result::Result<Option<T::Value>, DeError>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.items.next() {
            Some(node) => seed.deserialize(Deserializer { node }).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

struct MapDeserializer {
    entries: std::vec::IntoIter<(String, Node)>,
    pending: Option<Node>,
}

impl<'de> MapAccess<'de> for MapDeserializer {
    type Error = DeError;

    fn next_key_seed<K>(&mut self, seed: K) -> core::result::Result<Option<K::Value>, DeError>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.entries.next() {
            Some((key, node)) => {
                self.pending = Some(node);
                seed.deserialize(key.into_deserializer()).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> core::result::Result<V::Value, DeError>
    where
        V: de::DeserializeSeed<'de>,
    {
        let node = self
            .pending
            .take()
            .ok_or_else(|| <DeError as de::Error>::custom("value requested before key"))?;
        seed.deserialize(Deserializer { node })
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.entries.len())
    }
}

impl<'de> de::Deserializer<'de> for Deserializer {
    type Error = DeError;

    fn deserialize_any<V>(self, visitor: V) -> core::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        match self.node {
            Node::Bool(b) => visitor.visit_bool(b),
            Node::Integer(text) => {
                if let Ok(i) = text.parse::<i64>() {
                    visitor.visit_i64(i)
                } else if let Ok(u) = text.parse::<u64>() {
                    visitor.visit_u64(u)
                } else {
                    Err(de::Error::custom(format!(
                        "integer {text} does not fit in 64 bits"
                    )))
                }
            }
            Node::Float(text) => match text.parse::<f64>() {
                Ok(f) if f.is_finite() => visitor.visit_f64(f),
                _ => Err(de::Error::custom(format!("float {text} overflows f64"))),
            },
            Node::String(s) => visitor.visit_string(s),
            Node::Array(items) => visitor.visit_seq(SeqDeserializer {
                items: items.into_iter(),
            }),
            Node::Object(entries) => visitor.visit_map(MapDeserializer {
                entries: entries.into_iter(),
                pending: None,
            }),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> core::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        // The format has no null; a present value is always `Some`.
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> core::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> core::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        match self.node {
            Node::String(s) => visitor.visit_enum(s.into_deserializer()),
            other => Err(de::Error::custom(format!(
                "expected string for enum, found {}",
                other.kind_name()
            ))),
        }
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string bytes byte_buf
        unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

/// Deserialize a typed value from an already parsed tree.
pub fn from_node<T: DeserializeOwned>(node: Node) -> Result<T> {
    T::deserialize(Deserializer::from_node(node))
        .map_err(|e: DeError| crate::error::Error::Message(e.msg))
}

pub fn from_str<T: DeserializeOwned>(s: &str, options: &Options) -> Result<T> {
    let node = crate::parse(crate::StrSource::new(s), options)?;
    from_node(node)
}
