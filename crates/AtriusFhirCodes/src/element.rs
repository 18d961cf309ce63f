// --- Internal Visitor for Element Object Deserialization ---

use std::marker::PhantomData;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeStruct;
use crate::extension::Extension;

/// Internal visitor struct for deserializing Element objects from JSON maps.
///
/// Handles the extended form of a primitive: an object carrying any of
/// `id`, `extension` and `value`.
struct ElementObjectVisitor<V, E>(PhantomData<(V, E)>);

impl<'de, V, E> Visitor<'de> for ElementObjectVisitor<V, E>
where
    V: Deserialize<'de>,
    E: Deserialize<'de>,
{
    type Value = Element<V, E>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an Element object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut id: Option<String> = None;
        let mut extension: Option<Vec<E>> = None;
        let mut value: Option<V> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "id" => {
                    if id.is_some() {
                        return Err(de::Error::duplicate_field("id"));
                    }
                    id = Some(map.next_value()?);
                }
                "extension" => {
                    if extension.is_some() {
                        return Err(de::Error::duplicate_field("extension"));
                    }
                    extension = Some(map.next_value()?);
                }
                "value" => {
                    if value.is_some() {
                        return Err(de::Error::duplicate_field("value"));
                    }
                    value = map.next_value()?;
                }
                // Ignore any unknown fields encountered
                _ => {
                    let _ = map.next_value::<de::IgnoredAny>()?;
                }
            }
        }

        Ok(Element {
            id,
            extension,
            value,
        })
    }
}

/// Generic element container supporting FHIR's extension mechanism.
///
/// Every FHIR primitive may carry an `id` and a list of extensions next to
/// its value. Coded values are built on `Element<&'static str, Extension>`,
/// and a plain FHIR `code` is [`Code`].
///
/// # Type Parameters
///
/// * `V` - The value type (e.g. `String` for a plain `code`)
/// * `E` - The extension type (normally [`Extension`])
///
/// # Serialization Behavior
///
/// - If only `value` is present: serializes as the primitive value directly
/// - If `id` or `extension` are present: serializes as an object with all fields
/// - If everything is `None`: serializes as `null`
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_codes::{Code, Extension};
///
/// let simple = Code::from("final");
/// assert_eq!(serde_json::to_string(&simple).unwrap(), "\"final\"");
///
/// let absent = Code {
///     id: Some("status-1".to_string()),
///     extension: Some(vec![Extension::data_absent_reason("unknown")]),
///     value: None,
/// };
/// assert!(absent.value.is_none());
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct Element<V, E> {
    /// Optional element identifier for referencing within the resource
    pub id: Option<String>,
    /// Optional extensions providing additional metadata
    pub extension: Option<Vec<E>>,
    /// The actual primitive value
    pub value: Option<V>,
}

/// A plain FHIR `code` primitive with no vocabulary attached.
pub type Code = Element<String, Extension>;

impl<V, E> Element<V, E> {
    /// Returns `true` if no value, id, or extensions are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.id.is_none() && self.extension.is_none()
    }

    /// Returns `true` if at least one extension is attached.
    #[inline]
    pub fn has_children(&self) -> bool {
        self.extension.as_ref().is_some_and(|ext| !ext.is_empty())
    }
}

impl<E> From<&str> for Element<String, E> {
    fn from(value: &str) -> Self {
        Element {
            id: None,
            extension: None,
            value: Some(value.to_string()),
        }
    }
}

impl<E> From<String> for Element<String, E> {
    fn from(value: String) -> Self {
        Element {
            id: None,
            extension: None,
            value: Some(value),
        }
    }
}

// Accepts a bare string, the extended object form, or null.
impl<'de, V, E> Deserialize<'de> for Element<V, E>
where
    V: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AnyValueVisitor<V, E>(PhantomData<(V, E)>);

        impl<V, E> AnyValueVisitor<V, E> {
            fn wrap(value: V) -> Element<V, E> {
                Element {
                    id: None,
                    extension: None,
                    value: Some(value),
                }
            }
        }

        impl<'de, V, E> Visitor<'de> for AnyValueVisitor<V, E>
        where
            V: Deserialize<'de>,
            E: Deserialize<'de>,
        {
            type Value = Element<V, E>;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter
                    .write_str("a code string, an object, or null")
            }

            fn visit_str<Er>(self, v: &str) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                V::deserialize(de::value::StrDeserializer::new(v)).map(Self::wrap)
            }
            fn visit_string<Er>(self, v: String) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                V::deserialize(de::value::StringDeserializer::new(v)).map(Self::wrap)
            }
            fn visit_borrowed_str<Er>(self, v: &'de str) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                V::deserialize(de::value::BorrowedStrDeserializer::new(v)).map(Self::wrap)
            }
            // Handle null
            fn visit_none<Er>(self) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                Ok(Element {
                    id: None,
                    extension: None,
                    value: None,
                })
            }
            fn visit_unit<Er>(self) -> Result<Self::Value, Er>
            where
                Er: de::Error,
            {
                self.visit_none()
            }

            fn visit_some<De>(self, deserializer: De) -> Result<Self::Value, De::Error>
            where
                De: Deserializer<'de>,
            {
                deserializer.deserialize_any(self)
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let map_deserializer = de::value::MapAccessDeserializer::new(map);
                map_deserializer.deserialize_map(ElementObjectVisitor(PhantomData))
            }

            // We don't expect sequences for a single Element
            fn visit_seq<A>(self, _seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                Err(de::Error::invalid_type(de::Unexpected::Seq, &self))
            }
        }

        deserializer.deserialize_any(AnyValueVisitor(PhantomData))
    }
}

// Custom Serialize for Element<V, E>
impl<V, E> Serialize for Element<V, E>
where
    V: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // If id and extension are None, serialize value directly (or null)
        if self.id.is_none() && self.extension.is_none() {
            match &self.value {
                Some(val) => val.serialize(serializer),
                None => serializer.serialize_none(),
            }
        } else {
            let len = usize::from(self.id.is_some())
                + usize::from(self.extension.is_some())
                + usize::from(self.value.is_some());

            let mut state = serializer.serialize_struct("Element", len)?;
            if let Some(id) = &self.id {
                state.serialize_field("id", id)?;
            }
            if let Some(extension) = &self.extension {
                state.serialize_field("extension", extension)?;
            }
            if let Some(value) = &self.value {
                state.serialize_field("value", value)?;
            }
            state.end()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_string_and_null_forms() {
        let code: Code = serde_json::from_value(json!("final")).unwrap();
        assert_eq!(code.value.as_deref(), Some("final"));
        assert!(code.id.is_none() && code.extension.is_none());

        let empty: Code = serde_json::from_value(json!(null)).unwrap();
        assert!(empty.is_empty());
        assert_eq!(serde_json::to_value(&empty).unwrap(), json!(null));
    }

    #[test]
    fn object_form_keeps_id_and_extension() {
        let raw = json!({
            "id": "s1",
            "extension": [{"url": "http://example.org/ext", "valueBoolean": true}],
            "value": "amended"
        });
        let code: Code = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(code.id.as_deref(), Some("s1"));
        assert!(code.has_children());
        assert_eq!(serde_json::to_value(&code).unwrap(), raw);
    }

    #[test]
    fn rejects_duplicate_fields_arrays_and_numbers() {
        let dup = r#"{"value": "a", "value": "b"}"#;
        assert!(serde_json::from_str::<Code>(dup).is_err());
        assert!(serde_json::from_value::<Code>(json!(["a"])).is_err());
        assert!(serde_json::from_value::<Code>(json!(1)).is_err());
    }
}
