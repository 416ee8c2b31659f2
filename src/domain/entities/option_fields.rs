use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents optional field semantics in PUT/partial update requests.
///
/// - `Unchanged` → field absent from the body
/// - `SetToNull` → explicitly null, clears the stored value
/// - `SetToValue` → set to provided value
///
/// Fields of this type need `#[serde(default)]` so that an absent key
/// deserializes to `Unchanged`.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionField<T> {
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<T> Default for OptionField<T> {
    fn default() -> Self {
        OptionField::Unchanged
    }
}

impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}

impl<T> Serialize for OptionField<T>
where
    T: Serialize,
{
    /// `Unchanged` should be skipped with `skip_serializing_if = "OptionField::is_unchanged"`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OptionField::SetToValue(value) => serializer.serialize_some(value),
            _ => serializer.serialize_none(),
        }
    }
}

// ---------------------- Core helpers & conversions ----------------------

impl<T> OptionField<T> {
    /// True when `Unchanged`.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Applies the patch to a stored optional value.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Self::Unchanged => {}
            Self::SetToNull => *target = None,
            Self::SetToValue(v) => *target = Some(v),
        }
    }
}

impl<T> From<Option<T>> for OptionField<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            None => OptionField::SetToNull,
            Some(v) => OptionField::SetToValue(v),
        }
    }
}

pub type PatchString = OptionField<String>;

/// Reads an optional string, treating `""` and whitespace-only input as
/// absent. Use with `#[serde(default, deserialize_with = "blank_as_none")]`.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct Patch {
        #[serde(default, skip_serializing_if = "OptionField::is_unchanged")]
        link: PatchString,
    }

    #[test]
    fn absent_null_and_value_are_distinguished() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"link": null}"#).unwrap();
        let value: Patch = serde_json::from_str(r#"{"link": "https://x.dev"}"#).unwrap();

        assert_eq!(absent.link, OptionField::Unchanged);
        assert_eq!(null.link, OptionField::SetToNull);
        assert_eq!(value.link, OptionField::SetToValue("https://x.dev".to_string()));
    }

    #[test]
    fn unchanged_fields_are_skipped_when_serializing() {
        let patch = Patch { link: OptionField::Unchanged };
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");

        let patch = Patch { link: OptionField::SetToNull };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"link":null}"#);
    }

    #[test]
    fn apply_to_updates_target() {
        let mut stored = Some("old".to_string());

        PatchString::Unchanged.apply_to(&mut stored);
        assert_eq!(stored.as_deref(), Some("old"));

        PatchString::SetToValue("new".into()).apply_to(&mut stored);
        assert_eq!(stored.as_deref(), Some("new"));

        PatchString::SetToNull.apply_to(&mut stored);
        assert_eq!(stored, None);
    }

    #[derive(Debug, Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "blank_as_none")]
        email: Option<String>,
    }

    #[test]
    fn blank_strings_read_as_none() {
        let blank: Form = serde_json::from_str(r#"{"email": "   "}"#).unwrap();
        let absent: Form = serde_json::from_str("{}").unwrap();
        let null: Form = serde_json::from_str(r#"{"email": null}"#).unwrap();
        let value: Form = serde_json::from_str(r#"{"email": "me@example.com"}"#).unwrap();

        assert_eq!(blank.email, None);
        assert_eq!(absent.email, None);
        assert_eq!(null.email, None);
        assert_eq!(value.email.as_deref(), Some("me@example.com"));
    }
}
