use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A country `name` as the upstream sends it.
///
/// The list endpoint sends a plain string, the by-code endpoint a
/// `{common, official}` object. Both are accepted everywhere and written
/// back in the form they arrived in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountryName {
    Plain(String),
    Nested(NestedName),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl CountryName {
    /// Text to match searches against: the string itself, or `common`
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CountryName::Plain(name) => Some(name),
            CountryName::Nested(nested) => nested.common.as_deref(),
        }
    }

    /// `name.common`; a plain string has no `common` member
    pub fn common(&self) -> Option<&str> {
        match self {
            CountryName::Plain(_) => None,
            CountryName::Nested(nested) => nested.common.as_deref(),
        }
    }
}

/// Capital(s) of a country: a sequence upstream, occasionally a bare string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Capital {
    Many(Vec<String>),
    One(String),
}

impl Capital {
    pub fn first(&self) -> Option<&str> {
        match self {
            Capital::Many(capitals) => capitals.first().map(String::as_str),
            Capital::One(capital) => Some(capital),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            Capital::Many(capitals) => capitals,
            Capital::One(capital) => std::slice::from_ref(capital),
        };
        items.iter().map(String::as_str)
    }
}

/// Decodes an optional field, turning a value of the wrong shape into `None`
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Record from the upstream "all countries" endpoint.
///
/// The JSON is kept exactly as received and serialized back unchanged.
/// Accessors give typed views of the fields this service reads; a field
/// that is missing, `null` or of an unexpected shape reads as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpstreamCountry(Value);

impl UpstreamCountry {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn name(&self) -> Option<CountryName> {
        self.field("name")
    }

    /// Text to match searches against: a plain name, or `name.common`
    pub fn name_text(&self) -> Option<&str> {
        match self.0.get("name")? {
            Value::String(name) => Some(name),
            Value::Object(nested) => nested.get("common").and_then(Value::as_str),
            _ => None,
        }
    }

    pub fn flag(&self) -> Option<&str> {
        self.str_field("flag")
    }

    pub fn region(&self) -> Option<&str> {
        self.str_field("region")
    }

    pub fn alpha2_code(&self) -> Option<&str> {
        self.str_field("alpha2Code")
    }

    pub fn capital(&self) -> Option<Capital> {
        self.field("capital")
    }

    pub fn timezones(&self) -> Option<Vec<String>> {
        self.field("timezones")
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    fn field<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.0.get(key).and_then(|value| T::deserialize(value).ok())
    }
}

impl From<Value> for UpstreamCountry {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Record from the upstream "country by alpha-2 code" endpoint.
///
/// `population`, `languages` and `currencies` are copied through as
/// whatever JSON the upstream sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamCountryDetail {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<CountryName>,
    #[serde(deserialize_with = "lenient")]
    pub flag: Option<String>,
    pub population: Option<Value>,
    pub languages: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub region: Option<String>,
    pub currencies: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub timezones: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub capital: Option<Capital>,
}
