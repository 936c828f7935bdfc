use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

// listing
//  ├── id                 (string | number | { timestamp, ... } | anything else, kept raw)
//  ├── title              (required)
//  ├── country, university, major, funding, type, level
//  ├── languageTests[]
//  ├── images[]
//  ├── courseValue        (string | number)
//  ├── universityDetails, qualifications, universityWebsite
//  ├── departmentHead
//  │    └── name, position, email, research, office
//  └── contactProfessors[]
//       └── name, position, email, research, office

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<ListingId>,

    pub title: String,

    #[serde(default, deserialize_with = "text")]
    pub country: String,
    #[serde(default, deserialize_with = "text")]
    pub university: String,
    #[serde(default, deserialize_with = "text")]
    pub major: String,
    #[serde(default, deserialize_with = "text")]
    pub funding: String,
    #[serde(rename = "type", default, deserialize_with = "text")]
    pub program_type: String,
    #[serde(default, deserialize_with = "text")]
    pub level: String,

    #[serde(default, deserialize_with = "or_default")]
    pub language_tests: Vec<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub images: Vec<String>,

    #[serde(default, deserialize_with = "text")]
    pub course_value: String,
    #[serde(default, deserialize_with = "text")]
    pub university_details: String,
    #[serde(default, deserialize_with = "text")]
    pub qualifications: String,
    #[serde(default, deserialize_with = "text")]
    pub university_website: String,

    #[serde(default, deserialize_with = "or_default")]
    pub department_head: Person,
    #[serde(default, deserialize_with = "or_default")]
    pub contact_professors: Vec<Person>,
}

/// A contact nested inside a listing. It has no identity of its own.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Person {
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub position: String,
    #[serde(default, deserialize_with = "text")]
    pub email: String,
    #[serde(default, deserialize_with = "text")]
    pub research: String,
    #[serde(default, deserialize_with = "text")]
    pub office: String,
}

/// Upstream ids arrive either as plain strings or as serialized object ids.
/// Any other shape is kept as its JSON text; an id never rejects a record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Text(String),
    Number(i64),
    Object { timestamp: i64 },
    #[serde(skip)]
    Raw(String),
}

impl ListingId {
    pub fn key(&self) -> String {
        match self {
            ListingId::Text(id) => id.clone(),
            ListingId::Number(id) => id.to_string(),
            ListingId::Object { timestamp } => timestamp.to_string(),
            ListingId::Raw(json) => json.clone(),
        }
    }
}

impl Listing {
    pub fn row_key(&self) -> Option<String> {
        self.id.as_ref().map(ListingId::key)
    }

    pub fn language_tests_text(&self) -> String {
        self.language_tests.join(", ")
    }

    pub fn images_text(&self) -> String {
        self.images.join(", ")
    }
}

/// Accepts strings, numbers and booleans; `null` becomes empty text.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(de::Error::custom(format!(
            "expected text or number, found {other}"
        ))),
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<ListingId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Ok(Some(
            ListingId::deserialize(&value).unwrap_or_else(|_| ListingId::Raw(value.to_string())),
        )),
    }
}

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
