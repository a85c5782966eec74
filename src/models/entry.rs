use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A dictionary entry as returned by the remote API.
///
/// `null` and absent fields both deserialize to their empty value. Text fields
/// also accept numbers and booleans, which are kept as their JSON spelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub word: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub phonetic: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phonetics: Vec<Phonetic>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meanings: Vec<Meaning>,
}

impl Entry {
    /// Pronunciation text: the top-level `phonetic` when non-empty, else the
    /// first non-empty `phonetics[i].text`. Trimmed; `None` when nothing remains.
    pub fn phonetic_text(&self) -> Option<&str> {
        let text = self
            .phonetic
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| {
                self.phonetics
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .find(|t| !t.is_empty())
            })?
            .trim();
        (!text.is_empty()).then_some(text)
    }

    /// First non-empty audio source in `phonetics` order.
    pub fn audio_source(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .filter_map(|p| p.audio.as_deref())
            .find(|a| !a.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub part_of_speech: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default, deserialize_with = "lenient_string")]
    pub definition: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub example: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

/// Strings pass through, numbers and booleans are stringified, anything else
/// (`null`, arrays, objects) is treated as absent.
fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}
