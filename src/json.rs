use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Names of the serialized fields a record exposes to API clients.
pub trait JsonPolicy {
    const JSON_FIELDS: &'static [&'static str];
}

/// Serializes the wrapped record keeping only the fields its
/// [`JsonPolicy`] lists.
#[derive(Debug, Clone)]
pub struct Exposed<T>(pub T);

impl<T> Serialize for Exposed<T>
where
    T: Serialize + JsonPolicy,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = serde_json::to_value(&self.0).map_err(<S::Error as serde::ser::Error>::custom)?;
        let Value::Object(obj) = value else {
            return value.serialize(serializer);
        };

        let filtered: Map<String, Value> = obj
            .into_iter()
            .filter(|(key, _)| T::JSON_FIELDS.contains(&key.as_str()))
            .collect();

        filtered.serialize(serializer)
    }
}

pub fn expose_all<T>(items: Vec<T>) -> Vec<Exposed<T>> {
    items.into_iter().map(Exposed).collect()
}
