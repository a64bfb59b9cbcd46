use std::collections::HashMap;

use log::debug;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use super::{
    Error, Result,
    url_map::{self, UrlMap, WireKey},
};

/// Field access over one JSON object, with the decode policies of the models.
///
/// Required fields fail the record with [`Error::MissingOrInvalidField`].
/// Optional fields degrade to `None` on their own without touching the rest.
pub(crate) struct Fields<'a> {
    record: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub fn new(record: &'static str, value: &'a Value) -> Result<Self> {
        let map = value.as_object().ok_or(Error::NotAnObject(record))?;

        Ok(Self { record, map })
    }

    pub fn required<T: DeserializeOwned>(&self, key: &'static str) -> Result<T> {
        self.required_with(key, |value| {
            T::deserialize(value).map_err(|_| Error::MissingOrInvalidField(key))
        })
    }

    pub fn required_with<T, F>(&self, key: &'static str, decode: F) -> Result<T>
    where
        F: FnOnce(&'a Value) -> Result<T>,
    {
        match self.map.get(key) {
            Some(value) => decode(value),
            None => Err(Error::MissingOrInvalidField(key)),
        }
    }

    /// Required string that must not be empty, used for identifiers and handles.
    pub fn identifier(&self, key: &'static str) -> Result<String> {
        let id: String = self.required(key)?;

        if id.is_empty() {
            return Err(Error::MissingOrInvalidField(key));
        }

        Ok(id)
    }

    pub fn url_map<K: WireKey>(&self, key: &'static str) -> Result<UrlMap<K>> {
        let wire: HashMap<String, String> = self.required(key)?;

        Ok(url_map::decode(wire))
    }

    pub fn optional<T: DeserializeOwned>(&self, key: &'static str) -> Option<T> {
        self.optional_with(key, |value| {
            T::deserialize(value).map_err(|_| Error::MissingOrInvalidField(key))
        })
    }

    pub fn optional_with<T, F>(&self, key: &'static str, decode: F) -> Option<T>
    where
        F: FnOnce(&'a Value) -> Result<T>,
    {
        let value = self.map.get(key).filter(|value| !value.is_null())?;

        match decode(value) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                debug!("Ignoring {}.{key}: {err}", self.record);
                None
            }
        }
    }
}

/// Loosely typed copy of a record, for logging and legacy consumers.
pub(crate) fn export<T: Serialize>(record: &T) -> Map<String, Value> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
