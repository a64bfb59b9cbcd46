use serde::Serialize;
use serde_json::{Map, Value};

use super::Photo;
use crate::unsplash::{
    Error, Result,
    fields::{self, Fields},
};

/// One page of `/search/photos` results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    total: u64,
    total_pages: u64,
    results: Vec<Photo>,
}

deserialize_from_value!(SearchResults);

impl SearchResults {
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = Fields::new("search results", value)?;

        Ok(Self {
            total: fields.required("total")?,
            total_pages: fields.required("total_pages")?,
            results: fields.required_with("results", |results| {
                results
                    .as_array()
                    .ok_or(Error::MissingOrInvalidField("results"))?
                    .iter()
                    .map(Photo::from_value)
                    .collect()
            })?,
        })
    }

    pub fn from_json<T: AsRef<str>>(text: T) -> Result<Self> {
        let value: Value = serde_json::from_str(text.as_ref())?;

        Self::from_value(&value)
    }

    pub fn json(&self) -> Map<String, Value> {
        fields::export(self)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn results(&self) -> &[Photo] {
        &self.results
    }

    pub fn into_results(self) -> Vec<Photo> {
        self.results
    }
}
