use serde::Serialize;
use serde_json::{Map, Value};

use crate::unsplash::{
    Result,
    fields::{self, Fields},
};

/// Camera settings a photo was taken with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PhotoExif {
    aperture: String,
    exposure_time: String,
    focal_length: String,
    iso: String,
    make: String,
    model: String,
}

deserialize_from_value!(PhotoExif);

impl PhotoExif {
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = Fields::new("exif", value)?;

        Ok(Self {
            aperture: fields.required("aperture")?,
            exposure_time: fields.required("exposure_time")?,
            focal_length: fields.required("focal_length")?,
            iso: fields.required("iso")?,
            make: fields.required("make")?,
            model: fields.required("model")?,
        })
    }

    pub fn from_json<T: AsRef<str>>(text: T) -> Result<Self> {
        let value: Value = serde_json::from_str(text.as_ref())?;

        Self::from_value(&value)
    }

    pub fn json(&self) -> Map<String, Value> {
        fields::export(self)
    }

    pub fn aperture(&self) -> &str {
        &self.aperture
    }

    pub fn exposure_time(&self) -> &str {
        &self.exposure_time
    }

    pub fn focal_length(&self) -> &str {
        &self.focal_length
    }

    pub fn iso(&self) -> &str {
        &self.iso
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}
