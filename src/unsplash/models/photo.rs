use std::num::NonZeroU32;

use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use super::{PhotoExif, User};
use crate::unsplash::{
    Error, Result,
    color::Rgb,
    fields::{self, Fields},
    url_map::{self, UrlMap},
};

wire_keys! {
    /// Renditions of the image file.
    pub enum UrlKind {
        Raw => "raw",
        Full => "full",
        Regular => "regular",
        Small => "small",
        Thumb => "thumb",
    }
}

wire_keys! {
    pub enum LinkKind {
        /// The photo itself in the API, spelled `self` on the wire.
        Own => "self",
        Html => "html",
        Download => "download",
        /// Endpoint to hit when the photo gets downloaded.
        DownloadLocation => "download_location",
    }
}

/// A photo as returned by the photo endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Photo {
    #[serde(rename = "id")]
    identifier: String,
    height: u32,
    width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exif: Option<PhotoExif>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<User>,
    #[serde(serialize_with = "url_map::serialize")]
    urls: UrlMap<UrlKind>,
    #[serde(serialize_with = "url_map::serialize")]
    links: UrlMap<LinkKind>,
    #[serde(rename = "likes")]
    likes_count: u64,
    #[serde(rename = "downloads", skip_serializing_if = "Option::is_none")]
    downloads_count: Option<u64>,
    #[serde(rename = "views", skip_serializing_if = "Option::is_none")]
    views_count: Option<u64>,
}

deserialize_from_value!(Photo);

impl Photo {
    /// Decodes one photo object.
    ///
    /// `id`, `width`, `height`, `urls` and `links` must be there. Every other
    /// field is decoded on its own and left empty if it doesn't decode, except
    /// `likes` which falls back to 0.
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = Fields::new("photo", value)?;

        Ok(Self {
            identifier: fields.identifier("id")?,
            height: fields.required::<NonZeroU32>("height")?.get(),
            width: fields.required::<NonZeroU32>("width")?.get(),
            color: fields.optional_with("color", |value| {
                value
                    .as_str()
                    .and_then(Rgb::from_hex)
                    .ok_or(Error::MissingOrInvalidField("color"))
            }),
            exif: fields.optional_with("exif", PhotoExif::from_value),
            user: fields.optional_with("user", User::from_value),
            urls: fields.url_map("urls")?,
            links: fields.url_map("links")?,
            likes_count: fields.optional("likes").unwrap_or(0),
            downloads_count: fields.optional("downloads"),
            views_count: fields.optional("views"),
        })
    }

    pub fn from_json<T: AsRef<str>>(text: T) -> Result<Self> {
        let value: Value = serde_json::from_str(text.as_ref())?;

        Self::from_value(&value)
    }

    pub fn json(&self) -> Map<String, Value> {
        fields::export(self)
    }

    pub fn id(&self) -> &str {
        &self.identifier
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    pub fn color(&self) -> Option<Rgb> {
        self.color
    }

    pub fn exif(&self) -> Option<&PhotoExif> {
        self.exif.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn urls(&self) -> &UrlMap<UrlKind> {
        &self.urls
    }

    pub fn url(&self, kind: UrlKind) -> Option<&Url> {
        self.urls.get(&kind)
    }

    pub fn links(&self) -> &UrlMap<LinkKind> {
        &self.links
    }

    pub fn link(&self, kind: LinkKind) -> Option<&Url> {
        self.links.get(&kind)
    }

    pub fn likes_count(&self) -> u64 {
        self.likes_count
    }

    pub fn downloads_count(&self) -> Option<u64> {
        self.downloads_count
    }

    pub fn views_count(&self) -> Option<u64> {
        self.views_count
    }
}
