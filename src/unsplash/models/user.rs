use std::hash::{Hash, Hasher};

use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::unsplash::{
    Result,
    fields::{self, Fields},
    url_map::{self, UrlMap},
};

wire_keys! {
    /// Sizes the profile picture is served in.
    pub enum ProfileImageSize {
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}

wire_keys! {
    pub enum LinkKind {
        Html => "html",
        Photos => "photos",
        Likes => "likes",
        Portfolio => "portfolio",
    }
}

/// Public profile of a photographer.
///
/// Two users are the same user when their identifiers match, whatever the
/// rest of the profile says.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    #[serde(rename = "id")]
    identifier: String,
    username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(serialize_with = "url_map::serialize")]
    profile_image: UrlMap<ProfileImageSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bio: Option<String>,
    #[serde(serialize_with = "url_map::serialize")]
    links: UrlMap<LinkKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    portfolio_url: Option<Url>,
    total_collections: u64,
    total_likes: u64,
    total_photos: u64,
}

deserialize_from_value!(User);

impl User {
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = Fields::new("user", value)?;

        Ok(Self {
            identifier: fields.identifier("id")?,
            username: fields.identifier("username")?,
            first_name: fields.optional("first_name"),
            last_name: fields.optional("last_name"),
            name: fields.optional("name"),
            profile_image: fields.url_map("profile_image")?,
            bio: fields.optional("bio"),
            links: fields.url_map("links")?,
            location: fields.optional("location"),
            portfolio_url: fields.optional("portfolio_url"),
            total_collections: fields.required("total_collections")?,
            total_likes: fields.required("total_likes")?,
            total_photos: fields.required("total_photos")?,
        })
    }

    pub fn from_json<T: AsRef<str>>(text: T) -> Result<Self> {
        let value: Value = serde_json::from_str(text.as_ref())?;

        Self::from_value(&value)
    }

    pub fn json(&self) -> Map<String, Value> {
        fields::export(self)
    }

    /// Name to show for the user: the full name if the API has one, else the
    /// first and last names, else the username.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }

        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            _ => self.username.clone(),
        }
    }

    /// Link to the user's page on the website.
    pub fn profile_url(&self) -> Option<Url> {
        Url::parse(&format!("https://unsplash.com/@{}", self.username)).ok()
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn profile_images(&self) -> &UrlMap<ProfileImageSize> {
        &self.profile_image
    }

    pub fn profile_image(&self, size: ProfileImageSize) -> Option<&Url> {
        self.profile_image.get(&size)
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    pub fn links(&self) -> &UrlMap<LinkKind> {
        &self.links
    }

    pub fn link(&self, kind: LinkKind) -> Option<&Url> {
        self.links.get(&kind)
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn portfolio_url(&self) -> Option<&Url> {
        self.portfolio_url.as_ref()
    }

    pub fn total_collections(&self) -> u64 {
        self.total_collections
    }

    pub fn total_likes(&self) -> u64 {
        self.total_likes
    }

    pub fn total_photos(&self) -> u64 {
        self.total_photos
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}
