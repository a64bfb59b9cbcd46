use serde_json::Value;

macro_rules! wire_keys {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $crate::unsplash::url_map::WireKey for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::unsplash::url_map::WireKey::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::unsplash::Error;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::unsplash::url_map::WireKey>::from_wire(s)
                    .ok_or_else(|| $crate::unsplash::Error::UnknownKey(s.to_owned()))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::core::result::Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::unsplash::url_map::WireKey::as_str(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::core::result::Result<Self, D::Error> {
                let wire = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                wire.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

macro_rules! deserialize_from_value {
    ($record:ty) => {
        impl<'de> ::serde::Deserialize<'de> for $record {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::core::result::Result<Self, D::Error> {
                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_value(&value).map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub mod color;
pub mod error;
pub(crate) mod fields;
pub mod models;
pub mod result;
pub mod url_map;

pub use error::Error;
pub use models::{Photo, PhotoExif, SearchResults, User};
pub use result::Result;

/// Decodes a saved API response into its photos.
///
/// Accepts the three shapes the photo endpoints answer with: a list of photos
/// (`/photos`, `/photos/random?count=n`), a single photo (`/photos/:id`) and a
/// search page (`/search/photos`).
pub fn decode_photos<T: AsRef<str>>(text: T) -> Result<Vec<Photo>> {
    let value: Value = serde_json::from_str(text.as_ref())?;

    match &value {
        Value::Array(items) => items.iter().map(Photo::from_value).collect(),

        Value::Object(map) if map.contains_key("results") => {
            Ok(SearchResults::from_value(&value)?.into_results())
        }

        _ => Ok(vec![Photo::from_value(&value)?]),
    }
}
