//! Maps keyed by a closed set of roles, carried on the wire as plain JSON
//! objects of URL strings.
//!
//! Decoding is lossy: entries whose key is not one of the known roles, or whose
//! value is not a URL, are dropped so that new roles added by the API do not
//! break older clients. Encoding never drops anything.

use std::{
    collections::{BTreeMap, HashMap},
    hash::Hash,
};

use log::trace;
use serde::{Serialize, Serializer};
use url::Url;

pub type UrlMap<K> = HashMap<K, Url>;

/// A closed set of map keys, each with a fixed wire spelling.
pub trait WireKey: Copy + Eq + Hash + Sized + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn from_wire(wire: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == wire)
    }
}

pub fn decode<K, I, S>(wire: I) -> UrlMap<K>
where
    K: WireKey,
    I: IntoIterator<Item = (S, S)>,
    S: AsRef<str>,
{
    wire.into_iter()
        .filter_map(|(key, value)| {
            let (key, value) = (key.as_ref(), value.as_ref());

            let Some(kind) = K::from_wire(key) else {
                trace!("Dropping unknown key `{key}`");
                return None;
            };

            match Url::parse(value) {
                Ok(url) => Some((kind, url)),
                Err(err) => {
                    trace!("Dropping `{key}`: {err}");
                    None
                }
            }
        })
        .collect()
}

pub fn encode<K: WireKey>(map: &UrlMap<K>) -> BTreeMap<&'static str, &str> {
    map.iter()
        .map(|(kind, url)| (kind.as_str(), url.as_str()))
        .collect()
}

pub(crate) fn serialize<K, S>(map: &UrlMap<K>, serializer: S) -> Result<S::Ok, S::Error>
where
    K: WireKey,
    S: Serializer,
{
    encode(map).serialize(serializer)
}
