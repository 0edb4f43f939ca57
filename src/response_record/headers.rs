use std::ops::{Deref, DerefMut};

use http::HeaderMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Header names keep the case they were supplied with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseHeaders(pub IndexMap<String, String>);

impl ResponseHeaders {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get_all_ignore_case<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a String> + use<'a, 'n> {
        self.0
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    pub fn get_ignore_case(&self, name: &str) -> Option<&String> {
        self.get_all_ignore_case(name).next()
    }

    pub fn contains_ignore_case(&self, name: &str) -> bool {
        self.get_ignore_case(name).is_some()
    }
}

impl Deref for ResponseHeaders {
    type Target = IndexMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ResponseHeaders {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[(String, String); N]> for ResponseHeaders {
    fn from(arr: [(String, String); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for ResponseHeaders {
    fn from(arr: [(&str, &str); N]) -> Self {
        arr.into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl FromIterator<(String, String)> for ResponseHeaders {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut map = IndexMap::new();
        for (k, v) in iter {
            // A repeated name keeps its first position and takes the last value.
            map.insert(k, v);
        }
        ResponseHeaders(map)
    }
}

impl From<&HeaderMap> for ResponseHeaders {
    fn from(headers: &HeaderMap) -> Self {
        headers
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect()
    }
}
