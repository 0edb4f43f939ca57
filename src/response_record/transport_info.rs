use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransportInfo(pub Map<String, Value>);

impl Deref for TransportInfo {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for TransportInfo {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[(&str, Value); N]> for TransportInfo {
    fn from(arr: [(&str, Value); N]) -> Self {
        TransportInfo(
            arr.into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }
}

impl From<Map<String, Value>> for TransportInfo {
    fn from(map: Map<String, Value>) -> Self {
        TransportInfo(map)
    }
}
