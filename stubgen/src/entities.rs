use serde::{Deserialize, Serialize};

/// Ordered list of entity type names.
///
/// Order is significant: an entity only pairs with entities that come after
/// it, and the later entity is the one capitalized in the check name.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct EntityNameList {
    names: Vec<String>,
}

impl EntityNameList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

pub fn default_entities() -> EntityNameList {
    EntityNameList::new(["mirror", "portal"])
}
