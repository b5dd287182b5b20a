mod template;

use {
    serde::{
        de::{self, SeqAccess, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    },
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        ops::Index,
        slice::Iter,
    },
};

pub use template::{
    ArnDefaults, ArnDefaultsBuilder, ArnDefaultsBuilderError, ArnScope, ArnScopeBuilder, ArnScopeBuilderError,
    ArnTemplate,
};

/// A resource element of a statement: either the wildcard `*` or an ARN (or ARN pattern).
///
/// ARNs are carried verbatim; they are not checked for well-formedness.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Resource {
    Any,
    Arn(String),
}

impl Resource {
    #[inline]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => "*",
            Self::Arn(arn) => arn,
        }
    }
}

impl From<&str> for Resource {
    fn from(s: &str) -> Self {
        if s == "*" {
            Self::Any
        } else {
            Self::Arn(s.to_string())
        }
    }
}

impl From<String> for Resource {
    fn from(s: String) -> Self {
        if s == "*" {
            Self::Any
        } else {
            Self::Arn(s)
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Resource::from(String::deserialize(deserializer)?))
    }
}

/// An ordered, duplicate-free list of resources.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResourceList {
    resources: Vec<Resource>,
}

impl ResourceList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The list containing only the wildcard resource.
    pub fn any() -> Self {
        Self {
            resources: vec![Resource::Any],
        }
    }

    /// Add a resource. Returns `true` if it was not already present.
    pub fn insert<R: Into<Resource>>(&mut self, resource: R) -> bool {
        let resource = resource.into();
        if self.resources.contains(&resource) {
            false
        } else {
            self.resources.push(resource);
            true
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Resource> {
        self.resources.iter()
    }

    pub fn to_vec(&self) -> Vec<&str> {
        self.resources.iter().map(|r| r.as_str()).collect()
    }
}

impl<R: Into<Resource>> Extend<R> for ResourceList {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        for resource in iter {
            self.insert(resource);
        }
    }
}

impl<R: Into<Resource>> FromIterator<R> for ResourceList {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl Index<usize> for ResourceList {
    type Output = Resource;

    fn index(&self, index: usize) -> &Resource {
        &self.resources[index]
    }
}

impl Serialize for ResourceList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.resources.serialize(serializer)
    }
}

struct ResourceListVisitor;

impl<'de> Visitor<'de> for ResourceListVisitor {
    type Value = ResourceList;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "a resource or a list of resources")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ResourceList::from_iter([v]))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut result = ResourceList::new();
        while let Some(resource) = access.next_element::<String>()? {
            result.insert(resource);
        }

        Ok(result)
    }
}

impl<'de> Deserialize<'de> for ResourceList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ResourceListVisitor {})
    }
}
