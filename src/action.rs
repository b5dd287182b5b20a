use {
    serde::{
        de::{Deserializer, SeqAccess, Visitor},
        ser::{SerializeSeq, Serializer},
        Deserialize, Serialize,
    },
    std::{
        fmt::{Formatter, Result as FmtResult},
        ops::Index,
        slice::Iter,
    },
};

/// Qualify a bare action name with a service prefix.
///
/// Names that already carry a service prefix (contain a `:`) are returned unchanged, as is the name when the prefix is
/// empty.
pub fn qualify(service_prefix: &str, action: &str) -> String {
    if service_prefix.is_empty() || action.contains(':') {
        action.to_string()
    } else {
        format!("{}:{}", service_prefix, action)
    }
}

/// An ordered list of fully-qualified action strings with set membership semantics: inserting an action that is
/// already present leaves the list unchanged.
///
/// Action strings are not validated.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ActionList {
    actions: Vec<String>,
}

impl ActionList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an action. Returns `true` if it was not already present.
    pub fn insert<S: Into<String>>(&mut self, action: S) -> bool {
        let action = action.into();
        if self.actions.contains(&action) {
            false
        } else {
            self.actions.push(action);
            true
        }
    }

    #[inline]
    pub fn contains(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, String> {
        self.actions.iter()
    }

    pub fn to_vec(&self) -> Vec<&str> {
        self.actions.iter().map(|a| a.as_str()).collect()
    }
}

impl<S: Into<String>> Extend<S> for ActionList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for action in iter {
            self.insert(action);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ActionList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl Index<usize> for ActionList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.actions[index]
    }
}

impl<'a> IntoIterator for &'a ActionList {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Iter<'a, String> {
        self.actions.iter()
    }
}

impl Serialize for ActionList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.actions.len()))?;
        for action in &self.actions {
            seq.serialize_element(action)?;
        }
        seq.end()
    }
}

struct ActionListVisitor;

impl<'de> Visitor<'de> for ActionListVisitor {
    type Value = ActionList;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "a string or a list of strings")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ActionList::from_iter([v]))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut result = ActionList::new();
        while let Some(action) = access.next_element::<String>()? {
            result.insert(action);
        }

        Ok(result)
    }
}

impl<'de> Deserialize<'de> for ActionList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ActionListVisitor)
    }
}
