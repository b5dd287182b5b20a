mod arn;
mod binary;
mod boolean;
mod date;
mod ipaddr;
mod key_type;
mod null;
mod numeric;

#[allow(non_upper_case_globals)]
pub mod op;

mod operator;
mod string;
mod variant;

pub use {
    binary::binary_value,
    key_type::ConditionKeyType,
    op::ConditionOp,
    operator::{Operator, SetQualifier},
};
use {
    crate::{from_str_json, serutil::StringList},
    log::trace,
    serde::{de::Deserializer, ser::Serializer, Deserialize, Serialize},
    std::{
        borrow::Borrow,
        collections::{
            btree_map::{Iter, Keys},
            BTreeMap,
        },
        iter::IntoIterator,
        ops::Index,
    },
};

/// Condition keys and their values under a single operator.
pub type ConditionMap = BTreeMap<String, StringList>;

/// The `Condition` block of a statement: operator -> (condition key -> value(s)).
///
/// Operators and keys are kept in sorted order so serialization is deterministic.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Condition {
    map: BTreeMap<Operator, ConditionMap>,
}

from_str_json!(Condition);

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::deserialize(deserializer)?;

        Ok(Self {
            map,
        })
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.map.serialize(serializer)
    }
}

impl Condition {
    #[inline]
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Record a single condition: `key` tested against `value` using `op`.
    ///
    /// Setting a key that already exists under the same operator replaces its value, and the previous value is
    /// returned. The same key under a different operator is an independent entry.
    pub fn insert_value<O, K, V>(&mut self, op: O, key: K, value: V) -> Option<StringList>
    where
        O: Into<Operator>,
        K: Into<String>,
        V: Into<StringList>,
    {
        let op = op.into();
        let key = key.into();
        trace!("Setting condition {} on {}", op, key);
        self.map.entry(op).or_default().insert(key, value.into())
    }

    /// Look up the value recorded for `key` under `op`.
    pub fn value<Q>(&self, op: &Q, key: &str) -> Option<&StringList>
    where
        Operator: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.get(op).and_then(|cmap| cmap.get(key))
    }

    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Operator: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.contains_key(key)
    }

    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&ConditionMap>
    where
        Operator: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.get(key)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Operator, ConditionMap> {
        self.map.iter()
    }

    #[inline]
    pub fn keys(&self) -> Keys<'_, Operator, ConditionMap> {
        self.map.keys()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }
}

impl Default for Condition {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<Q> Index<&Q> for Condition
where
    Operator: Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = ConditionMap;

    fn index(&self, key: &Q) -> &ConditionMap {
        self.map.index(key)
    }
}

impl<'a> IntoIterator for &'a Condition {
    type Item = (&'a Operator, &'a ConditionMap);
    type IntoIter = Iter<'a, Operator, ConditionMap>;
    fn into_iter(self) -> Iter<'a, Operator, ConditionMap> {
        self.map.iter()
    }
}

#[cfg(test)]
mod test {
    use {
        crate::{condop, serutil::StringList, Condition, ConditionMap, Operator},
        indoc::indoc,
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_insert_value() {
        let mut c = Condition::new();
        assert!(c.is_empty());

        assert_eq!(c.insert_value(condop::StringEquals, "aws:username", "alice"), None);
        assert_eq!(c.insert_value(condop::StringEquals, "aws:username", "bob"), Some(StringList::from("alice")));
        assert_eq!(c.len(), 1);
        assert_eq!(c.value("StringEquals", "aws:username"), Some(&StringList::from("bob")));

        // A different operator on the same key is a separate entry.
        c.insert_value(condop::StringLike, "aws:username", "b*");
        assert_eq!(c.len(), 2);
        assert_eq!(c.value(&Operator::from(condop::StringEquals), "aws:username"), Some(&StringList::from("bob")));
        assert_eq!(c.value("StringLike", "aws:username"), Some(&StringList::from("b*")));
        assert_eq!(c.value("StringLike", "aws:userid"), None);
        assert_eq!(c.value("Bool", "aws:username"), None);

        c.insert_value(Operator::for_any_value(condop::StringEquals), "aws:TagKeys", ["a", "b"]);
        assert!(c.contains_key("ForAnyValue:StringEquals"));
        assert_eq!(c["ForAnyValue:StringEquals"]["aws:TagKeys"].to_vec(), vec!["a", "b"]);
    }

    #[test_log::test]
    fn test_lookups() {
        assert_eq!(Condition::default(), Condition::new());

        let mut c = Condition::new();
        c.insert_value(condop::StringEquals, "a", "A");
        c.insert_value(condop::StringEquals, "b", "B");
        c.insert_value(condop::NumericEquals, "c", 3);
        c.insert_value(condop::Bool, "aws:SecureTransport", true);
        assert_eq!(c.len(), 3);

        let mut cmap = ConditionMap::new();
        cmap.insert("a".to_string(), StringList::from("A"));
        cmap.insert("b".to_string(), StringList::from("B"));
        assert_eq!(c.get("StringEquals"), Some(&cmap));
        assert_eq!(c["NumericEquals"]["c"], StringList::from("3"));
        assert!(c.get("Null").is_none());
        assert!(!c.contains_key("Null"));

        assert_eq!(c.keys().map(|k| k.as_str()).collect::<Vec<_>>(), vec!["Bool", "NumericEquals", "StringEquals"]);
        let ops = (&c).into_iter().map(|(k, _)| k.to_string()).collect::<Vec<_>>();
        assert_eq!(ops, vec!["Bool", "NumericEquals", "StringEquals"]);
        assert_eq!(c.iter().map(|(_, cmap)| cmap.len()).sum::<usize>(), 4);
    }

    #[test_log::test]
    fn test_serde() {
        let mut c = Condition::new();
        c.insert_value(condop::StringLike, "dax:EnclosingOperation", ["GetItem", "Query"]);
        c.insert_value(condop::Bool, "aws:SecureTransport", true);
        c.insert_value(condop::NumericLessThan, "aws:MultiFactorAuthAge", 3600);

        let json = serde_json::to_string_pretty(&c).unwrap();
        assert_eq!(
            json,
            indoc! {r#"
            {
              "Bool": {
                "aws:SecureTransport": "true"
              },
              "NumericLessThan": {
                "aws:MultiFactorAuthAge": "3600"
              },
              "StringLike": {
                "dax:EnclosingOperation": [
                  "GetItem",
                  "Query"
                ]
              }
            }"#}
        );

        let c2 = Condition::from_str(&json).unwrap();
        assert_eq!(c, c2);
        assert!(Condition::from_str(r#"{"Bool": 1}"#).is_err());
    }
}
