use {
    log::debug,
    serde::{
        de::{self, value::SeqAccessDeserializer, Deserializer, SeqAccess, Unexpected, Visitor},
        Deserialize, Serialize, Serializer,
    },
    std::fmt::{Formatter, Result as FmtResult},
};

/// Implement Display for a given class by formatting it as pretty-printed JSON.
#[macro_export]
macro_rules! display_json {
    ($cls:ident) => {
        impl std::fmt::Display for $cls {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                let buf = Vec::new();
                let serde_formatter = ::serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut ser = ::serde_json::Serializer::with_formatter(buf, serde_formatter);
                match ::serde::Serialize::serialize(self, &mut ser) {
                    Ok(()) => (),
                    Err(e) => {
                        ::log::error!("Failed to serialize: {}", e);
                        return Err(::std::fmt::Error {});
                    }
                };
                match std::str::from_utf8(&ser.into_inner()) {
                    Ok(s) => write!(f, "{}", s),
                    Err(e) => {
                        ::log::error!("JSON serialization contained non-UTF-8 characters: {}", e);
                        Err(::std::fmt::Error {})
                    }
                }
            }
        }
    };
}

/// Implement FromStr for a given class by parsing it as JSON.
#[macro_export]
macro_rules! from_str_json {
    ($cls:ident) => {
        impl ::std::str::FromStr for $cls {
            type Err = ::serde_json::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match ::serde_json::from_str::<Self>(s) {
                    Ok(result) => Ok(result),
                    Err(e) => {
                        ::log::debug!("Failed to parse: {}: {:?}", s, e);
                        Err(e)
                    }
                }
            }
        }
    };
}

/// StringList allows a JSON field to be a string or list of strings. Condition values use this representation: a
/// single value is written as a bare string, multiple values as an array.
#[derive(Clone, Debug)]
pub enum StringList {
    Single(String),
    List(Vec<String>),
}

impl StringList {
    pub fn to_vec(&self) -> Vec<&str> {
        match self {
            Self::Single(s) => vec![s.as_str()],
            Self::List(s_list) => s_list.iter().map(|s| s.as_str()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(_) => false,
            Self::List(s_list) => s_list.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::List(s_list) => s_list.len(),
        }
    }

    /// Convert each element of an iterator into a string and collect the results as a list.
    pub fn from_iter_display<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Self::List(iter.into_iter().map(|v| v.to_string()).collect())
    }
}

impl PartialEq<StringList> for StringList {
    fn eq(&self, other: &StringList) -> bool {
        match (self, other) {
            (Self::Single(my_el), Self::Single(other_el)) => my_el == other_el,
            (Self::Single(my_el), Self::List(other_el)) => other_el.len() == 1 && my_el == &other_el[0],
            (Self::List(my_el), Self::Single(other_el)) => my_el.len() == 1 && &my_el[0] == other_el,
            (Self::List(my_el), Self::List(other_el)) => my_el == other_el,
        }
    }
}

impl Eq for StringList {}

impl From<&str> for StringList {
    fn from(v: &str) -> Self {
        Self::Single(v.to_string())
    }
}

impl From<String> for StringList {
    fn from(v: String) -> Self {
        Self::Single(v)
    }
}

impl From<&String> for StringList {
    fn from(v: &String) -> Self {
        Self::Single(v.clone())
    }
}

impl From<Vec<String>> for StringList {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

impl From<Vec<&str>> for StringList {
    fn from(v: Vec<&str>) -> Self {
        Self::List(v.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for StringList {
    fn from(v: &[&str]) -> Self {
        Self::List(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for StringList {
    fn from(v: [&str; N]) -> Self {
        Self::List(v.iter().map(|s| s.to_string()).collect())
    }
}

struct StringListVisitor {}

impl<'de> Visitor<'de> for StringListVisitor {
    type Value = StringList;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "string or list of strings")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        let deserializer = SeqAccessDeserializer::new(access);
        match Vec::<String>::deserialize(deserializer) {
            Ok(l) => Ok(StringList::List(l)),
            Err(e) => {
                debug!("Failed to deserialize string list: {:?}", e);
                Err(<A::Error as de::Error>::invalid_value(Unexpected::Seq, &self))
            }
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(StringList::Single(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for StringList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StringListVisitor {})
    }
}

impl Serialize for StringList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Single(v) => v.serialize(serializer),
            Self::List(v) => v.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::serutil::StringList,
        pretty_assertions::{assert_eq, assert_ne},
        serde::Serialize,
        std::panic::catch_unwind,
    };

    #[test_log::test]
    fn test_basic_ops() {
        let sl1a = StringList::from("a");
        let sl1b = StringList::from(vec!["a"]);
        let sl2 = StringList::from(["a", "b"]);
        let sl3 = StringList::List(vec![]);

        assert_eq!(sl1a, sl1b);
        assert_eq!(sl1b, sl1a);
        assert_ne!(sl1a, sl2);
        assert_ne!(sl2, sl1b);
        assert_eq!(sl2, StringList::from(vec!["a".to_string(), "b".to_string()]));

        assert!(!sl1a.is_empty());
        assert!(sl3.is_empty());
        assert_eq!(sl1a.len(), 1);
        assert_eq!(sl2.len(), 2);
        assert_eq!(sl3.len(), 0);
        assert_eq!(sl2.to_vec(), vec!["a", "b"]);
        assert_eq!(StringList::from_iter_display([1, 2, 3]).to_vec(), vec!["1", "2", "3"]);
    }

    #[test_log::test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&StringList::from("x")).unwrap(), r#""x""#);
        assert_eq!(serde_json::to_string(&StringList::from(["x", "y"])).unwrap(), r#"["x","y"]"#);

        let sl: StringList = serde_json::from_str(r#""x""#).unwrap();
        assert_eq!(sl, StringList::Single("x".to_string()));
        let sl: StringList = serde_json::from_str(r#"["x", "y"]"#).unwrap();
        assert_eq!(sl.len(), 2);

        let e = serde_json::from_str::<StringList>("[1]").unwrap_err();
        assert!(e.to_string().starts_with("invalid value: sequence, expected string or list of strings"));
    }

    #[derive(Clone, Debug)]
    struct SerFail {}
    display_json!(SerFail);

    impl Serialize for SerFail {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("Serialization failed"))
        }
    }

    #[test_log::test]
    fn test_ser_fail() {
        let e = catch_unwind(|| SerFail {}.to_string()).unwrap_err();
        let e2 = e.downcast::<String>().unwrap();
        assert!((*e2).contains("a Display implementation returned an error"));
    }
}
