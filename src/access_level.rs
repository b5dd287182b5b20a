use {
    crate::BuilderError,
    serde::{de, Deserialize, Deserializer, Serialize, Serializer},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// The access level classification IAM assigns to every action.
///
/// These are classification tags only; no severity ordering between them is implied.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AccessLevel {
    List,
    Read,
    Write,
    PermissionsManagement,
    Tagging,
}

impl AccessLevel {
    /// All access levels, in the order the IAM documentation lists them.
    pub const ALL: [AccessLevel; 5] =
        [Self::List, Self::Read, Self::Write, Self::PermissionsManagement, Self::Tagging];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Read => "Read",
            Self::Write => "Write",
            Self::PermissionsManagement => "PermissionsManagement",
            Self::Tagging => "Tagging",
        }
    }
}

impl Display for AccessLevel {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "List" => Ok(Self::List),
            "Read" => Ok(Self::Read),
            "Write" => Ok(Self::Write),
            // The IAM documentation tables spell this one out.
            "PermissionsManagement" | "Permissions management" => Ok(Self::PermissionsManagement),
            "Tagging" => Ok(Self::Tagging),
            _ => Err(BuilderError::InvalidAccessLevel(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for AccessLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AccessLevel::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for AccessLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use {crate::AccessLevel, pretty_assertions::assert_eq, std::str::FromStr};

    #[test_log::test]
    fn test_round_trip_names() {
        for level in AccessLevel::ALL {
            assert_eq!(AccessLevel::from_str(&level.to_string()).unwrap(), level);
        }

        assert_eq!(AccessLevel::from_str("Permissions management").unwrap(), AccessLevel::PermissionsManagement);
    }

    #[test_log::test]
    fn test_bad_level() {
        let e = AccessLevel::from_str("Admin").unwrap_err();
        assert_eq!(e.to_string(), "Invalid access level: Admin");

        let e = serde_json::from_str::<AccessLevel>(r#""read""#).unwrap_err();
        assert!(e.to_string().starts_with("Invalid access level: read"));

        let level = serde_json::from_str::<AccessLevel>(r#""Tagging""#).unwrap();
        assert_eq!(level, AccessLevel::Tagging);
        assert_eq!(serde_json::to_string(&AccessLevel::PermissionsManagement).unwrap(), r#""PermissionsManagement""#);
    }
}
