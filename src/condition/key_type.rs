use {
    super::op::{self as condop, ConditionOp},
    crate::BuilderError,
    serde::{de, Deserialize, Deserializer, Serialize, Serializer},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// The value type of a condition key, as listed in the IAM service authorization reference.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConditionKeyType {
    String,
    Arn,
    Numeric,
    Date,
    IpAddress,
    Binary,
    Bool,
}

impl ConditionKeyType {
    /// The operator used for this key type when the caller does not name one.
    pub fn default_operator(&self) -> ConditionOp {
        match self {
            Self::String => condop::StringLike,
            Self::Arn => condop::ArnLike,
            Self::Numeric => condop::NumericEquals,
            Self::Date => condop::DateEquals,
            Self::IpAddress => condop::IpAddress,
            Self::Binary => condop::BinaryEquals,
            Self::Bool => condop::Bool,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Arn => "ARN",
            Self::Numeric => "Numeric",
            Self::Date => "Date",
            Self::IpAddress => "IPAddress",
            Self::Binary => "Binary",
            Self::Bool => "Bool",
        }
    }
}

impl Display for ConditionKeyType {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionKeyType {
    type Err = BuilderError;

    /// Parse a type name case-insensitively. Multivalued types (`ArrayOfString`, `ArrayOfARN`, ...) map to their
    /// element type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let scalar = lower.strip_prefix("arrayof").unwrap_or(&lower);

        match scalar {
            "string" => Ok(Self::String),
            "arn" => Ok(Self::Arn),
            "numeric" | "long" | "integer" => Ok(Self::Numeric),
            "date" => Ok(Self::Date),
            "ipaddress" => Ok(Self::IpAddress),
            "binary" => Ok(Self::Binary),
            "bool" | "boolean" => Ok(Self::Bool),
            _ => Err(BuilderError::InvalidConditionKeyType(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for ConditionKeyType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ConditionKeyType::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for ConditionKeyType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::ConditionKeyType,
        crate::condop,
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_parse() {
        assert_eq!(ConditionKeyType::from_str("String").unwrap(), ConditionKeyType::String);
        assert_eq!(ConditionKeyType::from_str("ArrayOfString").unwrap(), ConditionKeyType::String);
        assert_eq!(ConditionKeyType::from_str("ARN").unwrap(), ConditionKeyType::Arn);
        assert_eq!(ConditionKeyType::from_str("ArrayOfARN").unwrap(), ConditionKeyType::Arn);
        assert_eq!(ConditionKeyType::from_str("Long").unwrap(), ConditionKeyType::Numeric);
        assert_eq!(ConditionKeyType::from_str("IPAddress").unwrap(), ConditionKeyType::IpAddress);
        assert_eq!(ConditionKeyType::from_str("Boolean").unwrap(), ConditionKeyType::Bool);

        let e = ConditionKeyType::from_str("Tuple").unwrap_err();
        assert_eq!(e.to_string(), "Invalid condition key type: Tuple");
    }

    #[test_log::test]
    fn test_default_operator() {
        assert_eq!(ConditionKeyType::String.default_operator(), condop::StringLike);
        assert_eq!(ConditionKeyType::Arn.default_operator(), condop::ArnLike);
        assert_eq!(ConditionKeyType::Numeric.default_operator(), condop::NumericEquals);
        assert_eq!(ConditionKeyType::Date.default_operator(), condop::DateEquals);
        assert_eq!(ConditionKeyType::IpAddress.default_operator(), condop::IpAddress);
        assert_eq!(ConditionKeyType::Binary.default_operator(), condop::BinaryEquals);
        assert_eq!(ConditionKeyType::Bool.default_operator(), condop::Bool);
    }

    #[test_log::test]
    fn test_serde() {
        let t: ConditionKeyType = serde_json::from_str(r#""ArrayOfString""#).unwrap();
        assert_eq!(t, ConditionKeyType::String);
        assert_eq!(serde_json::to_string(&ConditionKeyType::IpAddress).unwrap(), r#""IPAddress""#);
    }
}
