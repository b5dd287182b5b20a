use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Errors raised while parsing typed builder inputs or looking up registry entries by name.
///
/// The builder itself is permissive: action names, ARNs, and operator strings are never validated once they reach a
/// statement.
#[derive(Debug, Eq, PartialEq)]
pub enum BuilderError {
    InvalidAccessLevel(String),
    InvalidConditionKeyType(String),
    InvalidConditionOperator(String),
    InvalidPattern(String),
    InvalidPolicyVersion(String),
    UnknownResourceType(String),
}

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::InvalidAccessLevel(level) => write!(f, "Invalid access level: {}", level),
            Self::InvalidConditionKeyType(key_type) => write!(f, "Invalid condition key type: {}", key_type),
            Self::InvalidConditionOperator(operator) => write!(f, "Invalid condition operator: {}", operator),
            Self::InvalidPattern(pattern) => write!(f, "Invalid action pattern: {}", pattern),
            Self::InvalidPolicyVersion(version) => write!(f, "Invalid policy version: {}", version),
            Self::UnknownResourceType(name) => write!(f, "Unknown resource type: {}", name),
        }
    }
}

impl Error for BuilderError {}

#[cfg(test)]
mod tests {
    use {
        crate::BuilderError,
        pretty_assertions::{assert_eq, assert_ne},
    };

    #[test_log::test]
    fn test_display() {
        let _ = format!("{:?}", BuilderError::InvalidAccessLevel("foo".to_string()));
        assert_eq!(BuilderError::InvalidAccessLevel("foo".to_string()).to_string(), "Invalid access level: foo");
        assert_eq!(
            BuilderError::InvalidConditionKeyType("foo".to_string()).to_string(),
            "Invalid condition key type: foo"
        );
        assert_eq!(
            BuilderError::InvalidConditionOperator("foo".to_string()).to_string(),
            "Invalid condition operator: foo"
        );
        assert_eq!(BuilderError::InvalidPattern("(".to_string()).to_string(), "Invalid action pattern: (");
        assert_eq!(BuilderError::InvalidPolicyVersion("foo".to_string()).to_string(), "Invalid policy version: foo");
        assert_eq!(
            BuilderError::UnknownResourceType("cluster".to_string()).to_string(),
            "Unknown resource type: cluster"
        );
    }

    #[test_log::test]
    fn test_eq() {
        let e1a = BuilderError::InvalidAccessLevel("foo".to_string());
        let e1b = BuilderError::InvalidAccessLevel("foo".to_string());
        let e2 = BuilderError::UnknownResourceType("foo".to_string());
        let e3 = BuilderError::InvalidAccessLevel("bar".to_string());

        assert_eq!(e1a, e1b);
        assert_ne!(e1a, e2);
        assert_ne!(e1a, e3);
        assert_ne!(e2, e3);
    }
}
