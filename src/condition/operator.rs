use {
    super::op::ConditionOp,
    crate::BuilderError,
    serde::{Deserialize, Serialize},
    std::{
        borrow::Borrow,
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// Set operators for multivalued condition keys.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SetQualifier {
    ForAnyValue,
    ForAllValues,
}

impl SetQualifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ForAnyValue => "ForAnyValue",
            Self::ForAllValues => "ForAllValues",
        }
    }
}

impl Display for SetQualifier {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// The operator key of a condition block as it appears in the statement JSON, e.g. `StringEquals` or
/// `ForAnyValue:StringLike`.
///
/// Operators built from a [ConditionOp] are always well-formed. [Operator::custom] accepts any string and does not
/// check it; a malformed name is emitted into the statement as-is.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Operator(String);

impl Operator {
    pub fn new(qualifier: Option<SetQualifier>, op: ConditionOp) -> Self {
        match qualifier {
            None => Self(op.as_str().to_string()),
            Some(qualifier) => Self(format!("{}:{}", qualifier, op)),
        }
    }

    #[inline]
    pub fn for_any_value(op: ConditionOp) -> Self {
        Self::new(Some(SetQualifier::ForAnyValue), op)
    }

    #[inline]
    pub fn for_all_values(op: ConditionOp) -> Self {
        Self::new(Some(SetQualifier::ForAllValues), op)
    }

    /// An operator name taken verbatim.
    pub fn custom<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split this operator into its set qualifier and base operator.
    ///
    /// # Errors
    ///
    /// Returns [BuilderError::InvalidConditionOperator] if either part is not a recognized IAM name.
    pub fn parse(&self) -> Result<(Option<SetQualifier>, ConditionOp), BuilderError> {
        let (qualifier, op) = match self.0.split_once(':') {
            None => (None, self.0.as_str()),
            Some(("ForAnyValue", op)) => (Some(SetQualifier::ForAnyValue), op),
            Some(("ForAllValues", op)) => (Some(SetQualifier::ForAllValues), op),
            Some(_) => return Err(BuilderError::InvalidConditionOperator(self.0.clone())),
        };

        match ConditionOp::from_str(op) {
            Ok(op) => Ok((qualifier, op)),
            Err(_) => Err(BuilderError::InvalidConditionOperator(self.0.clone())),
        }
    }
}

impl From<ConditionOp> for Operator {
    fn from(op: ConditionOp) -> Self {
        Self::new(None, op)
    }
}

impl From<&str> for Operator {
    fn from(name: &str) -> Self {
        Self::custom(name)
    }
}

impl From<String> for Operator {
    fn from(name: String) -> Self {
        Self::custom(name)
    }
}

impl Borrow<str> for Operator {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{Operator, SetQualifier},
        crate::condop,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_construct() {
        assert_eq!(Operator::from(condop::StringEquals).as_str(), "StringEquals");
        assert_eq!(Operator::for_any_value(condop::StringEquals).to_string(), "ForAnyValue:StringEquals");
        assert_eq!(Operator::for_all_values(condop::StringLikeIfExists).as_str(), "ForAllValues:StringLikeIfExists");
        assert_eq!(Operator::from("Whatever"), Operator::custom("Whatever".to_string()));
    }

    #[test_log::test]
    fn test_parse() {
        assert_eq!(Operator::from(condop::Bool).parse().unwrap(), (None, condop::Bool));
        assert_eq!(
            Operator::from("ForAnyValue:StringEquals").parse().unwrap(),
            (Some(SetQualifier::ForAnyValue), condop::StringEquals)
        );

        let e = Operator::from("ForSomeValues:StringEquals").parse().unwrap_err();
        assert_eq!(e.to_string(), "Invalid condition operator: ForSomeValues:StringEquals");
        let e = Operator::from("ForAllValues:Nope").parse().unwrap_err();
        assert_eq!(e.to_string(), "Invalid condition operator: ForAllValues:Nope");
    }

    #[test_log::test]
    fn test_serde() {
        let op = Operator::for_any_value(condop::ArnLike);
        assert_eq!(serde_json::to_string(&op).unwrap(), r#""ForAnyValue:ArnLike""#);
        let op2: Operator = serde_json::from_str(r#""ForAnyValue:ArnLike""#).unwrap();
        assert_eq!(op, op2);
    }
}
