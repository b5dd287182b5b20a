use {
    super::{
        arn::ArnCmp,
        binary::BINARY_DISPLAY_NAMES,
        boolean::BOOL_DISPLAY_NAMES,
        date::DateCmp,
        ipaddr::IP_ADDRESS_DISPLAY_NAMES,
        null::NULL_DISPLAY_NAME,
        numeric::NumericCmp,
        string::StringCmp,
        variant::Variant,
    },
    crate::BuilderError,
    serde::{de, de::Deserializer, ser::Serializer, Deserialize, Serialize},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// An operator for a condition clause.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ConditionOp {
    /// Operators for ARNs.
    Arn(ArnCmp, Variant),

    /// Operators for binary values. Variant here is only allowed to be [Variant::None] or [Variant::IfExists].
    Binary(Variant),

    /// Operators on boolean values. Variant here is only allowed to be [Variant::None] or [Variant::IfExists].
    Bool(Variant),

    /// Operators for date/time values.
    Date(DateCmp, Variant),

    /// Operators on IP addresses and networks.
    IpAddress(Variant),

    /// Operator on the presence/absence of a value.
    Null,

    /// Operators on numeric values.
    Numeric(NumericCmp, Variant),

    /// Operators on string values.
    String(StringCmp, Variant),
}

/// Declares one `pub const` per operator plus the [ALL] table used for parsing.
macro_rules! condition_ops {
    ($($name:ident => $variant:ident $(($($arg:expr),+))?),* $(,)?) => {
        $(
            #[doc = concat!("The `", stringify!($name), "` operator.")]
            pub const $name: ConditionOp = ConditionOp::$variant $(($($arg),+))?;
        )*

        /// Every condition operator.
        pub const ALL: &[ConditionOp] = &[$($name),*];
    };
}

condition_ops! {
    ArnEquals => Arn(ArnCmp::Equals, Variant::None),
    ArnEqualsIfExists => Arn(ArnCmp::Equals, Variant::IfExists),
    ArnNotEquals => Arn(ArnCmp::Equals, Variant::Negated),
    ArnNotEqualsIfExists => Arn(ArnCmp::Equals, Variant::IfExistsNegated),
    ArnLike => Arn(ArnCmp::Like, Variant::None),
    ArnLikeIfExists => Arn(ArnCmp::Like, Variant::IfExists),
    ArnNotLike => Arn(ArnCmp::Like, Variant::Negated),
    ArnNotLikeIfExists => Arn(ArnCmp::Like, Variant::IfExistsNegated),
    BinaryEquals => Binary(Variant::None),
    BinaryEqualsIfExists => Binary(Variant::IfExists),
    Bool => Bool(Variant::None),
    BoolIfExists => Bool(Variant::IfExists),
    DateEquals => Date(DateCmp::Equals, Variant::None),
    DateEqualsIfExists => Date(DateCmp::Equals, Variant::IfExists),
    DateNotEquals => Date(DateCmp::Equals, Variant::Negated),
    DateNotEqualsIfExists => Date(DateCmp::Equals, Variant::IfExistsNegated),
    DateLessThan => Date(DateCmp::LessThan, Variant::None),
    DateLessThanIfExists => Date(DateCmp::LessThan, Variant::IfExists),
    DateGreaterThanEquals => Date(DateCmp::LessThan, Variant::Negated),
    DateGreaterThanEqualsIfExists => Date(DateCmp::LessThan, Variant::IfExistsNegated),
    DateLessThanEquals => Date(DateCmp::LessThanEquals, Variant::None),
    DateLessThanEqualsIfExists => Date(DateCmp::LessThanEquals, Variant::IfExists),
    DateGreaterThan => Date(DateCmp::LessThanEquals, Variant::Negated),
    DateGreaterThanIfExists => Date(DateCmp::LessThanEquals, Variant::IfExistsNegated),
    IpAddress => IpAddress(Variant::None),
    IpAddressIfExists => IpAddress(Variant::IfExists),
    NotIpAddress => IpAddress(Variant::Negated),
    NotIpAddressIfExists => IpAddress(Variant::IfExistsNegated),
    Null => Null,
    NumericEquals => Numeric(NumericCmp::Equals, Variant::None),
    NumericEqualsIfExists => Numeric(NumericCmp::Equals, Variant::IfExists),
    NumericNotEquals => Numeric(NumericCmp::Equals, Variant::Negated),
    NumericNotEqualsIfExists => Numeric(NumericCmp::Equals, Variant::IfExistsNegated),
    NumericLessThan => Numeric(NumericCmp::LessThan, Variant::None),
    NumericLessThanIfExists => Numeric(NumericCmp::LessThan, Variant::IfExists),
    NumericGreaterThanEquals => Numeric(NumericCmp::LessThan, Variant::Negated),
    NumericGreaterThanEqualsIfExists => Numeric(NumericCmp::LessThan, Variant::IfExistsNegated),
    NumericLessThanEquals => Numeric(NumericCmp::LessThanEquals, Variant::None),
    NumericLessThanEqualsIfExists => Numeric(NumericCmp::LessThanEquals, Variant::IfExists),
    NumericGreaterThan => Numeric(NumericCmp::LessThanEquals, Variant::Negated),
    NumericGreaterThanIfExists => Numeric(NumericCmp::LessThanEquals, Variant::IfExistsNegated),
    StringEquals => String(StringCmp::Equals, Variant::None),
    StringEqualsIfExists => String(StringCmp::Equals, Variant::IfExists),
    StringNotEquals => String(StringCmp::Equals, Variant::Negated),
    StringNotEqualsIfExists => String(StringCmp::Equals, Variant::IfExistsNegated),
    StringEqualsIgnoreCase => String(StringCmp::EqualsIgnoreCase, Variant::None),
    StringEqualsIgnoreCaseIfExists => String(StringCmp::EqualsIgnoreCase, Variant::IfExists),
    StringNotEqualsIgnoreCase => String(StringCmp::EqualsIgnoreCase, Variant::Negated),
    StringNotEqualsIgnoreCaseIfExists => String(StringCmp::EqualsIgnoreCase, Variant::IfExistsNegated),
    StringLike => String(StringCmp::Like, Variant::None),
    StringLikeIfExists => String(StringCmp::Like, Variant::IfExists),
    StringNotLike => String(StringCmp::Like, Variant::Negated),
    StringNotLikeIfExists => String(StringCmp::Like, Variant::IfExistsNegated),
}

impl ConditionOp {
    /// The IAM name of this operator, e.g. `StringNotEqualsIfExists`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arn(cmp, variant) => cmp.display_name(variant),
            Self::Binary(variant) => BINARY_DISPLAY_NAMES[variant.as_usize()],
            Self::Bool(variant) => BOOL_DISPLAY_NAMES[variant.as_usize()],
            Self::Date(cmp, variant) => cmp.display_name(variant),
            Self::IpAddress(variant) => IP_ADDRESS_DISPLAY_NAMES[variant.as_usize()],
            Self::Null => NULL_DISPLAY_NAME,
            Self::Numeric(cmp, variant) => cmp.display_name(variant),
            Self::String(cmp, variant) => cmp.display_name(variant),
        }
    }
}

impl PartialEq<str> for ConditionOp {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl Display for ConditionOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ConditionOp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ConditionOp::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for ConditionOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl ConditionOp {
    /// The `...IfExists` form of this operator. `Null` has no such form and is returned unchanged.
    pub fn if_exists(self) -> Self {
        match self {
            Self::Arn(cmp, variant) => Self::Arn(cmp, variant.with_if_exists()),
            Self::Binary(variant) => Self::Binary(variant.with_if_exists()),
            Self::Bool(variant) => Self::Bool(variant.with_if_exists()),
            Self::Date(cmp, variant) => Self::Date(cmp, variant.with_if_exists()),
            Self::IpAddress(variant) => Self::IpAddress(variant.with_if_exists()),
            Self::Null => Self::Null,
            Self::Numeric(cmp, variant) => Self::Numeric(cmp, variant.with_if_exists()),
            Self::String(cmp, variant) => Self::String(cmp, variant.with_if_exists()),
        }
    }

    /// Indicates whether this is an `...IfExists` operator.
    pub fn is_if_exists(&self) -> bool {
        match self {
            Self::Arn(_, variant)
            | Self::Binary(variant)
            | Self::Bool(variant)
            | Self::Date(_, variant)
            | Self::IpAddress(variant)
            | Self::Numeric(_, variant)
            | Self::String(_, variant) => variant.if_exists(),
            Self::Null => false,
        }
    }
}

impl FromStr for ConditionOp {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .find(|op| op.as_str() == s)
            .copied()
            .ok_or_else(|| BuilderError::InvalidConditionOperator(s.to_string()))
    }
}
