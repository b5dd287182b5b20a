use {
    crate::{display_json, from_str_json, BuilderError, Statement},
    derive_builder::Builder,
    serde::{
        de,
        de::{value::MapAccessDeserializer, Deserializer, MapAccess, SeqAccess, Visitor},
        ser::{SerializeMap, Serializer},
        Deserialize, Serialize,
    },
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// Policy versions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PolicyVersion {
    None,
    V2008_10_17,
    V2012_10_17,
}

impl PolicyVersion {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }
}

impl Default for PolicyVersion {
    fn default() -> Self {
        Self::None
    }
}

impl Display for PolicyVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::None => Ok(()),
            Self::V2008_10_17 => f.write_str("2008-10-17"),
            Self::V2012_10_17 => f.write_str("2012-10-17"),
        }
    }
}

impl<'de> Deserialize<'de> for PolicyVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        match PolicyVersion::from_str(&value) {
            Ok(v) => Ok(v),
            Err(e) => Err(de::Error::custom(e)),
        }
    }
}

impl FromStr for PolicyVersion {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2008-10-17" => Ok(Self::V2008_10_17),
            "2012-10-17" => Ok(Self::V2012_10_17),
            _ => Err(BuilderError::InvalidPolicyVersion(s.to_string())),
        }
    }
}

impl Serialize for PolicyVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_string().as_str())
    }
}

/// A policy document holding built statements.
///
/// Statements are always written as a list. On input, a single statement map is also accepted.
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
pub struct Policy {
    /// The policy language version. Policies assembled with [Policy::builder] default to `2012-10-17`, which is
    /// required for policy variables such as `${aws:username}`.
    #[builder(setter(into), default = "PolicyVersion::V2012_10_17")]
    version: PolicyVersion,

    /// An optional identifier for the policy.
    #[builder(setter(into, strip_option), default)]
    id: Option<String>,

    #[builder(setter(into, each = "add_statement"))]
    statement: Vec<Statement>,
}

impl Policy {
    #[inline]
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    pub fn version(&self) -> PolicyVersion {
        self.version
    }

    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[inline]
    pub fn statement(&self) -> &[Statement] {
        &self.statement
    }
}

display_json!(Policy);
from_str_json!(Policy);

/// The `Statement` element: a single statement map or a list of them.
struct StatementList(Vec<Statement>);

struct StatementListVisitor;

impl<'de> Visitor<'de> for StatementListVisitor {
    type Value = StatementList;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str("a statement or a list of statements")
    }

    fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        let statement = Statement::deserialize(MapAccessDeserializer::new(access))?;
        Ok(StatementList(vec![statement]))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut result = Vec::new();
        while let Some(statement) = access.next_element::<Statement>()? {
            result.push(statement);
        }

        Ok(StatementList(result))
    }
}

impl<'de> Deserialize<'de> for StatementList {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(StatementListVisitor {})
    }
}

struct PolicyVisitor;

impl<'de> Visitor<'de> for PolicyVisitor {
    type Value = Policy;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str("policy")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut version = None;
        let mut id = None;
        let mut statement = None;

        while let Some(key) = access.next_key::<String>()? {
            match key.as_str() {
                "Version" => {
                    if version.is_some() {
                        return Err(de::Error::duplicate_field("Version"));
                    }
                    version = Some(access.next_value::<PolicyVersion>()?);
                }
                "Id" => {
                    if id.is_some() {
                        return Err(de::Error::duplicate_field("Id"));
                    }
                    id = Some(access.next_value::<String>()?);
                }
                "Statement" => {
                    if statement.is_some() {
                        return Err(de::Error::duplicate_field("Statement"));
                    }
                    statement = Some(access.next_value::<StatementList>()?.0);
                }
                _ => return Err(de::Error::unknown_field(&key, &["Version", "Id", "Statement"])),
            }
        }

        let statement = statement.ok_or_else(|| <A::Error as de::Error>::missing_field("Statement"))?;

        Ok(Policy {
            version: version.unwrap_or_default(),
            id,
            statement,
        })
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Policy, D::Error> {
        d.deserialize_map(PolicyVisitor {})
    }
}

impl Serialize for Policy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(None)?;
        if self.version.is_some() {
            state.serialize_entry("Version", &self.version)?;
        }
        if let Some(id) = &self.id {
            state.serialize_entry("Id", id)?;
        }
        state.serialize_entry("Statement", &self.statement)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{registry::fixtures, BuilderError, Effect, Policy, PolicyBuilderError, PolicyVersion},
        indoc::indoc,
        pretty_assertions::{assert_eq, assert_ne},
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_version() {
        assert_eq!(PolicyVersion::default(), PolicyVersion::None);
        assert!(PolicyVersion::None.is_none());
        assert!(PolicyVersion::V2008_10_17.is_some());
        assert_eq!(PolicyVersion::from_str("2012-10-17").unwrap(), PolicyVersion::V2012_10_17);
        assert_eq!(PolicyVersion::V2008_10_17.to_string(), "2008-10-17");
        assert_eq!(PolicyVersion::None.to_string(), "");
        assert_eq!(
            PolicyVersion::from_str("2021-01-01").unwrap_err(),
            BuilderError::InvalidPolicyVersion("2021-01-01".to_string())
        );
    }

    #[test_log::test]
    #[allow(clippy::redundant_clone)]
    fn test_builder() {
        let e = Policy::builder().clone().build().unwrap_err();
        assert_eq!(e.to_string(), "`statement` must be initialized");
        assert_eq!(format!("{}", PolicyBuilderError::from("Oops".to_string())), "Oops");

        let mut sb = fixtures::dax().statement();
        sb.to("GetItem").on_resource_type("application", &["my-cluster"]).unwrap();
        let read = sb.build();
        sb.not().to("PutItem").deny();
        let write = sb.build();

        let p1 = Policy::builder().add_statement(read.clone()).add_statement(write).build().unwrap();
        let p2 = Policy::builder().version(PolicyVersion::None).id("test").statement(vec![read]).build().unwrap();
        assert_eq!(p1, p1.clone());
        assert_ne!(p1, p2);
        assert_eq!(p1.version(), PolicyVersion::V2012_10_17);
        assert_eq!(p1.statement().len(), 2);
        assert_eq!(p1.statement()[1].effect(), &Effect::Deny);
        assert!(p1.id().is_none());

        assert_eq!(
            p1.to_string(),
            indoc! {r#"
            {
                "Version": "2012-10-17",
                "Statement": [
                    {
                        "Effect": "Allow",
                        "Action": [
                            "dax:GetItem"
                        ],
                        "Resource": [
                            "arn:aws:dax:::cache/my-cluster"
                        ]
                    },
                    {
                        "Effect": "Deny",
                        "Action": [
                            "dax:GetItem"
                        ],
                        "NotAction": [
                            "dax:PutItem"
                        ],
                        "Resource": [
                            "arn:aws:dax:::cache/my-cluster"
                        ]
                    }
                ]
            }"#}
        );

        assert_eq!(
            p2.to_string(),
            indoc! {r#"
            {
                "Id": "test",
                "Statement": [
                    {
                        "Effect": "Allow",
                        "Action": [
                            "dax:GetItem"
                        ],
                        "Resource": [
                            "arn:aws:dax:::cache/my-cluster"
                        ]
                    }
                ]
            }"#}
        );

        assert_eq!(Policy::from_str(&p1.to_string()).unwrap(), p1);
        assert_eq!(Policy::from_str(&p2.to_string()).unwrap(), p2);
    }

    #[test_log::test]
    fn test_import() {
        let policy = Policy::from_str(indoc! { r#"
            {
                "Version": "2008-10-17",
                "Statement": {
                    "Effect": "Allow",
                    "Action": "iot:*"
                }
            }"# })
        .unwrap();
        assert_eq!(policy.version(), PolicyVersion::V2008_10_17);
        assert_eq!(policy.statement().len(), 1);
        assert_eq!(policy.statement()[0].resource().to_vec(), vec!["*"]);
    }

    #[test_log::test]
    fn test_bad_policies() {
        let e = Policy::from_str(r#"{"Version": "2012-10-17"}"#).unwrap_err();
        assert!(e.to_string().starts_with("missing field `Statement`"));

        let e = Policy::from_str(r#"{"Version": "2012-10-17", "Version": "2012-10-17", "Statement": []}"#).unwrap_err();
        assert!(e.to_string().starts_with("duplicate field `Version`"));

        let e = Policy::from_str(r#"{"Version": "2012-10-18", "Statement": []}"#).unwrap_err();
        assert!(e.to_string().starts_with("Invalid policy version: 2012-10-18"));

        let e = Policy::from_str(r#"{"Statement": [], "Principal": "*"}"#).unwrap_err();
        assert!(e.to_string().starts_with("unknown field `Principal`"));

        // Errors inside a statement are reported as-is, whether the statement stands alone or sits in a list.
        let e = Policy::from_str(r#"{"Statement": {"Effect": "Permit"}}"#).unwrap_err();
        assert!(e.to_string().starts_with("unknown variant `Permit`"), "{}", e);

        let e = Policy::from_str(r#"{"Statement": [{"Effect": "Allow", "Action": 3}]}"#).unwrap_err();
        assert!(e.to_string().starts_with("invalid type: integer `3`"), "{}", e);

        let e = Policy::from_str(r#"{"Statement": "Allow"}"#).unwrap_err();
        assert!(e.to_string().starts_with("invalid type: string \"Allow\", expected a statement or a list of statements"));
    }
}
