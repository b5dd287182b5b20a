use {
    crate::{display_json, from_str_json, ActionList, Condition, Effect, ResourceList},
    serde::{
        de::{self, Deserializer, MapAccess, Visitor},
        Deserialize, Serialize,
    },
    std::fmt::{Formatter, Result as FmtResult},
};

/// An IAM policy statement, as produced by [StatementBuilder::build][crate::StatementBuilder::build].
///
/// A statement is a snapshot: it does not change when the builder that produced it is modified further.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    #[serde(skip_serializing_if = "Option::is_none")]
    sid: Option<String>,

    effect: Effect,

    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<ActionList>,

    #[serde(skip_serializing_if = "Option::is_none")]
    not_action: Option<ActionList>,

    resource: ResourceList,

    #[serde(skip_serializing_if = "Option::is_none")]
    condition: Option<Condition>,
}

impl Statement {
    pub(crate) fn new(
        sid: Option<String>,
        effect: Effect,
        action: Option<ActionList>,
        not_action: Option<ActionList>,
        resource: ResourceList,
        condition: Option<Condition>,
    ) -> Self {
        Self {
            sid,
            effect,
            action,
            not_action,
            resource,
            condition,
        }
    }

    #[inline]
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    #[inline]
    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    #[inline]
    pub fn action(&self) -> Option<&ActionList> {
        self.action.as_ref()
    }

    #[inline]
    pub fn not_action(&self) -> Option<&ActionList> {
        self.not_action.as_ref()
    }

    #[inline]
    pub fn resource(&self) -> &ResourceList {
        &self.resource
    }

    #[inline]
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }
}

display_json!(Statement);
from_str_json!(Statement);

impl<'de> Deserialize<'de> for Statement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StatementVisitor {})
    }
}

const FIELDS: &[&str] = &["Sid", "Effect", "Action", "NotAction", "Resource", "Condition"];

struct StatementVisitor;
impl<'de> Visitor<'de> for StatementVisitor {
    type Value = Statement;

    fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
        formatter.write_str("a map of statement properties")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Statement, A::Error> {
        let mut sid = None;
        let mut effect = None;
        let mut action = None;
        let mut not_action = None;
        let mut resource = None;
        let mut condition = None;

        while let Some(key) = access.next_key::<String>()? {
            match key.as_str() {
                "Sid" => {
                    if sid.is_some() {
                        return Err(de::Error::duplicate_field("Sid"));
                    }

                    sid = Some(access.next_value::<String>()?);
                }
                "Effect" => {
                    if effect.is_some() {
                        return Err(de::Error::duplicate_field("Effect"));
                    }

                    effect = Some(access.next_value::<Effect>()?);
                }
                "Action" => {
                    if action.is_some() {
                        return Err(de::Error::duplicate_field("Action"));
                    }

                    action = Some(access.next_value::<ActionList>()?);
                }
                "NotAction" => {
                    if not_action.is_some() {
                        return Err(de::Error::duplicate_field("NotAction"));
                    }

                    not_action = Some(access.next_value::<ActionList>()?);
                }
                "Resource" => {
                    if resource.is_some() {
                        return Err(de::Error::duplicate_field("Resource"));
                    }

                    resource = Some(access.next_value::<ResourceList>()?);
                }
                "Condition" => {
                    if condition.is_some() {
                        return Err(de::Error::duplicate_field("Condition"));
                    }

                    condition = Some(access.next_value::<Condition>()?);
                }
                _ => return Err(de::Error::unknown_field(&key, FIELDS)),
            }
        }

        let effect = effect.ok_or_else(|| <A::Error as de::Error>::missing_field("Effect"))?;

        // An omitted resource means the same thing it does in a built statement: every resource.
        let resource = resource.unwrap_or_else(ResourceList::any);

        Ok(Statement::new(sid, effect, action, not_action, resource, condition))
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{condop, ActionList, Condition, Effect, Resource, ResourceList, Statement},
        indoc::indoc,
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_display_order() {
        let mut condition = Condition::new();
        condition.insert_value(condop::StringLike, "dax:EnclosingOperation", "GetItem");
        let s = Statement::new(
            Some("ReadCache".to_string()),
            Effect::Deny,
            Some(["dax:GetItem"].into_iter().collect()),
            Some(["dax:PutItem"].into_iter().collect()),
            ResourceList::from_iter(["arn:aws:dax:::cache/my-cluster"]),
            Some(condition),
        );

        assert_eq!(
            s.to_string(),
            indoc! {r#"
            {
                "Sid": "ReadCache",
                "Effect": "Deny",
                "Action": [
                    "dax:GetItem"
                ],
                "NotAction": [
                    "dax:PutItem"
                ],
                "Resource": [
                    "arn:aws:dax:::cache/my-cluster"
                ],
                "Condition": {
                    "StringLike": {
                        "dax:EnclosingOperation": "GetItem"
                    }
                }
            }"#}
        );

        let s2 = Statement::from_str(&s.to_string()).unwrap();
        assert_eq!(s, s2);
        assert_eq!(s2.sid(), Some("ReadCache"));
        assert_eq!(s2.effect(), &Effect::Deny);
        assert_eq!(s2.not_action().unwrap().to_vec(), vec!["dax:PutItem"]);
        assert_eq!(s2.resource()[0], Resource::from("arn:aws:dax:::cache/my-cluster"));
        assert_eq!(s2.condition().unwrap().len(), 1);
    }

    #[test_log::test]
    fn test_minimal() {
        let s = Statement::new(None, Effect::Allow, Some(ActionList::new()), None, ResourceList::any(), None);
        assert_eq!(serde_json::to_string(&s).unwrap(), r#"{"Effect":"Allow","Action":[],"Resource":["*"]}"#);

        let s = Statement::from_str(r#"{"Effect": "Allow", "Action": "iot:*"}"#).unwrap();
        assert_eq!(s.action().unwrap().to_vec(), vec!["iot:*"]);
        assert_eq!(s.resource(), &ResourceList::any());
        assert!(s.not_action().is_none());
        assert!(s.condition().is_none());
        assert!(s.sid().is_none());
    }

    #[test_log::test]
    fn test_bad_statements() {
        let e = Statement::from_str(r#"{"Action": "iot:*"}"#).unwrap_err();
        assert!(e.to_string().starts_with("missing field `Effect`"));

        let e = Statement::from_str(r#"{"Effect": "Allow", "Effect": "Deny"}"#).unwrap_err();
        assert!(e.to_string().starts_with("duplicate field `Effect`"));

        let e = Statement::from_str(r#"{"Effect": "Allow", "Principal": "*"}"#).unwrap_err();
        assert!(e.to_string().starts_with("unknown field `Principal`, expected one of"));

        let e = Statement::from_str(r#"{"Effect": "Permit"}"#).unwrap_err();
        assert!(e.to_string().starts_with("unknown variant `Permit`"));
    }
}
