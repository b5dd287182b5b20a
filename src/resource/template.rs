use {
    derive_builder::Builder,
    lazy_static::lazy_static,
    log::trace,
    regex::{Captures, Regex},
    serde::{Deserialize, Serialize},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\$\{([A-Za-z0-9_-]+)\}").unwrap();
}

const PARTITION: &str = "Partition";
const REGION: &str = "Region";
const ACCOUNT: &str = "Account";
const ACCOUNT_ID: &str = "AccountId";

#[inline]
fn is_standard(placeholder: &str) -> bool {
    matches!(placeholder, PARTITION | REGION | ACCOUNT | ACCOUNT_ID)
}

/// The values substituted for `${Partition}`, `${Region}`, and `${Account}` when the caller does not supply them.
///
/// Generated service data is not consistent here: most services leave the region and account empty, while some use
/// the `*` wildcard. Each [ActionRegistry][crate::ActionRegistry] carries its own defaults, and a
/// [StatementBuilder][crate::StatementBuilder] can override them.
#[derive(Builder, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArnDefaults {
    #[builder(setter(into), default = "\"aws\".to_string()")]
    partition: String,

    #[builder(setter(into), default)]
    region: String,

    #[builder(setter(into), default)]
    account: String,
}

impl ArnDefaults {
    #[inline]
    pub fn builder() -> ArnDefaultsBuilder {
        ArnDefaultsBuilder::default()
    }

    /// Defaults that leave the region and account as the `*` wildcard.
    pub fn wildcard() -> Self {
        Self {
            partition: "aws".to_string(),
            region: "*".to_string(),
            account: "*".to_string(),
        }
    }

    #[inline]
    pub fn partition(&self) -> &str {
        &self.partition
    }

    #[inline]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[inline]
    pub fn account(&self) -> &str {
        &self.account
    }
}

impl Default for ArnDefaults {
    fn default() -> Self {
        Self {
            partition: "aws".to_string(),
            region: String::new(),
            account: String::new(),
        }
    }
}

/// Caller-supplied overrides for the standard ARN components. Unset components fall back to [ArnDefaults].
#[derive(Builder, Clone, Debug, Default, Eq, PartialEq)]
pub struct ArnScope {
    #[builder(setter(into, strip_option), default)]
    partition: Option<String>,

    #[builder(setter(into, strip_option), default)]
    region: Option<String>,

    #[builder(setter(into, strip_option), default)]
    account: Option<String>,
}

impl ArnScope {
    #[inline]
    pub fn builder() -> ArnScopeBuilder {
        ArnScopeBuilder::default()
    }

    #[inline]
    pub fn partition(&self) -> Option<&str> {
        self.partition.as_deref()
    }

    #[inline]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    #[inline]
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }
}

/// An ARN template such as `arn:${Partition}:dax:${Region}:${Account}:cache/${ClusterName}`.
///
/// Placeholders other than `Partition`, `Region`, `Account`, and `AccountId` are resource identifiers, supplied
/// positionally in the order they appear in the template.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ArnTemplate(String);

impl ArnTemplate {
    pub fn new<S: Into<String>>(template: S) -> Self {
        Self(template.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut result: Vec<&str> = Vec::new();
        for caps in PLACEHOLDER.captures_iter(&self.0) {
            if let Some(name) = caps.get(1) {
                if !result.contains(&name.as_str()) {
                    result.push(name.as_str());
                }
            }
        }
        result
    }

    /// The resource identifier placeholder names in order of first appearance.
    pub fn identifiers(&self) -> Vec<&str> {
        self.placeholders().into_iter().filter(|p| !is_standard(p)).collect()
    }

    /// Substitute every placeholder and return the resulting ARN.
    ///
    /// Identifier placeholders take their values from `identifiers` by position. A placeholder with no corresponding
    /// value is left in the output as-is; surplus values are ignored. Partition, region, and account come from `scope`
    /// when it sets them to a non-empty value, and from `defaults` otherwise.
    pub fn instantiate(&self, identifiers: &[&str], scope: &ArnScope, defaults: &ArnDefaults) -> String {
        let names = self.identifiers();
        if identifiers.len() != names.len() {
            trace!(
                "ARN template {} has {} identifier(s) but {} value(s) were supplied",
                self.0,
                names.len(),
                identifiers.len()
            );
        }

        // An empty override counts as unset.
        let partition = scope.partition().filter(|s| !s.is_empty()).unwrap_or_else(|| defaults.partition());
        let region = scope.region().filter(|s| !s.is_empty()).unwrap_or_else(|| defaults.region());
        let account = scope.account().filter(|s| !s.is_empty()).unwrap_or_else(|| defaults.account());

        let arn = PLACEHOLDER.replace_all(&self.0, |caps: &Captures| {
            let name = &caps[1];
            let value = match name {
                PARTITION => Some(partition),
                REGION => Some(region),
                ACCOUNT | ACCOUNT_ID => Some(account),
                _ => names.iter().position(|n| *n == name).and_then(|i| identifiers.get(i).copied()),
            };

            match value {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        });

        trace!("Instantiated ARN template {} as {}", self.0, arn);
        arn.into_owned()
    }
}

impl From<&str> for ArnTemplate {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ArnTemplate {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl Display for ArnTemplate {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{ArnDefaults, ArnScope, ArnTemplate},
        pretty_assertions::assert_eq,
    };

    const DAX: &str = "arn:${Partition}:dax:${Region}:${Account}:cache/${ClusterName}";

    #[test_log::test]
    fn test_placeholders() {
        let t = ArnTemplate::from(DAX);
        assert_eq!(t.placeholders(), vec!["Partition", "Region", "Account", "ClusterName"]);
        assert_eq!(t.identifiers(), vec!["ClusterName"]);

        let t = ArnTemplate::from("arn:${Partition}:iot:${Region}:${AccountId}:thing/${ThingName}/${ShadowName}");
        assert_eq!(t.identifiers(), vec!["ThingName", "ShadowName"]);
        assert_eq!(t.to_string(), "arn:${Partition}:iot:${Region}:${AccountId}:thing/${ThingName}/${ShadowName}");
    }

    #[test_log::test]
    fn test_instantiate_defaults() {
        let t = ArnTemplate::from(DAX);
        let arn = t.instantiate(&["my-cluster"], &ArnScope::default(), &ArnDefaults::default());
        assert_eq!(arn, "arn:aws:dax:::cache/my-cluster");

        let arn = t.instantiate(&["my-cluster"], &ArnScope::default(), &ArnDefaults::wildcard());
        assert_eq!(arn, "arn:aws:dax:*:*:cache/my-cluster");
    }

    #[test_log::test]
    fn test_instantiate_scope() {
        let t = ArnTemplate::from(DAX);
        let scope =
            ArnScope::builder().account("123456789012").region("us-west-2").partition("aws-cn").build().unwrap();
        let arn = t.instantiate(&["c1"], &scope, &ArnDefaults::default());
        assert_eq!(arn, "arn:aws-cn:dax:us-west-2:123456789012:cache/c1");

        let defaults = ArnDefaults::builder().partition("aws-us-gov").region("us-gov-west-1").build().unwrap();
        assert_eq!(defaults.account(), "");
        let scope = ArnScope::builder().account("123456789012").build().unwrap();
        let arn = t.instantiate(&["c1"], &scope, &defaults);
        assert_eq!(arn, "arn:aws-us-gov:dax:us-gov-west-1:123456789012:cache/c1");

        let empty = ArnScope::builder().partition("").region("").account("").build().unwrap();
        let arn = t.instantiate(&["c1"], &empty, &ArnDefaults::wildcard());
        assert_eq!(arn, "arn:aws:dax:*:*:cache/c1");
    }

    #[test_log::test]
    fn test_instantiate_mismatched_identifiers() {
        let t = ArnTemplate::from("arn:${Partition}:iot:${Region}:${Account}:thing/${ThingName}/${ShadowName}");
        let arn = t.instantiate(&["t1"], &ArnScope::default(), &ArnDefaults::default());
        assert_eq!(arn, "arn:aws:iot:::thing/t1/${ShadowName}");

        let arn = t.instantiate(&["t1", "s1", "extra"], &ArnScope::default(), &ArnDefaults::default());
        assert_eq!(arn, "arn:aws:iot:::thing/t1/s1");

        // Identifier values are not themselves substituted.
        let arn = t.instantiate(&["${Region}", "s1"], &ArnScope::default(), &ArnDefaults::wildcard());
        assert_eq!(arn, "arn:aws:iot:*:*:thing/${Region}/s1");
    }

    #[test_log::test]
    fn test_defaults_serde() {
        let d: ArnDefaults = serde_json::from_str(r#"{"region": "*"}"#).unwrap();
        assert_eq!(d.partition(), "aws");
        assert_eq!(d.region(), "*");
        assert_eq!(d.account(), "");
        assert_eq!(ArnDefaults::builder().build().unwrap(), ArnDefaults::default());
    }
}
