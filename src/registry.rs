use {
    crate::{
        action, display_json, from_str_json, AccessLevel, ArnDefaults, ArnTemplate, ConditionKeyType, StatementBuilder,
    },
    derive_builder::Builder,
    log::debug,
    regex::Regex,
    serde::{Deserialize, Serialize},
    std::{collections::BTreeMap, sync::Arc},
};

/// How an action relates to one of the service's resource types.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ResourceTypeOnAction {
    /// Whether the resource type must be present for the action to be authorized.
    #[serde(default)]
    pub required: bool,
}

/// Metadata for a single action of a service.
#[derive(Builder, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDescriptor {
    #[builder(setter(into), default)]
    #[serde(rename = "url", default)]
    documentation_url: String,

    #[builder(setter(into), default)]
    #[serde(default)]
    description: String,

    access_level: AccessLevel,

    #[builder(setter(into), default)]
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    resource_types: BTreeMap<String, ResourceTypeOnAction>,

    #[builder(setter(into), default)]
    #[serde(rename = "conditions", default, skip_serializing_if = "Vec::is_empty")]
    condition_keys: Vec<String>,

    #[builder(setter(into), default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dependent_actions: Vec<String>,
}

impl ActionDescriptor {
    #[inline]
    pub fn builder() -> ActionDescriptorBuilder {
        ActionDescriptorBuilder::default()
    }

    #[inline]
    pub fn documentation_url(&self) -> &str {
        &self.documentation_url
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    #[inline]
    pub fn resource_types(&self) -> &BTreeMap<String, ResourceTypeOnAction> {
        &self.resource_types
    }

    #[inline]
    pub fn condition_keys(&self) -> &[String] {
        &self.condition_keys
    }

    #[inline]
    pub fn dependent_actions(&self) -> &[String] {
        &self.dependent_actions
    }
}

/// A resource type of a service and the ARN template its resources follow.
#[derive(Builder, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTypeDescriptor {
    /// Filled in from the registry key when omitted from JSON input.
    #[builder(setter(into))]
    #[serde(default)]
    name: String,

    #[builder(setter(into), default)]
    #[serde(rename = "url", default)]
    documentation_url: String,

    #[builder(setter(into))]
    #[serde(rename = "arn")]
    arn_template: ArnTemplate,

    #[builder(setter(into), default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    condition_keys: Vec<String>,
}

impl ResourceTypeDescriptor {
    #[inline]
    pub fn builder() -> ResourceTypeDescriptorBuilder {
        ResourceTypeDescriptorBuilder::default()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn documentation_url(&self) -> &str {
        &self.documentation_url
    }

    #[inline]
    pub fn arn_template(&self) -> &ArnTemplate {
        &self.arn_template
    }

    #[inline]
    pub fn condition_keys(&self) -> &[String] {
        &self.condition_keys
    }
}

/// A condition key a service supports, with the type of its values.
#[derive(Builder, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionKeyDescriptor {
    /// Filled in from the registry key when omitted from JSON input.
    #[builder(setter(into))]
    #[serde(default)]
    key: String,

    #[builder(setter(into), default)]
    #[serde(default)]
    description: String,

    #[builder(setter(into), default)]
    #[serde(rename = "url", default)]
    documentation_url: String,

    #[serde(rename = "type")]
    key_type: ConditionKeyType,
}

impl ConditionKeyDescriptor {
    #[inline]
    pub fn builder() -> ConditionKeyDescriptorBuilder {
        ConditionKeyDescriptorBuilder::default()
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn documentation_url(&self) -> &str {
        &self.documentation_url
    }

    #[inline]
    pub fn key_type(&self) -> ConditionKeyType {
        self.key_type
    }
}

/// The static description of one AWS service: its prefix, actions, resource types, and condition keys.
///
/// A registry is immutable once it is shared; statement builders hold it through an [Arc].
#[derive(Builder, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", from = "RegistryDocument")]
pub struct ActionRegistry {
    #[builder(setter(into))]
    service_prefix: String,

    #[builder(setter(into), default)]
    actions: BTreeMap<String, ActionDescriptor>,

    #[builder(setter(into), default)]
    resource_types: BTreeMap<String, ResourceTypeDescriptor>,

    #[builder(setter(into), default)]
    condition_keys: BTreeMap<String, ConditionKeyDescriptor>,

    #[builder(setter(into), default)]
    arn_defaults: ArnDefaults,
}

display_json!(ActionRegistry);
from_str_json!(ActionRegistry);

/// The JSON form of a registry, before resource type names and condition keys are filled in from their map keys.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistryDocument {
    service_prefix: String,

    #[serde(default)]
    actions: BTreeMap<String, ActionDescriptor>,

    #[serde(default)]
    resource_types: BTreeMap<String, ResourceTypeDescriptor>,

    #[serde(default)]
    condition_keys: BTreeMap<String, ConditionKeyDescriptor>,

    #[serde(default)]
    arn_defaults: ArnDefaults,
}

impl From<RegistryDocument> for ActionRegistry {
    fn from(doc: RegistryDocument) -> Self {
        let mut resource_types = doc.resource_types;
        for (name, rt) in resource_types.iter_mut() {
            if rt.name.is_empty() {
                rt.name = name.clone();
            }
        }

        let mut condition_keys = doc.condition_keys;
        for (key, ck) in condition_keys.iter_mut() {
            if ck.key.is_empty() {
                ck.key = key.clone();
            }
        }

        Self {
            service_prefix: doc.service_prefix,
            actions: doc.actions,
            resource_types,
            condition_keys,
            arn_defaults: doc.arn_defaults,
        }
    }
}

impl ActionRegistry {
    /// Create an empty registry for the given service prefix.
    pub fn new<S: Into<String>>(service_prefix: S) -> Self {
        Self {
            service_prefix: service_prefix.into(),
            actions: BTreeMap::new(),
            resource_types: BTreeMap::new(),
            condition_keys: BTreeMap::new(),
            arn_defaults: ArnDefaults::default(),
        }
    }

    #[inline]
    pub fn builder() -> ActionRegistryBuilder {
        ActionRegistryBuilder::default()
    }

    /// Start a statement against this registry.
    #[inline]
    pub fn statement(self: &Arc<Self>) -> StatementBuilder {
        StatementBuilder::new(Arc::clone(self))
    }

    #[inline]
    pub fn service_prefix(&self) -> &str {
        &self.service_prefix
    }

    #[inline]
    pub fn arn_defaults(&self) -> &ArnDefaults {
        &self.arn_defaults
    }

    pub fn set_arn_defaults(&mut self, arn_defaults: ArnDefaults) {
        self.arn_defaults = arn_defaults;
    }

    #[inline]
    pub fn actions(&self) -> &BTreeMap<String, ActionDescriptor> {
        &self.actions
    }

    #[inline]
    pub fn resource_types(&self) -> &BTreeMap<String, ResourceTypeDescriptor> {
        &self.resource_types
    }

    #[inline]
    pub fn condition_keys(&self) -> &BTreeMap<String, ConditionKeyDescriptor> {
        &self.condition_keys
    }

    /// Add an action under its bare name. An existing action with the same name is replaced and returned.
    pub fn insert_action<S: Into<String>>(&mut self, name: S, action: ActionDescriptor) -> Option<ActionDescriptor> {
        let name = name.into();
        let previous = self.actions.insert(name.clone(), action);
        if previous.is_some() {
            debug!("Replaced action {}:{}", self.service_prefix, name);
        }
        previous
    }

    /// Add a resource type under its name. An existing resource type with the same name is replaced and returned.
    pub fn insert_resource_type(&mut self, resource_type: ResourceTypeDescriptor) -> Option<ResourceTypeDescriptor> {
        let name = resource_type.name.clone();
        let previous = self.resource_types.insert(name.clone(), resource_type);
        if previous.is_some() {
            debug!("Replaced resource type {} of service {}", name, self.service_prefix);
        }
        previous
    }

    /// Add a condition key. An existing condition key with the same name is replaced and returned.
    pub fn insert_condition_key(&mut self, condition_key: ConditionKeyDescriptor) -> Option<ConditionKeyDescriptor> {
        let key = condition_key.key.clone();
        let previous = self.condition_keys.insert(key.clone(), condition_key);
        if previous.is_some() {
            debug!("Replaced condition key {} of service {}", key, self.service_prefix);
        }
        previous
    }

    #[inline]
    pub fn action(&self, name: &str) -> Option<&ActionDescriptor> {
        self.actions.get(name)
    }

    #[inline]
    pub fn resource_type(&self, name: &str) -> Option<&ResourceTypeDescriptor> {
        self.resource_types.get(name)
    }

    #[inline]
    pub fn condition_key(&self, key: &str) -> Option<&ConditionKeyDescriptor> {
        self.condition_keys.get(key)
    }

    /// Bare names of every action with the given access level, in name order.
    pub fn actions_with_access_level(&self, level: AccessLevel) -> Vec<&str> {
        self.actions.iter().filter(|(_, a)| a.access_level == level).map(|(name, _)| name.as_str()).collect()
    }

    /// Bare names of every action the pattern finds a match in, in name order. The pattern is not anchored.
    pub fn actions_matching(&self, pattern: &Regex) -> Vec<&str> {
        self.actions.keys().filter(|name| pattern.is_match(name)).map(|name| name.as_str()).collect()
    }

    /// Prefix a bare action name with this service's prefix.
    #[inline]
    pub fn qualify(&self, name: &str) -> String {
        action::qualify(&self.service_prefix, name)
    }
}
