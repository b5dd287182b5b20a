use {
    crate::{
        condop, AccessLevel, ActionList, ActionRegistry, ArnDefaults, ArnScope, BuilderError, Condition, Effect,
        Operator, Resource, ResourceList, Statement, StringList,
    },
    log::{debug, trace, warn},
    regex::Regex,
    std::sync::Arc,
};

/// Which action set [StatementBuilder::add] writes to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Polarity {
    /// Actions go to the `Action` element.
    Action,

    /// Actions go to the `NotAction` element.
    NotAction,
}

impl Default for Polarity {
    fn default() -> Self {
        Self::Action
    }
}

/// Chooses registry actions for [StatementBuilder::all_actions].
#[derive(Clone, Debug)]
pub enum Selector {
    /// Every action with this access level.
    AccessLevel(AccessLevel),

    /// Every action whose bare name contains a match for this pattern.
    Pattern(Regex),
}

impl Selector {
    /// Compile a pattern selector.
    pub fn pattern(pattern: &str) -> Result<Self, BuilderError> {
        match Regex::new(pattern) {
            Ok(re) => Ok(Self::Pattern(re)),
            Err(e) => {
                debug!("Failed to compile action pattern {}: {}", pattern, e);
                Err(BuilderError::InvalidPattern(pattern.to_string()))
            }
        }
    }
}

impl From<AccessLevel> for Selector {
    fn from(level: AccessLevel) -> Self {
        Self::AccessLevel(level)
    }
}

impl From<Regex> for Selector {
    fn from(re: Regex) -> Self {
        Self::Pattern(re)
    }
}

/// Accumulates the parts of one IAM policy statement for a single service.
///
/// Every mutator returns `&mut Self` so calls can be chained. [build][StatementBuilder::build] takes a snapshot and
/// leaves the builder usable; later changes do not affect statements already built.
///
/// Action names, ARNs, and operator strings are recorded as given. Nothing is checked against the registry except
/// where a lookup is needed (resource types for [on_resource_type][StatementBuilder::on_resource_type], condition key
/// types for [if_key][StatementBuilder::if_key]).
#[derive(Clone, Debug)]
pub struct StatementBuilder {
    registry: Arc<ActionRegistry>,
    sid: Option<String>,
    effect: Effect,
    actions: ActionList,
    not_actions: ActionList,
    polarity: Polarity,
    resources: ResourceList,
    condition: Condition,
    arn_defaults: ArnDefaults,
}

impl StatementBuilder {
    pub fn new(registry: Arc<ActionRegistry>) -> Self {
        let arn_defaults = registry.arn_defaults().clone();
        Self {
            registry,
            sid: None,
            effect: Effect::default(),
            actions: ActionList::new(),
            not_actions: ActionList::new(),
            polarity: Polarity::default(),
            resources: ResourceList::new(),
            condition: Condition::new(),
            arn_defaults,
        }
    }

    #[inline]
    pub fn registry(&self) -> &Arc<ActionRegistry> {
        &self.registry
    }

    #[inline]
    pub fn service_prefix(&self) -> &str {
        self.registry.service_prefix()
    }

    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    // Actions

    /// Add a fully-qualified action to the set selected by the current polarity.
    pub fn add<S: Into<String>>(&mut self, action: S) -> &mut Self {
        match self.polarity {
            Polarity::Action => self.add_action(action),
            Polarity::NotAction => self.add_not_action(action),
        }
    }

    /// Add a fully-qualified action to the `Action` element regardless of polarity.
    pub fn add_action<S: Into<String>>(&mut self, action: S) -> &mut Self {
        let action = action.into();
        trace!("Adding action {}", action);
        self.actions.insert(action);
        self
    }

    /// Add a fully-qualified action to the `NotAction` element regardless of polarity.
    pub fn add_not_action<S: Into<String>>(&mut self, action: S) -> &mut Self {
        let action = action.into();
        trace!("Adding not-action {}", action);
        self.not_actions.insert(action);
        self
    }

    /// Add an action of this service by its bare name, e.g. `to("GetItem")` for `dax:GetItem`.
    pub fn to(&mut self, name: &str) -> &mut Self {
        let action = self.registry.qualify(name);
        self.add(action)
    }

    /// Add every registry action chosen by any of the selectors. With no selectors, add the service wildcard
    /// (`prefix:*`) instead of enumerating the registry.
    ///
    /// Access level selection does not take resource types into account.
    pub fn all_actions(&mut self, selectors: &[Selector]) -> &mut Self {
        let registry = Arc::clone(&self.registry);

        if selectors.is_empty() {
            return self.add(registry.qualify("*"));
        }

        for selector in selectors {
            let names = match selector {
                Selector::AccessLevel(level) => registry.actions_with_access_level(*level),
                Selector::Pattern(re) => registry.actions_matching(re),
            };

            trace!("Selector {:?} chose {} action(s)", selector, names.len());
            for name in names {
                self.add(registry.qualify(name));
            }
        }

        self
    }

    #[inline]
    pub fn all_list_actions(&mut self) -> &mut Self {
        self.all_actions(&[Selector::AccessLevel(AccessLevel::List)])
    }

    #[inline]
    pub fn all_read_actions(&mut self) -> &mut Self {
        self.all_actions(&[Selector::AccessLevel(AccessLevel::Read)])
    }

    #[inline]
    pub fn all_write_actions(&mut self) -> &mut Self {
        self.all_actions(&[Selector::AccessLevel(AccessLevel::Write)])
    }

    #[inline]
    pub fn all_permission_management_actions(&mut self) -> &mut Self {
        self.all_actions(&[Selector::AccessLevel(AccessLevel::PermissionsManagement)])
    }

    #[inline]
    pub fn all_tagging_actions(&mut self) -> &mut Self {
        self.all_actions(&[Selector::AccessLevel(AccessLevel::Tagging)])
    }

    /// Add every registry action whose name matches `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [BuilderError::InvalidPattern] if `pattern` is not a valid regular expression.
    pub fn all_matching_actions(&mut self, pattern: &str) -> Result<&mut Self, BuilderError> {
        let selector = Selector::pattern(pattern)?;
        Ok(self.all_actions(&[selector]))
    }

    /// Direct all later [add][Self::add], [to][Self::to], and [all_actions][Self::all_actions] calls to the
    /// `NotAction` element. Actions added before this call stay where they are. There is no way back.
    pub fn not(&mut self) -> &mut Self {
        self.polarity = Polarity::NotAction;
        self
    }

    #[inline]
    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty() || !self.not_actions.is_empty()
    }

    // Effect and Sid

    #[inline]
    pub fn allow(&mut self) -> &mut Self {
        self.effect(Effect::Allow)
    }

    #[inline]
    pub fn deny(&mut self) -> &mut Self {
        self.effect(Effect::Deny)
    }

    pub fn effect(&mut self, effect: Effect) -> &mut Self {
        self.effect = effect;
        self
    }

    pub fn sid<S: Into<String>>(&mut self, sid: S) -> &mut Self {
        self.sid = Some(sid.into());
        self
    }

    // Conditions

    /// Add a condition on `key`. Keys without a service prefix are qualified with this service's prefix.
    ///
    /// The operator defaults to `StringLike`. Writing the same key under the same operator again replaces the
    /// earlier value.
    pub fn with_condition<K, V>(&mut self, key: K, value: V, operator: Option<Operator>) -> &mut Self
    where
        K: AsRef<str>,
        V: Into<StringList>,
    {
        let key = self.registry.qualify(key.as_ref());
        let operator = operator.unwrap_or_else(|| Operator::from(condop::StringLike));

        if let Some(previous) = self.condition.insert_value(operator.clone(), key.as_str(), value) {
            debug!("Condition {} on {} replaced previous value {:?}", operator, key, previous);
        }

        self
    }

    /// Add a condition on one of this service's condition keys. Without an explicit operator, the default operator
    /// for the key's registered type is used; keys missing from the registry use `StringLike`.
    pub fn if_key<K, V>(&mut self, key: K, value: V, operator: Option<Operator>) -> &mut Self
    where
        K: AsRef<str>,
        V: Into<StringList>,
    {
        let key = self.registry.qualify(key.as_ref());
        let operator = match operator {
            Some(operator) => operator,
            None => match self.registry.condition_key(&key) {
                Some(descriptor) => descriptor.key_type().default_operator().into(),
                None => {
                    trace!("Condition key {} is not registered; using StringLike", key);
                    condop::StringLike.into()
                }
            },
        };

        self.with_condition(key, value, Some(operator))
    }

    /// Add a `Bool` condition on `key`. The value defaults to `true`.
    pub fn if_bool_key<K: AsRef<str>>(&mut self, key: K, value: Option<bool>) -> &mut Self {
        self.with_condition(key, value.unwrap_or(true), Some(condop::Bool.into()))
    }

    #[inline]
    pub fn has_conditions(&self) -> bool {
        !self.condition.is_empty()
    }

    // Resources

    /// Add a resource ARN or wildcard verbatim.
    pub fn on<R: Into<Resource>>(&mut self, resource: R) -> &mut Self {
        self.resources.insert(resource);
        self
    }

    /// Add several resource ARNs or wildcards verbatim.
    pub fn on_resources<I, R>(&mut self, resources: I) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Resource>,
    {
        self.resources.extend(resources);
        self
    }

    /// Add the ARN of a resource of type `name`, filling the template's identifier placeholders with `identifiers`
    /// in order. Partition, region, and account come from the builder's [ArnDefaults].
    ///
    /// # Errors
    ///
    /// Returns [BuilderError::UnknownResourceType] if the registry has no resource type named `name`.
    pub fn on_resource_type(&mut self, name: &str, identifiers: &[&str]) -> Result<&mut Self, BuilderError> {
        self.on_resource_type_in(name, identifiers, &ArnScope::default())
    }

    /// As [on_resource_type][Self::on_resource_type], with explicit partition, region, or account values taking
    /// precedence over the builder's [ArnDefaults].
    pub fn on_resource_type_in(
        &mut self,
        name: &str,
        identifiers: &[&str],
        scope: &ArnScope,
    ) -> Result<&mut Self, BuilderError> {
        let arn = match self.registry.resource_type(name) {
            Some(resource_type) => resource_type.arn_template().instantiate(identifiers, scope, &self.arn_defaults),
            None => {
                warn!("Service {} has no resource type {}", self.registry.service_prefix(), name);
                return Err(BuilderError::UnknownResourceType(name.to_string()));
            }
        };

        self.resources.insert(arn);
        Ok(self)
    }

    /// Replace the defaults used for omitted partition, region, and account values.
    pub fn arn_defaults(&mut self, arn_defaults: ArnDefaults) -> &mut Self {
        self.arn_defaults = arn_defaults;
        self
    }

    #[inline]
    pub fn has_resources(&self) -> bool {
        !self.resources.is_empty()
    }

    // Output

    /// Take a snapshot of the statement built so far.
    ///
    /// With no resources added, the statement applies to `*`. The `Action` element is present when it has entries
    /// or when there are no actions at all; `NotAction` is present only when it has entries.
    pub fn build(&self) -> Statement {
        let action = if !self.actions.is_empty() || self.not_actions.is_empty() {
            Some(self.actions.clone())
        } else {
            None
        };

        let not_action = if self.not_actions.is_empty() {
            None
        } else {
            Some(self.not_actions.clone())
        };

        let resource = if self.resources.is_empty() {
            ResourceList::any()
        } else {
            self.resources.clone()
        };

        let condition = if self.condition.is_empty() {
            None
        } else {
            Some(self.condition.clone())
        };

        Statement::new(self.sid.clone(), self.effect, action, not_action, resource, condition)
    }
}
