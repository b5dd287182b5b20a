#![warn(clippy::all)]
//! Build AWS IAM policy statements from per-service action registries.
//!
//! An [ActionRegistry] describes one service: its actions and their access levels, its resource types and their ARN
//! templates, and its condition keys. A [StatementBuilder] accumulates actions, resources, and conditions against a
//! shared registry and produces [Statement] snapshots that serialize to IAM policy JSON.
//!
//! ```
//! use {scratchstack_aspen_builder::ActionRegistry, std::{str::FromStr, sync::Arc}};
//!
//! let dax = Arc::new(ActionRegistry::from_str(r#"{
//!     "servicePrefix": "dax",
//!     "actions": {"GetItem": {"accessLevel": "Read"}},
//!     "resourceTypes": {
//!         "application": {"arn": "arn:${Partition}:dax:${Region}:${Account}:cache/${ClusterName}"}
//!     }
//! }"#).unwrap());
//!
//! let mut sb = dax.statement();
//! sb.to("GetItem").on_resource_type("application", &["my-cluster"]).unwrap().allow();
//! assert_eq!(
//!     serde_json::to_string(&sb.build()).unwrap(),
//!     r#"{"Effect":"Allow","Action":["dax:GetItem"],"Resource":["arn:aws:dax:::cache/my-cluster"]}"#
//! );
//! ```
pub(crate) mod access_level;
pub(crate) mod action;
pub(crate) mod builder;
pub(crate) mod condition;
pub(crate) mod effect;
pub(crate) mod error;
pub(crate) mod global;
pub(crate) mod policy;
pub(crate) mod registry;
pub(crate) mod resource;
pub(crate) mod statement;

#[macro_use]
pub(crate) mod serutil;

pub use {
    access_level::AccessLevel,
    action::{qualify, ActionList},
    builder::{Polarity, Selector, StatementBuilder},
    condition::{
        binary_value, op as condop, Condition, ConditionKeyType, ConditionMap, ConditionOp, Operator, SetQualifier,
    },
    effect::Effect,
    error::BuilderError,
    policy::{Policy, PolicyBuilder, PolicyBuilderError, PolicyVersion},
    registry::{
        ActionDescriptor, ActionDescriptorBuilder, ActionDescriptorBuilderError, ActionRegistry, ActionRegistryBuilder,
        ActionRegistryBuilderError, ConditionKeyDescriptor, ConditionKeyDescriptorBuilder,
        ConditionKeyDescriptorBuilderError, ResourceTypeDescriptor, ResourceTypeDescriptorBuilder,
        ResourceTypeDescriptorBuilderError, ResourceTypeOnAction,
    },
    resource::{
        ArnDefaults, ArnDefaultsBuilder, ArnDefaultsBuilderError, ArnScope, ArnScopeBuilder, ArnScopeBuilderError,
        ArnTemplate, Resource, ResourceList,
    },
    serutil::StringList,
    statement::Statement,
};
