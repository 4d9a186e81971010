//! Shared HubSpot CRM data shapes.
//!
//! Company property and search filter types used by the CRM tools. These
//! mirror the wire shapes HubSpot expects; validation happens at
//! deserialization, before any request is built.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle stage a company can be in. HubSpot accepts only this fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[schemars(rename_all = "lowercase")]
pub enum LifecycleStage {
    Lead,
    Customer,
    Opportunity,
    Subscriber,
    Other,
}

/// Company properties sent to HubSpot.
///
/// The known subset is typed; any other property key passes through the
/// catch-all map untouched. All fields are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CompanyProperties {
    /// Company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Primary company domain (e.g. "acme.com").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Company website URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Free-form company description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Industry label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    /// Employee head count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numberofemployees: Option<f64>,

    /// Annual revenue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annualrevenue: Option<f64>,

    /// Street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// City.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State or region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// Country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Lifecycle stage, restricted to the HubSpot enumeration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecyclestage: Option<LifecycleStage>,

    /// Any other HubSpot company property, passed through verbatim.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, Value>,
}

/// Operators HubSpot accepts in search filters.
///
/// Closed set; anything else is rejected at deserialization, before any
/// network activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[schemars(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterOperator {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    Between,
    In,
    NotIn,
    HasProperty,
    NotHasProperty,
    ContainsToken,
    NotContainsToken,
}

/// A single search filter.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    /// HubSpot property the filter applies to.
    pub property_name: String,

    /// Comparison operator.
    pub operator: FilterOperator,

    /// Comparison value. Omitted for operators like HAS_PROPERTY.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// A group of filters. Filters within a group are ANDed; groups are ORed
/// (HubSpot semantics, not enforced locally).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FilterGroup {
    /// Filters applied conjunctively.
    pub filters: Vec<SearchFilter>,
}
