//! Attribute metadata types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attribute type code as reported by the metadata service.
///
/// Parsing is case-insensitive and never fails: codes this crate does not know
/// about are preserved verbatim in [`AttributeTypeCode::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttributeTypeCode {
    BigInt,
    Boolean,
    CalendarRules,
    Customer,
    DateTime,
    Decimal,
    Double,
    EntityName,
    Integer,
    Lookup,
    ManagedProperty,
    Memo,
    Money,
    Owner,
    PartyList,
    Picklist,
    State,
    Status,
    String,
    Uniqueidentifier,
    Virtual,
    /// Any code not listed above.
    Other(String),
}

impl AttributeTypeCode {
    /// Canonical name of the code, as the metadata service spells it.
    pub fn as_str(&self) -> &str {
        match self {
            AttributeTypeCode::BigInt => "BigInt",
            AttributeTypeCode::Boolean => "Boolean",
            AttributeTypeCode::CalendarRules => "CalendarRules",
            AttributeTypeCode::Customer => "Customer",
            AttributeTypeCode::DateTime => "DateTime",
            AttributeTypeCode::Decimal => "Decimal",
            AttributeTypeCode::Double => "Double",
            AttributeTypeCode::EntityName => "EntityName",
            AttributeTypeCode::Integer => "Integer",
            AttributeTypeCode::Lookup => "Lookup",
            AttributeTypeCode::ManagedProperty => "ManagedProperty",
            AttributeTypeCode::Memo => "Memo",
            AttributeTypeCode::Money => "Money",
            AttributeTypeCode::Owner => "Owner",
            AttributeTypeCode::PartyList => "PartyList",
            AttributeTypeCode::Picklist => "Picklist",
            AttributeTypeCode::State => "State",
            AttributeTypeCode::Status => "Status",
            AttributeTypeCode::String => "String",
            AttributeTypeCode::Uniqueidentifier => "Uniqueidentifier",
            AttributeTypeCode::Virtual => "Virtual",
            AttributeTypeCode::Other(code) => code,
        }
    }
}

impl FromStr for AttributeTypeCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = match s.trim().to_ascii_lowercase().as_str() {
            "bigint" => AttributeTypeCode::BigInt,
            "boolean" => AttributeTypeCode::Boolean,
            "calendarrules" => AttributeTypeCode::CalendarRules,
            "customer" => AttributeTypeCode::Customer,
            "datetime" => AttributeTypeCode::DateTime,
            "decimal" => AttributeTypeCode::Decimal,
            "double" => AttributeTypeCode::Double,
            "entityname" => AttributeTypeCode::EntityName,
            "integer" => AttributeTypeCode::Integer,
            "lookup" => AttributeTypeCode::Lookup,
            "managedproperty" => AttributeTypeCode::ManagedProperty,
            "memo" => AttributeTypeCode::Memo,
            "money" => AttributeTypeCode::Money,
            "owner" => AttributeTypeCode::Owner,
            "partylist" => AttributeTypeCode::PartyList,
            "picklist" => AttributeTypeCode::Picklist,
            "state" | "statecode" => AttributeTypeCode::State,
            "status" | "statuscode" => AttributeTypeCode::Status,
            "string" => AttributeTypeCode::String,
            "uniqueidentifier" => AttributeTypeCode::Uniqueidentifier,
            "virtual" => AttributeTypeCode::Virtual,
            _ => AttributeTypeCode::Other(s.to_string()),
        };
        Ok(code)
    }
}

impl From<String> for AttributeTypeCode {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(code) => code,
            Err(never) => match never {},
        }
    }
}

impl From<AttributeTypeCode> for String {
    fn from(code: AttributeTypeCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for AttributeTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeDescriptor {
    /// Backend field identifier, unique within the entity.
    pub logical_name: String,

    /// Type code; `None` when the metadata document omitted it.
    #[serde(default, rename = "AttributeType")]
    pub attribute_type: Option<AttributeTypeCode>,

    /// Whether this attribute holds the entity's primary id.
    #[serde(default)]
    pub is_primary_id: bool,
}

impl AttributeDescriptor {
    /// Create a non-primary attribute.
    pub fn new(logical_name: impl Into<String>, attribute_type: AttributeTypeCode) -> Self {
        Self {
            logical_name: logical_name.into(),
            attribute_type: Some(attribute_type),
            is_primary_id: false,
        }
    }

    /// Create an attribute whose type code is unknown.
    pub fn untyped(logical_name: impl Into<String>) -> Self {
        Self {
            logical_name: logical_name.into(),
            attribute_type: None,
            is_primary_id: false,
        }
    }

    /// Mark this attribute as the primary id.
    pub fn primary_id(mut self) -> Self {
        self.is_primary_id = true;
        self
    }

    /// Returns true if the attribute is a lookup (foreign key) attribute.
    pub fn is_lookup(&self) -> bool {
        matches!(self.attribute_type, Some(AttributeTypeCode::Lookup))
    }

    /// Key under which the web API exposes the attribute's value.
    ///
    /// Lookups other than the primary id are exposed as `_<logical_name>_value`,
    /// unless the logical name contains `activity`.
    pub fn api_name(&self) -> String {
        let name = &self.logical_name;
        if self.is_lookup() && !self.is_primary_id && !name.contains("activity") {
            format!("_{name}_value")
        } else {
            name.clone()
        }
    }
}
