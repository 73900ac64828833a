//! Naming rules for generated identifiers.
//!
//! # Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `account` | [`first_upper`] | `Account` |
//! | lookup `primarycontactid` | [`lookup_fixer`] | `_primarycontactid_value` |
//! | `Account` | [`route_name`] | `accounts` |
//! | entity | [`type_name`] | schema name, or [`first_upper`] of the logical name |

use crmgen_core::{AttributeDescriptor, EntityDescriptor};

/// Capitalize the first character, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// use crmgen_cli::codegen::naming::first_upper;
///
/// assert_eq!(first_upper("account"), "Account");
/// assert_eq!(first_upper("Account"), "Account");
/// assert_eq!(first_upper(""), "");
/// ```
pub fn first_upper(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Key under which the web API exposes an attribute's value.
///
/// Lookup attributes that are not the primary id are exposed as
/// `_<logical_name>_value`, except when the attribute's own logical name
/// contains `activity` (case-sensitive).
///
/// # Examples
///
/// ```
/// use crmgen_cli::codegen::naming::lookup_fixer;
/// use crmgen_core::{AttributeDescriptor, AttributeTypeCode};
///
/// let contact = AttributeDescriptor::new("primarycontactid", AttributeTypeCode::Lookup);
/// assert_eq!(lookup_fixer(&contact), "_primarycontactid_value");
///
/// let name = AttributeDescriptor::new("name", AttributeTypeCode::String);
/// assert_eq!(lookup_fixer(&name), "name");
/// ```
pub fn lookup_fixer(attribute: &AttributeDescriptor) -> String {
    attribute.api_name()
}

/// Web API route derived from an entity logical name.
///
/// Naive pluralization: irregular plurals are not handled.
pub fn route_name(logical_name: &str) -> String {
    format!("{}s", first_upper(logical_name).to_lowercase())
}

/// Type name used for an entity's generated interfaces and classes.
pub fn type_name(entity: &EntityDescriptor) -> String {
    if entity.schema_name.is_empty() {
        first_upper(&entity.logical_name)
    } else {
        entity.schema_name.clone()
    }
}
