//! Attribute type mappings for the generated artifacts.
//!
//! Every attribute type code maps to exactly one [`TargetType`]. The mapping is
//! closed: booleans, dates and option sets all collapse to text.
//!
//! # Type Mappings
//!
//! | Attribute type | Target | TypeScript | C# |
//! |----------------|--------|------------|----|
//! | `Integer`, `BigInt`, `Virtual`, `State` | Numeric | `number` | `int` |
//! | `Money`, `Decimal`, `Double` | Numeric | `number` | `int` |
//! | anything else, or missing | Textual | `string` | `string` |

use crmgen_core::{AttributeDescriptor, AttributeTypeCode};

/// Target type of a generated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    Numeric,
    Textual,
}

impl TargetType {
    /// TypeScript type keyword.
    pub fn typescript(self) -> &'static str {
        match self {
            TargetType::Numeric => "number",
            TargetType::Textual => "string",
        }
    }

    /// C# type keyword.
    pub fn csharp(self) -> &'static str {
        match self {
            TargetType::Numeric => "int",
            TargetType::Textual => "string",
        }
    }
}

/// Map an attribute type code to its target type.
pub fn map_type(code: &AttributeTypeCode) -> TargetType {
    match code {
        AttributeTypeCode::Integer
        | AttributeTypeCode::BigInt
        | AttributeTypeCode::Virtual
        | AttributeTypeCode::State
        | AttributeTypeCode::Money
        | AttributeTypeCode::Decimal
        | AttributeTypeCode::Double => TargetType::Numeric,
        _ => TargetType::Textual,
    }
}

/// Target type of an attribute; a missing type code is textual.
pub fn attribute_type(attribute: &AttributeDescriptor) -> TargetType {
    attribute
        .attribute_type
        .as_ref()
        .map_or(TargetType::Textual, map_type)
}
