//! crmgen - Code generator for CRM entity metadata
//!
//! The [`codegen`] module turns entity definitions from [`crmgen_core`] into a
//! C# class file and a TypeScript client module. The `crmgen` binary wraps it
//! with commands to list, check and generate.

pub mod codegen;
