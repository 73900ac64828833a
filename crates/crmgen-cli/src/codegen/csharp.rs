//! C# class file generation from the class model.

use super::class_model::{ClassModel, CodeNamespace, FieldModel};

/// Serializes a [`CodeNamespace`] into source text for one target language.
pub trait ClassEmitter {
    /// File extension of the emitted source, without the dot.
    fn extension(&self) -> &'static str;

    /// Emit the complete source file.
    fn emit(&self, namespace: &CodeNamespace) -> String;
}

/// Emits public classes with public fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct CSharpEmitter;

impl ClassEmitter for CSharpEmitter {
    fn extension(&self) -> &'static str {
        "cs"
    }

    fn emit(&self, namespace: &CodeNamespace) -> String {
        let mut code = String::new();

        code.push_str("// <auto-generated>\n");
        code.push_str("//     Generated by crmgen. Changes to this file will be lost.\n");
        code.push_str("// </auto-generated>\n\n");

        code.push_str(&format!("namespace {}\n{{\n", namespace.name));

        for (i, class) in namespace.classes.iter().enumerate() {
            if i > 0 {
                code.push('\n');
            }
            emit_class(&mut code, class);
        }

        code.push_str("}\n");
        code
    }
}

fn emit_class(code: &mut String, class: &ClassModel) {
    code.push_str(&format!("    public class {}\n    {{\n", class.name));
    for field in &class.fields {
        emit_field(code, field);
    }
    code.push_str("    }\n");
}

fn emit_field(code: &mut String, field: &FieldModel) {
    let ty = field.ty.csharp();
    match &field.constant {
        Some(value) => code.push_str(&format!(
            "        public const {} {} = \"{}\";\n",
            ty,
            field.name,
            escape(value)
        )),
        None => code.push_str(&format!("        public {} {};\n", ty, field.name)),
    }
}

/// Escape a value for a regular C# string literal.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
