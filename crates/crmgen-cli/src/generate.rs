//! Generate command implementation

use anyhow::{Context, Result};
use clap::ValueEnum;
use crmgen_cli::codegen::{
    CSharpEmitter, ClassEmitter, Substitution, Template, generate_class_file, generate_module,
};
use crmgen_core::{EntityDescriptor, GeneratorConfig, MetadataDocument};
use std::fs;
use std::path::{Path, PathBuf};

/// Artifact selector for `--only`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Artifact {
    /// The C# class file
    Class,
    /// The TypeScript client module
    Module,
}

/// Arguments of the generate command
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub input: PathBuf,
    pub entities: Vec<String>,
    pub output: PathBuf,
    pub namespace: Option<String>,
    pub template: Option<PathBuf>,
    pub only: Option<Artifact>,
}

impl GenerateArgs {
    fn wants(&self, artifact: Artifact) -> bool {
        self.only.is_none_or(|only| only == artifact)
    }
}

/// Apply command-line overrides on top of the loaded configuration
fn apply_overrides(mut config: GeneratorConfig, args: &GenerateArgs) -> GeneratorConfig {
    if let Some(namespace) = &args.namespace {
        config.namespace = namespace.clone();
    }
    if let Some(template) = &args.template {
        config.template_path = Some(template.clone());
    }
    config
}

/// Entities to generate: the requested ones in order, or the whole document
fn resolve_selection(doc: &MetadataDocument, names: &[String]) -> Result<Vec<EntityDescriptor>> {
    if names.is_empty() {
        return Ok(doc.entities().to_vec());
    }
    Ok(doc.select(names)?)
}

/// Class file name, with the emitter's extension added when the configured name has none
fn class_file_name(configured: &str, emitter: &impl ClassEmitter) -> String {
    if Path::new(configured).extension().is_some() {
        configured.to_string()
    } else {
        format!("{configured}.{}", emitter.extension())
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {path:?}"))
}

/// Generate command implementation
pub fn run(args: &GenerateArgs, config: GeneratorConfig) -> Result<()> {
    let config = apply_overrides(config, args);
    config.validate()?;

    let doc = MetadataDocument::from_file(&args.input)
        .with_context(|| format!("Failed to load metadata: {:?}", args.input))?;
    let entities = resolve_selection(&doc, &args.entities)?;

    for entity in &entities {
        if let Err(e) = entity.validate() {
            tracing::warn!(
                entity = %entity.logical_name,
                error = %e,
                "Generating from invalid entity"
            );
        }
    }

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create directory: {:?}", args.output))?;

    tracing::info!(entities = entities.len(), output = ?args.output, "Generating code");

    if args.wants(Artifact::Class) {
        let emitter = CSharpEmitter;
        let code = generate_class_file(&config.namespace, &entities, &emitter);
        let path = args.output.join(class_file_name(&config.class_file, &emitter));
        write_file(&path, &code)?;
        println!("✓ Class file: {}", path.display());
    }

    if args.wants(Artifact::Module) {
        let template = Template::from_config(&config)?;
        let module = generate_module(&entities, &template);
        if let Substitution::PlaceholderMissing(_) = module {
            eprintln!(
                "warning: template has no '{}' placeholder, module content was dropped",
                template.placeholder()
            );
        }
        let path = args.output.join(&config.module_file);
        write_file(&path, module.text())?;
        println!("✓ Client module: {}", path.display());
    }

    println!("✓ Entities: {}", entities.len());

    Ok(())
}
