use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use apiref_core::config::{self, ApirefConfig, CONFIG_FILE_NAME, SelectionConfig};
use apiref_core::derive::derive_menu;
use apiref_core::menu::{self, ApiDocument, MenuState, OperationIndex, Selection};
use apiref_core::parse;
use apiref_core::parse::spec::ReferenceSpec;
use apiref_core::{GeneratedFile, MenuRenderer};
use apiref_html::{HtmlConfig, HtmlGenerator};

#[derive(Parser)]
#[command(name = "apiref", about = "API reference navigation menu renderer", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the navigation menu from an OpenAPI document
    Render {
        /// Path to the OpenAPI document (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Index of the initially active section
        #[arg(long)]
        active_section: Option<usize>,

        /// Name of the initially selected resource
        #[arg(long)]
        resource: Option<String>,

        /// operationId of the initially selected operation
        #[arg(long)]
        operation: Option<String>,

        /// Wrap the fragment in a complete HTML page
        #[arg(long)]
        standalone: bool,
    },

    /// Validate an OpenAPI document's menu structure
    Validate {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Inspect the derived menu view-model
    Inspect {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new apiref configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            active_section,
            resource,
            operation,
            standalone,
        } => cmd_render(input, output, active_section, resource, operation, standalone),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "apiref", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<ApirefConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_spec(path: &Path) -> Result<ReferenceSpec> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let spec = match ext {
        "json" => parse::from_json(&content)?,
        _ => parse::from_yaml(&content)?,
    };

    Ok(spec)
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

/// Resources whose section id matches no section; they never render.
fn orphaned_resources(document: &ApiDocument) -> Vec<&str> {
    document
        .resources
        .iter()
        .filter(|r| document.section_index(&r.x_section_id).is_none())
        .map(|r| r.name.as_str())
        .collect()
}

fn cmd_render(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    active_section: Option<usize>,
    resource: Option<String>,
    operation: Option<String>,
    standalone: bool,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));

    let spec = load_spec(&input)?;
    let (document, index) = derive_menu(&spec);

    log::info!(
        "derived menu: {} sections, {} resources, {} operations",
        document.sections.len(),
        document.resources.len(),
        index.total_operations()
    );

    // CLI flags override config defaults
    let selection_cfg = SelectionConfig {
        active_section: active_section.unwrap_or(cfg.selection.active_section),
        resource: resource.or(cfg.selection.resource),
        operation: operation.or(cfg.selection.operation),
    };
    let selection = Selection::resolve(&selection_cfg, &document, &index);
    let state = MenuState::new(&document, &selection);
    let view = menu::view(&document, &index, &selection, &state);

    let html_cfg = HtmlConfig {
        standalone: standalone || cfg.render.standalone,
        title: cfg.render.title.clone(),
    };
    let files = HtmlGenerator.render(&view, &html_cfg)?;

    let output_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    write_files(&output_dir, &files)?;

    eprintln!(
        "Rendered {} file(s) in {}",
        files.len(),
        output_dir.display()
    );
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let spec = load_spec(&input)?;

    eprintln!(
        "Valid OpenAPI {} document: {}",
        spec.openapi, spec.info.title
    );
    eprintln!("  Version: {}", spec.info.version);
    eprintln!("  Sections: {}", spec.sections.len());
    eprintln!("  Tags: {}", spec.tags.len());
    eprintln!("  Paths: {}", spec.paths.len());

    // Also check that the menu view-model derives cleanly
    let (document, index) = derive_menu(&spec);
    eprintln!("  Resources: {}", document.resources.len());
    eprintln!("  Indexed operations: {}", index.total_operations());

    let orphans = orphaned_resources(&document);
    if !orphans.is_empty() {
        eprintln!(
            "  Orphaned resources (never rendered): {}",
            orphans.join(", ")
        );
    }

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let spec = load_spec(&input)?;
    let (document, index) = derive_menu(&spec);

    let summary = build_inspect_summary(&spec, &document, &index);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(
    spec: &ReferenceSpec,
    document: &ApiDocument,
    index: &OperationIndex,
) -> serde_json::Value {
    let sections: Vec<serde_json::Value> = document
        .sections
        .iter()
        .map(|s| {
            serde_json::json!({
                "x-id": s.x_id,
                "name": s.name,
                "resources": document
                    .resources_in(&s.x_id)
                    .map(|r| r.name.clone())
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    let operations: Vec<serde_json::Value> = index
        .iter()
        .map(|(resource, ops)| {
            serde_json::json!({
                "resource": resource,
                "operations": ops
                    .iter()
                    .map(|o| serde_json::json!({
                        "operationId": o.operation_id,
                        "summary": o.summary,
                    }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    serde_json::json!({
        "info": {
            "title": spec.info.title,
            "version": spec.info.version,
        },
        "sections": sections,
        "orphaned_resources": orphaned_resources(document),
        "operations_by_resource": operations,
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
