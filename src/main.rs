//! Label Templates CLI
//!
//! Usage:
//!   label-templates [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list      List template names, optionally filtered
//!   show      Show a template and the position of every label
//!   known     Print every known template
//!   aliases   Print the aliases of a template
//!   papers    List known page sizes
//!   register  Register the templates found in a file

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use label_templates::store::TomlTemplateStore;
use label_templates::{
    free_name_list, PaperCatalog, PaperSource, Registration, RegistryConfig, RegistryError,
    TemplateRegistry,
};

#[derive(Parser)]
#[command(name = "label-templates")]
#[command(about = "Query and register label and card templates")]
struct Cli {
    /// System template directory
    #[arg(long, global = true)]
    system_dir: Option<PathBuf>,

    /// User template directory
    #[arg(long, global = true)]
    user_dir: Option<PathBuf>,

    /// Paper size catalog (TOML format)
    #[arg(short, long, global = true)]
    papers: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List template names, optionally filtered
    List {
        /// Only templates for this page size
        #[arg(long)]
        page_size: Option<String>,

        /// Only templates in this category
        #[arg(long)]
        category: Option<String>,

        /// Include every alias instead of one name per template
        #[arg(short, long)]
        all: bool,
    },

    /// Show a template and the position of every label
    Show { name: String },

    /// Print every known template
    Known,

    /// Print the aliases of a template
    Aliases { name: String },

    /// List known page sizes
    Papers,

    /// Register the templates found in a file
    Register { file: PathBuf },
}

type Registry = TemplateRegistry<PaperCatalog, TomlTemplateStore>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let papers = match &cli.papers {
        Some(path) => match PaperCatalog::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading paper catalog '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => PaperCatalog::default(),
    };

    let mut config = RegistryConfig::new();
    if let Some(dir) = &cli.system_dir {
        config = config.with_system_dir(dir);
    }
    if let Some(dir) = &cli.user_dir {
        config = config.with_user_dir(dir);
    }

    let mut registry = TemplateRegistry::new(config, papers, TomlTemplateStore::new());

    if let Err(e) = run(cli.command, &mut registry) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    registry.shutdown();
}

fn run(command: Command, registry: &mut Registry) -> Result<(), RegistryError> {
    match command {
        Command::List {
            page_size,
            category,
            all,
        } => {
            let names = if all {
                registry.list_names_all(page_size.as_deref(), category.as_deref())?
            } else {
                registry.list_names_unique(page_size.as_deref(), category.as_deref())?
            };
            for name in &names {
                println!("{}", name);
            }
            free_name_list(names);
        }
        Command::Show { name } => {
            let found = registry.lookup_by_name(Some(&name))?;
            if !found.is_exact() {
                eprintln!(
                    "No template named '{}'; showing default '{}'",
                    name,
                    found.template().name()
                );
            }
            print_template(&found.into_template(), registry.papers());
        }
        Command::Known => {
            print!("{}", registry.known_templates_report()?);
        }
        Command::Aliases { name } => {
            let found = registry.lookup_by_name(Some(&name))?;
            if !found.is_exact() {
                eprintln!("No template named '{}'", name);
                process::exit(1);
            }
            print!("{}", found.template().aliases_report());
        }
        Command::Papers => {
            for paper in registry.papers().papers() {
                println!("{}\t{:.2} x {:.2} pt\t{}", paper.id, paper.width, paper.height, paper.name);
            }
        }
        Command::Register { file } => register_file(&file, registry)?,
    }
    Ok(())
}

fn register_file(path: &Path, registry: &mut Registry) -> Result<(), RegistryError> {
    let templates = match TomlTemplateStore::new().try_read_templates(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading '{}': {}", path.display(), e);
            process::exit(1);
        }
    };

    for template in &templates {
        let outcome = match registry.register(template)? {
            Registration::Added => "registered",
            Registration::AlreadyKnown => "already known",
            Registration::UnknownPageSize => "rejected: unknown page size",
        };
        println!("{}: {}", template.name(), outcome);
    }
    Ok(())
}

fn print_template(template: &label_templates::Template, papers: &PaperCatalog) {
    println!("Name:        {}", template.name());
    println!("Description: {}", template.description);

    let (width, height) = if papers.is_other(&template.page_size) {
        (template.page_width, template.page_height)
    } else {
        papers
            .lookup(&template.page_size)
            .map(|p| (p.width, p.height))
            .unwrap_or((template.page_width, template.page_height))
    };
    println!(
        "Page:        {} ({:.2} x {:.2} pt)",
        template.page_size, width, height
    );

    if template.aliases().len() > 1 {
        println!("Aliases:     {}", template.aliases()[1..].join(", "));
    }
    if !template.categories().is_empty() {
        println!("Categories:  {}", template.categories().join(", "));
    }

    let Some(frame) = template.first_frame() else {
        println!("(no frames)");
        return;
    };
    let size = frame.size();
    println!(
        "Label:       {} {:.2} x {:.2} pt, {} per sheet",
        frame.shape.kind(),
        size.width,
        size.height,
        frame.label_count()
    );
    if !frame.markups().is_empty() {
        let kinds: Vec<&str> = frame.markups().iter().map(|m| m.kind()).collect();
        println!("Markups:     {}", kinds.join(", "));
    }
    for (i, origin) in frame.origins().iter().enumerate() {
        println!("  #{:<3} x={:>8.2} y={:>8.2}", i + 1, origin.x, origin.y);
    }
}
