//! Command-line interface for apidoc.
//! This binary converts APi documentation markup projects into static HTML.
//!
//! Usage:
//!   apidoc export `<document>` [--project `<dir>`] [--out `<dir>`] ...  - Export a document to HTML
//!   apidoc inspect `<document>` [--format `<format>`]                   - Dump the parsed document tree
//!   apidoc list [--project `<dir>`]                                     - List documents in the project

use apidoc_config::{ApidocConfig, Loader};
use apidoc_export::{publish, ExportSpec};
use apidoc_parser::{list_documents, load_document};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fs;
use std::path::PathBuf;
use std::process;

fn main() {
    let matches = Command::new("apidoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting APi documentation markup into static HTML")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("export")
                .about("Export a document to a set of HTML pages plus a stylesheet")
                .arg(
                    Arg::new("document")
                        .help("Document name without extension (a file or a directory)")
                        .required(true)
                        .index(1),
                )
                .arg(project_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Document title shown in the page header"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .help("Output directory name, resolved against the project root"),
                )
                .arg(
                    Arg::new("html-template")
                        .long("html-template")
                        .help("HTML template file name, resolved against the project root"),
                )
                .arg(
                    Arg::new("css-template")
                        .long("css-template")
                        .help("CSS template file name, resolved against the project root"),
                )
                .arg(
                    Arg::new("no-highlight")
                        .long("no-highlight")
                        .help("Skip regex code styling for Code elements")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Parse a document and print its category tree")
                .arg(
                    Arg::new("document")
                        .help("Document name without extension (a file or a directory)")
                        .required(true)
                        .index(1),
                )
                .arg(project_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: summary or json")
                        .default_value("summary"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List all documents in the project root")
                .arg(project_arg())
                .arg(config_arg()),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("export", sub)) => handle_export_command(sub),
        Some(("inspect", sub)) => handle_inspect_command(sub),
        Some(("list", sub)) => handle_list_command(sub),
        _ => unreachable!("a subcommand is required"),
    }
}

fn project_arg() -> Arg {
    Arg::new("project")
        .long("project")
        .short('p')
        .help("Project root directory (overrides configuration)")
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .help("TOML configuration file (default: ./apidoc.toml when present)")
}

/// Layer the configuration for a subcommand: embedded defaults, then the
/// configuration file, then any matching CLI flags.
fn load_config(sub: &ArgMatches, overrides: &[(&str, &str)]) -> ApidocConfig {
    let mut loader = match sub.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("apidoc.toml"),
    };
    for (arg, key) in overrides {
        if let Some(value) = sub.get_one::<String>(arg) {
            loader = loader
                .set_override(key, value.clone())
                .unwrap_or_else(|err| fail(&format!("Configuration error: {err}")));
        }
    }
    loader
        .build()
        .unwrap_or_else(|err| fail(&format!("Configuration error: {err}")))
}

fn handle_export_command(sub: &ArgMatches) {
    let mut config = load_config(
        sub,
        &[
            ("project", "project.root"),
            ("title", "export.title"),
            ("out", "export.output"),
            ("html-template", "templates.html"),
            ("css-template", "templates.css"),
        ],
    );
    if sub.get_flag("no-highlight") {
        config.export.highlight = false;
    }

    let root = PathBuf::from(&config.project.root);
    let name = sub
        .get_one::<String>("document")
        .expect("document is required");

    let document = load_document(&root, name)
        .unwrap_or_else(|err| fail(&format!("Couldn't load the document: {err}")));
    if document.is_empty() {
        eprintln!("Load successful, however there is no data to read.");
    }

    let html_path = root.join(&config.templates.html);
    if !html_path.is_file() {
        fail(&format!(
            "Target html template file '{}' doesn't exist",
            html_path.display()
        ));
    }
    let css_path = root.join(&config.templates.css);
    if !css_path.is_file() {
        fail(&format!(
            "Target css template file '{}' doesn't exist",
            css_path.display()
        ));
    }

    let template_lines: Vec<String> = read_file(&html_path)
        .lines()
        .map(str::to_string)
        .collect();
    let css_text = read_file(&css_path);

    let target = root.join(&config.export.output);
    if let Err(err) = fs::create_dir_all(&target) {
        fail(&format!(
            "Couldn't create the export directory '{}': {err}",
            target.display()
        ));
    }

    let spec = ExportSpec::new(
        &document.categories,
        &config.export.title,
        &target,
        template_lines,
        css_text,
    )
    .with_highlight(config.export.highlight)
    .with_extra_styles(config.code_styles());

    let report = publish(spec).unwrap_or_else(|err| fail(&format!("Export error: {err}")));
    for file in &report.files {
        println!("wrote {}", file.display());
    }
    println!("Export successful.");
}

fn handle_inspect_command(sub: &ArgMatches) {
    let config = load_config(sub, &[("project", "project.root")]);
    let root = PathBuf::from(&config.project.root);
    let name = sub
        .get_one::<String>("document")
        .expect("document is required");

    let document = load_document(&root, name)
        .unwrap_or_else(|err| fail(&format!("Couldn't load the document: {err}")));

    let format = sub.get_one::<String>("format").expect("format is defaulted");
    match format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&document)
                .unwrap_or_else(|err| fail(&format!("Couldn't serialize the document: {err}")));
            println!("{json}");
        }
        "summary" => {
            for category in &document.categories {
                let mut line = category.title.clone();
                if let Some(attribute) = &category.parent_attribute {
                    line.push_str(&format!(" |{attribute}"));
                }
                if category.read_only {
                    line.push_str(" (read-only)");
                }
                println!("{line}  [{} elements]", category.elements.len());
            }
            println!(
                "{} categories, {} elements",
                document.category_count(),
                document.element_count()
            );
        }
        other => {
            eprintln!("Format '{other}' not supported");
            eprintln!("Available formats: summary, json");
            process::exit(1);
        }
    }
}

fn handle_list_command(sub: &ArgMatches) {
    let config = load_config(sub, &[("project", "project.root")]);
    let root = PathBuf::from(&config.project.root);

    let documents = list_documents(&root)
        .unwrap_or_else(|err| fail(&format!("Couldn't list the project documents: {err}")));
    for document in &documents {
        if let Some(name) = document.file_name() {
            println!("{}", name.to_string_lossy());
        }
    }
}

fn read_file(path: &std::path::Path) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|err| fail(&format!("Couldn't read '{}': {err}", path.display())))
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    process::exit(1);
}
