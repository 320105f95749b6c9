use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use sectiongen_core::plan::GenerateOutput;
use sectiongen_core::registry::RegistryConfig;
use std::path::{Path, PathBuf};

use crate::generate::generate_section;
use crate::notify::TerminalNotifier;
use crate::registry::create_registry_client;

/// Language of the generated files.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Language {
    /// TypeScript (default)
    Ts,
    /// JavaScript
    Js,
}

#[derive(Debug, clap::Args, Clone)]
pub struct SectionOptions {
    /// Name of the section to generate (e.g., "Hero")
    pub name: String,

    /// Project source directory the section is written into
    #[arg(short, long, env = "SECTIONGEN_PATH", default_value = "src")]
    pub path: PathBuf,

    /// Overwrite existing files (existing files are always replaced)
    #[arg(short, long)]
    pub force: bool,

    /// Language of the generated files
    #[arg(short, long, value_enum, default_value = "ts")]
    pub language: Language,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: SectionOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        let header = format_verbose_header(global.registry_url.as_deref(), &options.path);
        print_verbose_header(&header, options.json);
    }

    log::debug!(
        "section {} (force: {}, language: {:?})",
        options.name,
        options.force,
        options.language
    );

    let client = create_registry_client(RegistryConfig::from_optional(global.registry_url))?;
    let notifier = TerminalNotifier::new(options.json);

    let result = generate_section(&client, &options.name, &options.path, &notifier).await;
    notifier.finish();

    let output = result.with_context(|| f!("Failed to generate section '{}'", options.name))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", format_summary(&output));
    }

    Ok(())
}

/// Where diagnostic text goes for a given output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// `--json` reserves stdout for the output document.
pub fn verbose_stream(json: bool) -> OutputStream {
    if json {
        OutputStream::Stderr
    } else {
        OutputStream::Stdout
    }
}

/// Preamble shown with `--verbose`.
pub fn format_verbose_header(registry_url: Option<&str>, path: &Path) -> String {
    f!(
        "Registry: {}\nTarget: {}\n",
        registry_url.unwrap_or("<unset>"),
        path.display()
    )
}

pub fn print_verbose_header(header: &str, json: bool) {
    match verbose_stream(json) {
        OutputStream::Stdout => println!("{header}"),
        OutputStream::Stderr => eprintln!("{header}"),
    }
}

/// One-line summary printed after the per-file notifications.
pub fn format_summary(output: &GenerateOutput) -> String {
    let noun = if output.files.len() == 1 { "file" } else { "files" };

    f!(
        "{} {} {} {} {}",
        f!("Generated {}", output.kind).bright_white().bold(),
        output.name.bright_cyan().bold(),
        f!("({} {noun})", output.files.len()).bright_white(),
        "in".bright_white(),
        output.directory.display().to_string().cyan()
    )
}
