use crate::prelude::{println, *};
use sectiongen_core::registry::RegistryConfig;
use std::path::PathBuf;

use crate::generate::generate_component;
use crate::notify::TerminalNotifier;
use crate::registry::create_registry_client;
use crate::section::{format_summary, format_verbose_header, print_verbose_header};

#[derive(Debug, clap::Args, Clone)]
pub struct ComponentOptions {
    /// Name of the component to generate (e.g., "Badge")
    pub name: String,

    /// Project source directory the component is written into
    #[arg(short, long, env = "SECTIONGEN_PATH", default_value = "src")]
    pub path: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ComponentOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        let header = format_verbose_header(global.registry_url.as_deref(), &options.path);
        print_verbose_header(&header, options.json);
    }

    let client = create_registry_client(RegistryConfig::from_optional(global.registry_url))?;
    let notifier = TerminalNotifier::new(options.json);

    let result = generate_component(&client, &options.name, &options.path, &notifier).await;
    notifier.finish();

    let output = result.with_context(|| f!("Failed to generate component '{}'", options.name))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", format_summary(&output));
    }

    Ok(())
}
