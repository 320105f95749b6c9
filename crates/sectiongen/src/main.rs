use crate::prelude::*;
use clap::Parser;

mod component;
mod generate;
mod materialize;
mod notify;
mod prelude;
mod registry;
mod section;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Fetch UI sections and components from a registry and write them into your project"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the section registry
    #[clap(long, env = "SECTIONGEN_REGISTRY_URL", global = true)]
    registry_url: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "SECTIONGEN_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Generate a section, its schema and its components
    Section(crate::section::SectionOptions),

    /// Generate a single component
    Component(crate::component::ComponentOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Section(options) => crate::section::run(options, app.global).await,
        SubCommands::Component(options) => crate::component::run(options, app.global).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        App::command().debug_assert();
    }

    #[test]
    fn test_parse_section_command() {
        let app = App::try_parse_from([
            "sectiongen",
            "section",
            "hero",
            "--path",
            "web/src",
            "--language",
            "js",
            "--registry-url",
            "https://registry.test",
        ])
        .unwrap();

        assert_eq!(app.global.registry_url.as_deref(), Some("https://registry.test"));
        match app.command {
            SubCommands::Section(options) => {
                assert_eq!(options.name, "hero");
                assert_eq!(options.path, std::path::PathBuf::from("web/src"));
                assert!(matches!(options.language, crate::section::Language::Js));
                assert!(!options.force);
            }
            other => panic!("expected section command, got {other:?}"),
        }
    }

    #[test]
    fn test_section_name_is_required() {
        assert!(App::try_parse_from(["sectiongen", "section"]).is_err());
    }

    #[test]
    fn test_parse_component_command() {
        let app = App::try_parse_from(["sectiongen", "component", "Badge", "--json"]).unwrap();
        match app.command {
            SubCommands::Component(options) => {
                assert_eq!(options.name, "Badge");
                assert!(options.json);
            }
            other => panic!("expected component command, got {other:?}"),
        }
    }
}
