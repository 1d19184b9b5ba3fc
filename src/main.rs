use clap::{Parser, Subcommand};
use docs_shell::{config, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "docs-shell")]
#[command(about = "Render documentation pages into a shared page shell")]
#[command(long_about = "\
Render documentation pages into a shared page shell

Every page gets the same layout: a search box, site navigation, the page
content, and a sticky \"Contents\" sidebar linking to the page's headings.

Source structure:

  docs/
  ├── pages.json      # Site manifest: one entry per page, in nav order
  └── config.toml     # Shell config (optional)

Each page entry:

  {
    \"name\": \"Button\",
    \"url\": \"/Button.html\",
    \"exports\": { \"title\": \"Button\", \"description\": \"...\" },
    \"tableOfContents\": [{ \"title\": \"Button\", \"children\": [...] }],
    \"content\": \"# Button\\n\\n## Usage\\n...\"
  }

Title resolution (first available wins):
  exports.title → first outline entry → page name

The outline is derived from the content's headings when
tableOfContents is omitted.

Run 'docs-shell gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Source directory containing pages.json
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page of the manifest to the output directory
    Build,
    /// Validate the manifest and config without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let manifest_path = cli.source.join("pages.json");

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Rendering {}", manifest_path.display());
            let rendered = generate::generate(&manifest_path, &cli.output, &site_config)?;
            output::print_generate_output(&rendered);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            config::load_config(&cli.source)?;
            let manifest = generate::load_manifest(&manifest_path)?;
            generate::validate_urls(&manifest)?;
            output::print_check_output(&manifest);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
