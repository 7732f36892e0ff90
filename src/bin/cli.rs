use clap::{Parser, Subcommand};
use blockscript::compiler::core::{GenConfig, Generator};
use blockscript::compiler::loader;
use blockscript::compiler::registry::Registry;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a block graph file to DSL source text
    Compile {
        /// Path to the graph YAML file
        file: PathBuf,
        /// Text injected after every emitted statement
        #[arg(long)]
        suffix: Option<String>,
        /// Write the DSL text here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Load and compile a graph file, reporting problems without emitting text
    Check {
        /// Path to the graph YAML file
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Compile { file, suffix, output } => {
            info!("Loading graph from: {:?}", file);
            let root = loader::load_graph_from_yaml(&file.to_string_lossy())?;

            let registry = Registry::with_builtins();
            let generator = Generator::new(&registry);
            let config = GenConfig { statement_suffix: suffix.clone() };
            let code = generator.compile(&root, &config)?;

            match output {
                Some(path) => {
                    fs::write(path, &code)
                        .with_context(|| format!("Failed to write output to {:?}", path))?;
                    info!("Wrote {} bytes to {:?}", code.len(), path);
                }
                None => println!("{code}"),
            }
        }
        Commands::Check { file } => {
            let root = loader::load_graph_from_yaml(&file.to_string_lossy())?;
            let registry = Registry::with_builtins();
            Generator::new(&registry).compile(&root, &GenConfig::default())?;
            info!("OK: {} blocks", root.size());
        }
    }

    Ok(())
}
