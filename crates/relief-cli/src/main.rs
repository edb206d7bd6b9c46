//! Relief CLI — mesh generation, benchmarking, and validation.

use clap::{Parser, Subcommand};

use relief_cli::commands;

#[derive(Parser)]
#[command(name = "relief")]
#[command(version, about = "Relief — turns images into watertight, printable meshes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a mesh from a procedural scenario image.
    Generate {
        /// Source image (flat_gray, gradient, radial_dome, checkerboard, centre_spot).
        #[arg(short, long, default_value = "radial_dome")]
        scenario: String,

        /// Settings file (TOML). Defaults apply to missing fields.
        #[arg(short, long)]
        config: Option<String>,

        /// Override the grid resolution.
        #[arg(short, long)]
        resolution: Option<u32>,

        /// Output mesh JSON path.
        #[arg(short, long)]
        output: Option<String>,

        /// Print every progress milestone.
        #[arg(long)]
        progress: bool,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (a scenario name or `all`).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Override the grid resolution.
        #[arg(short, long)]
        resolution: Option<u32>,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a settings file (.toml) or a mesh (.json).
    Validate {
        /// Path to settings or mesh file.
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            scenario,
            config,
            resolution,
            output,
            progress,
        } => commands::generate(
            &scenario,
            config.as_deref(),
            resolution,
            output.as_deref(),
            progress,
        ),
        Commands::Benchmark {
            scenario,
            resolution,
            output,
        } => commands::benchmark(&scenario, resolution, output.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
