use clap::Parser;
use std::path::PathBuf;
use tonelift_cli::{parse_tile_grid, process_single_image};
use tonelift_core::config::{config_handle, load_config, log_config_usage, set_verbose};
use tonelift_core::verbose_println;

#[derive(Parser)]
#[command(name = "tonelift")]
#[command(version, about = "Automatic contrast and color correction for photos", long_about = None)]
struct Cli {
    /// Input image file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file or directory
    #[arg(short, long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Histogram clip limit (relative to uniform bin count)
    #[arg(long, value_name = "FLOAT")]
    clip_limit: Option<f32>,

    /// Tile grid for local equalization, e.g. "8x8"
    #[arg(long, value_name = "COLSxROWS")]
    tiles: Option<String>,

    /// Gamma applied to the equalized lightness
    #[arg(long, value_name = "FLOAT")]
    gamma: Option<f32>,

    /// Blend weight of the correction against the original (0-1)
    #[arg(long, value_name = "FLOAT")]
    alpha: Option<f32>,

    /// Config file to load instead of the default search paths
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of parallel threads
    #[arg(short = 'j', long, value_name = "N")]
    threads: Option<usize>,

    /// Enable debug output
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    set_verbose(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
    }

    let mut config = if let Some(path) = &cli.config {
        let handle = load_config(Some(path));
        for warning in &handle.warnings {
            verbose_println!("[tonelift] Config warning: {}", warning);
        }
        handle.config.correction
    } else {
        log_config_usage();
        config_handle().config.correction.clone()
    };

    if let Some(clip_limit) = cli.clip_limit {
        config.clip_limit = clip_limit;
    }
    if let Some(tiles) = &cli.tiles {
        let (cols, rows) = parse_tile_grid(tiles)?;
        config.tiles_x = cols;
        config.tiles_y = rows;
    }
    if let Some(gamma) = cli.gamma {
        config.gamma = gamma;
    }
    if let Some(alpha) = cli.alpha {
        config.blend_alpha = alpha;
    }
    config.validate().map_err(|e| e.to_string())?;

    if !cli.input.is_file() {
        return Err(format!("Input not found: {}", cli.input.display()));
    }

    process_single_image(&cli.input, &cli.out, &config)
}
