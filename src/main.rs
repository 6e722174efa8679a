use clap::Parser;
use statcard::{CardRenderer, EmbeddedAssets, EmbeddedImage, IconSet, RenderConfig, StatsSnapshot};
use std::path::PathBuf;
use tracing::Level;

/// Render profile statistics to an animated SVG stat card
#[derive(Parser, Debug)]
#[command(name = "statcard")]
#[command(version)]
#[command(about = "Render profile statistics to a self-contained SVG stat card", long_about = None)]
struct Args {
    /// Stats JSON file (use "-" for stdin)
    #[arg(value_name = "STATS", required_unless_present = "list_presets")]
    input: Option<PathBuf>,

    /// Output SVG path (use "-" for stdout)
    #[arg(short, long, value_name = "OUTPUT", required_unless_present = "list_presets")]
    output: Option<PathBuf>,

    /// Layout/palette file (TOML or YAML)
    #[arg(short, long, value_name = "CONFIG", conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Built-in layout/palette preset
    #[arg(short, long, value_name = "NAME")]
    preset: Option<String>,

    /// Raster image drawn inside the language ring
    #[arg(long, value_name = "IMAGE")]
    image: Option<PathBuf>,

    /// Directory of .ttf/.otf files, or a JSON table of base64 fonts
    #[arg(long, value_name = "FONTS")]
    fonts: Option<PathBuf>,

    /// JSON table overriding built-in icons
    #[arg(long, value_name = "ICONS")]
    icons: Option<PathBuf>,

    /// Order languages by descending share
    #[arg(long)]
    sort: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// List built-in presets and exit
    #[arg(long)]
    list_presets: bool,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    if args.list_presets {
        for name in RenderConfig::list_builtins() {
            println!("{}", name);
        }
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(log_level(args.verbose))
        .init();

    let config = if let Some(ref path) = args.config {
        RenderConfig::from_file(path).map_err(|e| e.to_string())?
    } else if let Some(ref name) = args.preset {
        RenderConfig::from_builtin(name).map_err(|e| e.to_string())?
    } else {
        RenderConfig::default()
    };

    let mut assets = EmbeddedAssets::default();
    if let Some(ref path) = args.image {
        assets = assets.with_image(EmbeddedImage::load(path).map_err(|e| e.to_string())?);
    }
    if let Some(ref path) = args.fonts {
        let count = if path.is_dir() {
            assets.load_fonts_dir(path)
        } else {
            assets.load_fonts_json(path)
        }
        .map_err(|e| e.to_string())?;
        tracing::info!(count, path = %path.display(), "loaded fonts");
    }

    let icons = match args.icons {
        Some(ref path) => IconSet::from_file(path).map_err(|e| e.to_string())?,
        None => IconSet::default(),
    };

    let (Some(input), Some(output)) = (args.input, args.output) else {
        return Err("STATS and --output are required".to_string());
    };

    let raw = if input.to_str() == Some("-") {
        let mut buffer = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)
            .map_err(|e| format!("Failed to read from stdin: {}", e))?;
        buffer
    } else {
        std::fs::read_to_string(&input)
            .map_err(|e| format!("Failed to read stats file: {}", e))?
    };

    let mut stats = StatsSnapshot::from_json(&raw).map_err(|e| e.to_string())?;
    if args.sort {
        stats = stats.sorted_by_share();
    }

    let renderer = CardRenderer::new(&config, &assets, &icons).map_err(|e| e.to_string())?;
    let svg = renderer.render(&stats).map_err(|e| e.to_string())?;

    if output.to_str() == Some("-") {
        print!("{}", svg);
    } else {
        std::fs::write(&output, svg).map_err(|e| format!("Failed to write SVG: {}", e))?;
        eprintln!("SVG saved to: {}", output.display());
    }

    Ok(())
}
