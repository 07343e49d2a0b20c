use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use globset::{Glob, GlobSetBuilder};
use image::{DynamicImage, ImageReader};
use serde::Deserialize;
use tex_unpacker_core::{
    bundle_sprites, extract_regions, parse_atlas, to_json_array, to_json_hash,
    ArchiveCompression, UnpackStats, UnpackerConfig,
};
use tracing::info;
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    name = "tex-unpacker",
    about = "Split a texture atlas back into individual sprites",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Show progress bars (disable with --progress false or --quiet)
    #[arg(long, default_value_t = true, action=ArgAction::Set, global=true, help_heading = "Logging/UX")]
    progress: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Unpack atlas indexes into sprite PNGs (ZIP bundle per atlas)
    Unpack(UnpackArgs),
    /// Parse-only: print region metadata as JSON
    Regions(RegionsArgs),
}

#[derive(Parser, Debug, Clone)]
struct UnpackArgs {
    /// Atlas index file, or a directory to scan for index files
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Page image (defaults to the filename recorded in the index, resolved
    /// next to it; single-file mode only)
    #[arg(short, long, help_heading = "Input/Output")]
    image: Option<PathBuf>,
    /// Output directory
    #[arg(short, long, default_value = "out", help_heading = "Input/Output")]
    out_dir: PathBuf,
    /// Write loose PNGs into a per-atlas directory instead of a ZIP bundle
    #[arg(long, default_value_t = false, help_heading = "Input/Output")]
    loose: bool,
    /// Write a sprite manifest next to the output: json-array|json-hash
    #[arg(long, help_heading = "Input/Output")]
    manifest: Option<String>,
    /// YAML config file (overrides bundle options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,
    /// Include patterns (glob) for directory scans
    #[arg(long, help_heading = "Input/Output")]
    include: Vec<String>,
    /// Exclude patterns (glob) for directory scans
    #[arg(long, help_heading = "Input/Output")]
    exclude: Vec<String>,

    // Bundle
    /// Archive subdirectory receiving sprite files
    #[arg(long, default_value = "images", help_heading = "Bundle")]
    folder: String,
    /// Entry compression: deflate|stored
    #[arg(long, default_value = "deflate", help_heading = "Bundle")]
    compression: String,
    /// Embed a manifest.json inside each bundle
    #[arg(long, default_value_t = false, help_heading = "Bundle")]
    embed_manifest: bool,
    /// Print the effective config (yaml) and exit
    #[arg(long, default_value_t = false, help_heading = "Bundle")]
    print_config: bool,
}

#[derive(Parser, Debug, Clone)]
struct RegionsArgs {
    /// Atlas index file
    input: PathBuf,
    /// Write JSON here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Unpack(args) => run_unpack(args, cli.progress && !cli.quiet),
        Commands::Regions(args) => run_regions(args),
    }
}

fn run_unpack(cli: &UnpackArgs, show_progress: bool) -> anyhow::Result<()> {
    let cfg = build_config(cli)?;
    if cli.print_config {
        println!("{}", serde_yaml::to_string(&cfg)?);
        return Ok(());
    }

    let paths = gather_atlas_paths(&cli.input, &cli.include, &cli.exclude)?;
    if paths.is_empty() {
        anyhow::bail!("no atlas index files found under {}", cli.input.display());
    }
    if cli.image.is_some() && paths.len() > 1 {
        anyhow::bail!("--image applies to a single atlas index, found {}", paths.len());
    }
    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create out_dir {}", cli.out_dir.display()))?;

    let bar = if show_progress {
        use indicatif::{ProgressBar, ProgressStyle};
        let b = ProgressBar::new(paths.len() as u64);
        b.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} unpacking {pos}/{len} [{elapsed_precise}] {wide_msg}",
            )
            .unwrap(),
        );
        Some(b)
    } else {
        None
    };
    for path in &paths {
        if let Some(b) = &bar {
            let msg = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
            b.set_message(msg.to_string());
        }
        unpack_one(path, cli, &cfg)?;
        if let Some(b) = &bar {
            b.inc(1);
        }
    }
    if let Some(b) = &bar {
        b.finish_and_clear();
    }
    Ok(())
}

fn unpack_one(path: &Path, cli: &UnpackArgs, cfg: &UnpackerConfig) -> anyhow::Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let name = atlas_name(path);
    let parsed = parse_atlas(&text, &name);
    let stats = UnpackStats::from_regions(&parsed.regions);
    info!(
        atlas = %name,
        regions = stats.num_regions,
        rotated = stats.num_rotated,
        image_file = ?parsed.image_file,
        "parsed atlas index"
    );

    let image_path = resolve_page_image(path, cli.image.as_deref(), parsed.image_file.as_deref())?;
    let page = load_image(&image_path).with_context(|| format!("decode {}", image_path.display()))?;
    let sprites = extract_regions(&parsed.regions, &page)?;

    if cli.loose {
        let dir = cli.out_dir.join(&name);
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        for sprite in &sprites {
            let png_path = dir.join(format!("{}.png", sprite.name));
            fs::write(&png_path, &sprite.data)
                .with_context(|| format!("write {}", png_path.display()))?;
        }
        info!(dir = %dir.display(), sprites = sprites.len(), "sprites written");
    } else {
        let bundle = bundle_sprites(&sprites, cfg)?;
        let zip_path = cli.out_dir.join(format!("{}.zip", name));
        fs::write(&zip_path, bundle).with_context(|| format!("write {}", zip_path.display()))?;
        info!(?zip_path, sprites = sprites.len(), "bundle written");
    }

    if let Some(format) = &cli.manifest {
        let value = match format.as_str() {
            // Accept "json" as an alias of "json-array"
            "json-array" | "json" => to_json_array(&sprites),
            "json-hash" => to_json_hash(&sprites),
            other => anyhow::bail!("unknown manifest format: {}", other),
        };
        let json_path = cli.out_dir.join(format!("{}.json", name));
        fs::write(&json_path, serde_json::to_string_pretty(&value)?)
            .with_context(|| format!("write {}", json_path.display()))?;
        info!(?json_path, "manifest written");
    }
    Ok(())
}

fn run_regions(cli: &RegionsArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("read {}", cli.input.display()))?;
    let name = atlas_name(&cli.input);
    let parsed = parse_atlas(&text, &name);
    let stats = UnpackStats::from_regions(&parsed.regions);
    let value = serde_json::json!({
        "atlas": name,
        "imageFile": parsed.image_file,
        "regions": parsed.regions,
        "stats": stats,
    });
    let json = serde_json::to_string_pretty(&value)?;
    match &cli.out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            info!(?path, regions = stats.num_regions, "regions written");
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn atlas_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("atlas")
        .to_string()
}

fn resolve_page_image(
    atlas_path: &Path,
    explicit: Option<&Path>,
    recorded: Option<&str>,
) -> anyhow::Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    let Some(name) = recorded else {
        anyhow::bail!(
            "{}: no page image recorded in the index; pass --image",
            atlas_path.display()
        );
    };
    let candidate = atlas_path.parent().unwrap_or(Path::new(".")).join(name);
    if !candidate.is_file() {
        anyhow::bail!(
            "page image {} not found next to {}; pass --image",
            candidate.display(),
            atlas_path.display()
        );
    }
    Ok(candidate)
}

/// Bundle options from a YAML file; unset fields keep the CLI flag values.
#[derive(Debug, Deserialize)]
struct YamlConfig {
    folder: Option<String>,
    compression: Option<String>,
    manifest: Option<bool>,
}

impl YamlConfig {
    fn apply(self, mut base: UnpackerConfig) -> UnpackerConfig {
        if let Some(folder) = self.folder {
            base.folder = folder;
        }
        if let Some(compression) = self.compression.and_then(|s| s.parse().ok()) {
            base.compression = compression;
        }
        if let Some(manifest) = self.manifest {
            base.manifest = manifest;
        }
        base
    }
}

fn build_config(cli: &UnpackArgs) -> anyhow::Result<UnpackerConfig> {
    let compression: ArchiveCompression = cli
        .compression
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown compression: {}", cli.compression))?;
    let mut cfg = UnpackerConfig {
        folder: cli.folder.clone(),
        compression,
        manifest: cli.embed_manifest,
    };
    if let Some(path) = &cli.config {
        let file = fs::read_to_string(path)?;
        let y: YamlConfig = serde_yaml::from_str(&file)?;
        cfg = y.apply(cfg);
    }
    Ok(cfg)
}

fn gather_atlas_paths(
    path: &Path,
    include: &[String],
    exclude: &[String],
) -> anyhow::Result<Vec<PathBuf>> {
    // Build glob matchers
    let mut inc_set = None;
    if !include.is_empty() {
        let mut b = GlobSetBuilder::new();
        for pat in include {
            b.add(Glob::new(pat)?);
        }
        inc_set = Some(b.build()?);
    }
    let mut exc_set = None;
    if !exclude.is_empty() {
        let mut b = GlobSetBuilder::new();
        for pat in exclude {
            b.add(Glob::new(pat)?);
        }
        exc_set = Some(b.build()?);
    }
    let mut list: Vec<PathBuf> = Vec::new();
    if path.is_file() {
        // explicit file: trust the user over the extension filter
        if !should_skip(path, inc_set.as_ref(), exc_set.as_ref()) {
            list.push(path.to_path_buf());
        }
    } else {
        for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file()
                && !should_skip(p, inc_set.as_ref(), exc_set.as_ref())
                && is_atlas_index(p)
            {
                list.push(p.to_path_buf());
            }
        }
        list.sort();
    }
    Ok(list)
}

fn should_skip(
    p: &Path,
    include: Option<&globset::GlobSet>,
    exclude: Option<&globset::GlobSet>,
) -> bool {
    let s = p.to_string_lossy().replace('\\', "/");
    if let Some(ex) = exclude {
        if ex.is_match(&s) {
            return true;
        }
    }
    if let Some(inc) = include {
        if !inc.is_match(&s) {
            return true;
        }
    }
    false
}

fn is_atlas_index(p: &Path) -> bool {
    matches!(
        p.extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase()),
        Some(ext) if matches!(ext.as_str(), "atlas" | "txt")
    )
}

fn load_image(p: &Path) -> anyhow::Result<DynamicImage> {
    let img = ImageReader::open(p)?.with_guessed_format()?.decode()?;
    Ok(img)
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
