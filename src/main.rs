//! GUI Odyssey - dataset conversion CLI
//!
//! Converts raw GUI Odyssey annotations into per-step dataset samples.

use gui_odyssey::app::cli::{Cli, Commands, ConfigAction};
use gui_odyssey::app::config::Config;
use gui_odyssey::card;
use gui_odyssey::convert::default_dataset_name;
use gui_odyssey::{DatasetConverter, DatasetLayout, DatasetStats, DatasetWriter, EpisodeBuilder, ExportedDataset};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    match cli.command {
        Commands::Convert {
            root,
            splits,
            limit,
            output,
            name,
            split_file,
            no_overwrite,
        } => {
            let options = ConvertOptions {
                root: resolve_root(root, &config)?,
                splits: if splits.is_empty() { config.dataset.splits.clone() } else { splits },
                limit: config.dataset.limit_or(limit),
                output: output.unwrap_or_else(|| config.export.output_dir.clone()),
                name,
                split_file: config.dataset.split_file_or(split_file),
                overwrite: config.export.overwrite && !no_overwrite,
            };
            run_convert(options, &config)?;
        }
        Commands::Stats {
            root,
            split,
            limit,
            split_file,
            dataset,
        } => {
            let limit = config.dataset.limit_or(limit);
            let split_file = config.dataset.split_file_or(split_file);
            run_stats(root, &split, limit, &split_file, dataset, &config)?;
        }
        Commands::Inspect { episode, root } => {
            run_inspect(&episode, resolve_root(root, &config)?, &config)?;
        }
        Commands::Card => {
            print!("{}", card::render_card());
        }
        Commands::Init { force } => {
            run_init(force, &config)?;
        }
        Commands::Config { action } => {
            run_config(action, &config)?;
        }
    }

    Ok(())
}

struct ConvertOptions {
    root: PathBuf,
    splits: Vec<String>,
    limit: Option<usize>,
    output: PathBuf,
    name: Option<String>,
    split_file: String,
    overwrite: bool,
}

fn resolve_root(root: Option<PathBuf>, config: &Config) -> anyhow::Result<PathBuf> {
    let root = root
        .or_else(|| config.dataset.root.clone())
        .ok_or_else(|| anyhow::anyhow!("No dataset root given. Pass --root or set dataset.root in the config."))?;

    if !root.is_dir() {
        anyhow::bail!("Dataset root not found: {:?}", root);
    }
    Ok(root)
}

fn run_convert(options: ConvertOptions, config: &Config) -> anyhow::Result<()> {
    if options.name.is_some() && options.splits.len() != 1 {
        anyhow::bail!("--name can only be used when converting a single split");
    }

    info!("Converting {:?} from {:?}", options.splits, options.root);

    let converter = DatasetConverter::new(DatasetLayout::open(&options.root)?, &options.split_file)
        .with_normalizer(config.normalization.normalizer());
    let results = converter.parse_splits(&options.splits, options.limit)?;

    let writer = DatasetWriter::new(&options.output);
    println!("\nConversion complete:");
    for (split, samples) in &results {
        let name = options
            .name
            .clone()
            .unwrap_or_else(|| default_dataset_name(&config.export.name_prefix, split));
        let manifest = writer.write(&name, samples, options.overwrite)?;

        if manifest.skipped_count > 0 {
            warn!(
                split = %split,
                skipped = manifest.skipped_count,
                "Some steps were skipped because their screenshots are missing"
            );
        }

        println!(
            "  {}: {} episodes, {} samples -> {}",
            split,
            manifest.episode_count,
            manifest.sample_count,
            writer.dataset_dir(&name).display()
        );
    }

    Ok(())
}

fn run_stats(
    root: Option<PathBuf>,
    split: &str,
    limit: Option<usize>,
    split_file: &str,
    dataset: Option<PathBuf>,
    config: &Config,
) -> anyhow::Result<()> {
    let stats = match dataset {
        Some(dir) => {
            let exported = ExportedDataset::load(&dir)?;
            info!(
                "Loaded dataset '{}' with {} samples",
                exported.manifest.name,
                exported.samples.len()
            );
            DatasetStats::from_samples(&exported.samples)
        }
        None => {
            let root = resolve_root(root, config)?;
            let converter = DatasetConverter::new(DatasetLayout::open(root)?, split_file)
                .with_normalizer(config.normalization.normalizer());
            let splits = converter.load_split_file()?;
            let converted = converter.convert_split(&splits, split, limit)?;
            DatasetStats::from_samples(&converted.samples)
        }
    };

    print!("{}", stats.render());
    Ok(())
}

fn run_inspect(episode: &str, root: PathBuf, config: &Config) -> anyhow::Result<()> {
    let layout = DatasetLayout::open(root)?;
    let path = layout.annotation_path(episode);
    if !path.exists() {
        anyhow::bail!("Annotation file not found: {:?}", path);
    }

    let builder = EpisodeBuilder::new(layout).with_normalizer(config.normalization.normalizer());
    let built = builder.process_file(&path)?;

    println!("{} samples ({} skipped)", built.samples.len(), built.skipped);
    for sample in &built.samples {
        println!("{}", serde_json::to_string_pretty(sample)?);
    }

    Ok(())
}

fn run_init(force: bool, config: &Config) -> anyhow::Result<()> {
    let config_path = Config::default_path();

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {:?}. Use --force to overwrite.",
            config_path
        );
    }

    config.save_default()?;
    println!("Created config at {:?}", config_path);
    println!("\nConfig content:\n{}", config.to_toml()?);

    std::fs::create_dir_all(&config.export.output_dir)?;
    println!("\nDatasets directory: {:?}", config.export.output_dir);

    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("Configuration ({:?}):\n", Config::default_path());
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Get { key } => match config.get(&key)? {
            Some(value) => println!("{} = {}", key, value),
            None => anyhow::bail!("Configuration key '{}' not found", key),
        },
        ConfigAction::Reset { force } => {
            let config_path = Config::default_path();
            reset_config(&config_path, force)?;
        }
    }

    Ok(())
}

fn reset_config(config_path: &Path, force: bool) -> anyhow::Result<()> {
    if config_path.exists() && !force {
        println!("Config exists at {:?}", config_path);
        println!("Use --force to reset to defaults");
        return Ok(());
    }

    Config::default().save(config_path)?;
    println!("Configuration reset to defaults at {:?}", config_path);
    Ok(())
}
