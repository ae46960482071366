//! The `areafit check` command: drop files, run one check, show the results.

use std::path::PathBuf;

use areafit_core::{
    Classification, ClassificationResult, Config, FileDiscovery, HistoryEntry, PairView,
    ResizePolicy, Session,
};
use clap::{Args, ValueEnum};
use serde::Serialize;

/// Arguments for the `check` command.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Image files or directories to drop
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Largest acceptable width * height in pixels
    #[arg(long)]
    pub max_area: Option<u64>,

    /// Resize policy
    #[arg(long, value_enum)]
    pub policy: Option<Policy>,

    /// Output width for the fixed-target policy
    #[arg(long)]
    pub target_width: Option<u32>,

    /// Output height for the fixed-target policy
    #[arg(long)]
    pub target_height: Option<u32>,

    /// Pair files by full name instead of dropping the extension
    #[arg(long)]
    pub keep_extension: bool,

    /// Directory for resized outputs
    #[arg(long)]
    pub temp_dir: Option<PathBuf>,

    /// Copy resized outputs into this directory
    #[arg(long)]
    pub save_to: Option<PathBuf>,

    /// Result format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Policy {
    /// Scale down proportionally when over --max-area
    Threshold,
    /// Always resize to --target-width x --target-height
    FixedTarget,
}

impl From<Policy> for ResizePolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Threshold => ResizePolicy::ThresholdPreserveAspect,
            Policy::FixedTarget => ResizePolicy::FixedTarget,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ReportFormat {
    /// One line per pair
    #[default]
    Table,
    /// The run and the pair view as JSON
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    run: &'a HistoryEntry,
    pairs: &'a [PairView],
}

pub fn execute(args: CheckArgs, config: Config) -> anyhow::Result<()> {
    let config = apply_overrides(&args, config)?;
    let discovery = FileDiscovery::new(config.processing.clone());
    let mut session = Session::new(&config);

    for path in &args.paths {
        for file in discovery.discover(path) {
            session.add_reference(file);
        }
    }

    let total = session.pairs().originals().count();
    if total == 0 {
        tracing::warn!("No originals to check (only focused files were dropped)");
    } else {
        tracing::info!(
            "Checking {} original(s) with {} policy",
            total,
            config.resize.policy
        );
    }

    let progress = create_progress_bar(total as u64);
    let entry = session
        .check_and_resize_with(|result| {
            progress.set_message(result.original.display_name());
            progress.inc(1);
        })
        .clone();
    progress.finish_and_clear();

    let snapshot = session.snapshot();
    match args.format {
        ReportFormat::Table => print_table(&snapshot.pairs),
        ReportFormat::Json => {
            let report = Report {
                run: &entry,
                pairs: &snapshot.pairs,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    let saved = match &args.save_to {
        Some(dir) => save_all(&session, &entry.results, dir)?,
        None => 0,
    };

    print_summary(&entry, saved, session.output_dir());
    Ok(())
}

/// Layer command-line overrides over the loaded configuration.
fn apply_overrides(args: &CheckArgs, mut config: Config) -> anyhow::Result<Config> {
    if let Some(max_area) = args.max_area {
        config.resize.max_pixel_area = max_area;
    }
    if let Some(policy) = args.policy {
        config.resize.policy = policy.into();
    }
    if let Some(width) = args.target_width {
        config.resize.target_width = width;
    }
    if let Some(height) = args.target_height {
        config.resize.target_height = height;
    }
    if args.keep_extension {
        config.pairing.strip_extension = false;
    }
    if let Some(dir) = &args.temp_dir {
        config.output.temp_dir = Some(dir.clone());
    }
    config.validate()?;
    Ok(config)
}

/// Copy every resized output into `dir`. Per-file failures are logged, not fatal.
fn save_all(
    session: &Session,
    results: &[ClassificationResult],
    dir: &std::path::Path,
) -> anyhow::Result<usize> {
    let dir = PathBuf::from(shellexpand::tilde(&dir.to_string_lossy()).into_owned());
    std::fs::create_dir_all(&dir)?;

    let mut saved = 0;
    for result in results
        .iter()
        .filter(|r| r.classification.resized_path().is_some())
    {
        match session.save_resized(result, &dir) {
            Ok(_) => saved += 1,
            Err(e) => tracing::error!("{}", e),
        }
    }
    Ok(saved)
}

fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    pb
}

fn describe(view: &PairView) -> String {
    let Some(result) = &view.result else {
        return if view.pair.original.is_some() {
            "-".to_string()
        } else {
            "focused only".to_string()
        };
    };

    let size = match (result.width, result.height) {
        (Some(w), Some(h)) => format!("{w}x{h}"),
        _ => String::new(),
    };
    match &result.classification {
        Classification::Acceptable => format!("OK {size}"),
        Classification::TooLarge {
            resized_width,
            resized_height,
            ..
        } => format!("Resized {size} -> {resized_width}x{resized_height}"),
        Classification::Failed { message, .. } => {
            format!("{}: {}", result.classification.label(), message)
        }
    }
}

fn print_table(pairs: &[PairView]) {
    let name = |r: &Option<areafit_core::FileReference>| {
        r.as_ref()
            .map(|r| r.display_name())
            .unwrap_or_else(|| "-".to_string())
    };
    for view in pairs {
        println!(
            "{:<24} {:<28} {:<28} {}",
            view.base_name,
            name(&view.pair.original),
            name(&view.pair.focused),
            describe(view)
        );
    }
}

fn print_summary(entry: &HistoryEntry, saved: usize, output_dir: &std::path::Path) {
    let resized = entry.count(|c| matches!(c, Classification::TooLarge { .. }));
    let failed = entry.count(|c| matches!(c, Classification::Failed { .. }));

    eprintln!();
    eprintln!("  Checked:   {:>6}", entry.results.len());
    eprintln!("  Resized:   {:>6}", resized);
    if failed > 0 {
        eprintln!("  Failed:    {:>6}", failed);
    }
    if saved > 0 {
        eprintln!("  Saved:     {:>6}", saved);
    }
    if resized > 0 {
        eprintln!("  Outputs:   {}", output_dir.display());
    }
}
