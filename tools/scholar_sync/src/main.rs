use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use scholarpage::{
    refresh_page, render_profile_page, PageSections, ProfileData, ScholarExport, ScholarProfile,
};

/// Number of stat counters a profile page carries
const EXPECTED_COUNTERS: usize = 3;

#[derive(Parser, Debug)]
#[command(name = "scholar_sync")]
#[command(about = "Export the profile page and refresh it from a saved Scholar export")]
struct Args {
    /// Profile data file (publications, citation series, counters)
    #[arg(long, env = "PROFILE_DATA", default_value = "data/profile.json")]
    profile: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the profile page to a static HTML file
    Export {
        /// Output file
        #[arg(short, long, default_value = "index.html")]
        out: PathBuf,

        /// Leave the citation chart off the page
        #[arg(long)]
        no_chart: bool,
    },
    /// Fold a Scholar export into the profile data and an exported page
    Refresh {
        /// Scholar export JSON saved from the author profile
        #[arg(short, long)]
        export: PathBuf,

        /// Exported HTML page to bring up to date (counters, chart, publications)
        #[arg(long)]
        html: Option<PathBuf>,

        /// Only update counters and the citation series, keep publications
        #[arg(long)]
        citations_only: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let scholar = ScholarProfile::from_env().context("Invalid Scholar configuration")?;

    match args.command {
        Command::Export { out, no_chart } => {
            let sections = PageSections {
                publications: true,
                chart: !no_chart,
            };
            export_page(&args.profile, &scholar, sections, &out)
        }
        Command::Refresh {
            export,
            html,
            citations_only,
        } => refresh(
            &args.profile,
            &scholar,
            &export,
            html.as_deref(),
            citations_only,
        ),
    }
}

fn load_profile(path: &Path) -> Result<ProfileData> {
    ProfileData::load(path)
        .with_context(|| format!("Failed to load profile data from {}", path.display()))
}

fn export_page(
    profile_path: &Path,
    scholar: &ScholarProfile,
    sections: PageSections,
    out: &Path,
) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let html = render_profile_page(&profile, scholar, sections).context("Failed to render page")?;

    fs::write(out, html).with_context(|| format!("Failed to write {}", out.display()))?;
    info!(
        "Wrote {} ({} publications, {} years of citations)",
        out.display(),
        profile.publications.len(),
        profile.citations.len()
    );
    Ok(())
}

fn refresh(
    profile_path: &Path,
    scholar: &ScholarProfile,
    export_path: &Path,
    html_path: Option<&Path>,
    citations_only: bool,
) -> Result<()> {
    let export = ScholarExport::load(export_path)
        .with_context(|| format!("Failed to read Scholar export {}", export_path.display()))?;
    let stats = export.stats();
    info!(
        "Found: {} citations, h-index: {}, i10-index: {}",
        stats.citations, stats.h_index, stats.i10_index
    );

    let mut profile = if profile_path.exists() {
        load_profile(profile_path)?
    } else {
        warn!("{} does not exist, starting from an empty profile", profile_path.display());
        ProfileData::default()
    };
    export.apply_to(&mut profile, citations_only);

    // Everything is read and rendered before either file is written.
    let page = match html_path {
        Some(html_path) => {
            let html = fs::read_to_string(html_path)
                .with_context(|| format!("Failed to read {}", html_path.display()))?;
            let page = refresh_page(&html, &profile, scholar, citations_only)
                .with_context(|| format!("Failed to refresh {}", html_path.display()))?;
            if page.counters < EXPECTED_COUNTERS {
                warn!(
                    "Only {} of {} stat counters found in {}",
                    page.counters,
                    EXPECTED_COUNTERS,
                    html_path.display()
                );
            }
            if !page.chart {
                warn!("No citation chart found in {}", html_path.display());
            }
            if !citations_only && !page.publications {
                warn!("No publication list found in {}", html_path.display());
            }
            Some((html_path, page))
        }
        None => None,
    };

    profile
        .save(profile_path)
        .with_context(|| format!("Failed to write {}", profile_path.display()))?;
    info!(
        "Updated {} ({} publications)",
        profile_path.display(),
        profile.publications.len()
    );

    if let Some((html_path, page)) = page {
        fs::write(html_path, page.html)
            .with_context(|| format!("Failed to write {}", html_path.display()))?;
        info!("Updated {}", html_path.display());
    }

    Ok(())
}
