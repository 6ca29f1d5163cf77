use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment};
use tracing::{info, info_span};

use wellness_classify::classify;
use wellness_ingest::{DataPaths, DestinationStore, load_destinations};
use wellness_model::{Classification, cluster_profiles, region_name, theme_name};
use wellness_recommend::{
    EmptyReason, FilterCriteria, FilterOutcome, ScoredDestination, apply_filters,
    region_filter_options, theme_filter_options, top_k,
};
use wellness_report::{ExportMetadata, summarize, write_export};

use wellness_cli::answers::collect_answers;

use crate::cli::{ClassifyArgs, RecommendArgs, SummaryArgs};
use crate::tables::{align_column, styled_table};

pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let answers = collect_answers(&args.input.answers, args.input.answers_file.as_deref())?;
    let classification = classify(&answers)?;
    print_classification(&classification);
    Ok(())
}

pub fn run_recommend(args: &RecommendArgs) -> Result<()> {
    let answers = collect_answers(&args.input.answers, args.input.answers_file.as_deref())?;
    let classification = classify(&answers)?;
    let span = info_span!("recommend", cluster = %classification.cluster);
    let _guard = span.enter();

    let store = DestinationStore::new(DataPaths::from_dir(&args.data_dir));
    let destinations = store.get()?;

    let criteria = FilterCriteria {
        themes: args.themes.clone(),
        regions: args.regions.clone(),
    };
    let ranked = if criteria.is_empty() {
        top_k(classification.cluster, &destinations, args.top)
    } else {
        match apply_filters(classification.cluster, &destinations, &criteria, args.top) {
            FilterOutcome::Ranked(items) => items,
            FilterOutcome::Empty(reason) => {
                println!("{}", empty_message(reason));
                return Ok(());
            }
        }
    };
    if ranked.is_empty() {
        println!("No destinations available.");
        return Ok(());
    }

    print_classification(&classification);
    println!();
    print_ranked(&ranked);

    if let Some(path) = &args.export {
        export_ranked(path, args.user.clone(), &classification, &ranked)?;
        println!();
        println!("Export written: {}", path.display());
    }
    Ok(())
}

pub fn run_profiles() {
    let mut table = styled_table(&["Cluster", "Archetype", "Share", "Traits", "Description"]);
    align_column(&mut table, 2, CellAlignment::Right);
    for profile in cluster_profiles() {
        table.add_row(vec![
            Cell::new(profile.cluster.id()),
            Cell::new(profile.name),
            Cell::new(format!("{:.1}%", profile.share_pct)),
            Cell::new(profile.traits.join(", ")),
            Cell::new(profile.description),
        ]);
    }
    println!("{table}");
}

pub fn run_summary(args: &SummaryArgs) -> Result<()> {
    let destinations = load_destinations(&DataPaths::from_dir(&args.data_dir))?;
    let summary = summarize(&destinations);
    println!("Destinations: {}", summary.total_destinations);
    println!(
        "Mean affinity: nature {:.2}, culture {:.2}, healing {:.2}",
        summary.mean_affinity.nature, summary.mean_affinity.culture, summary.mean_affinity.healing
    );

    let mut themes = styled_table(&["Theme", "Name", "Destinations"]);
    align_column(&mut themes, 2, CellAlignment::Right);
    for option in theme_filter_options(&destinations) {
        themes.add_row(vec![
            Cell::new(&option.code),
            Cell::new(option.name.unwrap_or("-")),
            Cell::new(option.count),
        ]);
    }
    println!("{themes}");

    let mut regions = styled_table(&["Region", "Name", "Destinations"]);
    align_column(&mut regions, 2, CellAlignment::Right);
    for option in region_filter_options(&destinations) {
        regions.add_row(vec![
            Cell::new(option.code),
            Cell::new(option.name.unwrap_or("-")),
            Cell::new(option.count),
        ]);
    }
    println!("{regions}");
    Ok(())
}

fn print_classification(classification: &Classification) {
    let profile = classification.profile();
    println!(
        "Archetype: {} (cluster {})",
        profile.name,
        classification.cluster.id()
    );
    println!("Confidence: {:.1}%", classification.confidence * 100.0);
    println!("{}", profile.description);
    let factors: Vec<String> = profile
        .key_factors
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect();
    println!("Key factors: {}", factors.join(", "));
    println!();

    let mut table = styled_table(&["Cluster", "Archetype", "Score", ""]);
    align_column(&mut table, 2, CellAlignment::Right);
    for (cluster, score) in classification.scores.iter() {
        let marker = if cluster == classification.cluster {
            "winner"
        } else {
            ""
        };
        table.add_row(vec![
            Cell::new(cluster.id()),
            Cell::new(cluster.profile().name),
            Cell::new(score),
            Cell::new(marker),
        ]);
    }
    println!("{table}");
}

fn print_ranked(items: &[ScoredDestination]) {
    let mut table = styled_table(&["Rank", "Title", "Theme", "Region", "Score", "Address"]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (index, scored) in items.iter().enumerate() {
        let destination = &scored.destination;
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&destination.title),
            Cell::new(theme_name(&destination.theme).unwrap_or(destination.theme.as_str())),
            Cell::new(region_name(destination.region).unwrap_or("-")),
            Cell::new(format!("{:.3}", scored.weighted_score)),
            Cell::new(&destination.address),
        ]);
    }
    println!("{table}");
}

fn empty_message(reason: EmptyReason) -> &'static str {
    match reason {
        EmptyReason::NoMatch => "No destinations match the requested filters.",
        EmptyReason::ClusterScoreUnavailable => {
            "The dataset carries no precomputed scores for this archetype; \
             try again without filters."
        }
    }
}

fn export_ranked(
    path: &Path,
    user: Option<String>,
    classification: &Classification,
    items: &[ScoredDestination],
) -> Result<()> {
    let metadata = ExportMetadata::from_classification(user, classification);
    let file = File::create(path)
        .with_context(|| format!("create export file {}", path.display()))?;
    write_export(file, &metadata, items)?;
    info!(path = %path.display(), rows = items.len(), "export written");
    Ok(())
}
