//! Export round-trip and snapshot tests.

use chrono::{DateTime, Utc};

use wellness_model::{Affinity, Classification, Cluster, ScoreVector};
use wellness_recommend::ScoredDestination;
use wellness_report::{ExportMetadata, export_to_string, read_export, write_export};

fn scored(id: &str, title: &str, theme: &str, address: &str, score: f64) -> ScoredDestination {
    ScoredDestination {
        destination: wellness_model::Destination {
            content_id: id.to_string(),
            title: title.to_string(),
            latitude: 37.5,
            longitude: 127.1,
            address: address.to_string(),
            description: format!("{title} description"),
            theme: theme.to_string(),
            region: 31,
            affinity: Affinity::default(),
            cluster_scores: [None; Cluster::COUNT],
        },
        weighted_score: score,
    }
}

fn metadata() -> ExportMetadata {
    let generated_at: DateTime<Utc> = DateTime::parse_from_rfc3339("2026-08-06T09:30:00Z")
        .unwrap()
        .with_timezone(&Utc);
    ExportMetadata {
        user: Some("alice".to_string()),
        cluster: Cluster::Economic,
        confidence: 0.7,
        generated_at: Some(generated_at),
    }
}

#[test]
fn export_matches_the_documented_projection() {
    let items = vec![
        scored("100", "Forest Spa", "A0202", "12 Pine Rd", 0.81),
        scored("200", "City Hanok", "A0201", "3 Hanok-gil", 0.55),
    ];
    let output = export_to_string(&metadata(), &items).expect("export");
    insta::assert_snapshot!(output, @r"
    # user: alice
    # cluster: 0
    # cluster_name: Economic Wellness Tourist
    # confidence: 0.7000
    # generated_at: 2026-08-06T09:30:00Z
    rank,title,theme,theme_name,score,address,description
    1,Forest Spa,A0202,Attractions,0.81,12 Pine Rd,Forest Spa description
    2,City Hanok,A0201,Lodging,0.55,3 Hanok-gil,City Hanok description
    ");
}

#[test]
fn round_trip_preserves_rank_order_and_titles() {
    let items = vec![
        scored("100", "Forest Spa", "A0202", "12 Pine Rd", 0.81),
        scored("200", "City Hanok", "A0201", "3 Hanok-gil", 0.55),
        scored("300", "Bamboo Trail, East Gate", "A0101", "7 Ridge Way", 0.42),
    ];
    let mut buffer = Vec::new();
    write_export(&mut buffer, &metadata(), &items).expect("export");

    let rows = read_export(buffer.as_slice()).expect("read back");
    assert_eq!(rows.len(), 3);
    for (index, row) in rows.iter().enumerate() {
        assert_eq!(row.rank, index + 1);
    }
    let titles: Vec<&str> = rows.iter().map(|row| row.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Forest Spa", "City Hanok", "Bamboo Trail, East Gate"]
    );
    assert_eq!(rows[0].score, 0.81);
    assert_eq!(rows[2].theme_name, "Nature");
}

#[test]
fn anonymous_export_omits_the_user_line() {
    let metadata = ExportMetadata {
        user: None,
        ..metadata()
    };
    let output = export_to_string(&metadata, &[]).expect("export");
    assert!(!output.contains("# user"));
    assert!(output.contains("# cluster: 0"));
}

#[test]
fn empty_ranking_round_trips_to_no_rows() {
    let mut buffer = Vec::new();
    write_export(&mut buffer, &metadata(), &[]).expect("export");
    let rows = read_export(buffer.as_slice()).expect("read back");
    assert!(rows.is_empty());
}

#[test]
fn metadata_builds_from_a_classification() {
    let classification = Classification {
        cluster: Cluster::Premium,
        confidence: 0.52,
        scores: ScoreVector::from_scores([2, 3, 9]),
    };
    let metadata =
        ExportMetadata::from_classification(Some("bora".to_string()), &classification);
    assert_eq!(metadata.cluster, Cluster::Premium);
    assert_eq!(metadata.confidence, 0.52);
    assert!(metadata.generated_at.is_some());
}
