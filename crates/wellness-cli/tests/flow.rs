//! End-to-end flow: answers -> classification -> ranking -> export.

use std::fs;

use tempfile::TempDir;

use wellness_cli::answers::collect_answers;
use wellness_classify::classify;
use wellness_ingest::{CLUSTER_SCORE_FILE, DESTINATION_LIST_FILE, DataPaths, load_destinations};
use wellness_model::Cluster;
use wellness_recommend::{FilterCriteria, score_and_rank};
use wellness_report::{ExportMetadata, export_to_string, read_export};

fn data_dir() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(
        dir.path().join(DESTINATION_LIST_FILE),
        "\
contentId,title,mapX,mapY,addr1,overview,wellnessThemaCd,lDongRegnCd
100,Forest Spa,127.1,37.5,12 Pine Rd,Quiet forest spa,A0202,31
200,City Hanok,126.9,37.6,3 Hanok-gil,Traditional stay,A0201,1
",
    )
    .expect("write list");
    fs::write(
        dir.path().join(CLUSTER_SCORE_FILE),
        "\
contentId,nature,culture,healing,score_cluster_0,score_cluster_1,score_cluster_2
100,0.9,0.4,0.7,0.81,0.42,0.10
200,0.2,0.8,0.3,0.55,0.61,0.30
",
    )
    .expect("write scores");
    dir
}

#[test]
fn survey_to_export_flow() {
    let pairs: Vec<String> = ["q1=3", "q2=0", "q3=0", "q4=0", "q5=0", "q6=0", "q7=0"]
        .iter()
        .map(|pair| (*pair).to_string())
        .collect();
    let answers = collect_answers(&pairs, None).expect("collect answers");
    let classification = classify(&answers).expect("classify");
    assert_eq!(classification.cluster, Cluster::Economic);
    assert!(classification.confidence > 0.5);

    let dir = data_dir();
    let destinations =
        load_destinations(&DataPaths::from_dir(dir.path())).expect("load destinations");

    let ranked = score_and_rank(
        classification.cluster,
        &destinations,
        10,
        &FilterCriteria::default(),
    );
    assert_eq!(ranked.len(), 2);
    // Economic weights (0.3, 0.2, 0.5) favor the high-healing spa.
    assert_eq!(ranked[0].destination.title, "Forest Spa");
    assert!((ranked[0].weighted_score - 0.70).abs() < 1e-9);

    let metadata = ExportMetadata::from_classification(Some("alice".to_string()), &classification);
    let export = export_to_string(&metadata, &ranked).expect("export");
    let rows = read_export(export.as_bytes()).expect("read export");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[0].title, "Forest Spa");
    assert_eq!(rows[1].title, "City Hanok");
}

#[test]
fn filtered_flow_ranks_by_precomputed_scores() {
    let dir = data_dir();
    let destinations =
        load_destinations(&DataPaths::from_dir(dir.path())).expect("load destinations");

    let criteria = FilterCriteria {
        themes: vec!["A0202".to_string()],
        regions: vec![],
    };
    let ranked = score_and_rank(Cluster::Economic, &destinations, 10, &criteria);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].destination.title, "Forest Spa");
    assert_eq!(ranked[0].weighted_score, 0.81);

    let none = score_and_rank(
        Cluster::Economic,
        &destinations,
        10,
        &FilterCriteria {
            themes: vec!["C0104".to_string()],
            regions: vec![],
        },
    );
    assert!(none.is_empty());
}
