//! Integration tests against real files on disk.

use std::fs;
use std::time::Duration;

use tempfile::TempDir;

use wellness_ingest::{
    CLUSTER_SCORE_FILE, DESTINATION_LIST_FILE, DataPaths, DestinationStore, IngestError,
    NEARBY_SPOTS_FILE, load_destinations, load_nearby_spots,
};
use wellness_model::Cluster;

const LIST_CSV: &str = "\
contentId,title,mapX,mapY,addr1,overview,wellnessThemaCd,lDongRegnCd
100,Forest Spa,127.1,37.5,12 Pine Rd,Quiet forest spa,A0202,31
200,City Hanok,126.9,37.6,3 Hanok-gil,Traditional stay,A0201,1
300,Unscored Place,126.0,36.0,,,A0101,39
";

const SCORES_CSV: &str = "\
contentId,nature,culture,healing,score_cluster_0,score_cluster_1,score_cluster_2
100,0.9,0.4,0.7,0.81,0.42,0.10
200,0.2,0.8,0.3,0.55,0.61,0.30
";

fn write_data_dir(list: &str, scores: &str) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join(DESTINATION_LIST_FILE), list).expect("write list");
    fs::write(dir.path().join(CLUSTER_SCORE_FILE), scores).expect("write scores");
    dir
}

#[test]
fn loads_and_joins_destination_files() {
    let dir = write_data_dir(LIST_CSV, SCORES_CSV);
    let paths = DataPaths::from_dir(dir.path());
    assert!(paths.nearby_spots.is_none());

    let destinations = load_destinations(&paths).expect("load destinations");
    assert_eq!(destinations.len(), 2, "unmatched row drops out of the join");
    assert_eq!(destinations[0].title, "Forest Spa");
    assert_eq!(destinations[0].region, 31);
    assert_eq!(destinations[0].affinity.healing, 0.7);
    assert_eq!(
        destinations[1].cluster_score(Cluster::General),
        Some(0.61)
    );
}

#[test]
fn bom_headers_are_tolerated() {
    let dir = write_data_dir(&format!("\u{feff}{LIST_CSV}"), SCORES_CSV);
    let destinations = load_destinations(&DataPaths::from_dir(dir.path())).expect("load");
    assert_eq!(destinations.len(), 2);
}

#[test]
fn missing_join_key_fails_with_the_offending_path() {
    let dir = write_data_dir(LIST_CSV, "nature,culture\n0.5,0.5\n");
    let error = load_destinations(&DataPaths::from_dir(dir.path())).unwrap_err();
    match error {
        IngestError::MissingJoinKey { path, .. } => {
            assert!(path.ends_with(CLUSTER_SCORE_FILE));
        }
        other => panic!("expected MissingJoinKey, got {other:?}"),
    }
}

#[test]
fn nearby_spots_load_in_file_order() {
    let dir = write_data_dir(LIST_CSV, SCORES_CSV);
    let nearby_path = dir.path().join(NEARBY_SPOTS_FILE);
    fs::write(
        &nearby_path,
        "\
wellness_contentId,nearby_contentid,nearby_title,nearby_category1,nearby_category2,nearby_category3
100,9001,Pine Market,A04,A0401,A04010100
100,9002,River Walk,A01,A0101,A01010400
200,9003,Night Bazaar,A04,A0401,A04010200
",
    )
    .expect("write nearby");

    let spots = load_nearby_spots(&nearby_path).expect("load nearby");
    assert_eq!(spots.len(), 3);
    assert_eq!(spots[0].wellness_content_id, "100");
    assert_eq!(spots[0].title, "Pine Market");
    assert_eq!(spots[2].categories[0], "A04");

    let paths = DataPaths::from_dir(dir.path());
    assert_eq!(paths.nearby_spots.as_deref(), Some(nearby_path.as_path()));
}

#[test]
fn store_serves_cached_data_within_the_ttl() {
    let dir = write_data_dir(LIST_CSV, SCORES_CSV);
    let store = DestinationStore::new(DataPaths::from_dir(dir.path()));

    let first = store.get().expect("first load");
    assert_eq!(first.len(), 2);

    // Mutate the files on disk; a fresh cache entry must not notice.
    fs::write(dir.path().join(CLUSTER_SCORE_FILE), SCORES_CSV.replace("0.81", "0.99"))
        .expect("rewrite scores");
    let second = store.get().expect("cached load");
    assert_eq!(
        second[0].cluster_score(Cluster::Economic),
        Some(0.81),
        "cache served stale-but-fresh entry"
    );

    store.invalidate();
    let third = store.get().expect("reload");
    assert_eq!(third[0].cluster_score(Cluster::Economic), Some(0.99));
}

#[test]
fn zero_ttl_reloads_on_every_access() {
    let dir = write_data_dir(LIST_CSV, SCORES_CSV);
    let store = DestinationStore::with_ttl(DataPaths::from_dir(dir.path()), Duration::ZERO);

    assert_eq!(store.get().expect("load").len(), 2);
    fs::write(
        dir.path().join(CLUSTER_SCORE_FILE),
        "contentId,nature,culture,healing\n100,0.5,0.5,0.5\n",
    )
    .expect("rewrite scores");
    assert_eq!(store.get().expect("reload").len(), 1);
}
