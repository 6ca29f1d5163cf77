use wellness_model::NearbySpot;

pub const DEFAULT_NEARBY_LIMIT: usize = 5;

/// Spots in the vicinity of one destination, in file order (the table is
/// pre-sorted by priority), capped at `limit`.
pub fn nearby_attractions<'a>(
    spots: &'a [NearbySpot],
    content_id: &str,
    limit: usize,
) -> Vec<&'a NearbySpot> {
    spots
        .iter()
        .filter(|spot| spot.wellness_content_id == content_id)
        .take(limit)
        .collect()
}
