use std::cmp::Ordering;

use super::prelude::*;

pub trait DistanceTo {
    fn distance_to(&self, pos: MapPoint) -> Distance;
}

impl DistanceTo for Location {
    /// Locations without a position are infinitely far away.
    fn distance_to(&self, pos: MapPoint) -> Distance {
        self.pos()
            .and_then(|own| MapPoint::distance(own, pos))
            .unwrap_or_else(Distance::infinite)
    }
}

fn cmp_unvisited_first_then_nearest(a: &Location, b: &Location) -> Ordering {
    a.visited.cmp(&b.visited).then_with(|| {
        let a = a.distance.unwrap_or_else(Distance::infinite);
        let b = b.distance.unwrap_or_else(Distance::infinite);
        a.total_cmp(&b)
    })
}

/// Orders the locations for display.
///
/// Without a user position the given order is kept and all distances
/// are cleared. With a position all not yet visited locations come
/// first, each group sorted by ascending distance. Ties keep their
/// relative order.
#[must_use]
pub fn rank_locations(locations: &[Location], user_pos: Option<MapPoint>) -> Vec<Location> {
    let mut ranked = locations.to_vec();
    let Some(user_pos) = user_pos else {
        for location in &mut ranked {
            location.distance = None;
        }
        return ranked;
    };
    for location in &mut ranked {
        location.distance = Some(location.distance_to(user_pos));
    }
    ranked.sort_by(cmp_unvisited_first_then_nearest);
    ranked
}
