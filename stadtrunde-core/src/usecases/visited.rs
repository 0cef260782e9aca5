use stadtrunde_boundary::VisitedLocations;

use super::prelude::*;

pub fn load_visited<S>(storage: &S) -> VisitedLocations
where
    S: KeyValueStorage,
{
    storage::get_or_log(storage, keys::VISITED_LOCATIONS).unwrap_or_default()
}

/// Overlays the persisted flags onto the locations.
///
/// Flags of addresses that are not part of the catalog are ignored.
pub fn apply_visited(locations: &mut [Location], visited: &VisitedLocations) {
    for location in locations {
        location.visited = visited.get(location.address()).copied().unwrap_or(false);
    }
}

/// Replaces the persisted flags with the current ones.
pub fn save_visited<S>(storage: &S, locations: &[Location]) -> Result<()>
where
    S: KeyValueStorage,
{
    let visited: VisitedLocations = locations
        .iter()
        .filter(|l| l.visited)
        .map(|l| (l.entry.address.clone(), true))
        .collect();
    storage.set(keys::VISITED_LOCATIONS, &visited)?;
    Ok(())
}

/// Flips the visited flag of a location and persists all flags.
///
/// Returns the new flag. The in-memory flag stays flipped
/// even if persisting fails.
pub fn toggle_visited<S>(storage: &S, locations: &mut [Location], address: &str) -> Result<bool>
where
    S: KeyValueStorage,
{
    let location = locations
        .iter_mut()
        .find(|l| l.address() == address)
        .ok_or_else(|| Error::UnknownAddress(address.to_string()))?;
    location.visited = !location.visited;
    let visited = location.visited;
    save_visited(storage, locations)?;
    Ok(visited)
}
