use crate::{config::Config, gateways::geocoding_gateway};
use anyhow::{bail, Result};
use clap::{ArgAction, Parser, Subcommand};
use stadtrunde_core::{
    catalog::{catalog, find_duplicate_address},
    entities::MapPoint,
    storage::KeyValueStorage,
    tour::TourState,
    usecases::{self, CoordinateSource, ListItem},
};
use stadtrunde_gateways::{delay::TokioDelay, json_file::JsonFileStorage};
use std::path::PathBuf;

/// A tour through the stations of the Frankfurt school project
#[derive(Parser)]
#[command(name = "stadtrunde", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve the coordinates of all addresses into the cache
    Resolve {
        /// Drop the cached coordinates first
        #[arg(long)]
        force: bool,
    },
    /// Show the locations as the page does
    List {
        /// Own position for ranking by distance
        #[arg(long, value_name = "LAT,LNG", allow_hyphen_values = true)]
        position: Option<MapPoint>,
        /// Hide visited locations
        #[arg(long, conflicts_with = "show_visited")]
        hide_visited: bool,
        /// Show visited locations
        #[arg(long)]
        show_visited: bool,
    },
    /// Mark a location as visited or not visited
    Toggle {
        /// Address as listed in the catalog
        address: String,
    },
    /// Store whether visited locations are hidden
    HideVisited {
        #[arg(action = ArgAction::Set, value_name = "true|false")]
        hide: bool,
    },
}

fn load_tour<S: KeyValueStorage>(storage: &S) -> Result<TourState> {
    let catalog = catalog();
    if let Some(address) = find_duplicate_address(&catalog) {
        bail!("The address '{address}' occurs more than once in the catalog");
    }
    let mut tour = TourState::new(catalog);
    tour.apply_persisted_state(storage);
    Ok(tour)
}

async fn resolve<S: KeyValueStorage>(
    cfg: &Config,
    storage: &S,
    tour: &mut TourState,
) -> Result<CoordinateSource> {
    let gateway = geocoding_gateway(&cfg.geocoding)?;
    let resolved = usecases::resolve_coordinates(
        storage,
        &gateway,
        &TokioDelay,
        &tour.addresses(),
        cfg.geocoding.request_interval,
    )
    .await;
    tour.attach_coordinates(resolved.geocodings);
    Ok(resolved.source)
}

fn print_item(item: &ListItem) {
    let check = if item.visited { 'x' } else { ' ' };
    println!("[{check}] {}", item.title);
    println!("    {}", item.address_line);
    if let Some(distance) = &item.distance_text {
        println!("    {distance}");
    }
    if let Some(pos) = item.map_pos {
        println!("    {pos}");
    }
    println!("    {}", item.navigation_url);
}

pub async fn run(command: Command, cfg: &Config) -> Result<()> {
    let storage = JsonFileStorage::try_new(&cfg.storage.file)?;
    log::debug!("Use storage file {}", storage.path().display());
    let mut tour = load_tour(&storage)?;

    match command {
        Command::Resolve { force } => {
            if force {
                usecases::clear_cached_coordinates(&storage)?;
            }
            let source = resolve(cfg, &storage, &mut tour).await?;
            let resolved = tour.locations().iter().filter(|l| l.pos().is_some()).count();
            let source = match source {
                CoordinateSource::Cache => "cache",
                CoordinateSource::Geocoder => "geocoder",
            };
            println!(
                "Resolved {resolved} of {} addresses ({source})",
                tour.locations().len()
            );
        }
        Command::List {
            position,
            hide_visited,
            show_visited,
        } => {
            resolve(cfg, &storage, &mut tour).await?;
            tour.set_user_position(position);
            let hide = match (hide_visited, show_visited) {
                (true, _) => true,
                (_, true) => false,
                _ => tour.hide_visited(),
            };
            for item in usecases::list_items(&tour.ranked(), hide) {
                print_item(&item);
            }
        }
        Command::Toggle { address } => {
            let visited = tour.toggle_visited(&storage, &address)?;
            let state = if visited { "visited" } else { "not visited" };
            println!("{address}: {state}");
        }
        Command::HideVisited { hide } => {
            tour.set_hide_visited(&storage, hide)?;
        }
    }
    Ok(())
}
