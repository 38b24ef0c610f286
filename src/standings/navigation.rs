//! Faceted navigation: which selections remain legal from the current one.

use serde::Serialize;
use std::collections::HashSet;

use crate::models::{SeasonId, SportCategoryId, SportId};
use crate::store::LeagueStore;

use super::filters::StandingsFilters;
use super::StandingsError;

#[derive(Debug, Clone, Serialize)]
pub struct SeasonOption {
    pub id: SeasonId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SportOption {
    pub id: SportId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryOption {
    pub id: SportCategoryId,
    pub sport_id: SportId,
    pub label: String,
}

/// The selections that would not produce an empty result, per axis.
#[derive(Debug, Serialize)]
pub struct NavigationOptions {
    pub available_seasons: Vec<SeasonOption>,
    pub available_sports: Vec<SportOption>,
    pub available_categories: Vec<CategoryOption>,
}

/// Compute navigation lists from the stage rows that actually exist — never
/// from an assumed cross-product. Safe to call with partial (or empty)
/// filters; each axis is constrained by the *other* axes only, so a user can
/// always switch the axis they are on.
pub fn navigation(
    store: &LeagueStore,
    filters: &StandingsFilters,
) -> Result<NavigationOptions, StandingsError> {
    let stages = store.stages()?;
    let categories = store.sport_categories()?;
    let sports = store.sports()?;
    let seasons = store.seasons()?;

    let sport_of = |category_id: SportCategoryId| -> Option<SportId> {
        categories.iter().find(|c| c.id == category_id).map(|c| c.sport_id)
    };

    // Seasons: constrained by sport/category.
    let season_ids: HashSet<SeasonId> = stages
        .iter()
        .filter(|s| match filters.sport_category_id {
            Some(id) => s.sport_category_id == id,
            None => true,
        })
        .filter(|s| match filters.sport_id {
            Some(id) => sport_of(s.sport_category_id) == Some(id),
            None => true,
        })
        .map(|s| s.season_id)
        .collect();

    // Sports: constrained by season.
    let sport_ids: HashSet<SportId> = stages
        .iter()
        .filter(|s| match filters.season_id {
            Some(id) => s.season_id == id,
            None => true,
        })
        .filter_map(|s| sport_of(s.sport_category_id))
        .collect();

    // Categories: constrained by season and sport.
    let category_ids: HashSet<SportCategoryId> = stages
        .iter()
        .filter(|s| match filters.season_id {
            Some(id) => s.season_id == id,
            None => true,
        })
        .filter(|s| match filters.sport_id {
            Some(id) => sport_of(s.sport_category_id) == Some(id),
            None => true,
        })
        .map(|s| s.sport_category_id)
        .collect();

    let mut available_seasons: Vec<SeasonOption> = seasons
        .iter()
        .filter(|s| season_ids.contains(&s.id))
        .map(|s| SeasonOption {
            id: s.id,
            name: s.name.clone(),
        })
        .collect();
    available_seasons.sort_by(|a, b| b.id.cmp(&a.id));

    let mut available_sports: Vec<SportOption> = sports
        .iter()
        .filter(|s| sport_ids.contains(&s.id))
        .map(|s| SportOption {
            id: s.id,
            name: s.name.clone(),
        })
        .collect();
    available_sports.sort_by(|a, b| a.name.cmp(&b.name));

    let mut available_categories: Vec<CategoryOption> = categories
        .iter()
        .filter(|c| category_ids.contains(&c.id))
        .map(|c| CategoryOption {
            id: c.id,
            sport_id: c.sport_id,
            label: c.label(),
        })
        .collect();
    available_categories.sort_by(|a, b| a.id.cmp(&b.id));

    Ok(NavigationOptions {
        available_seasons,
        available_sports,
        available_categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CompetitionStage, Division, Level, Season, Sport, SportCategory, Stage,
    };
    use crate::store::{JsonlWriter, StoreConfig, Table};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn write<T: serde::Serialize>(store: &LeagueStore, table: Table, records: &[T]) {
        JsonlWriter::for_table(store.config(), table)
            .write_all(records)
            .unwrap();
    }

    fn season(id: i64, name: &str, year: i32) -> Season {
        Season::new(
            id.into(),
            name.to_string(),
            Utc.with_ymd_and_hms(year, 9, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(year + 1, 6, 30, 0, 0, 0).unwrap(),
        )
    }

    /// Two seasons, two sports. Volleyball runs in both seasons; futsal only
    /// in season 2. Volleyball has two categories, futsal one.
    fn seed(store: &LeagueStore) {
        write(
            store,
            Table::Season,
            &[season(1, "2024/25", 2024), season(2, "2025/26", 2025)],
        );
        write(
            store,
            Table::Sport,
            &[
                Sport::new(1.into(), "Volleyball".to_string()),
                Sport::new(2.into(), "Futsal".to_string()),
            ],
        );
        write(
            store,
            Table::SportCategory,
            &[
                SportCategory::new(10.into(), 1.into(), Division::Women, Level::Varsity),
                SportCategory::new(11.into(), 1.into(), Division::Men, Level::Varsity),
                SportCategory::new(20.into(), 2.into(), Division::Mixed, Level::Club),
            ],
        );
        write(
            store,
            Table::Stage,
            &[
                Stage::new(100.into(), 10.into(), 1.into(), CompetitionStage::GroupStage),
                Stage::new(101.into(), 10.into(), 2.into(), CompetitionStage::GroupStage),
                Stage::new(102.into(), 11.into(), 2.into(), CompetitionStage::GroupStage),
                Stage::new(103.into(), 20.into(), 2.into(), CompetitionStage::GroupStage),
            ],
        );
    }

    #[test]
    fn test_empty_filters_list_everything_with_stages() {
        let tmp = TempDir::new().unwrap();
        let store = LeagueStore::new(StoreConfig::new(tmp.path().to_path_buf()));
        seed(&store);

        let nav = navigation(&store, &StandingsFilters::default()).unwrap();
        assert_eq!(nav.available_seasons.len(), 2);
        assert_eq!(nav.available_sports.len(), 2);
        assert_eq!(nav.available_categories.len(), 3);
    }

    #[test]
    fn test_season_narrows_sports() {
        let tmp = TempDir::new().unwrap();
        let store = LeagueStore::new(StoreConfig::new(tmp.path().to_path_buf()));
        seed(&store);

        // Season 1 has only volleyball stages.
        let filters = StandingsFilters {
            season_id: Some(1.into()),
            ..Default::default()
        };
        let nav = navigation(&store, &filters).unwrap();
        assert_eq!(nav.available_sports.len(), 1);
        assert_eq!(nav.available_sports[0].name, "Volleyball");
        // Category 11 has no stage in season 1.
        assert_eq!(nav.available_categories.len(), 1);
        assert_eq!(nav.available_categories[0].id, SportCategoryId::new(10));
    }

    #[test]
    fn test_sport_narrows_seasons_but_not_itself() {
        let tmp = TempDir::new().unwrap();
        let store = LeagueStore::new(StoreConfig::new(tmp.path().to_path_buf()));
        seed(&store);

        // Futsal only has a stage in season 2, but the sports axis still
        // offers both sports so the user can switch.
        let filters = StandingsFilters {
            sport_id: Some(2.into()),
            ..Default::default()
        };
        let nav = navigation(&store, &filters).unwrap();
        assert_eq!(nav.available_seasons.len(), 1);
        assert_eq!(nav.available_seasons[0].id, SeasonId::new(2));
        assert_eq!(nav.available_sports.len(), 2);
        assert_eq!(nav.available_categories.len(), 1);
        assert_eq!(nav.available_categories[0].label, "mixed club");
    }

    #[test]
    fn test_season_and_sport_narrow_categories() {
        let tmp = TempDir::new().unwrap();
        let store = LeagueStore::new(StoreConfig::new(tmp.path().to_path_buf()));
        seed(&store);

        let filters = StandingsFilters {
            season_id: Some(2.into()),
            sport_id: Some(1.into()),
            ..Default::default()
        };
        let nav = navigation(&store, &filters).unwrap();
        let ids: Vec<_> = nav.available_categories.iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![10, 11]);
    }

    #[test]
    fn test_empty_store_yields_empty_lists() {
        let tmp = TempDir::new().unwrap();
        let store = LeagueStore::new(StoreConfig::new(tmp.path().to_path_buf()));

        let nav = navigation(&store, &StandingsFilters::default()).unwrap();
        assert!(nav.available_seasons.is_empty());
        assert!(nav.available_sports.is_empty());
        assert!(nav.available_categories.is_empty());
    }

    #[test]
    fn test_seasons_sorted_newest_first() {
        let tmp = TempDir::new().unwrap();
        let store = LeagueStore::new(StoreConfig::new(tmp.path().to_path_buf()));
        seed(&store);

        let filters = StandingsFilters {
            sport_id: Some(1.into()),
            ..Default::default()
        };
        let nav = navigation(&store, &filters).unwrap();
        assert_eq!(nav.available_seasons[0].id, SeasonId::new(2));
        assert_eq!(nav.available_seasons[1].id, SeasonId::new(1));
    }
}
