//! Overview of where all characters are and which ship they fly.

use std::{cmp::Ordering, collections::BTreeSet};

use futures::{future::BoxFuture, FutureExt};

use crate::{
    app::{
        context::AppContext,
        error::Error,
        event::{AppEvent, CharacterSectionUpdated},
        table::{ColumnDef, ColumnSorter, FilterableTable, SortDir, TableRow, TableSnapshot},
        view::{
            actor::{Effect, ViewModel},
            label::StatusLabel,
        },
    },
    model::{Character, CharacterId, CharacterSection, LocationId, SolarSystemSecurityType},
};

pub const COL_CHARACTER: usize = 0;
pub const COL_LOCATION: usize = 1;
pub const COL_REGION: usize = 2;
pub const COL_SHIP: usize = 3;

pub const FILTER_REGION: usize = 0;
pub const FILTER_SYSTEM: usize = 1;
pub const FILTER_TAG: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterLocationRow {
    pub character_id: CharacterId,
    pub character_name: String,
    pub location_id: Option<LocationId>,
    pub location_name: String,
    pub security_type: Option<SolarSystemSecurityType>,
    pub solar_system_name: String,
    pub region_name: String,
    pub ship_name: String,
    pub tags: BTreeSet<String>,
}

impl From<&Character> for CharacterLocationRow {
    fn from(c: &Character) -> Self {
        let location = c.location.as_ref();
        Self {
            character_id: c.id,
            character_name: c.name.clone(),
            location_id: location.map(|l| l.id),
            location_name: location.map(|l| l.display_name()).unwrap_or_default(),
            security_type: location
                .and_then(|l| l.solar_system.as_ref())
                .map(|s| s.security_type()),
            solar_system_name: location.map(|l| l.solar_system_name()).unwrap_or_default(),
            region_name: location.map(|l| l.region_name()).unwrap_or_default(),
            ship_name: c.ship.as_ref().map(|s| s.name.clone()).unwrap_or_default(),
            tags: c.tags.clone(),
        }
    }
}

fn or_unknown(s: &str) -> String {
    if s.is_empty() {
        "?".to_string()
    } else {
        s.to_string()
    }
}

impl TableRow for CharacterLocationRow {
    fn compare(&self, other: &Self, column: usize) -> Ordering {
        match column {
            COL_CHARACTER => self
                .character_name
                .to_lowercase()
                .cmp(&other.character_name.to_lowercase()),
            COL_LOCATION => self.location_name.cmp(&other.location_name),
            COL_REGION => self.region_name.cmp(&other.region_name),
            COL_SHIP => self.ship_name.cmp(&other.ship_name),
            _ => Ordering::Equal,
        }
    }

    fn cell(&self, column: usize) -> String {
        match column {
            COL_CHARACTER => self.character_name.clone(),
            COL_LOCATION if self.location_id.is_none() => "?".to_string(),
            COL_LOCATION => self.location_name.clone(),
            COL_REGION => or_unknown(&self.region_name),
            COL_SHIP => or_unknown(&self.ship_name),
            _ => "?".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationsCommand {
    /// A column header was clicked.
    SortColumn(usize),
    SetSort(usize, SortDir),
    ResetSort,
    Select { filter: usize, value: Option<String> },
}

#[derive(Debug, Clone, Default)]
pub struct LocationsSnapshot {
    /// Shown only when there is nothing to show in the table.
    pub bottom: Option<StatusLabel>,
    pub table: TableSnapshot<CharacterLocationRow>,
}

pub struct CharacterLocationsView {
    table: FilterableTable<CharacterLocationRow>,
    bottom: Option<StatusLabel>,
}

impl Default for CharacterLocationsView {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterLocationsView {
    pub fn new() -> Self {
        let columns = vec![
            ColumnDef::new("Character").width(200),
            ColumnDef::new("Location").width(350),
            ColumnDef::new("Region").width(150),
            ColumnDef::new("Ship").width(150),
        ];
        let sorter = ColumnSorter::with_default(&columns, COL_CHARACTER, SortDir::Asc);
        let table = FilterableTable::new(columns, sorter)
            .with_filter("Region", |r: &CharacterLocationRow| vec![r.region_name.clone()])
            .with_filter("System", |r: &CharacterLocationRow| {
                vec![r.solar_system_name.clone()]
            })
            .with_filter("Tag", |r: &CharacterLocationRow| {
                r.tags.iter().cloned().collect()
            });
        Self {
            table,
            bottom: None,
        }
    }
}

impl ViewModel for CharacterLocationsView {
    type Data = Vec<CharacterLocationRow>;
    type Command = LocationsCommand;
    type Snapshot = LocationsSnapshot;

    fn name(&self) -> &'static str {
        "character_locations"
    }

    fn fetch(&self, ctx: &AppContext) -> BoxFuture<'static, Result<Self::Data, Error>> {
        let characters = ctx.characters.clone();
        async move {
            let characters = characters.list_characters().await?;
            Ok(characters.iter().map(CharacterLocationRow::from).collect())
        }
        .boxed()
    }

    fn apply(
        &mut self,
        _kind: &'static str,
        result: Result<Self::Data, Error>,
        _ctx: &AppContext,
    ) -> Effect<Self::Data> {
        let rows = match result {
            Ok(rows) if rows.is_empty() => {
                self.bottom = Some(StatusLabel::low("No characters"));
                rows
            }
            Ok(rows) => {
                self.bottom = None;
                rows
            }
            Err(err) => {
                self.bottom = Some(StatusLabel::error(&err));
                Vec::new()
            }
        };
        self.table.set_rows(rows);
        Effect::None
    }

    fn handle(&mut self, command: LocationsCommand, _ctx: &AppContext) -> Effect<Self::Data> {
        match command {
            LocationsCommand::SortColumn(column) => self.table.filter_rows(Some(column)),
            LocationsCommand::SetSort(column, dir) => self.table.set_sort(column, dir),
            LocationsCommand::ResetSort => self.table.reset_sort(),
            LocationsCommand::Select { filter, value } => {
                self.table.select(filter, value);
            }
        }
        Effect::None
    }

    fn on_event(&mut self, event: &AppEvent, _ctx: &AppContext) -> Effect<Self::Data> {
        match event {
            AppEvent::CharacterSectionChanged(CharacterSectionUpdated { section, .. }) => {
                match section {
                    CharacterSection::Location
                    | CharacterSection::Online
                    | CharacterSection::Ship => Effect::Refresh,
                    _ => Effect::None,
                }
            }
            AppEvent::CharacterAdded(_) | AppEvent::CharacterRemoved(_) | AppEvent::TagsChanged => {
                Effect::Refresh
            }
            _ => Effect::None,
        }
    }

    fn on_character(&mut self, _character: Option<&Character>) -> Effect<Self::Data> {
        Effect::None
    }

    fn snapshot(&self) -> LocationsSnapshot {
        LocationsSnapshot {
            bottom: self.bottom.clone(),
            table: self.table.snapshot(),
        }
    }
}
