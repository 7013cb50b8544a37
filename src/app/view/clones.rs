//! Search for jump clones of all characters, with the number of jumps from a chosen origin.

use std::{
    cmp::Ordering,
    collections::{BTreeSet, HashMap, HashSet},
    time::Duration,
};

use futures::{future::BoxFuture, FutureExt};

use crate::{
    app::{
        context::AppContext,
        error::Error,
        event::{AppEvent, CharacterSectionUpdated},
        table::{ColumnDef, ColumnSorter, FilterableTable, SortDir, TableRow, TableSnapshot},
        view::{
            actor::{Effect, ViewModel, FETCH},
            label::StatusLabel,
            ViewConfig,
        },
    },
    model::{
        Character, CharacterId, CharacterSection, EveSolarSystem, GeneralSection, JumpClone,
        RouteHeader, RoutePreference,
    },
};

/// Kind of the background task computing routes.
pub const ROUTES: &str = "routes";

pub const COL_LOCATION: usize = 0;
pub const COL_REGION: usize = 1;
pub const COL_IMPLANTS: usize = 2;
pub const COL_CHARACTER: usize = 3;
pub const COL_JUMPS: usize = 4;

pub const FILTER_OWNER: usize = 0;
pub const FILTER_REGION: usize = 1;
pub const FILTER_SYSTEM: usize = 2;
pub const FILTER_TAG: usize = 3;

/// Sort value of clones whose route has not been computed.
const JUMPS_UNKNOWN: usize = 10_000;
/// Sort value of clones without a route.
const JUMPS_NO_ROUTE: usize = 10_000_000;

#[derive(Debug, Clone, PartialEq)]
pub struct CloneRow {
    pub clone: JumpClone,
    pub tags: BTreeSet<String>,
    /// Systems from the origin to the clone, `None` until computed.
    pub route: Option<Vec<EveSolarSystem>>,
}

impl CloneRow {
    pub fn jumps(&self) -> Option<usize> {
        match &self.route {
            Some(route) if !route.is_empty() => Some(route.len() - 1),
            _ => None,
        }
    }

    fn jumps_sort_value(&self) -> usize {
        match &self.route {
            None => JUMPS_UNKNOWN,
            Some(route) if route.is_empty() => JUMPS_NO_ROUTE,
            Some(route) => route.len() - 1,
        }
    }

    fn solar_system_name(&self) -> String {
        self.clone.location.solar_system_name()
    }
}

impl TableRow for CloneRow {
    fn compare(&self, other: &Self, column: usize) -> Ordering {
        match column {
            COL_LOCATION => self
                .clone
                .location
                .display_name()
                .cmp(&other.clone.location.display_name()),
            COL_IMPLANTS => self
                .clone
                .implants_count()
                .cmp(&other.clone.implants_count()),
            COL_CHARACTER => self.clone.character.name.cmp(&other.clone.character.name),
            COL_JUMPS => self.jumps_sort_value().cmp(&other.jumps_sort_value()),
            _ => Ordering::Equal,
        }
    }

    fn cell(&self, column: usize) -> String {
        match column {
            COL_LOCATION => self.clone.location.display_name(),
            COL_REGION => self.clone.location.region_name(),
            COL_IMPLANTS => self.clone.implants_count().to_string(),
            COL_CHARACTER => self.clone.character.name.clone(),
            COL_JUMPS => match &self.route {
                None => "?".to_string(),
                Some(route) if route.is_empty() => "No route".to_string(),
                Some(route) => (route.len() - 1).to_string(),
            },
            _ => String::new(),
        }
    }
}

pub enum ClonesData {
    Rows(Vec<CloneRow>),
    Routes(HashMap<RouteHeader, Vec<EveSolarSystem>>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClonesCommand {
    SortColumn(usize),
    SetSort(usize, SortDir),
    ResetSort,
    Select { filter: usize, value: Option<String> },
    /// Sets the system routes are computed from, or clears it.
    SetOrigin(Option<EveSolarSystem>),
    SetRoutePreference(RoutePreference),
}

#[derive(Debug, Clone, Default)]
pub struct ClonesSnapshot {
    pub top: StatusLabel,
    pub origin: Option<EveSolarSystem>,
    pub preference: RoutePreference,
    pub table: TableSnapshot<CloneRow>,
}

pub struct CloneSearchView {
    table: FilterableTable<CloneRow>,
    origin: Option<EveSolarSystem>,
    preference: RoutePreference,
    /// Set when the origin or preference changed, so the next routes sort the table by jumps.
    sort_by_jumps: bool,
    top: StatusLabel,
}

impl Default for CloneSearchView {
    fn default() -> Self {
        Self::new(RoutePreference::default())
    }
}

impl CloneSearchView {
    pub fn new(preference: RoutePreference) -> Self {
        let columns = vec![
            ColumnDef::new("Location").width(350),
            ColumnDef::new("Region").width(150).not_sortable(),
            ColumnDef::new("Impl.").width(100),
            ColumnDef::new("Character").width(200),
            ColumnDef::new("Jumps").width(100),
        ];
        let sorter = ColumnSorter::new(&columns);
        let table = FilterableTable::new(columns, sorter)
            .with_filter("Owner", |r: &CloneRow| vec![r.clone.character.name.clone()])
            .with_filter("Region", |r: &CloneRow| vec![r.clone.location.region_name()])
            .with_filter("System", |r: &CloneRow| vec![r.solar_system_name()])
            .with_filter("Tag", |r: &CloneRow| r.tags.iter().cloned().collect());
        Self {
            table,
            origin: None,
            preference,
            sort_by_jumps: false,
            top: StatusLabel::default(),
        }
    }

    fn update_top(&mut self) {
        let count = self.table.rows().len();
        self.top = if count == 0 {
            StatusLabel::low("No clones")
        } else {
            StatusLabel::info(format!("{} clones", count))
        };
    }

    /// Forgets computed routes, e.g. after the origin changed.
    fn clear_routes(&mut self) {
        let rows = self
            .table
            .rows()
            .iter()
            .cloned()
            .map(|mut r| {
                r.route = None;
                r
            })
            .collect();
        self.table.set_rows(rows);
    }

    fn route_header(&self, origin: &EveSolarSystem, row: &CloneRow) -> Option<RouteHeader> {
        let destination = row.clone.location.solar_system.as_ref()?;
        Some(RouteHeader {
            origin: origin.id,
            destination: destination.id,
            preference: self.preference,
        })
    }

    /// Returns a task computing the routes from the origin to all clones.
    fn fetch_routes(&self, ctx: &AppContext) -> Effect<ClonesData> {
        let Some(origin) = &self.origin else {
            return Effect::None;
        };
        let headers: Vec<RouteHeader> = self
            .table
            .rows()
            .iter()
            .filter_map(|r| self.route_header(origin, r))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        if headers.is_empty() {
            return Effect::None;
        }
        let universe = ctx.universe.clone();
        Effect::Spawn(
            ROUTES,
            async move { universe.fetch_routes(headers).await.map(ClonesData::Routes) }.boxed(),
        )
    }

    fn apply_routes(&mut self, routes: HashMap<RouteHeader, Vec<EveSolarSystem>>) {
        let Some(origin) = self.origin.clone() else {
            return;
        };
        let rows = self
            .table
            .rows()
            .iter()
            .cloned()
            .map(|mut r| {
                r.route = self
                    .route_header(&origin, &r)
                    .and_then(|h| routes.get(&h).cloned());
                r
            })
            .collect();
        self.table.set_rows(rows);
        if std::mem::take(&mut self.sort_by_jumps) {
            self.table.set_sort(COL_JUMPS, SortDir::Asc);
        }
    }
}

impl ViewModel for CloneSearchView {
    type Data = ClonesData;
    type Command = ClonesCommand;
    type Snapshot = ClonesSnapshot;

    fn name(&self) -> &'static str {
        "clone_search"
    }

    fn fetch(&self, ctx: &AppContext) -> BoxFuture<'static, Result<ClonesData, Error>> {
        let characters = ctx.characters.clone();
        async move {
            let clones = characters.list_all_jump_clones().await?;
            let mut tags: HashMap<CharacterId, BTreeSet<String>> = HashMap::new();
            for clone in &clones {
                let id = clone.character.id;
                if !tags.contains_key(&id) {
                    tags.insert(id, characters.list_tags_for_character(id).await?);
                }
            }
            let mut rows: Vec<CloneRow> = clones
                .into_iter()
                .map(|clone| CloneRow {
                    tags: tags.get(&clone.character.id).cloned().unwrap_or_default(),
                    clone,
                    route: None,
                })
                .collect();
            rows.sort_by_key(|r| r.solar_system_name());
            Ok(ClonesData::Rows(rows))
        }
        .boxed()
    }

    fn apply(
        &mut self,
        kind: &'static str,
        result: Result<ClonesData, Error>,
        ctx: &AppContext,
    ) -> Effect<ClonesData> {
        match result {
            Err(err) => {
                if kind == FETCH {
                    self.table.set_rows(Vec::new());
                }
                self.top = StatusLabel::error(&err);
                Effect::None
            }
            Ok(ClonesData::Rows(rows)) => {
                self.table.set_rows(rows);
                self.update_top();
                self.fetch_routes(ctx)
            }
            Ok(ClonesData::Routes(routes)) => {
                self.apply_routes(routes);
                Effect::None
            }
        }
    }

    fn handle(&mut self, command: ClonesCommand, ctx: &AppContext) -> Effect<ClonesData> {
        match command {
            ClonesCommand::SortColumn(column) => self.table.filter_rows(Some(column)),
            ClonesCommand::SetSort(column, dir) => self.table.set_sort(column, dir),
            ClonesCommand::ResetSort => self.table.reset_sort(),
            ClonesCommand::Select { filter, value } => {
                self.table.select(filter, value);
            }
            ClonesCommand::SetOrigin(origin) => {
                self.sort_by_jumps = origin.is_some();
                self.origin = origin;
                self.clear_routes();
                return self.fetch_routes(ctx);
            }
            ClonesCommand::SetRoutePreference(preference) => {
                if preference == self.preference {
                    return Effect::None;
                }
                self.preference = preference;
                self.sort_by_jumps = self.origin.is_some();
                self.clear_routes();
                return self.fetch_routes(ctx);
            }
        }
        Effect::None
    }

    fn on_event(&mut self, event: &AppEvent, _ctx: &AppContext) -> Effect<ClonesData> {
        match event {
            AppEvent::CharacterSectionChanged(CharacterSectionUpdated { section, .. }) => {
                match section {
                    CharacterSection::JumpClones
                    | CharacterSection::Implants
                    | CharacterSection::Location => Effect::Refresh,
                    _ => Effect::None,
                }
            }
            AppEvent::GeneralSectionChanged(GeneralSection::Universe)
            | AppEvent::CharacterAdded(_)
            | AppEvent::CharacterRemoved(_)
            | AppEvent::TagsChanged => Effect::Refresh,
            _ => Effect::None,
        }
    }

    fn on_character(&mut self, _character: Option<&Character>) -> Effect<ClonesData> {
        Effect::None
    }

    fn tick_interval(&self, config: &ViewConfig) -> Option<Duration> {
        Some(config.tick_interval())
    }

    fn on_tick(&mut self, ctx: &AppContext) -> Effect<ClonesData> {
        self.fetch_routes(ctx)
    }

    fn snapshot(&self) -> ClonesSnapshot {
        ClonesSnapshot {
            top: self.top.clone(),
            origin: self.origin.clone(),
            preference: self.preference,
            table: self.table.snapshot(),
        }
    }
}
