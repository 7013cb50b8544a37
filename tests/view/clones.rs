//! Tests for the clone search with routes from an origin.

use evebuddy::{
    app::{
        table::TableRow,
        view::{
            clones::{ClonesCommand, COL_JUMPS},
            CloneSearchView,
        },
    },
    model::RoutePreference,
};

use super::*;

async fn setup() -> TestSetup {
    let jita = factory::mock_solar_system(1, "Jita", 0.95, "The Forge");
    let perimeter = factory::mock_solar_system(2, "Perimeter", 0.95, "The Forge");
    let tama = factory::mock_solar_system(3, "Tama", 0.3, "The Citadel");
    let amarr = factory::mock_solar_system(4, "Amarr", 1.0, "Domain");
    let bruce = factory::mock_character(1001, "Bruce Wayne");

    TestBuilder::new()
        .with_character(bruce.clone())
        .with_solar_system(jita)
        .with_solar_system(perimeter.clone())
        .with_solar_system(tama.clone())
        .with_solar_system(amarr.clone())
        .with_stargate(1, 2)
        .with_stargate(2, 3)
        .with_jump_clone(factory::mock_jump_clone(
            1,
            &bruce,
            factory::mock_location(60000001, "Tama Station", Some(tama)),
        ))
        .with_jump_clone(factory::mock_jump_clone(
            2,
            &bruce,
            factory::mock_location(60000002, "Perimeter Station", Some(perimeter)),
        ))
        .with_jump_clone(factory::mock_jump_clone(
            3,
            &bruce,
            factory::mock_location(60000003, "Amarr Station", Some(amarr)),
        ))
        .build()
        .await
        .expect("Failed to create test setup")
}

/// Tests that clones are listed by system name before an origin is chosen.
///
/// Expected: Amarr, Perimeter, Tama with unknown jumps
#[tokio::test]
async fn lists_clones_without_routes() {
    let test = setup().await;
    let view = test.spawn(CloneSearchView::new(RoutePreference::Shortest));
    let mut rx = view.subscribe();

    let snapshot = test
        .wait_for(&mut rx, |s| s.table.rows.len() == 3)
        .await
        .expect("Clones were not loaded");

    let systems: Vec<_> = snapshot
        .table
        .rows
        .iter()
        .map(|r| r.clone.location.solar_system_name())
        .collect();
    assert_eq!(systems, vec!["Amarr", "Perimeter", "Tama"]);
    assert!(snapshot.table.rows.iter().all(|r| r.cell(COL_JUMPS) == "?"));
    assert_eq!(snapshot.top.text, "3 clones");
}

/// Tests that choosing an origin computes routes and sorts by jumps.
///
/// Expected: Perimeter (1), Tama (2), Amarr (no route)
#[tokio::test]
async fn sorts_by_jumps_from_origin() {
    let test = setup().await;
    let view = test.spawn(CloneSearchView::new(RoutePreference::Shortest));
    let mut rx = view.subscribe();
    test.wait_for(&mut rx, |s| s.table.rows.len() == 3)
        .await
        .expect("Clones were not loaded");

    let jita = factory::mock_solar_system(1, "Jita", 0.95, "The Forge");
    view.send(ClonesCommand::SetOrigin(Some(jita)));

    let snapshot = test
        .wait_for(&mut rx, |s| s.table.rows.iter().all(|r| r.route.is_some()))
        .await
        .expect("Routes were not computed");
    let jumps: Vec<_> = snapshot
        .table
        .rows
        .iter()
        .map(|r| r.cell(COL_JUMPS))
        .collect();
    assert_eq!(jumps, vec!["1", "2", "No route"]);
}

/// Tests that a secure route preference avoids low sec systems where possible.
///
/// Expected: Tama is still reachable, since there is no alternative
#[tokio::test]
async fn secure_preference_keeps_only_route() {
    let test = setup().await;
    let view = test.spawn(CloneSearchView::new(RoutePreference::Secure));
    let mut rx = view.subscribe();
    test.wait_for(&mut rx, |s| s.table.rows.len() == 3)
        .await
        .expect("Clones were not loaded");

    view.send(ClonesCommand::SetOrigin(Some(factory::mock_solar_system(
        1,
        "Jita",
        0.95,
        "The Forge",
    ))));

    let snapshot = test
        .wait_for(&mut rx, |s| s.table.rows.iter().all(|r| r.route.is_some()))
        .await
        .expect("Routes were not computed");
    let tama = snapshot
        .table
        .rows
        .iter()
        .find(|r| r.clone.location.solar_system_name() == "Tama")
        .unwrap();
    assert_eq!(tama.jumps(), Some(2));
    assert_eq!(snapshot.preference, RoutePreference::Secure);
}
