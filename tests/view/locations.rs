//! Tests for the character locations overview.

use evebuddy::{
    app::view::{
        locations::{LocationsCommand, COL_CHARACTER, FILTER_TAG},
        CharacterLocationsView,
    },
    model::Importance,
};

use super::*;

async fn setup() -> TestSetup {
    let jita = factory::mock_solar_system(30000142, "Jita", 0.95, "The Forge");
    let mut bruce = factory::mock_character(1001, "bruce");
    bruce.location = Some(factory::mock_location(60003760, "Jita 4-4", Some(jita)));
    TestBuilder::new()
        .with_character(bruce)
        .with_tagged_character(1002, "Alfred", "alts")
        .with_tagged_character(1003, "Clark", "alts")
        .build()
        .await
        .expect("Failed to create test setup")
}

fn names(rows: &[evebuddy::app::view::locations::CharacterLocationRow]) -> Vec<String> {
    rows.iter().map(|r| r.character_name.clone()).collect()
}

/// Tests that all characters are listed, sorted by name ignoring case.
///
/// Expected: Alfred, bruce, Clark
#[tokio::test]
async fn lists_all_characters() {
    let test = setup().await;
    let view = test.spawn(CharacterLocationsView::new());
    let mut rx = view.subscribe();

    let snapshot = test
        .wait_for(&mut rx, |s| s.table.rows.len() == 3)
        .await
        .expect("Rows were not loaded");

    assert_eq!(names(&snapshot.table.rows), vec!["Alfred", "bruce", "Clark"]);
    assert!(snapshot.bottom.is_none());
}

/// Tests that a tag filter narrows the rows and clicking the header reverses the sort.
///
/// Expected: Clark, Alfred
#[tokio::test]
async fn filters_by_tag_and_sorts() {
    let test = setup().await;
    let view = test.spawn(CharacterLocationsView::new());
    let mut rx = view.subscribe();
    test.wait_for(&mut rx, |s| s.table.rows.len() == 3)
        .await
        .expect("Rows were not loaded");

    view.send(LocationsCommand::Select {
        filter: FILTER_TAG,
        value: Some("alts".to_string()),
    });
    view.send(LocationsCommand::SortColumn(COL_CHARACTER));

    let snapshot = test
        .wait_for(&mut rx, |s| {
            s.table.rows.len() == 2 && s.table.rows[0].character_name == "Clark"
        })
        .await
        .expect("Filter and sort were not applied");
    assert_eq!(names(&snapshot.table.rows), vec!["Clark", "Alfred"]);
}

/// Tests that a tag change reloads the rows.
///
/// Expected: the view keeps running and shows all characters again
#[tokio::test]
async fn reloads_on_tags_changed() {
    let test = setup().await;
    let view = test.spawn(CharacterLocationsView::new());
    let mut rx = view.subscribe();
    test.wait_for(&mut rx, |s| s.table.rows.len() == 3)
        .await
        .expect("Rows were not loaded");

    test.ctx.events.tags_changed.publish(());

    let snapshot = test
        .wait_for(&mut rx, |s| s.table.rows.len() == 3)
        .await
        .expect("Rows were not reloaded");
    assert_eq!(snapshot.table.chips[FILTER_TAG].options(), &["alts"]);
}

/// Tests the label shown when there are no characters.
///
/// Expected: "No characters" with low importance
#[tokio::test]
async fn shows_hint_without_characters() {
    let test = TestBuilder::new()
        .build()
        .await
        .expect("Failed to create test setup");
    let view = test.spawn(CharacterLocationsView::new());
    let mut rx = view.subscribe();

    let snapshot = test
        .wait_for(&mut rx, |s| s.bottom.is_some())
        .await
        .expect("Label was not shown");

    let label = snapshot.bottom.unwrap();
    assert_eq!(label.text, "No characters");
    assert_eq!(label.importance, Importance::Low);
}
