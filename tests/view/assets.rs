//! Tests for the asset browser running as a view actor.

use evebuddy::{
    app::{
        asset::LocationNodeVariant,
        view::{assets::AssetsCommand, CharacterAssetsView, StatusLabel},
    },
    model::CharacterSection,
};

use super::*;

const JITA: i64 = 60003760;
const AMARR: i64 = 60008494;

async fn setup() -> TestSetup {
    let bruce = factory::character_id(1001);
    let clark = factory::character_id(1002);
    TestBuilder::new()
        .with_character(factory::mock_character(1001, "Bruce Wayne"))
        .with_character(factory::mock_character(1002, "Clark Kent"))
        .with_location(factory::mock_location(
            JITA,
            "Jita IV - Moon 4 - Caldari Navy Assembly Plant",
            Some(factory::mock_solar_system(30000142, "Jita", 0.95, "The Forge")),
        ))
        .with_location(factory::mock_location(
            AMARR,
            "Amarr VIII (Oris) - Emperor Family Academy",
            Some(factory::mock_solar_system(30002187, "Amarr", 1.0, "Domain")),
        ))
        .with_assets([
            factory::mock_ship(bruce, 1, JITA, "Merlin"),
            factory::mock_asset(bruce, 2, 1, "Cargo", 100),
            factory::mock_container(bruce, 3, JITA),
            factory::mock_asset(bruce, 4, 3, "Unlocked", 5),
            factory::mock_asset(clark, 5, AMARR, "Hangar", 7),
        ])
        .with_current_character(1001)
        .build()
        .await
        .expect("Failed to create test setup")
}

/// Tests that the tree of the current character is loaded when the view starts.
///
/// Expected: one root for Jita with hangars below it
#[tokio::test]
async fn loads_tree_of_current_character() {
    let test = setup().await;
    let view = test.spawn(CharacterAssetsView::new());
    let mut rx = view.subscribe();

    let snapshot = test
        .wait_for(&mut rx, |s| !s.tree.is_empty())
        .await
        .expect("Tree was not loaded");

    assert_eq!(snapshot.tree.roots().len(), 1);
    let root = snapshot.tree.node(&snapshot.tree.roots()[0]).unwrap();
    assert_eq!(root.container_id, JITA);
    assert_eq!(root.system_name.as_deref(), Some("Jita"));
    let hangars: Vec<_> = snapshot
        .tree
        .children(Some(&root.uid()))
        .iter()
        .filter_map(|uid| snapshot.tree.node(uid))
        .map(|n| n.variant)
        .collect();
    assert_eq!(
        hangars,
        vec![LocationNodeVariant::ShipHangar, LocationNodeVariant::ItemHangar]
    );
}

/// Tests that selecting a container from the grid shows its content.
///
/// Expected: container node selected, its stack listed in the grid
#[tokio::test]
async fn selects_container_from_grid() {
    let test = setup().await;
    let view = test.spawn(CharacterAssetsView::new());
    let mut rx = view.subscribe();
    test.wait_for(&mut rx, |s| !s.tree.is_empty())
        .await
        .expect("Tree was not loaded");

    assert!(view.send(AssetsCommand::SelectContainer(3)));
    let snapshot = test
        .wait_for(&mut rx, |s| s.selected.is_some())
        .await
        .expect("Container was not selected");

    assert_eq!(
        snapshot.selected.map(|uid| uid.variant),
        Some(LocationNodeVariant::Container)
    );
    assert_eq!(snapshot.assets.len(), 1);
    assert_eq!(snapshot.assets[0].quantity, 5);
    assert!(snapshot.bottom.starts_with("1 Items"));
}

/// Tests that switching the character rebuilds the tree for the new character.
///
/// Expected: tree with the Amarr station only
#[tokio::test]
async fn rebuilds_tree_after_character_switch() {
    let test = setup().await;
    let view = test.spawn(CharacterAssetsView::new());
    let mut rx = view.subscribe();
    test.wait_for(&mut rx, |s| !s.tree.is_empty())
        .await
        .expect("Tree was not loaded");

    test.ctx
        .switch_character(factory::character_id(1002))
        .await
        .expect("Failed to switch character");

    let snapshot = test
        .wait_for(&mut rx, |s| {
            s.tree
                .roots()
                .first()
                .and_then(|uid| s.tree.node(uid))
                .is_some_and(|n| n.container_id == AMARR)
        })
        .await
        .expect("Tree was not rebuilt");
    assert_eq!(snapshot.tree.roots().len(), 1);
}

/// Tests that the view waits for asset data which has not been loaded yet.
///
/// Expected: waiting label and an empty tree
#[tokio::test]
async fn waits_for_missing_section() {
    let test = TestBuilder::new()
        .with_character(factory::mock_character(1001, "Bruce Wayne"))
        .with_missing_section(1001, CharacterSection::Assets)
        .with_current_character(1001)
        .build()
        .await
        .expect("Failed to create test setup");
    let view = test.spawn(CharacterAssetsView::new());
    let mut rx = view.subscribe();

    let snapshot = test
        .wait_for(&mut rx, |s| s.top == StatusLabel::waiting())
        .await
        .expect("Waiting label not shown");

    assert!(snapshot.tree.is_empty());
}
