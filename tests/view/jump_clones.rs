//! Tests for the jump clones of the current character.

use chrono::{Duration, Utc};
use evebuddy::{
    app::view::{CharacterJumpClonesView, StatusLabel},
    model::{Character, CharacterSection, Importance},
};

use super::*;

fn bruce() -> Character {
    Character {
        last_clone_jump_at: Some(Utc::now() - Duration::hours(30)),
        ..factory::mock_character(1001, "Bruce Wayne")
    }
}

fn builder() -> TestBuilder {
    let bruce = bruce();
    let clark = factory::mock_character(1002, "Clark Kent");
    let jita = factory::mock_solar_system(30000142, "Jita", 0.95, "The Forge");
    let amarr = factory::mock_solar_system(30002187, "Amarr", 1.0, "Domain");

    TestBuilder::new()
        .with_character(bruce.clone())
        .with_character(clark.clone())
        .with_jump_clone(factory::mock_jump_clone(
            1,
            &bruce,
            factory::mock_location(60003760, "Jita IV - Moon 4", Some(jita)),
        ))
        .with_jump_clone(factory::mock_jump_clone(
            2,
            &bruce,
            factory::mock_location(60008494, "Amarr VIII", Some(amarr.clone())),
        ))
        .with_jump_clone(factory::mock_jump_clone(
            3,
            &clark,
            factory::mock_location(60008495, "Amarr IX", Some(amarr)),
        ))
}

/// Tests that only the clones of the current character are shown.
///
/// Expected: two clones sorted by location and a jump available now
#[tokio::test]
async fn shows_clones_of_current_character() {
    let test = builder()
        .with_current_character(1001)
        .build()
        .await
        .expect("Failed to create test setup");
    let view = test.spawn(CharacterJumpClonesView::new());
    let mut rx = view.subscribe();

    let snapshot = test
        .wait_for(&mut rx, |s| !s.tree.is_empty())
        .await
        .expect("Clones were not loaded");

    assert_eq!(snapshot.top.text, "2 clones");
    let names: Vec<_> = snapshot
        .tree
        .roots()
        .iter()
        .filter_map(|u| snapshot.tree.node(u))
        .map(|n| n.name.as_str())
        .collect();
    assert_eq!(names, vec!["Amarr VIII", "Jita IV - Moon 4"]);
    let next_jump = snapshot.next_jump.expect("Next jump missing");
    assert_eq!(next_jump.text, "NOW");
    assert_eq!(next_jump.importance, Importance::Success);
    assert_eq!(snapshot.last_jump.as_deref(), Some("1 day ago"));
}

/// Tests that the view waits for the jump clones section.
///
/// Expected: waiting label and no clones
#[tokio::test]
async fn waits_for_jump_clones_section() {
    let test = builder()
        .with_missing_section(1001, CharacterSection::JumpClones)
        .with_current_character(1001)
        .build()
        .await
        .expect("Failed to create test setup");
    let view = test.spawn(CharacterJumpClonesView::new());
    let mut rx = view.subscribe();

    let snapshot = test
        .wait_for(&mut rx, |s| s.top == StatusLabel::waiting())
        .await
        .expect("View did not report missing data");

    assert!(snapshot.tree.is_empty());
    assert!(snapshot.next_jump.is_none());
}
