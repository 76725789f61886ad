//! End-to-end rendering against an in-memory membership database

use anyhow::Result;
use profile_badges::badge::{InDescendantOfGroupType, InDescendantSettings, MembershipState};
use profile_badges::group::{GroupMemberStatus, MembershipStore, TraversalLimits};
use profile_badges::person::PersonRecord;
use profile_badges::test_helpers::{self, Fixture};
use sqlx::SqlitePool;

const SERVING_TEAM: &str = "7e3a1f0c-2b4d-4c8e-9f10-3a5b6c7d8e9f";

struct Tree {
    pool: SqlitePool,
    person: PersonRecord,
    member_role: i64,
    leader_role: i64,
    g1: i64,
    g2: i64,
    g3: i64,
    unrelated: i64,
}

/// Serving Team `G1` -> `G2` -> `G3`, plus an unrelated group of another type.
async fn setup_tree() -> Result<Tree> {
    let pool = test_helpers::create_test_pool().await?;
    let fixture = Fixture::new(&pool);

    let team = fixture
        .group_type_with_guid(SERVING_TEAM, "Serving Team")
        .await?;
    let area = fixture.group_type("Area").await?;
    let member_role = fixture.role(area, "Member", 1).await?;
    let leader_role = fixture.role(area, "Leader", 0).await?;

    let g1 = fixture.group(team, None, "Ushers").await?;
    let g2 = fixture.group(area, Some(g1), "North Campus").await?;
    let g3 = fixture.group(area, Some(g2), "Sunday 9am").await?;
    let unrelated = fixture.group(area, None, "Choir").await?;
    let person = fixture.person("Ted", "Decker").await?;

    Ok(Tree {
        pool,
        person,
        member_role,
        leader_role,
        g1,
        g2,
        g3,
        unrelated,
    })
}

fn serving_badge(color: Option<&str>) -> InDescendantOfGroupType {
    InDescendantOfGroupType::new(
        42,
        InDescendantSettings::from_attributes(Some(SERVING_TEAM), color),
        TraversalLimits::default(),
    )
}

#[tokio::test]
async fn member_of_great_grandchild_renders_enabled_badge() -> Result<()> {
    let tree = setup_tree().await?;
    Fixture::new(&tree.pool)
        .member(tree.g3, tree.person.id, tree.member_role, GroupMemberStatus::Active)
        .await?;

    let fragment = serving_badge(Some("#ff0000"))
        .render(&tree.pool, &tree.person)
        .await?
        .expect("badge renders");

    assert_eq!(
        fragment.to_html(),
        "<div class='badge badge-ingroupoftype badge-id-42' data-toggle='tooltip' \
         data-original-title='Ted is in a descendant of a Serving Team'>\
         <i class='badge-icon fa fa-sitemap' style='color: #ff0000'></i></div>"
    );
    Ok(())
}

#[tokio::test]
async fn member_of_typed_group_itself_counts() -> Result<()> {
    let tree = setup_tree().await?;
    Fixture::new(&tree.pool)
        .member(tree.g1, tree.person.id, tree.member_role, GroupMemberStatus::Active)
        .await?;

    let fragment = serving_badge(None)
        .render(&tree.pool, &tree.person)
        .await?
        .expect("badge renders");

    assert!(fragment.is_member());
    assert!(fragment.to_html().contains("style='color: #0ab4dd'"));
    Ok(())
}

#[tokio::test]
async fn unrelated_membership_renders_disabled_badge() -> Result<()> {
    let tree = setup_tree().await?;
    Fixture::new(&tree.pool)
        .member(
            tree.unrelated,
            tree.person.id,
            tree.member_role,
            GroupMemberStatus::Active,
        )
        .await?;

    let fragment = serving_badge(Some("#ff0000"))
        .render(&tree.pool, &tree.person)
        .await?
        .expect("badge renders");

    assert_eq!(fragment.state, MembershipState::NonMember);
    assert_eq!(
        fragment.to_html(),
        "<div class='badge badge-ingroupoftype badge-id-42' data-toggle='tooltip' \
         data-original-title='Ted is not in a descendant of a Serving Team'>\
         <i class='badge-icon badge-disabled fa fa-sitemap'></i></div>"
    );
    Ok(())
}

#[tokio::test]
async fn inactive_and_pending_memberships_are_ignored() -> Result<()> {
    let tree = setup_tree().await?;
    let fixture = Fixture::new(&tree.pool);
    fixture
        .member(tree.g2, tree.person.id, tree.member_role, GroupMemberStatus::Inactive)
        .await?;
    fixture
        .member(tree.g3, tree.person.id, tree.member_role, GroupMemberStatus::Pending)
        .await?;

    let fragment = serving_badge(None)
        .render(&tree.pool, &tree.person)
        .await?
        .expect("badge renders");

    assert!(!fragment.is_member());
    Ok(())
}

#[tokio::test]
async fn membership_in_inactive_group_is_ignored() -> Result<()> {
    let tree = setup_tree().await?;
    let fixture = Fixture::new(&tree.pool);
    let area = fixture.group_type("Retired Area").await?;
    let role = fixture.role(area, "Member", 0).await?;
    let closed = fixture
        .inactive_group(area, Some(tree.g2), "Saturday 5pm")
        .await?;
    fixture
        .member(closed, tree.person.id, role, GroupMemberStatus::Active)
        .await?;

    let fragment = serving_badge(None)
        .render(&tree.pool, &tree.person)
        .await?
        .expect("badge renders");

    assert!(!fragment.is_member());
    Ok(())
}

#[tokio::test]
async fn active_child_of_inactive_typed_group_still_counts() -> Result<()> {
    let pool = test_helpers::create_test_pool().await?;
    let fixture = Fixture::new(&pool);
    let team = fixture
        .group_type_with_guid(SERVING_TEAM, "Serving Team")
        .await?;
    let role = fixture.role(team, "Member", 0).await?;
    let archived = fixture.inactive_group(team, None, "Archived Team").await?;
    let child = fixture.group(team, Some(archived), "Still Meeting").await?;
    let person = fixture.person("Cindy", "Decker").await?;
    fixture
        .member(child, person.id, role, GroupMemberStatus::Active)
        .await?;

    let fragment = serving_badge(None)
        .render(&pool, &person)
        .await?
        .expect("badge renders");

    assert!(fragment.is_member());
    assert_eq!(fragment.label, "Cindy is in a descendant of a Serving Team");
    Ok(())
}

#[tokio::test]
async fn cyclic_parents_terminate_and_resolve() -> Result<()> {
    let tree = setup_tree().await?;
    let fixture = Fixture::new(&tree.pool);
    fixture.reparent(tree.g1, Some(tree.g3)).await?;
    fixture
        .member(tree.g2, tree.person.id, tree.member_role, GroupMemberStatus::Active)
        .await?;

    let fragment = serving_badge(None)
        .render(&tree.pool, &tree.person)
        .await?
        .expect("badge renders");

    assert!(fragment.is_member());
    Ok(())
}

#[tokio::test]
async fn lowest_role_order_then_lowest_id_wins() -> Result<()> {
    let tree = setup_tree().await?;
    let fixture = Fixture::new(&tree.pool);
    let as_member = fixture
        .member(tree.g2, tree.person.id, tree.member_role, GroupMemberStatus::Active)
        .await?;
    let as_leader = fixture
        .member(tree.g3, tree.person.id, tree.leader_role, GroupMemberStatus::Active)
        .await?;
    fixture
        .member(tree.g1, tree.person.id, tree.leader_role, GroupMemberStatus::Active)
        .await?;

    let groups = [tree.g1, tree.g2, tree.g3];
    let chosen = tree
        .pool
        .first_active_membership(tree.person.id, &groups)
        .await?
        .expect("membership found");
    assert_eq!(chosen.member_id, as_leader);
    assert_eq!(chosen.role_order, 0);

    let only_member_role = tree
        .pool
        .first_active_membership(tree.person.id, &[tree.g2])
        .await?
        .expect("membership found");
    assert_eq!(only_member_role.member_id, as_member);

    assert!(
        tree.pool
            .first_active_membership(tree.person.id, &[])
            .await?
            .is_none()
    );
    Ok(())
}

#[tokio::test]
async fn nickname_with_apostrophe_is_escaped() -> Result<()> {
    let tree = setup_tree().await?;
    let fixture = Fixture::new(&tree.pool);
    let person = fixture.person("D'Andre", "Smith").await?;
    fixture
        .member(tree.g3, person.id, tree.member_role, GroupMemberStatus::Active)
        .await?;

    let html = serving_badge(None)
        .render(&tree.pool, &person)
        .await?
        .expect("badge renders")
        .to_html();

    assert!(html.contains("data-original-title='D&#39;Andre is in a descendant of a Serving Team'"));
    Ok(())
}
