//! Worked end-to-end scenarios against the public API.

use claim_engine::{Ability, Checker, Claim, ClaimSet, KeySet, Query};

fn set(strings: &[&str]) -> ClaimSet {
    ClaimSet::for_strings_strict(strings.iter().copied()).unwrap()
}

#[test]
fn scenario_1_direct_child_and_descendant() {
    let claim = Claim::parse("read:some.stuff.nested").unwrap();

    assert_eq!(
        claim.direct_descendant(&Query::new("read", Some("what")).unwrap()),
        None
    );
    assert_eq!(
        claim.direct_descendant(&Query::new("read", Some("some")).unwrap()),
        Some("stuff".to_string())
    );
    assert_eq!(
        claim.direct_descendant(&Query::new("read", Some("some.stuff")).unwrap()),
        Some("nested".to_string())
    );
    assert_eq!(
        claim.direct_child(&Query::new("read", Some("some.stuff")).unwrap()),
        Some("nested".to_string())
    );
    assert_eq!(
        claim.direct_child(&Query::new("read", Some("some")).unwrap()),
        None
    );
}

#[test]
fn scenario_2_claim_set_normalises_and_dedupes() {
    let claims = set(&["do:*", "read:some.stuff", "read:some.stuff.*"]);
    assert_eq!(claims.as_json(), serde_json::json!(["do:*", "read:some.stuff"]));
}

#[test]
fn scenario_3_ability_reduction() {
    let ability = Ability::new(
        set(&[
            "do:*",
            "keep:me",
            "wat:*",
            "read:same.resource",
            "read:some.nested.things",
            "read:reverse.is.ok",
        ]),
        set(&[
            "wat:*",
            "read:same.resource",
            "read:some.nested",
            "read:reverse.is.ok.nested",
        ]),
    );
    assert_eq!(
        ability.permitted().as_json(),
        serde_json::json!(["do:*", "keep:me", "read:reverse.is.ok"])
    );
}

#[test]
fn scenario_4_denial_overrides_grant() {
    let ability = Ability::new(set(&["read:clients"]), set(&["read:clients.acmeinc"]));
    assert!(!ability
        .can(&Query::new("read", Some("clients.acmeinc")).unwrap()));
}

#[test]
fn scenario_5_access_to_client_keys() {
    let ability = Ability::new(
        set(&["read:clients.*"]),
        set(&["read:clients.first", "read:clients.second"]),
    );
    assert_eq!(
        ability.access_to_client_keys("read").unwrap(),
        KeySet::all_except_some(["first".to_string(), "second".to_string()])
    );
}

#[test]
fn scenario_6_access_to_project_keys() {
    let ability = Ability::new(
        set(&[
            "read:clients.my-client.projects.project.one-project",
            "read:clients.my-client.projects.project.bad-project",
        ]),
        set(&[
            "read:clients.my-client.projects.project.one-project.people",
            "read:clients.my-client.projects.project.bad-project",
        ]),
    );
    assert_eq!(
        ability.access_to_project_keys("read", "my-client").unwrap(),
        KeySet::some(["one-project".to_string()])
    );
}

#[test]
fn scenario_7_checker_sub_claims_direct_children() {
    let claims: Vec<String> = [
        "read:clients.this-guy.stuff",
        "read:clients.this-guy.wooa",
        "read:clients.this-guy.wooa.and.another",
        "read:clients.this-guy.wat.is.this",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    assert_eq!(
        Checker::sub_claims_direct_children("read:clients.this-guy", &claims, true),
        vec!["stuff".to_string(), "wooa".to_string()]
    );
    assert_eq!(
        Checker::sub_claims_direct_children("read:clients.this-guy", &claims, false),
        vec![
            "stuff".to_string(),
            "wat".to_string(),
            "wooa".to_string()
        ]
    );
}
