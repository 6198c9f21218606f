use super::*;

#[test]
fn bundled_seed_parses_and_is_non_empty() {
    let heroes = bundled_catalog().expect("bundled seed parses");
    assert!(!heroes.is_empty());
    assert!(heroes.iter().all(|h| !h.name.is_empty()));
}

#[test]
fn bundled_seed_ids_are_unique() {
    let heroes = bundled_catalog().expect("bundled seed parses");
    let mut ids: Vec<i64> = heroes.iter().map(|h| h.id.0).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), heroes.len());
}

#[test]
fn entries_keep_document_order() {
    let heroes = catalog_from_str(
        r#"[
            { "id": 3, "name": "Flash", "id-api": 263 },
            { "id": 1, "name": "Batman", "id-api": 70 }
        ]"#,
    )
    .expect("seed parses");
    let ids: Vec<i64> = heroes.iter().map(|h| h.id.0).collect();
    assert_eq!(ids, [3, 1]);
}

#[test]
fn missing_fields_default_instead_of_failing() {
    let heroes = catalog_from_str(r#"[ { "name": "Nameless" }, {} ]"#).expect("seed parses");
    assert_eq!(heroes.len(), 2);

    assert_eq!(heroes[0].id, HeroId(0));
    assert_eq!(heroes[0].api_id, 0);
    assert!(heroes[0].slug.is_none());

    assert_eq!(heroes[1].name, "");
}

#[test]
fn external_api_id_round_trips_from_hyphenated_key() {
    let heroes =
        catalog_from_str(r#"[ { "id": 2, "name": "Superman", "id-api": 644, "slug": "644-superman" } ]"#)
            .expect("seed parses");
    assert_eq!(heroes[0].api_id, 644);
    assert_eq!(heroes[0].slug.as_deref(), Some("644-superman"));
}

#[test]
fn invalid_json_is_a_seed_error() {
    let err = catalog_from_str("not json").expect_err("malformed seed must fail");
    assert!(matches!(err, CatalogError::Seed { .. }));
}

#[test]
fn missing_seed_file_is_a_seed_file_error() {
    let err = catalog_from_path(std::path::Path::new("/nonexistent/heroes.json"))
        .expect_err("missing file must fail");
    assert!(matches!(err, CatalogError::SeedFile { .. }));
}
