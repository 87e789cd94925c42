use tests::prelude::*;

use pretty_assertions::assert_eq;

#[test]
fn one_model_per_table_with_a_resolvable_column() {
    let catalog = FakeCatalog::new()
        .table("users", &[("id", "integer", false), ("name", "text", false)])
        .table("documents", &[("body", "jsonb", false)])
        .table("tags", &[("id", "integer", false), ("meta", "jsonb", false)]);

    let description = describe(catalog, &TypeMap::default(), DefaultNamer).unwrap();

    assert_eq!(names(&description.models), ["tags", "users"]);
    assert_eq!(
        model(&description.models, "tags").fields,
        vec![Column::new("id", "int")]
    );

    assert_eq!(description.warnings.len(), 2);
    assert!(description.warnings.iter().all(|w| w.is_unmapped_type()));
    assert_eq!(
        description.warnings[0].to_string(),
        "unmapped type `jsonb` (not null) for column `documents.body`"
    );
}

#[test]
fn nullability_selects_the_type_tag() {
    let catalog = FakeCatalog::new().table(
        "items",
        &[
            ("quantity", "integer", true),
            ("count", "integer", false),
            ("due", "date", true),
            ("opens_at", "time with time zone", false),
            ("tags", "ARRAY", true),
        ],
    );

    let description = describe(catalog, &TypeMap::default(), DefaultNamer).unwrap();

    assert_eq!(
        model(&description.models, "items").fields,
        vec![
            Column::new("quantity", "null.Int"),
            Column::new("count", "int"),
            Column::new("due", "null.Time"),
            Column::new("opens_at", "datatypes.Time"),
            Column::new("tags", "pq.Int32Array"),
        ]
    );
}

#[test]
fn type_map_overrides_resolve_more_columns() {
    let mut type_map = TypeMap::default();
    type_map
        .extend_from_json(r#"[{"nullable": false, "data_type": "uuid", "type": "string"}]"#)
        .unwrap();

    let catalog = FakeCatalog::new().table("sessions", &[("id", "uuid", false)]);
    let description = describe(catalog, &type_map, DefaultNamer).unwrap();

    assert_empty!(description.warnings);
    assert_eq!(
        model(&description.models, "sessions").fields,
        vec![Column::new("id", "string")]
    );
}

#[test]
fn query_failure_aborts() {
    let catalog = FakeCatalog::new()
        .table("users", &[("id", "integer", false)])
        .failing("key_constraints");

    let err = assert_err!(describe(catalog, &TypeMap::default(), DefaultNamer));
    assert!(err.is_catalog_query_failed());
}

#[test]
fn queries_run_in_sequence() {
    let mut catalog = FakeCatalog::new().table("users", &[("id", "integer", false)]);
    describe(&mut catalog, &TypeMap::default(), DefaultNamer).unwrap();

    assert_eq!(
        catalog.queries,
        [
            "columns",
            "referential_constraints",
            "key_constraints",
            "relations"
        ]
    );
}
