use tests::prelude::*;

use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn kinds(file: &ModelFile, table: &str) -> BTreeSet<(String, AssociationKind)> {
    model(file, table)
        .associations
        .iter()
        .map(|a| (a.name.clone(), a.kind))
        .collect()
}

fn blog() -> FakeCatalog {
    FakeCatalog::new()
        .table("users", &[("id", "integer", false), ("name", "text", false)])
        .table(
            "posts",
            &[
                ("id", "integer", false),
                ("title", "text", false),
                ("user_id", "integer", false),
            ],
        )
        .table(
            "profiles",
            &[("id", "integer", false), ("user_id", "integer", false)],
        )
        .foreign_key("posts", "user_id", "users")
        .unique_foreign_key("profiles", "user_id", "users")
}

#[test]
fn foreign_keys_classify_by_direction() {
    let description = describe(blog(), &TypeMap::default(), DefaultNamer).unwrap();
    let file = &description.models;

    assert_eq!(
        kinds(file, "posts"),
        BTreeSet::from([("users".to_string(), AssociationKind::BelongsTo)])
    );
    assert_eq!(
        kinds(file, "profiles"),
        BTreeSet::from([("users".to_string(), AssociationKind::BelongsTo)])
    );
    assert_eq!(
        kinds(file, "users"),
        BTreeSet::from([
            ("posts".to_string(), AssociationKind::HasMany),
            ("profiles".to_string(), AssociationKind::HasOne),
        ])
    );
}

#[test]
fn two_foreign_keys_to_the_same_parent_collapse() {
    let catalog = FakeCatalog::new()
        .table("users", &[("id", "integer", false)])
        .table(
            "articles",
            &[
                ("id", "integer", false),
                ("author_id", "integer", false),
                ("editor_id", "integer", true),
            ],
        )
        .foreign_key("articles", "author_id", "users")
        .foreign_key("articles", "editor_id", "users");

    let description = describe(catalog, &TypeMap::default(), DefaultNamer).unwrap();
    let articles = model(&description.models, "articles");

    assert_eq!(articles.associations, vec![Association::belongs_to("users")]);
    assert_eq!(
        kinds(&description.models, "users"),
        BTreeSet::from([("articles".to_string(), AssociationKind::HasMany)])
    );
}

#[test]
fn classification_ignores_row_order() {
    let forward = describe(blog(), &TypeMap::default(), DefaultNamer).unwrap();
    let reversed = describe(blog().reversed(), &TypeMap::default(), DefaultNamer).unwrap();

    for table in ["users", "posts", "profiles"] {
        assert_eq!(
            kinds(&forward.models, table),
            kinds(&reversed.models, table),
            "table={table}"
        );
    }
}

#[test]
fn parent_column_named_like_child_suppresses_relation() {
    let catalog = FakeCatalog::new()
        .table(
            "orders",
            &[("id", "integer", false), ("invoice", "text", true)],
        )
        .table(
            "invoices",
            &[("id", "integer", false), ("order_id", "integer", false)],
        )
        .foreign_key("invoices", "order_id", "orders");

    let description = describe(catalog, &TypeMap::default(), DefaultNamer).unwrap();

    assert_empty!(model(&description.models, "orders").associations);
    assert_eq!(
        model(&description.models, "invoices").associations,
        vec![Association::belongs_to("orders")]
    );
}

#[test]
fn self_references_yield_belongs_to_only() {
    let catalog = FakeCatalog::new()
        .table(
            "categories",
            &[("id", "integer", false), ("parent_id", "integer", true)],
        )
        .foreign_key("categories", "parent_id", "categories");

    let description = describe(catalog, &TypeMap::default(), DefaultNamer).unwrap();

    assert_eq!(
        model(&description.models, "categories").associations,
        vec![Association::belongs_to("categories")]
    );
}

#[test]
fn unmapped_parent_column_still_suppresses_relation() {
    let catalog = FakeCatalog::new()
        .table(
            "orders",
            &[("id", "integer", false), ("invoice", "jsonb", false)],
        )
        .table(
            "invoices",
            &[("id", "integer", false), ("order_id", "integer", false)],
        )
        .foreign_key("invoices", "order_id", "orders");

    let description = describe(catalog, &TypeMap::default(), DefaultNamer).unwrap();
    let orders = model(&description.models, "orders");

    assert_eq!(orders.fields, vec![Column::new("id", "int")]);
    assert_empty!(orders.associations);
    assert_eq!(description.warnings.len(), 1);
}
