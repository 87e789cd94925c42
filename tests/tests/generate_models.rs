use tests::prelude::*;

use pretty_assertions::assert_eq;
use schemagen_cli::{config_to_model, schema_to_config, Config};

fn shop() -> FakeCatalog {
    FakeCatalog::new()
        .table(
            "customers",
            &[
                ("id", "integer", false),
                ("name", "text", false),
                ("created_at", "timestamp with time zone", false),
            ],
        )
        .table(
            "orders",
            &[
                ("id", "integer", false),
                ("customer_id", "integer", false),
                ("note", "text", true),
                ("total", "numeric", false),
            ],
        )
        .table(
            "loyalty_cards",
            &[("id", "integer", false), ("customer_id", "integer", false)],
        )
        .foreign_key("orders", "customer_id", "customers")
        .unique_foreign_key("loyalty_cards", "customer_id", "customers")
}

fn config(dir: &tempfile::TempDir) -> Config {
    Config::new()
        .model_file(dir.path().join("model_config.json"))
        .codegen(schemagen_codegen::Config::new().output_dir(dir.path().join("model")))
}

#[test]
fn schema_to_declarations() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);

    schema_to_config(shop(), &TypeMap::default(), &config).unwrap();
    let report = config_to_model(&config).unwrap();

    assert!(report.is_success());
    assert_eq!(report.written.len(), 3);

    let customer = std::fs::read_to_string(dir.path().join("model/customer.go")).unwrap();
    assert_eq!(
        customer,
        "package model

import \"time\"

type Customer struct {
\tID          int
\tName        string
\tCreatedAt   time.Time
\tOrders      []*Order
\tLoyaltyCard *LoyaltyCard
}
"
    );

    let order = std::fs::read_to_string(dir.path().join("model/order.go")).unwrap();
    assert_eq!(
        order,
        "package model

import \"gopkg.in/guregu/null.v4\"

type Order struct {
\tID         int
\tCustomerID int
\tNote       null.String
\tTotal      float64
\tCustomer   *Customer
}
"
    );

    assert!(dir.path().join("model/loyalty_card.go").exists());
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    schema_to_config(shop(), &TypeMap::default(), &config).unwrap();

    config_to_model(&config).unwrap();
    let first = std::fs::read_to_string(dir.path().join("model/customer.go")).unwrap();

    config_to_model(&config).unwrap();
    let second = std::fs::read_to_string(dir.path().join("model/customer.go")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn unavailable_catalog_leaves_description_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);
    std::fs::write(&config.model_file, "[]\n").unwrap();

    let err = schema_to_config(shop().unavailable(), &TypeMap::default(), &config).unwrap_err();
    let err = err.downcast_ref::<schemagen_core::Error>().unwrap();
    assert!(err.is_catalog_unavailable());

    assert_eq!(std::fs::read_to_string(&config.model_file).unwrap(), "[]\n");
}

#[test]
fn failed_query_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);

    let err = schema_to_config(shop().failing("relations"), &TypeMap::default(), &config)
        .unwrap_err();
    assert!(err
        .downcast_ref::<schemagen_core::Error>()
        .unwrap()
        .is_catalog_query_failed());

    assert!(!config.model_file.exists());
}

#[test]
fn one_broken_model_does_not_block_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);

    let file: ModelFile = r#"[
        {"Name": "users", "Fields": [{"name": "id", "type": "int"}, {"name": "ID", "type": "int"}]},
        {"Name": "teams", "Fields": [{"name": "id", "type": "int"}]},
        {"Name": "", "Fields": [{"name": "id", "type": "int"}]}
    ]"#
    .parse()
    .unwrap();
    file.save(&config.model_file).unwrap();

    let report = config_to_model(&config).unwrap();

    assert_eq!(report.written.len(), 1);
    assert_eq!(report.written[0].type_name, "Team");

    let failed: Vec<_> = report.failed.iter().map(|f| f.model.as_str()).collect();
    assert_eq!(failed, ["users", ""]);
    assert!(report.failed[0].error.is_name_collision_unresolved());
    assert!(report.failed[1].error.is_render());
}
