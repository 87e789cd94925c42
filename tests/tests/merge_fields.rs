use tests::prelude::*;

use pretty_assertions::assert_eq;

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(name, ty)| (name.to_string(), ty.to_string()))
        .collect()
}

fn blog() -> ModelFile {
    let catalog = FakeCatalog::new()
        .table("users", &[("id", "integer", false), ("name", "text", false)])
        .table(
            "posts",
            &[
                ("id", "integer", false),
                ("title", "text", false),
                ("user_id", "integer", false),
            ],
        )
        .foreign_key("posts", "user_id", "users");

    describe(catalog, &TypeMap::default(), DefaultNamer)
        .unwrap()
        .models
}

#[test]
fn users_and_posts() {
    let file = blog();
    let merger = Merger::new(DefaultNamer);

    let posts = merger.merge(model(&file, "posts")).unwrap();
    assert_eq!(
        field_pairs(&posts),
        pairs(&[
            ("ID", "int"),
            ("Title", "string"),
            ("UserID", "int"),
            ("User", "*User"),
        ])
    );

    let users = merger.merge(model(&file, "users")).unwrap();
    assert_eq!(
        field_pairs(&users),
        pairs(&[("ID", "int"), ("Name", "string"), ("Posts", "[]*Post")])
    );
}

#[test]
fn merge_after_reload_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model_config.json");
    blog().save(&path).unwrap();

    let merger = Merger::new(DefaultNamer);
    let first = ModelFile::load(&path).unwrap();
    let second = ModelFile::load(&path).unwrap();

    for (a, b) in first.models().iter().zip(second.models()) {
        assert_eq!(merger.merge(a).unwrap(), merger.merge(b).unwrap());
    }
}

#[test]
fn merged_names_are_unique_across_a_larger_schema() {
    let catalog = FakeCatalog::new()
        .table("users", &[("id", "integer", false), ("team_id", "integer", true)])
        .table("teams", &[("id", "integer", false), ("user", "text", true)])
        .table(
            "posts",
            &[
                ("id", "integer", false),
                ("user_id", "integer", false),
                ("users", "ARRAY", true),
            ],
        )
        .table(
            "comments",
            &[
                ("id", "integer", false),
                ("post_id", "integer", false),
                ("user_id", "integer", false),
            ],
        )
        .foreign_key("users", "team_id", "teams")
        .foreign_key("posts", "user_id", "users")
        .foreign_key("comments", "post_id", "posts")
        .foreign_key("comments", "user_id", "users");

    let file = describe(catalog, &TypeMap::default(), DefaultNamer)
        .unwrap()
        .models;
    let merger = Merger::new(DefaultNamer);

    for model in file.models() {
        let names: Vec<_> = merger
            .merge(model)
            .unwrap()
            .into_iter()
            .map(|field| field.name)
            .collect();
        assert_unique!(names);
    }

    // `posts.users` already covers the belongs-to association.
    let posts = merger.merge(model(&file, "posts")).unwrap();
    assert!(!posts.iter().any(|f| f.name == "User"));
}

#[test]
fn hand_edited_association_kind_is_respected() {
    let mut models = blog().into_models();
    let users = models.iter_mut().find(|m| m.name == "users").unwrap();
    users.associations[0].kind = AssociationKind::HasOne;

    let fields = Merger::new(DefaultNamer).merge(users).unwrap();
    assert_eq!(fields.last().unwrap().ty.type_expr(), "*Post");
    assert_eq!(fields.last().unwrap().name, "Post");
}
