//! Catalog queries.
//!
//! `information_schema` columns are domain types, which the client cannot
//! decode into `String`, so every selected column is cast to `text`.

pub(crate) const COLUMNS: &str = r#"
    SELECT T.table_name::text, C.column_name::text, C.is_nullable::text, C.data_type::text
    FROM information_schema.tables AS T
    LEFT JOIN information_schema.columns AS C
        ON T.table_schema = C.table_schema AND T.table_name = C.table_name
    WHERE T.table_schema::text = $1 AND T.table_type = 'BASE TABLE'
    ORDER BY T.table_name, C.ordinal_position
"#;

pub(crate) const REFERENTIAL_CONSTRAINTS: &str = r#"
    SELECT R.constraint_name::text, K.table_name::text
    FROM information_schema.referential_constraints AS R
    LEFT JOIN information_schema.key_column_usage AS K
        ON R.unique_constraint_schema = K.constraint_schema
        AND R.unique_constraint_name = K.constraint_name
    WHERE R.constraint_schema::text = $1
    ORDER BY 1, 2
"#;

pub(crate) const KEY_CONSTRAINTS: &str = r#"
    SELECT DISTINCT
        T.table_name::text,
        K.column_name::text,
        T.constraint_name::text,
        T.constraint_type::text
    FROM information_schema.key_column_usage AS K
    LEFT JOIN information_schema.table_constraints AS T
        ON T.constraint_schema = K.constraint_schema
        AND T.constraint_name = K.constraint_name
    WHERE K.constraint_schema::text = $1 AND T.constraint_type <> 'PRIMARY KEY'
    ORDER BY 1, 2, 3, 4
"#;

pub(crate) const RELATIONS: &str = r#"
    SELECT DISTINCT
        C.table_name::text AS parent,
        K.table_name::text AS child,
        K.column_name::text AS child_foreign_key,
        T.constraint_type::text
    FROM information_schema.constraint_column_usage AS C
    LEFT JOIN information_schema.key_column_usage AS K
        ON C.constraint_schema = K.constraint_schema
        AND C.constraint_name = K.constraint_name
    LEFT JOIN information_schema.table_constraints AS T
        ON C.constraint_schema = T.constraint_schema
        AND C.constraint_name = T.constraint_name
    WHERE C.table_schema::text = $1 AND C.table_name <> K.table_name
    ORDER BY 1, 2, 3, 4
"#;
