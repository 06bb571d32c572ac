//! Tests for positional record building.

use colseq_table::{RecordBuilder, TableError};

fn builder() -> RecordBuilder {
    RecordBuilder::new(["foo", "bar", "baz"]).unwrap()
}

#[test]
fn values_land_in_schema_order() {
    let mut creator = builder();
    creator.set("foo", "1").unwrap();
    creator.set("baz", "2").unwrap();
    creator.set("bar", "3").unwrap();
    assert_eq!(
        creator.record(),
        [
            Some("1".to_string()),
            Some("3".to_string()),
            Some("2".to_string())
        ]
    );
}

#[test]
fn reset_clears_values() {
    let mut creator = builder();
    creator.set("bar", "x").unwrap();
    creator.reset();
    creator.set("foo", "FOO").unwrap();
    assert_eq!(creator.record(), [Some("FOO".to_string()), None, None]);
}

#[test]
fn get_returns_stored_value() {
    let mut creator = builder();
    creator.set("bar", "value").unwrap();
    assert_eq!(creator.get("bar").unwrap(), Some("value"));
    assert_eq!(creator.get("baz").unwrap(), None);
}

#[test]
fn mapped_record_pairs_columns() {
    let mut creator = builder();
    creator.set("baz", "z").unwrap();
    assert_eq!(
        creator.mapped_record(),
        vec![("foo", None), ("bar", None), ("baz", Some("z"))]
    );
    assert_eq!(creator.columns(), ["foo", "bar", "baz"]);
}

#[test]
fn unknown_column_is_rejected() {
    let mut creator = builder();
    assert_eq!(
        creator.set("qux", "1").unwrap_err(),
        TableError::UnknownColumn {
            column: "qux".to_string()
        }
    );
    assert!(matches!(
        creator.get("qux"),
        Err(TableError::UnknownColumn { .. })
    ));
}

#[test]
fn duplicate_schema_column_is_rejected() {
    assert!(matches!(
        RecordBuilder::new(["a", "b", "a"]),
        Err(TableError::DuplicateColumn { column }) if column == "a"
    ));
}
