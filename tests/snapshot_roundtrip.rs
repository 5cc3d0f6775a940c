use bookshelf::{
    config::LibraryConfig,
    error::CatalogError,
    library::{Library, LibrarySnapshot},
    types::BookStatus,
};

#[test]
fn snapshot_survives_json_and_rebuilds_index() {
    let mut lib = Library::new();
    for i in 1..=12 {
        lib.add_book(format!("Book {i}"), "Anon").unwrap();
    }
    lib.checkout(3).unwrap();
    lib.delete_book(5).unwrap();

    let json = serde_json::to_string(&lib.export_snapshot()).unwrap();
    let snapshot: LibrarySnapshot = serde_json::from_str(&json).unwrap();
    let mut restored = Library::from_snapshot(snapshot, LibraryConfig::default()).unwrap();

    assert_eq!(restored.books(), lib.books());
    assert_eq!(restored.index().len(), 11);
    assert_eq!(restored.find_by_id(3).unwrap().status, BookStatus::CheckedOut);
    assert!(restored.find_by_id(5).unwrap_err().is_not_found());
    assert_eq!(restored.find_by_id(12).unwrap().title, "Book 12");
    assert_eq!(restored.pop_transaction().unwrap(), "Checked out book with ID 3");
    assert_eq!(restored.add_book("Fresh", "Anon").unwrap().id, 13);
}

#[test]
fn snapshot_with_zero_duplicate_or_stale_ids_is_rejected() {
    let mut lib = Library::new();
    lib.add_book("A", "x").unwrap();
    lib.add_book("B", "y").unwrap();

    let mut dup = lib.export_snapshot();
    dup.books[1].id = 1;
    assert!(matches!(
        Library::from_snapshot(dup, LibraryConfig::default()),
        Err(CatalogError::Validation(_))
    ));

    let mut stale = lib.export_snapshot();
    stale.next_id = 2;
    assert!(matches!(
        Library::from_snapshot(stale, LibraryConfig::default()),
        Err(CatalogError::Validation(_))
    ));

    let mut zero = lib.export_snapshot();
    zero.books[0].id = 0;
    assert!(matches!(
        Library::from_snapshot(zero, LibraryConfig::default()),
        Err(CatalogError::Validation(_))
    ));

    let mut blank = lib.export_snapshot();
    blank.transactions.push(String::new());
    assert!(Library::from_snapshot(blank, LibraryConfig::default()).is_err());
}

#[test]
fn exhausted_id_space_fails_without_reusing_ids() {
    let at_max = LibrarySnapshot {
        next_id: u64::MAX,
        books: vec![],
        transactions: vec![],
    };
    assert!(matches!(
        Library::from_snapshot(at_max, LibraryConfig::default()),
        Err(CatalogError::Validation(_))
    ));

    let near_max = LibrarySnapshot {
        next_id: u64::MAX - 1,
        books: vec![],
        transactions: vec![],
    };
    let mut lib = Library::from_snapshot(near_max, LibraryConfig::default()).unwrap();
    assert_eq!(lib.add_book("Last", "Anon").unwrap().id, u64::MAX - 1);

    for _ in 0..2 {
        assert!(matches!(
            lib.add_book("Overflow", "Anon"),
            Err(CatalogError::Validation(_))
        ));
    }
    assert_eq!(lib.len(), 1);
    assert_eq!(lib.export_snapshot().next_id, u64::MAX);
    assert!(lib.find_by_id(1).unwrap_err().is_not_found());
}

#[test]
fn failed_add_does_not_advance_the_counter() {
    let mut lib = Library::new();
    assert!(lib.add_book("", "Anon").is_err());
    assert_eq!(lib.export_snapshot().next_id, 1);
    assert_eq!(lib.add_book("First", "Anon").unwrap().id, 1);
}

#[test]
fn config_deserializes_with_defaults() {
    let cfg: LibraryConfig = serde_json::from_str(r#"{"max_load_factor": 0.75}"#).unwrap();
    assert_eq!(cfg.bucket_count, 10);
    assert_eq!(cfg.max_load_factor, Some(0.75));
}

#[test]
fn load_factor_policy_grows_the_index() {
    let cfg = LibraryConfig {
        bucket_count: 2,
        max_load_factor: Some(1.0),
    };
    let mut lib = Library::with_config(cfg).unwrap();
    for i in 1..=20 {
        lib.add_book(format!("Book {i}"), "Anon").unwrap();
    }

    assert!(lib.index().bucket_count() >= 20);
    assert!(lib.index().load_factor() <= 1.0);
    for id in 1..=20 {
        assert_eq!(lib.find_by_id(id).unwrap().id, id);
    }
}

#[test]
fn fixed_index_never_resizes() {
    let mut lib = Library::new();
    for i in 1..=100 {
        lib.add_book(format!("Book {i}"), "Anon").unwrap();
    }
    assert_eq!(lib.index().bucket_count(), 10);
    assert_eq!(lib.index().bucket_len(0), 10);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = LibraryConfig {
        bucket_count: 0,
        max_load_factor: None,
    };
    assert!(matches!(Library::with_config(cfg), Err(CatalogError::Validation(_))));
}
