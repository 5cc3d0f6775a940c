use bookshelf::{
    algo::{
        search::binary_search,
        sort::{mergesort, quicksort, sort_books},
    },
    book::Book,
    error::CatalogError,
    library::Library,
    types::{BookStatus, SortAlgorithm, SortKey},
};

fn seeded() -> Library {
    let mut lib = Library::new();
    for (t, a) in [
        ("Neuromancer", "Gibson"),
        ("Dune", "Herbert"),
        ("Solaris", "Lem"),
        ("Anathem", "Stephenson"),
        ("Hyperion", "Simmons"),
        ("Dune", "Anderson"),
    ] {
        lib.add_book(t, a).unwrap();
    }
    lib
}

fn titles(books: &[Book]) -> Vec<&str> {
    books.iter().map(|b| b.title.as_str()).collect()
}

#[test]
fn unsorted_listing_keeps_insertion_order() {
    let lib = seeded();
    let books = lib.list_sorted(None, SortAlgorithm::default()).unwrap();
    assert_eq!(books.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn both_algorithms_order_by_title() {
    let lib = seeded();
    let expected = vec!["Anathem", "Dune", "Dune", "Hyperion", "Neuromancer", "Solaris"];
    for algo in [SortAlgorithm::Quicksort, SortAlgorithm::Mergesort] {
        let books = lib.list_sorted(Some(SortKey::Title), algo).unwrap();
        assert_eq!(titles(&books), expected);
    }
}

#[test]
fn mergesort_by_title_keeps_duplicate_titles_in_insertion_order() {
    let lib = seeded();
    let books = lib
        .list_sorted(Some(SortKey::Title), SortAlgorithm::Mergesort)
        .unwrap();
    let dunes: Vec<_> = books.iter().filter(|b| b.title == "Dune").map(|b| b.id).collect();
    assert_eq!(dunes, vec![2, 6]);
}

#[test]
fn sorting_never_touches_the_catalog() {
    let lib = seeded();
    let before = lib.books().to_vec();
    lib.list_sorted_by_name("author", "quicksort").unwrap();
    lib.list_sorted_by_name("title", "mergesort").unwrap();
    assert_eq!(lib.books(), before.as_slice());
}

#[test]
fn sort_by_status_puts_available_first() {
    let mut lib = seeded();
    lib.checkout(1).unwrap();
    lib.checkout(4).unwrap();
    let books = lib
        .list_sorted(Some(SortKey::Status), SortAlgorithm::Mergesort)
        .unwrap();
    let statuses: Vec<_> = books.iter().map(|b| b.status).collect();
    assert!(statuses.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(books.last().unwrap().status, BookStatus::CheckedOut);
    assert_eq!(books[0].id, 2);
}

#[test]
fn unknown_field_or_algorithm_is_invalid_key() {
    let lib = seeded();
    assert!(matches!(
        lib.list_sorted_by_name("isbn", "quicksort"),
        Err(CatalogError::InvalidKey(_))
    ));
    assert!(matches!(
        lib.list_sorted_by_name("title", "heapsort"),
        Err(CatalogError::InvalidKey(_))
    ));
}

#[test]
fn find_by_title_hits_every_present_title() {
    let lib = seeded();
    for book in lib.books() {
        let hit = lib.find_by_title(&book.title).unwrap();
        assert_eq!(hit.title, book.title);
    }
    let hyperion = lib.find_by_title("Hyperion").unwrap();
    assert_eq!((hyperion.id, hyperion.author.as_str()), (5, "Simmons"));

    assert!(lib.find_by_title("Foundation").unwrap_err().is_not_found());
    assert!(matches!(lib.find_by_title(" "), Err(CatalogError::Validation(_))));
    assert!(Library::new().find_by_title("Dune").unwrap_err().is_not_found());
}

#[test]
fn generic_sort_then_search_by_author() {
    let lib = seeded();
    let mut snapshot = lib.books().to_vec();
    quicksort(&mut snapshot, |b| Ok(b.author.clone())).unwrap();
    let hit = binary_search(&snapshot, "Lem", |b| Ok(b.author.as_str())).unwrap();
    assert_eq!(hit.title, "Solaris");

    sort_books(&mut snapshot, SortKey::Id, SortAlgorithm::Quicksort).unwrap();
    let hit = binary_search(&snapshot, &4u64, |b| Ok(b.id)).unwrap();
    assert_eq!(hit.title, "Anathem");
}

#[test]
fn selector_error_aborts_without_reordering() {
    let lib = seeded();
    let mut snapshot = lib.books().to_vec();
    let before = snapshot.clone();
    let by_short_title = |b: &Book| {
        if b.title.len() > 8 {
            Err(CatalogError::InvalidKey(format!("title too long for book {}", b.id)))
        } else {
            Ok(b.title.clone())
        }
    };

    assert!(matches!(quicksort(&mut snapshot, by_short_title), Err(CatalogError::InvalidKey(_))));
    assert_eq!(snapshot, before);
    assert!(matches!(mergesort(&mut snapshot, by_short_title), Err(CatalogError::InvalidKey(_))));
    assert_eq!(snapshot, before);
}
