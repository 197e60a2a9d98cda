use chrono::Utc;
use library_inventory::application::library::{
    ErrorKind, LibraryApplicationError, ServiceDependencies, add_book, borrow_book,
    list_available_books, list_borrowed_books, member_exists, register_member, remove_book,
    return_book, seed_library,
};
use library_inventory::config::SeedData;
use library_inventory::domain::commands::*;
use library_inventory::domain::value_objects::*;

mod common;

// ============================================================================
// テスト用ヘルパー
// ============================================================================

async fn borrow(
    deps: &ServiceDependencies,
    book: i64,
    member: i64,
) -> Result<(), LibraryApplicationError> {
    borrow_book(
        deps,
        BorrowBook {
            book_id: BookId::new(book),
            member_id: MemberId::new(member),
            borrowed_at: Utc::now(),
        },
    )
    .await
    .map(|_| ())
}

async fn give_back(
    deps: &ServiceDependencies,
    book: i64,
    member: i64,
) -> Result<(), LibraryApplicationError> {
    return_book(
        deps,
        ReturnBook {
            book_id: BookId::new(book),
            member_id: MemberId::new(member),
            returned_at: Utc::now(),
        },
    )
    .await
    .map(|_| ())
}

async fn remove(deps: &ServiceDependencies, book: i64) -> Result<(), LibraryApplicationError> {
    remove_book(
        deps,
        RemoveBook {
            book_id: BookId::new(book),
            removed_at: Utc::now(),
        },
    )
    .await
    .map(|_| ())
}

async fn available_ids(deps: &ServiceDependencies) -> Vec<i64> {
    list_available_books(deps)
        .await
        .unwrap()
        .iter()
        .map(|b| b.book_id.value())
        .collect()
}

// ============================================================================
// 書籍の登録・除籍
// ============================================================================

#[tokio::test]
async fn test_add_book_defaults_to_available() {
    let deps = common::empty_deps();

    let event = add_book(
        &deps,
        AddBook {
            book_id: BookId::new(1),
            title: "Rust in Action".to_string(),
            author: "Tim McNamara".to_string(),
            status: None,
            added_at: Utc::now(),
        },
    )
    .await
    .unwrap();

    assert_eq!(event.status, BookStatus::Available);
    assert_eq!(available_ids(&deps).await, vec![1]);
}

#[tokio::test]
async fn test_add_book_with_borrowed_status_is_not_listed() {
    let deps = common::empty_deps();

    add_book(
        &deps,
        AddBook {
            book_id: BookId::new(1),
            title: "Rust in Action".to_string(),
            author: "Tim McNamara".to_string(),
            status: Some(BookStatus::Borrowed),
            added_at: Utc::now(),
        },
    )
    .await
    .unwrap();

    assert!(available_ids(&deps).await.is_empty());
}

#[tokio::test]
async fn test_remove_book() {
    let deps = common::seeded_deps().await;

    remove(&deps, 101).await.unwrap();
    assert_eq!(available_ids(&deps).await, vec![102, 103]);
}

#[tokio::test]
async fn test_remove_missing_book_is_not_found() {
    let deps = common::seeded_deps().await;

    let err = remove(&deps, 999).await.unwrap_err();
    assert!(matches!(err, LibraryApplicationError::BookNotFound(id) if id == BookId::new(999)));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_remove_borrowed_book_is_conflict() {
    let deps = common::seeded_deps().await;
    borrow(&deps, 101, 1).await.unwrap();

    let err = remove(&deps, 101).await.unwrap_err();
    assert!(matches!(
        err,
        LibraryApplicationError::BookCurrentlyBorrowed(_)
    ));
    assert_eq!(err.kind(), ErrorKind::Conflict);

    // 貸出は継続している
    let borrowed = list_borrowed_books(&deps, MemberId::new(1)).await.unwrap();
    assert_eq!(borrowed.len(), 1);
}

#[tokio::test]
async fn test_removed_book_cannot_be_borrowed() {
    let deps = common::seeded_deps().await;
    remove(&deps, 102).await.unwrap();

    let err = borrow(&deps, 102, 1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(matches!(err, LibraryApplicationError::BookNotFound(_)));
}

// ============================================================================
// 貸出・返却
// ============================================================================

#[tokio::test]
async fn test_borrow_book_success() {
    let deps = common::seeded_deps().await;

    borrow(&deps, 101, 1).await.unwrap();

    let borrowed = list_borrowed_books(&deps, MemberId::new(1)).await.unwrap();
    assert_eq!(borrowed.len(), 1);
    assert_eq!(borrowed[0].book_id, BookId::new(101));
    assert_eq!(borrowed[0].title, "The Go Programming Language");
    assert_eq!(borrowed[0].status, BookStatus::Borrowed);

    assert_eq!(available_ids(&deps).await, vec![102, 103]);
}

#[tokio::test]
async fn test_borrow_already_borrowed_is_conflict() {
    let deps = common::seeded_deps().await;
    borrow(&deps, 101, 1).await.unwrap();

    let err = borrow(&deps, 101, 2).await.unwrap_err();
    assert!(matches!(
        err,
        LibraryApplicationError::BookAlreadyBorrowed(_)
    ));
    assert_eq!(err.kind(), ErrorKind::Conflict);

    // 同じ会員でも再貸出は不可
    let err = borrow(&deps, 101, 1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    let borrowed = list_borrowed_books(&deps, MemberId::new(1)).await.unwrap();
    assert_eq!(borrowed.len(), 1);
}

#[tokio::test]
async fn test_borrow_unknown_member_is_not_found() {
    let deps = common::seeded_deps().await;

    let err = borrow(&deps, 101, 42).await.unwrap_err();
    assert!(matches!(err, LibraryApplicationError::MemberNotFound(id) if id == MemberId::new(42)));
    assert_eq!(err.to_string(), "member with id 42 not found");

    // 書籍は貸出可能なまま
    assert_eq!(available_ids(&deps).await, vec![101, 102, 103]);
}

#[tokio::test]
async fn test_borrow_then_return_restores_availability() {
    let deps = common::seeded_deps().await;

    borrow(&deps, 103, 2).await.unwrap();
    give_back(&deps, 103, 2).await.unwrap();

    assert_eq!(available_ids(&deps).await, vec![101, 102, 103]);
    assert!(
        list_borrowed_books(&deps, MemberId::new(2))
            .await
            .unwrap()
            .is_empty()
    );

    // 返却後は再び貸し出せる
    borrow(&deps, 103, 1).await.unwrap();
}

#[tokio::test]
async fn test_return_book_not_borrowed_by_member() {
    let deps = common::seeded_deps().await;
    borrow(&deps, 101, 1).await.unwrap();

    let err = give_back(&deps, 101, 2).await.unwrap_err();
    assert!(matches!(
        err,
        LibraryApplicationError::BookNotBorrowedByMember { .. }
    ));
    assert_eq!(err.to_string(), "this member did not borrow this book");

    // 誰も借りていない書籍も同様
    let err = give_back(&deps, 102, 1).await.unwrap_err();
    assert!(matches!(
        err,
        LibraryApplicationError::BookNotBorrowedByMember { .. }
    ));

    assert_eq!(available_ids(&deps).await, vec![102, 103]);
}

#[tokio::test]
async fn test_return_missing_book_or_member() {
    let deps = common::seeded_deps().await;

    let err = give_back(&deps, 999, 1).await.unwrap_err();
    assert!(matches!(err, LibraryApplicationError::BookNotFound(_)));

    let err = give_back(&deps, 101, 42).await.unwrap_err();
    assert!(matches!(err, LibraryApplicationError::MemberNotFound(_)));
}

#[tokio::test]
async fn test_borrowed_books_keep_borrow_order() {
    let deps = common::seeded_deps().await;

    borrow(&deps, 103, 1).await.unwrap();
    borrow(&deps, 101, 1).await.unwrap();
    borrow(&deps, 102, 1).await.unwrap();
    give_back(&deps, 101, 1).await.unwrap();

    let ids: Vec<_> = list_borrowed_books(&deps, MemberId::new(1))
        .await
        .unwrap()
        .iter()
        .map(|b| b.book_id.value())
        .collect();
    assert_eq!(ids, vec![103, 102]);
}

#[tokio::test]
async fn test_list_borrowed_books_unknown_member() {
    let deps = common::seeded_deps().await;

    let err = list_borrowed_books(&deps, MemberId::new(99))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_available_books_never_include_borrowed() {
    let deps = common::seeded_deps().await;

    borrow(&deps, 101, 1).await.unwrap();
    borrow(&deps, 103, 2).await.unwrap();

    let books = list_available_books(&deps).await.unwrap();
    assert!(books.iter().all(|b| b.status == BookStatus::Available));
    assert_eq!(available_ids(&deps).await, vec![102]);
}

// ============================================================================
// 会員・初期データ
// ============================================================================

#[tokio::test]
async fn test_register_member_then_borrow() {
    let deps = common::seeded_deps().await;
    assert!(!member_exists(&deps, MemberId::new(3)).await.unwrap());

    register_member(
        &deps,
        RegisterMember {
            member_id: MemberId::new(3),
            name: "Carol".to_string(),
            registered_at: Utc::now(),
        },
    )
    .await
    .unwrap();

    assert!(member_exists(&deps, MemberId::new(3)).await.unwrap());
    borrow(&deps, 102, 3).await.unwrap();
}

#[tokio::test]
async fn test_seed_from_json() {
    let deps = common::empty_deps();
    let seed = SeedData::from_json(
        r#"{
            "members": [{"id": 10, "name": "Dave"}],
            "books": [
                {"id": 2, "title": "B", "author": "Y"},
                {"id": 1, "title": "A", "author": "X"}
            ]
        }"#,
    )
    .unwrap();

    seed_library(&deps, &seed).await.unwrap();

    assert!(member_exists(&deps, MemberId::new(10)).await.unwrap());
    assert_eq!(available_ids(&deps).await, vec![1, 2]);
}

// ============================================================================
// 排他制御
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_borrows_allow_exactly_one() {
    let deps = common::empty_deps();
    seed_library(&deps, &SeedData::default()).await.unwrap();
    for id in 3..=20 {
        register_member(
            &deps,
            RegisterMember {
                member_id: MemberId::new(id),
                name: format!("Member {}", id),
                registered_at: Utc::now(),
            },
        )
        .await
        .unwrap();
    }

    let mut handles = Vec::new();
    for member in 1..=20 {
        let deps = deps.clone();
        let handle = tokio::spawn(async move { borrow(&deps, 101, member).await });
        handles.push(handle);
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => successes += 1,
            Err(e) => assert_eq!(e.kind(), ErrorKind::Conflict),
        }
    }
    assert_eq!(successes, 1);

    // 貸出記録はちょうど1件
    let mut total = 0;
    for member in 1..=20 {
        total += list_borrowed_books(&deps, MemberId::new(member))
            .await
            .unwrap()
            .len();
    }
    assert_eq!(total, 1);
}
