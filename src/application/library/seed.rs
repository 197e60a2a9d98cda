use crate::config::SeedData;
use crate::domain::{BookId, MemberId, commands::*};
use chrono::Utc;

use super::errors::Result;
use super::library_service::{ServiceDependencies, add_book, register_member};

/// 初期データを投入する
///
/// 会員を先に登録し、その後に書籍を登録する。
/// どちらも上書き登録なので、同じデータを繰り返し投入しても結果は変わらない。
pub async fn seed_library(deps: &ServiceDependencies, seed: &SeedData) -> Result<()> {
    let now = Utc::now();

    for member in &seed.members {
        register_member(
            deps,
            RegisterMember {
                member_id: MemberId::new(member.id),
                name: member.name.clone(),
                registered_at: now,
            },
        )
        .await?;
    }

    for book in &seed.books {
        add_book(
            deps,
            AddBook {
                book_id: BookId::new(book.id),
                title: book.title.clone(),
                author: book.author.clone(),
                status: None,
                added_at: now,
            },
        )
        .await?;
    }

    tracing::info!(
        members = seed.members.len(),
        books = seed.books.len(),
        "library seeded"
    );
    Ok(())
}
