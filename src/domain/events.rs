use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookId, BookStatus, MemberId};

/// イベント：書籍が登録（または上書き）された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAdded {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
    pub added_at: DateTime<Utc>,
}

/// イベント：書籍が除籍された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRemoved {
    pub book_id: BookId,
    pub removed_at: DateTime<Utc>,
}

/// イベント：書籍が貸し出された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookBorrowed {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub borrowed_at: DateTime<Utc>,
}

/// イベント：書籍が返却された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReturned {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub returned_at: DateTime<Utc>,
}

/// イベント：会員が登録された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRegistered {
    pub member_id: MemberId,
    pub name: String,
    pub registered_at: DateTime<Utc>,
}

/// ドメインイベント統合型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainEvent {
    BookAdded(BookAdded),
    BookRemoved(BookRemoved),
    BookBorrowed(BookBorrowed),
    BookReturned(BookReturned),
    MemberRegistered(MemberRegistered),
}

impl From<BookAdded> for DomainEvent {
    fn from(event: BookAdded) -> Self {
        DomainEvent::BookAdded(event)
    }
}

impl From<BookRemoved> for DomainEvent {
    fn from(event: BookRemoved) -> Self {
        DomainEvent::BookRemoved(event)
    }
}

impl From<BookBorrowed> for DomainEvent {
    fn from(event: BookBorrowed) -> Self {
        DomainEvent::BookBorrowed(event)
    }
}

impl From<BookReturned> for DomainEvent {
    fn from(event: BookReturned) -> Self {
        DomainEvent::BookReturned(event)
    }
}

impl From<MemberRegistered> for DomainEvent {
    fn from(event: MemberRegistered) -> Self {
        DomainEvent::MemberRegistered(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_event_json_round_trip() {
        let event = DomainEvent::from(BookBorrowed {
            book_id: BookId::new(101),
            member_id: MemberId::new(1),
            borrowed_at: Utc::now(),
        });

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.starts_with(r#"{"BookBorrowed":"#));
        assert!(json.contains(r#""book_id":101"#));

        let restored: DomainEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, event);
    }

    #[test]
    fn test_book_added_keeps_status() {
        let event = DomainEvent::from(BookAdded {
            book_id: BookId::new(102),
            title: "Clean Code".to_string(),
            author: "Robert C. Martin".to_string(),
            status: BookStatus::Borrowed,
            added_at: Utc::now(),
        });

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""status":"Borrowed""#));
        assert_eq!(serde_json::from_str::<DomainEvent>(&json).unwrap(), event);
    }
}
