use chrono::{DateTime, Utc};
use reviews_types::models::Review;

use crate::models::ReviewRow;
use crate::{Database, Result, StoreError};

/// en-US "long date, short time", e.g. "October 16, 2026 at 3:45 PM".
const TIMESTAMP_FORMAT: &str = "%B %-d, %Y at %-I:%M %p";

impl Database {
    /// Insert a review. `name` and `review` are expected to be trimmed
    /// already; blank values are rejected. The display timestamp and the
    /// `created_at` sort key are taken from the current time.
    pub fn create_review(&self, name: &str, review: &str) -> Result<Review> {
        self.create_review_at(name, review, Utc::now())
    }

    pub(crate) fn create_review_at(
        &self,
        name: &str,
        review: &str,
        now: DateTime<Utc>,
    ) -> Result<Review> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyField("name"));
        }
        if review.trim().is_empty() {
            return Err(StoreError::EmptyField("review"));
        }

        let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
        let created_at = now.timestamp_millis();

        self.with_conn(|conn| {
            let row = conn.query_row(
                "INSERT INTO reviews (name, review, timestamp, created_at) VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, name, review, timestamp, created_at",
                rusqlite::params![name, review, timestamp, created_at],
                ReviewRow::from_row,
            )?;
            Ok(row.into())
        })
    }

    /// All reviews, newest first. Rows sharing a `created_at` come out in
    /// descending id order.
    pub fn list_reviews(&self) -> Result<Vec<Review>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, review, timestamp, created_at
                 FROM reviews
                 ORDER BY created_at DESC, id DESC",
            )?;

            let rows = stmt
                .query_map([], ReviewRow::from_row)?
                .map(|row| row.map(Review::from))
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }

    /// Delete by id. Returns whether a row was removed; an unknown id is
    /// not an error.
    pub fn delete_review(&self, id: i64) -> Result<bool> {
        self.with_conn(|conn| {
            let removed = conn.execute("DELETE FROM reviews WHERE id = ?1", [id])?;
            Ok(removed > 0)
        })
    }

    pub fn count_reviews(&self) -> Result<u64> {
        self.with_conn(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM reviews", [], |row| row.get(0))?;
            Ok(count as u64)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn store() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.provision().unwrap();
        db
    }

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn create_returns_populated_review() {
        let db = store();
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 15, 45, 0).unwrap();

        let review = db.create_review_at("Alice", "Great service!", now).unwrap();

        assert_eq!(review.id, 1);
        assert_eq!(review.name, "Alice");
        assert_eq!(review.review, "Great service!");
        assert_eq!(review.timestamp, "October 16, 2026 at 3:45 PM");
        assert_eq!(review.created_at, now.timestamp_millis());
    }

    #[test]
    fn timestamp_uses_twelve_hour_clock() {
        let db = store();
        let morning = Utc.with_ymd_and_hms(2026, 1, 5, 0, 7, 0).unwrap();

        let review = db.create_review_at("Bob", "Early bird", morning).unwrap();
        assert_eq!(review.timestamp, "January 5, 2026 at 12:07 AM");
    }

    #[test]
    fn create_then_list_round_trips() {
        let db = store();
        let created = db.create_review("Alice", "Great service!").unwrap();

        let listed = db.list_reviews().unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[test]
    fn ids_strictly_increase() {
        let db = store();
        let mut last = 0;
        for i in 0..5 {
            let review = db.create_review(&format!("user{i}"), "ok").unwrap();
            assert!(review.id > last);
            last = review.id;
        }
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let db = store();
        let first = db.create_review("Alice", "one").unwrap();
        let second = db.create_review("Bob", "two").unwrap();
        assert!(db.delete_review(second.id).unwrap());

        let third = db.create_review("Carol", "three").unwrap();
        assert!(third.id > second.id);
        assert!(third.id > first.id);
    }

    #[test]
    fn list_is_newest_first() {
        let db = store();
        let t1 = db.create_review_at("one", "first", at(1_000)).unwrap();
        let t3 = db.create_review_at("three", "third", at(3_000)).unwrap();
        let t2 = db.create_review_at("two", "second", at(2_000)).unwrap();

        let ids: Vec<i64> = db.list_reviews().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![t3.id, t2.id, t1.id]);
    }

    #[test]
    fn list_on_empty_store_is_empty() {
        let db = store();
        assert!(db.list_reviews().unwrap().is_empty());
    }

    #[test]
    fn blank_fields_are_rejected() {
        let db = store();

        assert!(matches!(
            db.create_review("", "x"),
            Err(StoreError::EmptyField("name"))
        ));
        assert!(matches!(
            db.create_review("Alice", "   \n\t"),
            Err(StoreError::EmptyField("review"))
        ));
        assert_eq!(db.count_reviews().unwrap(), 0);
    }

    #[test]
    fn delete_is_idempotent() {
        let db = store();
        let review = db.create_review("Alice", "Great service!").unwrap();

        assert!(db.delete_review(review.id).unwrap());
        assert!(!db.delete_review(review.id).unwrap());
        assert!(!db.delete_review(9_999).unwrap());
        assert!(db.list_reviews().unwrap().is_empty());
    }
}
