use reviews_types::models::Review;

/// Row of the `reviews` table, column for column.
pub struct ReviewRow {
    pub id: i64,
    pub name: String,
    pub review: String,
    pub timestamp: String,
    pub created_at: i64,
}

impl ReviewRow {
    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            review: row.get(2)?,
            timestamp: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review {
            id: row.id,
            name: row.name,
            review: row.review,
            timestamp: row.timestamp,
            created_at: row.created_at,
        }
    }
}
