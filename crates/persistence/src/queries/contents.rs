// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::ContentData;
use crate::diesel_schema::contents;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = contents)]
struct ContentRow {
    content_id: i64,
    title: String,
    description: Option<String>,
    content_type: String,
    image_urls: String,
    is_active: i32,
    created_at: String,
    updated_at: String,
}

impl TryFrom<ContentRow> for ContentData {
    type Error = PersistenceError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            content_id: row.content_id,
            title: row.title,
            description: row.description,
            content_type: row.content_type,
            image_urls: serde_json::from_str(&row.image_urls)?,
            is_active: row.is_active != 0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Retrieves one content item, active or not.
///
/// # Errors
///
/// Returns an error if the query fails or the stored image list is not
/// valid JSON. Returns `Ok(None)` if the item does not exist.
pub fn get_content(
    conn: &mut SqliteConnection,
    content_id: i64,
) -> Result<Option<ContentData>, PersistenceError> {
    contents::table
        .filter(contents::content_id.eq(content_id))
        .select(ContentRow::as_select())
        .first(conn)
        .optional()?
        .map(ContentData::try_from)
        .transpose()
}

/// Lists active content, newest first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored image list is not
/// valid JSON.
pub fn list_active_contents(
    conn: &mut SqliteConnection,
) -> Result<Vec<ContentData>, PersistenceError> {
    let rows: Vec<ContentRow> = contents::table
        .filter(contents::is_active.eq(1))
        .order((contents::created_at.desc(), contents::content_id.desc()))
        .select(ContentRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ContentData::try_from).collect()
}
