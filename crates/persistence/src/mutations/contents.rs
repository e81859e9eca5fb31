// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::ContentFields;
use crate::diesel_schema::contents;
use crate::error::PersistenceError;

/// Creates a content item and returns its ID.
///
/// # Errors
///
/// Returns an error if the image list cannot be encoded or the insert fails.
pub fn create_content(
    conn: &mut SqliteConnection,
    fields: &ContentFields,
) -> Result<i64, PersistenceError> {
    let image_urls: String = serde_json::to_string(&fields.image_urls)?;

    diesel::insert_into(contents::table)
        .values((
            contents::title.eq(&fields.title),
            contents::description.eq(fields.description.as_deref()),
            contents::content_type.eq(&fields.content_type),
            contents::image_urls.eq(&image_urls),
            contents::is_active.eq(i32::from(fields.is_active)),
        ))
        .execute(conn)?;

    let content_id: i64 = get_last_insert_rowid(conn)?;
    info!(content_id, title = %fields.title, "Content created");
    Ok(content_id)
}

/// Overwrites every editable field of a content item.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the item does not exist.
pub fn update_content(
    conn: &mut SqliteConnection,
    content_id: i64,
    fields: &ContentFields,
) -> Result<(), PersistenceError> {
    let image_urls: String = serde_json::to_string(&fields.image_urls)?;

    let updated: usize = diesel::update(contents::table)
        .filter(contents::content_id.eq(content_id))
        .set((
            contents::title.eq(&fields.title),
            contents::description.eq(fields.description.as_deref()),
            contents::content_type.eq(&fields.content_type),
            contents::image_urls.eq(&image_urls),
            contents::is_active.eq(i32::from(fields.is_active)),
            contents::updated_at
                .eq(diesel::dsl::sql::<diesel::sql_types::Text>("CURRENT_TIMESTAMP")),
        ))
        .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Content {content_id}")));
    }

    info!(content_id, "Content updated");
    Ok(())
}

/// Deletes a content item.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the item does not exist.
pub fn delete_content(conn: &mut SqliteConnection, content_id: i64) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(contents::table)
        .filter(contents::content_id.eq(content_id))
        .execute(conn)?;
    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!("Content {content_id}")));
    }

    info!(content_id, "Content deleted");
    Ok(())
}
