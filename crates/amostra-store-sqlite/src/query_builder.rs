//! SQL query builder for `find_all` operations.

use amostra_store::SampleQuery;

use crate::repository_impl::COLS;

/// Builds the SQL and parameters for `find_all`.
///
/// The text filter reproduces the original search semantics: one
/// pattern matched against `codigo`, `fabricante` and `categoria`.
pub(crate) fn build_find_all_query(
    query: &SampleQuery,
) -> (String, Vec<Box<dyn rusqlite::types::ToSql>>) {
    let mut sql = format!("SELECT {COLS} FROM samples WHERE 1=1");
    let mut params: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();
    if let Some(ref text) = query.text {
        sql.push_str(" AND (codigo LIKE ? OR fabricante LIKE ? OR categoria LIKE ?)");
        let pattern = format!("%{text}%");
        params.push(Box::new(pattern.clone()));
        params.push(Box::new(pattern.clone()));
        params.push(Box::new(pattern));
    }
    if let Some(status) = query.status {
        sql.push_str(" AND status = ?");
        params.push(Box::new(status.as_str().to_string()));
    }
    sql.push_str(" ORDER BY id ASC");
    if let Some(limit) = query.limit {
        sql.push_str(" LIMIT ?");
        params.push(Box::new(limit as i64));
    } else if query.offset.is_some() {
        // SQLite requires a LIMIT clause before OFFSET; -1 means unbounded.
        sql.push_str(" LIMIT -1");
    }
    if let Some(offset) = query.offset {
        sql.push_str(" OFFSET ?");
        params.push(Box::new(offset as i64));
    }
    (sql, params)
}
