use crate::{AppState, db::into_rows, errors::Result, model::UserRow};
use axum::extract::{Json, State};

const USERS_QUERY: &str = "SELECT * FROM users;";

// =========================Query functions=========================
async fn get_users_libsql_query(conn: &libsql::Connection) -> Result<Vec<UserRow>> {
    let query = conn.query(USERS_QUERY, ()).await?;
    let users = into_rows(query).await?;
    Ok(users)
}

// =========================Handlers=========================
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<UserRow>>> {
    let session = state.client.connect().await?;
    let users = get_users_libsql_query(session.conn()).await?;
    drop(session);

    tracing::debug!("returning {} users", users.len());
    Ok(Json(users))
}
