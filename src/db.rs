use futures::TryStreamExt;
use libsql::{Builder, Connection, Database};

use crate::config::DatabaseConfig;
use crate::errors::{Error, Result};
use crate::model::UserRow;

#[derive(Debug, Clone)]
pub struct Client {
    config: DatabaseConfig,
}

// One live connection, closed when dropped.
pub struct Session {
    // Fields drop in order: the connection goes before its database handle.
    conn: Connection,
    _db: Database,
}

impl Client {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    pub async fn connect(&self) -> Result<Session> {
        let db = match &self.config {
            DatabaseConfig::Local(path) => {
                // Opening would otherwise create an empty file.
                if !path.is_file() {
                    return Err(Error::DatabaseNotFound(path.clone()));
                }
                Builder::new_local(path).build().await?
            }
            DatabaseConfig::Remote { url, auth_token } => {
                Builder::new_remote(url.clone(), auth_token.clone())
                    .build()
                    .await?
            }
        };
        let conn = db.connect()?;
        Ok(Session { conn, _db: db })
    }
}

impl Session {
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

pub async fn into_rows(rows: libsql::Rows) -> Result<Vec<UserRow>> {
    let users = rows
        .into_stream()
        .map_err(Error::from)
        .and_then(|r| async move { UserRow::try_from(&r).map_err(Error::from) })
        .try_collect::<Vec<_>>()
        .await?;
    Ok(users)
}
