use crate::backend::{Backend, CellValue, QueryResult};
use crate::config::ConnectionConfig;
use crate::error::CheckError;
use secrecy::ExposeSecret;
use std::time::Duration;
use tokio_postgres::{NoTls, SimpleQueryMessage};

pub struct PostgresBackend<'a> {
    conn: &'a ConnectionConfig,
}

impl<'a> PostgresBackend<'a> {
    pub fn new(conn: &'a ConnectionConfig) -> Self {
        Self { conn }
    }

    fn pg_config(&self, deadline: Duration) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.conn.hostname)
            .port(self.conn.port)
            .dbname(&self.conn.database)
            .user(&self.conn.user)
            .application_name("check-postgres-query")
            .connect_timeout(deadline);
        if let Some(ref password) = self.conn.password {
            config.password(password.expose_secret());
        }
        config
    }
}

impl Backend for PostgresBackend<'_> {
    async fn execute(&self, query: &str, timeout_secs: u64) -> Result<QueryResult, CheckError> {
        let deadline = Duration::from_secs(timeout_secs);
        let config = self.pg_config(deadline);

        let (client, connection) = tokio::time::timeout(deadline, config.connect(NoTls))
            .await
            .map_err(|_| CheckError::Timeout {
                seconds: timeout_secs,
            })?
            .map_err(|e| CheckError::Connection {
                message: e.to_string(),
            })?;

        // The connection must be driven for the client to make progress;
        // it resolves once the client is dropped.
        let driver = tokio::spawn(async move {
            let _ = connection.await;
        });

        // Simple-query protocol: the text executes verbatim and every cell
        // comes back as text.
        let messages = tokio::time::timeout(deadline, client.simple_query(query))
            .await
            .map_err(|_| CheckError::Timeout {
                seconds: timeout_secs,
            })?
            .map_err(|e| CheckError::Query {
                message: e.to_string(),
            })?;

        let mut result = QueryResult::default();
        for message in messages {
            if let SimpleQueryMessage::Row(row) = message {
                if result.columns.is_empty() {
                    result.columns = row.columns().iter().map(|c| c.name().to_string()).collect();
                }
                let mut cells = Vec::with_capacity(row.len());
                for i in 0..row.len() {
                    match row.get(i) {
                        Some(text) => cells.push(CellValue::Text(text.to_string())),
                        None => cells.push(CellValue::Null),
                    }
                }
                result.rows.push(cells);
            }
        }

        // Release the session before the outcome is reported.
        drop(client);
        let _ = driver.await;

        Ok(result)
    }
}
