//! MySQL/MariaDB schema inspector implementation.
//!
//! Implements the `SchemaInspector` trait over `INFORMATION_SCHEMA`.
//! Uses SQLx for connection pooling and async query execution.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlRow, MySqlSslMode};
use sqlx::Row;
use tracing::{debug, info, warn};

use crate::config::Dsn;
use crate::core::schema::RawColumn;
use crate::core::traits::SchemaInspector;
use crate::error::{GenError, Result};

/// Connection pool timeout.
const POOL_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Tables are described one at a time, so a small pool is enough.
const MAX_CONNECTIONS: u32 = 2;

// CAST to CHAR to handle collation differences where information_schema
// may return VARBINARY instead of VARCHAR
const LIST_TABLES_QUERY: &str = r#"
    SELECT CAST(TABLE_NAME AS CHAR(255)) AS TABLE_NAME
    FROM INFORMATION_SCHEMA.TABLES
    WHERE TABLE_SCHEMA = ?
    ORDER BY TABLE_NAME
"#;

// Same shape as DESCRIBE: Field, Type, Null, Key, Default, Extra
const DESCRIBE_TABLE_QUERY: &str = r#"
    SELECT
        CAST(COLUMN_NAME AS CHAR(255)) AS field,
        CAST(COLUMN_TYPE AS CHAR) AS column_type,
        CAST(IS_NULLABLE AS CHAR(3)) AS is_nullable,
        CAST(COLUMN_KEY AS CHAR(3)) AS column_key,
        CAST(COLUMN_DEFAULT AS CHAR) AS column_default,
        CAST(EXTRA AS CHAR(255)) AS extra
    FROM INFORMATION_SCHEMA.COLUMNS
    WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?
    ORDER BY ORDINAL_POSITION
"#;

/// MySQL/MariaDB schema inspector.
pub struct MysqlInspector {
    pool: MySqlPool,
    database: String,
}

impl MysqlInspector {
    /// Connect to the database named by the DSN.
    pub async fn connect(dsn: &Dsn) -> Result<Self> {
        let options = connect_options(dsn)?;

        let pool = MySqlPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(POOL_CONNECTION_TIMEOUT)
            .connect_with(options)
            .await
            .map_err(|e| GenError::database(e, "creating MySQL pool"))?;

        // Test connection
        sqlx::query("SELECT 1")
            .fetch_one(&pool)
            .await
            .map_err(|e| GenError::database(e, "testing MySQL connection"))?;

        info!("Connected to MySQL: {}", dsn);

        Ok(Self {
            pool,
            database: dsn.database.clone(),
        })
    }

    /// Name of the inspected database.
    pub fn database(&self) -> &str {
        &self.database
    }

    fn row_to_column(row: &MySqlRow) -> std::result::Result<RawColumn, sqlx::Error> {
        Ok(RawColumn {
            field: row.try_get("field")?,
            type_text: row.try_get("column_type")?,
            null: row.try_get("is_nullable")?,
            key: row.try_get("column_key")?,
            default: row.try_get("column_default")?,
            extra: row.try_get("extra")?,
        })
    }
}

/// Build connection options from a DSN, applying its URL parameters.
///
/// TLS is preferred unless `ssl-mode` says otherwise. Parameters sqlx has
/// no option for are logged and ignored.
pub fn connect_options(dsn: &Dsn) -> Result<MySqlConnectOptions> {
    let mut options = MySqlConnectOptions::new()
        .host(&dsn.host)
        .port(dsn.port)
        .database(&dsn.database)
        .username(&dsn.user)
        .password(&dsn.password)
        .ssl_mode(MySqlSslMode::Preferred);

    for (key, value) in &dsn.params {
        options = match key.as_str() {
            "ssl-mode" | "sslmode" => {
                let mode = value.parse::<MySqlSslMode>().map_err(|e| {
                    GenError::Config(format!("invalid DSN: ssl-mode '{}': {}", value, e))
                })?;
                options.ssl_mode(mode)
            }
            "ssl-ca" | "sslca" => options.ssl_ca(value),
            "charset" => options.charset(value),
            "collation" => options.collation(value),
            "timezone" | "time-zone" => options.timezone(Some(value.clone())),
            "socket" => options.socket(value),
            _ => {
                warn!("Ignoring unsupported DSN parameter '{}'", key);
                options
            }
        };
    }

    Ok(options)
}

#[async_trait]
impl SchemaInspector for MysqlInspector {
    async fn list_tables(&self) -> Result<Vec<String>> {
        let rows: Vec<MySqlRow> = sqlx::query(LIST_TABLES_QUERY)
            .bind(&self.database)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| GenError::database(e, "listing MySQL tables"))?;

        let tables = rows
            .iter()
            .map(|row| row.try_get::<String, _>("TABLE_NAME"))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| GenError::database(e, "reading MySQL table names"))?;

        info!(
            "Found {} tables in MySQL database '{}'",
            tables.len(),
            self.database
        );
        Ok(tables)
    }

    async fn describe_table(&self, table: &str) -> Result<Vec<RawColumn>> {
        let rows: Vec<MySqlRow> = sqlx::query(DESCRIBE_TABLE_QUERY)
            .bind(&self.database)
            .bind(table)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| GenError::database(e, format!("describing MySQL table {}", table)))?;

        // Every MySQL table has at least one column
        if rows.is_empty() {
            return Err(GenError::TableNotFound(table.to_string()));
        }

        let columns = rows
            .iter()
            .map(Self::row_to_column)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| GenError::database(e, format!("reading columns of {}", table)))?;

        debug!("Described {}: {} columns", table, columns.len());
        Ok(columns)
    }

    fn source_type(&self) -> &str {
        "mysql"
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
