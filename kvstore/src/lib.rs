use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

const TABLENAME: &str = "kvstore";
const KEY_FIELD: &str = "key";
const VALUE_FIELD: &str = "value";

/// JSON-valued key-value store on top of a single SQLite table.
pub struct KVDb(Connection);

impl KVDb {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        log::debug!("Opening KV store at {}", path.as_ref().display());
        // Create directory for DB if it doesn't already exist
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let connection = Connection::open(path)?;
        connection.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS '{TABLENAME}' (
                {KEY_FIELD} TEXT PRIMARY KEY NOT NULL,
                {VALUE_FIELD} BLOB NOT NULL
                )"
            ),
            [],
        )?;
        Ok(KVDb(connection))
    }

    fn select(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.0
            .query_row(
                &format!("SELECT {VALUE_FIELD} FROM '{TABLENAME}' WHERE {KEY_FIELD} = ?1"),
                [key],
                |r| r.get::<_, Vec<u8>>(0),
            )
            .optional()
            .map_err(Into::into)
    }

    fn upsert(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut stmt = self.0.prepare(&format!(
            "INSERT INTO '{TABLENAME}' ({KEY_FIELD}, {VALUE_FIELD}) values (?1, ?2)
            ON CONFLICT({KEY_FIELD}) DO UPDATE SET {VALUE_FIELD}=?2",
        ))?;
        let res = stmt.execute(params![key, value])?;
        log::trace!("Upserted {res} row(s) for key '{key}'");
        Ok(())
    }

    pub fn get<T: DeserializeOwned>(&self, key: impl AsRef<str>) -> Result<Option<T>> {
        self.select(key.as_ref())?
            .map(|v| serde_json::from_slice::<T>(&v))
            .transpose()
            .map_err(Into::into)
    }

    pub fn set<T: Serialize>(&self, key: impl AsRef<str>, value: T) -> Result<()> {
        self.upsert(key.as_ref(), &serde_json::to_vec(&value)?)
    }

    /// Writes all pairs in one transaction, so either all or none are stored.
    pub fn set_many<K: AsRef<str>, V: Serialize>(&mut self, pairs: Vec<(K, V)>) -> Result<()> {
        let tx = self.0.transaction()?;
        {
            let mut stmt = tx.prepare(&format!(
                "INSERT INTO '{TABLENAME}' ({KEY_FIELD}, {VALUE_FIELD}) values (?1, ?2)
                ON CONFLICT({KEY_FIELD}) DO UPDATE SET {VALUE_FIELD}=?2",
            ))?;
            for (key, value) in pairs {
                stmt.execute(params![key.as_ref(), serde_json::to_vec(&value)?])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Returns whether a value was actually removed.
    pub fn delete(&self, key: impl AsRef<str>) -> Result<bool> {
        let res = self.0.execute(
            &format!("DELETE FROM '{TABLENAME}' WHERE {KEY_FIELD} = ?1"),
            [key.as_ref()],
        )?;
        Ok(res > 0)
    }
}
