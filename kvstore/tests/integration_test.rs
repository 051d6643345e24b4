use anyhow::Result;
use kvstore::KVDb;
use serde::{Deserialize, Serialize};

const SQLITE_FILE: &str = "kvs-db/kvstore.db";

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct Activation {
    account_key: String,
    data_key: String,
}

#[test]
fn write_and_read_object() -> Result<()> {
    let _ = env_logger::try_init();
    let tempdir = tempfile::tempdir()?;
    let sqlite_db = tempdir.path().join(SQLITE_FILE);

    let db = KVDb::new(&sqlite_db)?;

    let activation = Activation {
        account_key: String::from("AK1"),
        data_key: String::from("DK1"),
    };

    db.set("activation", &activation)?;
    let activation2: Activation = db.get("activation").expect("Error reading KV store").unwrap();
    assert_eq!(activation2, activation);

    let db2 = KVDb::new(&sqlite_db)?;
    let activation3: Activation = db2.get("activation").expect("Error reading KV store").unwrap();
    assert_eq!(activation3, activation);
    Ok(())
}

#[test]
fn set_many_is_visible_to_new_connection() -> Result<()> {
    let tempdir = tempfile::tempdir()?;
    let sqlite_db = tempdir.path().join(SQLITE_FILE);

    let mut db = KVDb::new(&sqlite_db)?;
    db.set_many(vec![("account_key", "AK1"), ("data_key", "")])?;

    let db2 = KVDb::new(&sqlite_db)?;
    assert_eq!(db2.get::<String>("account_key")?.as_deref(), Some("AK1"));
    assert_eq!(db2.get::<String>("data_key")?.as_deref(), Some(""));
    Ok(())
}
