mod common;
use common::setup_test_db;

use dogcare::db::initialize::init_db;
use dogcare::db::pool::DbPool;
use dogcare::store::keys;
use dogcare::{KeyValueStore, SqliteStore, Tracker};

#[test]
fn test_sqlite_store_get_missing_key() {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    let store = SqliteStore::new(pool);

    assert_eq!(store.get("nope").unwrap(), None);
}

#[test]
fn test_sqlite_store_set_overwrites() {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    let mut store = SqliteStore::new(pool);

    store.set(keys::HIGH_SCORE, "1").unwrap();
    store.set(keys::HIGH_SCORE, "2").unwrap();

    assert_eq!(store.get(keys::HIGH_SCORE).unwrap().as_deref(), Some("2"));

    let rows: i64 = store
        .pool()
        .conn
        .query_row("SELECT COUNT(*) FROM kv_store", [], |r| r.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn test_sqlite_store_survives_reopen() {
    let db_path = setup_test_db("store_reopen");

    {
        let mut tracker = Tracker::new(SqliteStore::open(&db_path).expect("open store"));
        tracker.record_water(100).unwrap();
        tracker.record_water(200).unwrap();
        tracker.record_incident(150).unwrap();
        tracker.refresh_high_score(3).unwrap();
    }

    let tracker = Tracker::new(SqliteStore::open(&db_path).expect("reopen store"));
    assert_eq!(tracker.last_water().unwrap(), Some(200));
    assert_eq!(tracker.water_history().unwrap(), vec![200, 100]);
    assert_eq!(tracker.last_incident().unwrap(), Some(150));
    assert_eq!(tracker.high_score().unwrap(), 3);

    assert_eq!(
        tracker.store().get(keys::WATER_HISTORY).unwrap().as_deref(),
        Some("[200,100]")
    );
}

#[test]
fn test_migrations_are_recorded_once() {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("first init");
    init_db(&pool.conn).expect("second init");

    let applied: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(applied, 1);
}
