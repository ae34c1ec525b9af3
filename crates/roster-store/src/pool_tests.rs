use super::*;

#[tokio::test]
async fn test_open_in_memory() {
    let pool = ConnectionPool::open(&PoolOptions::in_memory().with_size(3))
        .await
        .unwrap();
    assert_eq!(pool.size(), 3);
    assert_eq!(pool.available(), 3);
}

#[tokio::test]
async fn test_zero_size_rejected() {
    let result = ConnectionPool::open(&PoolOptions::in_memory().with_size(0)).await;
    assert!(matches!(result, Err(StoreError::Connection(_))));
}

#[tokio::test]
async fn test_acquire_and_release() {
    let pool = ConnectionPool::open(&PoolOptions::in_memory().with_size(2))
        .await
        .unwrap();

    let first = pool.acquire().await.unwrap();
    assert_eq!(pool.available(), 1);
    let second = pool.acquire().await.unwrap();
    assert_eq!(pool.available(), 0);

    drop(first);
    assert_eq!(pool.available(), 1);
    drop(second);
    assert_eq!(pool.available(), 2);
}

#[tokio::test]
async fn test_acquire_waits_when_exhausted() {
    let pool = ConnectionPool::open(&PoolOptions::in_memory().with_size(1))
        .await
        .unwrap();

    let held = pool.acquire().await.unwrap();
    let blocked = tokio::time::timeout(Duration::from_millis(50), pool.acquire()).await;
    assert!(blocked.is_err(), "second checkout should wait for the first");

    drop(held);
    let again = tokio::time::timeout(Duration::from_millis(500), pool.acquire()).await;
    assert!(again.is_ok());
}

#[tokio::test]
async fn test_released_after_failed_statement() {
    let pool = ConnectionPool::open(&PoolOptions::in_memory().with_size(1))
        .await
        .unwrap();

    {
        let conn = pool.acquire().await.unwrap();
        let result = conn
            .call(|conn| {
                conn.execute("SELECT * FROM no_such_table", [])?;
                Ok(())
            })
            .await;
        assert!(result.is_err());
    }

    assert_eq!(pool.available(), 1);
    assert!(pool.acquire().await.is_ok());
}

#[tokio::test]
async fn test_in_memory_connections_share_data() {
    let pool = ConnectionPool::open(&PoolOptions::in_memory().with_size(2))
        .await
        .unwrap();

    let writer = pool.acquire().await.unwrap();
    let reader = pool.acquire().await.unwrap();

    writer
        .call(|conn| {
            conn.execute_batch("CREATE TABLE t (x INTEGER); INSERT INTO t VALUES (7);")?;
            Ok(())
        })
        .await
        .unwrap();

    let x: i64 = reader
        .call(|conn| Ok(conn.query_row("SELECT x FROM t", [], |row| row.get(0))?))
        .await
        .unwrap();
    assert_eq!(x, 7);
}

#[tokio::test]
async fn test_separate_in_memory_pools_are_isolated() {
    let a = ConnectionPool::open(&PoolOptions::in_memory().with_size(1))
        .await
        .unwrap();
    let b = ConnectionPool::open(&PoolOptions::in_memory().with_size(1))
        .await
        .unwrap();

    a.acquire()
        .await
        .unwrap()
        .call(|conn| {
            conn.execute_batch("CREATE TABLE only_in_a (x INTEGER);")?;
            Ok(())
        })
        .await
        .unwrap();

    let exists: bool = b
        .acquire()
        .await
        .unwrap()
        .call(|conn| {
            let mut stmt = conn
                .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='only_in_a'")?;
            Ok(stmt.exists([])?)
        })
        .await
        .unwrap();
    assert!(!exists);
}

#[tokio::test]
async fn test_open_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let options = PoolOptions::file(dir.path().join("roster.db")).with_size(2);
    let pool = ConnectionPool::open(&options).await.unwrap();
    assert_eq!(pool.available(), 2);
}
