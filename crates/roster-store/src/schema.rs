//! Database schema management.

use rusqlite::Connection;
use tokio_rusqlite::Error;

/// Initialize the database schema.
pub fn init_schema(conn: &Connection) -> Result<(), Error> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Insert the sample data set. Rows that already exist are left alone.
pub fn seed(conn: &mut Connection) -> Result<(), Error> {
    let tx = conn.transaction()?;
    tx.execute_batch(SEED)?;
    tx.commit()?;
    Ok(())
}

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS student (
    ROLLID INTEGER PRIMARY KEY,
    NAME TEXT NOT NULL,
    TITLE TEXT,
    CLASS TEXT,
    SECTION TEXT
);

CREATE TABLE IF NOT EXISTS company (
    COMPANY_ID INTEGER PRIMARY KEY,
    COMPANY_NAME TEXT,
    COMPANY_CITY TEXT
);

CREATE TABLE IF NOT EXISTS agents (
    AGENT_CODE TEXT PRIMARY KEY,
    AGENT_NAME TEXT,
    WORKING_AREA TEXT,
    COMMISSION REAL,
    PHONE_NO TEXT,
    COUNTRY TEXT
);

CREATE TABLE IF NOT EXISTS customer (
    CUST_CODE TEXT PRIMARY KEY,
    CUST_NAME TEXT NOT NULL,
    CUST_CITY TEXT,
    WORKING_AREA TEXT,
    CUST_COUNTRY TEXT,
    GRADE INTEGER,
    PHONE_NO TEXT,
    AGENT_CODE TEXT
);

CREATE INDEX IF NOT EXISTS idx_agents_area ON agents(WORKING_AREA);
CREATE INDEX IF NOT EXISTS idx_customer_city ON customer(CUST_CITY);
"#;

// Company cities carry a trailing carriage return, as the source data did.
const SEED: &str = r#"
INSERT OR IGNORE INTO student (ROLLID, NAME, TITLE, CLASS, SECTION) VALUES
    (1, 'Alex Dray', 'MR', 'V', 'A'),
    (2, 'Priya Nair', 'MS', 'V', 'B'),
    (3, 'Tom Okafor', 'MR', 'VI', 'A');

INSERT OR IGNORE INTO company (COMPANY_ID, COMPANY_NAME, COMPANY_CITY) VALUES
    (15, 'Jack Hill Ltd', 'London' || char(13)),
    (16, 'Akas Foods', 'Delhi' || char(13)),
    (17, 'Foodies.', 'London' || char(13)),
    (18, 'Order All', 'Boston' || char(13)),
    (19, 'Sip-n-Bite.', 'New York' || char(13));

INSERT OR IGNORE INTO agents (AGENT_CODE, AGENT_NAME, WORKING_AREA, COMMISSION, PHONE_NO, COUNTRY) VALUES
    ('A001', 'Subbarao', 'Bangalore', 0.14, '077-12346674', ''),
    ('A002', 'Mukesh', 'Mumbai', 0.11, '029-12358964', ''),
    ('A003', 'Alex ', 'London', 0.13, '075-12458969', ''),
    ('A006', 'McDen', 'London', 0.15, '078-22255588', ''),
    ('A007', 'Ramasundar', 'Bangalore', 0.15, '077-25814763', ''),
    ('A008', 'Alford', 'New York', 0.12, '044-25874365', ''),
    ('A009', 'Benjamin', 'Hampshair', 0.11, '008-22536178', ''),
    ('A010', 'Santakumar', 'Chennai', 0.14, '007-22388644', ''),
    ('A011', 'Ravi Kumar', 'Bangalore', 0.15, '077-45625874', ''),
    ('A012', 'Lucida', 'San Jose', 0.12, '044-52981425', '');

INSERT OR IGNORE INTO customer (CUST_CODE, CUST_NAME, CUST_CITY, WORKING_AREA, CUST_COUNTRY, GRADE, PHONE_NO, AGENT_CODE) VALUES
    ('C00013', 'Holmes', 'London', 'London', 'UK', 2, 'BBBBBBB', 'A003'),
    ('C00001', 'Micheal', 'New York', 'New York', 'USA', 2, 'CCCCCCC', 'A008'),
    ('C00020', 'Albert', 'New York', 'New York', 'USA', 3, 'BBBBSBB', 'A008'),
    ('C00025', 'Ravindran', 'Bangalore', 'Bangalore', 'India', 2, 'AVAVAVA', 'A011'),
    ('C00024', 'Cook', 'London', 'London', 'UK', 2, 'FSDDSDF', 'A006'),
    ('C00015', 'Stuart', 'London', 'London', 'UK', 1, 'GFSGERS', 'A003'),
    ('C00002', 'Bolt', 'New York', 'New York', 'USA', 3, 'DDNRDRH', 'A008'),
    ('C00018', 'Fleming', 'Brisban', 'Brisban', 'Australia', 2, 'NHBGVFC', 'A005'),
    ('C00021', 'Jacks', 'Brisban', 'Brisban', 'Australia', 1, 'WERTGDF', 'A005');
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn table_exists(conn: &Connection, name: &str) -> bool {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")
            .unwrap();
        stmt.exists([name]).unwrap()
    }

    #[test]
    fn test_schema_creation() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        for table in ["student", "company", "agents", "customer"] {
            assert!(table_exists(&conn, table), "missing table {table}");
        }
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();
    }

    #[test]
    fn test_seed_twice_keeps_one_copy() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        seed(&mut conn).unwrap();
        seed(&mut conn).unwrap();

        let companies: i64 = conn
            .query_row("SELECT COUNT(*) FROM company", [], |row| row.get(0))
            .unwrap();
        assert_eq!(companies, 5);
    }

    #[test]
    fn test_seed_company_city_has_carriage_return() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        seed(&mut conn).unwrap();

        let city: String = conn
            .query_row(
                "SELECT COMPANY_CITY FROM company WHERE COMPANY_ID = 18",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(city, "Boston\r");
    }
}
