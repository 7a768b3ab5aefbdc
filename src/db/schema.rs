use rusqlite::Connection;

/// Create the record tables if they do not exist yet.
///
/// Tables are STRICT so column types are enforced when a write commits, and
/// length limits are CHECK constraints.
pub fn init_db(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS organisations (
            code INTEGER PRIMARY KEY,
            org_name TEXT NOT NULL CHECK (length(org_name) <= 20),
            details TEXT CHECK (length(details) <= 20)
        ) STRICT;

        CREATE TABLE IF NOT EXISTS employee (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            fname TEXT NOT NULL CHECK (length(fname) <= 20),
            lname TEXT NOT NULL CHECK (length(lname) <= 20),
            email TEXT NOT NULL UNIQUE CHECK (length(email) <= 20),
            address TEXT CHECK (length(address) <= 50),
            org_code INTEGER REFERENCES organisations(code)
        ) STRICT;
        CREATE INDEX IF NOT EXISTS idx_employee_org_code ON employee(org_code);
        CREATE INDEX IF NOT EXISTS idx_employee_fname ON employee(fname);

        -- Standalone user registry
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            fname TEXT NOT NULL CHECK (length(fname) <= 20),
            lname TEXT NOT NULL CHECK (length(lname) <= 20),
            email TEXT NOT NULL UNIQUE CHECK (length(email) <= 30),
            gender TEXT CHECK (length(gender) <= 30),
            contact_info TEXT CHECK (length(contact_info) <= 30),
            address TEXT CHECK (length(address) <= 50),
            mobile_no TEXT NOT NULL UNIQUE CHECK (length(mobile_no) <= 10)
        ) STRICT;
        "#,
    )
}
