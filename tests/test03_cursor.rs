use simple_sql::prelude::*;

fn connected() -> Connection {
    let mut conn = Connection::new();
    conn.connect(ConnectionConfig::default().with_database(":memory:"));
    assert!(conn.is_connected());
    conn
}

fn seed_names(conn: &Connection, names: &[&str]) -> Result<(), SimpleSqlError> {
    conn.prepare_statement("CREATE TABLE people (id INTEGER PRIMARY KEY, name TEXT)")?
        .execute()?;
    let mut insert = conn.prepare_statement("INSERT INTO people (name) VALUES (?1)")?;
    for name in names {
        insert.set(1, &RowValues::Text((*name).into()), ParamType::Text)?;
        insert.execute()?;
    }
    Ok(())
}

#[test]
fn select_one_walks_the_whole_protocol() -> Result<(), Box<dyn std::error::Error>> {
    let conn = connected();
    let mut stmt = conn.prepare_statement("SELECT 1 AS x")?;
    let mut result = stmt.query()?;

    assert!(result.have_row());
    assert_eq!(result.get_from_row("x")?, &RowValues::Int(1));

    result.next_row()?;
    assert!(!result.have_row());
    result.close();
    Ok(())
}

#[test]
fn iteration_visits_each_row_exactly_once() -> Result<(), Box<dyn std::error::Error>> {
    let conn = connected();
    seed_names(&conn, &["alice", "bob", "carol"])?;

    let mut stmt = conn.prepare_statement("SELECT name FROM people ORDER BY id")?;
    let mut result = stmt.query()?;

    let mut seen = Vec::new();
    while result.have_row() {
        seen.push(
            result
                .get_from_row("name")?
                .as_text()
                .unwrap_or_default()
                .to_string(),
        );
        result.next_row()?;
    }
    assert_eq!(seen, vec!["alice", "bob", "carol"]);

    // Advancing an exhausted cursor stays a no-op.
    result.next_row()?;
    result.next_row()?;
    assert!(!result.have_row());
    result.close();
    Ok(())
}

#[test]
fn an_empty_result_starts_exhausted() -> Result<(), Box<dyn std::error::Error>> {
    let conn = connected();
    seed_names(&conn, &[])?;

    let mut stmt = conn.prepare_statement("SELECT name FROM people")?;
    let result = stmt.query()?;
    assert!(!result.have_row());
    assert!(result.row().is_none());
    Ok(())
}

#[test]
fn bound_queries_filter_rows() -> Result<(), Box<dyn std::error::Error>> {
    let conn = connected();
    seed_names(&conn, &["alice", "bob"])?;

    let mut stmt = conn.prepare_statement("SELECT id, name FROM people WHERE name = ?1")?;
    stmt.set(1, &RowValues::Text("bob".into()), ParamType::Text)?;
    let mut result = stmt.query()?;

    assert!(result.have_row());
    assert_eq!(result.get_from_row("id")?, &RowValues::Int(2));
    result.next_row()?;
    assert!(!result.have_row());
    Ok(())
}

#[test]
fn get_from_row_fails_on_unknown_columns_and_exhaustion() -> Result<(), Box<dyn std::error::Error>>
{
    let conn = connected();
    let mut stmt = conn.prepare_statement("SELECT 1 AS x")?;
    let mut result = stmt.query()?;

    let err = result.get_from_row("nope").unwrap_err();
    assert!(matches!(err, SimpleSqlError::RowAccessError(_)));

    result.next_row()?;
    let err = result.get_from_row("x").unwrap_err();
    assert!(matches!(err, SimpleSqlError::RowAccessError(_)));
    Ok(())
}

#[test]
fn rows_expose_values_by_name_and_position() -> Result<(), Box<dyn std::error::Error>> {
    let conn = connected();
    let mut stmt = conn.prepare_statement("SELECT 7 AS id, 'dora' AS name")?;
    let result = stmt.query()?;

    let row = result.row().expect("row expected");
    assert_eq!(row.column_names().to_vec(), vec!["id", "name"]);
    assert_eq!(row.get("id"), Some(&RowValues::Int(7)));
    assert_eq!(row.get("name"), Some(&RowValues::Text("dora".into())));
    assert_eq!(row.get_by_index(1), Some(&RowValues::Text("dora".into())));
    assert_eq!(row.get("missing"), None);
    assert_eq!(row.get_by_index(9), None);
    assert_eq!(row.values().len(), 2);
    Ok(())
}

#[test]
fn storage_classes_map_to_row_values() -> Result<(), Box<dyn std::error::Error>> {
    let conn = connected();
    let mut stmt = conn.prepare_statement(
        "SELECT NULL AS a, 3 AS b, 2.5 AS c, 'txt' AS d, X'0102' AS e",
    )?;
    let result = stmt.query()?;

    assert!(result.get_from_row("a")?.is_null());
    assert_eq!(result.get_from_row("b")?, &RowValues::Int(3));
    assert_eq!(result.get_from_row("c")?, &RowValues::Float(2.5));
    assert_eq!(result.get_from_row("d")?.as_text(), Some("txt"));
    assert_eq!(result.get_from_row("e")?.as_blob(), Some(&[1u8, 2u8][..]));
    Ok(())
}

#[test]
fn close_is_idempotent_and_forces_exhaustion() -> Result<(), Box<dyn std::error::Error>> {
    let conn = connected();
    seed_names(&conn, &["alice", "bob"])?;

    let mut stmt = conn.prepare_statement("SELECT name FROM people")?;
    let mut result = stmt.query()?;
    assert!(result.have_row());

    // Close with rows still pending: state collapses to exhausted.
    result.close();
    assert!(!result.have_row());
    assert!(result.row().is_none());

    // Further closes and advances are harmless.
    result.close();
    result.next_row()?;
    assert!(!result.have_row());
    Ok(())
}

#[test]
fn a_fresh_query_rewinds_the_statement() -> Result<(), Box<dyn std::error::Error>> {
    let conn = connected();
    seed_names(&conn, &["alice", "bob"])?;

    let mut stmt = conn.prepare_statement("SELECT name FROM people ORDER BY id")?;
    {
        let mut result = stmt.query()?;
        let mut count = 0;
        while result.have_row() {
            count += 1;
            result.next_row()?;
        }
        assert_eq!(count, 2);
    }
    // The statement is reusable once its cursor is gone.
    let result = stmt.query()?;
    assert!(result.have_row());
    assert_eq!(result.get_from_row("name")?.as_text(), Some("alice"));
    Ok(())
}
