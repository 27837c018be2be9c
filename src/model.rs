use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Column {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl From<libsql::Value> for Column {
    fn from(value: libsql::Value) -> Self {
        match value {
            libsql::Value::Null => Column::Null,
            libsql::Value::Integer(i) => Column::Integer(i),
            // JSON has no NaN or infinity
            libsql::Value::Real(r) if !r.is_finite() => Column::Null,
            libsql::Value::Real(r) => Column::Real(r),
            libsql::Value::Text(s) => Column::Text(s),
            libsql::Value::Blob(b) => Column::Blob(b),
        }
    }
}

// Positional values in table-declared order, no column names
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UserRow(pub Vec<Column>);

impl TryFrom<&libsql::Row> for UserRow {
    type Error = libsql::Error;

    fn try_from(row: &libsql::Row) -> Result<Self, Self::Error> {
        (0..row.column_count())
            .map(|idx| row.get_value(idx).map(Column::from))
            .collect::<Result<Vec<_>, _>>()
            .map(UserRow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn columns_serialize_as_bare_values() {
        let row = UserRow(vec![
            Column::Integer(1),
            Column::Text("alice".to_string()),
            Column::Real(2.5),
            Column::Null,
            Column::Blob(vec![0, 255]),
        ]);
        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!([1, "alice", 2.5, null, [0, 255]])
        );
    }

    #[test]
    fn non_finite_reals_become_null() {
        assert_eq!(Column::from(libsql::Value::Real(f64::NAN)), Column::Null);
        assert_eq!(Column::from(libsql::Value::Real(f64::INFINITY)), Column::Null);
        assert_eq!(Column::from(libsql::Value::Real(-1.25)), Column::Real(-1.25));
    }
}
