/// Builds a [`Record`](crate::Record) from `key => value` pairs.
///
/// ```rust
/// use tabler::record;
///
/// let record = record! { "name" => "Alice", "role" => "admin" };
/// assert_eq!(record.get("role"), Some("admin"));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert($key, $value);
        )+
        record
    }};
}

/// Builds a [`Table`](crate::Table) from brace-delimited records.
///
/// ```rust
/// use tabler::table;
///
/// let table = table![
///     { "name" => "Alice" },
///     { "name" => "Bob", "role" => "user" },
/// ];
/// assert_eq!(table.len(), 2);
/// ```
#[macro_export]
macro_rules! table {
    () => {
        $crate::Table::new()
    };

    ($({ $($key:expr => $value:expr),* $(,)? }),+ $(,)?) => {{
        let mut table = $crate::Table::new();
        $(
            table.push($crate::record! { $($key => $value),* });
        )+
        table
    }};
}
