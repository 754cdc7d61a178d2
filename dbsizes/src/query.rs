/// Schema name and data+index size in MB, one row per schema.
pub const SIZE_QUERY: &str = r#"SELECT table_schema AS "Database", ROUND(SUM(data_length + index_length) / 1024 / 1024, 2) AS "Size (MB)" FROM information_schema.tables GROUP BY table_schema;"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_groups_by_schema() {
        assert!(SIZE_QUERY.starts_with("SELECT table_schema AS \"Database\""));
        assert!(SIZE_QUERY.contains("SUM(data_length + index_length) / 1024 / 1024, 2"));
        assert!(SIZE_QUERY.ends_with("GROUP BY table_schema;"));
    }
}
