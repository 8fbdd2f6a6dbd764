pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
        assert_eq!(serde_json::to_string(&h).unwrap(), r#"{"status":"ok"}"#);
    }

    #[test]
    fn count_serializes_as_object() {
        let c = types::CountResponse { count: 3 };
        assert_eq!(serde_json::to_value(&c).unwrap(), serde_json::json!({"count": 3}));
    }

    #[test]
    fn log_format_parsing() {
        use utils::logging::LogFormat;
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::parse(""), LogFormat::Compact);
    }
}
