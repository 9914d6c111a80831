//! Helpers shared by the tool modules.

/// Runs a blocking CSV operation on the worker pool.
///
/// The tool surface never raises, so even a join failure is reported
/// through the text contract.
pub(crate) async fn run_blocking<F>(task: F) -> String
where
    F: FnOnce() -> String + Send + 'static,
{
    match tokio::task::spawn_blocking(task).await {
        Ok(text) => text,
        Err(err) => format!("Error running CSV operation: {err}"),
    }
}

/// Text form of a JSON comparison value: strings pass through without
/// quotes, everything else uses its JSON rendering.
pub(crate) fn value_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_are_unquoted_and_numbers_keep_their_json_form() {
        assert_eq!(value_text(&json!("NYC")), "NYC");
        assert_eq!(value_text(&json!(30)), "30");
        assert_eq!(value_text(&json!(2.5)), "2.5");
        assert_eq!(value_text(&json!(true)), "true");
    }
}
