//! Built-in demo tools.
//!
//! The demo agent advertises two capabilities: current date/time and weather
//! lookup. Each tool is constructed via [`AgentTool::new`] and returned as
//! `Arc<dyn Tool>`.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::tools::tool::{AgentTool, Tool, ToolExecutionContext};
use crate::tools::types::ToolParameters;

/// Create the `current_time` tool — returns the current UTC instant.
pub fn current_time_tool() -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        "current_time",
        "Get the current date and time in UTC",
        ToolParameters::empty(),
        |_args, _ctx: ToolExecutionContext| async move {
            let now = Utc::now();
            Ok(json!({
                "iso8601": now.to_rfc3339(),
                "date": now.format("%Y-%m-%d").to_string(),
                "time": now.format("%H:%M:%S").to_string(),
            }))
        },
    ))
}

/// Create the `get_weather` tool — canned demo weather keyed by city.
///
/// The demo has no upstream weather service; conditions are derived from the
/// city name so repeated calls stay deterministic.
pub fn weather_tool() -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        "get_weather",
        "Get the current weather for a city",
        ToolParameters::object()
            .string("city", "Name of the city to look up", true)
            .build(),
        |args, _ctx: ToolExecutionContext| async move {
            let city = args.get_str("city")?;
            let conditions = ["sunny", "cloudy", "rainy", "windy"];
            let index = city.len() % conditions.len();
            let temperature_c = 10 + (city.len() % 20) as i32;
            Ok(json!({
                "city": city,
                "condition": conditions[index],
                "temperature_c": temperature_c,
            }))
        },
    ))
}

/// All built-in demo tools.
pub fn all_tools() -> Vec<Arc<dyn Tool>> {
    vec![current_time_tool(), weather_tool()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolArguments;

    #[tokio::test]
    async fn current_time_returns_iso8601() {
        let tool = current_time_tool();
        let result = tool
            .execute(&ToolArguments::default(), &ToolExecutionContext::default())
            .await
            .unwrap();
        let iso = result["iso8601"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(iso).is_ok());
    }

    #[tokio::test]
    async fn weather_requires_city() {
        let tool = weather_tool();
        let err = tool
            .execute(&ToolArguments::default(), &ToolExecutionContext::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("city"));
    }

    #[tokio::test]
    async fn weather_is_deterministic_per_city() {
        let tool = weather_tool();
        let args = ToolArguments::new(serde_json::json!({ "city": "Tokyo" }));
        let first = tool.execute(&args, &ToolExecutionContext::default()).await.unwrap();
        let second = tool.execute(&args, &ToolExecutionContext::default()).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first["city"], "Tokyo");
    }

    #[test]
    fn all_tools_exposes_both_capabilities() {
        let tools = all_tools();
        let names: Vec<&str> = tools.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["current_time", "get_weather"]);
    }
}
