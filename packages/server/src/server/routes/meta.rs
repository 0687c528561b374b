//! Liveness and utility endpoints.

use axum::Json;

use extraction::USER_AGENTS;

/// Wake the service. Used for cold-start warmup on hosts that sleep
/// idle instances; involves no downstream work.
pub async fn wake_handler() -> Json<bool> {
    Json(true)
}

/// Example User-Agent strings that can be passed to the data endpoints.
pub async fn user_agents_handler() -> Json<Vec<&'static str>> {
    Json(USER_AGENTS.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_wake_always_succeeds() {
        let Json(alive) = wake_handler().await;
        assert!(alive);
    }

    #[tokio::test]
    async fn test_user_agents_is_a_non_empty_string_list() {
        let Json(agents) = user_agents_handler().await;
        assert!(!agents.is_empty());
        assert!(agents.iter().all(|ua| ua.starts_with("Mozilla/5.0")));
    }
}
