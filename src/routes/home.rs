//! Root page handler.

/// Fixed greeting served at `/`.
pub const GREETING: &str = "Test server is running!";

/// Home page handler. Plain text, no templating.
pub async fn index() -> &'static str {
    GREETING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn index_returns_greeting() {
        assert_eq!(index().await, "Test server is running!");
    }
}
