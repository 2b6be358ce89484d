//! In-memory App-Token storage with expiry tracking.
//!
//! A client memoizes exactly one App-Token. The store remembers when that
//! token expires if the expiry was reported by the token-id response.

use std::fmt;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// The memoized App-Token.
#[derive(Clone, PartialEq, Eq)]
pub struct AppToken {
    /// The App-Token value.
    pub token: String,
    /// When the token expires, if known.
    pub expires_at: Option<DateTime<Utc>>,
}

impl AppToken {
    /// Creates a token with unknown expiry.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expires_at: None,
        }
    }

    /// Seconds until expiry at `now`, or None if the expiry is unknown.
    #[must_use]
    pub fn seconds_until_expiry(&self, now: DateTime<Utc>) -> Option<i64> {
        self.expires_at.map(|at| (at - now).num_seconds())
    }
}

impl fmt::Debug for AppToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppToken")
            .field("token", &token_preview(&self.token))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Get a preview of a token (first 8 chars + ...).
#[must_use]
pub fn token_preview(token: &str) -> String {
    if token.chars().count() > 12 {
        format!("{}...", token.chars().take(8).collect::<String>())
    } else {
        token.to_string()
    }
}

/// Thread-safe single-slot token store.
#[derive(Default)]
pub struct TokenStore {
    slot: RwLock<Option<AppToken>>,
}

impl TokenStore {
    /// Create an empty token store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the memoized token value, if any.
    pub async fn get(&self) -> Option<String> {
        self.slot.read().await.as_ref().map(|t| t.token.clone())
    }

    /// Get the memoized token with its expiry.
    pub async fn current(&self) -> Option<AppToken> {
        self.slot.read().await.clone()
    }

    /// Replace the memoized token. `None` empties the store.
    ///
    /// The expiry of the previous token is discarded.
    pub async fn replace(&self, token: Option<String>) {
        let mut slot = self.slot.write().await;
        *slot = token.map(AppToken::new);
    }

    /// Record the expiry of the memoized token. Ignored if the store is empty.
    pub async fn set_expiry(&self, expires_at: Option<DateTime<Utc>>) {
        if let Some(token) = self.slot.write().await.as_mut() {
            token.expires_at = expires_at;
        }
    }

    /// Returns true if a token is memoized.
    pub async fn is_set(&self) -> bool {
        self.slot.read().await.is_some()
    }

    /// Get the token status at `now`.
    pub async fn status_at(&self, now: DateTime<Utc>) -> TokenStatus {
        self.slot
            .read()
            .await
            .as_ref()
            .map_or(TokenStatus::NotAuthenticated, |token| {
                match token.seconds_until_expiry(now) {
                    Some(secs) if secs <= 0 => TokenStatus::Expired,
                    seconds_remaining => TokenStatus::Valid { seconds_remaining },
                }
            })
    }
}

impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.try_read().map(|slot| slot.clone());
        match slot {
            Ok(token) => f.debug_struct("TokenStore").field("token", &token).finish(),
            Err(_) => f.debug_struct("TokenStore").finish_non_exhaustive(),
        }
    }
}

/// Status of the memoized App-Token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStatus {
    /// No token is memoized.
    NotAuthenticated,
    /// Token is memoized and not known to be expired.
    Valid {
        /// Seconds until expiry, or None if the expiry is unknown.
        seconds_remaining: Option<i64>,
    },
    /// Token is past its reported expiry.
    Expired,
}

impl TokenStatus {
    /// Returns true if the token is valid (not expired).
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// Get a user-friendly display message.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::NotAuthenticated => "Not authenticated".to_string(),
            Self::Valid {
                seconds_remaining: Some(secs),
            } => {
                if *secs > 3600 {
                    format!("Valid for {} hours", secs / 3600)
                } else if *secs > 60 {
                    format!("Valid for {} minutes", secs / 60)
                } else {
                    format!("Valid for {secs} seconds")
                }
            }
            Self::Valid {
                seconds_remaining: None,
            } => "Valid (expiry unknown)".to_string(),
            Self::Expired => "Expired".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_replace_and_get() {
        let store = TokenStore::new();
        assert!(store.get().await.is_none());

        store.replace(Some("access123".to_string())).await;
        assert_eq!(store.get().await.as_deref(), Some("access123"));
        assert!(store.is_set().await);

        store.replace(None).await;
        assert!(!store.is_set().await);
    }

    #[tokio::test]
    async fn test_set_expiry_requires_token() {
        let store = TokenStore::new();
        let at = Utc.with_ymd_and_hms(2015, 1, 3, 21, 30, 57).unwrap();

        store.set_expiry(Some(at)).await;
        assert!(store.current().await.is_none());

        store.replace(Some("abc".to_string())).await;
        store.set_expiry(Some(at)).await;
        assert_eq!(store.current().await.unwrap().expires_at, Some(at));
    }

    #[tokio::test]
    async fn test_replace_discards_expiry() {
        let store = TokenStore::new();
        store.replace(Some("abc".to_string())).await;
        store.set_expiry(Some(Utc::now())).await;

        store.replace(Some("def".to_string())).await;
        assert_eq!(store.current().await, Some(AppToken::new("def")));
    }

    #[tokio::test]
    async fn test_status() {
        let store = TokenStore::new();
        let now = Utc.with_ymd_and_hms(2015, 1, 3, 12, 0, 0).unwrap();
        assert_eq!(store.status_at(now).await, TokenStatus::NotAuthenticated);

        store.replace(Some("abc".to_string())).await;
        assert_eq!(
            store.status_at(now).await,
            TokenStatus::Valid {
                seconds_remaining: None
            }
        );

        store.set_expiry(Some(now + Duration::hours(2))).await;
        assert_eq!(
            store.status_at(now).await,
            TokenStatus::Valid {
                seconds_remaining: Some(7200)
            }
        );

        assert_eq!(
            store.status_at(now + Duration::hours(3)).await,
            TokenStatus::Expired
        );
    }

    #[test]
    fn test_token_preview() {
        assert_eq!(token_preview("3c022dbd-0a82-4382"), "3c022dbd...");
        assert_eq!(token_preview("short"), "short");
    }

    #[test]
    fn test_debug_hides_token() {
        let token = AppToken::new("3c022dbd-0a82-4382-bd0d-5af6e11b8d67");
        let printed = format!("{token:?}");
        assert!(!printed.contains("5af6e11b8d67"));
    }

    #[test]
    fn test_status_display_messages() {
        assert_eq!(
            TokenStatus::NotAuthenticated.display_message(),
            "Not authenticated"
        );
        assert!(
            TokenStatus::Valid {
                seconds_remaining: Some(7200)
            }
            .display_message()
            .contains("hours")
        );
        assert_eq!(TokenStatus::Expired.display_message(), "Expired");
    }
}
