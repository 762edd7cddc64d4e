//! # Bearer Authorization
//!
//! Builds the `authorization` metadata forwarded by the hooks whose endpoints sit
//! behind the backend's auth interceptor.
//!
//! The token is read from [`LocalStorage`] at call time and forwarded verbatim. When
//! no token is stored the literal `null` is sent, mirroring what the dashboard has
//! always sent, so the backend answers with its own `UNAUTHENTICATED` status.
use crate::storage::{LocalStorage, TOKEN_KEY};
use std::str::FromStr;
use tonic::metadata::{Ascii, MetadataValue, errors::InvalidMetadataValue};

pub const AUTHORIZATION_KEY: &str = "authorization";

/// Renders the header value: `Bearer <token>`, or `Bearer null` when no token is stored.
pub fn bearer_value(storage: &dyn LocalStorage) -> String {
    let token = storage.get_item(TOKEN_KEY);
    format!("Bearer {}", token.as_deref().unwrap_or("null"))
}

/// Wraps `message` in a request carrying the bearer `authorization` metadata.
pub fn authorized<T>(
    message: T,
    storage: &dyn LocalStorage,
) -> Result<tonic::Request<T>, InvalidMetadataValue> {
    let value: MetadataValue<Ascii> = MetadataValue::from_str(&bearer_value(storage))?;

    let mut request = tonic::Request::new(message);
    request.metadata_mut().insert(AUTHORIZATION_KEY, value);
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn forwards_stored_token() {
        let storage = MemoryStorage::with_token("abc.def.ghi");
        let request = authorized((), &storage).unwrap();

        assert_eq!(
            request.metadata().get(AUTHORIZATION_KEY).unwrap(),
            "Bearer abc.def.ghi"
        );
    }

    #[test]
    fn missing_token_is_sent_as_null() {
        let storage = MemoryStorage::default();
        assert_eq!(bearer_value(&storage), "Bearer null");
    }

    #[test]
    fn rejects_token_that_is_not_a_header_value() {
        let storage = MemoryStorage::with_token("line\nbreak");
        assert!(authorized((), &storage).is_err());
    }
}
