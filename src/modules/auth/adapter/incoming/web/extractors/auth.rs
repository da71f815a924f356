use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::session_store::SessionStore;
use crate::shared::api::ApiResponse;

/// Name of the cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "session_id";

/// Request-scoped session identity. Extracting this type IS the session
/// guard: any handler that takes a `SessionUser` parameter rejects requests
/// without a live session before the handler body runs.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: Uuid,
    /// The raw token, kept so logout can revoke the exact session.
    pub session_token: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn session_required() -> ActixError {
    create_api_error(ApiResponse::unauthorized("SESSION_REQUIRED", "Login required"))
}

impl FromRequest for SessionUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let store = req
            .app_data::<web::Data<Arc<dyn SessionStore>>>()
            .map(|data| Arc::clone(data.get_ref()));

        let token = req
            .cookie(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string());

        Box::pin(async move {
            let store = match store {
                Some(store) => store,
                None => {
                    error!("SessionStore missing from app_data");
                    return Err(create_api_error(ApiResponse::internal_error()));
                }
            };

            let token = token.ok_or_else(session_required)?;

            match store.find_user(&token).await {
                Ok(Some(user_id)) => Ok(SessionUser {
                    user_id,
                    session_token: token,
                }),
                Ok(None) => Err(session_required()),
                Err(e) => {
                    error!(error = %e, "Session lookup failed");
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::session_store::SessionStoreError;
    use actix_web::{cookie::Cookie, test};
    use async_trait::async_trait;

    struct StubSessionStore {
        user: Option<Uuid>,
        should_fail: bool,
    }

    #[async_trait]
    impl SessionStore for StubSessionStore {
        async fn create_session(
            &self,
            _user_id: Uuid,
            _ttl_secs: u64,
        ) -> Result<String, SessionStoreError> {
            Ok("token".to_string())
        }

        async fn find_user(&self, _token: &str) -> Result<Option<Uuid>, SessionStoreError> {
            if self.should_fail {
                return Err(SessionStoreError::DatabaseError("redis down".to_string()));
            }
            Ok(self.user)
        }

        async fn revoke_session(&self, _token: &str) -> Result<(), SessionStoreError> {
            Ok(())
        }
    }

    fn store_data(user: Option<Uuid>, should_fail: bool) -> web::Data<Arc<dyn SessionStore>> {
        let store: Arc<dyn SessionStore> = Arc::new(StubSessionStore { user, should_fail });
        web::Data::new(store)
    }

    #[actix_web::test]
    async fn test_extract_valid_session() {
        let user_id = Uuid::new_v4();
        let req = test::TestRequest::default()
            .app_data(store_data(Some(user_id), false))
            .cookie(Cookie::new(SESSION_COOKIE, "tok-1"))
            .to_http_request();

        let result = SessionUser::from_request(&req, &mut Payload::None).await;

        let session = result.expect("expected a session user");
        assert_eq!(session.user_id, user_id);
        assert_eq!(session.session_token, "tok-1");
    }

    #[actix_web::test]
    async fn test_extract_missing_cookie() {
        let req = test::TestRequest::default()
            .app_data(store_data(Some(Uuid::new_v4()), false))
            .to_http_request();

        let result = SessionUser::from_request(&req, &mut Payload::None).await;

        assert!(result.is_err(), "Missing cookie must be rejected");
    }

    #[actix_web::test]
    async fn test_extract_unknown_token() {
        let req = test::TestRequest::default()
            .app_data(store_data(None, false))
            .cookie(Cookie::new(SESSION_COOKIE, "expired"))
            .to_http_request();

        let result = SessionUser::from_request(&req, &mut Payload::None).await;

        assert!(result.is_err(), "Unknown token must be rejected");
    }

    #[actix_web::test]
    async fn test_extract_store_failure() {
        let req = test::TestRequest::default()
            .app_data(store_data(Some(Uuid::new_v4()), true))
            .cookie(Cookie::new(SESSION_COOKIE, "tok-1"))
            .to_http_request();

        let result = SessionUser::from_request(&req, &mut Payload::None).await;

        assert!(result.is_err());
    }
}
