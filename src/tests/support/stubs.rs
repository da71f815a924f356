use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::session_store::{SessionStore, SessionStoreError};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse, UserInfo,
};
use crate::auth::application::use_cases::logout_user::{ILogoutUseCase, LogoutError};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterRequest, RegisterUserError, RegisteredUser,
};
use crate::post::application::ports::outgoing::post_query::{FeedItem, OwnPostItem};
use crate::post::application::ports::outgoing::post_repository::PostResult;
use crate::post::application::use_cases::create_post::{
    CreatePostError, ICreatePostUseCase, PostDraft,
};
use crate::post::application::use_cases::delete_post::{DeletePostError, IDeletePostUseCase};
use crate::post::application::use_cases::get_feed::{GetFeedError, IGetFeedUseCase};
use crate::post::application::use_cases::get_own_posts::{GetOwnPostsError, IGetOwnPostsUseCase};
use crate::post::application::use_cases::update_post::{IUpdatePostUseCase, UpdatePostError};

// ============================== Auth stubs ==============================

pub struct StubRegisterUserUseCase {
    result: Result<RegisteredUser, RegisterUserError>,
}

impl StubRegisterUserUseCase {
    pub fn succeeding() -> Self {
        Self {
            result: Ok(RegisteredUser {
                id: Uuid::new_v4(),
                name: "Alice Doe".to_string(),
                email: "alice@example.com".to_string(),
                username: "alice".to_string(),
            }),
        }
    }

    pub fn failing(err: RegisterUserError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _request: RegisterRequest) -> Result<RegisteredUser, RegisterUserError> {
        self.result.clone()
    }
}

pub struct StubLoginUserUseCase {
    result: Result<LoginUserResponse, LoginError>,
}

impl StubLoginUserUseCase {
    pub fn succeeding(token: &str) -> Self {
        Self {
            result: Ok(LoginUserResponse {
                session_token: token.to_string(),
                user: UserInfo {
                    id: Uuid::new_v4(),
                    name: "Alice Doe".to_string(),
                    username: "alice".to_string(),
                    email: "alice@example.com".to_string(),
                },
            }),
        }
    }

    pub fn failing(err: LoginError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        self.result.clone()
    }
}

/// Succeeds unless a failing variant is swapped in.
pub struct StubLogoutUseCase {
    result: Result<(), LogoutError>,
}

impl StubLogoutUseCase {
    pub fn succeeding() -> Self {
        Self { result: Ok(()) }
    }

    pub fn failing(err: LogoutError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ILogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _session_token: &str) -> Result<(), LogoutError> {
        self.result.clone()
    }
}

/// Session lookups resolve to a fixed user (or nothing); creates and revokes
/// always succeed.
pub struct StubSessionStore {
    user: Option<Uuid>,
}

impl StubSessionStore {
    pub fn new(user: Option<Uuid>) -> Self {
        Self { user }
    }

    /// App data ready to register, shaped the way handlers resolve the store.
    pub fn data_with_user(user: Option<Uuid>) -> web::Data<Arc<dyn SessionStore>> {
        let store: Arc<dyn SessionStore> = Arc::new(Self::new(user));
        web::Data::new(store)
    }
}

#[async_trait]
impl SessionStore for StubSessionStore {
    async fn create_session(
        &self,
        _user_id: Uuid,
        _ttl_secs: u64,
    ) -> Result<String, SessionStoreError> {
        Ok("stub-token".to_string())
    }

    async fn find_user(&self, _token: &str) -> Result<Option<Uuid>, SessionStoreError> {
        Ok(self.user)
    }

    async fn revoke_session(&self, _token: &str) -> Result<(), SessionStoreError> {
        Ok(())
    }
}

// ============================== Post stubs ==============================

pub struct StubGetFeedUseCase {
    result: Result<Vec<FeedItem>, GetFeedError>,
}

impl StubGetFeedUseCase {
    pub fn succeeding(items: Vec<FeedItem>) -> Self {
        Self { result: Ok(items) }
    }

    pub fn failing(err: GetFeedError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl IGetFeedUseCase for StubGetFeedUseCase {
    async fn execute(&self) -> Result<Vec<FeedItem>, GetFeedError> {
        self.result.clone()
    }
}

pub struct StubGetOwnPostsUseCase {
    result: Result<Vec<OwnPostItem>, GetOwnPostsError>,
}

impl StubGetOwnPostsUseCase {
    pub fn succeeding(items: Vec<OwnPostItem>) -> Self {
        Self { result: Ok(items) }
    }

    pub fn failing(err: GetOwnPostsError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl IGetOwnPostsUseCase for StubGetOwnPostsUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<OwnPostItem>, GetOwnPostsError> {
        self.result.clone()
    }
}

pub struct StubCreatePostUseCase {
    result: Result<PostResult, CreatePostError>,
}

impl StubCreatePostUseCase {
    pub fn succeeding(post: PostResult) -> Self {
        Self { result: Ok(post) }
    }

    pub fn failing(err: CreatePostError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ICreatePostUseCase for StubCreatePostUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _draft: PostDraft,
    ) -> Result<PostResult, CreatePostError> {
        self.result.clone()
    }
}

pub struct StubUpdatePostUseCase {
    result: Result<PostResult, UpdatePostError>,
}

impl StubUpdatePostUseCase {
    pub fn succeeding(post: PostResult) -> Self {
        Self { result: Ok(post) }
    }

    pub fn failing(err: UpdatePostError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl IUpdatePostUseCase for StubUpdatePostUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _post_id: Uuid,
        _draft: PostDraft,
    ) -> Result<PostResult, UpdatePostError> {
        self.result.clone()
    }
}

pub struct StubDeletePostUseCase {
    result: Result<(), DeletePostError>,
}

impl StubDeletePostUseCase {
    pub fn succeeding() -> Self {
        Self { result: Ok(()) }
    }

    pub fn failing(err: DeletePostError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl IDeletePostUseCase for StubDeletePostUseCase {
    async fn execute(&self, _owner: UserId, _post_id: Uuid) -> Result<(), DeletePostError> {
        self.result.clone()
    }
}
