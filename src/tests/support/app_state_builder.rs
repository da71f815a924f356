use crate::auth::application::use_cases::{
    login_user::ILoginUserUseCase, logout_user::ILogoutUseCase,
    register_user::IRegisterUserUseCase,
};
use crate::post::application::use_cases::{
    create_post::ICreatePostUseCase, delete_post::IDeletePostUseCase, get_feed::IGetFeedUseCase,
    get_own_posts::IGetOwnPostsUseCase, update_post::IUpdatePostUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    register_user: Option<Arc<dyn IRegisterUserUseCase + Send + Sync>>,
    login_user: Option<Arc<dyn ILoginUserUseCase + Send + Sync>>,
    logout_user: Option<Arc<dyn ILogoutUseCase + Send + Sync>>,
    get_feed: Option<Arc<dyn IGetFeedUseCase + Send + Sync>>,
    get_own_posts: Option<Arc<dyn IGetOwnPostsUseCase + Send + Sync>>,
    create_post: Option<Arc<dyn ICreatePostUseCase + Send + Sync>>,
    update_post: Option<Arc<dyn IUpdatePostUseCase + Send + Sync>>,
    delete_post: Option<Arc<dyn IDeletePostUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Some(Arc::new(StubRegisterUserUseCase::succeeding())),
            login_user: Some(Arc::new(StubLoginUserUseCase::succeeding("stub-token"))),
            logout_user: Some(Arc::new(StubLogoutUseCase::succeeding())),
            get_feed: Some(Arc::new(StubGetFeedUseCase::succeeding(vec![]))),
            get_own_posts: Some(Arc::new(StubGetOwnPostsUseCase::succeeding(vec![]))),
            create_post: Some(Arc::new(StubCreatePostUseCase::failing(
                crate::post::application::use_cases::create_post::CreatePostError::RepositoryError(
                    "not used in this test".to_string(),
                ),
            ))),
            update_post: Some(Arc::new(StubUpdatePostUseCase::failing(
                crate::post::application::use_cases::update_post::UpdatePostError::NotFound,
            ))),
            delete_post: Some(Arc::new(StubDeletePostUseCase::succeeding())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    ) -> Self {
        self.register_user = Some(uc);
        self
    }

    pub fn with_login_user(mut self, uc: Arc<dyn ILoginUserUseCase + Send + Sync>) -> Self {
        self.login_user = Some(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: Arc<dyn ILogoutUseCase + Send + Sync>) -> Self {
        self.logout_user = Some(uc);
        self
    }

    pub fn with_get_feed(mut self, uc: Arc<dyn IGetFeedUseCase + Send + Sync>) -> Self {
        self.get_feed = Some(uc);
        self
    }

    pub fn with_get_own_posts(mut self, uc: Arc<dyn IGetOwnPostsUseCase + Send + Sync>) -> Self {
        self.get_own_posts = Some(uc);
        self
    }

    pub fn with_create_post(mut self, uc: Arc<dyn ICreatePostUseCase + Send + Sync>) -> Self {
        self.create_post = Some(uc);
        self
    }

    pub fn with_update_post(mut self, uc: Arc<dyn IUpdatePostUseCase + Send + Sync>) -> Self {
        self.update_post = Some(uc);
        self
    }

    pub fn with_delete_post(mut self, uc: Arc<dyn IDeletePostUseCase + Send + Sync>) -> Self {
        self.delete_post = Some(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user.unwrap(),
            login_user_use_case: self.login_user.unwrap(),
            logout_use_case: self.logout_user.unwrap(),
            get_feed_use_case: self.get_feed.unwrap(),
            get_own_posts_use_case: self.get_own_posts.unwrap(),
            create_post_use_case: self.create_post.unwrap(),
            update_post_use_case: self.update_post.unwrap(),
            delete_post_use_case: self.delete_post.unwrap(),
        })
    }
}
