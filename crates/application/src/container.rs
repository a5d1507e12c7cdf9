//! 用例容器
//!
//! 启动时一次性构造所有用例，之后以 `Arc<UseCases>` 的形式在请求间共享。

use std::sync::Arc;

use domain::{
    AuthenticationRepository, CommentRepository, LikeRepository, ReplyRepository,
    ThreadRepository, UserRepository,
};

use crate::{
    password::PasswordHasher,
    token::AuthenticationTokenManager,
    use_cases::{
        AddCommentUseCase, AddReplyUseCase, AddThreadUseCase, AddUserUseCase,
        DeleteAuthenticationUseCase, DeleteCommentUseCase, DeleteReplyUseCase,
        DetailThreadUseCase, LikeCommentUseCase, LoginUserUseCase, RefreshAuthenticationUseCase,
    },
};

#[derive(Clone)]
pub struct UseCaseDependencies {
    pub thread_repository: Arc<dyn ThreadRepository>,
    pub comment_repository: Arc<dyn CommentRepository>,
    pub reply_repository: Arc<dyn ReplyRepository>,
    pub like_repository: Arc<dyn LikeRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub authentication_repository: Arc<dyn AuthenticationRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn AuthenticationTokenManager>,
}

pub struct UseCases {
    pub add_user: AddUserUseCase,
    pub login_user: LoginUserUseCase,
    pub refresh_authentication: RefreshAuthenticationUseCase,
    pub delete_authentication: DeleteAuthenticationUseCase,
    pub add_thread: AddThreadUseCase,
    pub detail_thread: DetailThreadUseCase,
    pub add_comment: AddCommentUseCase,
    pub delete_comment: DeleteCommentUseCase,
    pub add_reply: AddReplyUseCase,
    pub delete_reply: DeleteReplyUseCase,
    pub like_comment: LikeCommentUseCase,
}

impl UseCases {
    pub fn new(deps: UseCaseDependencies) -> Self {
        let UseCaseDependencies {
            thread_repository: threads,
            comment_repository: comments,
            reply_repository: replies,
            like_repository: likes,
            user_repository: users,
            authentication_repository: authentications,
            password_hasher,
            token_manager,
        } = deps;

        Self {
            add_user: AddUserUseCase::new(users.clone(), password_hasher.clone()),
            login_user: LoginUserUseCase::new(
                users,
                authentications.clone(),
                password_hasher,
                token_manager.clone(),
            ),
            refresh_authentication: RefreshAuthenticationUseCase::new(
                authentications.clone(),
                token_manager,
            ),
            delete_authentication: DeleteAuthenticationUseCase::new(authentications),
            add_thread: AddThreadUseCase::new(threads.clone()),
            detail_thread: DetailThreadUseCase::new(
                threads.clone(),
                comments.clone(),
                replies.clone(),
                likes.clone(),
            ),
            add_comment: AddCommentUseCase::new(threads.clone(), comments.clone()),
            delete_comment: DeleteCommentUseCase::new(threads.clone(), comments.clone()),
            add_reply: AddReplyUseCase::new(threads.clone(), comments.clone(), replies.clone()),
            delete_reply: DeleteReplyUseCase::new(threads.clone(), comments.clone(), replies),
            like_comment: LikeCommentUseCase::new(threads, comments, likes),
        }
    }
}
