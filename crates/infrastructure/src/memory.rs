//! 内存存储
//!
//! 实现全部六个仓储接口，供本地开发（`storage = "memory"`）和 HTTP 测试使用。
//! 数据按插入顺序保存，读取时按日期稳定排序。

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use async_trait::async_trait;
use chrono::Utc;
use domain::{
    AddedComment, AddedReply, AddedThread, AuthenticationRepository, Comment, CommentId,
    CommentLike, CommentLikeCount, CommentRepository, LikeRepository, NewComment, NewReply,
    NewThread, NewUser, PasswordHash, RegisteredUser, Reply, ReplyId, ReplyRepository,
    RepositoryError, RepositoryResult, Thread, ThreadId, ThreadRepository, Timestamp, UserId,
    UserRepository,
};
use tokio::sync::RwLock;

use crate::id::{prefixed_id, IdGenerator};
use crate::repository::invalid_data;

#[derive(Debug, Clone)]
struct UserRow {
    id: UserId,
    username: String,
    password: PasswordHash,
    fullname: String,
}

#[derive(Debug, Clone)]
struct ThreadRow {
    id: ThreadId,
    title: String,
    body: String,
    user_id: UserId,
    date: Timestamp,
}

#[derive(Debug, Clone)]
struct CommentRow {
    id: CommentId,
    thread_id: ThreadId,
    user_id: UserId,
    content: String,
    date: Timestamp,
    is_deleted: bool,
}

#[derive(Debug, Clone)]
struct ReplyRow {
    id: ReplyId,
    comment_id: CommentId,
    user_id: UserId,
    content: String,
    date: Timestamp,
    is_deleted: bool,
}

#[derive(Debug, Default)]
struct State {
    users: Vec<UserRow>,
    tokens: HashSet<String>,
    threads: Vec<ThreadRow>,
    comments: Vec<CommentRow>,
    replies: Vec<ReplyRow>,
    likes: HashMap<CommentLike, String>,
}

impl State {
    fn username_of(&self, user_id: &UserId) -> RepositoryResult<String> {
        self.users
            .iter()
            .find(|user| &user.id == user_id)
            .map(|user| user.username.clone())
            .ok_or_else(|| invalid_data(format!("dangling user reference: {user_id}")))
    }

    fn user_exists(&self, user_id: &UserId) -> bool {
        self.users.iter().any(|user| &user.id == user_id)
    }
}

#[derive(Clone)]
pub struct InMemoryStorage {
    state: Arc<RwLock<State>>,
    id_generator: Arc<dyn IdGenerator>,
}

impl InMemoryStorage {
    pub fn new(id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            state: Arc::new(RwLock::new(State::default())),
            id_generator,
        }
    }

    fn next_id(&self, prefix: &str) -> String {
        prefixed_id(prefix, self.id_generator.as_ref())
    }
}

#[async_trait]
impl UserRepository for InMemoryStorage {
    async fn username_exists(&self, username: &str) -> RepositoryResult<bool> {
        let state = self.state.read().await;
        Ok(state.users.iter().any(|user| user.username == username))
    }

    async fn add_user(&self, user: &NewUser) -> RepositoryResult<RegisteredUser> {
        let mut state = self.state.write().await;
        if state
            .users
            .iter()
            .any(|existing| existing.username == user.username.as_str())
        {
            return Err(RepositoryError::Conflict);
        }

        let row = UserRow {
            id: UserId::from(self.next_id("user")),
            username: user.username.as_str().to_owned(),
            password: user.password.clone(),
            fullname: user.fullname.clone(),
        };
        let registered = RegisteredUser::new(row.id.clone(), row.username.clone(), row.fullname.clone())
            .map_err(|err| invalid_data(err.to_string()))?;
        state.users.push(row);
        Ok(registered)
    }

    async fn get_password_by_username(
        &self,
        username: &str,
    ) -> RepositoryResult<Option<PasswordHash>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .iter()
            .find(|user| user.username == username)
            .map(|user| user.password.clone()))
    }

    async fn get_id_by_username(&self, username: &str) -> RepositoryResult<Option<UserId>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .iter()
            .find(|user| user.username == username)
            .map(|user| user.id.clone()))
    }
}

#[async_trait]
impl AuthenticationRepository for InMemoryStorage {
    async fn add_token(&self, token: &str) -> RepositoryResult<()> {
        let mut state = self.state.write().await;
        if !state.tokens.insert(token.to_owned()) {
            return Err(RepositoryError::Conflict);
        }
        Ok(())
    }

    async fn token_exists(&self, token: &str) -> RepositoryResult<bool> {
        Ok(self.state.read().await.tokens.contains(token))
    }

    async fn delete_token(&self, token: &str) -> RepositoryResult<()> {
        self.state.write().await.tokens.remove(token);
        Ok(())
    }
}

#[async_trait]
impl ThreadRepository for InMemoryStorage {
    async fn add_thread(&self, thread: &NewThread) -> RepositoryResult<AddedThread> {
        let mut state = self.state.write().await;
        if !state.user_exists(&thread.owner) {
            return Err(invalid_data(format!("unknown user: {}", thread.owner)));
        }

        let row = ThreadRow {
            id: ThreadId::from(self.next_id("thread")),
            title: thread.title.clone(),
            body: thread.body.clone(),
            user_id: thread.owner.clone(),
            date: Utc::now(),
        };
        let added = AddedThread::new(row.id.clone(), row.title.clone(), row.user_id.clone())
            .map_err(|err| invalid_data(err.to_string()))?;
        state.threads.push(row);
        Ok(added)
    }

    async fn thread_exists(&self, thread_id: &ThreadId) -> RepositoryResult<bool> {
        let state = self.state.read().await;
        Ok(state.threads.iter().any(|thread| &thread.id == thread_id))
    }

    async fn get_thread_by_id(&self, thread_id: &ThreadId) -> RepositoryResult<Thread> {
        let state = self.state.read().await;
        let row = state
            .threads
            .iter()
            .find(|thread| &thread.id == thread_id)
            .ok_or(RepositoryError::NotFound)?;

        Ok(Thread {
            id: row.id.clone(),
            title: row.title.clone(),
            body: row.body.clone(),
            date: row.date,
            username: state.username_of(&row.user_id)?,
        })
    }
}

#[async_trait]
impl CommentRepository for InMemoryStorage {
    async fn add_comment(&self, comment: &NewComment) -> RepositoryResult<AddedComment> {
        let mut state = self.state.write().await;
        if !state.threads.iter().any(|thread| thread.id == comment.thread_id) {
            return Err(invalid_data(format!("unknown thread: {}", comment.thread_id)));
        }

        let row = CommentRow {
            id: CommentId::from(self.next_id("comment")),
            thread_id: comment.thread_id.clone(),
            user_id: comment.owner.clone(),
            content: comment.content.clone(),
            date: Utc::now(),
            is_deleted: false,
        };
        let added = AddedComment::new(row.id.clone(), row.content.clone(), row.user_id.clone())
            .map_err(|err| invalid_data(err.to_string()))?;
        state.comments.push(row);
        Ok(added)
    }

    async fn comment_exists(&self, comment_id: &CommentId) -> RepositoryResult<bool> {
        let state = self.state.read().await;
        Ok(state.comments.iter().any(|comment| &comment.id == comment_id))
    }

    async fn is_comment_owner(
        &self,
        comment_id: &CommentId,
        user_id: &UserId,
    ) -> RepositoryResult<bool> {
        let state = self.state.read().await;
        Ok(state
            .comments
            .iter()
            .any(|comment| &comment.id == comment_id && &comment.user_id == user_id))
    }

    async fn delete_comment(&self, comment_id: &CommentId) -> RepositoryResult<()> {
        let mut state = self.state.write().await;
        let comment = state
            .comments
            .iter_mut()
            .find(|comment| &comment.id == comment_id)
            .ok_or(RepositoryError::NotFound)?;
        comment.is_deleted = true;
        Ok(())
    }

    async fn get_comments_by_thread_ids(
        &self,
        thread_ids: &[ThreadId],
    ) -> RepositoryResult<Vec<Comment>> {
        let state = self.state.read().await;
        let mut comments = state
            .comments
            .iter()
            .filter(|comment| thread_ids.contains(&comment.thread_id))
            .map(|row| {
                Ok(Comment {
                    id: row.id.clone(),
                    thread_id: row.thread_id.clone(),
                    content: row.content.clone(),
                    date: row.date,
                    username: state.username_of(&row.user_id)?,
                    is_deleted: row.is_deleted,
                })
            })
            .collect::<RepositoryResult<Vec<_>>>()?;
        comments.sort_by_key(|comment| comment.date);
        Ok(comments)
    }
}

#[async_trait]
impl ReplyRepository for InMemoryStorage {
    async fn add_reply(&self, reply: &NewReply) -> RepositoryResult<AddedReply> {
        let mut state = self.state.write().await;
        if !state.comments.iter().any(|comment| comment.id == reply.comment_id) {
            return Err(invalid_data(format!("unknown comment: {}", reply.comment_id)));
        }

        let row = ReplyRow {
            id: ReplyId::from(self.next_id("reply")),
            comment_id: reply.comment_id.clone(),
            user_id: reply.owner.clone(),
            content: reply.content.clone(),
            date: Utc::now(),
            is_deleted: false,
        };
        let added = AddedReply::new(row.id.clone(), row.content.clone(), row.user_id.clone())
            .map_err(|err| invalid_data(err.to_string()))?;
        state.replies.push(row);
        Ok(added)
    }

    async fn reply_exists(&self, reply_id: &ReplyId) -> RepositoryResult<bool> {
        let state = self.state.read().await;
        Ok(state.replies.iter().any(|reply| &reply.id == reply_id))
    }

    async fn is_reply_owner(
        &self,
        reply_id: &ReplyId,
        user_id: &UserId,
    ) -> RepositoryResult<bool> {
        let state = self.state.read().await;
        Ok(state
            .replies
            .iter()
            .any(|reply| &reply.id == reply_id && &reply.user_id == user_id))
    }

    async fn delete_reply(&self, reply_id: &ReplyId) -> RepositoryResult<()> {
        let mut state = self.state.write().await;
        let reply = state
            .replies
            .iter_mut()
            .find(|reply| &reply.id == reply_id)
            .ok_or(RepositoryError::NotFound)?;
        reply.is_deleted = true;
        Ok(())
    }

    async fn get_replies_by_comment_ids(
        &self,
        comment_ids: &[CommentId],
    ) -> RepositoryResult<Vec<Reply>> {
        let state = self.state.read().await;
        let mut replies = state
            .replies
            .iter()
            .filter(|reply| comment_ids.contains(&reply.comment_id))
            .map(|row| {
                Ok(Reply {
                    id: row.id.clone(),
                    comment_id: row.comment_id.clone(),
                    content: row.content.clone(),
                    date: row.date,
                    username: state.username_of(&row.user_id)?,
                    is_deleted: row.is_deleted,
                })
            })
            .collect::<RepositoryResult<Vec<_>>>()?;
        replies.sort_by_key(|reply| reply.date);
        Ok(replies)
    }
}

#[async_trait]
impl LikeRepository for InMemoryStorage {
    async fn like_comment(&self, like: &CommentLike) -> RepositoryResult<()> {
        let mut state = self.state.write().await;
        if state.likes.contains_key(like) {
            return Err(RepositoryError::Conflict);
        }
        let id = self.next_id("like");
        state.likes.insert(like.clone(), id);
        Ok(())
    }

    async fn unlike_comment(&self, like: &CommentLike) -> RepositoryResult<()> {
        self.state.write().await.likes.remove(like);
        Ok(())
    }

    async fn is_comment_liked(&self, like: &CommentLike) -> RepositoryResult<bool> {
        Ok(self.state.read().await.likes.contains_key(like))
    }

    async fn get_like_counts_by_comment_ids(
        &self,
        comment_ids: &[CommentId],
    ) -> RepositoryResult<Vec<CommentLikeCount>> {
        let state = self.state.read().await;
        let mut counts: HashMap<&CommentId, u64> = HashMap::new();
        for like in state.likes.keys() {
            if comment_ids.contains(&like.comment_id) {
                *counts.entry(&like.comment_id).or_default() += 1;
            }
        }
        Ok(counts
            .into_iter()
            .map(|(comment_id, like_count)| CommentLikeCount {
                comment_id: comment_id.clone(),
                like_count,
            })
            .collect())
    }
}
