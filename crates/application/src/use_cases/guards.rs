//! 各用例共享的存在性与所有权检查

use domain::{
    CommentId, CommentRepository, DomainError, ReplyId, ReplyRepository, ThreadId,
    ThreadRepository, UserId,
};

use crate::error::ApplicationError;

pub(crate) async fn ensure_thread_exists(
    threads: &dyn ThreadRepository,
    thread_id: &ThreadId,
) -> Result<(), ApplicationError> {
    if !threads.thread_exists(thread_id).await? {
        return Err(DomainError::ThreadNotFound.into());
    }
    Ok(())
}

pub(crate) async fn ensure_comment_exists(
    comments: &dyn CommentRepository,
    comment_id: &CommentId,
) -> Result<(), ApplicationError> {
    if !comments.comment_exists(comment_id).await? {
        return Err(DomainError::CommentNotFound.into());
    }
    Ok(())
}

pub(crate) async fn ensure_comment_owner(
    comments: &dyn CommentRepository,
    comment_id: &CommentId,
    user_id: &UserId,
) -> Result<(), ApplicationError> {
    if !comments.is_comment_owner(comment_id, user_id).await? {
        return Err(DomainError::CommentNotOwner.into());
    }
    Ok(())
}

pub(crate) async fn ensure_reply_exists(
    replies: &dyn ReplyRepository,
    reply_id: &ReplyId,
) -> Result<(), ApplicationError> {
    if !replies.reply_exists(reply_id).await? {
        return Err(DomainError::ReplyNotFound.into());
    }
    Ok(())
}

pub(crate) async fn ensure_reply_owner(
    replies: &dyn ReplyRepository,
    reply_id: &ReplyId,
    user_id: &UserId,
) -> Result<(), ApplicationError> {
    if !replies.is_reply_owner(reply_id, user_id).await? {
        return Err(DomainError::ReplyNotOwner.into());
    }
    Ok(())
}
