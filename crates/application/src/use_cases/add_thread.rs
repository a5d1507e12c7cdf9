use std::sync::Arc;

use domain::{AddedThread, NewThread, ThreadRepository, UserId};

use crate::error::ApplicationError;

#[derive(Debug, Clone)]
pub struct AddThreadCommand {
    pub title: String,
    pub body: String,
    pub owner: UserId,
}

pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    pub async fn execute(&self, command: AddThreadCommand) -> Result<AddedThread, ApplicationError> {
        let new_thread = NewThread::new(command.title, command.body, command.owner)?;
        let added = self.thread_repository.add_thread(&new_thread).await?;
        tracing::debug!(thread_id = %added.id, owner = %added.owner, "thread added");
        Ok(added)
    }
}
