use crate::domain::{Comment, NewComment, NewPost, NewUser, Post, User};
use crate::error::Result;
use async_trait::async_trait;

mod in_memory;
pub mod seed;

pub use in_memory::InMemoryStorage;

/// Storage trait for the user, post and comment collections
///
/// Reads never mutate. Each `create_*` performs its foreign-key or uniqueness
/// check and the append as one atomic step.
#[async_trait]
pub trait Storage: Send + Sync {
    // Collection listings
    async fn list_users(&self, query: Option<&str>) -> Result<Vec<User>>;
    async fn list_posts(&self, query: Option<&str>) -> Result<Vec<Post>>;
    async fn list_comments(&self) -> Result<Vec<Comment>>;

    // Single-record lookups
    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>>;
    async fn get_post_by_id(&self, id: &str) -> Result<Option<Post>>;

    // Relationship scans
    async fn get_posts_by_author(&self, user_id: &str) -> Result<Vec<Post>>;
    async fn get_comments_by_author(&self, user_id: &str) -> Result<Vec<Comment>>;
    async fn get_comments_by_post(&self, post_id: &str) -> Result<Vec<Comment>>;

    // Mutations
    async fn create_user(&self, user: NewUser) -> Result<User>;
    async fn create_post(&self, post: NewPost) -> Result<Post>;
    async fn create_comment(&self, comment: NewComment) -> Result<Comment>;
}
