use super::{seed, Storage};
use crate::domain::{Comment, NewComment, NewPost, NewUser, Post, User};
use crate::error::{BlogError, Result};
use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};
use uuid::Uuid;

pub const EMAIL_TAKEN: &str = "Email taken.";
pub const USER_NOT_FOUND: &str = "User does not exist.";
pub const COMMENT_REJECTED: &str = "Unable to process the comment.";

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

/// In-memory storage; contents are lost when the process exits.
///
/// All three collections sit behind one lock so a mutation's foreign-key check
/// and its append see the same snapshot.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    inner: RwLock<Collections>,
}

impl InMemoryStorage {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the demo users, posts and comments
    pub fn with_seed_data() -> Self {
        Self::from_records(seed::users(), seed::posts(), seed::comments())
    }

    pub fn from_records(users: Vec<User>, posts: Vec<Post>, comments: Vec<Comment>) -> Self {
        debug!(
            "Loaded {} users, {} posts, {} comments",
            users.len(),
            posts.len(),
            comments.len()
        );
        Self {
            inner: RwLock::new(Collections {
                users,
                posts,
                comments,
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>> {
        self.inner
            .read()
            .map_err(|_| BlogError::Storage("collections lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>> {
        self.inner
            .write()
            .map_err(|_| BlogError::Storage("collections lock poisoned".to_string()))
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn list_users(&self, query: Option<&str>) -> Result<Vec<User>> {
        let data = self.read()?;
        let users: Vec<User> = match query {
            Some(q) if !q.is_empty() => {
                data.users.iter().filter(|u| u.matches(q)).cloned().collect()
            }
            _ => data.users.clone(),
        };
        Ok(users)
    }

    async fn list_posts(&self, query: Option<&str>) -> Result<Vec<Post>> {
        let data = self.read()?;
        let posts: Vec<Post> = match query {
            Some(q) if !q.is_empty() => {
                data.posts.iter().filter(|p| p.matches(q)).cloned().collect()
            }
            _ => data.posts.clone(),
        };
        Ok(posts)
    }

    async fn list_comments(&self) -> Result<Vec<Comment>> {
        Ok(self.read()?.comments.clone())
    }

    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(self.read()?.users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_post_by_id(&self, id: &str) -> Result<Option<Post>> {
        Ok(self.read()?.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn get_posts_by_author(&self, user_id: &str) -> Result<Vec<Post>> {
        let data = self.read()?;
        Ok(data.posts.iter().filter(|p| p.author == user_id).cloned().collect())
    }

    async fn get_comments_by_author(&self, user_id: &str) -> Result<Vec<Comment>> {
        let data = self.read()?;
        Ok(data
            .comments
            .iter()
            .filter(|c| c.author == user_id)
            .cloned()
            .collect())
    }

    async fn get_comments_by_post(&self, post_id: &str) -> Result<Vec<Comment>> {
        let data = self.read()?;
        Ok(data
            .comments
            .iter()
            .filter(|c| c.post == post_id)
            .cloned()
            .collect())
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        let mut data = self.write()?;
        if data.users.iter().any(|u| u.email == user.email) {
            warn!("Rejected user creation: email {} already registered", user.email);
            return Err(BlogError::validation(EMAIL_TAKEN));
        }

        let user = User {
            id: new_id(),
            name: user.name,
            email: user.email,
            age: user.age,
        };
        data.users.push(user.clone());

        debug!("Created user: {} with id {}", user.name, user.id);
        Ok(user)
    }

    async fn create_post(&self, post: NewPost) -> Result<Post> {
        let mut data = self.write()?;
        if !data.users.iter().any(|u| u.id == post.author) {
            warn!("Rejected post creation: unknown author {}", post.author);
            return Err(BlogError::validation(USER_NOT_FOUND));
        }

        let post = Post {
            id: new_id(),
            title: post.title,
            body: post.body,
            published: post.published,
            author: post.author,
        };
        data.posts.push(post.clone());

        debug!("Created post: {} with id {}", post.title, post.id);
        Ok(post)
    }

    async fn create_comment(&self, comment: NewComment) -> Result<Comment> {
        let mut data = self.write()?;
        let post_ok = data
            .posts
            .iter()
            .any(|p| p.id == comment.post && p.published);
        let author_ok = data.users.iter().any(|u| u.id == comment.author);
        if !post_ok || !author_ok {
            warn!(
                "Rejected comment: post {} published={}, author {} exists={}",
                comment.post, post_ok, comment.author, author_ok
            );
            return Err(BlogError::validation(COMMENT_REJECTED));
        }

        let comment = Comment {
            id: new_id(),
            text: comment.text,
            author: comment.author,
            post: comment.post,
        };
        data.comments.push(comment.clone());

        debug!("Created comment with id {} on post {}", comment.id, comment.post);
        Ok(comment)
    }
}
