use crate::domain::{NewComment, NewPost, NewUser};
use async_graphql::{InputObject, ID};

#[derive(InputObject, Debug, Clone)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

#[derive(InputObject, Debug, Clone)]
pub struct CreatePostInput {
    pub title: String,
    pub body: String,
    /// Defaults to `false` when omitted
    pub published: Option<bool>,
    pub author: ID,
}

#[derive(InputObject, Debug, Clone)]
pub struct CreateCommentInput {
    pub text: String,
    pub author: ID,
    pub post: ID,
}

impl From<CreateUserInput> for NewUser {
    fn from(input: CreateUserInput) -> Self {
        NewUser {
            name: input.name,
            email: input.email,
            age: input.age,
        }
    }
}

impl From<CreatePostInput> for NewPost {
    fn from(input: CreatePostInput) -> Self {
        NewPost {
            title: input.title,
            body: input.body,
            published: input.published.unwrap_or(false),
            author: input.author.0,
        }
    }
}

impl From<CreateCommentInput> for NewComment {
    fn from(input: CreateCommentInput) -> Self {
        NewComment {
            text: input.text,
            author: input.author.0,
            post: input.post.0,
        }
    }
}
