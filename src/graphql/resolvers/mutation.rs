use crate::domain::{NewComment, NewPost, NewUser};
use crate::error::BlogError;
use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::{
    Comment, CreateCommentInput, CreatePostInput, CreateUserInput, Post, User,
};
use crate::observability::metrics;
use async_graphql::{Context, ErrorExtensions, FieldResult, Object};
use tracing::info;

/// Root mutation object for GraphQL
pub struct Mutation;

/// Counts rejected input before handing the error to the client
fn rejected(mutation: &'static str, err: BlogError) -> async_graphql::Error {
    if matches!(err, BlogError::Validation(_)) {
        metrics::record_validation_failure(mutation);
    }
    err.extend()
}

#[Object]
impl Mutation {
    /// Register a new user. Fails with "Email taken." if the email is already in use.
    async fn create_user(&self, ctx: &Context<'_>, data: CreateUserInput) -> FieldResult<User> {
        let context = ctx.data::<GraphQLContext>()?;
        let new_user = NewUser::from(data);

        match context.storage.create_user(new_user).await {
            Ok(user) => {
                metrics::record_created(metrics::Entity::User);
                info!("Created user: {} (ID: {})", user.name, user.id);
                Ok(user.into())
            }
            Err(e) => Err(rejected("createUser", e)),
        }
    }

    /// Publish or draft a post. Fails with "User does not exist." for an unknown author.
    async fn create_post(&self, ctx: &Context<'_>, data: CreatePostInput) -> FieldResult<Post> {
        let context = ctx.data::<GraphQLContext>()?;
        let new_post = NewPost::from(data);

        match context.storage.create_post(new_post).await {
            Ok(post) => {
                metrics::record_created(metrics::Entity::Post);
                info!("Created post: {} (ID: {})", post.title, post.id);
                Ok(post.into())
            }
            Err(e) => Err(rejected("createPost", e)),
        }
    }

    /// Comment on a published post. Fails with "Unable to process the comment."
    /// when the post is missing or unpublished, or the author is unknown.
    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        data: CreateCommentInput,
    ) -> FieldResult<Comment> {
        let context = ctx.data::<GraphQLContext>()?;
        let new_comment = NewComment::from(data);

        match context.storage.create_comment(new_comment).await {
            Ok(comment) => {
                metrics::record_created(metrics::Entity::Comment);
                info!("Created comment {} on post {}", comment.id, comment.post);
                Ok(comment.into())
            }
            Err(e) => Err(rejected("createComment", e)),
        }
    }
}
