use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::{Comment, Post, User};
use crate::storage::seed;
use async_graphql::{Context, ErrorExtensions, FieldResult, Object};

/// Root query object for GraphQL
pub struct Query;

#[Object]
impl Query {
    /// All users, or those whose name contains `query` (case-insensitive)
    async fn users(&self, ctx: &Context<'_>, query: Option<String>) -> FieldResult<Vec<User>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.storage.list_users(query.as_deref()).await {
            Ok(users) => Ok(users.into_iter().map(|u| u.into()).collect()),
            Err(e) => Err(e.extend()),
        }
    }

    /// All posts, or those whose title or body contains `query` (case-insensitive)
    async fn posts(&self, ctx: &Context<'_>, query: Option<String>) -> FieldResult<Vec<Post>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.storage.list_posts(query.as_deref()).await {
            Ok(posts) => Ok(posts.into_iter().map(|p| p.into()).collect()),
            Err(e) => Err(e.extend()),
        }
    }

    /// All comments. `query` is accepted for symmetry with `users`/`posts` but not applied.
    async fn comments(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "query")] _query: Option<String>,
    ) -> FieldResult<Vec<Comment>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.storage.list_comments().await {
            Ok(comments) => Ok(comments.into_iter().map(|c| c.into()).collect()),
            Err(e) => Err(e.extend()),
        }
    }

    /// The current user (fixed record)
    async fn me(&self) -> User {
        seed::viewer().into()
    }

    /// A sample post (fixed record)
    async fn post(&self) -> Post {
        seed::featured_post().into()
    }
}
