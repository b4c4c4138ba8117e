use crate::domain::Post as DomainPost;
use crate::graphql::schema::GraphQLContext;
use crate::storage::seed;
use async_graphql::{Context, ErrorExtensions, FieldResult, Object, ID};

/// GraphQL representation of a Post
#[derive(Clone)]
pub struct Post {
    pub inner: DomainPost,
}

impl From<DomainPost> for Post {
    fn from(post: DomainPost) -> Self {
        Self { inner: post }
    }
}

#[Object]
impl Post {
    /// The unique identifier for the post
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    async fn title(&self) -> &str {
        &self.inner.title
    }

    async fn body(&self) -> &str {
        &self.inner.body
    }

    /// Whether the post is visible and open for comments
    async fn published(&self) -> bool {
        self.inner.published
    }

    /// The user who wrote this post
    async fn author(&self, ctx: &Context<'_>) -> FieldResult<super::user::User> {
        let context = ctx.data::<GraphQLContext>()?;

        let author = context
            .storage
            .get_user_by_id(&self.inner.author)
            .await
            .map_err(|e| e.extend())?;

        // The fixed `post` record is authored by the fixed `me` user, which is not stored
        match author {
            Some(user) => Ok(user.into()),
            None if self.inner.author == seed::FIXED_RECORD_ID => Ok(seed::viewer().into()),
            None => Err(format!("Author {} not found", self.inner.author).into()),
        }
    }

    /// Comments left on this post
    async fn comments(&self, ctx: &Context<'_>) -> FieldResult<Vec<super::comment::Comment>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.storage.get_comments_by_post(&self.inner.id).await {
            Ok(comments) => Ok(comments.into_iter().map(|c| c.into()).collect()),
            Err(e) => Err(e.extend()),
        }
    }
}
