use crate::domain::Comment as DomainComment;
use crate::graphql::schema::GraphQLContext;
use async_graphql::{Context, ErrorExtensions, FieldResult, Object, ID};

/// GraphQL representation of a Comment
#[derive(Clone)]
pub struct Comment {
    pub inner: DomainComment,
}

impl From<DomainComment> for Comment {
    fn from(comment: DomainComment) -> Self {
        Self { inner: comment }
    }
}

#[Object]
impl Comment {
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    async fn text(&self) -> &str {
        &self.inner.text
    }

    /// The user who wrote this comment
    async fn author(&self, ctx: &Context<'_>) -> FieldResult<super::user::User> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.storage.get_user_by_id(&self.inner.author).await {
            Ok(Some(user)) => Ok(user.into()),
            Ok(None) => Err(format!("Author {} not found", self.inner.author).into()),
            Err(e) => Err(e.extend()),
        }
    }

    /// The post this comment belongs to
    async fn post(&self, ctx: &Context<'_>) -> FieldResult<super::post::Post> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.storage.get_post_by_id(&self.inner.post).await {
            Ok(Some(post)) => Ok(post.into()),
            Ok(None) => Err(format!("Post {} not found", self.inner.post).into()),
            Err(e) => Err(e.extend()),
        }
    }
}
