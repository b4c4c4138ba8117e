use crate::domain::User as DomainUser;
use crate::graphql::schema::GraphQLContext;
use async_graphql::{Context, ErrorExtensions, FieldResult, Object, ID};

/// GraphQL representation of a User
#[derive(Clone)]
pub struct User {
    pub inner: DomainUser,
}

impl From<DomainUser> for User {
    fn from(user: DomainUser) -> Self {
        Self { inner: user }
    }
}

#[Object]
impl User {
    /// The unique identifier for the user
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Email address, unique across users
    async fn email(&self) -> &str {
        &self.inner.email
    }

    async fn age(&self) -> Option<i32> {
        self.inner.age
    }

    /// Every post written by this user
    async fn posts(&self, ctx: &Context<'_>) -> FieldResult<Vec<super::post::Post>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.storage.get_posts_by_author(&self.inner.id).await {
            Ok(posts) => Ok(posts.into_iter().map(|p| p.into()).collect()),
            Err(e) => Err(e.extend()),
        }
    }

    /// Every comment written by this user
    async fn comments(&self, ctx: &Context<'_>) -> FieldResult<Vec<super::comment::Comment>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.storage.get_comments_by_author(&self.inner.id).await {
            Ok(comments) => Ok(comments.into_iter().map(|c| c.into()).collect()),
            Err(e) => Err(e.extend()),
        }
    }
}
