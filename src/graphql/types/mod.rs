pub mod comment;
pub mod inputs;
pub mod post;
pub mod user;

pub use comment::Comment;
pub use inputs::{CreateCommentInput, CreatePostInput, CreateUserInput};
pub use post::Post;
pub use user::User;
