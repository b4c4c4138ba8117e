//! Demo records loaded at start-up, plus the fixed records served by `me` and `post`.

use crate::domain::{Comment, Post, User};

/// Id shared by the hardcoded `me` user and `post` record
pub const FIXED_RECORD_ID: &str = "123123";

/// The user returned by the `me` query, independent of request state
pub fn viewer() -> User {
    User {
        id: FIXED_RECORD_ID.to_string(),
        name: "Dimitry".to_string(),
        email: "dimitry@gmail.com".to_string(),
        age: None,
    }
}

/// The post returned by the `post` query, authored by [`viewer`]
pub fn featured_post() -> Post {
    Post {
        id: FIXED_RECORD_ID.to_string(),
        title: "First post".to_string(),
        body: "First post".to_string(),
        published: true,
        author: FIXED_RECORD_ID.to_string(),
    }
}

pub fn users() -> Vec<User> {
    vec![
        user("1", "John", "joe@example.com", Some(30)),
        user("2", "Jane", "jane@example.com", None),
        user("3", "George", "george@example.com", None),
    ]
}

pub fn posts() -> Vec<Post> {
    vec![
        post("1", "Hello", "Voluptate aliqua   anim eu do tempor laboris.", true, "1"),
        post("2", "Hello", "Fugiat veniam reprehenderit nisi ad.", true, "1"),
        post("3", "Hello", "Laborum nulla do magna laborum quis dolore.", true, "2"),
        post("4", "Draft", "Officia sunt amet elit cupidatat.", false, "3"),
    ]
}

pub fn comments() -> Vec<Comment> {
    vec![
        comment("1", "Great read!", "2", "1"),
        comment("2", "Thanks for sharing.", "3", "1"),
        comment("3", "Looking forward to more.", "3", "2"),
        comment("4", "Nice one, Jane.", "1", "3"),
    ]
}

fn user(id: &str, name: &str, email: &str, age: Option<i32>) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        age,
    }
}

fn post(id: &str, title: &str, body: &str, published: bool, author: &str) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        published,
        author: author.to_string(),
    }
}

fn comment(id: &str, text: &str, author: &str, post: &str) -> Comment {
    Comment {
        id: id.to_string(),
        text: text.to_string(),
        author: author.to_string(),
        post: post.to_string(),
    }
}
