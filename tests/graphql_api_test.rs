use async_graphql::{Request, Response, Variables};
use blog_graphql::graphql::{create_schema, GraphQLSchema};
use blog_graphql::storage::InMemoryStorage;
use serde_json::{json, Value};
use std::sync::Arc;

fn seeded_schema() -> GraphQLSchema {
    create_schema(Arc::new(InMemoryStorage::with_seed_data()))
}

async fn execute(schema: &GraphQLSchema, request: impl Into<Request>) -> Response {
    schema.execute(request).await
}

/// Runs a document that is expected to succeed and returns its data as JSON
async fn query_ok(schema: &GraphQLSchema, request: impl Into<Request>) -> Value {
    let response = execute(schema, request).await;
    assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);
    response.data.into_json().unwrap()
}

fn names(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap().to_string())
        .collect()
}

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap().to_string())
        .collect()
}

async fn count(schema: &GraphQLSchema, field: &str) -> usize {
    let data = query_ok(schema, format!("{{ {field} {{ id }} }}")).await;
    data[field].as_array().unwrap().len()
}

#[tokio::test]
async fn test_users_without_filter_returns_everyone() {
    let schema = seeded_schema();

    let data = query_ok(&schema, "{ users { name } }").await;
    assert_eq!(names(&data["users"]), vec!["John", "Jane", "George"]);

    let data = query_ok(&schema, r#"{ users(query: "") { name } }"#).await;
    assert_eq!(names(&data["users"]), vec!["John", "Jane", "George"]);
}

#[tokio::test]
async fn test_users_filter_is_case_insensitive_substring() {
    let schema = seeded_schema();

    let data = query_ok(&schema, r#"{ users(query: "j") { name } }"#).await;
    assert_eq!(names(&data["users"]), vec!["John", "Jane"]);

    let data = query_ok(&schema, r#"{ users(query: "ORG") { name } }"#).await;
    assert_eq!(names(&data["users"]), vec!["George"]);

    let data = query_ok(&schema, r#"{ users(query: "nobody") { name } }"#).await;
    assert!(data["users"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_posts_filter_matches_title_or_body() {
    let schema = seeded_schema();

    // body only
    let data = query_ok(&schema, r#"{ posts(query: "LABORUM") { id } }"#).await;
    assert_eq!(ids(&data["posts"]), vec!["3"]);

    // title only
    let data = query_ok(&schema, r#"{ posts(query: "hello") { id } }"#).await;
    assert_eq!(ids(&data["posts"]), vec!["1", "2", "3"]);

    let data = query_ok(&schema, "{ posts { id } }").await;
    assert_eq!(ids(&data["posts"]), vec!["1", "2", "3", "4"]);
}

#[tokio::test]
async fn test_comments_ignores_query_argument() {
    let schema = seeded_schema();

    let all = query_ok(&schema, "{ comments { id text } }").await;
    let filtered = query_ok(&schema, r#"{ comments(query: "no such text") { id text } }"#).await;
    assert_eq!(all, filtered);
    assert_eq!(all["comments"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_me_and_post_are_fixed_records() {
    let schema = seeded_schema();

    let data = query_ok(
        &schema,
        "{ me { id name email age } post { id title body published author { id name } } }",
    )
    .await;

    assert_eq!(
        data["me"],
        json!({ "id": "123123", "name": "Dimitry", "email": "dimitry@gmail.com", "age": null })
    );
    assert_eq!(data["post"]["id"], "123123");
    assert_eq!(data["post"]["title"], "First post");
    assert_eq!(data["post"]["published"], true);
    assert_eq!(data["post"]["author"]["id"], "123123");
}

#[tokio::test]
async fn test_user_edges_return_all_matches() {
    let schema = seeded_schema();

    let data = query_ok(
        &schema,
        r#"{ users(query: "john") { posts { id author { name } } comments { id } } }"#,
    )
    .await;

    let john = &data["users"][0];
    assert_eq!(ids(&john["posts"]), vec!["1", "2"]);
    assert!(john["posts"]
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["author"]["name"] == "John"));
    assert_eq!(ids(&john["comments"]), vec!["4"]);
}

#[tokio::test]
async fn test_post_and_comment_edges() {
    let schema = seeded_schema();

    let data = query_ok(
        &schema,
        r#"{ posts(query: "fugiat") { comments { text author { name } post { id } } } }"#,
    )
    .await;

    let comments = &data["posts"][0]["comments"];
    assert_eq!(
        comments,
        &json!([{
            "text": "Looking forward to more.",
            "author": { "name": "George" },
            "post": { "id": "2" }
        }])
    );
}

#[tokio::test]
async fn test_reads_are_idempotent() {
    let schema = seeded_schema();
    let document = "{ users { id posts { id comments { id } } comments { post { title } } } }";

    let first = query_ok(&schema, document).await;
    let second = query_ok(&schema, document).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let schema = seeded_schema();
    let create = r#"mutation { createUser(data: { name: "Ann", email: "a@x.com" }) { id email } }"#;

    let data = query_ok(&schema, create).await;
    assert_eq!(data["createUser"]["email"], "a@x.com");
    let before = count(&schema, "users").await;

    let response = execute(&schema, create).await;
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "Email taken.");
    let code = response.errors[0]
        .extensions
        .as_ref()
        .and_then(|ext| ext.get("code"))
        .cloned();
    assert_eq!(code, Some(async_graphql::Value::from("BAD_USER_INPUT")));

    assert_eq!(count(&schema, "users").await, before);
}

#[tokio::test]
async fn test_seeded_email_is_taken() {
    let schema = seeded_schema();
    let response = execute(
        &schema,
        r#"mutation { createUser(data: { name: "Joe", email: "joe@example.com" }) { id } }"#,
    )
    .await;
    assert_eq!(response.errors[0].message, "Email taken.");
}

#[tokio::test]
async fn test_create_post_requires_existing_author() {
    let schema = seeded_schema();
    let before = count(&schema, "posts").await;

    let response = execute(
        &schema,
        r#"mutation { createPost(data: { title: "T", body: "B", author: "nonexistent" }) { id } }"#,
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "User does not exist.");
    assert_eq!(count(&schema, "posts").await, before);
}

#[tokio::test]
async fn test_comment_on_unpublished_post_fails() {
    let schema = seeded_schema();
    let before = count(&schema, "comments").await;

    let data = query_ok(
        &schema,
        r#"mutation { createPost(data: { title: "Draft", body: "wip", author: "2" }) { id published } }"#,
    )
    .await;
    assert_eq!(data["createPost"]["published"], false);
    let draft_id = data["createPost"]["id"].as_str().unwrap().to_string();

    let request = Request::new(
        "mutation($post: ID!) { createComment(data: { text: \"hi\", author: \"1\", post: $post }) { id } }",
    )
    .variables(Variables::from_json(json!({ "post": draft_id })));
    let response = execute(&schema, request).await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "Unable to process the comment.");
    assert_eq!(count(&schema, "comments").await, before);
}

#[tokio::test]
async fn test_comment_with_unknown_author_fails() {
    let schema = seeded_schema();
    let response = execute(
        &schema,
        r#"mutation { createComment(data: { text: "hi", author: "ghost", post: "1" }) { id } }"#,
    )
    .await;
    assert_eq!(response.errors[0].message, "Unable to process the comment.");
}

#[tokio::test]
async fn test_comment_on_published_post_round_trips() {
    let schema = seeded_schema();
    let before = count(&schema, "comments").await;

    let data = query_ok(
        &schema,
        r#"mutation { createComment(data: { text: "hi", author: "3", post: "3" }) { id text author { name } post { id title } } }"#,
    )
    .await;

    let comment = &data["createComment"];
    assert_eq!(comment["text"], "hi");
    assert_eq!(comment["author"]["name"], "George");
    assert_eq!(comment["post"]["id"], "3");
    assert_eq!(count(&schema, "comments").await, before + 1);

    let data = query_ok(&schema, r#"{ posts(query: "magna") { comments { id } } }"#).await;
    let comment_id = comment["id"].as_str().unwrap().to_string();
    assert!(ids(&data["posts"][0]["comments"]).contains(&comment_id));
}

#[tokio::test]
async fn test_created_user_is_visible_and_resolves_as_author() {
    let schema = seeded_schema();

    let data = query_ok(
        &schema,
        r#"mutation { createUser(data: { name: "Ann", email: "ann@x.com", age: 41 }) { id age } }"#,
    )
    .await;
    assert_eq!(data["createUser"]["age"], 41);
    let user_id = data["createUser"]["id"].as_str().unwrap().to_string();

    let data = query_ok(&schema, "{ users { id } }").await;
    assert!(ids(&data["users"]).contains(&user_id));

    let request = Request::new(
        "mutation($author: ID!) { createPost(data: { title: \"Mine\", body: \"b\", published: true, author: $author }) { author { id email posts { title } } } }",
    )
    .variables(Variables::from_json(json!({ "author": user_id })));
    let data = query_ok(&schema, request).await;

    let author = &data["createPost"]["author"];
    assert_eq!(author["id"], user_id.as_str());
    assert_eq!(author["email"], "ann@x.com");
    assert_eq!(author["posts"], json!([{ "title": "Mine" }]));
}

#[tokio::test]
async fn test_blank_and_negative_fields_are_accepted() {
    let schema = seeded_schema();

    let data = query_ok(
        &schema,
        r#"mutation { createUser(data: { name: "", email: "blank@x.com", age: -1 }) { name age } }"#,
    )
    .await;
    assert_eq!(data["createUser"], json!({ "name": "", "age": -1 }));

    let data = query_ok(
        &schema,
        r#"mutation { createPost(data: { title: "", body: "", author: "1" }) { title } }"#,
    )
    .await;
    assert_eq!(data["createPost"]["title"], "");

    let before = count(&schema, "comments").await;
    let data = query_ok(
        &schema,
        r#"mutation { createComment(data: { text: "", author: "1", post: "1" }) { text post { id } } }"#,
    )
    .await;
    assert_eq!(data["createComment"], json!({ "text": "", "post": { "id": "1" } }));
    assert_eq!(count(&schema, "comments").await, before + 1);
}

#[tokio::test]
async fn test_schema_exposes_expected_surface() {
    let sdl = seeded_schema().sdl();

    for expected in [
        "users(query: String): [User!]!",
        "posts(query: String): [Post!]!",
        "comments(query: String): [Comment!]!",
        "me: User!",
        "post: Post!",
        "createUser(data: CreateUserInput!): User!",
        "createPost(data: CreatePostInput!): Post!",
        "createComment(data: CreateCommentInput!): Comment!",
        "input CreatePostInput",
    ] {
        assert!(sdl.contains(expected), "missing `{expected}` in:\n{sdl}");
    }
}
