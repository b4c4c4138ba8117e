//! Prometheus counters for the GraphQL service
//!
//! Recording is always safe: without an installed recorder the `metrics`
//! macros are no-ops, so resolvers call these helpers unconditionally.

use crate::error::{BlogError, Result};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::fmt;
use std::sync::OnceLock;
use tracing::info;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Enum representing all metric names used by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    GraphqlRequests,
    UsersCreated,
    PostsCreated,
    CommentsCreated,
    ValidationFailures,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::GraphqlRequests => "blog_graphql_requests_total",
            MetricName::UsersCreated => "blog_users_created_total",
            MetricName::PostsCreated => "blog_posts_created_total",
            MetricName::CommentsCreated => "blog_comments_created_total",
            MetricName::ValidationFailures => "blog_validation_failures_total",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MetricName::GraphqlRequests => "GraphQL requests executed",
            MetricName::UsersCreated => "Users created through createUser",
            MetricName::PostsCreated => "Posts created through createPost",
            MetricName::CommentsCreated => "Comments created through createComment",
            MetricName::ValidationFailures => "Mutations rejected by validation, by mutation",
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        use MetricName::*;
        [
            GraphqlRequests,
            UsersCreated,
            PostsCreated,
            CommentsCreated,
            ValidationFailures,
        ]
        .into_iter()
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record kinds created by mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Post,
    Comment,
}

impl Entity {
    fn metric(self) -> MetricName {
        match self {
            Entity::User => MetricName::UsersCreated,
            Entity::Post => MetricName::PostsCreated,
            Entity::Comment => MetricName::CommentsCreated,
        }
    }
}

/// Install the Prometheus recorder. Calling it again after success is a no-op.
pub fn init() -> Result<()> {
    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| BlogError::Config(format!("Failed to install Prometheus recorder: {e}")))?;

    for metric in MetricName::all_metrics() {
        ::metrics::describe_counter!(metric.as_str(), metric.description());
    }

    METRICS_HANDLE.set(handle).ok();
    info!("Metrics system initialized");
    Ok(())
}

/// Current metrics in Prometheus text format, if the recorder is installed
pub fn render() -> Option<String> {
    METRICS_HANDLE.get().map(|handle| handle.render())
}

pub fn record_graphql_request() {
    ::metrics::counter!(MetricName::GraphqlRequests.as_str()).increment(1);
}

pub fn record_created(entity: Entity) {
    ::metrics::counter!(entity.metric().as_str()).increment(1);
}

pub fn record_validation_failure(mutation: &'static str) {
    ::metrics::counter!(MetricName::ValidationFailures.as_str(), "mutation" => mutation)
        .increment(1);
}
