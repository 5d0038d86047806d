//! Decision engine tests over the default rule table

use std::sync::Arc;
use std::sync::atomic::Ordering;

use taskgate_application::AccessPolicy;
use taskgate_domain::ports::TaskRepository;
use taskgate_domain::value_objects::{AccessRule, PathPattern};
use taskgate_domain::{Decision, HttpMethod, NewTask, Principal, Requirement, Role};

use crate::support::FakeTasks;

fn policy(tasks: Arc<FakeTasks>) -> AccessPolicy {
    AccessPolicy::with_defaults("/api", Vec::new(), tasks).expect("default rules")
}

fn user(id: i64) -> Principal {
    Principal::authenticated(id, format!("user{id}@example.com"), Role::User)
}

#[tokio::test]
async fn test_public_routes_allow_anonymous() {
    let policy = policy(Arc::new(FakeTasks::default()));
    let anonymous = Principal::Anonymous;

    for (method, path) in [
        (HttpMethod::Post, "/api/login"),
        (HttpMethod::Post, "/api/users"),
        (HttpMethod::Get, "/api/users"),
        (HttpMethod::Head, "/api/users"),
        (HttpMethod::Get, "/api/statuses/3"),
        (HttpMethod::Get, "/api/tasks?page=1"),
        (HttpMethod::Get, "/api/tasks/9/"),
        (HttpMethod::Get, "/health"),
        (HttpMethod::Post, "/"),
    ] {
        let decision = policy.decide(&anonymous, method, path).await.expect("decide");
        assert_eq!(decision, Decision::Allow, "{method} {path}");
    }
}

#[tokio::test]
async fn test_unmatched_route_requires_authentication() {
    let policy = policy(Arc::new(FakeTasks::default()));

    let anonymous = policy
        .decide(&Principal::Anonymous, HttpMethod::Get, "/api/labels")
        .await
        .expect("decide");
    assert_eq!(anonymous, Decision::Deny);

    let authenticated = policy
        .decide(&user(1), HttpMethod::Get, "/api/labels")
        .await
        .expect("decide");
    assert_eq!(authenticated, Decision::Allow);
}

#[tokio::test]
async fn test_self_ownership() {
    let policy = policy(Arc::new(FakeTasks::default()));
    let caller = user(7);

    let cases = [
        ("/api/users/7", Decision::Allow),
        ("/api/users/7/", Decision::Allow),
        ("/api/users/8", Decision::Deny),
        ("/api/users/abc", Decision::Deny),
        ("/api/users/07x", Decision::Deny),
    ];
    for (path, expected) in cases {
        let decision = policy
            .decide(&caller, HttpMethod::Put, path)
            .await
            .expect("decide");
        assert_eq!(decision, expected, "PUT {path}");
    }

    let anonymous = policy
        .decide(&Principal::Anonymous, HttpMethod::Delete, "/api/users/7")
        .await
        .expect("decide");
    assert_eq!(anonymous, Decision::Deny);
}

#[tokio::test]
async fn test_resource_ownership_for_tasks() {
    let tasks = Arc::new(FakeTasks::default());
    let task = tasks
        .create_task(NewTask::new("Ship it", 1, 5))
        .await
        .expect("create task");
    let policy = policy(tasks);
    let path = format!("/api/tasks/{}", task.id);

    let author = policy
        .decide(&user(5), HttpMethod::Delete, &path)
        .await
        .expect("decide");
    assert_eq!(author, Decision::Allow);

    let stranger = policy
        .decide(&user(6), HttpMethod::Delete, &path)
        .await
        .expect("decide");
    assert_eq!(stranger, Decision::Deny);

    let missing = policy
        .decide(&user(5), HttpMethod::Delete, "/api/tasks/999")
        .await
        .expect("decide");
    assert_eq!(missing, Decision::Deny);

    let non_numeric = policy
        .decide(&user(5), HttpMethod::Delete, "/api/tasks/first")
        .await
        .expect("decide");
    assert_eq!(non_numeric, Decision::Deny);
}

#[tokio::test]
async fn test_lookup_failure_is_an_error() {
    let tasks = Arc::new(FakeTasks::default());
    tasks.failing.store(true, Ordering::SeqCst);
    let policy = policy(tasks);

    let result = policy
        .decide(&user(5), HttpMethod::Delete, "/api/tasks/1")
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_decision_is_deterministic() {
    let tasks = Arc::new(FakeTasks::default());
    tasks
        .create_task(NewTask::new("Repeat", 1, 2))
        .await
        .expect("create task");
    let policy = policy(tasks);

    let first = policy
        .decide(&user(2), HttpMethod::Delete, "/api/tasks/1")
        .await
        .expect("decide");
    let second = policy
        .decide(&user(2), HttpMethod::Delete, "/api/tasks/1")
        .await
        .expect("decide");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_override_rules_take_precedence() {
    let admin_only = AccessRule::new(
        HttpMethod::Delete,
        PathPattern::parse("/api/labels/*").expect("pattern"),
        Requirement::RoleAtLeast { role: Role::Admin },
    );
    let policy = AccessPolicy::with_defaults(
        "/api",
        vec![admin_only],
        Arc::new(FakeTasks::default()),
    )
    .expect("rules");

    let regular = policy
        .decide(&user(1), HttpMethod::Delete, "/api/labels/3")
        .await
        .expect("decide");
    assert_eq!(regular, Decision::Deny);

    let admin = Principal::authenticated(2, "admin@example.com", Role::Admin);
    let allowed = policy
        .decide(&admin, HttpMethod::Delete, "/api/labels/3")
        .await
        .expect("decide");
    assert_eq!(allowed, Decision::Allow);

    assert_eq!(policy.rules().len(), 13);
}
