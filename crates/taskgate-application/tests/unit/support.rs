//! In-process fakes for the domain ports

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use taskgate_application::{AccessPolicy, AuthServiceImpl, DeletionGuard};
use taskgate_domain::ports::{
    Clock, CredentialVerifier, TaskRepository, TokenService, UserRepository,
};
use taskgate_domain::{DeletableKind, Error, NewTask, NewUser, Result, Task, User};

pub const TOKEN_WINDOW: u64 = 60;

#[derive(Default)]
pub struct FakeUsers {
    next_id: AtomicI64,
    users: DashMap<i64, User>,
}

#[async_trait]
impl UserRepository for FakeUsers {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.email == email)
            .map(|entry| entry.value().clone()))
    }

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at: Utc::now(),
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update_user(&self, user: User) -> Result<User> {
        if !self.users.contains_key(&user.id) {
            return Err(Error::not_found(format!("User {}", user.id)));
        }
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        Ok(self.users.remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct FakeTasks {
    next_id: AtomicI64,
    tasks: DashMap<i64, Task>,
    pub failing: AtomicBool,
}

impl FakeTasks {
    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::database("storage offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for FakeTasks {
    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.check()?;
        Ok(self.tasks.get(&id).map(|entry| entry.value().clone()))
    }

    async fn count_tasks_referencing(&self, kind: DeletableKind, id: i64) -> Result<u64> {
        self.check()?;
        let count = self
            .tasks
            .iter()
            .filter(|task| match kind {
                DeletableKind::User => task.author_id == id || task.executor_id == Some(id),
                DeletableKind::TaskStatus => task.task_status_id == id,
                DeletableKind::Label => task.label_ids.contains(&id),
            })
            .count();
        Ok(count as u64)
    }

    async fn create_task(&self, task: NewTask) -> Result<Task> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let task = Task {
            id,
            name: task.name,
            description: task.description,
            task_status_id: task.task_status_id,
            author_id: task.author_id,
            executor_id: task.executor_id,
            label_ids: task.label_ids,
            created_at: Utc::now(),
        };
        self.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update_task(&self, task: Task) -> Result<Task> {
        if !self.tasks.contains_key(&task.id) {
            return Err(Error::not_found(format!("Task {}", task.id)));
        }
        self.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn delete_task(&self, id: i64) -> Result<bool> {
        Ok(self.tasks.remove(&id).is_some())
    }
}

/// Tokens of the form `<subject>.<issued_at>.sig`
pub struct FakeTokens;

impl TokenService for FakeTokens {
    fn issue(&self, subject: &str, now: u64) -> Result<String> {
        Ok(format!("{subject}.{now}.sig"))
    }

    fn validate(&self, token: &str, now: u64) -> Result<String> {
        let parts: Vec<&str> = token.split('.').collect();
        let [subject, issued_at, signature] = parts.as_slice() else {
            return Err(Error::TokenMalformed);
        };
        if *signature != "sig" {
            return Err(Error::TokenBadSignature);
        }
        let issued_at: u64 = issued_at.parse().map_err(|_| Error::TokenMalformed)?;
        if now >= issued_at + TOKEN_WINDOW {
            return Err(Error::TokenExpired);
        }
        Ok((*subject).to_string())
    }
}

/// Hashes of the form `plain:<secret>`
pub struct FakeCredentials;

impl CredentialVerifier for FakeCredentials {
    fn verify(&self, secret: &str, stored_hash: &str) -> Result<bool> {
        let stored = stored_hash
            .strip_prefix("plain:")
            .ok_or_else(|| Error::corrupt_credential("unknown scheme"))?;
        Ok(stored == secret)
    }

    fn hash(&self, secret: &str) -> Result<String> {
        Ok(format!("plain:{secret}"))
    }
}

#[derive(Default)]
pub struct FixedClock(pub AtomicU64);

impl FixedClock {
    pub fn at(now: u64) -> Self {
        Self(AtomicU64::new(now))
    }

    pub fn advance(&self, secs: u64) {
        self.0.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct Harness {
    pub users: Arc<FakeUsers>,
    pub tasks: Arc<FakeTasks>,
    pub clock: Arc<FixedClock>,
    pub service: AuthServiceImpl,
}

pub fn harness() -> Harness {
    let users = Arc::new(FakeUsers::default());
    let tasks = Arc::new(FakeTasks::default());
    let clock = Arc::new(FixedClock::at(1_000));
    let policy = AccessPolicy::with_defaults("/api", Vec::new(), tasks.clone())
        .expect("default rules");
    let service = AuthServiceImpl::new(
        users.clone(),
        Arc::new(FakeTokens),
        Arc::new(FakeCredentials),
        clock.clone(),
        policy,
        DeletionGuard::new(tasks.clone()),
    );
    Harness {
        users,
        tasks,
        clock,
        service,
    }
}

pub async fn register(users: &FakeUsers, email: &str, password: &str) -> User {
    users
        .create_user(NewUser::new("Test", "User", email, format!("plain:{password}")))
        .await
        .expect("create user")
}
