//! Access policy
//!
//! Ordered rule table plus the decision function evaluated for every request.
//! The first rule whose verb and pattern match decides; a request that no rule
//! matches requires an authenticated caller.

use std::sync::Arc;

use taskgate_domain::error::{Error, Result};
use taskgate_domain::ports::TaskRepository;
use taskgate_domain::value_objects::{
    AccessRule, Decision, HttpMethod, PathPattern, Principal, Requirement, ResourceKind,
    trailing_id,
};
use tracing::debug;

/// Requirement applied when no rule matches
const FALLBACK_REQUIREMENT: Requirement = Requirement::AuthenticatedOnly;

/// Built-in rule table for an API mounted at `base_path`
///
/// `base_path` is the prefix of every entity route, e.g. `/api`.
pub fn default_rules(base_path: &str) -> Result<Vec<AccessRule>> {
    use HttpMethod::{Delete, Get, Post, Put};
    use Requirement::{Public, SelfOwnership};

    let base = base_path.trim_end_matches('/');
    let at = |suffix: &str| -> Result<PathPattern> {
        let raw = format!("{base}{suffix}");
        PathPattern::parse(&raw).map_err(Error::configuration)
    };
    let exact = |raw: &str| -> Result<PathPattern> {
        PathPattern::parse(raw).map_err(Error::configuration)
    };

    Ok(vec![
        AccessRule::new(Post, at("/login")?, Public),
        AccessRule::new(Post, at("/users")?, Public),
        AccessRule::new(Get, at("/users")?, Public),
        AccessRule::new(Get, at("/statuses")?, Public),
        AccessRule::new(Get, at("/statuses/*")?, Public),
        AccessRule::new(Get, at("/tasks")?, Public),
        AccessRule::new(Get, at("/tasks/*")?, Public),
        AccessRule::new(Put, at("/users/*")?, SelfOwnership),
        AccessRule::new(Delete, at("/users/*")?, SelfOwnership),
        AccessRule::new(
            Delete,
            at("/tasks/*")?,
            Requirement::ResourceOwnership {
                kind: ResourceKind::Task,
            },
        ),
        AccessRule::any_method(exact("/")?, Public),
        AccessRule::new(Get, exact("/health")?, Public),
    ])
}

/// Rule table and ownership lookups
#[derive(Clone)]
pub struct AccessPolicy {
    rules: Arc<[AccessRule]>,
    tasks: Arc<dyn TaskRepository>,
}

impl AccessPolicy {
    /// Policy over an explicit rule table
    pub fn new(rules: Vec<AccessRule>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self {
            rules: rules.into(),
            tasks,
        }
    }

    /// Policy over `overrides` followed by the built-in table
    pub fn with_defaults(
        base_path: &str,
        overrides: Vec<AccessRule>,
        tasks: Arc<dyn TaskRepository>,
    ) -> Result<Self> {
        let mut rules = overrides;
        rules.extend(default_rules(base_path)?);
        Ok(Self::new(rules, tasks))
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[AccessRule] {
        &self.rules
    }

    /// First rule matching the request, if any
    pub fn matching_rule(&self, method: HttpMethod, path: &str) -> Option<&AccessRule> {
        self.rules.iter().find(|rule| rule.matches(method, path))
    }

    /// Decide whether `principal` may perform `method` on `path`
    ///
    /// Persistence errors from ownership lookups are returned, never mapped
    /// to [`Decision::Allow`].
    pub async fn decide(
        &self,
        principal: &Principal,
        method: HttpMethod,
        path: &str,
    ) -> Result<Decision> {
        let requirement = self
            .matching_rule(method, path)
            .map_or(FALLBACK_REQUIREMENT, |rule| rule.requirement);

        let decision = self.evaluate(requirement, principal, path).await?;
        debug!(%method, path, ?requirement, ?decision, "Access decision");
        Ok(decision)
    }

    async fn evaluate(
        &self,
        requirement: Requirement,
        principal: &Principal,
        path: &str,
    ) -> Result<Decision> {
        if requirement == Requirement::Public {
            return Ok(Decision::Allow);
        }
        let Some(user_id) = principal.user_id() else {
            return Ok(Decision::Deny);
        };

        let allowed = match requirement {
            Requirement::Public | Requirement::AuthenticatedOnly => true,
            Requirement::RoleAtLeast { role } => {
                principal.role().is_some_and(|actual| actual.satisfies(role))
            }
            Requirement::SelfOwnership => trailing_id(path) == Some(user_id),
            Requirement::ResourceOwnership { kind } => match trailing_id(path) {
                Some(resource_id) => self.is_owner(kind, resource_id, user_id).await?,
                None => false,
            },
        };
        Ok(Decision::from_bool(allowed))
    }

    async fn is_owner(&self, kind: ResourceKind, resource_id: i64, user_id: i64) -> Result<bool> {
        match kind {
            ResourceKind::Task => Ok(self
                .tasks
                .find_task_by_id(resource_id)
                .await?
                .is_some_and(|task| task.author_id == user_id)),
        }
    }
}

impl std::fmt::Debug for AccessPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessPolicy")
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}
