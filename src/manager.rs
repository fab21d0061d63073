//! Project Collection Manager
//!
//! Owns the in-memory collection and exposes the operations the
//! presentation boundary calls: add, update, delete, mark-completed and the
//! derived filtered view. Every mutating call persists a snapshot through
//! the `ProjectStore` before returning.

use chrono::Utc;

use crate::domain::{DomainError, DomainResult, Filter, Project, Status};
use crate::repository::{KeyValueStore, ProjectStore};

pub struct ProjectManager<S: KeyValueStore> {
    store: ProjectStore<S>,
    projects: Vec<Project>,
    last_id: i64,
}

impl<S: KeyValueStore> ProjectManager<S> {
    /// Load the persisted collection and seed the id generator from it
    pub fn new(store: ProjectStore<S>) -> Self {
        let projects = store.load();
        let last_id = projects.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            store,
            projects,
            last_id,
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Add a new pending project.
    ///
    /// All three fields must be non-empty after trimming; otherwise the
    /// collection is left untouched and `InvalidInput` is returned.
    pub fn add(&mut self, title: &str, description: &str, technology: &str) -> DomainResult<Project> {
        self.add_with_status(title, description, technology, Status::Pending)
    }

    /// Add a new project with an explicit initial status
    pub fn add_with_status(
        &mut self,
        title: &str,
        description: &str,
        technology: &str,
        status: Status,
    ) -> DomainResult<Project> {
        let title = required(title, "title")?;
        let description = required(description, "description")?;
        let technology = required(technology, "technology")?;

        let mut project = Project::new(self.next_id(), title, description, technology);
        project.status = status;
        self.projects.push(project.clone());
        self.persist();
        Ok(project)
    }

    /// Replace the mutable fields of an existing project.
    ///
    /// `id` and `created_at` are preserved across the call.
    pub fn update(
        &mut self,
        id: i64,
        title: &str,
        description: &str,
        technology: &str,
        status: Status,
    ) -> DomainResult<Project> {
        let title = required(title, "title")?;
        let description = required(description, "description")?;
        let technology = required(technology, "technology")?;

        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(id))?;
        project.title = title;
        project.description = description;
        project.technology = technology;
        project.status = status;
        let updated = project.clone();
        self.persist();
        Ok(updated)
    }

    /// Remove a project permanently.
    ///
    /// The destructive-action confirmation gate sits at the presentation
    /// boundary; this call assumes nothing and has no side effects beyond
    /// removal.
    pub fn delete(&mut self, id: i64) -> DomainResult<()> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return Err(not_found(id));
        }
        self.persist();
        Ok(())
    }

    /// Set a project's status to completed, regardless of its current
    /// status. There is no reverse transition.
    pub fn mark_completed(&mut self, id: i64) -> DomainResult<()> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(id))?;
        project.status = Status::Completed;
        self.persist();
        Ok(())
    }

    // ========================
    // Derived views
    // ========================

    /// Projects passing `filter`, most recently created first.
    ///
    /// A pure derivation over the collection; call again to restart.
    pub fn filtered_view(&self, filter: Filter) -> impl Iterator<Item = &Project> + '_ {
        let mut view: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| filter.matches(p.status))
            .collect();
        view.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        view.into_iter()
    }

    /// Number of projects passing `filter`, as shown on the filter buttons
    pub fn count(&self, filter: Filter) -> usize {
        self.projects
            .iter()
            .filter(|p| filter.matches(p.status))
            .count()
    }

    pub fn get(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The collection in insertion order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Next unique id. Millisecond-timestamp derived like the legacy app,
    /// but guarded so two adds in the same millisecond never collide.
    fn next_id(&mut self) -> i64 {
        self.last_id = Utc::now().timestamp_millis().max(self.last_id + 1);
        self.last_id
    }

    /// Best-effort persistence after a mutation; failures are logged, never
    /// surfaced to the caller.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.projects) {
            log::warn!("failed to persist {} projects: {}", self.projects.len(), e);
        }
    }
}

fn required(value: &str, field: &'static str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(trimmed.to_string())
}

fn not_found(id: i64) -> DomainError {
    DomainError::NotFound(format!("project {}", id))
}
