// src/seed.rs
// Demo fixtures loaded into the store at startup

use chrono::{Duration, NaiveDate};
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Project, Task, TaskPriority, TaskStatus, User};
use crate::store::EntityStore;

/// Build the demo store: 3 users, 2 projects, 5 tasks.
///
/// Dates are offsets from `today`, so the "overdue" fixtures stay overdue no
/// matter when the server starts. Every task points at a seeded project and
/// a seeded user.
pub fn seed_demo_data(today: NaiveDate) -> Result<EntityStore> {
    let alice = user("Alice Ahmed", "alice@example.com");
    let ben = user("Ben Brown", "ben@example.com");
    let chloe = user("Chloe Chen", "chloe@example.com");

    let portal = Project {
        id: Uuid::new_v4(),
        name: "Customer Portal".into(),
        description: "Build a secure customer portal MVP.".into(),
        start_date: today - Duration::days(21),
        end_date: None,
        owner_id: Some(alice.id),
    };
    let mobile = Project {
        id: Uuid::new_v4(),
        name: "Mobile App Rewrite".into(),
        description: "Rewrite legacy mobile app on the new API.".into(),
        start_date: today - Duration::days(35),
        end_date: Some(today + Duration::days(30)),
        owner_id: Some(ben.id),
    };

    let tasks = [
        task(
            "Design auth flow",
            "Define user login journeys",
            today + Duration::days(7),
            TaskStatus::InProgress,
            TaskPriority::High,
            &portal,
            &alice,
        ),
        task(
            "Implement login API",
            "REST endpoints for auth",
            today + Duration::days(3),
            TaskStatus::Blocked,
            TaskPriority::Critical,
            &portal,
            &ben,
        ),
        task(
            "Add telemetry",
            "Include basic logging",
            today - Duration::days(2),
            TaskStatus::Completed,
            TaskPriority::Medium,
            &portal,
            &chloe,
        ),
        task(
            "Create React shell",
            "Set up Vite frontend",
            today + Duration::days(10),
            TaskStatus::New,
            TaskPriority::Medium,
            &mobile,
            &chloe,
        ),
        task(
            "Migrate settings",
            "Move configs to SQLite",
            today - Duration::days(1),
            TaskStatus::InProgress,
            TaskPriority::High,
            &mobile,
            &ben,
        ),
    ];

    let mut store = EntityStore::new();
    for u in [alice, ben, chloe] {
        store.users.insert(u)?;
    }
    for p in [portal, mobile] {
        store.projects.insert(p)?;
    }
    for t in tasks {
        store.tasks.insert(t)?;
    }

    info!(
        users = store.users.len(),
        projects = store.projects.len(),
        tasks = store.tasks.len(),
        "Seeded demo data"
    );
    Ok(store)
}

fn user(name: &str, email: &str) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.into(),
        email: email.into(),
    }
}

fn task(
    title: &str,
    description: &str,
    due_date: NaiveDate,
    status: TaskStatus,
    priority: TaskPriority,
    project: &Project,
    assignee: &User,
) -> Task {
    Task {
        id: Uuid::new_v4(),
        title: title.into(),
        description: description.into(),
        due_date: Some(due_date),
        status,
        priority,
        project_id: project.id,
        assigned_to_id: Some(assignee.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn find_task<'a>(store: &'a EntityStore, title: &str) -> &'a Task {
        store.tasks.iter().find(|t| t.title == title).unwrap()
    }

    #[test]
    fn test_seed_counts() {
        let store = seed_demo_data(today()).unwrap();
        assert_eq!(store.users.len(), 3);
        assert_eq!(store.projects.len(), 2);
        assert_eq!(store.tasks.len(), 5);
    }

    #[test]
    fn test_seed_is_referentially_consistent() {
        let store = seed_demo_data(today()).unwrap();
        for task in store.tasks.iter() {
            assert!(store.projects.contains(&task.project_id), "{}", task.title);
            let assignee = task.assigned_to_id.expect("seeded tasks are assigned");
            assert!(store.users.contains(&assignee), "{}", task.title);
        }
        for project in store.projects.iter() {
            let owner = project.owner_id.expect("seeded projects have owners");
            assert!(store.users.contains(&owner), "{}", project.name);
        }
    }

    #[test]
    fn test_seed_dates_are_relative_to_today() {
        let store = seed_demo_data(today()).unwrap();

        let telemetry = find_task(&store, "Add telemetry");
        assert_eq!(telemetry.due_date, Some(today() - Duration::days(2)));
        assert_eq!(telemetry.status, TaskStatus::Completed);

        let migrate = find_task(&store, "Migrate settings");
        assert_eq!(migrate.due_date, Some(today() - Duration::days(1)));
        assert_eq!(migrate.status, TaskStatus::InProgress);

        let mobile = store
            .projects
            .iter()
            .find(|p| p.name == "Mobile App Rewrite")
            .unwrap();
        assert_eq!(mobile.end_date, Some(today() + Duration::days(30)));
    }

    #[test]
    fn test_seed_user_order_is_stable() {
        let store = seed_demo_data(today()).unwrap();
        let names: Vec<String> = store.users.iter().map(|u| u.name.clone()).collect();
        assert_eq!(names, ["Alice Ahmed", "Ben Brown", "Chloe Chen"]);
    }

    #[test]
    fn test_migrate_settings_shares_assignee_with_login_api() {
        let store = seed_demo_data(today()).unwrap();
        let migrate = find_task(&store, "Migrate settings");
        let login = find_task(&store, "Implement login API");
        assert_eq!(migrate.assigned_to_id, login.assigned_to_id);
    }

    #[test]
    fn test_exactly_one_completed_task() {
        let store = seed_demo_data(today()).unwrap();
        let completed = store
            .tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        assert_eq!(completed, 1);
    }
}
