// src/analytics.rs
// Per-user task rollups computed on demand from the store

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{AnalyticsItem, AnalyticsSummary, Task};
use crate::store::EntityStore;

/// Display name of the bucket collecting tasks with no assignee
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// Compute the analytics summary for the current store contents.
///
/// Emits one row per user in store order (zero-task users included), then an
/// "Unassigned" row only when at least one task has no assignee. Totals cover
/// whole collections, so tasks assigned to unknown users count towards
/// `total_tasks` without appearing in any row.
///
/// `today` is taken once by the caller so every task in a pass is judged
/// against the same date. Never mutates the store.
pub fn summarize(store: &EntityStore, today: NaiveDate) -> AnalyticsSummary {
    let mut per_user: Vec<AnalyticsItem> = store
        .users
        .iter()
        .map(|user| {
            let assigned = store
                .tasks
                .iter()
                .filter(|t| t.assigned_to_id == Some(user.id));
            rollup(Some(user.id), &user.name, assigned, today)
        })
        .collect();

    let unassigned: Vec<&Task> = store
        .tasks
        .iter()
        .filter(|t| t.assigned_to_id.is_none())
        .collect();
    if !unassigned.is_empty() {
        per_user.push(rollup(None, UNASSIGNED_LABEL, unassigned, today));
    }

    AnalyticsSummary {
        per_user,
        total_users: store.users.len(),
        total_projects: store.projects.len(),
        total_tasks: store.tasks.len(),
    }
}

/// Count one subject's tasks.
///
/// `active` is `total - completed`: cancelled tasks are still counted as
/// active.
fn rollup<'a>(
    user_id: Option<Uuid>,
    user_name: &str,
    tasks: impl IntoIterator<Item = &'a Task>,
    today: NaiveDate,
) -> AnalyticsItem {
    let mut total = 0;
    let mut completed = 0;
    let mut overdue = 0;

    for task in tasks {
        total += 1;
        if task.status.is_completed() {
            completed += 1;
        }
        if task.is_overdue(today) {
            overdue += 1;
        }
    }

    AnalyticsItem {
        user_id,
        user_name: user_name.to_string(),
        total_tasks: total,
        completed_tasks: completed,
        overdue_tasks: overdue,
        active_tasks: total - completed,
    }
}
