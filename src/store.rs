use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::TeamMember;

/// Result of [`MemberStore::upsert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upsert {
    Inserted(TeamMember),
    Replaced(TeamMember),
}

impl Upsert {
    pub fn member(&self) -> &TeamMember {
        match self {
            Upsert::Inserted(member) | Upsert::Replaced(member) => member,
        }
    }

    pub fn into_member(self) -> TeamMember {
        match self {
            Upsert::Inserted(member) | Upsert::Replaced(member) => member,
        }
    }

    pub fn is_replace(&self) -> bool {
        matches!(self, Upsert::Replaced(_))
    }
}

/// In-memory member collection, shared by cloning.
///
/// Holds at most one record per lowercased name. Every write takes the
/// lock for the whole scan so two submissions of the same name can't both
/// append.
#[derive(Debug, Clone, Default)]
pub struct MemberStore {
    members: Arc<RwLock<Vec<TeamMember>>>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every member in insertion order.
    pub async fn list(&self) -> Vec<TeamMember> {
        self.members.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.members.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.members.read().await.is_empty()
    }

    /// Insert `member`, or replace the record whose name matches it
    /// case-insensitively. A replaced record keeps its position but takes
    /// the candidate's id and creation time.
    pub async fn upsert(&self, member: TeamMember) -> Upsert {
        let key = member.name_key();
        let mut members = self.members.write().await;

        match members.iter().position(|m| m.name_key() == key) {
            Some(index) => {
                tracing::debug!(name = %member.name, id = %member.id, "replacing member");
                members[index] = member.clone();
                Upsert::Replaced(member)
            }
            None => {
                tracing::debug!(name = %member.name, id = %member.id, "adding member");
                members.push(member.clone());
                Upsert::Inserted(member)
            }
        }
    }

    /// Remove the member with `id`. Returns `false` when no such member exists.
    pub async fn remove(&self, id: &str) -> bool {
        let mut members = self.members.write().await;
        match members.iter().position(|m| m.id == id) {
            Some(index) => {
                members.remove(index);
                true
            }
            None => false,
        }
    }

    pub async fn clear(&self) {
        self.members.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayAvailability, TimeWindow};

    fn available_on(name: &str, days: &[&str]) -> TeamMember {
        let availability = days
            .iter()
            .map(|day| DayAvailability {
                day: day.to_string(),
                windows: vec![TimeWindow::new("09:00", "17:00")],
            })
            .collect();
        TeamMember::new(name.to_string(), availability)
    }

    #[tokio::test]
    async fn upsert_appends_new_names() {
        let store = MemberStore::new();
        let result = store.upsert(available_on("Alice", &["Monday"])).await;
        assert!(!result.is_replace());
        store.upsert(available_on("Bob", &["Tuesday"])).await;

        let names: Vec<String> = store.list().await.into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[tokio::test]
    async fn upsert_replaces_case_insensitive_match_in_place() {
        let store = MemberStore::new();
        let original = available_on("Alice", &["Monday"]);
        store.upsert(original.clone()).await;
        store.upsert(available_on("Bob", &["Friday"])).await;

        let replacement = available_on("alice", &["Sunday"]);
        let result = store.upsert(replacement.clone()).await;
        assert!(result.is_replace());
        assert_eq!(result.member(), &replacement);

        let members = store.list().await;
        assert_eq!(members.len(), 2);
        assert_eq!(members[0], replacement);
        assert_ne!(members[0].id, original.id);
        assert_eq!(members[0].name, "alice");
        assert_eq!(members[1].name, "Bob");
    }

    #[tokio::test]
    async fn remove_reports_whether_anything_was_removed() {
        let store = MemberStore::new();
        let alice = store.upsert(available_on("Alice", &[])).await.into_member();
        store.upsert(available_on("Bob", &[])).await;

        assert!(!store.remove("missing").await);
        assert_eq!(store.len().await, 2);

        assert!(store.remove(&alice.id).await);
        let members = store.list().await;
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Bob");

        assert!(!store.remove(&alice.id).await);
    }

    #[tokio::test]
    async fn clear_empties_the_store() {
        let store = MemberStore::new();
        store.upsert(available_on("Alice", &["Monday"])).await;
        store.upsert(available_on("Bob", &["Monday"])).await;

        store.clear().await;
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn clones_share_the_same_collection() {
        let store = MemberStore::new();
        let handle = store.clone();
        handle.upsert(available_on("Alice", &[])).await;
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn concurrent_submissions_of_one_name_keep_a_single_record() {
        let store = MemberStore::new();
        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                let name = if i % 2 == 0 { "Alice" } else { "ALICE" };
                tokio::spawn(async move { store.upsert(available_on(name, &["Monday"])).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(store.len().await, 1);
    }
}
