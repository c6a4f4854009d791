//! Parent/child pairing with cascading delete.

use lorekeeper_domain::{ChildOf, Record, RecordId};

use super::collection::CollectionStore;
use crate::infrastructure::ports::StoreError;

/// A parent collection paired with a dependent child collection, where
/// deleting a parent must also remove every child referencing it.
///
/// Deletion runs children-first: the parent is only removed once every
/// child is gone, so a failure partway through can strand orphan-free
/// children but never orphaned ones. The parent stays intact on failure
/// and the whole cascade can simply be retried by the caller.
pub struct CascadingStore<P, C>
where
    P: Record,
    C: ChildOf<P>,
{
    parents: CollectionStore<P>,
    children: CollectionStore<C>,
}

impl<P, C> Clone for CascadingStore<P, C>
where
    P: Record,
    C: ChildOf<P>,
{
    fn clone(&self) -> Self {
        Self {
            parents: self.parents.clone(),
            children: self.children.clone(),
        }
    }
}

impl<P, C> CascadingStore<P, C>
where
    P: Record,
    C: ChildOf<P>,
{
    pub fn new(parents: CollectionStore<P>, children: CollectionStore<C>) -> Self {
        Self { parents, children }
    }

    pub fn parents(&self) -> &CollectionStore<P> {
        &self.parents
    }

    pub fn children(&self) -> &CollectionStore<C> {
        &self.children
    }

    /// All children belonging to one parent.
    pub async fn children_of(&self, parent_id: &P::Id) -> Result<Vec<C>, StoreError> {
        let all = self.children.get_all().await?;
        Ok(all
            .into_iter()
            .filter(|child| &child.parent_id() == parent_id)
            .collect())
    }

    /// Delete a parent and all of its children, children first.
    ///
    /// If any child deletion fails, the cascade stops there: the parent and
    /// the remaining children are left in place and the error reports how
    /// many children still exist.
    pub async fn delete_cascading(&self, parent_id: &P::Id) -> Result<(), StoreError> {
        let children = self.children_of(parent_id).await?;
        let total = children.len();

        for (index, child) in children.iter().enumerate() {
            if let Err(err) = self.children.delete(&child.record_id()).await {
                let remaining = total - index;
                tracing::warn!(
                    collection = C::COLLECTION,
                    parent_id = %parent_id,
                    remaining,
                    error = %err,
                    "cascade stopped, parent left intact"
                );
                return Err(StoreError::cascade_delete_failed(
                    parent_id.to_store_id(),
                    remaining,
                ));
            }
        }

        self.parents.delete(parent_id).await?;
        tracing::debug!(
            collection = P::COLLECTION,
            parent_id = %parent_id,
            children = total,
            "cascade delete complete"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lorekeeper_domain::{RuleCategory, RuleCategoryDraft, RuleReference, RuleReferenceDraft};

    use super::*;
    use crate::config::StoreConfig;
    use crate::infrastructure::memory::MemoryBackend;
    use crate::infrastructure::ports::DocumentBackend;
    use crate::test_fixtures::FaultInjectingBackend;

    fn rules_over(backend: Arc<dyn DocumentBackend>) -> CascadingStore<RuleCategory, RuleReference> {
        CascadingStore::new(
            CollectionStore::new(Arc::clone(&backend), StoreConfig::default()),
            CollectionStore::new(backend, StoreConfig::default()),
        )
    }

    #[tokio::test]
    async fn children_of_returns_only_that_parents_children() {
        let rules = rules_over(Arc::new(MemoryBackend::new()));
        let combat = rules
            .parents()
            .add(RuleCategoryDraft::new("Combat"))
            .await
            .expect("add combat");
        let magic = rules
            .parents()
            .add(RuleCategoryDraft::new("Magic"))
            .await
            .expect("add magic");

        let grapple = rules
            .children()
            .add(RuleReferenceDraft::new(combat.id, "Grappling"))
            .await
            .expect("add grapple");
        rules
            .children()
            .add(RuleReferenceDraft::new(magic.id, "Concentration"))
            .await
            .expect("add concentration");

        let combat_rules = rules.children_of(&combat.id).await.expect("children_of");
        assert_eq!(combat_rules.len(), 1);
        assert_eq!(combat_rules[0].id, grapple.id);
    }

    #[tokio::test]
    async fn cascade_removes_children_then_the_parent() {
        let rules = rules_over(Arc::new(MemoryBackend::new()));
        let combat = rules
            .parents()
            .add(RuleCategoryDraft::new("Combat"))
            .await
            .expect("add combat");
        let magic = rules
            .parents()
            .add(RuleCategoryDraft::new("Magic"))
            .await
            .expect("add magic");
        for title in ["Grappling", "Opportunity Attacks"] {
            rules
                .children()
                .add(RuleReferenceDraft::new(combat.id, title))
                .await
                .expect("add combat rule");
        }
        let kept = rules
            .children()
            .add(RuleReferenceDraft::new(magic.id, "Concentration"))
            .await
            .expect("add magic rule");

        rules.delete_cascading(&combat.id).await.expect("cascade");

        assert!(rules.parents().get(&combat.id).await.expect("get").is_none());
        assert!(rules
            .children_of(&combat.id)
            .await
            .expect("children_of")
            .is_empty());
        // The other category and its children are untouched.
        assert!(rules.parents().get(&magic.id).await.expect("get").is_some());
        assert!(rules.children().get(&kept.id).await.expect("get").is_some());
    }

    #[tokio::test]
    async fn a_failing_child_delete_leaves_the_parent_intact() {
        let memory = Arc::new(MemoryBackend::new());
        let faulty = Arc::new(FaultInjectingBackend::new(Arc::clone(&memory)));
        let rules = rules_over(Arc::clone(&faulty) as Arc<dyn DocumentBackend>);

        let combat = rules
            .parents()
            .add(RuleCategoryDraft::new("Combat"))
            .await
            .expect("add combat");
        let stuck = rules
            .children()
            .add(RuleReferenceDraft::new(combat.id, "Grappling"))
            .await
            .expect("add rule");
        faulty.refuse_delete_of(stuck.id.to_store_id()).await;

        let err = rules
            .delete_cascading(&combat.id)
            .await
            .expect_err("cascade must abort");
        match err {
            StoreError::CascadeDeleteFailed {
                parent_id,
                children_remaining,
            } => {
                assert_eq!(parent_id, combat.id.to_store_id());
                assert_eq!(children_remaining, 1);
            }
            other => panic!("unexpected error: {other}"),
        }

        // No orphan risk: the parent and the undeletable child both remain.
        assert!(rules.parents().get(&combat.id).await.expect("get").is_some());
        assert!(rules.children().get(&stuck.id).await.expect("get").is_some());
    }
}
