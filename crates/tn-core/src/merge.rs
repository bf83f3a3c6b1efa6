//! Entity metadata merger
//!
//! Injects the tenant relationship into an entity's metadata record. The
//! merge is idempotent at the relationship level: any existing relationship
//! to the tenant is pruned before the fresh one is appended, so repeated
//! merges (e.g. after a regeneration) always leave exactly one.

use crate::entity::{EntityDescriptor, RelationshipSpec, RelationshipType};
use crate::naming::{lower_first, NameVariants};

/// Merge the tenant relationship into an entity descriptor.
///
/// Persisting the mutated descriptor back to the metadata store is the
/// caller's responsibility.
pub fn merge(entity: &mut EntityDescriptor, tenant: &NameVariants) {
    // Prune stale tenant relationships from a previous run or regeneration
    entity
        .relationships
        .retain(|r| r.other_entity_name != tenant.raw);

    entity.relationships.push(RelationshipSpec {
        relationship_name: tenant.lower_first.clone(),
        other_entity_name: tenant.raw.clone(),
        relationship_type: RelationshipType::ManyToOne,
        other_entity_field: Some("id".to_string()),
        owner_side: Some(true),
        other_entity_relationship_name: Some(lower_first(&entity.name)),
        extra: serde_json::Map::new(),
    });

    // The injected relationship is resolved through the service layer at
    // runtime, so an entity generated without one gets a service class.
    if entity.service.is_none() || entity.service.as_deref() == Some("no") {
        entity.service = Some("serviceClass".to_string());
    }
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod tests;
