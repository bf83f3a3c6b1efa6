//! Entity metadata records
//!
//! One JSON record per data entity, holding its structural metadata (fields
//! and relationships) independent of any rendered source file. The records
//! are produced by the entity generator; Tenantry rewrites them wholesale
//! after a merge and must round-trip every key it does not understand.

use serde::{Deserialize, Serialize};

/// Structural metadata for one data entity.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EntityDescriptor {
    /// Entity name; filled from the store key when the record omits it
    #[serde(default)]
    pub name: String,

    /// Field definitions, in declaration order
    #[serde(default)]
    pub fields: Vec<FieldSpec>,

    /// Relationship definitions, in declaration order
    #[serde(default)]
    pub relationships: Vec<RelationshipSpec>,

    /// Service layer configuration ("no", "serviceClass", "serviceImpl")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// Keys owned by the entity generator, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl EntityDescriptor {
    /// Count relationships pointing at the given entity (exact name match).
    pub fn relationships_to(&self, other_entity_name: &str) -> usize {
        self.relationships
            .iter()
            .filter(|r| r.other_entity_name == other_entity_name)
            .count()
    }
}

/// One field of an entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Field name
    pub field_name: String,

    /// Declared field type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    /// Validation rules and other generator-owned keys
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One relationship of an entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipSpec {
    /// Name of the relationship on this entity
    pub relationship_name: String,

    /// Name of the entity on the other side
    pub other_entity_name: String,

    /// Cardinality of the relationship
    pub relationship_type: RelationshipType,

    /// Field on the other entity used to render the association
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_entity_field: Option<String>,

    /// Whether this entity owns the relationship
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_side: Option<bool>,

    /// Name of the inverse relationship on the other entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_entity_relationship_name: Option<String>,

    /// Generator-owned keys, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Relationship cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipType {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationshipType::OneToOne => write!(f, "one-to-one"),
            RelationshipType::OneToMany => write!(f, "one-to-many"),
            RelationshipType::ManyToOne => write!(f, "many-to-one"),
            RelationshipType::ManyToMany => write!(f, "many-to-many"),
        }
    }
}

#[cfg(test)]
#[path = "entity_test.rs"]
mod tests;
