use super::*;
use tempfile::tempdir;

fn write_config(root: &Path, body: &str) {
    std::fs::write(root.join(CONFIG_FILE), body).unwrap();
}

#[test]
fn test_load_project() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), r#"{"tenantName":"Company"}"#);

    let project = Project::load(dir.path()).unwrap();
    assert_eq!(project.config.tenant_name.as_deref(), Some("Company"));
}

#[test]
fn test_load_project_missing_config() {
    let dir = tempdir().unwrap();
    let err = Project::load(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn test_entity_path_uses_upper_first() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "{}");
    let project = Project::load(dir.path()).unwrap();
    assert!(project
        .entity_path("invoice")
        .ends_with(".entities/Invoice.json"));
}

#[test]
fn test_load_entity_not_found() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "{}");
    let project = Project::load(dir.path()).unwrap();
    let err = project.load_entity("Invoice").unwrap_err();
    assert!(matches!(err, CoreError::EntityNotFound { name } if name == "Invoice"));
}

#[test]
fn test_save_and_load_entity() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "{}");
    let project = Project::load(dir.path()).unwrap();

    let entity: crate::entity::EntityDescriptor = serde_json::from_str(
        r#"{"name":"Invoice","fields":[],"relationships":[],"dto":"mapstruct"}"#,
    )
    .unwrap();
    project.save_entity(&entity).unwrap();

    let loaded = project.load_entity("invoice").unwrap();
    assert_eq!(loaded.name, "Invoice");
    assert_eq!(
        loaded.extra.get("dto").and_then(|v| v.as_str()),
        Some("mapstruct")
    );

    // 4-space indentation, matching the entity generator's output
    let raw = std::fs::read_to_string(project.entity_path("Invoice")).unwrap();
    assert!(raw.contains("\n    \"name\""));
}

#[test]
fn test_entity_name_filled_from_store_key() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "{}");
    std::fs::create_dir_all(dir.path().join(ENTITY_STORE_DIR)).unwrap();
    std::fs::write(
        dir.path().join(ENTITY_STORE_DIR).join("Invoice.json"),
        r#"{"fields":[],"relationships":[]}"#,
    )
    .unwrap();

    let project = Project::load(dir.path()).unwrap();
    let entity = project.load_entity("invoice").unwrap();
    assert_eq!(entity.name, "Invoice");
}

#[test]
fn test_entity_names_sorted() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "{}");
    let store = dir.path().join(ENTITY_STORE_DIR);
    std::fs::create_dir_all(&store).unwrap();
    for name in ["Shipment", "Invoice"] {
        std::fs::write(store.join(format!("{name}.json")), "{}").unwrap();
    }

    let project = Project::load(dir.path()).unwrap();
    assert_eq!(project.entity_names().unwrap(), vec!["Invoice", "Shipment"]);
}
