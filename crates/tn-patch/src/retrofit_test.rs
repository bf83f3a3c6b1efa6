use super::*;
use std::path::Path;
use tempfile::{tempdir, TempDir};
use tn_core::{CONFIG_FILE, ENTITY_STORE_DIR};

const DETAIL_HTML: &str = r#"<div class="row justify-content-center">
    <dl class="row-md jh-entity-details">
        <dt><span>Code</span></dt>
        <dd>
            <span>{{invoice.code}}</span>
        </dd>
        </dl>
</div>
"#;

const MODEL_TS: &str = r#"export interface IInvoice {
    id?: number;
    code?: string;
    name?: string;
}

export class Invoice implements IInvoice {
    constructor(public id?: number) {}
}
"#;

const I18N_JSON: &str = r#"{
    "tenantryApp": {
        "invoice": {
            "home": {
                "title": "Invoices"
            },
            "detail": {
                "title": "Invoice"
            }
        }
    }
}
"#;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn fixture() -> (TempDir, Project) {
    let dir = tempdir().unwrap();
    let root = dir.path();

    write(
        root,
        CONFIG_FILE,
        r#"{
            "baseName": "sample",
            "tenantName": "Company",
            "clientFramework": "angular",
            "enableTranslation": true,
            "languages": ["en"],
            "testFrameworks": []
        }"#,
    );
    write(
        root,
        &format!("{ENTITY_STORE_DIR}/Invoice.json"),
        r#"{
            "name": "Invoice",
            "fields": [{ "fieldName": "code", "fieldType": "String" }],
            "relationships": [
                { "relationshipName": "company", "otherEntityName": "Company",
                  "relationshipType": "many-to-one", "otherEntityField": "name" }
            ],
            "service": "no",
            "dto": "no"
        }"#,
    );
    write(
        root,
        "src/main/webapp/app/entities/invoice/invoice-detail.component.html",
        DETAIL_HTML,
    );
    write(root, "src/main/webapp/app/shared/model/invoice.model.ts", MODEL_TS);
    write(root, "src/main/webapp/i18n/en/invoice.json", I18N_JSON);

    let project = Project::load(root).unwrap();
    (dir, project)
}

#[test]
fn test_retrofit_success() {
    let (dir, mut project) = fixture();
    let original_detail = std::fs::read_to_string(
        dir.path()
            .join("src/main/webapp/app/entities/invoice/invoice-detail.component.html"),
    )
    .unwrap();

    let outcome = retrofit(&mut project, "invoice", &RetrofitOptions::default()).unwrap();

    assert_eq!(outcome.entity, "Invoice");
    assert_eq!(outcome.tenant, "Company");
    assert_eq!(outcome.variant, FrameworkVariant::Angular);
    assert_eq!(outcome.files_patched.len(), 3);
    // Update/list views were never generated in this fixture
    assert!(!outcome.files_skipped.is_empty());

    // Detail view: injected block precedes the intact anchor, and the file
    // grew by exactly the injected bytes
    let detail = std::fs::read_to_string(&outcome.files_patched[0]).unwrap();
    assert!(detail.contains("</dl>"));
    let block_start = detail.find("<dt><span>Company</span></dt>").unwrap();
    assert!(block_start < detail.find("</dl>").unwrap());
    assert!(detail.contains("{{invoice.company?.name}}"));
    // Everything around the insertion point is preserved byte for byte
    let anchor_pos = original_detail.find("</dl>").unwrap();
    assert!(detail.starts_with(&original_detail[..anchor_pos]));
    assert!(detail.ends_with(&original_detail[anchor_pos..]));
    assert!(detail.len() > original_detail.len());

    // Shared model: import plus optional tenant field
    let model = std::fs::read_to_string(
        dir.path()
            .join("src/main/webapp/app/shared/model/invoice.model.ts"),
    )
    .unwrap();
    assert!(model.starts_with(
        "import { Company } from 'app/admin/company-management/company.model';\n\nexport interface IInvoice {"
    ));
    assert!(model.contains("company?: Company;\n    name?: string;"));

    // Locale resource: tenant label injected before the detail section
    let i18n = std::fs::read_to_string(dir.path().join("src/main/webapp/i18n/en/invoice.json")).unwrap();
    assert!(i18n.contains("\"company\": \"Company\","));
    let parsed: serde_json::Value = serde_json::from_str(&i18n).unwrap();
    assert_eq!(parsed["tenantryApp"]["invoice"]["company"], "Company");

    // Registry committed, normalized, persisted
    let reloaded = Project::load(dir.path()).unwrap();
    assert_eq!(reloaded.config.tenantised_entities, vec!["invoice"]);
    assert_eq!(project.config.tenantised_entities, vec!["invoice"]);

    // Metadata merged: exactly one tenant relationship, service upgraded
    let entity = reloaded.load_entity("Invoice").unwrap();
    assert_eq!(entity.relationships_to("Company"), 1);
    assert_eq!(entity.service.as_deref(), Some("serviceClass"));
}

#[test]
fn test_retrofit_rejects_tenant_entity() {
    let (dir, mut project) = fixture();

    let err = retrofit(&mut project, "company", &RetrofitOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        PatchError::Core(CoreError::ReservedEntity { name }) if name == "company"
    ));

    // Zero mutations
    let reloaded = Project::load(dir.path()).unwrap();
    assert!(reloaded.config.tenantised_entities.is_empty());
}

#[test]
fn test_retrofit_rejects_already_processed() {
    let (dir, mut project) = fixture();
    project.config.tenantised_entities.push("invoice".to_string());
    project.save_config().unwrap();

    let before = std::fs::read_to_string(
        dir.path()
            .join("src/main/webapp/app/entities/invoice/invoice-detail.component.html"),
    )
    .unwrap();
    let entity_before =
        std::fs::read_to_string(dir.path().join(format!("{ENTITY_STORE_DIR}/Invoice.json")))
            .unwrap();

    let err = retrofit(&mut project, "Invoice", &RetrofitOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        PatchError::Core(CoreError::AlreadyProcessed { .. })
    ));

    // Files and metadata byte-for-byte unchanged
    let after = std::fs::read_to_string(
        dir.path()
            .join("src/main/webapp/app/entities/invoice/invoice-detail.component.html"),
    )
    .unwrap();
    let entity_after =
        std::fs::read_to_string(dir.path().join(format!("{ENTITY_STORE_DIR}/Invoice.json")))
            .unwrap();
    assert_eq!(before, after);
    assert_eq!(entity_before, entity_after);
}

#[test]
fn test_retrofit_unknown_entity() {
    let (_dir, mut project) = fixture();
    let err = retrofit(&mut project, "Shipment", &RetrofitOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        PatchError::Core(CoreError::EntityNotFound { name }) if name == "Shipment"
    ));
}

#[test]
fn test_retrofit_requires_tenant() {
    let dir = tempdir().unwrap();
    write(dir.path(), CONFIG_FILE, "{}");
    let mut project = Project::load(dir.path()).unwrap();

    let err = retrofit(&mut project, "Invoice", &RetrofitOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        PatchError::Core(CoreError::TenantNotConfigured)
    ));
}

#[test]
fn test_retrofit_anchor_mismatch_aborts_without_commit() {
    let (dir, mut project) = fixture();
    // Diverged detail view: the closing definition list is gone
    write(
        dir.path(),
        "src/main/webapp/app/entities/invoice/invoice-detail.component.html",
        "<div>restructured template</div>\n",
    );

    let err = retrofit(&mut project, "Invoice", &RetrofitOptions::default()).unwrap_err();
    match err {
        PatchError::AnchorNotFoundIn { path, anchor } => {
            assert!(path.ends_with("invoice-detail.component.html"));
            assert_eq!(anchor, "</dl>");
        }
        other => panic!("unexpected error: {other}"),
    }

    // No registry commit, and later catalog targets were never touched
    let reloaded = Project::load(dir.path()).unwrap();
    assert!(reloaded.config.tenantised_entities.is_empty());
    let model = std::fs::read_to_string(
        dir.path()
            .join("src/main/webapp/app/shared/model/invoice.model.ts"),
    )
    .unwrap();
    assert_eq!(model, MODEL_TS);
}

#[test]
fn test_retrofit_language_override() {
    let (dir, mut project) = fixture();
    write(dir.path(), "src/main/webapp/i18n/fr/invoice.json", I18N_JSON);

    let opts = RetrofitOptions {
        languages: Some(vec!["fr".to_string()]),
        ..Default::default()
    };
    retrofit(&mut project, "Invoice", &opts).unwrap();

    let fr = std::fs::read_to_string(dir.path().join("src/main/webapp/i18n/fr/invoice.json")).unwrap();
    assert!(fr.contains("\"company\": \"Company\","));
    // The configured "en" locale was overridden away
    let en = std::fs::read_to_string(dir.path().join("src/main/webapp/i18n/en/invoice.json")).unwrap();
    assert_eq!(en, I18N_JSON);
}

#[test]
fn test_retrofit_react_variant() {
    let (dir, mut project) = fixture();
    write(
        dir.path(),
        "src/main/webapp/app/entities/invoice/invoice-detail.tsx",
        "<dl className=\"jh-entity-details\">\n          </dl>\n",
    );

    let opts = RetrofitOptions {
        framework: Some("react".to_string()),
        ..Default::default()
    };
    let outcome = retrofit(&mut project, "Invoice", &opts).unwrap();
    assert_eq!(outcome.variant, FrameworkVariant::React);

    let detail = std::fs::read_to_string(
        dir.path()
            .join("src/main/webapp/app/entities/invoice/invoice-detail.tsx"),
    )
    .unwrap();
    assert!(detail.contains("<dt>Company</dt>"));
    // The react model snippet uses the interface import form
    let model = std::fs::read_to_string(
        dir.path()
            .join("src/main/webapp/app/shared/model/invoice.model.ts"),
    )
    .unwrap();
    assert!(model.contains("import { ICompany } from 'app/shared/model/company.model';"));
}
