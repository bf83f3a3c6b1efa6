use super::*;
use crate::template::{RenderContext, SnippetEnv};
use tn_core::NameVariants;

fn ctx() -> RenderContext {
    RenderContext::new(
        NameVariants::derive("Company"),
        NameVariants::derive("Invoice"),
        true,
    )
}

#[test]
fn test_variant_from_config() {
    assert_eq!(
        FrameworkVariant::from_config(Some("react")),
        FrameworkVariant::React
    );
    assert_eq!(
        FrameworkVariant::from_config(Some("angular")),
        FrameworkVariant::Angular
    );
    // Legacy spelling used by older generators
    assert_eq!(
        FrameworkVariant::from_config(Some("angularX")),
        FrameworkVariant::Angular
    );
    assert_eq!(FrameworkVariant::from_config(None), FrameworkVariant::Angular);
}

#[test]
fn test_unknown_variant_falls_back_to_default() {
    assert_eq!(
        FrameworkVariant::from_config(Some("vue")),
        FrameworkVariant::default()
    );
}

#[test]
fn test_catalogs_are_non_empty() {
    assert!(!for_variant(FrameworkVariant::Angular).is_empty());
    assert!(!for_variant(FrameworkVariant::React).is_empty());
}

#[test]
fn test_every_template_renders() {
    let env = SnippetEnv::new();
    let ctx = ctx().with_language("en");
    for variant in [FrameworkVariant::Angular, FrameworkVariant::React] {
        for file in for_variant(variant) {
            let path = env.render(file.path, &ctx).unwrap();
            assert!(!path.contains("{{"), "unrendered path: {path}");
            for op in file.ops {
                env.render(op.anchor, &ctx).unwrap();
                env.render(op.template, &ctx).unwrap();
                if let CatalogVerb::ReplaceThrough { end } = op.verb {
                    env.render(end, &ctx).unwrap();
                }
            }
        }
    }
}

#[test]
fn test_angular_paths_for_invoice() {
    let env = SnippetEnv::new();
    let paths: Vec<String> = for_variant(FrameworkVariant::Angular)
        .iter()
        .filter(|f| f.guard == Guard::Always)
        .map(|f| env.render(f.path, &ctx()).unwrap())
        .collect();

    assert!(paths.contains(
        &"src/main/webapp/app/entities/invoice/invoice-detail.component.html".to_string()
    ));
    assert!(paths.contains(&"src/main/webapp/app/shared/model/invoice.model.ts".to_string()));
}

#[test]
fn test_translation_entries_bind_language() {
    let env = SnippetEnv::new();
    let entry = for_variant(FrameworkVariant::Angular)
        .iter()
        .find(|f| f.guard == Guard::Translation)
        .unwrap();
    let path = env.render(entry.path, &ctx().with_language("fr")).unwrap();
    assert_eq!(path, "src/main/webapp/i18n/fr/invoice.json");
}

#[test]
fn test_model_snippet_renders_expected_field() {
    let env = SnippetEnv::new();
    let entry = for_variant(FrameworkVariant::Angular)
        .iter()
        .find(|f| f.path.contains("shared/model"))
        .unwrap();
    let snippet = env.render(entry.ops[1].template, &ctx()).unwrap();
    assert!(snippet.starts_with("company?: Company;"));
}

#[test]
fn test_angular_moustaches_render_literally() {
    let env = SnippetEnv::new();
    let entry = for_variant(FrameworkVariant::Angular)
        .iter()
        .find(|f| f.path.contains("-detail.component.html"))
        .unwrap();
    let snippet = env.render(entry.ops[0].template, &ctx()).unwrap();
    assert!(snippet.contains("{{invoice.company?.name}}"));
}
