use serde_json::json;
use weft_core::catalog::{CatalogError, ComponentCatalog, ComponentDescriptor};

#[test]
fn builtin_catalog_carries_native_and_widget_registrations() {
    let catalog = ComponentCatalog::builtin();

    let native: Vec<&str> = catalog.list_native().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        native,
        vec!["Text", "Image", "Row", "Column", "Card", "Button", "Icon"]
    );

    let custom: Vec<&str> = catalog.list_custom().iter().map(|d| d.name.as_str()).collect();
    assert!(custom.contains(&"BarGraph"));
    assert!(custom.contains(&"OutageTable"));
}

#[test]
fn lookups_are_case_insensitive() {
    let catalog = ComponentCatalog::builtin();
    assert_eq!(catalog.get_native("text").unwrap().name, "Text");
    assert_eq!(catalog.get_native("TEXT").unwrap().name, "Text");
    assert_eq!(catalog.get_custom("bargraph").unwrap().name, "BarGraph");
}

#[test]
fn missing_entry_is_not_found_not_a_panic() {
    let catalog = ComponentCatalog::builtin();
    assert_eq!(
        catalog.get_native("Sparkline").unwrap_err(),
        CatalogError::NotFound("Sparkline".to_string())
    );
    assert_eq!(
        catalog.get_custom("Sparkline").unwrap_err(),
        CatalogError::NotFound("Sparkline".to_string())
    );
}

#[test]
fn restricted_view_distinguishes_disallowed_from_missing() {
    let catalog = ComponentCatalog::builtin();
    let view = catalog.restrict(&["BarGraph".to_string()]);

    assert!(view.get_custom("bargraph").is_ok());

    match view.get_custom("LineGraph").unwrap_err() {
        CatalogError::NotAllowed { name, allowed } => {
            assert_eq!(name, "LineGraph");
            assert_eq!(allowed, vec!["bargraph"]);
        }
        other => panic!("expected NotAllowed, got {other:?}"),
    }

    // Unknown and disallowed: the allow-list check wins.
    assert!(matches!(
        view.get_custom("Sparkline").unwrap_err(),
        CatalogError::NotAllowed { .. }
    ));
}

#[test]
fn restricted_view_filters_listing() {
    let catalog = ComponentCatalog::builtin();
    let view = catalog.restrict(&["KpiCard".to_string()]);
    let names: Vec<&str> = view.list_custom().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["KpiCard"]);

    // Native listing is unaffected by the restriction.
    assert_eq!(view.list_native().len(), 7);
}

#[test]
fn inline_entries_shadow_builtins_on_lookup() {
    let inline = vec![ComponentDescriptor::new(
        "BarGraph",
        "caller-supplied bar graph",
        json!({"type": "object", "properties": {"dataPath": {"type": "string"}}}),
    )];
    let catalog = ComponentCatalog::builtin().with_inline(inline);

    let hit = catalog.get_custom("BarGraph").unwrap();
    assert_eq!(hit.description, "caller-supplied bar graph");
}

#[test]
fn inline_entries_add_new_components() {
    let inline = vec![ComponentDescriptor::new(
        "GaugeDial",
        "gauge",
        json!({"type": "object"}),
    )];
    let catalog = ComponentCatalog::builtin().with_inline(inline);
    assert!(catalog.get_custom("gaugedial").is_ok());
    assert!(catalog
        .list_custom()
        .iter()
        .any(|d| d.name == "GaugeDial"));
}
