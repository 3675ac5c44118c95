use apiref_core::MenuRenderer;
use apiref_core::config::SelectionConfig;
use apiref_core::derive::derive_menu;
use apiref_core::menu::{self, MenuState, Selection};
use apiref_core::parse;
use apiref_html::{HtmlConfig, HtmlGenerator};

const COMMERCE: &str = include_str!("../../apiref-core/tests/fixtures/commerce.yaml");

fn render_commerce(selection_cfg: &SelectionConfig, html_cfg: &HtmlConfig) -> String {
    let spec = parse::from_yaml(COMMERCE).unwrap();
    let (document, index) = derive_menu(&spec);
    let selection = Selection::resolve(selection_cfg, &document, &index);
    let state = MenuState::new(&document, &selection);
    let view = menu::view(&document, &index, &selection, &state);

    let files = HtmlGenerator.render(&view, html_cfg).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "menu.html");
    files[0].content.clone()
}

#[test]
fn render_fragment_with_selected_resource() {
    let selection = SelectionConfig {
        active_section: 0,
        resource: Some("Orders".to_string()),
        operation: None,
    };
    let html = render_commerce(&selection, &HtmlConfig::default());

    // All three section headings render; only the active one has children
    assert!(html.contains(r#"<h4 class="section">Orders and Fulfillment <span class="chevron">▴</span></h4>"#));
    assert!(html.contains(r#"<h4 class="section">Identity <span class="chevron">▾</span></h4>"#));
    assert!(html.contains(r#"<h4 class="section">Catalog <span class="chevron">▾</span></h4>"#));

    assert!(html.contains(r#"<div class="resource resource-active">Orders"#));
    assert!(html.contains(r#"<div class="resource">LineItems"#));
    assert!(!html.contains("Users.List"));

    // The selected resource's operations link by operationId, labels shown
    // with dots as spaces
    assert!(html.contains(r##"<a class="operation" href="#Orders.List">Orders List</a>"##));
    assert!(html.contains(r##"<a class="operation" href="#Orders.Submit">Orders Submit</a>"##));

    // The orphaned tag never renders
    assert!(!html.contains("Internal"));

    // Fragment mode: no page chrome
    assert!(!html.contains("<!doctype html>"));
}

#[test]
fn render_selected_operation_activates_owner() {
    let selection = SelectionConfig {
        active_section: 1,
        resource: None,
        operation: Some("Users.List".to_string()),
    };
    let html = render_commerce(&selection, &HtmlConfig::default());

    assert!(html.contains(r#"<div class="resource resource-active">Users"#));
    assert!(html.contains(r##"<a class="operation" href="#Users.List">Users List</a>"##));

    // Sections outside the active one stay collapsed
    assert!(!html.contains(r#"<div class="resource resource-active">Orders"#));
}

#[test]
fn render_standalone_page() {
    let selection = SelectionConfig::default();
    let config = HtmlConfig {
        standalone: true,
        title: "Storefront docs".to_string(),
    };
    let html = render_commerce(&selection, &config);

    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("<title>Storefront docs</title>"));
    assert!(html.contains(r#"<nav class="api-reference-menu">"#));
}

#[test]
fn render_unknown_selection_names_select_nothing() {
    let selection = SelectionConfig {
        active_section: 0,
        resource: Some("NoSuchResource".to_string()),
        operation: Some("NoSuchOperation".to_string()),
    };
    let html = render_commerce(&selection, &HtmlConfig::default());

    assert!(!html.contains("resource-active"));
    assert!(!html.contains("<li>"));
}
