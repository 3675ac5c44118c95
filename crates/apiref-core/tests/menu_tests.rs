use apiref_core::menu::{
    ApiDocument, ApiOperation, ApiResource, ApiSection, MenuEvent, MenuState, OperationIndex,
    Selection, view,
};

fn section(x_id: &str, name: &str) -> ApiSection {
    ApiSection {
        x_id: x_id.to_string(),
        name: name.to_string(),
    }
}

fn resource(section_id: &str, name: &str) -> ApiResource {
    ApiResource {
        x_section_id: section_id.to_string(),
        name: name.to_string(),
    }
}

fn operation(id: &str, summary: &str, owner: &ApiResource) -> ApiOperation {
    ApiOperation {
        operation_id: id.to_string(),
        summary: summary.to_string(),
        resource: owner.clone(),
    }
}

fn two_section_doc() -> ApiDocument {
    ApiDocument {
        sections: vec![section("s1", "Orders"), section("s2", "Users")],
        resources: vec![resource("s1", "Order"), resource("s2", "User")],
    }
}

#[test]
fn active_section_renders_its_resources_only() {
    let doc = two_section_doc();
    let selection = Selection {
        active_index: 0,
        ..Selection::default()
    };
    let state = MenuState::new(&doc, &selection);

    let menu = view(&doc, &OperationIndex::new(), &selection, &state);

    assert_eq!(menu.sections.len(), 2);

    let orders = &menu.sections[0];
    assert!(orders.active);
    assert!(orders.open);
    let names: Vec<&str> = orders.resources.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Order"]);

    // The collapsed section renders no children at all
    let users = &menu.sections[1];
    assert!(!users.active);
    assert!(!users.open);
    assert!(users.resources.is_empty());
}

#[test]
fn section_children_are_the_matching_subsequence_in_order() {
    let doc = ApiDocument {
        sections: vec![section("s1", "Commerce")],
        resources: vec![
            resource("s1", "Orders"),
            resource("s2", "Elsewhere"),
            resource("s1", "LineItems"),
            resource("", "Orphan"),
            resource("s1", "Promotions"),
        ],
    };
    let selection = Selection::default();
    let state = MenuState::new(&doc, &selection);

    let menu = view(&doc, &OperationIndex::new(), &selection, &state);

    let names: Vec<&str> = menu.sections[0]
        .resources
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Orders", "LineItems", "Promotions"]);
}

#[test]
fn active_resource_renders_operation_links() {
    let doc = two_section_doc();
    let order = doc.resources[0].clone();
    let index =
        OperationIndex::from_operations(vec![operation("op1", "List.Orders", &order)]);
    let selection = Selection {
        active_index: 0,
        selected_resource: Some(order),
        selected_operation: None,
    };
    let state = MenuState::new(&doc, &selection);

    let menu = view(&doc, &index, &selection, &state);

    let order_view = &menu.sections[0].resources[0];
    assert!(order_view.active);
    assert!(order_view.open);
    assert_eq!(order_view.operations.len(), 1);
    assert_eq!(order_view.operations[0].label, "List Orders");
    assert_eq!(order_view.operations[0].href, "#op1");
    assert_eq!(order_view.operations[0].operation_id, "op1");
}

#[test]
fn inactive_resource_renders_no_operations() {
    let doc = two_section_doc();
    let order = doc.resources[0].clone();
    let index =
        OperationIndex::from_operations(vec![operation("op1", "List.Orders", &order)]);
    // Section 0 is active but no resource is selected
    let selection = Selection {
        active_index: 0,
        ..Selection::default()
    };
    let state = MenuState::new(&doc, &selection);

    let menu = view(&doc, &index, &selection, &state);

    let order_view = &menu.sections[0].resources[0];
    assert!(!order_view.active);
    assert!(order_view.operations.is_empty());
}

#[test]
fn resource_with_no_index_entry_renders_no_operations() {
    let doc = two_section_doc();
    let order = doc.resources[0].clone();
    let selection = Selection {
        active_index: 0,
        selected_resource: Some(order),
        selected_operation: None,
    };
    let state = MenuState::new(&doc, &selection);

    // The index has no entry for "Order" at all
    let menu = view(&doc, &OperationIndex::new(), &selection, &state);

    let order_view = &menu.sections[0].resources[0];
    assert!(order_view.active);
    assert!(order_view.operations.is_empty());
}

#[test]
fn no_selection_marks_no_resource_active() {
    let doc = two_section_doc();
    let selection = Selection {
        active_index: 0,
        selected_resource: None,
        selected_operation: None,
    };
    let state = MenuState::new(&doc, &selection);

    let menu = view(&doc, &OperationIndex::new(), &selection, &state);

    assert!(
        menu.sections
            .iter()
            .flat_map(|s| &s.resources)
            .all(|r| !r.active)
    );
}

#[test]
fn selected_operation_activates_its_owning_resource() {
    let doc = two_section_doc();
    let user = doc.resources[1].clone();
    let selection = Selection {
        active_index: 1,
        selected_resource: None,
        selected_operation: Some(operation("u1", "Users.List", &user)),
    };
    let state = MenuState::new(&doc, &selection);

    let menu = view(&doc, &OperationIndex::new(), &selection, &state);

    assert!(menu.sections[1].resources[0].active);
}

#[test]
fn duplicate_section_ids_follow_the_first_occurrence() {
    let mut doc = two_section_doc();
    doc.sections.push(section("s1", "Orders duplicate"));
    let selection = Selection {
        active_index: 0,
        ..Selection::default()
    };
    let state = MenuState::new(&doc, &selection);

    let menu = view(&doc, &OperationIndex::new(), &selection, &state);

    // Both sections sharing s1 resolve to index 0, so both are active
    assert!(menu.sections[0].active);
    assert!(!menu.sections[1].active);
    assert!(menu.sections[2].active);
}

#[test]
fn out_of_range_active_index_activates_nothing() {
    let doc = two_section_doc();
    let selection = Selection {
        active_index: 7,
        ..Selection::default()
    };
    let state = MenuState::new(&doc, &selection);

    let menu = view(&doc, &OperationIndex::new(), &selection, &state);

    assert!(menu.sections.iter().all(|s| !s.active));
    assert!(menu.sections.iter().all(|s| s.resources.is_empty()));
}

#[test]
fn empty_document_renders_empty_view() {
    let doc = ApiDocument::default();
    let selection = Selection::default();
    let state = MenuState::new(&doc, &selection);

    let menu = view(&doc, &OperationIndex::new(), &selection, &state);
    assert!(menu.sections.is_empty());
}

#[test]
fn clicks_always_notify() {
    let doc = two_section_doc();
    let selection = Selection {
        active_index: 0,
        ..Selection::default()
    };
    let mut state = MenuState::new(&doc, &selection);

    // Section 0 starts open; both the collapsing and the expanding click
    // report it as the chosen section
    assert_eq!(state.click_section(&doc, 0), MenuEvent::SectionChange(0));
    assert_eq!(state.click_section(&doc, 0), MenuEvent::SectionChange(0));

    assert_eq!(
        state.click_resource(&doc, 0),
        MenuEvent::ResourceChange("Order".to_string())
    );

    let order = doc.resources[0].clone();
    let op = operation("op1", "List.Orders", &order);
    assert_eq!(
        state.click_operation(&op),
        MenuEvent::OperationChange(op.clone())
    );
}

#[test]
fn local_open_does_not_reveal_children() {
    let doc = two_section_doc();
    let selection = Selection {
        active_index: 0,
        ..Selection::default()
    };
    let mut state = MenuState::new(&doc, &selection);

    // Clicking the inactive Users section flips its chevron...
    let event = state.click_section(&doc, 1);
    assert_eq!(event, MenuEvent::SectionChange(1));
    assert!(state.section_is_open(1));

    // ...but with the selection unchanged its children stay hidden
    let menu = view(&doc, &OperationIndex::new(), &selection, &state);
    assert!(menu.sections[1].open);
    assert!(!menu.sections[1].active);
    assert!(menu.sections[1].resources.is_empty());

    // Once the owner moves the selection, the children appear
    let moved = Selection {
        active_index: 1,
        ..Selection::default()
    };
    let menu = view(&doc, &OperationIndex::new(), &moved, &state);
    assert!(menu.sections[1].active);
    assert_eq!(menu.sections[1].resources.len(), 1);
}
