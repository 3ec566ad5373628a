//! Add-product, pick, discount and drag flow against one store.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;

use shelf_core::{DiscountKind, Product, Variant, PLACEHOLDER_IMAGE_SRC};
use shelf_store::{
    DiscountEditor, DiscountTarget, DragGesture, DragScope, EditorView, PickTarget, ProductStore,
    Slice,
};

fn picked(id: i64, variant_ids: &[i64]) -> Product {
    Product {
        id,
        title: format!("Product {id}"),
        image: None,
        variants: variant_ids
            .iter()
            .map(|v| Variant {
                id: *v,
                product_id: id,
                title: format!("Variant {v}"),
                price: "20.00".to_string(),
            })
            .collect(),
    }
}

#[test]
fn placeholder_pick_discount_and_drag() {
    let mut store = ProductStore::new();
    let snapshots = Rc::new(RefCell::new(0_usize));
    let s = Rc::clone(&snapshots);
    store.subscribe(Slice::List, move |_| *s.borrow_mut() += 1);

    store.add_placeholder();
    let placeholder = store.get(0).unwrap();
    assert!(placeholder.is_placeholder());
    assert_eq!(placeholder.image_src(), PLACEHOLDER_IMAGE_SRC);

    // The picker expands the single placeholder row into two products.
    store
        .apply_pick(
            PickTarget::Replace(0),
            vec![picked(100, &[1, 2]), picked(200, &[3])],
        )
        .unwrap();
    store.add_placeholder();
    assert_eq!(store.len(), 3);
    assert!(store.positions_consistent());

    let mut editor = DiscountEditor::new(DiscountTarget::Product(200));
    editor.begin_editing();
    editor.set_draft_kind(DiscountKind::Flat);
    editor.set_draft_value("5");
    assert!(editor.commit(&mut store));

    let mut variant_editor = DiscountEditor::new(DiscountTarget::Variant {
        product_id: 100,
        variant_id: 2,
    });
    variant_editor.begin_editing();
    variant_editor.set_draft_value("10");
    assert!(variant_editor.commit(&mut store));

    let mut drag = DragGesture::new();
    drag.begin(DragScope::Products, 1);
    assert_eq!(drag.hover(&mut store, DragScope::Products, 0), Ok(true));
    assert_eq!(drag.finish(), Some(0));

    let mut variant_drag = DragGesture::new();
    let scope = DragScope::Variants { row: 1 };
    variant_drag.begin(scope, 1);
    assert_eq!(variant_drag.hover(&mut store, scope, 0), Ok(true));

    let first = store.get(0).unwrap();
    assert_eq!(first.id, 200);
    assert!(!first.has_multiple_variants());
    let second = store.get(1).unwrap();
    assert_eq!(second.id, 100);
    assert!(second.has_multiple_variants());

    let body = serde_json::to_value(&store.products()[..2]).unwrap();
    assert_eq!(body[0]["position"], json!(0));
    assert_eq!(body[0]["discount"], json!({"type": "flat", "value": 5.0}));
    assert_eq!(body[1]["position"], json!(1));
    assert!(body[1].get("discount").is_none());
    assert_eq!(body[1]["variants"][0]["id"], json!(2));
    assert_eq!(body[1]["variants"][0]["position"], json!(0));
    assert_eq!(
        body[1]["variants"][0]["discount"],
        json!({"type": "percentage", "value": 10.0})
    );
    assert!(body[1]["variants"][1].get("discount").is_none());

    editor.clear(&mut store);
    assert_eq!(editor.view(&store), EditorView::Add);

    // add, replace, add, two commits, two reorders, clear
    assert_eq!(*snapshots.borrow(), 8);
}

#[test]
fn removing_rows_then_renumbering_restores_positions() {
    let mut store = ProductStore::new();
    store
        .apply_pick(
            PickTarget::Append,
            vec![picked(1, &[10]), picked(2, &[20]), picked(3, &[30])],
        )
        .unwrap();

    store.remove_product(2);
    assert!(!store.positions_consistent());
    store.renumber();
    assert!(store.positions_consistent());

    let mut drag = DragGesture::new();
    drag.begin(DragScope::Products, 0);
    drag.hover(&mut store, DragScope::Products, 1).unwrap();
    let ids: Vec<i64> = store.products().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1]);
}
