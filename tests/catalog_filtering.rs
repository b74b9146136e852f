//! Filtering engine and basket behaviour through the public API.

mod common;

use common::*;
use product_catalog::catalog::{compute_visible, Basket, CategorySelection, Product};

fn mixed_catalog() -> Vec<Product> {
    vec![
        product(1, "Red Shirt", "clothes"),
        product(2, "Blue Mug", "kitchen"),
        product(3, "Red Mug", "kitchen"),
        product(4, "Kitchen Towel", "home"),
        product(5, "REDWOOD Chair", "furniture"),
        product(6, "Mug Rack", "kitchen"),
        product(7, "Shirt Hanger", "home"),
    ]
}

#[test]
fn category_filter_is_exact_and_complete() {
    let list = mixed_catalog();
    for category in ["clothes", "kitchen", "home", "furniture", "garden"] {
        let visible = compute_visible(Some(&list), &CategorySelection::from_label(category), "");
        let expected: Vec<u64> = list
            .iter()
            .filter(|p| p.category == category)
            .map(|p| p.id)
            .collect();
        assert_eq!(ids(&visible), expected, "category {category}");
    }
}

#[test]
fn query_filter_keeps_only_case_insensitive_title_matches() {
    let list = mixed_catalog();
    for query in ["red", "RED", "mug", "Shirt", "kitchen", "zzz", "r"] {
        let visible = compute_visible(Some(&list), &CategorySelection::All, query);
        let needle = query.to_lowercase();
        assert!(visible
            .iter()
            .all(|p| p.title.to_lowercase().contains(&needle)));
        let expected = list
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .count();
        assert_eq!(visible.len(), expected, "query {query}");
    }
}

#[test]
fn query_does_not_match_category_label() {
    let list = mixed_catalog();
    let visible = compute_visible(Some(&list), &CategorySelection::All, "kitchen");
    assert_eq!(ids(&visible), vec![4]);
}

#[test]
fn output_is_subset_in_input_order() {
    let list = mixed_catalog();
    let visible = compute_visible(Some(&list), &CategorySelection::All, "r");
    let positions: Vec<usize> = visible
        .iter()
        .map(|v| list.iter().position(|p| p == v).expect("not from raw list"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let list = mixed_catalog();
    let category = CategorySelection::from_label("kitchen");
    let first = compute_visible(Some(&list), &category, "mug");
    let second = compute_visible(Some(&list), &category, "mug");
    assert_eq!(first, second);
    assert_eq!(list, mixed_catalog());
}

#[test]
fn absent_list_is_empty_for_any_criteria() {
    for (category, query) in [("all", ""), ("kitchen", ""), ("all", "red"), ("x", "y")] {
        let visible = compute_visible(None, &CategorySelection::from_label(category), query);
        assert!(visible.is_empty());
    }
}

#[test]
fn kitchen_red_scenario_yields_red_mug_only() {
    let list = shirt_and_mugs();
    let visible = compute_visible(Some(&list), &CategorySelection::from_label("kitchen"), "red");
    assert_eq!(ids(&visible), vec![3]);
}

#[test]
fn basket_keeps_order_and_duplicates() {
    let p1 = product(1, "Red Shirt", "clothes");
    let p2 = product(2, "Blue Mug", "kitchen");
    let mut basket = Basket::new();
    basket.add(p1.clone());
    basket.add(p2.clone());
    basket.add(p1.clone());
    assert_eq!(basket.list(), vec![p1.clone(), p2, p1]);
}
