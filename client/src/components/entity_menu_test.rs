use super::*;

fn route(key: &str, label: &str) -> EntityRoute {
    EntityRoute {
        id: format!("r-{key}"),
        key: key.to_owned(),
        slug: key.to_owned(),
        label: label.to_owned(),
        icon: None,
        entity_type: key.to_owned(),
        is_active: true,
        order_index: 0,
        config: serde_json::Value::Null,
    }
}

#[test]
fn entity_href_nests_under_dashboard() {
    assert_eq!(entity_href("customers"), "/dashboard/customers");
}

#[test]
fn filter_routes_blank_query_keeps_order() {
    let routes = vec![route("orders", "Orders"), route("customers", "Customers")];
    let keys: Vec<String> = filter_routes(&routes, " ").into_iter().map(|r| r.key).collect();
    assert_eq!(keys, vec!["orders", "customers"]);
}

#[test]
fn filter_routes_matches_label_or_key() {
    let routes = vec![route("orders", "Purchase orders"), route("cust", "Customers")];
    assert_eq!(filter_routes(&routes, "PURCHASE").len(), 1);
    assert_eq!(filter_routes(&routes, "cust")[0].label, "Customers");
    assert!(filter_routes(&routes, "invoices").is_empty());
}
