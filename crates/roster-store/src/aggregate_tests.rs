use super::*;
use serde_json::json;

fn join(id: i64, name: &str, city: &str, member: Option<&str>) -> JoinRow {
    JoinRow {
        company_id: id,
        company_name: Some(name.to_string()),
        company_city: Some(city.to_string()),
        member: member.map(str::to_string),
    }
}

fn row(value: serde_json::Value) -> Row {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("test rows must be objects"),
    }
}

#[test]
fn test_merges_rows_of_same_company() {
    let groups = group_by_company(vec![
        join(17, "Foodies.", "London\r", Some("Alex ")),
        join(17, "Foodies.", "London\r", Some("McDen")),
    ]);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].members, ["Alex", "McDen"]);
}

#[test]
fn test_company_without_members_kept() {
    let groups = group_by_company(vec![
        join(16, "Akas Foods", "Delhi\r", None),
        join(18, "Order All", "Boston\r", None),
    ]);

    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|g| g.members.is_empty()));
}

#[test]
fn test_normalizes_name_and_city() {
    let groups = group_by_company(vec![join(1, "  Jack Hill Ltd ", " Lon\r\ndon\r ", None)]);
    assert_eq!(groups[0].name.as_deref(), Some("Jack Hill Ltd"));
    assert_eq!(groups[0].city.as_deref(), Some("Lon\ndon"));
}

#[test]
fn test_first_seen_order_preserved() {
    let groups = group_by_company(vec![
        join(19, "A", "X", Some("one")),
        join(15, "B", "Y", None),
        join(19, "A", "X", Some("two")),
        join(16, "C", "Z", Some("three")),
    ]);

    let ids: Vec<i64> = groups.iter().map(|g| g.id).collect();
    assert_eq!(ids, [19, 15, 16]);
    assert_eq!(groups[0].members, ["one", "two"]);
}

#[test]
fn test_every_member_lands_in_exactly_one_group() {
    let rows = vec![
        join(1, "A", "X", Some(" a1 ")),
        join(2, "B", "Y", Some("b1")),
        join(1, "A", "X", Some("a2")),
        join(3, "C", "Z", None),
        join(2, "B", "Y", Some("b2 ")),
    ];
    let non_null = rows.iter().filter(|r| r.member.is_some()).count();

    let groups = group_by_company(rows);
    let total: usize = groups.iter().map(|g| g.members.len()).sum();
    assert_eq!(total, non_null);
    assert_eq!(groups.len(), 3);
    assert!(groups
        .iter()
        .flat_map(|g| &g.members)
        .all(|m| m.trim() == m));
}

#[test]
fn test_empty_member_name_is_kept() {
    let groups = group_by_company(vec![join(1, "A", "X", Some("   "))]);
    assert_eq!(groups[0].members, [""]);
}

#[test]
fn test_aggregation_is_repeatable() {
    let rows = vec![
        join(2, "B", "Y\r", Some("b1")),
        join(1, "A", "X", None),
        join(2, "B", "Y\r", Some("b2")),
    ];
    let first = group_by_company(rows.clone());
    let second = group_by_company(rows);
    assert_eq!(first, second);
}

#[test]
fn test_empty_input() {
    assert!(group_by_company(Vec::new()).is_empty());
}

#[test]
fn test_join_row_from_result_row() {
    let r = row(json!({
        "COMPANY_ID": 18,
        "COMPANY_NAME": "Order All",
        "COMPANY_CITY": "Boston\r",
        "AGENT_NAME": null
    }));
    let parsed = JoinRow::from_row(&r, "AGENT_NAME").unwrap();
    assert_eq!(parsed.company_id, 18);
    assert_eq!(parsed.company_city.as_deref(), Some("Boston\r"));
    assert!(parsed.member.is_none());
}

#[test]
fn test_join_row_accepts_string_id() {
    let r = row(json!({ "COMPANY_ID": "19", "CUST_NAME": "Holmes" }));
    let parsed = JoinRow::from_row(&r, "CUST_NAME").unwrap();
    assert_eq!(parsed.company_id, 19);
    assert_eq!(parsed.member.as_deref(), Some("Holmes"));
    assert!(parsed.company_name.is_none());
}

#[test]
fn test_join_row_missing_id() {
    let r = row(json!({ "COMPANY_NAME": "Nameless" }));
    let err = JoinRow::from_row(&r, "AGENT_NAME").unwrap_err();
    assert!(matches!(err, StoreError::MalformedRow(_)));
}

#[test]
fn test_group_rows() {
    let rows = vec![
        row(json!({"COMPANY_ID": 17, "COMPANY_NAME": "Foodies.", "COMPANY_CITY": "London\r", "CUST_NAME": "Holmes"})),
        row(json!({"COMPANY_ID": 17, "COMPANY_NAME": "Foodies.", "COMPANY_CITY": "London\r", "CUST_NAME": "Cook "})),
        row(json!({"COMPANY_ID": 18, "COMPANY_NAME": "Order All", "COMPANY_CITY": "Boston\r", "CUST_NAME": null})),
    ];
    let groups = group_rows(&rows, "CUST_NAME").unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].city.as_deref(), Some("London"));
    assert_eq!(groups[0].members, ["Holmes", "Cook"]);
    assert!(groups[1].members.is_empty());
}

#[test]
fn test_serialized_shape() {
    let groups = group_by_company(vec![join(18, "Order All", "Boston\r", None)]);
    let value = serde_json::to_value(&groups[0]).unwrap();
    assert_eq!(
        value,
        json!({"id": 18, "name": "Order All", "city": "Boston", "members": []})
    );
}
