use super::*;
use crate::helpers::models::create_test_attraction;

fn create_two_by_two_matrix() -> TravelMatrix {
    TravelMatrix::new(vec![0., 2., 2., 0.], 2).unwrap()
}

#[test]
fn can_resolve_attraction_ids() {
    let attractions = vec![create_test_attraction("a", 10., 5.), create_test_attraction("b", 10., 5.)];
    let park = Park::new(attractions, create_two_by_two_matrix()).unwrap();

    assert_eq!(park.index_of("a"), Some(0));
    assert_eq!(park.index_of("b"), Some(1));
    assert_eq!(park.index_of("c"), None);
    assert_eq!(park.size(), 2);
    assert_eq!(park.attraction(1).id, "b");
    assert_eq!(park.attractions().len(), 2);
    assert_eq!(park.travel_duration(0, 1), 2.);
}

#[test]
fn can_reject_empty_park() {
    assert!(Park::new(vec![], TravelMatrix::new(vec![], 0).unwrap()).is_err());
}

#[test]
fn can_reject_mismatched_travel_matrix() {
    let attractions = vec![create_test_attraction("a", 10., 5.)];

    assert!(Park::new(attractions, create_two_by_two_matrix()).is_err());
}

#[test]
fn can_reject_duplicated_ids() {
    let attractions = vec![create_test_attraction("a", 10., 5.), create_test_attraction("a", 10., 5.)];

    assert!(Park::new(attractions, create_two_by_two_matrix()).is_err());
}
