use opensase_fulfillment::{
    classify_zones, distance_km, select_source, CandidateKind, FulfillmentCandidate, FulfillmentError, FulfillmentOrder,
    GeoPoint, ProductTurnover, ScoringConfig, ZoneClassification, ZoneThresholds,
};

const ORDER_AT: GeoPoint = GeoPoint::new(50.45, 30.52);
const KM_PER_DEGREE_LAT: f64 = 111.195;

/// A point `km` due north of the order address.
fn north_of_order(km: f64) -> GeoPoint {
    GeoPoint::new(ORDER_AT.lat + km / KM_PER_DEGREE_LAT, ORDER_AT.lng)
}

fn store_a() -> FulfillmentCandidate {
    FulfillmentCandidate::store("store-a", "Store A", north_of_order(0.5))
        .with_stock("1", 5)
        .with_shipping_cost_per_km(3.0)
        .with_processing_time_hours(2.0)
}

fn warehouse_b() -> FulfillmentCandidate {
    FulfillmentCandidate::warehouse("warehouse-b", "Warehouse B", north_of_order(12.0))
        .with_stock("1", 50)
        .with_shipping_cost_per_km(2.5)
        .with_processing_time_hours(24.0)
}

#[test]
fn nearby_store_beats_distant_warehouse() {
    let order = FulfillmentOrder::standard(ORDER_AT).with_line("1", "Kettle", 1);
    let selection = select_source(&order, &[warehouse_b(), store_a()], &ScoringConfig::default()).unwrap();

    assert_eq!(selection.recommended.candidate_id, "store-a");
    assert_eq!(selection.recommended.kind, CandidateKind::Store);
    assert!(selection.recommended.has_all_items);
    assert!((selection.recommended.distance_km - 0.5).abs() < 0.01);

    assert_eq!(selection.alternatives.len(), 1);
    let b = &selection.alternatives[0];
    assert_eq!(b.candidate_id, "warehouse-b");
    assert!(b.has_all_items);
    assert!((b.distance_km - 12.0).abs() < 0.05);
    assert!(selection.recommended.shipping_cost < b.shipping_cost);
}

#[test]
fn short_stock_is_flagged_not_rejected() {
    let order = FulfillmentOrder::standard(ORDER_AT).with_line("1", "Kettle", 20);
    let selection = select_source(&order, &[store_a(), warehouse_b()], &ScoringConfig::default()).unwrap();
    let store = std::iter::once(&selection.recommended)
        .chain(selection.alternatives.iter())
        .find(|c| c.candidate_id == "store-a")
        .unwrap();
    assert!(!store.has_all_items);
    // the complete warehouse wins once the store can't cover the order
    assert_eq!(selection.recommended.candidate_id, "warehouse-b");
}

#[test]
fn empty_network_is_an_error() {
    let order = FulfillmentOrder::standard(ORDER_AT).with_line("1", "Kettle", 1);
    assert_eq!(select_source(&order, &[], &ScoringConfig::default()), Err(FulfillmentError::NoCandidates));
}

#[test]
fn selection_ignores_input_order() {
    let order = FulfillmentOrder::express(ORDER_AT).with_line("1", "Kettle", 1);
    let forward = select_source(&order, &[store_a(), warehouse_b()], &ScoringConfig::default()).unwrap();
    let backward = select_source(&order, &[warehouse_b(), store_a()], &ScoringConfig::default()).unwrap();
    assert_eq!(forward, backward);
}

#[test]
fn distance_properties() {
    let points = [ORDER_AT, north_of_order(12.0), GeoPoint::new(-33.86, 151.21), GeoPoint::new(40.71, -74.0)];
    for a in &points {
        assert_eq!(distance_km(a, a), 0.0);
        for b in &points {
            assert_eq!(distance_km(a, b), distance_km(b, a));
            assert!(distance_km(a, b) >= 0.0);
        }
    }
}

#[test]
fn zones_follow_turnover_bands() {
    let products = vec![
        ProductTurnover::new("zone-1", 12.0, 30.0),
        ProductTurnover::new("zone-2", 7.0, 12.0),
        ProductTurnover::new("zone-3", 3.0, 4.0),
        ProductTurnover::new("zone-4", 0.5, 0.1),
    ];
    let zones = classify_zones(&products, &ZoneThresholds::default());
    let ids: Vec<&str> = zones.iter().map(|z| z.zone_id.as_str()).collect();
    assert_eq!(ids, vec!["zone-1", "zone-2", "zone-3", "zone-4"]);
    let classes: Vec<ZoneClassification> = zones.iter().map(|z| z.classification).collect();
    assert_eq!(
        classes,
        vec![ZoneClassification::Hot, ZoneClassification::Warm, ZoneClassification::Cold, ZoneClassification::Frozen]
    );
    assert!(zones.iter().all(|z| products.iter().any(|p| p.zone_id == z.zone_id)));
}
