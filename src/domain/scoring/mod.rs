//! Pure scoring services. Nothing here holds state between calls; every function takes
//! the snapshot it scores as an argument.
pub mod distance;
pub mod evaluator;
pub mod selector;
pub mod shipment;
pub mod zones;

pub use distance::{distance_km, EARTH_RADIUS_KM};
pub use evaluator::{estimate_delivery_days, evaluate, ScoreBreakdown, ScoredCandidate};
pub use selector::{rank_candidates, ranking_order, select_source, SourceSelection};
pub use shipment::{can_ship_from_single, plan_shipment, shipment_options, PlannedShipment, ShipmentPlan, ShipmentStrategy};
pub use zones::{classify_zones, ZoneClassification, ZoneStat};
