//! Shared fixtures for unit tests.

use crate::distance::{DistanceMatrix, TravelMatrix};
use crate::models::{Client, CostCoefficients, Depot, Instance, Vehicle};

/// Depot `D` and clients `A` (3), `B` (4), `C` (5) with
/// `d(D,A)=1, d(D,B)=2, d(D,C)=3, d(A,B)=1, d(A,C)=2, d(B,C)=1`.
fn abc_travel() -> TravelMatrix {
    #[rustfmt::skip]
    let km = vec![
        0.0, 1.0, 2.0, 3.0,
        1.0, 0.0, 1.0, 2.0,
        2.0, 1.0, 0.0, 1.0,
        3.0, 2.0, 1.0, 0.0,
    ];
    let dm = DistanceMatrix::from_data(4, km).expect("4x4");
    TravelMatrix::from_distances(dm, 30.0)
}

fn abc_clients() -> Vec<Client> {
    vec![
        Client::new(1, "A", 0.0, 0.0, 3.0),
        Client::new(2, "B", 0.0, 0.0, 4.0),
        Client::new(3, "C", 0.0, 0.0, 5.0),
    ]
}

/// Single vehicle, capacity 10, range 100 km, `C_fixed=100, C_dist=1`,
/// no time or fuel cost.
pub(crate) fn abc_instance() -> Instance {
    Instance::new(
        Depot::new(0, "D", 0.0, 0.0),
        abc_clients(),
        vec![Vehicle::new(1, "V1", 10.0, 100.0)],
        CostCoefficients::new(100.0, 1.0, 0.0),
        abc_travel(),
    )
    .expect("valid fixture")
}

/// Same layout with a single vehicle of the given limits and fuel cost,
/// `C_fixed=100, C_dist=1, C_time=2`.
pub(crate) fn instance_with(capacity: f64, range_km: f64, fuel_cost_per_km: f64) -> Instance {
    Instance::new(
        Depot::new(0, "D", 0.0, 0.0),
        abc_clients(),
        vec![Vehicle::new(1, "V1", capacity, range_km).with_fuel_cost_per_km(fuel_cost_per_km)],
        CostCoefficients::new(100.0, 1.0, 2.0),
        abc_travel(),
    )
    .expect("valid fixture")
}

/// Same layout with a heterogeneous fleet: capacities 10/8/12, ranges
/// 5/5/7 km, fuel 0.2/0.4/0.6 per km, so the representative limits are
/// `Q = 8`, `R = 5`, `fuel = 0.4`. `C_fixed=100, C_dist=1`, no time cost.
pub(crate) fn mixed_fleet_instance() -> Instance {
    Instance::new(
        Depot::new(0, "D", 0.0, 0.0),
        abc_clients(),
        vec![
            Vehicle::new(1, "V1", 10.0, 5.0).with_fuel_cost_per_km(0.2),
            Vehicle::new(2, "V2", 8.0, 5.0).with_fuel_cost_per_km(0.4),
            Vehicle::new(3, "V3", 12.0, 7.0).with_fuel_cost_per_km(0.6),
        ],
        CostCoefficients::new(100.0, 1.0, 0.0),
        abc_travel(),
    )
    .expect("valid fixture")
}

/// `n` clients on a ring around the depot with demand `1..=5` cycling and a
/// fleet of `vehicles` identical vans.
pub(crate) fn ring_instance(n: usize, vehicles: usize) -> Instance {
    let depot = Depot::new(0, "cd01", 4.60, -74.08);
    let clients = (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * std::f64::consts::TAU;
            Client::new(
                i + 1,
                format!("c{:03}", i + 1),
                4.60 + 0.05 * angle.sin(),
                -74.08 + 0.05 * angle.cos(),
                (i % 5 + 1) as f64,
            )
        })
        .collect();
    let fleet = (0..vehicles)
        .map(|i| Vehicle::new(i + 1, format!("v{:03}", i + 1), 12.0, 60.0).with_fuel_cost_per_km(0.3))
        .collect();
    Instance::with_haversine(depot, clients, fleet, CostCoefficients::new(50.0, 1.0, 5.0), 30.0)
        .expect("valid fixture")
}
