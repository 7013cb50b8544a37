//! Route planning over the stargate graph.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

use serde::{Deserialize, Serialize};

use crate::model::{RoutePreference, SolarSystemId, SolarSystemSecurityType};

/// Cost of a jump into a system the route preference wants to avoid.
const AVOID_PENALTY: u32 = 50_000;

/// A stargate connection between two solar systems, usable in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stargate {
    pub from: SolarSystemId,
    pub to: SolarSystemId,
}

/// Stargate graph of the known solar systems.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacent: HashMap<SolarSystemId, Vec<SolarSystemId>>,
    security: HashMap<SolarSystemId, SolarSystemSecurityType>,
}

impl RouteGraph {
    pub fn new(
        systems: impl IntoIterator<Item = (SolarSystemId, SolarSystemSecurityType)>,
        stargates: &[Stargate],
    ) -> Self {
        let mut adjacent: HashMap<SolarSystemId, Vec<SolarSystemId>> = HashMap::new();
        for gate in stargates {
            adjacent.entry(gate.from).or_default().push(gate.to);
            adjacent.entry(gate.to).or_default().push(gate.from);
        }
        for neighbours in adjacent.values_mut() {
            neighbours.sort();
            neighbours.dedup();
        }
        Self {
            adjacent,
            security: systems.into_iter().collect(),
        }
    }

    pub fn contains(&self, id: SolarSystemId) -> bool {
        self.security.contains_key(&id)
    }

    fn cost(&self, to: SolarSystemId, preference: RoutePreference) -> u32 {
        let high_sec = self.security.get(&to) == Some(&SolarSystemSecurityType::HighSec);
        match preference {
            RoutePreference::Shortest => 1,
            RoutePreference::Secure if !high_sec => AVOID_PENALTY,
            RoutePreference::Insecure if high_sec => AVOID_PENALTY,
            _ => 1,
        }
    }

    /// Finds the cheapest route with Dijkstra's algorithm.
    ///
    /// # Returns
    /// - `Some(route)` - Systems from origin to destination, both included. Empty when the
    ///   destination can not be reached.
    /// - `None` - Origin or destination are unknown
    pub fn route(
        &self,
        origin: SolarSystemId,
        destination: SolarSystemId,
        preference: RoutePreference,
    ) -> Option<Vec<SolarSystemId>> {
        if !self.contains(origin) || !self.contains(destination) {
            return None;
        }
        if origin == destination {
            return Some(vec![origin]);
        }

        let mut dist: HashMap<SolarSystemId, u32> = HashMap::from([(origin, 0)]);
        let mut prev: HashMap<SolarSystemId, SolarSystemId> = HashMap::new();
        let mut heap = BinaryHeap::from([Reverse((0u32, origin))]);

        while let Some(Reverse((cost, current))) = heap.pop() {
            if current == destination {
                break;
            }
            if dist.get(&current).is_some_and(|d| cost > *d) {
                continue;
            }
            let Some(neighbours) = self.adjacent.get(&current) else {
                continue;
            };
            for next in neighbours {
                let next_cost = cost.saturating_add(self.cost(*next, preference));
                if dist.get(next).map_or(true, |d| next_cost < *d) {
                    dist.insert(*next, next_cost);
                    prev.insert(*next, current);
                    heap.push(Reverse((next_cost, *next)));
                }
            }
        }

        if !prev.contains_key(&destination) {
            return Some(Vec::new());
        }
        let mut route = vec![destination];
        let mut current = destination;
        while let Some(p) = prev.get(&current) {
            route.push(*p);
            current = *p;
        }
        route.reverse();
        Some(route)
    }
}
