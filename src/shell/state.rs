use std::collections::BTreeMap;
use std::sync::Arc;

use crate::modules::vehicle::vehicle::Vehicle;
use crate::shared::infrastructure::execution_sink::in_memory::InMemoryExecutionSink;

pub type ServedVehicle = Vehicle<InMemoryExecutionSink>;

#[derive(Clone)]
pub struct AppState {
    vehicles: Arc<BTreeMap<String, Arc<ServedVehicle>>>,
}

impl AppState {
    /// One dry-run sink per VIN, each keeping only its last `history` calls.
    pub fn dry_run(vins: &[String], history: usize) -> Self {
        Self::from_sinks(vins.iter().map(|vin| {
            (
                vin.clone(),
                Arc::new(InMemoryExecutionSink::with_history(history)),
            )
        }))
    }

    pub fn from_sinks(
        sinks: impl IntoIterator<Item = (String, Arc<InMemoryExecutionSink>)>,
    ) -> Self {
        let vehicles = sinks
            .into_iter()
            .map(|(vin, sink)| (vin, Arc::new(Vehicle::new(sink))))
            .collect();
        Self {
            vehicles: Arc::new(vehicles),
        }
    }

    pub fn vehicle(&self, vin: &str) -> Option<Arc<ServedVehicle>> {
        self.vehicles.get(vin).cloned()
    }

    pub fn vins(&self) -> Vec<String> {
        self.vehicles.keys().cloned().collect()
    }
}
