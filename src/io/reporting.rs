// src/io/reporting.rs

use crate::model::observation::RenderSnapshot;
use crate::simulation::engine::HistoryRecord;
use log::info;
use std::error::Error;
use std::path::Path;

/// Writes the weekly history to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/run_1.csv").
/// * `data` - The history records from the engine.
pub fn write_simulation_log(
    file_path: impl AsRef<Path>,
    data: &[HistoryRecord],
) -> Result<(), Box<dyn Error>> {
    let path = file_path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;

    for record in data {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    info!("Exported {} rows to '{}'", data.len(), path.display());
    Ok(())
}

/// Pretty JSON for a render snapshot.
pub fn snapshot_json(snapshot: &RenderSnapshot) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::agent::AgentRole;
    use crate::model::state::SupplyChainState;
    use crate::simulation::config::BeerGameConfig;

    fn record(week: u32, role: AgentRole) -> HistoryRecord {
        HistoryRecord {
            week,
            role,
            inventory: 8.0,
            backorder: 0.0,
            order_placed: 8.0,
            incoming_demand: 8.0,
            shipment_sent: 8.0,
            shipment_received: 4.0,
            cost: 8.0,
        }
    }

    #[test]
    fn csv_has_header_and_one_line_per_record() {
        let path = std::env::temp_dir().join(format!("beer_game_log_{}.csv", std::process::id()));
        let records = [record(1, AgentRole::Retailer), record(1, AgentRole::Factory)];
        write_simulation_log(&path, &records).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("week,role,inventory,backorder"));
        assert!(lines[2].starts_with("1,factory,"));
    }

    #[test]
    fn snapshot_json_has_all_fields() {
        let state = SupplyChainState::initial(&BeerGameConfig::default());
        let json = snapshot_json(&RenderSnapshot::of(&state)).unwrap();
        for key in [
            "week",
            "inventory_levels",
            "backorders",
            "orders",
            "shipments",
            "holding_cost",
            "backorder_cost",
            "customer",
            "total_beers",
        ] {
            assert!(json.contains(&format!("\"{key}\"")), "missing {key}");
        }
    }
}
