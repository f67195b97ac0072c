use beer_game::io::reporting;
use beer_game::simulation::config::BeerGameConfig;
use beer_game::simulation::engine::BeerGame;
use beer_game::simulation::runner::play_episode;
use beer_game::strategy::scenarios::{scenario, SCENARIOS};
use log::{error, info};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    println!("=== Beer Distribution Game ===");

    // 1. CONFIGURATION
    // Usage: beer-game [config.toml|-] [output.csv] [scenario]
    // "-" or no first argument keeps the defaults.
    let config = match env::args().nth(1).filter(|p| p != "-") {
        Some(path) => match BeerGameConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => BeerGameConfig::default().with_seed(42),
    };
    let output_file = env::args()
        .nth(2)
        .unwrap_or_else(|| "simulation_results.csv".to_string());

    // 2. STRATEGIES
    // Retailer -> Wholesaler -> Distributor -> Factory
    let scenario_name = env::args().nth(3).unwrap_or_else(|| "mixed".to_string());
    let Some(mut strategies) =
        scenario(&scenario_name, config.base_demand, config.seed.unwrap_or(0))
    else {
        error!(
            "Unknown scenario '{}', expected one of {:?}",
            scenario_name, SCENARIOS
        );
        return ExitCode::FAILURE;
    };
    info!("Scenario: {scenario_name}");

    // 3. RUN
    let mut game = match BeerGame::new(config) {
        Ok(game) => game,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let summary = match play_episode(&mut game, &mut strategies, None) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Episode aborted: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("Played {} weeks", summary.weeks);

    // 4. EXPORT
    match reporting::write_simulation_log(&output_file, &game.history) {
        Ok(_) => println!("Success! Data written to ./{}", output_file),
        Err(e) => eprintln!("Error writing CSV: {}", e),
    }
    match game.render() {
        Ok(snapshot) => match reporting::snapshot_json(&snapshot) {
            Ok(json) => println!("\nFinal state:\n{json}"),
            Err(e) => eprintln!("Error serializing final state: {}", e),
        },
        Err(e) => eprintln!("Error rendering final state: {}", e),
    }

    // 5. COST ANALYSIS
    println!("\n=== Cost Analysis ===");
    for (role, cost) in game.cost_breakdown() {
        println!("{}: ${:.2}", role, cost);
    }
    println!("Total Supply Chain Cost: ${:.2}", game.total_supply_chain_cost());
    println!("Beers delivered to customers: {:.1}", summary.total_beers);

    ExitCode::SUCCESS
}
