use beer_game::{
    AgentRole, BeerGame, BeerGameConfig, BeerGameError, DemandGenerator, StepOutcome, HORIZON,
    NUM_AGENTS,
};

fn new_game(seed: u64) -> BeerGame {
    let mut game = BeerGame::new(BeerGameConfig::default().with_seed(seed)).unwrap();
    game.reset(None);
    game
}

fn play_week(game: &mut BeerGame, order: f64) -> Vec<StepOutcome> {
    (0..NUM_AGENTS).map(|_| game.step(order).unwrap()).collect()
}

#[test]
fn first_week_with_constant_orders() {
    let seed = 2024;
    let mut game = new_game(seed);
    let demand = DemandGenerator::new(8.0, Some(seed)).generate(0);

    let outcomes = play_week(&mut game, 8.0);
    let propagation = outcomes[3].propagation.expect("factory closes the week");
    assert_eq!(propagation.customer_demand, demand);

    let state = game.state();
    // Retailer had 12 on hand plus 4 in transit.
    assert_eq!(state.echelons[0].backorder, (demand - 16.0).max(0.0));
    assert_eq!(propagation.shipped_to_customer, demand.min(16.0));
    assert_eq!(state.customer.orders, demand);
    assert_eq!(state.customer.incoming_shipments, demand.min(16.0));

    // Upstream echelons each shipped their downstream neighbour's order.
    for i in 1..NUM_AGENTS {
        assert_eq!(propagation.shipments[i], 8.0);
        assert_eq!(state.echelons[i - 1].incoming_shipment, propagation.shipments[i]);
        assert_eq!(state.echelons[i].inventory, 8.0);
    }
    // The factory's own order is its next shipment.
    assert_eq!(state.echelons[3].incoming_shipment, 8.0);
}

#[test]
fn episode_ends_exactly_at_horizon() {
    let mut game = new_game(5);
    for week in 0..HORIZON {
        assert!(!game.is_over(), "terminated early at week {week}");
        for role in AgentRole::ALL {
            assert!(!game.terminated(role));
        }
        let outcomes = play_week(&mut game, 8.0);
        assert_eq!(outcomes[3].week, week + 1);
    }
    assert_eq!(game.week(), HORIZON);
    for role in AgentRole::ALL {
        assert!(game.terminated(role));
        assert!(!game.truncated(role));
    }
}

#[test]
fn late_actions_are_absorbed() {
    let mut game = new_game(5);
    for _ in 0..HORIZON {
        play_week(&mut game, 8.0);
    }
    let before = game.state().clone();
    for _ in 0..10 {
        let outcome = game.step(8.0).unwrap();
        assert!(outcome.dead_step);
        assert_eq!(outcome.reward, 0.0);
    }
    assert_eq!(game.state(), &before);
    assert_eq!(game.week(), HORIZON);
}

#[test]
fn same_seed_same_trajectory() {
    let run = |seed| {
        let mut game = new_game(seed);
        let mut trace = Vec::new();
        for week in 0..HORIZON {
            for _ in 0..NUM_AGENTS {
                let order = (week % 7) as f64 * 3.0;
                let outcome = game.step(order).unwrap();
                trace.push((outcome.reward, game.last().unwrap().map(|l| l.observation)));
            }
        }
        (trace, game.render().unwrap())
    };
    assert_eq!(run(77), run(77));
}

#[test]
fn reset_with_seed_replays_demand() {
    let mut game = new_game(1);
    let mut first = Vec::new();
    game.reset(Some(31));
    for _ in 0..10 {
        first.push(play_week(&mut game, 8.0)[3].propagation.unwrap().customer_demand);
    }
    game.reset(Some(31));
    for expected in first {
        let demand = play_week(&mut game, 8.0)[3].propagation.unwrap().customer_demand;
        assert_eq!(demand, expected);
    }
}

#[test]
fn observe_is_idempotent() {
    let mut game = new_game(3);
    game.step(5.0).unwrap();
    for role in AgentRole::ALL {
        let a = game.observe(role).unwrap();
        let b = game.observe(role).unwrap();
        assert!(a.is_some());
        assert_eq!(a, b);
    }
}

#[test]
fn observation_reports_own_order() {
    let mut game = new_game(3);
    game.step(5.0).unwrap();
    let retailer = game.observe(AgentRole::Retailer).unwrap().unwrap();
    assert_eq!(retailer.orders, [5.0]);
    assert_eq!(retailer.inventory, [12.0]);
}

#[test]
fn zero_costs_give_zero_reward() {
    let config = BeerGameConfig {
        holding_cost: [0.0; 4],
        backorder_cost: [0.0; 4],
        ..BeerGameConfig::default().with_seed(8)
    };
    let mut game = BeerGame::new(config).unwrap();
    game.reset(None);
    for outcome in play_week(&mut game, 30.0) {
        assert_eq!(outcome.reward, 0.0);
    }
}

#[test]
fn guard_errors_do_not_advance_the_turn() {
    let mut game = new_game(3);
    game.step(1.0).unwrap();
    let err = game.step(-3.0).unwrap_err();
    assert_eq!(
        err,
        BeerGameError::ActionOutOfBounds {
            value: -3.0,
            low: 0.0,
            high: 50.0
        }
    );
    assert_eq!(game.agent_selection(), Some(AgentRole::Wholesaler));
}
