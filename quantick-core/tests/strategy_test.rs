//! Strategy integration tests: factory, configuration files and full
//! tick-by-tick runs the way a host drives them.

use quantick_core::strategy::{available_strategies, MaRsiCrossover};
use quantick_core::{
    create_strategy, Context, Signal, Strategy, StrategyConfig, StrategyError, StrategyParams,
};

/// Host loop: update the context, then ask the strategy.
fn run(strategy: &mut dyn Strategy, prices: &[f64]) -> Vec<Signal> {
    let mut ctx = Context::new();
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            ctx.update(p, 1_000.0, i as i64);
            strategy.on_tick(&ctx)
        })
        .collect()
}

/// Falls for nine ticks, then jumps: the fast average overtakes the slow one
/// on tick 10 while RSI is still deeply oversold.
fn crossover_path() -> Vec<f64> {
    vec![100.0, 90.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0, 41.0, 60.0]
}

fn crossover_params() -> StrategyParams {
    StrategyParams::new()
        .with("ma_short", 2)
        .with("ma_long", 3)
        .with("rsi_period", 8)
        .with("rsi_oversold", 30)
        .with("rsi_overbought", 70)
}

#[test]
fn golden_cross_with_oversold_rsi_buys_once_on_tick_10() {
    let mut strategy = MaRsiCrossover::from_params(&crossover_params());
    let signals = run(&mut strategy, &crossover_path());

    assert!(signals[..9].iter().all(|s| *s == Signal::None));
    assert_eq!(signals[9], Signal::Buy);
    assert_eq!(signals[10], Signal::None);
    assert_eq!(signals.iter().filter(|s| s.is_actionable()).count(), 1);
}

/// Rises for nine ticks, then drops: the fast average falls under the slow one
/// on tick 10 while RSI is still overbought.
fn death_cross_path() -> Vec<f64> {
    vec![20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 79.0, 60.0]
}

#[test]
fn death_cross_with_overbought_rsi_sells_once_on_tick_10() {
    let mut strategy = MaRsiCrossover::from_params(&crossover_params());
    let signals = run(&mut strategy, &death_cross_path());

    assert!(signals[..9].iter().all(|s| *s == Signal::None));
    assert_eq!(signals[9], Signal::Sell);
    assert_eq!(signals[10], Signal::None);
    assert_eq!(signals.iter().filter(|s| s.is_actionable()).count(), 1);
}

#[test]
fn unconfirmed_crosses_hold() {
    // RSI is about 23.1 at the golden cross and 76.9 at the death cross.
    let strict_oversold = crossover_params().with("rsi_oversold", 20);
    let mut strategy = MaRsiCrossover::from_params(&strict_oversold);
    let signals = run(&mut strategy, &crossover_path());
    assert!(signals.iter().all(|s| *s == Signal::None));

    let strict_overbought = crossover_params().with("rsi_overbought", 80);
    let mut strategy = MaRsiCrossover::from_params(&strict_overbought);
    let signals = run(&mut strategy, &death_cross_path());
    assert!(signals.iter().all(|s| *s == Signal::None));
}

#[test]
fn reset_replays_identically() {
    let mut strategy = MaRsiCrossover::from_params(&crossover_params());
    let first = run(&mut strategy, &crossover_path());
    strategy.on_reset();
    let second = run(&mut strategy, &crossover_path());
    assert_eq!(first, second);
}

#[test]
fn factory_builds_from_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strategy.toml");
    std::fs::write(
        &path,
        r#"
strategy = "ma_rsi_crossover"

[params]
ma_short = 2
ma_long = 3
rsi_period = 8
rsi_oversold = 30.0
"#,
    )
    .unwrap();

    let config = StrategyConfig::from_path(&path).unwrap();
    let mut strategy = create_strategy(&config).unwrap();
    assert_eq!(strategy.name(), "MA + RSI Crossover");
    assert_eq!(strategy.params().get_f64("rsi_overbought", 0.0), 70.0);

    let signals = run(strategy.as_mut(), &crossover_path());
    assert_eq!(signals[9], Signal::Buy);
}

#[test]
fn missing_config_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = StrategyConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, StrategyError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_config_is_a_parse_error() {
    let err = StrategyConfig::from_toml_str("strategy = ").unwrap_err();
    assert!(matches!(err, StrategyError::Parse(_)));
}

#[test]
fn fingerprint_ignores_key_order() {
    let a = StrategyConfig::from_toml_str(
        "strategy = \"rsi_reversal\"\n[params]\noversold = 25\noverbought = 75\n",
    )
    .unwrap();
    let b = StrategyConfig::from_toml_str(
        "strategy = \"rsi_reversal\"\n[params]\noverbought = 75\noversold = 25\n",
    )
    .unwrap();
    assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());

    let c = StrategyConfig::from_toml_str(
        "strategy = \"rsi_reversal\"\n[params]\noverbought = 80\noversold = 25\n",
    )
    .unwrap();
    assert_ne!(a.fingerprint().unwrap(), c.fingerprint().unwrap());
}

#[test]
fn every_registered_strategy_holds_during_warmup() {
    let prices: Vec<f64> = (0..80).map(|i| 100.0 + (i as f64 * 0.4).sin() * 8.0).collect();
    for name in available_strategies() {
        let config = StrategyConfig::new(*name, StrategyParams::new());
        let mut strategy = create_strategy(&config).unwrap();
        let warmup = strategy.warmup_ticks();
        let signals = run(strategy.as_mut(), &prices);
        assert!(
            signals[..warmup - 1].iter().all(|s| *s == Signal::None),
            "{name} signalled before warmup"
        );
    }
}

#[test]
fn rejected_parameters_never_reach_the_host() {
    let config = StrategyConfig::new(
        "ma_rsi_crossover",
        StrategyParams::new().with("ma_short", 30).with("ma_long", 10),
    );
    let err = create_strategy(&config).err().unwrap();
    assert!(matches!(
        err,
        StrategyError::InvalidConfig { ref strategy, .. } if strategy == "ma_rsi_crossover"
    ));
}
