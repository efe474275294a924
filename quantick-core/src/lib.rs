//! Quantick Core — strategy authoring SDK for a tick-driven trading host.
//!
//! This crate contains the pieces a strategy author touches:
//! - Value types (`Signal`, `PositionInfo`, `AccountStatus`, `Tick`)
//! - Indicator computation over the rolling price history, memoized per tick
//! - The per-tick `Context` with its build-on-read, invalidate-on-write
//!   indicator cache
//! - The `Strategy` trait, parameter mapping, configuration and factory
//! - Example strategies (MA + RSI crossover, MACD crossover, RSI reversal)
//!
//! The host engine that feeds ticks, executes orders and keeps the books
//! lives elsewhere; it calls `Context::update` then `Strategy::on_tick` once
//! per tick.

pub mod context;
pub mod domain;
pub mod indicators;
pub mod strategy;

pub use context::Context;
pub use domain::{AccountStatus, PositionInfo, Signal, Tick};
pub use indicators::IndicatorService;
pub use strategy::{create_strategy, Strategy, StrategyConfig, StrategyError, StrategyParams};
