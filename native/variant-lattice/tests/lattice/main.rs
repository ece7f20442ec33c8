#[path = "../automaton/strategy.rs"]
pub mod strategy;

pub mod test_completion;
pub mod test_scenarios;

/// Route `tracing` output through the test harness.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
