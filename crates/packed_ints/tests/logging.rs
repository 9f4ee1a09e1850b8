//! Construction emits tracing events without affecting results.

use packed_ints::PackedIntArrayReader;
use tracing_subscriber::EnvFilter;

#[test]
fn construction_under_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("packed_ints=trace"))
        .with_test_writer()
        .try_init();

    assert!(PackedIntArrayReader::new_section(vec![0u64; 342]).is_ok());
    assert!(PackedIntArrayReader::new_section(vec![0u64; 341]).is_err());
}
