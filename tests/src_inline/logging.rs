use super::*;

#[test]
fn test_init_twice_keeps_first_subscriber() {
    init(false);
    init(true);
    tracing::debug!("still logging");
}
