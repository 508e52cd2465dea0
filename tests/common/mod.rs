use payrate::domain::event::{Event, SubscriberKind};
use payrate::domain::money::Rate;
use payrate::infrastructure::in_memory::RecordingSink;
use rust_decimal::Decimal;

/// Subscriber kinds of every rate update in `sink`, in emission order.
pub fn notified_kinds(sink: &RecordingSink) -> Vec<SubscriberKind> {
    sink.events()
        .iter()
        .filter_map(|event| match event {
            Event::RateUpdate { subscriber, .. } => Some(*subscriber),
            Event::Payment { .. } => None,
        })
        .collect()
}

/// Asserts every rate update in `sink` carries `expected`.
pub fn assert_all_rates(sink: &RecordingSink, expected: Decimal) {
    for event in sink.events() {
        match event {
            Event::RateUpdate { rate, .. } => assert_eq!(*rate, Rate::new(expected)),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
