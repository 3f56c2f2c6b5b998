// Clock and id generation seams used by the state store and widget service
use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait IdGenerator: Send + Sync {
    /// Produce a widget id that is unlikely to collide with any other.
    fn widget_id(&self, now: DateTime<Utc>) -> String;
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub struct FixedClock(pub DateTime<Utc>);

    impl FixedClock {
        pub fn at(rfc3339: &str) -> Self {
            Self(
                DateTime::parse_from_rfc3339(rfc3339)
                    .unwrap()
                    .with_timezone(&Utc),
            )
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[derive(Default)]
    pub struct SequentialIds(AtomicUsize);

    impl IdGenerator for SequentialIds {
        fn widget_id(&self, _now: DateTime<Utc>) -> String {
            let n = self.0.fetch_add(1, Ordering::SeqCst);
            format!("widget_test_{}", n)
        }
    }
}
