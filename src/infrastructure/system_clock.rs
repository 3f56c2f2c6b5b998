// Wall clock and random widget ids
use crate::application::clock::{Clock, IdGenerator};
use chrono::{DateTime, Utc};
use rand::Rng;

const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Ids shaped `widget_<unix millis>_<9 base36 chars>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn widget_id(&self, now: DateTime<Utc>) -> String {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..ID_SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        format!("widget_{}_{}", now.timestamp_millis(), suffix)
    }
}
