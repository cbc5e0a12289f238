#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use chroney_common::testing::MockDateClock;
use chroney_domain::Config;
use chroney_lib::context::AppContext;
use serde_json::{json, Value};

/// Context with default configuration and the clock pinned to `date`.
pub fn context_on(y: i32, m: u32, d: u32) -> AppContext {
    context_with(Config::default(), y, m, d)
}

pub fn context_with(config: Config, y: i32, m: u32, d: u32) -> AppContext {
    let date = NaiveDate::from_ymd_opt(y, m, d).expect("valid test date");
    AppContext::with_clock(config, Arc::new(MockDateClock::at_date(date)))
}

/// Wire form of the 6-2-5-2 rotation
pub fn rotation_json() -> Value {
    json!([
        {"type": "placeholder", "span": 6, "desc": "Work block", "title": "Work"},
        {"type": "event", "span": 2, "desc": "First break", "title": "Day Off"},
        {"type": "placeholder", "span": 5, "desc": "Work block", "title": "Work"},
        {"type": "event", "span": 2, "desc": "Second break", "title": "Day Off"}
    ])
}
