#![no_main]
use libfuzzer_sys::fuzz_target;

use listings_collector::domain::invocation::InvocationEvent;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        let event = InvocationEvent::from_value(&json);
        assert!(event.max_pages().is_none() || event.test_mode);
    }
});
