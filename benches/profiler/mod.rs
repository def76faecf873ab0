// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of orbit-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Bench knobs, all read from `ORBIT_BENCH_*` variables:
// - `ORBIT_BENCH_CLEARANCE`, `ORBIT_BENCH_BEND_PENALTY`: routing parameters
//   (defaults match `RouterConfig::default()`).
// - `ORBIT_BENCH_SAMPLES`, `ORBIT_BENCH_SECS`: criterion sample count and
//   measurement time.
// - `ORBIT_BENCH_FLAMEGRAPH_HZ`: pprof sampling rate under `--profile-time`.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use orbit_route::RouterConfig;
use pprof::criterion::{Output, PProfProfiler};

fn knob<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(format!("ORBIT_BENCH_{name}"))
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Router settings for the benches; invalid overrides fall back to defaults.
pub fn router_config() -> RouterConfig {
    let defaults = RouterConfig::default();
    let config = RouterConfig {
        clearance: knob("CLEARANCE", defaults.clearance),
        bend_penalty: knob("BEND_PENALTY", defaults.bend_penalty),
        ..defaults
    };
    if config.validate().is_ok() {
        config
    } else {
        defaults
    }
}

pub fn criterion() -> Criterion {
    let hz = knob::<i32>("FLAMEGRAPH_HZ", 250).clamp(1, 1000);
    let samples = knob::<usize>("SAMPLES", 40).clamp(10, 200);
    let secs = knob::<u64>("SECS", 5).clamp(1, 120);

    Criterion::default()
        .sample_size(samples)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(secs))
        .with_profiler(PProfProfiler::new(hz, Output::Flamegraph(None)))
}
