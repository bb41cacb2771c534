// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

/// Reads a numeric tuning knob from the environment, clamped to `[min, max]`.
fn knob<T: FromStr + Ord>(name: &str, default: T, min: T, max: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
        .clamp(min, max)
}

/// Criterion configured from `BENCH_*` variables, with a flamegraph profiler sampling at
/// `PROFILE_FREQ` Hz when run with `--profile-time`.
pub fn criterion() -> Criterion {
    let frequency = knob("PROFILE_FREQ", 100i32, 1, 1000);
    let sample_size = knob("BENCH_SAMPLE_SIZE", 50usize, 10, 200);
    let warmup_secs = knob("BENCH_WARMUP_SECS", 2u64, 1, 60);
    let measurement_secs = knob("BENCH_MEASUREMENT_SECS", 5u64, 1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
