//! Erlang-C waiting probability
//!
//! Computes the probability that an arriving job finds every server busy in
//! an M/M/c queue. The terms a^k/k! are built with the incremental
//! recurrence B_k = B_{k-1} * a / k instead of factorials or powers, which
//! would overflow f64 for server counts in the hundreds.

use crate::types::ServerCount;

// Rescale the running accumulators before they leave f64 range. The result
// is a ratio of the two, so scaling both is exact.
const RESCALE_THRESHOLD: f64 = 1e280;
const RESCALE_FACTOR: f64 = 1e-280;

/// Probability that an arriving job must wait in queue (Erlang C)
///
/// `traffic_intensity` is a = lambda/mu. A system with no offered load never
/// queues; a saturated system (a >= servers) always does.
pub fn wait_probability(servers: ServerCount, traffic_intensity: f64) -> f64 {
    if traffic_intensity <= 0.0 {
        return 0.0;
    }
    if servers == 0 || traffic_intensity >= servers as f64 {
        return 1.0;
    }

    let occupancy = traffic_intensity / servers as f64;

    // term holds a^k/k!, below accumulates the terms for k = 0..servers-1.
    let mut term = 1.0_f64;
    let mut below = 0.0_f64;
    for k in 1..=servers {
        below += term;
        term *= traffic_intensity / k as f64;
        if term > RESCALE_THRESHOLD || below > RESCALE_THRESHOLD {
            term *= RESCALE_FACTOR;
            below *= RESCALE_FACTOR;
        }
    }

    // term is now a^c/c!; the queueing tail sums the geometric remainder.
    let tail = term / (1.0 - occupancy);
    tail / (below + tail)
}
