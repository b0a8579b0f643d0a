// config.rs: defaults for the snapmatch tool and their environment overrides.
//
// Each environment lookup is split into a thin `std::env::var` wrapper and a
// `*_from(Option<&str>)` core so parsing is testable without touching the
// process environment.

use crate::block::MAX_STORE_BLOCK_SIZE;

// Default match-finder level.  Overridden by SNAPMATCH_LEVEL or `-l`.
pub const LEVEL_DEFAULT: i32 = 1;

// Default block size: the largest block an encoder accepts.  Overridden by `-B`.
pub const BLOCK_SIZE_DEFAULT: usize = MAX_STORE_BLOCK_SIZE;

// Default worker count; 0 means one per logical CPU.  Overridden by
// SNAPMATCH_NBWORKERS or `-T`.
pub const NB_WORKERS_DEFAULT: usize = 0;

// Upper bound on explicitly requested workers.
pub const NB_WORKERS_MAX: usize = 200;

pub const ENV_LEVEL: &str = "SNAPMATCH_LEVEL";
pub const ENV_NBWORKERS: &str = "SNAPMATCH_NBWORKERS";

/// Level from `SNAPMATCH_LEVEL`, or [`LEVEL_DEFAULT`].
pub fn init_level() -> i32 {
    init_level_from(std::env::var(ENV_LEVEL).ok().as_deref())
}

/// Parse an optional `SNAPMATCH_LEVEL` value.  Range checking is left to the
/// caller, which reports it the same way as a bad `-l`.
pub fn init_level_from(env_val: Option<&str>) -> i32 {
    if let Some(env) = env_val {
        if let Ok(v) = env.trim().parse::<i32>() {
            return v;
        }
        warn_ignored(ENV_LEVEL, env);
    }
    LEVEL_DEFAULT
}

/// Worker count from `SNAPMATCH_NBWORKERS`, or [`NB_WORKERS_DEFAULT`].
pub fn init_nb_workers() -> usize {
    init_nb_workers_from(std::env::var(ENV_NBWORKERS).ok().as_deref())
}

/// Parse an optional `SNAPMATCH_NBWORKERS` value, clamped to [`NB_WORKERS_MAX`].
pub fn init_nb_workers_from(env_val: Option<&str>) -> usize {
    if let Some(env) = env_val {
        if let Ok(v) = env.trim().parse::<usize>() {
            return v.min(NB_WORKERS_MAX);
        }
        warn_ignored(ENV_NBWORKERS, env);
    }
    NB_WORKERS_DEFAULT
}

/// Resolve a worker count: 0 means one per logical CPU.
pub fn effective_workers(requested: usize) -> usize {
    if requested == 0 {
        num_cpus::get().max(1)
    } else {
        requested.min(NB_WORKERS_MAX)
    }
}

fn warn_ignored(var: &str, value: &str) {
    crate::displaylevel!(
        2,
        "Ignore environment variable setting {}={}: not a valid number\n",
        var,
        value
    );
}
