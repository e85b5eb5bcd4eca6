// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Logging goes to stderr, so that stdout carries nothing but the game's output.
use env_logger::{Builder, Env, Target};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

/// Filter used when [`LOG_ENV`] is unset.
const DEFAULT_FILTER: &str = "warn";

/// Build a stderr logger filtered by the given environment variable.
fn builder(var: &str) -> Builder {
    let mut builder = Builder::from_env(Env::new().filter_or(var, DEFAULT_FILTER));
    builder.target(Target::Stderr);
    builder
}

/// Install the logger with the filter taken from [`LOG_ENV`].
pub fn init() {
    builder(LOG_ENV).init();
}

#[cfg(test)]
mod tests {
    use std::env;

    use log::LevelFilter;

    use super::*;

    #[test]
    fn unset_filter_defaults_to_warn() {
        let logger = builder("BATTLESHIP_LOG_TEST_UNSET").build();
        assert_eq!(logger.filter(), LevelFilter::Warn);
    }

    #[test]
    fn filter_is_read_from_env() {
        env::set_var("BATTLESHIP_LOG_TEST_DEBUG", "debug");
        let logger = builder("BATTLESHIP_LOG_TEST_DEBUG").build();
        assert_eq!(logger.filter(), LevelFilter::Debug);
    }
}
