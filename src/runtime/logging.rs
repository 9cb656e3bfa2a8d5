use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::runtime::config;

pub fn init() {
    let format = fmt::layer().with_level(true).with_target(true).compact();

    let filter = EnvFilter::builder()
        .with_default_directive(config::config().log_level.into())
        .with_env_var("FILTERSCOPE_LOG")
        .from_env_lossy();

    if tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .try_init()
        .is_err()
    {
        debug!("logger already initialized");
    }
}
