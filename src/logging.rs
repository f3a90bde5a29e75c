use simplelog::*;
use std::fs::File;
use std::path::Path;

use crate::error::BotError;

/// Decision log `GoldBot-<pid>.log` at Info, and the visualizer's `f-<pid>.log` at Warn.
pub fn init_logging(dir: &Path, my_pid: usize) -> Result<(), BotError> {
    CombinedLogger::init(
        vec![
            WriteLogger::new(
                LevelFilter::Info,
                Config {time: None, level: None, target: None, location: None, time_format: None},
                File::create(dir.join(format!("GoldBot-{}.log", my_pid)))?),
            WriteLogger::new(
                LevelFilter::Warn,
                Config {time: None, level: None, target: None, location: None, time_format: None},
                File::create(dir.join(format!("f-{}.log", my_pid)))?)
        ]
    ).map_err(|e| BotError::Logger(e.to_string()))
}
