/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Test Management Suite is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use chrono::{DateTime, Local};
use log::LevelFilter;
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::{
    append::rolling_file::RollingFileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config, Handle,
};

use crate::config::{LogConfig, LoggerConfig};

pub struct Logger {
    #[allow(dead_code)]
    handle: Handle,
}

impl Logger {
    pub fn new_from_config(config: LogConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let mut log4rs_config = Config::builder();

        // Create appenders for each logger configuration
        for logger_config in &config.loggers {
            if logger_config.path_prefix == "root" {
                continue;
            }
            let appender = Self::create_appender(logger_config)?;
            let appender_name = format!("{}_appender", logger_config.path_prefix);
            log4rs_config =
                log4rs_config.appender(Appender::builder().build(&appender_name, Box::new(appender)));

            // Add corresponding appender for each logger
            let logger = log4rs::config::Logger::builder()
                .appender(appender_name)
                .additive(false)
                .build(
                    logger_config.path_prefix.clone(),
                    Self::parse_level(&logger_config.level),
                );
            log4rs_config = log4rs_config.logger(logger);
        }

        // Configure root logger
        let final_config: Config;
        if let Some(root_config) = config.get_root_config() {
            let root_appender = Self::create_appender(root_config)?;
            log4rs_config = log4rs_config
                .appender(Appender::builder().build("root_appender", Box::new(root_appender)));
            let root = Root::builder()
                .appender("root_appender")
                .build(Self::parse_level(&root_config.level));
            final_config = log4rs_config.build(root)?;
        } else {
            let root = Root::builder().build(LevelFilter::Info);
            final_config = log4rs_config.build(root)?;
        }

        let handle = log4rs::init_config(final_config)?;
        Ok(Self { handle })
    }

    fn create_appender(
        config: &LoggerConfig,
    ) -> Result<RollingFileAppender, Box<dyn std::error::Error>> {
        // Create log directory
        std::fs::create_dir_all(&config.log_directory)?;

        // Get current local time
        let now: DateTime<Local> = Local::now();
        let formatted_time = now.format("%Y%m%d%H%M%S%3f").to_string();

        // Configure log file path
        let log_file = format!("{}/{}", config.log_directory, config.log_file_name);
        let archived_log_pattern = format!(
            "{}/{}-{{}}-{}.zip",
            config.log_directory, config.log_file_name, formatted_time
        );

        // Configure rolling policy
        let size_trigger = SizeTrigger::new(config.max_file_size);
        let roller =
            FixedWindowRoller::builder().build(&archived_log_pattern, config.max_zip_count)?;
        let compound_policy = CompoundPolicy::new(Box::new(size_trigger), Box::new(roller));

        // Create appender
        let appender = RollingFileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(
                "{d(%Y-%m-%d %H:%M:%S:%3f)} {l} [{M}:{L}] - {m}{n}",
            )))
            .build(log_file, Box::new(compound_policy))?;

        Ok(appender)
    }

    fn parse_level(level: &str) -> LevelFilter {
        match level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" | "warning" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info,
        }
    }
}
