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

use std::env;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ConfigError;

/// Resolves the configuration file for a service.
///
/// The file is looked up in priority order:
/// 1. the command line specified path, if provided and the file exists
/// 2. the current working directory
/// 3. the system-wide directory (e.g. `/etc/testmgmt_accounts`)
/// 4. a recursive search of the working tree, as a development fallback
pub fn find_config_path(
    cli_path: &str,
    file_name: &str,
    system_dir: &str,
) -> Result<PathBuf, ConfigError> {
    if !cli_path.is_empty() {
        let path = PathBuf::from(cli_path);
        if path.exists() {
            return Ok(path);
        }
    }

    let current_dir_config = PathBuf::from(file_name);
    if current_dir_config.exists() {
        return Ok(current_dir_config);
    }

    let system_config = Path::new(system_dir).join(file_name);
    if system_config.exists() {
        return Ok(system_config);
    }

    find_file(file_name)
}

/// Recursively searches the current working directory for `file_name`.
pub fn find_file(file_name: &str) -> Result<PathBuf, ConfigError> {
    let current_dir = env::current_dir()?;
    let current_dir = current_dir.canonicalize()?;

    for entry in WalkDir::new(&current_dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.file_name() == Some(Path::new(file_name).as_os_str()) {
            return Ok(path.canonicalize()?);
        }
    }

    Err(ConfigError::NotFound(file_name.to_string()))
}
