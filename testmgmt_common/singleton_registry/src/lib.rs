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

/// Process-wide singleton registry shared by every service in the suite.
///
/// The registry guarantees that at most one instance of a registered type is
/// constructed for the lifetime of the process, no matter how many request
/// handlers race on the first access. Construction is guarded by a per-type
/// mutex with a double check; once an instance is published, every further
/// access is lock-free.
///
/// # Example
///
/// ```
/// use singleton_registry::SingletonRegistry;
///
/// struct GatewayContext {
///     upstream: String,
/// }
///
/// let registry = SingletonRegistry::new();
/// let ctx = registry
///     .get_or_create::<GatewayContext, std::io::Error, _>(|| {
///         Ok(GatewayContext { upstream: "http://accounts:8081".to_string() })
///     })
///     .unwrap();
/// assert_eq!(ctx.upstream, "http://accounts:8081");
/// ```
pub mod registry;

// Re-export key struct
pub use registry::{global, SingletonRegistry};
