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

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use log::debug;
use parking_lot::{Mutex, RwLock};

/// One registry slot per distinguished type.
///
/// The published value lives in an `OnceLock` so post-construction reads are
/// lock-free; the mutex only serializes construction attempts for this slot.
/// A failed construction publishes nothing, so the next caller retries.
struct Slot {
    value: OnceLock<Arc<dyn Any + Send + Sync>>,
    construction: Mutex<()>,
}

impl Slot {
    fn new() -> Self {
        Slot { value: OnceLock::new(), construction: Mutex::new(()) }
    }
}

/// A thread-safe registry holding at most one instance per registered type.
///
/// Instances are keyed by `TypeId` and handed out as shared `Arc` references.
/// The registry owns the instance; callers never receive a mutable reference,
/// and there is no removal or reset during normal operation — reconfiguration
/// requires a process restart.
pub struct SingletonRegistry {
    slots: RwLock<HashMap<TypeId, Arc<Slot>>>,
}

impl SingletonRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        SingletonRegistry { slots: RwLock::new(HashMap::new()) }
    }

    /// Returns the instance registered for `T`, if one has been constructed.
    ///
    /// Never constructs and never touches a construction mutex.
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        let slots = self.slots.read();
        let slot = slots.get(&TypeId::of::<T>())?;
        let value = Arc::clone(slot.value.get()?);
        Some(downcast::<T>(value))
    }

    /// Returns the instance registered for `T`, constructing it through
    /// `factory` if no instance exists yet.
    ///
    /// Exactly one successful `factory` run occurs per type for the process
    /// lifetime, regardless of how many callers race on the first access.
    /// The instance is fully constructed before any reference is handed out.
    ///
    /// If `factory` fails, the error is returned to this caller, nothing is
    /// cached, and a later call runs a fresh construction attempt.
    pub fn get_or_create<T, E, F>(&self, factory: F) -> Result<Arc<T>, E>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(existing) = self.get::<T>() {
            return Ok(existing);
        }

        let slot = self.slot_for(TypeId::of::<T>());
        // The slot map lock is released before the factory runs; only this
        // type's construction mutex is held across user code.
        let _guard = slot.construction.lock();
        if let Some(value) = slot.value.get() {
            return Ok(downcast::<T>(Arc::clone(value)));
        }

        let instance = Arc::new(factory()?);
        let published: Arc<dyn Any + Send + Sync> = instance.clone();
        let _ = slot.value.set(published);
        debug!("registered singleton instance for {}", type_name::<T>());
        Ok(instance)
    }

    fn slot_for(&self, id: TypeId) -> Arc<Slot> {
        if let Some(slot) = self.slots.read().get(&id) {
            return Arc::clone(slot);
        }
        let mut slots = self.slots.write();
        Arc::clone(slots.entry(id).or_insert_with(|| Arc::new(Slot::new())))
    }
}

impl Default for SingletonRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn downcast<T: Send + Sync + 'static>(value: Arc<dyn Any + Send + Sync>) -> Arc<T> {
    value.downcast::<T>().unwrap_or_else(|_| {
        panic!("registry slot for {} holds a different type", type_name::<T>())
    })
}

static GLOBAL: OnceLock<SingletonRegistry> = OnceLock::new();

/// The process-wide registry instance.
///
/// Created on first access and never torn down; process exit reclaims it.
/// This is the one sanctioned piece of global state in the suite — service
/// configuration facades register themselves here.
pub fn global() -> &'static SingletonRegistry {
    GLOBAL.get_or_init(SingletonRegistry::new)
}
