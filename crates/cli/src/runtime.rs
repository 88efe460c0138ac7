// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sandbox interface for loading and calling wasm modules.
//!
//! The verifier only needs two operations: turn bytes into a module
//! instance, and call an export with one integer. [`WasmiRuntime`] is the
//! production implementation; tests can substitute their own.

use wasmi::{Engine, Instance, Linker, Module, Store};

/// Errors raised by a [`Runtime`] or [`LoadedModule`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Bytes could not be parsed, validated, or instantiated.
    #[error("{0}")]
    Load(String),

    /// The export could not be resolved or the call faulted.
    #[error("{0}")]
    Execution(String),
}

/// Turns module bytes into an executable instance.
///
/// Object-safe so the verifier can hold a `&dyn Runtime`.
pub trait Runtime: Send + Sync {
    /// Parse and instantiate a module.
    fn load(&self, bytes: &[u8]) -> Result<Box<dyn LoadedModule>, RuntimeError>;
}

/// An instantiated module exposing named callables.
pub trait LoadedModule {
    /// Call `export` with a single integer argument.
    fn call(&mut self, export: &str, arg: i64) -> Result<i64, RuntimeError>;
}

/// Runtime backed by the `wasmi` interpreter.
///
/// The engine is shared; every loaded module gets its own store.
#[derive(Default)]
pub struct WasmiRuntime {
    engine: Engine,
}

impl WasmiRuntime {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Runtime for WasmiRuntime {
    fn load(&self, bytes: &[u8]) -> Result<Box<dyn LoadedModule>, RuntimeError> {
        let module =
            Module::new(&self.engine, bytes).map_err(|e| RuntimeError::Load(e.to_string()))?;

        let mut store = Store::new(&self.engine, ());
        // No host functions: artifacts must be self-contained.
        let linker = <Linker<()>>::new(&self.engine);
        let instance = linker
            .instantiate(&mut store, &module)
            .and_then(|pre| pre.start(&mut store))
            .map_err(|e| RuntimeError::Load(e.to_string()))?;

        Ok(Box::new(WasmiModule { store, instance }))
    }
}

struct WasmiModule {
    store: Store<()>,
    instance: Instance,
}

impl LoadedModule for WasmiModule {
    fn call(&mut self, export: &str, arg: i64) -> Result<i64, RuntimeError> {
        if self.instance.get_func(&self.store, export).is_none() {
            return Err(RuntimeError::Execution(format!(
                "no exported function named `{}`",
                export
            )));
        }

        if let Ok(func) = self
            .instance
            .get_typed_func::<i32, i32>(&self.store, export)
        {
            let arg = i32::try_from(arg).map_err(|_| {
                RuntimeError::Execution(format!(
                    "argument {} does not fit `{}`'s i32 parameter",
                    arg, export
                ))
            })?;
            return func
                .call(&mut self.store, arg)
                .map(i64::from)
                .map_err(|e| RuntimeError::Execution(e.to_string()));
        }

        if let Ok(func) = self
            .instance
            .get_typed_func::<i64, i64>(&self.store, export)
        {
            return func
                .call(&mut self.store, arg)
                .map_err(|e| RuntimeError::Execution(e.to_string()));
        }

        Err(RuntimeError::Execution(format!(
            "`{}` must have signature (i32) -> i32 or (i64) -> i64",
            export
        )))
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
