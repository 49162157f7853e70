//! Python bindings for the hi-lo round engine.
//!
//! Lets a Python presentation layer drive the store.
//!
//! # Quick Start
//!
//! ```python
//! import hi_lo
//!
//! store = hi_lo.HiLoStore(seed=42)
//! for key in "500":
//!     store.apply(key)
//! store.enter()
//! store.start()
//! store.guess("higher")
//!
//! for effect in store.drain_effects():
//!     play(effect)
//! ```

use pyo3::prelude::*;

mod py_store;

pub use py_store::*;

/// hi_lo: the Hi-Lo round engine.
#[pymodule]
fn hi_lo(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyHiLoStore>()?;

    Ok(())
}
