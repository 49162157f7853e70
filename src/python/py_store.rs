//! Store bindings for Python.

use std::time::Duration;

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::StoreConfig;
use crate::round::{Intent, RoundState};
use crate::rules::Guess;
use crate::store::HiLoStore;

/// Python wrapper for HiLoStore.
///
/// Holds the live round. Subscribers are a Rust-side concern; Python
/// callers poll `phase` / `snapshot_json()` after each call instead.
#[pyclass(name = "HiLoStore", unsendable)]
pub struct PyHiLoStore {
    store: HiLoStore,
}

#[pymethods]
impl PyHiLoStore {
    /// Create a new store.
    ///
    /// # Arguments
    /// - seed: RNG seed for reproducible draws (None seeds from entropy)
    /// - celebration_ms: celebration auto-clear delay in milliseconds
    #[new]
    #[pyo3(signature = (seed = None, celebration_ms = 1200))]
    fn new(seed: Option<u64>, celebration_ms: u64) -> Self {
        let mut config = StoreConfig::new().with_celebration_delay(Duration::from_millis(celebration_ms));
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        Self {
            store: HiLoStore::new(config),
        }
    }

    /// Type a digit (0-9).
    fn digit(&mut self, d: u8) -> PyResult<()> {
        if d > 9 {
            return Err(PyValueError::new_err(format!("digit {d} out of range (expected 0-9)")));
        }
        self.store.digit(d);
        Ok(())
    }

    fn backspace(&mut self) {
        self.store.backspace();
    }

    fn enter(&mut self) {
        self.store.enter();
    }

    fn start(&mut self) {
        self.store.start();
    }

    /// Guess "higher" or "lower".
    fn guess(&mut self, direction: &str) -> PyResult<()> {
        let guess = match direction.trim().to_ascii_lowercase().as_str() {
            "higher" | "h" => Guess::Higher,
            "lower" | "l" => Guess::Lower,
            other => return Err(PyValueError::new_err(format!("unknown guess: {other}"))),
        };
        self.store.guess(guess);
        Ok(())
    }

    /// Apply a textual intent ("5", "enter", "start", "higher", ...).
    fn apply(&mut self, intent: &str) -> PyResult<()> {
        let intent: Intent = intent
            .parse()
            .map_err(|e: crate::round::IntentParseError| PyValueError::new_err(e.to_string()))?;
        self.store.apply(intent);
        Ok(())
    }

    /// Run due timers. Returns True if the celebration was cleared.
    fn tick(&mut self) -> bool {
        self.store.tick()
    }

    fn acknowledge_celebration(&mut self) {
        self.store.acknowledge_celebration();
    }

    fn acknowledge_coin_sound(&mut self) {
        self.store.acknowledge_coin_sound();
    }

    fn acknowledge_win_sound(&mut self) {
        self.store.acknowledge_win_sound();
    }

    /// Drain pending effects as strings ("celebrate(1)", "coin-sound", ...).
    fn drain_effects(&mut self) -> Vec<String> {
        self.store.drain_effects().iter().map(ToString::to_string).collect()
    }

    fn set_input_locked(&mut self, locked: bool) {
        self.store.set_input_locked(locked);
    }

    #[getter]
    fn phase(&self) -> String {
        self.store.current().phase().to_string()
    }

    #[getter]
    fn amount(&self) -> Option<u64> {
        self.store.current().amount()
    }

    #[getter]
    fn raw_amount(&self) -> Option<String> {
        self.store.current().raw_amount().map(str::to_string)
    }

    #[getter]
    fn revealed_count(&self) -> usize {
        self.store.current().revealed_count()
    }

    /// Card codes in draw order ("as", "10h", ...), or an empty list.
    #[getter]
    fn cards(&self) -> Vec<String> {
        self.store
            .current()
            .cards()
            .map(|draw| draw.iter().map(|c| c.code()).collect())
            .unwrap_or_default()
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.store.seed()
    }

    /// Full state as JSON.
    fn snapshot_json(&self) -> PyResult<String> {
        serde_json::to_string(self.store.current()).map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        match self.store.current() {
            RoundState::AmountEntry { raw } => format!("HiLoStore(amount-entry, raw={raw})"),
            state => match state.amount() {
                Some(amount) => format!("HiLoStore({}, amount={amount})", state.phase()),
                None => format!("HiLoStore({})", state.phase()),
            },
        }
    }
}
