//! End-to-end scenarios of the pricecaster store, see `tests/`.
