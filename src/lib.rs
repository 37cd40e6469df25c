//! Cross-crate scenario tests for the Finora workspace live in `tests/`.
