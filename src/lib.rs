//! Resistor color band codec
//!
//! Pure functions for turning resistor color bands into a resistance and
//! tolerance, and back. The `resistor-bands` binary is a thin front end over
//! [`codec`].

pub mod codec;
