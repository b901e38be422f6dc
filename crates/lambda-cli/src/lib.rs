//! Library side of the `lambda-recipe` command: logging setup, parameter
//! file loading and the checks behind `validate`.

pub mod check;
pub mod input;
pub mod logging;
