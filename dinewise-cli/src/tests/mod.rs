//! Shared test harness modules for the Dinewise CLI.

use super::*;

mod helpers;
