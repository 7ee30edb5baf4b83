//! # Slatebook CLI
//!
//! Demo-data seeding and console logging for the Slatebook CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use slatebook_cli::seeder::{self, SeedConfig};
//!
//! let config = SeedConfig::default(); // 25 students, 5 teachers, parents on
//! seeder::seed_all(&store, config)?;
//! ```

pub mod logging;
pub mod seeder;
