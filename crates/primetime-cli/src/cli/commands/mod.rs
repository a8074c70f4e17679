pub mod config;
pub mod primes;
pub mod run;
