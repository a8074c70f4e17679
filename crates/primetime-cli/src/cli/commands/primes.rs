//! Prime lookups.
//!
//! These answer the user directly and never touch the store.

use anyhow::{Result, bail};
use primetime_app::primes;

pub fn nth_prime(n: u64) -> Result<()> {
    if n == 0 {
        bail!("N must be at least 1");
    }
    match primes::nth_prime(n) {
        Some(prime) => println!("The {} prime is {prime}", primes::ordinal(n)),
        None => bail!("The {} prime is out of range", primes::ordinal(n)),
    }
    Ok(())
}

pub fn is_prime(n: i64) -> Result<()> {
    if primes::is_prime(n) {
        println!("{n} is prime 🎉");
    } else {
        println!("{n} is not prime :(");
    }
    Ok(())
}
