// ABOUTME: Customer module - one independently scheduled booking attempt.
// ABOUTME: A customer submits exactly once and reports the outcome.

mod customer;

pub use customer::Customer;

#[cfg(test)]
mod customer_test;
