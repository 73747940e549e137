pub mod gate;
pub mod health;
pub mod metrics;
pub mod mongo;
