//! The combinator algebra.
//!
//! Every combinator is a pure structural transformation: it registers a
//! new entity whose declared signature is derived from the base entity's
//! (resolving type arguments eagerly where one side is concrete, threading
//! them through where the result stays generic) and whose body closes over
//! the base entity by reference.

mod chain;
mod compose;
mod curry;
mod flip;
mod partial;
mod stock;
mod tupled;

pub use chain::{flow, pipe};
pub use compose::{compose, compose_unchecked};
pub use curry::curry;
pub use flip::flip;
pub use partial::{partial_apply, partial_apply_prefix};
pub use stock::{always, ask, identity};
pub use tupled::{tupled, untupled};

pub(crate) use curry::curry_step;
pub(crate) use flip::flip_curried_step;
