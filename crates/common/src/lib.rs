//! Cross-cutting capability ports shared by every layer.
//!
//! Entities and use cases never reach for the system clock, the random
//! number generator, or a hashing library directly. They receive these
//! capabilities through the ports defined here, which makes every
//! timestamp, identifier, and password hash deterministic in tests.

pub mod clock;
pub mod id_gen;
pub mod password;

pub use clock::{Clock, FixedClock, SystemClock};
pub use id_gen::{IdGenerator, SequenceIdGenerator, UuidGenerator};
pub use password::{Argon2Hasher, HashError, PasswordHasher, PlainTextHasher};
