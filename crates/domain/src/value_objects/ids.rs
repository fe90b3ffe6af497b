//! Typed entity identifiers.
//!
//! Every identifier wraps a UUID. The nil UUID is the sentinel for
//! "unset": it is rejected by the checked constructor, accepted by
//! deserialization (databases and wire payloads legitimately carry it),
//! and serializes to the quoted canonical nil string rather than
//! `null`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates an identifier from a UUID, rejecting the nil
            /// sentinel.
            pub fn new(uuid: Uuid) -> Result<Self, ValidationError> {
                if uuid.is_nil() {
                    return Err(ValidationError::EmptyId { entity: $label });
                }

                Ok(Self(uuid))
            }

            /// Wraps a UUID without the nil check.
            ///
            /// For UUIDs already known to be valid, e.g. freshly
            /// generated ones.
            pub fn from_uuid_unchecked(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the nil sentinel.
            pub fn nil() -> Self {
                Self(Uuid::nil())
            }

            /// Returns true if this is the nil sentinel.
            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }

            /// Returns the underlying UUID.
            pub fn as_uuid(&self) -> Uuid {
                self.0
            }

            /// Returns the raw 16 bytes of the UUID.
            pub fn as_bytes(&self) -> &[u8; 16] {
                self.0.as_bytes()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<Uuid> for $name {
            type Error = ValidationError;

            fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
                Self::new(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id!(
    /// Identifier of an [`Order`](crate::Order).
    OrderId,
    "order"
);
entity_id!(
    /// Identifier of a [`User`](crate::User).
    UserId,
    "user"
);
entity_id!(
    /// Identifier of a [`Product`](crate::Product).
    ProductId,
    "product"
);
entity_id!(
    /// Identifier of a warehouse holding [`Stock`](crate::Stock).
    WarehouseId,
    "warehouse"
);
