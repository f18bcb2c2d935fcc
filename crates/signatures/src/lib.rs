//! Signature catalog and selector
//!
//! The catalog is a fixed list of [`SignatureRecord`]s, each tagged with a
//! [`Tier`]. It is loaded once (usually from the dataset bundled into the
//! binary), validated, and then only ever read.
//!
//! ## What lives here
//!
//! - **Tiers** - `unbothered`, `unhinged`, `unleashed`. Lookup is
//!   case-insensitive.
//! - **Store** - [`SignatureStore`] loads and validates the dataset. Empty,
//!   malformed, or blank entries are rejected with a typed [`StoreError`].
//! - **Selector** - [`select`] draws one record uniformly at random, optionally
//!   restricted to a tier.
//!
//! ## Example
//!
//! ```
//! use signatures::{select, SignatureStore, Tier};
//!
//! let store = SignatureStore::bundled().unwrap();
//! let record = select(&store, Some("UNHINGED"));
//! assert_eq!(record.tier, Tier::Unhinged);
//!
//! // Anything that is not a tier draws from the whole catalog.
//! let any = select(&store, Some("whatever"));
//! assert!(store.all().contains(any));
//! ```

mod error;
mod record;
mod selector;
mod store;
mod tier;

pub use crate::error::StoreError;
pub use crate::record::{SignatureDraw, SignatureRecord};
pub use crate::selector::{pool, select, select_with};
pub use crate::store::{SignatureStore, BUNDLED_DATASET};
pub use crate::tier::Tier;
