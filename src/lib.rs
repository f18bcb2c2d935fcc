//! Umbrella crate for Signature-as-a-Service.
//!
//! Re-exports the signature catalog and adds a process-wide handle on the
//! bundled dataset, so callers can draw a signature without wiring a store
//! themselves. The HTTP surface lives in the `saas-server` crate.

pub use signatures::{
    BUNDLED_DATASET, SignatureDraw, SignatureRecord, SignatureStore, StoreError, Tier, pool,
    select, select_with,
};

use std::sync::OnceLock;

use thiserror::Error;

/// Errors from a strict, validated draw.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid category `{0}`; choose from: unbothered, unhinged, unleashed")]
    InvalidCategory(String),
}

static BUNDLED: OnceLock<SignatureStore> = OnceLock::new();

/// The bundled catalog, parsed on first use and shared afterwards.
pub fn bundled_store() -> Result<&'static SignatureStore, StoreError> {
    if let Some(store) = BUNDLED.get() {
        return Ok(store);
    }
    let store = SignatureStore::bundled()?;
    Ok(BUNDLED.get_or_init(|| store))
}

/// Draw from the bundled catalog.
///
/// Unlike [`select`], an unrecognised category is an error rather than a
/// draw from the whole catalog; this mirrors the `/signature/{category}`
/// route.
///
/// ```
/// let draw = saas::draw(Some("Unleashed")).unwrap();
/// assert_eq!(draw.tier, saas::Tier::Unleashed);
///
/// assert!(saas::draw(Some("feral")).is_err());
/// ```
pub fn draw(category: Option<&str>) -> Result<SignatureDraw, DrawError> {
    let store = bundled_store()?;
    let tier = category
        .map(|raw| Tier::parse(raw).ok_or_else(|| DrawError::InvalidCategory(raw.to_string())))
        .transpose()?;
    Ok(SignatureDraw::from(select(store, tier.map(Tier::as_str))))
}
