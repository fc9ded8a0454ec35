//! Locale-aware ordering of collected paths.

use std::cmp::Ordering;
use std::path::Path;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use thiserror::Error;
use tracing::{debug, warn};

use dirwalk_core::PathCollector;

/// Environment variables consulted for the collation locale, in priority order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_COLLATE", "LANG"];

/// Errors building a locale collator.
#[derive(Debug, Error)]
pub enum CollationError {
    /// The locale name could not be parsed.
    #[error("invalid locale '{name}': {reason}")]
    InvalidLocale { name: String, reason: String },

    /// No collation data is available for the locale.
    #[error("no collation data for '{tag}': {reason}")]
    Unsupported { tag: String, reason: String },
}

/// Comparator used to sort output.
///
/// Built once per session and passed explicitly to the sort; there is no
/// process-wide collation state.
pub enum Collation {
    /// Raw byte order, as `strcoll` behaves in the `C`/`POSIX` locale.
    Bytewise,
    /// Unicode collation tailored to a locale.
    Locale { tag: String, collator: Collator },
}

impl std::fmt::Debug for Collation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Collation::Bytewise => f.write_str("Bytewise"),
            Collation::Locale { tag, .. } => f.debug_struct("Locale").field("tag", tag).finish(),
        }
    }
}

impl Collation {
    /// Resolve the collation locale from `LC_ALL`, `LC_COLLATE` and `LANG`.
    ///
    /// The first non-empty variable wins. With none set the `C` locale
    /// applies, which collates byte-wise.
    pub fn from_env() -> Self {
        let name = LOCALE_VARS.iter().find_map(|var| {
            std::env::var(var)
                .ok()
                .filter(|value| !value.is_empty())
                .map(|value| (*var, value))
        });

        match name {
            Some((var, value)) => {
                debug!(var, locale = %value, "collation locale from environment");
                Self::for_locale(&value)
            }
            None => Self::Bytewise,
        }
    }

    /// Build the collation for a POSIX locale name such as `de_DE.UTF-8`.
    ///
    /// `C`, `POSIX` and the empty name collate byte-wise. So does a name that
    /// cannot be parsed or has no collation data, the way `setlocale` leaves
    /// the C locale in place when it rejects a name.
    pub fn for_locale(name: &str) -> Self {
        let Some(tag) = posix_to_bcp47(name) else {
            return Self::Bytewise;
        };

        match Self::try_for_tag(&tag) {
            Ok(collation) => collation,
            Err(err) => {
                warn!("{err}; using byte order");
                Self::Bytewise
            }
        }
    }

    /// Build the collation for a BCP-47 language tag such as `sv-SE`.
    pub fn try_for_tag(tag: &str) -> Result<Self, CollationError> {
        let locale: Locale = tag.parse().map_err(|e| CollationError::InvalidLocale {
            name: tag.to_string(),
            reason: format!("{e:?}"),
        })?;
        let collator = Collator::try_new(&(&locale).into(), CollatorOptions::new()).map_err(
            |e| CollationError::Unsupported {
                tag: locale.to_string(),
                reason: format!("{e:?}"),
            },
        )?;
        Ok(Self::Locale {
            tag: locale.to_string(),
            collator,
        })
    }

    /// Root (locale-neutral) Unicode collation, or byte order if even that
    /// is unavailable.
    pub fn root() -> Self {
        Self::try_for_tag("und").unwrap_or_else(|err| {
            warn!("{err}; falling back to byte order");
            Self::Bytewise
        })
    }

    /// The locale tag in use, or `None` for byte order.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Collation::Bytewise => None,
            Collation::Locale { tag, .. } => Some(tag),
        }
    }

    /// Compare two paths.
    ///
    /// Paths the collator considers equal are ordered by their raw bytes so
    /// that the result is total and deterministic.
    pub fn compare(&self, a: &Path, b: &Path) -> Ordering {
        let bytes = || {
            a.as_os_str()
                .as_encoded_bytes()
                .cmp(b.as_os_str().as_encoded_bytes())
        };
        match self {
            Collation::Bytewise => bytes(),
            Collation::Locale { collator, .. } => collator
                .compare(&a.to_string_lossy(), &b.to_string_lossy())
                .then_with(bytes),
        }
    }

    /// Sort `collector` in place.
    pub fn sort(&self, collector: &mut PathCollector) {
        collector.sort_by(|a, b| self.compare(a, b));
    }
}

/// Turn `ll_CC.codeset@modifier` into `ll-CC`.
///
/// Returns `None` for the locales that mean byte order.
fn posix_to_bcp47(name: &str) -> Option<String> {
    let base = name
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}
