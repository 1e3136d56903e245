// SPDX-License-Identifier: MPL-2.0
//! Host platform identification.
//!
//! Badge metrics differ slightly between the iOS look and the Android/Web
//! look. The platform is resolved once at startup and then passed to every
//! badge, so no sizing code ever inspects the environment itself.

use std::fmt;
use std::str::FromStr;

/// Platform whose badge metrics should be mimicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    /// iPhone and iPad.
    #[default]
    Ios,
    Android,
    MobileWeb,
}

impl Platform {
    /// All supported platforms, in table order.
    pub const ALL: [Platform; 3] = [Platform::Ios, Platform::Android, Platform::MobileWeb];

    /// Resolves a host OS name (`iphone`, `ipad`, `android`, `mobileweb`).
    ///
    /// Anything unrecognized gets the iOS metrics.
    #[must_use]
    pub fn from_os_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Picks the platform matching the compilation target.
    #[must_use]
    pub fn current() -> Self {
        match std::env::consts::OS {
            "android" => Platform::Android,
            _ => Platform::Ios,
        }
    }

    /// Whether the iOS multiplier column applies.
    #[must_use]
    pub fn is_ios(self) -> bool {
        matches!(self, Platform::Ios)
    }

    #[must_use]
    pub fn is_android(self) -> bool {
        matches!(self, Platform::Android)
    }

    /// Canonical lowercase name, as accepted by [`Platform::from_os_name`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ios => "iphone",
            Platform::Android => "android",
            Platform::MobileWeb => "mobileweb",
        }
    }
}

/// Error returned when a platform name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlatform(pub String);

impl fmt::Display for UnknownPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown platform: {}", self.0)
    }
}

impl std::error::Error for UnknownPlatform {}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "iphone" | "ipad" | "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "mobileweb" | "web" => Ok(Platform::MobileWeb),
            other => Err(UnknownPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipad_and_iphone_share_ios_metrics() {
        assert_eq!(Platform::from_os_name("iphone"), Platform::Ios);
        assert_eq!(Platform::from_os_name("ipad"), Platform::Ios);
    }

    #[test]
    fn unknown_os_name_falls_back_to_ios() {
        assert_eq!(Platform::from_os_name("blackberry"), Platform::Ios);
        assert!("blackberry".parse::<Platform>().is_err());
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("Android".parse::<Platform>(), Ok(Platform::Android));
        assert_eq!(" MobileWeb ".parse::<Platform>(), Ok(Platform::MobileWeb));
    }

    #[test]
    fn display_round_trips_through_from_os_name() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_os_name(&platform.to_string()), platform);
        }
    }
}
