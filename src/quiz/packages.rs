//! Display details of each coaching package.

use crate::quiz::types::PackageId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageDetails {
    pub id: PackageId,
    pub name_key: &'static str,
    pub tagline_key: &'static str,
    /// Price as displayed; not localized
    pub price: &'static str,
    pub duration_key: &'static str,
    pub icon: &'static str,
}

impl PackageDetails {
    /// Translation key of the package's feature list.
    pub fn features_key(&self) -> String {
        format!("quiz.results.packageFeatures.{}", self.id.as_str())
    }
}

static PACKAGES: [PackageDetails; 5] = [
    PackageDetails {
        id: PackageId::Discovery,
        name_key: "packages.discovery.name",
        tagline_key: "packages.discovery.tagline",
        price: "$75",
        duration_key: "packages.discovery.duration",
        icon: "🌱",
    },
    PackageDetails {
        id: PackageId::Clarity,
        name_key: "packages.clarity.name",
        tagline_key: "packages.clarity.tagline",
        price: "$300",
        duration_key: "packages.clarity.duration",
        icon: "✨",
    },
    PackageDetails {
        id: PackageId::Rooted,
        name_key: "packages.rooted.name",
        tagline_key: "packages.rooted.tagline",
        price: "$600",
        duration_key: "packages.rooted.duration",
        icon: "🌳",
    },
    PackageDetails {
        id: PackageId::Flourish,
        name_key: "packages.flourish.name",
        tagline_key: "packages.flourish.tagline",
        price: "$1,200",
        duration_key: "packages.flourish.duration",
        icon: "🦋",
    },
    PackageDetails {
        id: PackageId::Family,
        name_key: "packages.family.name",
        tagline_key: "packages.family.tagline",
        price: "$110",
        duration_key: "packages.family.duration",
        icon: "👨‍👩‍👧‍👦",
    },
];

/// Details for one package.
pub fn package_details(id: PackageId) -> &'static PackageDetails {
    match id {
        PackageId::Discovery => &PACKAGES[0],
        PackageId::Clarity => &PACKAGES[1],
        PackageId::Rooted => &PACKAGES[2],
        PackageId::Flourish => &PACKAGES[3],
        PackageId::Family => &PACKAGES[4],
    }
}

/// All packages in canonical order.
pub fn all_packages() -> &'static [PackageDetails] {
    &PACKAGES
}
