//! Known GrowthZone member directories.

/// A chamber-of-commerce directory served by GrowthZone list pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectorySite {
    pub id: &'static str,
    pub name: &'static str,
    pub host: &'static str,
}

pub const DEFAULT_DIRECTORY: &str = "wilmington";

pub const KNOWN_DIRECTORIES: &[DirectorySite] = &[
    DirectorySite {
        id: "wilmington",
        name: "Wilmington Chamber of Commerce",
        host: "www.wilmingtonchamber.org",
    },
    DirectorySite {
        id: "dayton",
        name: "Dayton Area Chamber of Commerce",
        host: "www.daytonareachamberofcommerce.growthzoneapp.com",
    },
];

/// Looks up a directory by id, ignoring case and surrounding whitespace.
pub fn find_directory(id: &str) -> Option<&'static DirectorySite> {
    let id = id.trim();
    KNOWN_DIRECTORIES
        .iter()
        .find(|site| site.id.eq_ignore_ascii_case(id))
}

/// Comma-separated ids, for error messages and help text.
pub fn known_directory_ids() -> String {
    KNOWN_DIRECTORIES
        .iter()
        .map(|site| site.id)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_directory() {
        assert_eq!(
            find_directory("dayton").unwrap().host,
            "www.daytonareachamberofcommerce.growthzoneapp.com"
        );
        assert_eq!(
            find_directory(" Wilmington ").unwrap().host,
            "www.wilmingtonchamber.org"
        );
        assert!(find_directory("miami").is_none());
    }

    #[test]
    fn test_default_directory_is_known() {
        assert!(find_directory(DEFAULT_DIRECTORY).is_some());
        assert_eq!(known_directory_ids(), "wilmington, dayton");
    }
}
