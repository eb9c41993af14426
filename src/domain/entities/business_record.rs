//! Business listing extracted from a directory search page.

/// One business as written to the batch output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessRecord {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
}

impl BusinessRecord {
    /// Renders the record as a plain-text block followed by a blank line.
    pub fn to_block(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}\n\n",
            self.name, self.address, self.phone, self.website
        )
    }
}

/// A listing found on a search page, before its website is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    pub name: String,
    pub detail_url: String,
    pub address: String,
    pub phone: String,
}

impl DirectoryListing {
    /// Completes the listing with a resolved website string.
    pub fn into_record(self, website: String) -> BusinessRecord {
        BusinessRecord {
            name: self.name,
            address: self.address,
            phone: self.phone,
            website,
        }
    }
}
