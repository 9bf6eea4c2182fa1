//! User Records
//!
//! Data structures matching the remote users endpoint.

use serde::{Deserialize, Serialize};

/// One user entry (matches endpoint JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub company: Company,
}

impl Record {
    /// Absolute link for the website field
    pub fn website_url(&self) -> String {
        format!("https://{}", self.website)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub geo: Geo,
}

impl Address {
    /// "street, suite, city, zipcode"
    pub fn one_line(&self) -> String {
        format!("{}, {}, {}, {}", self.street, self.suite, self.city, self.zipcode)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "catchPhrase")]
    pub catch_phrase: String,
    #[serde(default)]
    pub bs: String,
}

#[cfg(test)]
pub(crate) fn make_record(id: u32, name: &str, email: &str) -> Record {
    Record {
        id,
        name: name.to_string(),
        username: String::new(),
        email: email.to_string(),
        phone: String::new(),
        website: String::new(),
        address: Address::default(),
        company: Company::default(),
    }
}
