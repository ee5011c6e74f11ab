//! Registered companies and their owned collections.

use serde::{Deserialize, Serialize};

/// A registered company: registration identity, bilingual names, one
/// address, one capital structure, and variable-length owned collections
/// of directors, shareholders and branches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub registration_number: String,
    pub registration_date: String,
    pub name_np: String,
    pub name_en: String,
    #[serde(rename = "type")]
    pub company_type: String,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    pub status: CompanyStatus,
    pub fiscal_year: String,
    pub address: Address,
    pub contact: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub capital: CapitalStructure,
    pub directors: Vec<Director>,
    pub shareholders: Vec<Shareholder>,
    pub branches: Vec<Branch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyStatus {
    Active,
    Inactive,
    Liquidated,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub province: String,
    pub district: String,
    pub municipality: String,
    pub ward: String,
    pub tole: String,
}

/// Share capital snapshot. Amounts are integral NPR.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapitalStructure {
    pub authorized: i64,
    pub issued: i64,
    pub paid_up: i64,
    pub face_value: i64,
    pub total_shares: i64,
    pub approval_date: String,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Director {
    pub id: String,
    pub name: String,
    pub address: String,
    pub citizenship_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    pub designation: String,
    pub appointment_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_expiry_date: Option<String>,
    pub status: DirectorStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectorStatus {
    Active,
    Resigned,
    Removed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shareholder {
    pub id: String,
    pub name: String,
    pub address: String,
    pub citizenship_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    pub nationality: String,
    pub share_qty: i64,
    pub share_amount: i64,
    pub share_percentage: f64,
    pub share_type: ShareType,
    pub date_of_entry: String,
    pub status: ShareholderStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShareType {
    Founder,
    Ordinary,
    Preference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShareholderStatus {
    Active,
    Transferred,
    Removed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub address: String,
    pub established_date: String,
    pub status: BranchStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchStatus {
    Active,
    Closed,
}

impl Company {
    /// Directors currently in office.
    pub fn active_directors(&self) -> impl Iterator<Item = &Director> {
        self.directors
            .iter()
            .filter(|d| d.status == DirectorStatus::Active)
    }
}
