//! Seed fixture: the hand-authored registry data set.
//!
//! Five users, two companies, eight event types, five applications, five
//! templates and five audit records. Dates are Bikram Sambat. The fixture
//! is the store's initial state; runtime mutations build on top of it.

use std::collections::BTreeMap;

use serde_json::{json, Value};

use ocr_types::{
    Address, Application, ApplicationDocument, ApplicationStatus, AuditLog, Branch, BranchStatus,
    CapitalStructure, Company, CompanyStatus, Director, DirectorStatus, DocumentStatus, EventField,
    EventType, EventTypeStatus, FieldType, HistoryEntry, ShareType, Shareholder, ShareholderStatus,
    Template, TemplateStatus, User, UserRole, UserStatus,
};

/// Everything the store starts with.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub users: Vec<User>,
    pub companies: Vec<Company>,
    pub event_types: Vec<EventType>,
    pub applications: Vec<Application>,
    pub templates: Vec<Template>,
    pub audit_logs: Vec<AuditLog>,
}

fn field(name: &str, label: &str, field_type: FieldType, mandatory: bool) -> EventField {
    EventField {
        name: name.into(),
        label: label.into(),
        field_type,
        mandatory,
        options: None,
    }
}

fn select(name: &str, label: &str, mandatory: bool, options: &[&str]) -> EventField {
    EventField {
        name: name.into(),
        label: label.into(),
        field_type: FieldType::Select,
        mandatory,
        options: Some(options.iter().map(|s| s.to_string()).collect()),
    }
}

fn doc(
    id: &str,
    name: &str,
    doc_type: &str,
    status: DocumentStatus,
    upload_date: &str,
) -> ApplicationDocument {
    ApplicationDocument {
        id: id.into(),
        name: name.into(),
        doc_type: doc_type.into(),
        mandatory: true,
        status,
        upload_date: upload_date.into(),
        file_path: None,
    }
}

fn hist(action: &str, by: &str, date: &str, remarks: &str) -> HistoryEntry {
    HistoryEntry {
        action: action.into(),
        by: by.into(),
        date: date.into(),
        remarks: remarks.into(),
    }
}

fn form(pairs: &[(&str, Value)]) -> BTreeMap<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn users() -> Vec<User> {
    let user = |id: &str, name: &str, email: &str, role, company_id: Option<&str>| User {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role,
        company_id: company_id.map(Into::into),
        status: UserStatus::Active,
    };
    vec![
        user("u1", "Ram Prasad Sharma", "ram@company.com", UserRole::User, Some("c1")),
        user("u2", "Sita Devi Thapa", "sita@company.com", UserRole::User, Some("c2")),
        user("s1", "Krishna Bahadur KC", "krishna@staff.gov", UserRole::Staff, None),
        user("s2", "Laxmi Kumari Rai", "laxmi@staff.gov", UserRole::Staff, None),
        user("a1", "Admin Officer", "admin@registry.gov", UserRole::Admin, None),
    ]
}

fn event_types() -> Vec<EventType> {
    let evt = |id: &str, code: &str, name: &str, name_np: &str, category: &str, docs: &[&str], fields: Vec<EventField>| EventType {
        id: id.into(),
        code: code.into(),
        name: name.into(),
        name_np: name_np.into(),
        category: category.into(),
        status: EventTypeStatus::Active,
        required_docs: docs.iter().map(|s| s.to_string()).collect(),
        fields,
    };

    vec![
        evt(
            "evt1",
            "ANNUAL_RETURN",
            "Annual Return Filing",
            "वार्षिक विवरण",
            "annual",
            &["AGM Minutes", "Board Meeting Minutes", "Financial Statement", "Auditor Appointment"],
            vec![
                field("agmDate", "AGM Date", FieldType::Date, true),
                field("boardMeetingDate", "Board Meeting Date", FieldType::Date, true),
                field("resolutionNumber", "Resolution Number", FieldType::Text, true),
                field("auditorName", "Auditor Name", FieldType::Text, true),
                field("totalShareCapital", "Total Share Capital", FieldType::Number, true),
                field("remarks", "Notes / Remarks", FieldType::Textarea, false),
            ],
        ),
        evt(
            "evt2",
            "DIR_APPOINT",
            "Director Appointment",
            "सञ्चालक नियुक्ति",
            "director",
            &["Board Resolution", "Citizenship Copy", "Consent Letter"],
            vec![
                field("directorName", "Director Name", FieldType::Text, true),
                field("citizenshipNumber", "Citizenship Number", FieldType::Text, true),
                field("address", "Address", FieldType::Text, true),
                select("designation", "Designation", true, &["Director", "Managing Director", "Chairperson"]),
                field("appointmentDate", "Appointment Date", FieldType::Date, true),
                field("resolutionDate", "Resolution Date", FieldType::Date, true),
            ],
        ),
        evt(
            "evt3",
            "CAPITAL_INCREASE",
            "Capital Increase",
            "पूँजी वृद्धि",
            "capital",
            &["Board Resolution", "AGM Resolution", "Updated MOA"],
            vec![
                field("previousCapital", "Previous Capital (NPR)", FieldType::Number, true),
                field("increasedAmount", "Increased Amount (NPR)", FieldType::Number, true),
                field("newCapital", "New Capital (NPR)", FieldType::Number, true),
                field("resolutionDate", "Resolution Date", FieldType::Date, true),
                field("effectiveDate", "Effective Date", FieldType::Date, true),
            ],
        ),
        evt(
            "evt4",
            "SHARE_TRANSFER",
            "Share Transfer",
            "शेयर हस्तान्तरण",
            "capital",
            &["Transfer Deed", "Board Approval", "Share Certificate"],
            vec![
                field("transferorName", "Transferor Name", FieldType::Text, true),
                field("transfereeName", "Transferee Name", FieldType::Text, true),
                field("shareQuantity", "Share Quantity", FieldType::Number, true),
                field("transferDate", "Transfer Date", FieldType::Date, true),
            ],
        ),
        evt(
            "evt5",
            "ADDRESS_CHANGE",
            "Address Change",
            "ठेगाना परिवर्तन",
            "structural",
            &["Board Resolution", "New Address Proof"],
            vec![
                field("previousAddress", "Previous Address", FieldType::Text, true),
                field("newAddress", "New Address", FieldType::Text, true),
                field("effectiveDate", "Effective Date", FieldType::Date, true),
                field("resolutionRef", "Resolution Reference", FieldType::Text, true),
            ],
        ),
        evt(
            "evt6",
            "NAME_CHANGE",
            "Company Name Change",
            "कम्पनी नाम परिवर्तन",
            "structural",
            &["Special Resolution", "Name Reservation Letter", "Updated MOA"],
            vec![
                field("previousName", "Previous Name", FieldType::Text, true),
                field("newName", "New Name", FieldType::Text, true),
                field("effectiveDate", "Effective Date", FieldType::Date, true),
            ],
        ),
        evt(
            "evt7",
            "DIR_RESIGN",
            "Director Resignation",
            "सञ्चालक राजीनामा",
            "director",
            &["Resignation Letter", "Board Acceptance Resolution"],
            vec![
                field("directorName", "Director Name", FieldType::Text, true),
                field("resignationDate", "Resignation Date", FieldType::Date, true),
                field("reason", "Reason", FieldType::Textarea, false),
            ],
        ),
        evt(
            "evt8",
            "MOA_AMENDMENT",
            "MOA/AOA Amendment",
            "प्रबन्धपत्र/नियमावली संशोधन",
            "structural",
            &["Special Resolution", "Amended MOA/AOA"],
            vec![
                field("amendmentDescription", "Amendment Description", FieldType::Textarea, true),
                field("resolutionDate", "Resolution Date", FieldType::Date, true),
                field("effectiveDate", "Effective Date", FieldType::Date, true),
            ],
        ),
    ]
}

fn companies() -> Vec<Company> {
    let director = |id: &str, name: &str, address: &str, citizenship: &str, designation: &str, appointed: &str| Director {
        id: id.into(),
        name: name.into(),
        address: address.into(),
        citizenship_no: citizenship.into(),
        pan: None,
        designation: designation.into(),
        appointment_date: appointed.into(),
        term_expiry_date: None,
        status: DirectorStatus::Active,
    };
    let shareholder = |id: &str, name: &str, address: &str, citizenship: &str, qty: i64, amount: i64, pct: f64, share_type, entry: &str| Shareholder {
        id: id.into(),
        name: name.into(),
        address: address.into(),
        citizenship_no: citizenship.into(),
        father_name: None,
        nationality: "Nepali".into(),
        share_qty: qty,
        share_amount: amount,
        share_percentage: pct,
        share_type,
        date_of_entry: entry.into(),
        status: ShareholderStatus::Active,
    };

    vec![
        Company {
            id: "c1".into(),
            registration_number: "REG-2075-00145".into(),
            registration_date: "2075-04-15".into(),
            name_np: "हिमालय ट्रेड लिमिटेड".into(),
            name_en: "Himalaya Trade Limited".into(),
            company_type: "Private".into(),
            industry: "Trading".into(),
            pan: Some("301234567".into()),
            status: CompanyStatus::Active,
            fiscal_year: "Shrawan - Ashad".into(),
            address: Address {
                province: "Bagmati".into(),
                district: "Kathmandu".into(),
                municipality: "KMC".into(),
                ward: "10".into(),
                tole: "New Baneshwor".into(),
            },
            contact: "01-4567890".into(),
            email: "info@himalayatrade.com".into(),
            website: None,
            capital: CapitalStructure {
                authorized: 10_000_000,
                issued: 5_000_000,
                paid_up: 5_000_000,
                face_value: 100,
                total_shares: 50_000,
                approval_date: "2075-04-15".into(),
                currency: "NPR".into(),
            },
            directors: vec![
                director("d1", "Ram Prasad Sharma", "Kathmandu-10", "12-34-56789", "Chairperson", "2075-04-15"),
                director("d2", "Hari Bahadur Thapa", "Lalitpur-5", "23-45-67890", "Director", "2076-01-01"),
                director("d3", "Gita Kumari Shrestha", "Bhaktapur-3", "34-56-78901", "Managing Director", "2075-04-15"),
            ],
            shareholders: vec![
                shareholder("sh1", "Ram Prasad Sharma", "Kathmandu-10", "12-34-56789", 25_000, 2_500_000, 50.0, ShareType::Founder, "2075-04-15"),
                shareholder("sh2", "Hari Bahadur Thapa", "Lalitpur-5", "23-45-67890", 15_000, 1_500_000, 30.0, ShareType::Founder, "2075-04-15"),
                shareholder("sh3", "Gita Kumari Shrestha", "Bhaktapur-3", "34-56-78901", 10_000, 1_000_000, 20.0, ShareType::Ordinary, "2076-06-01"),
            ],
            branches: vec![Branch {
                id: "b1".into(),
                name: "Pokhara Branch".into(),
                address: "Pokhara-8, Lakeside".into(),
                established_date: "2077-01-15".into(),
                status: BranchStatus::Active,
            }],
        },
        Company {
            id: "c2".into(),
            registration_number: "REG-2076-00289".into(),
            registration_date: "2076-08-20".into(),
            name_np: "एवरेष्ट सोलुसन प्रा.लि.".into(),
            name_en: "Everest Solutions Pvt. Ltd.".into(),
            company_type: "Private".into(),
            industry: "IT Services".into(),
            pan: Some("402345678".into()),
            status: CompanyStatus::Active,
            fiscal_year: "Shrawan - Ashad".into(),
            address: Address {
                province: "Bagmati".into(),
                district: "Lalitpur".into(),
                municipality: "Lalitpur Metro".into(),
                ward: "3".into(),
                tole: "Pulchowk".into(),
            },
            contact: "01-5234567".into(),
            email: "info@everestsolutions.com".into(),
            website: None,
            capital: CapitalStructure {
                authorized: 5_000_000,
                issued: 3_000_000,
                paid_up: 3_000_000,
                face_value: 100,
                total_shares: 30_000,
                approval_date: "2076-08-20".into(),
                currency: "NPR".into(),
            },
            directors: vec![
                director("d4", "Sita Devi Thapa", "Lalitpur-3", "45-67-89012", "Chairperson", "2076-08-20"),
                director("d5", "Bikash Gurung", "Kathmandu-5", "56-78-90123", "Director", "2076-08-20"),
            ],
            shareholders: vec![
                shareholder("sh4", "Sita Devi Thapa", "Lalitpur-3", "45-67-89012", 18_000, 1_800_000, 60.0, ShareType::Founder, "2076-08-20"),
                shareholder("sh5", "Bikash Gurung", "Kathmandu-5", "56-78-90123", 12_000, 1_200_000, 40.0, ShareType::Founder, "2076-08-20"),
            ],
            branches: vec![],
        },
    ]
}

fn applications() -> Vec<Application> {
    vec![
        Application {
            id: "app1".into(),
            application_number: "APP-2081-0001".into(),
            company_id: "c1".into(),
            event_type_id: "evt1".into(),
            event_name: "Annual Return Filing".into(),
            submission_date: "2081-04-10".into(),
            submitted_by: "u1".into(),
            status: ApplicationStatus::Approved,
            remarks: "All documents verified".into(),
            version: 1,
            form_data: form(&[
                ("agmDate", json!("2081-03-15")),
                ("boardMeetingDate", json!("2081-03-10")),
                ("resolutionNumber", json!("RES-081-01")),
                ("auditorName", json!("ABC Audit Firm")),
                ("totalShareCapital", json!(5_000_000)),
            ]),
            documents: vec![
                doc("doc1", "AGM Minutes", "Resolution", DocumentStatus::Verified, "2081-04-10"),
                doc("doc2", "Board Meeting Minutes", "Resolution", DocumentStatus::Verified, "2081-04-10"),
                doc("doc3", "Financial Statement", "Report", DocumentStatus::Verified, "2081-04-10"),
            ],
            history: vec![
                hist("Created", "Ram Prasad Sharma", "2081-04-10", "Draft created"),
                hist("Submitted", "Ram Prasad Sharma", "2081-04-10", "Submitted for verification"),
                hist("Under Verification", "Krishna Bahadur KC", "2081-04-11", "Reviewing documents"),
                hist("Approved", "Krishna Bahadur KC", "2081-04-12", "All documents verified successfully"),
            ],
        },
        Application {
            id: "app2".into(),
            application_number: "APP-2081-0002".into(),
            company_id: "c1".into(),
            event_type_id: "evt2".into(),
            event_name: "Director Appointment".into(),
            submission_date: "2081-05-01".into(),
            submitted_by: "u1".into(),
            status: ApplicationStatus::Submitted,
            remarks: String::new(),
            version: 1,
            form_data: form(&[
                ("directorName", json!("Binod Kumar Jha")),
                ("citizenshipNumber", json!("67-89-01234")),
                ("address", json!("Kathmandu-7")),
                ("designation", json!("Director")),
                ("appointmentDate", json!("2081-04-25")),
                ("resolutionDate", json!("2081-04-20")),
            ]),
            documents: vec![
                doc("doc4", "Board Resolution", "Resolution", DocumentStatus::Uploaded, "2081-05-01"),
                doc("doc5", "Citizenship Copy", "Certificate", DocumentStatus::Uploaded, "2081-05-01"),
            ],
            history: vec![
                hist("Created", "Ram Prasad Sharma", "2081-05-01", "Draft created"),
                hist("Submitted", "Ram Prasad Sharma", "2081-05-01", "Submitted for verification"),
            ],
        },
        Application {
            id: "app3".into(),
            application_number: "APP-2081-0003".into(),
            company_id: "c2".into(),
            event_type_id: "evt3".into(),
            event_name: "Capital Increase".into(),
            submission_date: "2081-05-05".into(),
            submitted_by: "u2".into(),
            status: ApplicationStatus::UnderVerification,
            remarks: String::new(),
            version: 1,
            form_data: form(&[
                ("previousCapital", json!(3_000_000)),
                ("increasedAmount", json!(2_000_000)),
                ("newCapital", json!(5_000_000)),
                ("resolutionDate", json!("2081-04-28")),
                ("effectiveDate", json!("2081-05-15")),
            ]),
            documents: vec![
                doc("doc6", "Board Resolution", "Resolution", DocumentStatus::Uploaded, "2081-05-05"),
                doc("doc7", "AGM Resolution", "Resolution", DocumentStatus::Uploaded, "2081-05-05"),
            ],
            history: vec![
                hist("Created", "Sita Devi Thapa", "2081-05-05", "Draft created"),
                hist("Submitted", "Sita Devi Thapa", "2081-05-05", "Submitted for verification"),
                hist("Under Verification", "Laxmi Kumari Rai", "2081-05-06", "Documents under review"),
            ],
        },
        Application {
            id: "app4".into(),
            application_number: "APP-2081-0004".into(),
            company_id: "c1".into(),
            event_type_id: "evt4".into(),
            event_name: "Share Transfer".into(),
            submission_date: "2081-05-10".into(),
            submitted_by: "u1".into(),
            status: ApplicationStatus::Returned,
            remarks: "Transfer deed signature missing".into(),
            version: 2,
            form_data: form(&[
                ("transferorName", json!("Hari Bahadur Thapa")),
                ("transfereeName", json!("Binod Kumar Jha")),
                ("shareQuantity", json!(5000)),
                ("transferDate", json!("2081-05-08")),
            ]),
            documents: vec![doc(
                "doc8",
                "Transfer Deed",
                "Certificate",
                DocumentStatus::Rejected,
                "2081-05-10",
            )],
            history: vec![
                hist("Created", "Ram Prasad Sharma", "2081-05-10", "Draft created"),
                hist("Submitted", "Ram Prasad Sharma", "2081-05-10", "Submitted for verification"),
                hist("Under Verification", "Krishna Bahadur KC", "2081-05-10", "Reviewing documents"),
                hist("Returned", "Krishna Bahadur KC", "2081-05-11", "Transfer deed signature missing"),
            ],
        },
        Application {
            id: "app5".into(),
            application_number: "APP-2081-0005".into(),
            company_id: "c2".into(),
            event_type_id: "evt1".into(),
            event_name: "Annual Return Filing".into(),
            submission_date: "2081-04-20".into(),
            submitted_by: "u2".into(),
            status: ApplicationStatus::Draft,
            remarks: String::new(),
            version: 1,
            form_data: BTreeMap::new(),
            documents: vec![],
            history: vec![hist("Created", "Sita Devi Thapa", "2081-04-20", "Draft created")],
        },
    ]
}

fn templates() -> Vec<Template> {
    let tpl = |id: &str, code: &str, name: &str, event: &str, language: &str, format: &str, version: u32, created: &str, status, placeholders: &[&str]| Template {
        id: id.into(),
        code: code.into(),
        name: name.into(),
        event_type_id: event.into(),
        language: language.into(),
        format: format.into(),
        version,
        created_by: "a1".into(),
        created_date: created.into(),
        status,
        placeholders: placeholders.iter().map(|s| s.to_string()).collect(),
    };
    vec![
        tpl("t1", "TPL-ANNUAL", "Annual Return Certificate", "evt1", "English", "PDF", 2, "2080-01-01", TemplateStatus::Active,
            &["company_name_eng", "company_name_nep", "registration_no", "agm_date", "board_meeting_date", "director_list", "auditor_name", "paid_up_capital", "resolution_no", "submission_date", "current_date"]),
        tpl("t2", "TPL-DIR-APPT", "Director Appointment Letter", "evt2", "English", "PDF", 1, "2080-01-15", TemplateStatus::Active,
            &["company_name_eng", "director_name", "citizenship_no", "designation", "appointment_date", "resolution_date"]),
        tpl("t3", "TPL-CAPITAL", "Capital Change Certificate", "evt3", "Nepali", "PDF", 1, "2080-02-01", TemplateStatus::Active,
            &["company_name_nep", "previous_capital", "new_capital", "resolution_date", "effective_date"]),
        tpl("t4", "TPL-SHARE-TR", "Share Transfer Certificate", "evt4", "English", "DOCX", 1, "2080-03-01", TemplateStatus::Active,
            &["company_name_eng", "transferor_name", "transferee_name", "share_quantity", "transfer_date"]),
        tpl("t5", "TPL-ANNUAL-NP", "वार्षिक प्रतिवेदन प्रमाणपत्र", "evt1", "Nepali", "PDF", 1, "2080-04-01", TemplateStatus::Inactive,
            &["company_name_nep", "registration_no", "agm_date", "director_list", "paid_up_capital"]),
    ]
}

fn audit_logs() -> Vec<AuditLog> {
    let log = |id: &str, action: &str, user_id: &str, user_name: &str, target_type: &str, target_id: &str, timestamp: &str, details: &str| AuditLog {
        id: id.into(),
        action: action.into(),
        user_id: user_id.into(),
        user_name: user_name.into(),
        target_type: target_type.into(),
        target_id: target_id.into(),
        timestamp: timestamp.into(),
        details: details.into(),
    };
    vec![
        log("al1", "Application Approved", "s1", "Krishna Bahadur KC", "application", "app1", "2081-04-12 10:30:00", "Annual Return Filing approved"),
        log("al2", "Application Submitted", "u1", "Ram Prasad Sharma", "application", "app2", "2081-05-01 09:15:00", "Director Appointment submitted"),
        log("al3", "Application Returned", "s1", "Krishna Bahadur KC", "application", "app4", "2081-05-11 14:20:00", "Share Transfer returned - signature missing"),
        log("al4", "Template Updated", "a1", "Admin Officer", "template", "t1", "2081-03-01 11:00:00", "Annual Return Certificate updated to version 2"),
        log("al5", "User Login", "u2", "Sita Devi Thapa", "system", "", "2081-05-05 08:00:00", "User logged in"),
    ]
}

/// Build the full fixture.
pub fn fixture() -> SeedData {
    SeedData {
        users: users(),
        companies: companies(),
        event_types: event_types(),
        applications: applications(),
        templates: templates(),
        audit_logs: audit_logs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_counts() {
        let data = fixture();
        assert_eq!(data.users.len(), 5);
        assert_eq!(data.companies.len(), 2);
        assert_eq!(data.event_types.len(), 8);
        assert_eq!(data.applications.len(), 5);
        assert_eq!(data.templates.len(), 5);
        assert_eq!(data.audit_logs.len(), 5);
    }

    #[test]
    fn app4_history_ends_in_returned() {
        let data = fixture();
        let app4 = data.applications.iter().find(|a| a.id == "app4").unwrap();
        assert_eq!(app4.history.len(), 4);
        let last = app4.history.last().unwrap();
        assert_eq!(last.action, "Returned");
        assert_eq!(last.remarks, "Transfer deed signature missing");
        assert_eq!(app4.status, ApplicationStatus::Returned);
    }

    #[test]
    fn seeded_form_data_keys_belong_to_their_schema() {
        let data = fixture();
        for app in &data.applications {
            let evt = data
                .event_types
                .iter()
                .find(|e| e.id == app.event_type_id)
                .unwrap();
            for key in app.form_data.keys() {
                assert!(
                    evt.field(key).is_some(),
                    "{} has out-of-schema key {}",
                    app.id,
                    key
                );
            }
        }
    }

    #[test]
    fn seeded_history_last_entry_matches_status() {
        let data = fixture();
        for app in &data.applications {
            let last = app.history.last().unwrap();
            assert_eq!(
                last.action,
                app.status.history_action(),
                "{} history out of sync",
                app.id
            );
        }
    }
}
