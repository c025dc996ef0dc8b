//! Static contact corpora used across harnesses.
//!
//! `CORPUS_CONTACTS` is in the on-disk (raw) shape — `job_history` is a list
//! — so the same fixture exercises dataset loading and search. The corpus is
//! constructed so that:
//!
//! - `"reno"` unscoped matches two records (Jane Doe's city, Reno Berger's
//!   name) but each field-scoped variant matches exactly one;
//! - `"acme"` matches two records, one of them (Arthur Vance) in both
//!   `company` and `email`, guarding the no-duplicates property.

use rolo_core::{Contact, RawContact};

pub const CORPUS_CONTACTS: &str = r#"[
  {
    "name": "Jane Doe",
    "email": "jane.doe@washoe-schools.org",
    "company": "Washoe County Schools",
    "city": "Reno",
    "country": "USA",
    "job_history": ["Teacher", "Clerk"]
  },
  {
    "name": "Arthur Vance",
    "email": "arthur.vance@acme-mfg.com",
    "company": "Acme Manufacturing",
    "city": "Cleveland",
    "country": "USA",
    "job_history": ["Machinist", "Foreman"]
  },
  {
    "name": "Priya Sharma",
    "email": "priya.sharma@lumen-analytics.io",
    "company": "Lumen Analytics",
    "city": "Pune",
    "country": "India",
    "job_history": ["Data Analyst", "Product Manager"]
  },
  {
    "name": "Marco Rossi",
    "email": "marco@trattoria-rossi.it",
    "company": "Trattoria Rossi",
    "city": "Milan",
    "country": "Italy",
    "job_history": ["Line Cook", "Chef", "Owner"]
  },
  {
    "name": "Sofia Almeida",
    "email": "sofia.almeida@porto-freight.pt",
    "company": "Porto Freight",
    "city": "Porto",
    "country": "Portugal",
    "job_history": ["Dispatcher"]
  },
  {
    "name": "Chen Wei",
    "email": "chen.wei@acme-logistics.cn",
    "company": "Acme Logistics",
    "city": "Shanghai",
    "country": "China",
    "job_history": ["Driver", "Fleet Coordinator"]
  },
  {
    "name": "Amara Okafor",
    "email": "amara.okafor@lagos-health.ng",
    "company": "Lagos Health Trust",
    "city": "Lagos",
    "country": "Nigeria",
    "job_history": ["Nurse", "Ward Manager"]
  },
  {
    "name": "Reno Berger",
    "email": "reno.berger@alpen-consult.at",
    "company": "Alpen Consulting",
    "city": "Vienna",
    "country": "Austria",
    "job_history": ["Consultant"]
  }
]"#;

/// Parse [`CORPUS_CONTACTS`] into normalised contacts.
pub fn corpus() -> Vec<Contact> {
    let raw: Vec<RawContact> =
        serde_json::from_str(CORPUS_CONTACTS).expect("corpus fixture must be valid JSON");
    raw.into_iter().map(Contact::from).collect()
}
