//! Tenant selection carried in console URLs
//!
//! Every navigation records which tenant (and company) the user was looking
//! at, taken from the `tenant_id` / `company_id` query parameters.

use crate::{Error, Result};
use url::Url;

pub const TENANT_ID_PARAM: &str = "tenant_id";
pub const COMPANY_ID_PARAM: &str = "company_id";

/// Browser storage key prefix for the last viewed tenant of a company
pub const LAST_VIEWED_TENANT_KEY_PREFIX: &str = "lastViewedTenant.";

/// Storage key holding the last viewed tenant of `company_id`
pub fn last_viewed_tenant_key(company_id: &str) -> String {
    format!("{LAST_VIEWED_TENANT_KEY_PREFIX}{company_id}")
}

/// Tenant and company named by a URL's query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantSelection {
    pub tenant_id: Option<String>,
    pub company_id: Option<String>,
}

impl TenantSelection {
    /// Read the selection from a parsed URL
    ///
    /// Only the first occurrence of a key is read; an empty value counts as
    /// absent even when a later occurrence is set.
    pub fn from_url(url: &Url) -> Self {
        Self {
            tenant_id: first_value(url, TENANT_ID_PARAM),
            company_id: first_value(url, COMPANY_ID_PARAM),
        }
    }

    /// Parse `href` and read the selection
    pub fn from_href(href: &str) -> Result<Self> {
        let url = Url::parse(href).map_err(|source| Error::InvalidUrl {
            href: href.to_string(),
            source,
        })?;
        Ok(Self::from_url(&url))
    }

    /// `(storage key, tenant id)` to record as the last viewed tenant
    ///
    /// Requires both ids.
    pub fn last_viewed_entry(&self) -> Option<(String, &str)> {
        let company_id = self.company_id.as_deref()?;
        let tenant_id = self.tenant_id.as_deref()?;
        Some((last_viewed_tenant_key(company_id), tenant_id))
    }

    /// True if neither id is present
    pub fn is_empty(&self) -> bool {
        self.tenant_id.is_none() && self.company_id.is_none()
    }
}

fn first_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_ids() {
        let selection = TenantSelection::from_href(
            "https://console.example.com/users?company_id=c1&tenant_id=t1",
        )
        .unwrap();
        assert_eq!(selection.tenant_id.as_deref(), Some("t1"));
        assert_eq!(selection.company_id.as_deref(), Some("c1"));
    }

    #[test]
    fn test_no_query() {
        let selection = TenantSelection::from_href("https://console.example.com/users").unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_empty_value_is_absent() {
        let selection =
            TenantSelection::from_href("https://console.example.com/?tenant_id=&company_id=c1")
                .unwrap();
        assert_eq!(selection.tenant_id, None);
        assert_eq!(selection.company_id.as_deref(), Some("c1"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let selection =
            TenantSelection::from_href("https://console.example.com/?tenant_id=a&tenant_id=b")
                .unwrap();
        assert_eq!(selection.tenant_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_empty_first_occurrence_hides_later_value() {
        let selection =
            TenantSelection::from_href("https://console.example.com/?tenant_id=&tenant_id=b")
                .unwrap();
        assert_eq!(selection.tenant_id, None);
    }

    #[test]
    fn test_last_viewed_entry() {
        let selection =
            TenantSelection::from_href("https://console.example.com/?company_id=c1&tenant_id=t1")
                .unwrap();
        assert_eq!(
            selection.last_viewed_entry(),
            Some(("lastViewedTenant.c1".to_string(), "t1"))
        );

        let tenant_only =
            TenantSelection::from_href("https://console.example.com/?tenant_id=t1").unwrap();
        assert_eq!(tenant_only.last_viewed_entry(), None);
    }

    #[test]
    fn test_percent_decoded() {
        let selection =
            TenantSelection::from_href("https://console.example.com/?tenant_id=t%201").unwrap();
        assert_eq!(selection.tenant_id.as_deref(), Some("t 1"));
    }

    #[test]
    fn test_relative_href_rejected() {
        let err = TenantSelection::from_href("/users?tenant_id=t1").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }
}
