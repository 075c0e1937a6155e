//! Console route registry
//!
//! The console's page routes in registration order. Each pattern maps to the
//! page component it renders and the access guard wrapped around it.
//!
//! Registration order matters only for ties (see [`console_router::segment_score`]);
//! literal routes such as `/users/create` win over `/users/:userID`
//! wherever they are registered.

use crate::Result;
use console_router::RouteTable;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Paths
// ============================================================================

pub const HOME_PATH: &str = "/";
pub const GLOBAL_IAM_PATH: &str = "/globaliam";
pub const ORGANIZATIONS_PATH: &str = "/organizations";
pub const ORGANIZATIONS_ORG_PATH: &str = "/organizations/:orgID";
pub const ORGANIZATIONS_CREATE_PATH: &str = "/organizations/create";
pub const TENANTS_CREATE_PATH: &str = "/tenants/create";
pub const TENANTS_DETAILS_PATH: &str = "/tenants/:tenantID";
pub const STATUS_PATH: &str = "/status";
pub const EVENTS_LOG_PATH: &str = "/events";
pub const RESOURCE_LIST_PATH: &str = "/resources";
pub const COLUMNS_PATH: &str = "/columns";
pub const DATA_TYPES_PATH: &str = "/datatypes";
pub const DATA_TYPE_CREATE_PATH: &str = "/datatypes/create";
pub const DATA_TYPE_DETAILS_PATH: &str = "/datatypes/:datatypeID";
pub const COLUMNS_CREATE_PATH: &str = "/columns/create";
pub const COLUMNS_DETAILS_PATH: &str = "/columns/:columnID";
pub const OBJECT_STORES_PATH: &str = "/object_stores";
pub const OBJECT_STORE_DETAILS_PATH: &str = "/object_stores/:objectStoreID";
pub const POLICY_SECRETS_PATH: &str = "/secrets";
pub const ACCESSORS_PATH: &str = "/accessors";
pub const ACCESSORS_CREATE_PATH: &str = "/accessors/create";
pub const ACCESSORS_DETAILS_VERSION_PATH: &str = "/accessors/:accessorID/:version";
pub const MUTATORS_PATH: &str = "/mutators";
pub const MUTATORS_DETAILS_VERSION_PATH: &str = "/mutators/:mutatorID/:version";
pub const MUTATORS_CREATE_PATH: &str = "/mutators/create";
pub const PURPOSES_PATH: &str = "/purposes";
pub const PURPOSES_DETAILS_PATH: &str = "/purposes/:purposeID";
pub const PURPOSES_CREATE_PATH: &str = "/purposes/create";
pub const TRANSFORMERS_PATH: &str = "/transformers";
pub const TRANSFORMERS_CREATE_PATH: &str = "/transformers/create";
pub const TRANSFORMERS_POLICY_DETAILS_VERSION_PATH: &str = "/transformers/:transformerID/:version";
pub const ACCESSPOLICIES_PATH: &str = "/accesspolicies";
pub const ACCESSPOLICIES_CREATE_PATH: &str = "/accesspolicies/create";
pub const ACCESSPOLICIES_DETAILS_VERSION_PATH: &str = "/accesspolicies/:policyID/:version";
pub const POLICYTEMPLATES_PATH: &str = "/policytemplates";
pub const POLICYTEMPLATES_CREATE_PATH: &str = "/policytemplates/create";
pub const POLICYTEMPLATES_DETAILS_VERSION_PATH: &str = "/policytemplates/:templateID/:version";
pub const OBJECTS_PATH: &str = "/objects";
pub const OBJECTS_DETAILS_PATH: &str = "/objects/:objectID";
pub const OBJECTS_CREATE_PATH: &str = "/objects/create";
pub const EDGES_PATH: &str = "/edges";
pub const EDGES_DETAILS_PATH: &str = "/edges/:edgeID";
pub const EDGES_CREATE_PATH: &str = "/edges/create";
pub const EDGETYPES_PATH: &str = "/edgetypes";
pub const EDGETYPES_DETAILS_PATH: &str = "/edgetypes/:edgeTypeID";
pub const EDGETYPES_CREATE_PATH: &str = "/edgetypes/create";
pub const OBJECTTYPES_PATH: &str = "/objecttypes";
pub const OBJECTTYPES_DETAILS_PATH: &str = "/objecttypes/:objectTypeID";
pub const OBJECTTYPES_CREATE_PATH: &str = "/objecttypes/create";
pub const LOGINAPPS_PATH: &str = "/loginapps";
pub const IDENTITYPROVIDERS_PATH: &str = "/identityproviders";
pub const OAUTHCONNECTIONS_PATH: &str = "/oauthconnections";
pub const COMMCHANNELS_PATH: &str = "/commschannels";
pub const TENANTS_USERSTORE_PATH: &str = "/tenants/userstore";
pub const TENANTS_USERSTORE_COLUMNS_CREATE_PATH: &str = "/tenants/userstore/columns/create";
pub const TENANTS_USERSTORE_COLUMNS_DETAILS_PATH: &str = "/tenants/userstore/columns/:columnID";
pub const TENANTS_USERSTORE_ACCESSORS_CREATE_PATH: &str = "/tenants/userstore/accessors/create";
pub const TENANTS_USERSTORE_ACCESSORS_DETAILS_VERSION_PATH: &str =
    "/tenants/userstore/accessors/:accessorID/:version";
pub const TENANTS_USERSTORE_MUTATORS_DETAILS_VERSION_PATH: &str =
    "/tenants/userstore/mutators/:mutatorID/:version";
pub const TENANTS_USERSTORE_MUTATORS_CREATE_PATH: &str = "/tenants/userstore/mutators/create";
pub const TENANTS_USERSTORE_PURPOSES_DETAILS_PATH: &str = "/tenants/userstore/purposes/:purposeID";
pub const TENANTS_USERSTORE_PURPOSES_CREATE_PATH: &str = "/tenants/userstore/purposes/create";
pub const AUTHZ_PATH: &str = "/authz";
pub const AUTHN_PATH: &str = "/authn";
pub const IDENTITYPROVIDERS_PLEX_PROVIDER_DETAILS_PATH: &str =
    "/identityproviders/plex_provider/:plexProviderID";
pub const OAUTHCONNECTIONS_OIDC_PROVIDER_CREATE_PATH: &str =
    "/oauthconnections/oidc_provider/create";
pub const OAUTHCONNECTIONS_OIDC_PROVIDER_NAME_PATH: &str =
    "/oauthconnections/oidc_provider/:oidcProviderName";
pub const LOGINAPPS_PLEX_APP_DETAILS_PATH: &str = "/loginapps/:plexAppID";
pub const LOGINAPPS_PLEX_EMPLOYEE_APP_PATH: &str = "/loginapps/plex_employee_app";
pub const USERS_PATH: &str = "/users";
pub const USERS_DETAILS_PATH: &str = "/users/:userID";
pub const IAM_PATH: &str = "/iam";
pub const AUDITLOG_PATH: &str = "/auditlog";
pub const DATAACCESSLOG_PATH: &str = "/dataaccesslog";
pub const DATAACCESSLOG_DETAILS_PATH: &str = "/dataaccesslog/:entryID";
pub const SYSTEMLOG_PATH: &str = "/systemlog";
pub const SYSTEMLOG_RUN_DETAILS_PATH: &str = "/systemlog/:runID";
pub const DATASOURCES_PATH: &str = "/datasources";
pub const DATASOURCE_CREATE_PATH: &str = "/datasources/create";
pub const DATASOURCE_DETAILS_PATH: &str = "/datasources/:dataSourceID";
pub const DATASOURCESCHEMAS_PATH: &str = "/datasourceschemas";
pub const DATASOURCEELEMENT_DETAILS_PATH: &str = "/datasourceschemas/:elementID";

// ============================================================================
// Handlers
// ============================================================================

macro_rules! pages {
    ($($variant:ident => $name:literal,)+) => {
        /// Page component rendered for a route
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Page {
            $($variant,)+
        }

        impl Page {
            /// Every page, in declaration order
            pub const ALL: &'static [Page] = &[$(Page::$variant,)+];

            const NAMES: &'static [&'static str] = &[$($name,)+];

            /// Manifest name, e.g. `accessor_detail`
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Page::$variant => $name,)+
                }
            }

            /// Parse a manifest name
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Page::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

pages! {
    Home => "home",
    GlobalIam => "global_iam",
    Orgs => "orgs",
    OrganizationDetails => "organization_details",
    CreateOrg => "create_org",
    CreateTenant => "create_tenant",
    TenantDetails => "tenant_details",
    Status => "status",
    EventsLog => "events_log",
    ResourceList => "resource_list",
    ObjectStores => "object_stores",
    ObjectStoreDetails => "object_store_details",
    Secrets => "secrets",
    Columns => "columns",
    DataTypes => "data_types",
    CreateDataType => "create_data_type",
    DataTypeDetail => "data_type_detail",
    Column => "column",
    Accessors => "accessors",
    CreateAccessor => "create_accessor",
    AccessorDetail => "accessor_detail",
    Mutators => "mutators",
    MutatorDetail => "mutator_detail",
    CreateMutator => "create_mutator",
    Purposes => "purposes",
    Purpose => "purpose",
    Transformers => "transformers",
    Transformer => "transformer",
    AccessPolicies => "access_policies",
    AccessPolicy => "access_policy",
    PolicyTemplates => "policy_templates",
    CreatePolicyTemplate => "create_policy_template",
    PolicyTemplateDetails => "policy_template_details",
    Objects => "objects",
    Object => "object",
    Edges => "edges",
    Edge => "edge",
    EdgeTypes => "edge_types",
    EdgeType => "edge_type",
    ObjectTypes => "object_types",
    ObjectType => "object_type",
    LoginApps => "login_apps",
    IdentityProviders => "identity_providers",
    OauthConnections => "oauth_connections",
    CommsChannels => "comms_channels",
    Authz => "authz",
    PlexProvider => "plex_provider",
    EditOidcProvider => "edit_oidc_provider",
    PlexApp => "plex_app",
    PlexEmployeeApp => "plex_employee_app",
    Users => "users",
    UserDetail => "user_detail",
    Iam => "iam",
    AuditLog => "audit_log",
    DataAccessLog => "data_access_log",
    DataAccessLogDetails => "data_access_log_details",
    SystemLog => "system_log",
    SystemEventDetail => "system_event_detail",
    DataSources => "data_sources",
    DataSource => "data_source",
    DataSourceSchemas => "data_source_schemas",
    DataSourceElement => "data_source_element",
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Page {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Page {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Page::from_name(&name).ok_or_else(|| de::Error::unknown_variant(&name, Page::NAMES))
    }
}

/// Access wrapper around a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Guard {
    /// Rendered as-is
    #[default]
    None,
    /// Platform administrators only
    UcAdminOnly,
    /// Administrators of the selected tenant only
    TenantAdminOnly,
    /// Requires a selected tenant
    TenantSpecific,
}

impl Guard {
    pub fn as_str(&self) -> &'static str {
        match self {
            Guard::None => "none",
            Guard::UcAdminOnly => "uc_admin_only",
            Guard::TenantAdminOnly => "tenant_admin_only",
            Guard::TenantSpecific => "tenant_specific",
        }
    }
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handler registered for a console route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteHandler {
    pub page: Page,
    #[serde(default)]
    pub guard: Guard,
}

impl RouteHandler {
    pub const fn new(page: Page, guard: Guard) -> Self {
        Self { page, guard }
    }
}

// ============================================================================
// Registry
// ============================================================================

const fn route(path: &'static str, page: Page, guard: Guard) -> (&'static str, RouteHandler) {
    (path, RouteHandler::new(page, guard))
}

/// `TENANTS_USERSTORE_PATH` and the userstore purpose paths are link targets
/// only; they are not registered here.
static CONSOLE_ROUTES: &[(&str, RouteHandler)] = &[
    route(HOME_PATH, Page::Home, Guard::None),
    route(GLOBAL_IAM_PATH, Page::GlobalIam, Guard::UcAdminOnly),
    route(ORGANIZATIONS_PATH, Page::Orgs, Guard::TenantSpecific),
    route(ORGANIZATIONS_ORG_PATH, Page::OrganizationDetails, Guard::TenantSpecific),
    route(ORGANIZATIONS_CREATE_PATH, Page::CreateOrg, Guard::TenantAdminOnly),
    route(TENANTS_CREATE_PATH, Page::CreateTenant, Guard::None),
    route(TENANTS_DETAILS_PATH, Page::TenantDetails, Guard::None),
    route(STATUS_PATH, Page::Status, Guard::TenantSpecific),
    route(EVENTS_LOG_PATH, Page::EventsLog, Guard::TenantSpecific),
    route(RESOURCE_LIST_PATH, Page::ResourceList, Guard::TenantSpecific),
    route(OBJECT_STORES_PATH, Page::ObjectStores, Guard::TenantSpecific),
    route(OBJECT_STORE_DETAILS_PATH, Page::ObjectStoreDetails, Guard::TenantSpecific),
    route(POLICY_SECRETS_PATH, Page::Secrets, Guard::TenantSpecific),
    route(COLUMNS_PATH, Page::Columns, Guard::TenantSpecific),
    route(DATA_TYPES_PATH, Page::DataTypes, Guard::TenantSpecific),
    route(DATA_TYPE_CREATE_PATH, Page::CreateDataType, Guard::TenantSpecific),
    route(DATA_TYPE_DETAILS_PATH, Page::DataTypeDetail, Guard::TenantSpecific),
    route(COLUMNS_CREATE_PATH, Page::Column, Guard::TenantAdminOnly),
    route(COLUMNS_DETAILS_PATH, Page::Column, Guard::TenantSpecific),
    route(ACCESSORS_PATH, Page::Accessors, Guard::TenantSpecific),
    route(ACCESSORS_CREATE_PATH, Page::CreateAccessor, Guard::TenantAdminOnly),
    route(ACCESSORS_DETAILS_VERSION_PATH, Page::AccessorDetail, Guard::TenantSpecific),
    route(MUTATORS_PATH, Page::Mutators, Guard::TenantSpecific),
    route(MUTATORS_DETAILS_VERSION_PATH, Page::MutatorDetail, Guard::TenantSpecific),
    route(MUTATORS_CREATE_PATH, Page::CreateMutator, Guard::TenantAdminOnly),
    route(PURPOSES_PATH, Page::Purposes, Guard::TenantSpecific),
    route(PURPOSES_DETAILS_PATH, Page::Purpose, Guard::TenantSpecific),
    route(PURPOSES_CREATE_PATH, Page::Purpose, Guard::TenantAdminOnly),
    route(TRANSFORMERS_PATH, Page::Transformers, Guard::TenantSpecific),
    route(TRANSFORMERS_CREATE_PATH, Page::Transformer, Guard::TenantAdminOnly),
    route(TRANSFORMERS_POLICY_DETAILS_VERSION_PATH, Page::Transformer, Guard::TenantSpecific),
    route(ACCESSPOLICIES_PATH, Page::AccessPolicies, Guard::TenantSpecific),
    route(ACCESSPOLICIES_CREATE_PATH, Page::AccessPolicy, Guard::TenantAdminOnly),
    route(ACCESSPOLICIES_DETAILS_VERSION_PATH, Page::AccessPolicy, Guard::TenantSpecific),
    route(POLICYTEMPLATES_PATH, Page::PolicyTemplates, Guard::TenantSpecific),
    route(POLICYTEMPLATES_CREATE_PATH, Page::CreatePolicyTemplate, Guard::TenantAdminOnly),
    route(POLICYTEMPLATES_DETAILS_VERSION_PATH, Page::PolicyTemplateDetails, Guard::TenantSpecific),
    route(OBJECTS_PATH, Page::Objects, Guard::TenantSpecific),
    route(OBJECTS_DETAILS_PATH, Page::Object, Guard::TenantSpecific),
    route(OBJECTS_CREATE_PATH, Page::Object, Guard::TenantAdminOnly),
    route(EDGES_PATH, Page::Edges, Guard::TenantSpecific),
    route(EDGES_DETAILS_PATH, Page::Edge, Guard::TenantSpecific),
    route(EDGES_CREATE_PATH, Page::Edge, Guard::TenantAdminOnly),
    route(EDGETYPES_PATH, Page::EdgeTypes, Guard::TenantSpecific),
    route(EDGETYPES_DETAILS_PATH, Page::EdgeType, Guard::TenantSpecific),
    route(EDGETYPES_CREATE_PATH, Page::EdgeType, Guard::TenantAdminOnly),
    route(OBJECTTYPES_PATH, Page::ObjectTypes, Guard::TenantSpecific),
    route(OBJECTTYPES_DETAILS_PATH, Page::ObjectType, Guard::TenantSpecific),
    route(OBJECTTYPES_CREATE_PATH, Page::ObjectType, Guard::TenantAdminOnly),
    route(LOGINAPPS_PATH, Page::LoginApps, Guard::TenantAdminOnly),
    route(IDENTITYPROVIDERS_PATH, Page::IdentityProviders, Guard::TenantAdminOnly),
    route(OAUTHCONNECTIONS_PATH, Page::OauthConnections, Guard::TenantAdminOnly),
    route(COMMCHANNELS_PATH, Page::CommsChannels, Guard::TenantAdminOnly),
    route(TENANTS_USERSTORE_COLUMNS_CREATE_PATH, Page::Column, Guard::TenantAdminOnly),
    route(TENANTS_USERSTORE_COLUMNS_DETAILS_PATH, Page::Column, Guard::TenantSpecific),
    route(TENANTS_USERSTORE_ACCESSORS_CREATE_PATH, Page::CreateAccessor, Guard::TenantAdminOnly),
    route(
        TENANTS_USERSTORE_ACCESSORS_DETAILS_VERSION_PATH,
        Page::AccessorDetail,
        Guard::TenantSpecific,
    ),
    route(
        TENANTS_USERSTORE_MUTATORS_DETAILS_VERSION_PATH,
        Page::MutatorDetail,
        Guard::TenantSpecific,
    ),
    route(TENANTS_USERSTORE_MUTATORS_CREATE_PATH, Page::CreateMutator, Guard::TenantAdminOnly),
    route(AUTHZ_PATH, Page::Authz, Guard::TenantSpecific),
    route(AUTHN_PATH, Page::LoginApps, Guard::TenantSpecific),
    route(IDENTITYPROVIDERS_PLEX_PROVIDER_DETAILS_PATH, Page::PlexProvider, Guard::TenantSpecific),
    route(
        OAUTHCONNECTIONS_OIDC_PROVIDER_CREATE_PATH,
        Page::EditOidcProvider,
        Guard::TenantAdminOnly,
    ),
    route(OAUTHCONNECTIONS_OIDC_PROVIDER_NAME_PATH, Page::EditOidcProvider, Guard::TenantAdminOnly),
    route(LOGINAPPS_PLEX_APP_DETAILS_PATH, Page::PlexApp, Guard::TenantAdminOnly),
    route(LOGINAPPS_PLEX_EMPLOYEE_APP_PATH, Page::PlexEmployeeApp, Guard::TenantAdminOnly),
    route(USERS_PATH, Page::Users, Guard::TenantSpecific),
    route(USERS_DETAILS_PATH, Page::UserDetail, Guard::TenantSpecific),
    route(IAM_PATH, Page::Iam, Guard::None),
    route(AUDITLOG_PATH, Page::AuditLog, Guard::TenantSpecific),
    route(DATAACCESSLOG_PATH, Page::DataAccessLog, Guard::TenantSpecific),
    route(DATAACCESSLOG_DETAILS_PATH, Page::DataAccessLogDetails, Guard::TenantSpecific),
    route(SYSTEMLOG_PATH, Page::SystemLog, Guard::TenantSpecific),
    route(SYSTEMLOG_RUN_DETAILS_PATH, Page::SystemEventDetail, Guard::TenantSpecific),
    route(DATASOURCES_PATH, Page::DataSources, Guard::TenantSpecific),
    route(DATASOURCE_CREATE_PATH, Page::DataSource, Guard::TenantAdminOnly),
    route(DATASOURCE_DETAILS_PATH, Page::DataSource, Guard::TenantAdminOnly),
    route(DATASOURCESCHEMAS_PATH, Page::DataSourceSchemas, Guard::TenantAdminOnly),
    route(DATASOURCEELEMENT_DETAILS_PATH, Page::DataSourceElement, Guard::TenantAdminOnly),
];

/// The console's routes in registration order
pub fn console_routes() -> &'static [(&'static str, RouteHandler)] {
    CONSOLE_ROUTES
}

/// Compile the console's routes
pub fn console_table() -> Result<RouteTable<RouteHandler>> {
    Ok(RouteTable::build(CONSOLE_ROUTES.iter().copied())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_console_table_builds() {
        let table = console_table().unwrap();
        assert_eq!(table.len(), console_routes().len());
        assert_eq!(table.len(), 79);
        assert!(table.get(TENANTS_USERSTORE_PATH).is_none());
    }

    #[test]
    fn test_mutator_detail() {
        let table = console_table().unwrap();
        let m = table.match_path("/mutators/abc/3").unwrap();
        assert_eq!(m.pattern, MUTATORS_DETAILS_VERSION_PATH);
        assert_eq!(m.handler.page, Page::MutatorDetail);
        assert_eq!(m.handler.guard, Guard::TenantSpecific);
        assert_eq!(m.params.get("mutatorID"), Some("abc"));
        assert_eq!(m.params.get("version"), Some("3"));

        let m = table.match_path("/mutators").unwrap();
        assert_eq!(m.handler.page, Page::Mutators);
        assert!(m.params.is_empty());
    }

    #[test]
    fn test_create_routes_beat_detail_routes() {
        let table = console_table().unwrap();

        let m = table.match_path("/columns/create").unwrap();
        assert_eq!(m.pattern, COLUMNS_CREATE_PATH);
        assert_eq!(m.handler.guard, Guard::TenantAdminOnly);

        // registered after the parameter route
        let m = table.match_path("/purposes/create").unwrap();
        assert_eq!(m.pattern, PURPOSES_CREATE_PATH);
        assert!(m.params.is_empty());

        let m = table.match_path("/loginapps/plex_employee_app").unwrap();
        assert_eq!(m.handler.page, Page::PlexEmployeeApp);

        let m = table.match_path("/loginapps/app-1").unwrap();
        assert_eq!(m.handler.page, Page::PlexApp);
        assert_eq!(m.params.get("plexAppID"), Some("app-1"));
    }

    #[test]
    fn test_unregistered_userstore_path_falls_to_tenant_details() {
        let table = console_table().unwrap();
        let m = table.match_path(TENANTS_USERSTORE_PATH).unwrap();
        assert_eq!(m.pattern, TENANTS_DETAILS_PATH);
        assert_eq!(m.params.get("tenantID"), Some("userstore"));
    }

    #[test]
    fn test_home_and_unknown() {
        let table = console_table().unwrap();
        assert_eq!(table.match_path("/").unwrap().handler.page, Page::Home);
        assert!(table.match_path("/totally/unknown/path").is_none());
    }

    #[test]
    fn test_every_route_matches_its_own_shape() {
        let table = console_table().unwrap();
        for (pattern, handler) in console_routes() {
            let url = pattern
                .split('/')
                .map(|seg| if seg.starts_with(':') { "x1" } else { seg })
                .collect::<Vec<_>>()
                .join("/");
            let m = table.match_path(&url).unwrap();
            assert_eq!(m.pattern, *pattern, "url {url}");
            assert_eq!(m.handler, handler);
            assert!(m.params.iter().all(|(_, v)| v == "x1"));
        }
    }

    #[test]
    fn test_page_names() {
        let mut seen = HashSet::new();
        for page in Page::ALL {
            assert!(seen.insert(page.as_str()), "duplicate name {page}");
            assert_eq!(Page::from_name(page.as_str()), Some(*page));
        }
        assert_eq!(Page::from_name("no_such_page"), None);
        assert_eq!(Page::AccessorDetail.to_string(), "accessor_detail");
    }

    #[test]
    fn test_guard_default() {
        assert_eq!(Guard::default(), Guard::None);
        assert_eq!(Guard::TenantAdminOnly.to_string(), "tenant_admin_only");
    }
}
