//! REST clients for the Harness platform services
//!
//! One client per subsystem, all sharing a single [`RestClient`] (and thus
//! one connection pool). Clients are constructed once at process start and
//! handed to every tool handler; they hold no mutable state.

pub mod acl;
pub mod chaos;
pub mod delegate;
pub mod error;
pub mod loadtest;
pub mod principal;
pub mod resourcegroup;
pub mod rest;
pub mod scope;
pub mod scs;
pub mod secrets;
pub mod sei;
pub mod sto;
pub mod template;

pub use error::ClientError;
pub use rest::RestClient;
pub use scope::{Scope, ScopeError};

use crate::HarnessConfig;
use anyhow::Result;

/// Long-lived client handles, one per Harness subsystem.
pub struct Services {
    pub chaos: chaos::ChaosClient,
    pub principal: principal::PrincipalClient,
    pub acl: acl::AclClient,
    pub resource_groups: resourcegroup::ResourceGroupClient,
    pub secrets: secrets::SecretsClient,
    pub delegates: delegate::DelegateTokenClient,
    pub templates: template::TemplateClient,
    pub loadtest: loadtest::LoadTestClient,
    pub sei: sei::SeiClient,
    pub sto: sto::StoClient,
    pub scs: scs::ScsClient,
}

impl Services {
    /// Build all service clients against the configured gateway.
    pub fn new(config: &HarnessConfig) -> Result<Self> {
        let rest = RestClient::new(&config.base_url, &config.api_key)?;
        Ok(Self {
            chaos: chaos::ChaosClient::new(rest.clone()),
            principal: principal::PrincipalClient::new(rest.clone()),
            acl: acl::AclClient::new(rest.clone()),
            resource_groups: resourcegroup::ResourceGroupClient::new(rest.clone()),
            secrets: secrets::SecretsClient::new(rest.clone()),
            delegates: delegate::DelegateTokenClient::new(rest.clone()),
            templates: template::TemplateClient::new(rest.clone()),
            loadtest: loadtest::LoadTestClient::new(rest.clone()),
            sei: sei::SeiClient::new(rest.clone()),
            sto: sto::StoClient::new(rest.clone()),
            scs: scs::ScsClient::new(rest),
        })
    }
}
