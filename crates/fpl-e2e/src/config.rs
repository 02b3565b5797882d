//! Suite configuration.
//!
//! Endpoints and persona credentials come from the environment so the same
//! suite runs against local, AAT and demo stacks. Every value has a local
//! default; CI overrides via `E2E_*` variables.

use crate::result::{E2eError, E2eResult};
use serde::{Deserialize, Serialize};

/// Credentials for one user persona
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredentials {
    /// Login email
    pub email: String,
    /// Login password
    pub password: String,
}

impl UserCredentials {
    /// Create credentials
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// User personas the scenarios switch between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Persona {
    /// Local authority solicitor (case creator)
    LocalAuthority,
    /// HMCTS court admin
    HmctsAdmin,
    /// Gatekeeper
    Gatekeeper,
    /// Judge
    Judiciary,
}

impl Persona {
    /// All personas, in the order scenarios usually cycle through them
    pub const ALL: [Self; 4] = [
        Self::LocalAuthority,
        Self::HmctsAdmin,
        Self::Gatekeeper,
        Self::Judiciary,
    ];
}

/// Configuration for a suite run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Base URL of the case management frontend
    pub base_url: String,
    /// Local authority user
    pub local_authority: UserCredentials,
    /// HMCTS admin user
    pub hmcts_admin: UserCredentials,
    /// Gatekeeper user
    pub gatekeeper: UserCredentials,
    /// Judge user
    pub judiciary: UserCredentials,
    /// Sample document used for upload steps
    pub test_file: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3333".to_string(),
            local_authority: UserCredentials::new(
                "kurt@swansea.gov.uk",
                "Password12",
            ),
            hmcts_admin: UserCredentials::new("hmcts-admin@example.com", "Password12"),
            gatekeeper: UserCredentials::new("gatekeeper@mailnesia.com", "Password12"),
            judiciary: UserCredentials::new("judiciary@mailnesia.com", "Password12"),
            test_file: "fixtures/mockFile.txt".to_string(),
        }
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

impl SuiteConfig {
    /// Load configuration from `E2E_*` environment variables, falling back
    /// to local defaults.
    ///
    /// # Errors
    ///
    /// Returns [`E2eError::Config`] when the base URL is present but not an
    /// http(s) URL.
    pub fn from_env() -> E2eResult<Self> {
        let defaults = Self::default();
        let base_url = env_or("E2E_URL", &defaults.base_url);
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(E2eError::Config {
                message: format!("E2E_URL must be an http(s) URL, got '{base_url}'"),
            });
        }
        Ok(Self {
            base_url,
            local_authority: UserCredentials::new(
                env_or("E2E_LA_EMAIL", &defaults.local_authority.email),
                env_or("E2E_LA_PASSWORD", &defaults.local_authority.password),
            ),
            hmcts_admin: UserCredentials::new(
                env_or("E2E_ADMIN_EMAIL", &defaults.hmcts_admin.email),
                env_or("E2E_ADMIN_PASSWORD", &defaults.hmcts_admin.password),
            ),
            gatekeeper: UserCredentials::new(
                env_or("E2E_GATEKEEPER_EMAIL", &defaults.gatekeeper.email),
                env_or("E2E_GATEKEEPER_PASSWORD", &defaults.gatekeeper.password),
            ),
            judiciary: UserCredentials::new(
                env_or("E2E_JUDICIARY_EMAIL", &defaults.judiciary.email),
                env_or("E2E_JUDICIARY_PASSWORD", &defaults.judiciary.password),
            ),
            test_file: env_or("E2E_TEST_FILE", &defaults.test_file),
        })
    }

    /// Credentials for a persona
    #[must_use]
    pub fn user(&self, persona: Persona) -> &UserCredentials {
        match persona {
            Persona::LocalAuthority => &self.local_authority,
            Persona::HmctsAdmin => &self.hmcts_admin,
            Persona::Gatekeeper => &self.gatekeeper,
            Persona::Judiciary => &self.judiciary,
        }
    }

    /// URL of a case detail page
    #[must_use]
    pub fn case_details_url(&self, case_id: &str) -> String {
        format!("{}/cases/case-details/{case_id}", self.base_url)
    }

    /// URL of the case list
    #[must_use]
    pub fn case_list_url(&self) -> String {
        format!("{}/cases", self.base_url)
    }
}
