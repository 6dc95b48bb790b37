use thiserror::Error;
use url::Url;

pub const DEFAULT_CLIENT_URL: &str = "https://giscus.app/client.js";
pub const DEFAULT_THEME: &str = "dark_protanopia";
pub const DEFAULT_LANG: &str = "en";

/// Validated Giscus embed configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscussionSettings {
    repo: String,
    repo_id: String,
    category: String,
    category_id: String,
    theme: String,
    lang: String,
    client_url: Url,
}

/// Raw values as read from the environment / CLI.
#[derive(Clone, Debug, Default)]
pub struct DiscussionSettingsDraft {
    pub repo: Option<String>,
    pub repo_id: Option<String>,
    pub category: Option<String>,
    pub category_id: Option<String>,
    pub theme: Option<String>,
    pub lang: Option<String>,
    pub client_url: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiscussionError {
    #[error("discussion is not configured; missing {}", missing.join(", "))]
    NotConfigured { missing: Vec<&'static str> },
    #[error("invalid discussion client URL: {0}")]
    InvalidClientUrl(String),
}

/// Environment variable names for the required settings, in draft field order.
pub const REQUIRED_ENV_VARS: [&str; 4] = [
    "COURSE_GISCUS_REPO",
    "COURSE_GISCUS_REPO_ID",
    "COURSE_GISCUS_CATEGORY",
    "COURSE_GISCUS_CATEGORY_ID",
];

impl DiscussionSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft.
    ///
    /// # Errors
    ///
    /// Returns `DiscussionError::NotConfigured` naming every missing variable,
    /// or `DiscussionError::InvalidClientUrl` if the script URL does not parse.
    pub fn validate(self) -> Result<DiscussionSettings, DiscussionError> {
        let required = [
            normalize_optional(self.repo),
            normalize_optional(self.repo_id),
            normalize_optional(self.category),
            normalize_optional(self.category_id),
        ];
        let missing: Vec<&'static str> = required
            .iter()
            .zip(REQUIRED_ENV_VARS)
            .filter(|(value, _)| value.is_none())
            .map(|(_, name)| name)
            .collect();
        if !missing.is_empty() {
            return Err(DiscussionError::NotConfigured { missing });
        }
        let [Some(repo), Some(repo_id), Some(category), Some(category_id)] = required else {
            return Err(DiscussionError::NotConfigured {
                missing: REQUIRED_ENV_VARS.to_vec(),
            });
        };

        let raw_url =
            normalize_optional(self.client_url).unwrap_or_else(|| DEFAULT_CLIENT_URL.to_string());
        let client_url =
            Url::parse(&raw_url).map_err(|_| DiscussionError::InvalidClientUrl(raw_url.clone()))?;

        Ok(DiscussionSettings {
            repo,
            repo_id,
            category,
            category_id,
            theme: normalize_optional(self.theme).unwrap_or_else(|| DEFAULT_THEME.to_string()),
            lang: normalize_optional(self.lang).unwrap_or_else(|| DEFAULT_LANG.to_string()),
            client_url,
        })
    }
}

impl DiscussionSettings {
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    #[must_use]
    pub fn repo_id(&self) -> &str {
        &self.repo_id
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    #[must_use]
    pub fn theme(&self) -> &str {
        &self.theme
    }

    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    #[must_use]
    pub fn client_url(&self) -> &Url {
        &self.client_url
    }

    /// `data-*` attributes for the client script, threads keyed by `term`.
    #[must_use]
    pub fn script_attributes(&self, term: &str) -> Vec<(&'static str, String)> {
        vec![
            ("data-repo", self.repo.clone()),
            ("data-repo-id", self.repo_id.clone()),
            ("data-category", self.category.clone()),
            ("data-category-id", self.category_id.clone()),
            ("data-mapping", "specific".to_string()),
            ("data-term", term.to_string()),
            ("data-strict", "0".to_string()),
            ("data-reactions-enabled", "1".to_string()),
            ("data-emit-metadata", "0".to_string()),
            ("data-input-position", "bottom".to_string()),
            ("data-theme", self.theme.clone()),
            ("data-lang", self.lang.clone()),
        ]
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
