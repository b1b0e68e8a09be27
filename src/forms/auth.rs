use serde::Deserialize;

/// Where visitors land after signing in when no return path was given.
pub const DEFAULT_NEXT: &str = "/dashboard";

/// Sign-in form posted by the login page.
///
/// Credentials are collected for show only; any values are accepted.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub next: Option<String>,
}

/// Resolve a requested return path to a local one.
///
/// Only absolute paths on this host are honoured (`/dashboard/catalog`);
/// anything else, including protocol-relative `//host` forms, falls back to
/// [`DEFAULT_NEXT`].
pub fn resolve_next(next: Option<&str>) -> String {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path.to_string()
        }
        _ => DEFAULT_NEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_local_paths() {
        assert_eq!(resolve_next(Some("/dashboard/catalog")), "/dashboard/catalog");
    }

    #[test]
    fn defaults_missing_or_foreign_targets() {
        assert_eq!(resolve_next(None), DEFAULT_NEXT);
        assert_eq!(resolve_next(Some("")), DEFAULT_NEXT);
        assert_eq!(resolve_next(Some("https://evil.example")), DEFAULT_NEXT);
        assert_eq!(resolve_next(Some("//evil.example")), DEFAULT_NEXT);
    }

    #[test]
    fn login_form_accepts_any_credentials() {
        let form: LoginForm = serde_urlencoded::from_str("email=&next=%2Fdashboard").unwrap();

        assert_eq!(form.email, "");
        assert_eq!(form.password, "");
        assert_eq!(form.next.as_deref(), Some("/dashboard"));
    }
}
