use reqtext_core::Environment;

/// The real process environment. Variables whose name or value is not valid
/// UTF-8 are not visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sees_process_variables() {
        let path = std::env::var("PATH").ok();
        assert_eq!(ProcessEnv.lookup("PATH"), path);
        if let Some(path) = path {
            assert!(ProcessEnv
                .vars()
                .iter()
                .any(|(k, v)| k == "PATH" && *v == path));
        }
    }

    #[test]
    fn missing_variable_is_none() {
        assert_eq!(ProcessEnv.lookup("REQTEXT_SURELY_UNSET_VARIABLE"), None);
    }
}
