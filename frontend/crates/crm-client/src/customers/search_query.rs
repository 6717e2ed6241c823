use url::form_urlencoded;

pub const SEARCH_PATH: &str = "/api/customers/search";

/// Parameters for the server-side customer search.
///
/// Values are trimmed and blank ones are dropped when the query string is
/// built; insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    params: Vec<(String, String)>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Add the parameter only when a value is present
    pub fn param_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Parameters that will actually be sent
    pub fn effective_params(&self) -> Vec<(&str, &str)> {
        self.params
            .iter()
            .map(|(name, value)| (name.as_str(), value.trim()))
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.effective_params().is_empty()
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.effective_params() {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }

    /// Request path including the query string
    pub fn path(&self) -> String {
        format!("{SEARCH_PATH}?{}", self.to_query_string())
    }
}
