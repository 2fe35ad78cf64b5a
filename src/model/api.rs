use serde::{Deserialize, Serialize};

/// Collection envelope returned by the record store for list requests.
#[derive(Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub value: Vec<T>,
}

/// The response body when an error occurs with a record store request.
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: String,
    pub message: String,
}

/// Query options forwarded to the record store as an OData query string.
///
/// Only the options the application uses are represented: field selection,
/// ordering, and a result cap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub select: Vec<&'static str>,
    pub order_by: Vec<&'static str>,
    pub top: Option<u32>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, fields: &[&'static str]) -> Self {
        self.select = fields.to_vec();
        self
    }

    pub fn order_by(mut self, fields: &[&'static str]) -> Self {
        self.order_by = fields.to_vec();
        self
    }

    pub fn top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    /// Renders the options as `?$select=..&$orderby=..&$top=..`, or an empty
    /// string when no option is set.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();

        if !self.select.is_empty() {
            parts.push(format!("$select={}", self.select.join(",")));
        }
        if !self.order_by.is_empty() {
            parts.push(format!("$orderby={}", self.order_by.join(",")));
        }
        if let Some(top) = self.top {
            parts.push(format!("$top={}", top));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::QueryOptions;

    /// Expect an empty string when no options are set
    #[test]
    fn renders_nothing_without_options() {
        assert_eq!(QueryOptions::new().to_query_string(), "");
    }

    /// Expect all set options joined in select, orderby, top order
    #[test]
    fn renders_all_options() {
        let options = QueryOptions::new()
            .select(&["fullname", "emailaddress1"])
            .order_by(&["fullname"])
            .top(100);

        assert_eq!(
            options.to_query_string(),
            "?$select=fullname,emailaddress1&$orderby=fullname&$top=100"
        );
    }

    /// Expect omitted options to be skipped entirely
    #[test]
    fn skips_unset_options() {
        let options = QueryOptions::new().top(5);

        assert_eq!(options.to_query_string(), "?$top=5");
    }
}
