use serde::{Deserialize, Serialize};

/// Marker substituted with the 1-based page number for each request.
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Fixed search filters sent with every page request.
///
/// Values are kept as the strings the API expects so the URL is rendered
/// exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default = "default_max_items")]
    pub max_items: u32,
    #[serde(default = "default_order")]
    pub order: String,
    #[serde(default = "default_center")]
    pub center: String,
    #[serde(default = "default_distance")]
    pub distance: u32,
    #[serde(default = "default_property_type")]
    pub property_type: String,
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default = "default_min_size")]
    pub min_size: u32,
    #[serde(default = "default_max_size")]
    pub max_size: u32,
    #[serde(default = "default_true")]
    pub elevator: bool,
    /// Omitted from the query when unset.
    #[serde(default)]
    pub air_conditioning: Option<bool>,
    #[serde(default = "default_preservation")]
    pub preservation: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
            order: default_order(),
            center: default_center(),
            distance: default_distance(),
            property_type: default_property_type(),
            sort: default_sort(),
            min_size: default_min_size(),
            max_size: default_max_size(),
            elevator: true,
            air_conditioning: None,
            preservation: default_preservation(),
            language: default_language(),
        }
    }
}

impl SearchConfig {
    /// Build the page URL template for `operation` against `search_endpoint`.
    ///
    /// The category is passed through unvalidated; an unknown value yields a
    /// URL the API rejects.
    pub fn build_url(&self, search_endpoint: &str, operation: &str) -> UrlTemplate {
        let mut url = format!(
            "{search_endpoint}?operation={operation}\
             &maxItems={}\
             &order={}\
             &center={}\
             &distance={}\
             &propertyType={}\
             &sort={}\
             &minSize={}\
             &maxSize={}\
             &numPage={PAGE_PLACEHOLDER}\
             &elevator={}",
            self.max_items,
            self.order,
            self.center,
            self.distance,
            self.property_type,
            self.sort,
            self.min_size,
            self.max_size,
            self.elevator,
        );
        if let Some(air_conditioning) = self.air_conditioning {
            url.push_str(&format!("&airConditioning={air_conditioning}"));
        }
        url.push_str(&format!(
            "&preservation={}&language={}",
            self.preservation, self.language
        ));
        UrlTemplate { raw: url }
    }
}

/// A search URL with exactly one page-number placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    raw: String,
}

impl UrlTemplate {
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn for_page(&self, page: u32) -> String {
        self.raw.replacen(PAGE_PLACEHOLDER, &page.to_string(), 1)
    }
}

fn default_max_items() -> u32 {
    50
}

fn default_order() -> String {
    "distance".into()
}

fn default_center() -> String {
    "39.4693441,-0.379561".into()
}

fn default_distance() -> u32 {
    1500 // meters
}

fn default_property_type() -> String {
    "homes".into()
}

fn default_sort() -> String {
    "asc".into()
}

fn default_min_size() -> u32 {
    100
}

fn default_max_size() -> u32 {
    160
}

fn default_true() -> bool {
    true
}

fn default_preservation() -> String {
    "good".into()
}

fn default_language() -> String {
    "en".into()
}
